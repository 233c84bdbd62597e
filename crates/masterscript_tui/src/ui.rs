//! UI rendering for TUI.

use masterscript_render::{Align, Document, TextStyle};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::{AppState, Controller, NoticeLevel};

/// Draw the main UI.
#[tracing::instrument(skip_all)]
pub fn draw(f: &mut Frame, controller: &Controller) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(4), // Concept input
            Constraint::Min(0),    // Screenplay
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    draw_header(f, chunks[0]);
    draw_input(f, controller, chunks[1]);
    draw_body(f, controller, chunks[2]);
    draw_status_bar(f, controller, chunks[3]);

    if let Some(notice) = controller.notice() {
        let color = match notice.level {
            NoticeLevel::Info => Color::Green,
            NoticeLevel::Error => Color::Red,
        };
        let area = centered_rect(60, 5, f.area());
        let popup = Paragraph::new(notice.message.as_str())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color))
                    .title(" Esc ")
                    .title_alignment(Alignment::Right),
            )
            .wrap(Wrap { trim: true })
            .alignment(Alignment::Center);
        f.render_widget(Clear, area);
        f.render_widget(popup, area);
    }
}

fn draw_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("MasterScript Gen  ·  চিত্রনাট্য প্যানেল")
        .block(Block::default().borders(Borders::ALL))
        .style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    f.render_widget(header, area);
}

fn draw_input(f: &mut Frame, controller: &Controller, area: Rect) {
    let (title, border) = match controller.validation() {
        Some(message) => (message.to_string(), Style::default().fg(Color::Red)),
        None => ("কনসেপ্ট".to_string(), Style::default()),
    };

    let text = if controller.concept().is_empty() {
        Span::styled(
            "আপনার নাটকের মূল কাহিনী বা ভাবনাটি এখানে লিখুন...",
            Style::default().fg(Color::DarkGray),
        )
    } else {
        Span::raw(controller.concept())
    };

    let input = Paragraph::new(Line::from(vec![text, Span::raw("▏")]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .title(title),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(input, area);
}

fn draw_body(f: &mut Frame, controller: &Controller, area: Rect) {
    let block = Block::default().borders(Borders::ALL);

    match controller.state() {
        AppState::Idle => {
            let idle = Paragraph::new("Ready to Create")
                .block(block)
                .style(Style::default().fg(Color::DarkGray).add_modifier(Modifier::BOLD))
                .alignment(Alignment::Center);
            f.render_widget(idle, area);
        }
        AppState::Generating { .. } => {
            let message = controller.status_message().unwrap_or("...");
            let loading = Paragraph::new(message)
                .block(block)
                .style(Style::default().fg(Color::Yellow))
                .alignment(Alignment::Center);
            f.render_widget(loading, area);
        }
        AppState::Failed(message) => {
            let failed = Paragraph::new(message.as_str())
                .block(block)
                .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true });
            f.render_widget(failed, area);
        }
        AppState::Ready(screenplay) => {
            let text = controller
                .document()
                .map(document_text)
                .unwrap_or_default();
            let view = Paragraph::new(text)
                .block(block.title(screenplay.title.as_str()))
                .wrap(Wrap { trim: false })
                .scroll((controller.scroll(), 0));
            f.render_widget(view, area);
        }
    }
}

fn draw_status_bar(f: &mut Frame, controller: &Controller, area: Rect) {
    let help = match controller.state() {
        AppState::Generating { .. } => "Ctrl+N: Reset | Ctrl+C: Quit",
        AppState::Ready(_) => {
            "Enter: Generate | Ctrl+R: Surprise | Ctrl+T: TXT | Ctrl+P: PDF | PgUp/PgDn: Scroll | Ctrl+N: Reset | Esc: Quit"
        }
        _ => "Enter: Generate | Ctrl+R: Surprise | Ctrl+N: Reset | Esc: Quit",
    };
    let status = if controller.exporting() {
        format!("পিডিএফ তৈরি হচ্ছে... | {help}")
    } else {
        help.to_string()
    };
    let bar = Paragraph::new(status)
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::Gray));
    f.render_widget(bar, area);
}

/// Terminal style for a document text style.
pub(crate) fn style_for(style: TextStyle) -> Style {
    match style {
        TextStyle::Title => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
        TextStyle::Heading => Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        TextStyle::Subheading => Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        TextStyle::Speaker => Style::default().add_modifier(Modifier::BOLD),
        TextStyle::Body => Style::default(),
        TextStyle::Emphasis => Style::default().add_modifier(Modifier::ITALIC),
        TextStyle::Cue => Style::default()
            .fg(Color::Gray)
            .add_modifier(Modifier::ITALIC),
        TextStyle::Label => Style::default().fg(Color::Magenta),
        TextStyle::Muted => Style::default().fg(Color::DarkGray),
        TextStyle::Marker => Style::default().fg(Color::Yellow),
    }
}

/// Styled terminal text for a rendered document, one blank line between blocks.
pub(crate) fn document_text(document: &Document) -> Text<'static> {
    let mut lines = Vec::new();
    for (index, block) in document.blocks.iter().enumerate() {
        if index > 0 {
            lines.push(Line::default());
        }
        for line in &block.lines {
            let content = format!("{}{}", " ".repeat(usize::from(line.indent)), line.text);
            let alignment = match line.align {
                Align::Left => Alignment::Left,
                Align::Center => Alignment::Center,
            };
            lines.push(Line::styled(content, style_for(line.style)).alignment(alignment));
        }
    }
    Text::from(lines)
}

/// Rectangle of `percent_x` width and `height` rows centered in `area`.
fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use masterscript_render::{Block as DocBlock, BlockKind, Line as DocLine};

    #[test]
    fn document_text_separates_blocks() {
        let document = Document {
            title: "t".into(),
            blocks: vec![
                DocBlock::new(BlockKind::Summary, vec![DocLine::new("a", TextStyle::Body)]),
                DocBlock::new(
                    BlockKind::Dialogue,
                    vec![DocLine::centered("b", TextStyle::Speaker)],
                ),
            ],
        };
        let text = document_text(&document);
        assert_eq!(text.lines.len(), 3);
        assert_eq!(text.lines[2].alignment, Some(Alignment::Center));
    }

    #[test]
    fn indent_becomes_leading_spaces() {
        let document = Document {
            title: "t".into(),
            blocks: vec![DocBlock::new(
                BlockKind::Character,
                vec![DocLine::new("desc", TextStyle::Body).indented(2)],
            )],
        };
        let text = document_text(&document);
        assert_eq!(text.lines[0].to_string(), "  desc");
    }
}
