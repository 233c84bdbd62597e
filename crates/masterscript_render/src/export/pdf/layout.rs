//! Wrapping and pagination.

use crate::{Align, Block, Document, Line, TextStyle};

use super::PdfOptions;

/// Millimetres per typographic point.
const MM_PER_PT: f32 = 0.3528;
/// Estimated glyph advance as a fraction of the font size.
const GLYPH_WIDTH_EM: f32 = 0.55;
/// Line height as a multiple of the font size.
const LINE_SPACING: f32 = 1.4;
/// Vertical space after every block, in millimetres.
const BLOCK_GAP_MM: f32 = 3.0;

/// A line with its final position on a page.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    /// Text after wrapping
    pub text: String,
    /// Typographic role
    pub style: TextStyle,
    /// Font size in points
    pub size_pt: f32,
    /// Distance from the left page edge in millimetres
    pub x_mm: f32,
    /// Baseline distance from the top page edge in millimetres
    pub y_mm: f32,
}

/// One page of placed lines.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Page {
    /// Lines in drawing order
    pub lines: Vec<PlacedLine>,
}

/// Font size for a style, relative to the base size.
pub(crate) fn font_size(style: TextStyle, base_pt: f32) -> f32 {
    let factor = match style {
        TextStyle::Title => 2.2,
        TextStyle::Heading => 1.5,
        TextStyle::Subheading => 1.25,
        TextStyle::Speaker => 1.1,
        TextStyle::Body | TextStyle::Emphasis | TextStyle::Marker => 1.0,
        TextStyle::Cue => 0.85,
        TextStyle::Label => 0.8,
        TextStyle::Muted => 0.75,
    };
    base_pt * factor
}

/// Converts millimetre measurements to whole dots and back.
#[derive(Debug, Clone, Copy)]
struct Ruler {
    dots_per_mm: f32,
}

impl Ruler {
    fn new(options: &PdfOptions) -> Self {
        let scale = if options.scale > 0.0 { options.scale } else { 1.0 };
        Self {
            dots_per_mm: scale / MM_PER_PT,
        }
    }

    fn snap(&self, mm: f32) -> f32 {
        (mm * self.dots_per_mm).ceil() / self.dots_per_mm
    }

    fn glyph_width(&self, size_pt: f32) -> f32 {
        self.snap(size_pt * MM_PER_PT * GLYPH_WIDTH_EM)
    }

    fn line_height(&self, size_pt: f32) -> f32 {
        self.snap(size_pt * MM_PER_PT * LINE_SPACING)
    }
}

/// A wrapped line before it gets a page position.
#[derive(Debug, Clone)]
struct Row {
    text: String,
    style: TextStyle,
    size_pt: f32,
    x_mm: f32,
    height_mm: f32,
}

/// Greedy word wrap into at most `max_chars` characters per row.
fn wrap(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut rows = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();

        while word.len() > max_chars {
            if current_len > 0 {
                rows.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let rest = word.split_off(max_chars);
            rows.push(word.into_iter().collect());
            word = rest;
        }

        let needed = if current_len == 0 {
            word.len()
        } else {
            current_len + 1 + word.len()
        };
        if needed > max_chars {
            rows.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current_len += word.len();
        current.extend(word);
    }

    if current_len > 0 || rows.is_empty() {
        rows.push(current);
    }
    rows
}

fn rows_for_line(line: &Line, options: &PdfOptions, ruler: Ruler) -> Vec<Row> {
    let size_pt = font_size(line.style, options.base_font_size);
    let glyph = ruler.glyph_width(size_pt);
    let indent_mm = f32::from(line.indent) * ruler.glyph_width(options.base_font_size);
    let available = (options.content_width_mm() - indent_mm).max(glyph);
    let max_chars = (available / glyph).floor() as usize;
    let height_mm = ruler.line_height(size_pt);

    wrap(&line.text, max_chars)
        .into_iter()
        .map(|text| {
            let x_mm = match line.align {
                Align::Left => options.margins.left + indent_mm,
                Align::Center => {
                    let width = text.chars().count() as f32 * glyph;
                    options.margins.left + ((options.content_width_mm() - width) / 2.0).max(0.0)
                }
            };
            Row {
                text,
                style: line.style,
                size_pt,
                x_mm,
                height_mm,
            }
        })
        .collect()
}

fn rows_for_block(block: &Block, options: &PdfOptions, ruler: Ruler) -> Vec<Row> {
    block
        .lines
        .iter()
        .flat_map(|line| rows_for_line(line, options, ruler))
        .collect()
}

struct Cursor<'a> {
    options: &'a PdfOptions,
    pages: Vec<Page>,
    used_mm: f32,
}

impl<'a> Cursor<'a> {
    fn new(options: &'a PdfOptions) -> Self {
        Self {
            options,
            pages: vec![Page::default()],
            used_mm: 0.0,
        }
    }

    fn remaining(&self) -> f32 {
        self.options.content_height_mm() - self.used_mm
    }

    fn at_top(&self) -> bool {
        self.used_mm <= 0.0
    }

    fn new_page(&mut self) {
        self.pages.push(Page::default());
        self.used_mm = 0.0;
    }

    fn place(&mut self, row: Row) {
        if row.height_mm > self.remaining() && !self.at_top() {
            self.new_page();
        }
        self.used_mm += row.height_mm;
        let y_mm = self.options.margins.top + self.used_mm;
        if let Some(page) = self.pages.last_mut() {
            page.lines.push(PlacedLine {
                text: row.text,
                style: row.style,
                size_pt: row.size_pt,
                x_mm: row.x_mm,
                y_mm,
            });
        }
    }

    fn gap(&mut self) {
        self.used_mm = (self.used_mm + BLOCK_GAP_MM).min(self.options.content_height_mm());
    }
}

/// Wrap and paginate a document.
///
/// Lines are wrapped greedily against an estimated glyph width. With
/// `avoid_breaks` set, a `keep_together` block that fits on a single page
/// starts a new page rather than being split, and a `keep_with_next` block
/// also reserves room for the block after it (its first row when that block
/// may split). Blocks taller than a page are split row by row.
pub fn layout(document: &Document, options: &PdfOptions) -> Vec<Page> {
    let ruler = Ruler::new(options);
    let rows: Vec<Vec<Row>> = document
        .blocks
        .iter()
        .map(|block| rows_for_block(block, options, ruler))
        .collect();

    let heights: Vec<f32> = rows
        .iter()
        .map(|block_rows| block_rows.iter().map(|r| r.height_mm).sum())
        .collect();
    let first_heights: Vec<f32> = rows
        .iter()
        .map(|block_rows| block_rows.first().map(|r| r.height_mm).unwrap_or(0.0))
        .collect();

    let mut cursor = Cursor::new(options);
    let last = document.blocks.len().saturating_sub(1);

    for (index, (block, block_rows)) in document.blocks.iter().zip(rows).enumerate() {
        if block_rows.is_empty() {
            continue;
        }

        if options.avoid_breaks && block.keep_together {
            let mut needed = heights[index];
            if block.keep_with_next {
                let first_next = first_heights.get(index + 1).copied().unwrap_or(0.0);
                needed += BLOCK_GAP_MM
                    + match document.blocks.get(index + 1) {
                        Some(next) if next.keep_together => heights[index + 1],
                        _ => first_next,
                    };
                // a chain taller than a page only keeps the first row of its successor
                if needed > options.content_height_mm() {
                    needed = heights[index] + BLOCK_GAP_MM + first_next;
                }
            }
            if needed <= options.content_height_mm() && needed > cursor.remaining() {
                cursor.new_page();
            }
        }

        for row in block_rows {
            cursor.place(row);
        }
        cursor.gap();

        if block.page_break_after && index < last {
            cursor.new_page();
        }
    }

    cursor.pages
}
