//! Screenplay to document mapping.

use masterscript_core::{Character, DialogueLine, Scene, Screenplay};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{Align, Block, BlockKind, Document, Line, TextStyle};

/// Presentation settings shared by the renderer and the text exporter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Product name shown in headers
    pub brand: String,
    /// Attribution line; when blank the screenplay's own `writer` is used
    pub attribution: String,
    /// Subtitle under the cover title
    pub tagline: String,
    /// Year printed in the closing block
    pub year: Option<i32>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            brand: "MasterScript Gen".to_string(),
            attribution: "Md A Salam With MasterScript Gen".to_string(),
            tagline: "প্রফেশনাল গ্রামীণ চিত্রনাট্য ও সংলাপ".to_string(),
            year: None,
        }
    }
}

impl RenderOptions {
    /// Attribution for a screenplay: configured line first, then `writer`.
    pub fn attribution_for<'a>(&'a self, screenplay: &'a Screenplay) -> &'a str {
        if self.attribution.trim().is_empty() {
            screenplay.writer.as_str()
        } else {
            self.attribution.as_str()
        }
    }
}

const RULE: &str = "━━━━━━━━━━";

/// Render a screenplay into a document.
///
/// Sections appear in a fixed order: cover, summary, roster, scenes, closing.
/// Empty sections are omitted; the function never fails.
#[instrument(skip_all, fields(title = %screenplay.title, scenes = screenplay.scenes.len()))]
pub fn render(screenplay: &Screenplay, options: &RenderOptions) -> Document {
    let mut blocks = vec![cover(screenplay, options)];

    if !screenplay.summary.trim().is_empty() {
        blocks.push(section_heading("কাহিনী সংক্ষেপ"));
        blocks.push(Block::new(
            BlockKind::Summary,
            vec![Line::new(&screenplay.summary, TextStyle::Body)],
        ));
    }

    if !screenplay.characters.is_empty() {
        blocks.push(section_heading("চরিত্র পরিচিতি"));
        blocks.extend(screenplay.characters.iter().map(character_card));
    }

    if !screenplay.scenes.is_empty() {
        blocks.push(section_heading("মূল চিত্রনাট্য"));
        for scene in &screenplay.scenes {
            blocks.extend(scene_blocks(scene));
        }
    }

    blocks.push(closing(screenplay, options));

    Document {
        title: screenplay.title.clone(),
        blocks,
    }
}

fn cover(screenplay: &Screenplay, options: &RenderOptions) -> Block {
    let mut lines = vec![
        Line::centered(&screenplay.title, TextStyle::Title),
        Line::centered(RULE, TextStyle::Marker),
    ];
    if !options.tagline.is_empty() {
        lines.push(Line::centered(&options.tagline, TextStyle::Emphasis));
    }
    lines.push(Line::centered("কাহিনী ও চিত্রনাট্য", TextStyle::Label));
    lines.push(Line::centered(
        options.attribution_for(screenplay),
        TextStyle::Heading,
    ));
    lines.push(Line::centered(
        format!("{} Premium Copy", options.brand),
        TextStyle::Muted,
    ));
    Block::new(BlockKind::Cover, lines).unbreakable().break_after()
}

fn section_heading(text: &str) -> Block {
    Block::new(
        BlockKind::SectionHeading,
        vec![Line::new(text, TextStyle::Heading)],
    )
    .unbreakable()
    .with_next()
}

fn character_card(character: &Character) -> Block {
    let mut lines = vec![Line::new(
        format!("{} · {} বছর", character.name, character.age),
        TextStyle::Subheading,
    )];
    if !character.description.is_empty() {
        lines.push(Line::new(&character.description, TextStyle::Body).indented(2));
    }
    if !character.costume.is_empty() {
        lines.push(
            Line::new(format!("সাজসজ্জা: {}", character.costume), TextStyle::Emphasis).indented(2),
        );
    }
    Block::new(BlockKind::Character, lines).unbreakable()
}

fn scene_blocks(scene: &Scene) -> Vec<Block> {
    let mut header = vec![Line::new(
        format!("SCENE {}  {}", scene.scene_number, scene.location),
        TextStyle::Subheading,
    )];
    if !scene.time.is_empty() {
        header.push(Line::new(&scene.time, TextStyle::Label));
    }
    if !scene.action.is_empty() {
        header.push(Line::new(format!("( {} )", scene.action), TextStyle::Emphasis).indented(2));
    }

    let mut blocks = vec![
        Block::new(BlockKind::SceneHeader, header)
            .unbreakable()
            .with_next(),
    ];
    blocks.extend(scene.dialogues.iter().map(dialogue_block));

    if let Some(note) = scene.note() {
        blocks.push(
            Block::new(
                BlockKind::Note,
                vec![
                    Line::new("PRODUCTION NOTES", TextStyle::Label).indented(2),
                    Line::new(note, TextStyle::Emphasis).indented(2),
                ],
            )
            .unbreakable(),
        );
    }
    blocks
}

fn dialogue_block(line: &DialogueLine) -> Block {
    let mut lines = vec![Line::centered(&line.character, TextStyle::Speaker)];
    if let Some(cue) = line.cue() {
        lines.push(Line::centered(format!("({cue})"), TextStyle::Cue));
    }
    lines.push(Line {
        align: Align::Center,
        ..Line::new(&line.text, TextStyle::Body)
    });
    Block::new(BlockKind::Dialogue, lines).unbreakable()
}

fn closing(screenplay: &Screenplay, options: &RenderOptions) -> Block {
    let footer = match options.year {
        Some(year) => format!("{} © {}", options.attribution_for(screenplay), year),
        None => options.attribution_for(screenplay).to_string(),
    };
    Block::new(
        BlockKind::Closing,
        vec![
            Line::centered("THE END", TextStyle::Title),
            Line::centered(footer, TextStyle::Muted),
        ],
    )
    .unbreakable()
}

#[cfg(test)]
mod tests {
    use super::*;
    use masterscript_core::{CharacterBuilder, DialogueLineBuilder, SceneBuilder, ScreenplayBuilder};

    fn screenplay() -> Screenplay {
        ScreenplayBuilder::default()
            .title("Dispute")
            .writer("Gemini")
            .summary("A quarrel.")
            .characters(vec![
                CharacterBuilder::default()
                    .name("Salam")
                    .age(20u32)
                    .description("quick")
                    .costume("lungi")
                    .build()
                    .unwrap(),
            ])
            .scenes(vec![
                SceneBuilder::default()
                    .scene_number(1u32)
                    .location("Stall")
                    .time("Morning")
                    .action("Crowd gathers")
                    .dialogues(vec![
                        DialogueLineBuilder::default()
                            .character("Salam")
                            .text("No more credit!")
                            .parenthetical("angry")
                            .build()
                            .unwrap(),
                    ])
                    .editing_note("Close-up")
                    .build()
                    .unwrap(),
            ])
            .build()
            .unwrap()
    }

    fn kinds(doc: &Document) -> Vec<BlockKind> {
        doc.blocks.iter().map(|b| b.kind).collect()
    }

    #[test]
    fn sections_in_fixed_order() {
        let doc = render(&screenplay(), &RenderOptions::default());
        assert_eq!(
            kinds(&doc),
            vec![
                BlockKind::Cover,
                BlockKind::SectionHeading,
                BlockKind::Summary,
                BlockKind::SectionHeading,
                BlockKind::Character,
                BlockKind::SectionHeading,
                BlockKind::SceneHeader,
                BlockKind::Dialogue,
                BlockKind::Note,
                BlockKind::Closing,
            ]
        );
    }

    #[test]
    fn cover_uses_configured_attribution_over_writer() {
        let doc = render(&screenplay(), &RenderOptions::default());
        let cover = doc.blocks_of(BlockKind::Cover).next().unwrap();
        assert!(cover.lines.iter().any(|l| l.text == "Md A Salam With MasterScript Gen"));
        assert!(cover.page_break_after);
    }

    #[test]
    fn blank_attribution_falls_back_to_writer() {
        let options = RenderOptions {
            attribution: String::new(),
            ..RenderOptions::default()
        };
        let doc = render(&screenplay(), &options);
        let cover = doc.blocks_of(BlockKind::Cover).next().unwrap();
        assert!(cover.lines.iter().any(|l| l.text == "Gemini"));
    }

    #[test]
    fn dialogue_shows_cue_between_speaker_and_text() {
        let doc = render(&screenplay(), &RenderOptions::default());
        let dialogue = doc.blocks_of(BlockKind::Dialogue).next().unwrap();
        let texts: Vec<&str> = dialogue.lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["Salam", "(angry)", "No more credit!"]);
        assert!(dialogue.keep_together);
    }

    #[test]
    fn closing_includes_year_when_set() {
        let options = RenderOptions {
            year: Some(2024),
            ..RenderOptions::default()
        };
        let doc = render(&screenplay(), &options);
        let closing = doc.blocks.last().unwrap();
        assert_eq!(closing.lines[1].text, "Md A Salam With MasterScript Gen © 2024");
    }
}
