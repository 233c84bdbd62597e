//! Structured visual document produced by the renderer.

/// Typographic role of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
pub enum TextStyle {
    /// Cover and closing title
    Title,
    /// Section heading
    Heading,
    /// Card or scene heading
    Subheading,
    /// Dialogue speaker name
    Speaker,
    /// Running text
    Body,
    /// Action lines and wardrobe notes
    Emphasis,
    /// Delivery cue under a speaker
    Cue,
    /// Small caps label ("PRODUCTION NOTES")
    Label,
    /// De-emphasized footer text
    Muted,
    /// Decorative rule
    Marker,
}

/// Horizontal placement of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Align {
    /// Flush left, honoring the indent
    #[default]
    Left,
    /// Centered in the content area
    Center,
}

/// One logical line of text. Wrapping is left to the output device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// Text content
    pub text: String,
    /// Typographic role
    pub style: TextStyle,
    /// Horizontal placement
    pub align: Align,
    /// Left indent in character cells
    pub indent: u16,
}

impl Line {
    /// Left-aligned line.
    pub fn new(text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            text: text.into(),
            style,
            align: Align::Left,
            indent: 0,
        }
    }

    /// Centered line.
    pub fn centered(text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            align: Align::Center,
            ..Self::new(text, style)
        }
    }

    /// Same line with a left indent.
    pub fn indented(mut self, indent: u16) -> Self {
        self.indent = indent;
        self
    }
}

/// Which part of the screenplay a block belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum BlockKind {
    /// Title page
    Cover,
    /// Heading that opens a section
    SectionHeading,
    /// Synopsis paragraph
    Summary,
    /// One roster card
    Character,
    /// Scene number, location, time and action
    SceneHeader,
    /// One dialogue line with speaker and cue
    Dialogue,
    /// Production note of a scene
    Note,
    /// Closing block
    Closing,
}

/// A group of lines laid out together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Section the block belongs to
    pub kind: BlockKind,
    /// Lines in display order
    pub lines: Vec<Line>,
    /// Paginators must not split this block across pages when it fits on one
    pub keep_together: bool,
    /// Paginators should keep this block on the same page as the next one
    pub keep_with_next: bool,
    /// Start a new page after this block
    pub page_break_after: bool,
}

impl Block {
    /// A block that may be split freely.
    pub fn new(kind: BlockKind, lines: Vec<Line>) -> Self {
        Self {
            kind,
            lines,
            keep_together: false,
            keep_with_next: false,
            page_break_after: false,
        }
    }

    /// Mark the block as non-splittable.
    pub fn unbreakable(mut self) -> Self {
        self.keep_together = true;
        self
    }

    /// Keep the block on the same page as its successor.
    pub fn with_next(mut self) -> Self {
        self.keep_with_next = true;
        self
    }

    /// Force a page break after the block.
    pub fn break_after(mut self) -> Self {
        self.page_break_after = true;
        self
    }
}

/// Rendered screenplay, ready for display or pagination.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    /// Screenplay title, used for PDF metadata
    pub title: String,
    /// Blocks in reading order
    pub blocks: Vec<Block>,
}

impl Document {
    /// True when there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.blocks.iter().all(|b| b.lines.is_empty())
    }

    /// Blocks of one kind, in order.
    pub fn blocks_of(&self, kind: BlockKind) -> impl Iterator<Item = &Block> {
        self.blocks.iter().filter(move |b| b.kind == kind)
    }

    /// All line texts joined with newlines, one blank line between blocks.
    pub fn plain_text(&self) -> String {
        self.blocks
            .iter()
            .map(|b| {
                b.lines
                    .iter()
                    .map(|l| l.text.as_str())
                    .collect::<Vec<_>>()
                    .join("\n")
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}
