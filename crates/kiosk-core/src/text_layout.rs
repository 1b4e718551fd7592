//! Greedy paragraph wrapping against a measured pixel width.
//!
//! Text is split into paragraphs on `\n` and into words on single spaces, so
//! runs of spaces survive as empty words. Each word is appended together with
//! one trailing space, and the candidate line must measure strictly less than
//! the maximum width. When it does not, the current line is emitted as it is,
//! `y` advances by one line and the rejected word starts the next line. A word
//! wider than the maximum on its own therefore gets a line to itself and
//! overflows; at the start of a paragraph it leaves a blank line above it.
//! Blank lines are not returned but still take up their vertical space.

/// Smallest extra advance after a paragraph, keeping paragraph breaks
/// distinguishable from line breaks.
pub const MIN_PARAGRAPH_GAP: f32 = 1.0;

/// Vertical spacing between lines and paragraphs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineSpacing {
    /// Advance between two lines of the same paragraph.
    pub line_height: f32,
    /// Extra advance added after the last line of a paragraph. Never below
    /// [`MIN_PARAGRAPH_GAP`].
    pub paragraph_gap: f32,
}

impl LineSpacing {
    pub fn new(line_height: f32, paragraph_gap: f32) -> Self {
        Self {
            line_height: line_height.max(0.0),
            paragraph_gap: paragraph_gap.max(MIN_PARAGRAPH_GAP),
        }
    }

    /// Spacing derived from a font's line size plus fixed paddings, matching
    /// `line_size + line_pad` inside a paragraph and `line_size + paragraph_pad`
    /// after it.
    pub fn from_line_size(line_size: f32, line_pad: f32, paragraph_pad: f32) -> Self {
        Self::new(line_size + line_pad, paragraph_pad - line_pad)
    }

    pub fn paragraph_advance(&self) -> f32 {
        self.line_height + self.paragraph_gap
    }
}

/// One wrapped line and its offset from the layout origin.
#[derive(Clone, Debug, PartialEq)]
pub struct LaidLine {
    pub text: String,
    pub y: f32,
    /// Index of the source paragraph.
    pub paragraph: usize,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParagraphLayout {
    pub lines: Vec<LaidLine>,
    /// Total vertical advance consumed, including the final paragraph gap.
    pub height: f32,
}

/// Wrap `text` into lines narrower than `max_width` as reported by `measure`.
pub fn wrap_paragraphs<F>(text: &str, max_width: f32, spacing: LineSpacing, measure: F) -> ParagraphLayout
where
    F: Fn(&str) -> f32,
{
    let mut lines = Vec::new();
    let mut y = 0.0f32;

    for (paragraph, body) in text.split('\n').enumerate() {
        let mut line = String::new();
        for word in body.split(' ') {
            let candidate = format!("{line}{word} ");
            if measure(&candidate) < max_width {
                line = candidate;
            } else {
                push_line(&mut lines, std::mem::take(&mut line), y, paragraph);
                y += spacing.line_height;
                line = format!("{word} ");
            }
        }
        push_line(&mut lines, line, y, paragraph);
        y += spacing.paragraph_advance();
    }

    ParagraphLayout { lines, height: y }
}

fn push_line(lines: &mut Vec<LaidLine>, text: String, y: f32, paragraph: usize) {
    // Space-only lines draw nothing.
    if !text.trim_matches(' ').is_empty() {
        lines.push(LaidLine { text, y, paragraph });
    }
}
