//! Breaking a text node into lines of words.
//!
//! [§ 5 Line Breaking and Word Boundaries](https://www.w3.org/TR/css-text-3/#line-breaking)
//!
//! "When inline-level content is laid out into lines, it is broken across
//! line boxes. Such a break is called a line break."
//!
//! Text is first transformed per `text-transform`, then split into words
//! and forced breaks according to `white-space`. Lines are produced on
//! demand by [`Reflow::next_line`] so the caller can change the available
//! width between lines, as it must when floats narrow the band.

use super::font::{FontDescriptor, FontMetrics, GlyphPoint};
use crate::style::{TextAlign, TextTransform, WhiteSpace};

/// The inherited text properties reflow depends on, resolved to px.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    /// The font words are measured in.
    pub font: FontDescriptor,
    /// Space collapsing, newline handling and wrapping.
    pub white_space: WhiteSpace,
    /// Case transformation applied before breaking.
    pub text_transform: TextTransform,
    /// Only `justify` matters to reflow itself.
    pub text_align: TextAlign,
    /// [§ 16.4 Spacing](https://www.w3.org/TR/CSS2/text.html#spacing-props)
    ///
    /// "This property specifies spacing behavior between text characters."
    pub letter_spacing: f32,
    /// "This property specifies spacing behavior between words."
    pub word_spacing: f32,
}

impl TextStyle {
    /// Normal white space, no transform, left aligned, no extra spacing.
    #[must_use]
    pub const fn new(font: FontDescriptor) -> Self {
        Self {
            font,
            white_space: WhiteSpace::Normal,
            text_transform: TextTransform::None,
            text_align: TextAlign::Left,
            letter_spacing: 0.0,
            word_spacing: 0.0,
        }
    }
}

/// A measured word placed on a line.
#[derive(Debug, Clone, PartialEq)]
pub struct Word {
    /// The word's characters, including any preserved spaces it carries.
    pub text: String,
    /// Total advance, letter spacing included.
    pub advance: f32,
    /// Space between the previous item on the line and this word.
    pub gap_before: f32,
    /// Pen positions relative to the start of the word; one more point than
    /// characters.
    pub glyph_path: Vec<GlyphPoint>,
}

/// Why a line ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnd {
    /// The next word did not fit.
    Wrap,
    /// A preserved newline.
    Break,
    /// The text ran out.
    Exhausted,
}

/// A run of words that fit one line.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    /// Words in order.
    pub words: Vec<Word>,
    /// The unstretched inter-word space.
    pub space_advance: f32,
    /// What closed the line.
    pub end: LineEnd,
}

impl Line {
    /// Width of the words and the gaps between them.
    #[must_use]
    pub fn width(&self) -> f32 {
        self.words.iter().map(|w| w.gap_before + w.advance).sum()
    }

    /// Whether no word was placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The words joined by single spaces where they had a gap.
    #[must_use]
    pub fn text(&self) -> String {
        let mut out = String::new();
        for word in &self.words {
            if word.gap_before > 0.0 && !out.is_empty() {
                out.push(' ');
            }
            out.push_str(&word.text);
        }
        out
    }

    /// [§ 16.2 Alignment](https://www.w3.org/TR/CSS2/text.html#alignment-prop)
    ///
    /// "If an element has a computed value for 'text-align' of 'justify', the
    /// UA may stretch the inline boxes by adjusting word spacing."
    ///
    /// Widens every gap equally so the line fills `available`. A line with
    /// no gaps, or one that already overflows, is left alone.
    pub fn justify(&mut self, available: f32) {
        let gaps = self.words.iter().filter(|w| w.gap_before > 0.0).count();
        let slack = available - self.width();
        if gaps == 0 || slack <= 0.0 {
            return;
        }
        let extra = slack / gaps as f32;
        for word in self.words.iter_mut().filter(|w| w.gap_before > 0.0) {
            word.gap_before += extra;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Piece {
    Word { text: String, space_before: bool },
    Break,
}

/// Lazy line breaker over one text string.
pub struct Reflow<'a> {
    pieces: Vec<Piece>,
    next: usize,
    style: &'a TextStyle,
    metrics: &'a dyn FontMetrics,
    space_advance: f32,
    trailing_space: bool,
}

impl<'a> Reflow<'a> {
    /// Transform and split `text` ready for breaking.
    #[must_use]
    pub fn new(text: &str, style: &'a TextStyle, metrics: &'a dyn FontMetrics) -> Self {
        let transformed = transform_text(text, style.text_transform);
        let (pieces, trailing_space) = split_pieces(&transformed, style.white_space);
        let space_advance = metrics.char_advance(&style.font, ' ') + style.word_spacing;
        Self {
            pieces,
            next: 0,
            style,
            metrics,
            space_advance,
            trailing_space,
        }
    }

    /// Treat the text as if it began with a space; used when the previous
    /// inline content ended in collapsible white space.
    #[must_use]
    pub fn with_leading_space(mut self, leading: bool) -> Self {
        if leading {
            if let Some(Piece::Word { space_before, .. }) = self.pieces.first_mut() {
                *space_before = true;
            }
        }
        self
    }

    /// Advance of the inter-word space, word spacing included.
    #[must_use]
    pub const fn space_advance(&self) -> f32 {
        self.space_advance
    }

    /// Whether the text ended in white space that may separate it from
    /// whatever follows.
    #[must_use]
    pub const fn ends_with_space(&self) -> bool {
        self.trailing_space
    }

    /// Whether every word and break has been handed out.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.next >= self.pieces.len()
    }

    /// Advance of the next word, if the next piece is a word.
    #[must_use]
    pub fn next_word_advance(&self) -> Option<f32> {
        match self.pieces.get(self.next) {
            Some(Piece::Word { text, .. }) => Some(self.measure(text).0),
            Some(Piece::Break) | None => None,
        }
    }

    /// Pack words onto a line `available` wide.
    ///
    /// `line_is_empty` says whether the caller's line already holds content
    /// from elsewhere. On an empty line the first word is always placed, even
    /// if it overflows, and its leading space is dropped. On a non-empty line
    /// the result may have no words and end in [`LineEnd::Wrap`], meaning the
    /// caller should close its line and ask again.
    ///
    /// Returns `None` once the text is exhausted.
    pub fn next_line(&mut self, available: f32, line_is_empty: bool) -> Option<Line> {
        if self.is_finished() {
            return None;
        }

        let wraps = self.style.white_space.wraps();
        let mut words: Vec<Word> = Vec::new();
        let mut width = 0.0;

        while let Some(piece) = self.pieces.get(self.next) {
            let (text, space_before) = match piece {
                Piece::Break => {
                    self.next += 1;
                    return Some(self.line(words, LineEnd::Break));
                }
                Piece::Word { text, space_before } => (text, *space_before),
            };

            // STEP 1: A leading space at the very start of a line collapses.
            let first_on_line = words.is_empty() && line_is_empty;
            let gap_before = if space_before && !first_on_line {
                self.space_advance
            } else {
                0.0
            };

            // STEP 2: Measure with letter spacing.
            let (advance, glyph_path) = self.measure(text);

            // STEP 3: Wrap if the word would overflow, unless it would be
            // alone on its line.
            if wraps && !first_on_line && width + gap_before + advance > available {
                return Some(self.line(words, LineEnd::Wrap));
            }

            width += gap_before + advance;
            words.push(Word {
                text: text.clone(),
                advance,
                gap_before,
                glyph_path,
            });
            self.next += 1;
        }

        Some(self.line(words, LineEnd::Exhausted))
    }

    const fn line(&self, words: Vec<Word>, end: LineEnd) -> Line {
        Line {
            words,
            space_advance: self.space_advance,
            end,
        }
    }

    fn measure(&self, text: &str) -> (f32, Vec<GlyphPoint>) {
        let mut path = self.metrics.glyph_path(&self.style.font, text);
        let spacing = self.style.letter_spacing;
        for (i, point) in path.iter_mut().enumerate() {
            point.x += i as f32 * spacing;
        }
        let advance = path.last().map_or(0.0, |point| point.x);
        (advance, path)
    }
}

/// Break `text` into lines no wider than `width`, justifying every line that
/// ended by wrapping when the style asks for it.
#[must_use]
pub fn reflow_text(
    text: &str,
    style: &TextStyle,
    width: f32,
    metrics: &dyn FontMetrics,
) -> Vec<Line> {
    let mut reflow = Reflow::new(text, style, metrics);
    let mut lines = Vec::new();
    while let Some(mut line) = reflow.next_line(width, true) {
        if style.text_align == TextAlign::Justify && line.end == LineEnd::Wrap {
            line.justify(width);
        }
        lines.push(line);
    }
    lines
}

/// [§ 16.5 Capitalization](https://www.w3.org/TR/CSS2/text.html#caps-prop)
///
/// "capitalize: Puts the first character of each word in uppercase; other
/// characters are unaffected."
#[must_use]
pub fn transform_text(text: &str, transform: TextTransform) -> String {
    match transform {
        TextTransform::None => text.to_owned(),
        TextTransform::Uppercase => text.to_uppercase(),
        TextTransform::Lowercase => text.to_lowercase(),
        TextTransform::Capitalize => {
            let mut out = String::with_capacity(text.len());
            let mut at_word_start = true;
            for ch in text.chars() {
                if is_space(ch) {
                    at_word_start = true;
                    out.push(ch);
                } else if at_word_start && ch.is_alphanumeric() {
                    out.extend(ch.to_uppercase());
                    at_word_start = false;
                } else {
                    out.push(ch);
                }
            }
            out
        }
    }
}

const fn is_space(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\r' | '\x0C')
}

/// [§ 4 White Space Processing](https://www.w3.org/TR/css-text-3/#white-space-processing)
///
/// Split into words and forced breaks. Collapsing modes reduce every run of
/// white space to a flag on the following word. Preserving modes keep all
/// but one space of a run as a prefix of the following word, and all of
/// them at the start of a line. Returns whether the text ended in white
/// space.
fn split_pieces(text: &str, white_space: WhiteSpace) -> (Vec<Piece>, bool) {
    let collapse = white_space.collapses_spaces();
    let newlines = white_space.breaks_at_newlines();

    let mut pieces = Vec::new();
    let mut word = String::new();
    let mut word_space_before = false;
    let mut pending = String::new();
    let mut at_line_start = true;
    let mut after_break = false;

    fn flush(pieces: &mut Vec<Piece>, word: &mut String, space_before: bool) {
        if !word.is_empty() {
            pieces.push(Piece::Word {
                text: core::mem::take(word),
                space_before,
            });
        }
    }

    for ch in text.chars() {
        if ch == '\n' && newlines {
            flush(&mut pieces, &mut word, word_space_before);
            pieces.push(Piece::Break);
            pending.clear();
            at_line_start = true;
            after_break = true;
            continue;
        }
        if is_space(ch) {
            flush(&mut pieces, &mut word, word_space_before);
            pending.push(if ch == '\t' && !collapse { '\t' } else { ' ' });
            continue;
        }

        if word.is_empty() {
            if pending.is_empty() {
                word_space_before = false;
            } else if collapse {
                word_space_before = !after_break;
            } else if at_line_start {
                word.push_str(&pending);
                word_space_before = false;
            } else {
                word.push_str(&pending[1..]);
                word_space_before = true;
            }
            pending.clear();
            at_line_start = false;
            after_break = false;
        }
        word.push(ch);
    }
    flush(&mut pieces, &mut word, word_space_before);

    (pieces, !pending.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(pieces: &[Piece]) -> Vec<(&str, bool)> {
        pieces
            .iter()
            .filter_map(|p| match p {
                Piece::Word { text, space_before } => Some((text.as_str(), *space_before)),
                Piece::Break => None,
            })
            .collect()
    }

    #[test]
    fn test_normal_collapses_runs_and_newlines() {
        let (pieces, trailing) = split_pieces(" a \n\t b  ", WhiteSpace::Normal);
        assert_eq!(words(&pieces), vec![("a", true), ("b", true)]);
        assert!(!pieces.contains(&Piece::Break));
        assert!(trailing);
    }

    #[test]
    fn test_pre_keeps_spaces_and_breaks() {
        let (pieces, _) = split_pieces("  a   b\nc", WhiteSpace::Pre);
        assert_eq!(
            pieces,
            vec![
                Piece::Word {
                    text: "  a".to_owned(),
                    space_before: false
                },
                Piece::Word {
                    text: "  b".to_owned(),
                    space_before: true
                },
                Piece::Break,
                Piece::Word {
                    text: "c".to_owned(),
                    space_before: false
                },
            ]
        );
    }

    #[test]
    fn test_pre_line_drops_spaces_after_break() {
        let (pieces, _) = split_pieces("a  \n   b", WhiteSpace::PreLine);
        assert_eq!(pieces[1], Piece::Break);
        assert_eq!(words(&pieces), vec![("a", false), ("b", false)]);
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(
            transform_text("hello (big) world", TextTransform::Capitalize),
            "Hello (Big) World"
        );
        assert_eq!(transform_text("MiXed", TextTransform::Lowercase), "mixed");
    }
}
