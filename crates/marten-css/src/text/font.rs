//! Font description and the metrics interface used for text measurement.
//!
//! [§ 10.8 Line height calculations](https://www.w3.org/TR/CSS2/visudet.html#line-height)
//!
//! "CSS assumes that every font has font metrics that specify a
//! characteristic height above the baseline and a depth below it."

use serde::Serialize;

use crate::style::FontStyle;

/// The font a run of text is set in, as far as measurement cares.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FontDescriptor {
    /// [§ 15.3 Font family](https://www.w3.org/TR/CSS2/fonts.html#font-family-prop)
    ///
    /// Family names in preference order.
    pub families: Vec<String>,
    /// Font size in px.
    pub size: f32,
    /// Numeric weight, 100 to 900.
    pub weight: u16,
    /// Normal, italic or oblique.
    pub style: FontStyle,
}

impl FontDescriptor {
    /// A regular-weight upright font of the given size with no family preference.
    #[must_use]
    pub const fn new(size: f32) -> Self {
        Self {
            families: Vec::new(),
            size,
            weight: 400,
            style: FontStyle::Normal,
        }
    }
}

/// A point on a glyph-advance path: the pen position before a glyph.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct GlyphPoint {
    /// Horizontal pen offset from the start of the run.
    pub x: f32,
    /// Vertical pen offset from the baseline.
    pub y: f32,
}

/// Font metrics interface for text measurement during layout.
///
/// Implementors provide per-character advances and the vertical metrics of
/// a font. The layout engine and the reflow pass only ever measure through
/// this trait, so a rasterizer-backed provider and the deterministic
/// [`FixedWidthMetrics`] are interchangeable.
pub trait FontMetrics {
    /// Advance width of a single character.
    fn char_advance(&self, font: &FontDescriptor, ch: char) -> f32;

    /// [§ 10.8.1 Leading and half-leading](https://www.w3.org/TR/CSS2/visudet.html#leading)
    ///
    /// Height of the font's em box: ascent plus descent.
    fn line_height(&self, font: &FontDescriptor) -> f32;

    /// Depth below the baseline.
    fn descent(&self, font: &FontDescriptor) -> f32;

    /// Cumulative pen positions for `text`: one point before each character
    /// plus one after the last, so the final `x` is the run's advance.
    fn glyph_path(&self, font: &FontDescriptor, text: &str) -> Vec<GlyphPoint> {
        let mut path = Vec::with_capacity(text.len() + 1);
        path.push(GlyphPoint::default());
        let mut x = 0.0;
        for ch in text.chars() {
            x += self.char_advance(font, ch);
            path.push(GlyphPoint { x, y: 0.0 });
        }
        path
    }

    /// Bounding box of `text` as `(width, height)`.
    fn measure(&self, font: &FontDescriptor, text: &str) -> (f32, f32) {
        let width = self
            .glyph_path(font, text)
            .last()
            .map_or(0.0, |point| point.x);
        (width, self.line_height(font))
    }
}

/// Every character advances by the same fraction of the font size.
///
/// Without font data this is a fair approximation of Latin body text, and
/// it makes line breaking exactly predictable in tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedWidthMetrics {
    em_ratio: f32,
}

impl FixedWidthMetrics {
    /// Average advance of a proportional Latin face, as a fraction of the em.
    pub const DEFAULT_EM_RATIO: f32 = 0.6;

    /// Metrics where each character advances `em_ratio × size`.
    #[must_use]
    pub const fn new(em_ratio: f32) -> Self {
        Self { em_ratio }
    }

    /// The advance per character as a fraction of the font size.
    #[must_use]
    pub const fn em_ratio(&self) -> f32 {
        self.em_ratio
    }
}

impl Default for FixedWidthMetrics {
    fn default() -> Self {
        Self::new(Self::DEFAULT_EM_RATIO)
    }
}

impl FontMetrics for FixedWidthMetrics {
    fn char_advance(&self, font: &FontDescriptor, _ch: char) -> f32 {
        self.em_ratio * font.size
    }

    fn line_height(&self, font: &FontDescriptor) -> f32 {
        font.size
    }

    fn descent(&self, font: &FontDescriptor) -> f32 {
        font.size * 0.2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_path_has_one_point_per_boundary() {
        let metrics = FixedWidthMetrics::new(0.5);
        let font = FontDescriptor::new(20.0);
        let path = metrics.glyph_path(&font, "abc");
        assert_eq!(path.len(), 4);
        assert!((path[3].x - 30.0).abs() < f32::EPSILON);
        let (width, height) = metrics.measure(&font, "abc");
        assert!((width - 30.0).abs() < f32::EPSILON);
        assert!((height - 20.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_empty_text_measures_zero() {
        let metrics = FixedWidthMetrics::default();
        let font = FontDescriptor::new(16.0);
        assert_eq!(metrics.glyph_path(&font, "").len(), 1);
        assert!(metrics.measure(&font, "").0.abs() < f32::EPSILON);
    }
}
