//! Fixed-point layout units.
//!
//! Every distance in the box tree is a signed integer count of 1/65536 of a
//! layout pixel, so repeated layout passes never accumulate floating-point
//! drift. Conversion from CSS lengths happens once, when a style value is
//! used.

use crate::style::{FontSize, Length, LengthContext};

/// A distance in 1/65536 px.
pub type FixedPoint = i32;

/// Units per layout pixel.
pub const FIXED_POINT_SCALE: FixedPoint = 65536;

/// Convert px to fixed point, rounding to the nearest unit.
#[must_use]
pub fn px_to_fixed(px: f32) -> FixedPoint {
    (f64::from(px) * f64::from(FIXED_POINT_SCALE)).round() as FixedPoint
}

/// Convert fixed point back to px.
#[must_use]
pub fn fixed_to_px(value: FixedPoint) -> f32 {
    (f64::from(value) / f64::from(FIXED_POINT_SCALE)) as f32
}

/// Resolve a length straight to fixed point.
#[must_use]
pub fn length_to_fixed(length: Length, ctx: &LengthContext, percent_base: FixedPoint) -> FixedPoint {
    px_to_fixed(length.to_px(ctx, fixed_to_px(percent_base)))
}

/// [§ 15.7 Font size](https://www.w3.org/TR/CSS2/fonts.html#font-size-props)
///
/// "Note that an application may reinterpret an explicit size, depending on
/// the context." Relative sizes and `em`, `ex` and `%` lengths refer to the
/// parent's font size; keywords scale `medium`.
#[must_use]
pub fn resolve_font_size(size: FontSize, parent_px: f32, medium_px: f32, dpi: f32) -> f32 {
    const STEP: f32 = 1.2;
    match size {
        FontSize::Absolute(keyword) => medium_px * keyword.scale(),
        FontSize::Larger => parent_px * STEP,
        FontSize::Smaller => parent_px / STEP,
        FontSize::Length(length) => {
            let ctx = LengthContext {
                dpi,
                font_size: parent_px,
            };
            length.to_px(&ctx, parent_px).max(0.0)
        }
    }
}
