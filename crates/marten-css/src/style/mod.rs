//! Property table and typed values
//!
//! - [CSS 2.1 § 4.3 Values](https://www.w3.org/TR/CSS2/syndata.html#values)
//! - [CSS 2.1 Appendix F Full property table](https://www.w3.org/TR/CSS2/propidx.html)
//!
//! Every declaration is parsed through the [`PropertyRegistry`] into a
//! [`Specified`] value for one or more longhand [`Property`]s. Values keep
//! relative units; they are resolved against font size, dpi and containing
//! block during layout.

pub mod color;
pub mod keywords;
pub mod length;
pub mod property;
pub mod property_list;
pub mod registry;
pub mod value;

pub use color::{Color, parse_color};
pub use keywords::{
    AbsoluteSize, BorderStyle, Clear, Direction, Display, Float, FontStyle, FontVariant,
    ListStylePosition, ListStyleType, Overflow, Position, TextAlign, TextTransform, VerticalAlign,
    Visibility, WhiteSpace,
};
pub use length::{Length, LengthContext, LengthUnit, parse_length};
pub use property::{Property, Side};
pub use property_list::{PropertyEntry, PropertyList};
pub use registry::{PropertyInfo, PropertyRegistry, four_edges};
pub use value::{FontSize, FontWeight, LineHeight, Specified, StyleValue};
