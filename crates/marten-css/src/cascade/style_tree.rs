//! Arena of resolved styles, one node per styled document node.

use marten_dom::NodeId;
use serde::Serialize;
use strum::{EnumCount, IntoEnumIterator};

use crate::error::InvariantViolation;
use crate::style::{
    BorderStyle, Clear, Color, Direction, Display, Float, FontSize, FontStyle, FontVariant,
    FontWeight, Length, LineHeight, ListStylePosition, ListStyleType, Overflow, Position, Property,
    PropertyList, PropertyRegistry, Side, Specified, StyleValue, TextAlign, TextTransform,
    VerticalAlign, Visibility, WhiteSpace,
};

/// Index of a [`StyleNode`] in its [`StyleTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct StyleId(pub usize);

/// Resolved style of one document, element or text node.
#[derive(Debug, Clone)]
pub struct StyleNode {
    /// The document node this style belongs to.
    pub node: NodeId,
    /// Style of the nearest styled ancestor.
    pub parent: Option<StyleId>,
    /// Styles of styled children, in document order.
    pub children: Vec<StyleId>,
    declared: PropertyList,
    values: Vec<StyleValue>,
    inherited: Vec<bool>,
}

macro_rules! keyword_accessor {
    ($(#[$doc:meta])* $name:ident, $property:ident, $variant:ident, $ty:ty) => {
        $(#[$doc])*
        #[must_use]
        pub fn $name(&self) -> $ty {
            match self.value(Property::$property) {
                StyleValue::$variant(v) => *v,
                other => mismatch(Property::$property, other),
            }
        }
    };
}

impl StyleNode {
    /// The winning declarations before inheritance and defaults.
    #[must_use]
    pub const fn declared(&self) -> &PropertyList {
        &self.declared
    }

    /// Resolved value of `property`.
    ///
    /// # Panics
    ///
    /// If the style has not been resolved, which cannot happen for a node
    /// handed out by [`StyleTree`].
    #[must_use]
    pub fn value(&self, property: Property) -> &StyleValue {
        self.values.get(property.index()).unwrap_or_else(|| {
            InvariantViolation::new("cascade", format!("'{property}' was never resolved")).raise()
        })
    }

    /// Whether the value of `property` was copied from the parent.
    #[must_use]
    pub fn is_inherited(&self, property: Property) -> bool {
        self.inherited.get(property.index()).copied().unwrap_or(false)
    }

    /// Every resolved value with its inherited flag, in property order.
    pub fn computed(&self) -> impl Iterator<Item = (Property, &StyleValue, bool)> {
        Property::iter().map(|p| (p, self.value(p), self.is_inherited(p)))
    }

    keyword_accessor!(
        /// `display`
        display, Display, Display, Display
    );
    keyword_accessor!(
        /// `position`
        position, Position, Position, Position
    );
    keyword_accessor!(
        /// `float`
        float, Float, Float, Float
    );
    keyword_accessor!(
        /// `clear`
        clear, Clear, Clear, Clear
    );
    keyword_accessor!(
        /// `white-space`
        white_space, WhiteSpace, WhiteSpace, WhiteSpace
    );
    keyword_accessor!(
        /// `text-align`
        text_align, TextAlign, TextAlign, TextAlign
    );
    keyword_accessor!(
        /// `text-transform`
        text_transform, TextTransform, TextTransform, TextTransform
    );
    keyword_accessor!(
        /// `direction`
        direction, Direction, Direction, Direction
    );
    keyword_accessor!(
        /// `overflow`
        overflow, Overflow, Overflow, Overflow
    );
    keyword_accessor!(
        /// `visibility`
        visibility, Visibility, Visibility, Visibility
    );
    keyword_accessor!(
        /// `vertical-align`
        vertical_align, VerticalAlign, VerticalAlign, VerticalAlign
    );
    keyword_accessor!(
        /// `list-style-type`
        list_style_type, ListStyleType, ListStyleType, ListStyleType
    );
    keyword_accessor!(
        /// `list-style-position`
        list_style_position, ListStylePosition, ListStylePosition, ListStylePosition
    );
    keyword_accessor!(
        /// `font-style`
        font_style, FontStyle, FontStyle, FontStyle
    );
    keyword_accessor!(
        /// `font-variant`
        font_variant, FontVariant, FontVariant, FontVariant
    );
    keyword_accessor!(
        /// `font-size`, possibly relative to the parent.
        font_size, FontSize, FontSize, FontSize
    );
    keyword_accessor!(
        /// `line-height`
        line_height, LineHeight, LineHeight, LineHeight
    );

    /// `font-weight` as a number; relative weights are resolved.
    #[must_use]
    pub fn font_weight(&self) -> u16 {
        match self.value(Property::FontWeight) {
            StyleValue::FontWeight(FontWeight::Weight(w)) => *w,
            other => mismatch(Property::FontWeight, other),
        }
    }

    /// `font-family` in preference order.
    #[must_use]
    pub fn font_family(&self) -> &[String] {
        match self.value(Property::FontFamily) {
            StyleValue::FontFamily(families) => families,
            other => mismatch(Property::FontFamily, other),
        }
    }

    /// The foreground color.
    #[must_use]
    pub fn color(&self) -> Color {
        self.color_of(Property::Color)
    }

    /// `background-color`
    #[must_use]
    pub fn background_color(&self) -> Color {
        self.color_of(Property::BackgroundColor)
    }

    /// `border-<side>-color`; `currentcolor` resolves to [`StyleNode::color`].
    #[must_use]
    pub fn border_color(&self, side: Side) -> Color {
        self.color_of(Property::border_color(side))
    }

    fn color_of(&self, property: Property) -> Color {
        match self.value(property) {
            StyleValue::Color(c) => *c,
            StyleValue::CurrentColor if property != Property::Color => self.color(),
            other => mismatch(property, other),
        }
    }

    /// `border-<side>-style`
    #[must_use]
    pub fn border_style(&self, side: Side) -> BorderStyle {
        let property = Property::border_style(side);
        match self.value(property) {
            StyleValue::BorderStyle(style) => *style,
            other => mismatch(property, other),
        }
    }

    /// Used `border-<side>-width`: zero when the style is `none` or `hidden`.
    #[must_use]
    pub fn border_width(&self, side: Side) -> Length {
        if !self.border_style(side).is_visible() {
            return Length::ZERO;
        }
        self.length(Property::border_width(side))
    }

    /// `margin-<side>`; `None` for `auto`.
    #[must_use]
    pub fn margin(&self, side: Side) -> Option<Length> {
        self.length_or_auto(Property::margin(side))
    }

    /// `padding-<side>`
    #[must_use]
    pub fn padding(&self, side: Side) -> Length {
        self.length(Property::padding(side))
    }

    /// The inset for `side` (`top`, `left`...); `None` for `auto`.
    #[must_use]
    pub fn offset(&self, side: Side) -> Option<Length> {
        self.length_or_auto(Property::offset(side))
    }

    /// `width`; `None` for `auto`.
    #[must_use]
    pub fn width(&self) -> Option<Length> {
        self.length_or_auto(Property::Width)
    }

    /// `height`; `None` for `auto`.
    #[must_use]
    pub fn height(&self) -> Option<Length> {
        self.length_or_auto(Property::Height)
    }

    /// `min-width`
    #[must_use]
    pub fn min_width(&self) -> Length {
        self.length(Property::MinWidth)
    }

    /// `min-height`
    #[must_use]
    pub fn min_height(&self) -> Length {
        self.length(Property::MinHeight)
    }

    /// `max-width`; `None` for `none`.
    #[must_use]
    pub fn max_width(&self) -> Option<Length> {
        self.length_or_auto(Property::MaxWidth)
    }

    /// `max-height`; `None` for `none`.
    #[must_use]
    pub fn max_height(&self) -> Option<Length> {
        self.length_or_auto(Property::MaxHeight)
    }

    /// `letter-spacing`; `normal` is zero.
    #[must_use]
    pub fn letter_spacing(&self) -> Length {
        self.length(Property::LetterSpacing)
    }

    /// `word-spacing`; `normal` is zero.
    #[must_use]
    pub fn word_spacing(&self) -> Length {
        self.length(Property::WordSpacing)
    }

    /// `text-indent`
    #[must_use]
    pub fn text_indent(&self) -> Length {
        self.length(Property::TextIndent)
    }

    fn length(&self, property: Property) -> Length {
        match self.value(property) {
            StyleValue::Length(l) => *l,
            other => mismatch(property, other),
        }
    }

    fn length_or_auto(&self, property: Property) -> Option<Length> {
        match self.value(property) {
            StyleValue::Length(l) => Some(*l),
            StyleValue::Auto | StyleValue::Unbounded => None,
            other => mismatch(property, other),
        }
    }
}

#[track_caller]
fn mismatch(property: Property, value: &StyleValue) -> ! {
    InvariantViolation::new(
        "cascade",
        format!("'{property}' holds a value of the wrong type: {value}"),
    )
    .raise()
}

/// Arena of [`StyleNode`]s in document tree order; the document node's
/// style is first.
#[derive(Debug, Clone, Default)]
pub struct StyleTree {
    nodes: Vec<StyleNode>,
    by_node: Vec<Option<StyleId>>,
}

impl StyleTree {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            by_node: vec![None; capacity],
        }
    }

    /// Append a node with its declared values. Parents must be pushed before
    /// their children.
    pub(crate) fn push(
        &mut self,
        node: NodeId,
        parent: Option<StyleId>,
        declared: PropertyList,
    ) -> StyleId {
        let id = StyleId(self.nodes.len());
        self.nodes.push(StyleNode {
            node,
            parent,
            children: Vec::new(),
            declared,
            values: Vec::new(),
            inherited: Vec::new(),
        });
        if let Some(parent) = parent {
            self.get_mut(parent).children.push(id);
        }
        if self.by_node.len() <= node.0 {
            self.by_node.resize(node.0 + 1, None);
        }
        self.by_node[node.0] = Some(id);
        id
    }

    /// [§ 7 Inheritance](https://www.w3.org/TR/css-cascade-3/#inheriting)
    ///
    /// "The inherited value of a property on an element is the computed value
    /// of the property on the element's parent element. For the root element,
    /// which has no parent element, the inherited value is the initial value
    /// of the property."
    pub(crate) fn resolve(&mut self, registry: &PropertyRegistry) {
        for index in 0..self.nodes.len() {
            let (resolved, rest) = self.nodes.split_at_mut(index);
            let node = &mut rest[0];
            let parent = node.parent.and_then(|p| resolved.get(p.0));

            let mut values = Vec::with_capacity(Property::COUNT);
            let mut inherited = Vec::with_capacity(Property::COUNT);
            for property in Property::iter() {
                let info = registry.info(property);
                let from_parent = parent.map(|p| p.value(property));
                let (value, is_inherited) = match node.declared.value(property) {
                    Some(Specified::Value(value)) => (value.clone(), false),
                    Some(Specified::Inherit) => match from_parent {
                        Some(value) => (value.clone(), true),
                        None => (info.default.clone(), false),
                    },
                    None => match from_parent {
                        Some(value) if info.inherited => (value.clone(), true),
                        _ => (info.default.clone(), false),
                    },
                };
                values.push(value);
                inherited.push(is_inherited);
            }

            // `color: currentcolor` means the parent's color.
            let color = Property::Color.index();
            if values[color] == StyleValue::CurrentColor {
                values[color] = StyleValue::Color(parent.map_or(Color::BLACK, StyleNode::color));
                inherited[color] = parent.is_some();
            }

            // Relative weights are resolved once, so children inherit a number.
            let weight = Property::FontWeight.index();
            if let StyleValue::FontWeight(w @ (FontWeight::Bolder | FontWeight::Lighter)) =
                values[weight]
            {
                let parent_weight = parent.map_or(400, StyleNode::font_weight);
                values[weight] = StyleValue::FontWeight(FontWeight::Weight(w.resolve(parent_weight)));
            }

            node.values = values;
            node.inherited = inherited;
        }
    }

    /// Style of the document node.
    ///
    /// # Panics
    ///
    /// If the tree is empty.
    #[must_use]
    pub fn root(&self) -> StyleId {
        if self.nodes.is_empty() {
            InvariantViolation::new("cascade", "style tree has no root").raise();
        }
        StyleId(0)
    }

    /// Style node by id.
    ///
    /// # Panics
    ///
    /// If `id` is out of range.
    #[must_use]
    pub fn get(&self, id: StyleId) -> &StyleNode {
        self.nodes.get(id.0).unwrap_or_else(|| {
            InvariantViolation::new("cascade", format!("style id {} out of range", id.0)).raise()
        })
    }

    fn get_mut(&mut self, id: StyleId) -> &mut StyleNode {
        let len = self.nodes.len();
        self.nodes.get_mut(id.0).unwrap_or_else(|| {
            InvariantViolation::new("cascade", format!("style id {} out of {len}", id.0)).raise()
        })
    }

    /// Style id of a document node; `None` for comments and unknown ids.
    #[must_use]
    pub fn style_for(&self, node: NodeId) -> Option<StyleId> {
        self.by_node.get(node.0).copied().flatten()
    }

    /// Style of a document node.
    #[must_use]
    pub fn node_style(&self, node: NodeId) -> Option<&StyleNode> {
        self.style_for(node).map(|id| self.get(id))
    }

    /// Number of style nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True if nothing was styled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All style nodes with their ids, in document order.
    pub fn iter(&self) -> impl Iterator<Item = (StyleId, &StyleNode)> {
        self.nodes.iter().enumerate().map(|(i, n)| (StyleId(i), n))
    }
}
