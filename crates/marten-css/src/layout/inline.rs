//! Inline formatting: line boxes, text runs, inline elements and
//! inline-blocks.
//!
//! [§ 9.4.2 Inline formatting contexts](https://www.w3.org/TR/CSS2/visuren.html#inline-formatting)
//!
//! "In an inline formatting context, boxes are laid out horizontally, one
//! after the other, beginning at the top of a containing block."
//!
//! A line is opened lazily when the first piece of content arrives and
//! closed when content no longer fits. Horizontal alignment, justification
//! and vertical placement all happen when the line closes, once its content
//! and height are known.

use core::mem;

use marten_dom::{NodeId, NodeType};

use super::block::{Placement, Sizing, is_absolute, is_float, is_inline_box};
use super::box_model::{EdgeSizes, Rect};
use super::box_tree::{BoxId, BoxKind, Glyph, Slot, TextRun};
use super::units::{FixedPoint, fixed_to_px, px_to_fixed};
use super::{Containing, FontExtents, LayoutEngine};
use crate::cascade::StyleId;
use crate::style::{Color, Display, Position, TextAlign};
use crate::text::{Line, LineEnd, Reflow};

/// An inline element whose children are being laid out.
#[derive(Debug)]
struct OpenInline {
    node: NodeId,
    style: StyleId,
    padding: EdgeSizes,
    border: EdgeSizes,
    margin: EdgeSizes,
    /// Whether its first fragment, the one with the left edges, exists.
    started: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ItemKind {
    Text,
    Fragment,
    Atomic,
}

/// A box on the open line waiting for vertical placement.
#[derive(Debug)]
struct LineItem {
    id: BoxId,
    kind: ItemKind,
    /// Height above the baseline that counts towards the line height.
    ascent: FixedPoint,
    /// Depth below the baseline that counts towards the line height.
    descent: FixedPoint,
    /// Distance from the box's top edge down to the baseline.
    top: FixedPoint,
    /// Relative offset already applied to an atomic box.
    relative: (FixedPoint, FixedPoint),
}

/// [§ 9.4.2](https://www.w3.org/TR/CSS2/visuren.html#inline-formatting)
///
/// "The rectangular area that contains the boxes that form a line is called
/// a line box."
#[derive(Debug)]
struct OpenLine {
    id: BoxId,
    band_left: FixedPoint,
    band_right: FixedPoint,
    cursor: FixedPoint,
    /// This line's fragments of the open inline elements, outermost first,
    /// with the x where each one's content starts.
    parents: Vec<(BoxId, FixedPoint)>,
    items: Vec<LineItem>,
    /// Start of every inter-word gap, for justification.
    gaps: Vec<FixedPoint>,
    /// Whether words or atomic boxes have been placed.
    has_content: bool,
}

/// Line cursor shared by everything laid out in one inline formatting
/// context.
#[derive(Debug)]
struct LineState {
    container: BoxId,
    container_style: StyleId,
    cb: Containing,
    left: FixedPoint,
    right: FixedPoint,
    /// Top of the open line, or of the next one.
    y: FixedPoint,
    first_line: bool,
    indent: FixedPoint,
    strut: FontExtents,
    text_align: TextAlign,
    /// The last text ended in collapsible white space.
    pending_space: bool,
    open: Vec<OpenInline>,
    /// Floats met mid-line; placed below the line once it closes.
    deferred: Vec<(NodeId, StyleId)>,
    line: Option<OpenLine>,
}

impl LineState {
    fn current_parent(&self) -> Option<BoxId> {
        self.line
            .as_ref()
            .map(|line| line.parents.last().map_or(line.id, |&(id, _)| id))
    }
}

impl LayoutEngine<'_> {
    /// Lay `items` out in lines inside `container`. Returns the height of
    /// the lines.
    pub(super) fn layout_inline(
        &mut self,
        container: BoxId,
        items: &[NodeId],
        cb: Containing,
        extra_indent: FixedPoint,
    ) -> FixedPoint {
        let (style_id, content) = {
            let b = self.tree.get(container);
            (b.style, b.dimensions.content)
        };
        let style = self.style(style_id);

        // [§ 16.1 Indentation](https://www.w3.org/TR/CSS2/text.html#indentation-prop)
        //
        // "This property specifies the indentation of the first line of text
        // in a block container."
        let indent = self.resolve(style_id, style.text_indent(), content.width) + extra_indent;

        let mut state = LineState {
            container,
            container_style: style_id,
            cb,
            left: content.x,
            right: content.right(),
            y: content.y,
            first_line: true,
            indent,
            strut: self.font_extents(style_id),
            text_align: style.text_align(),
            pending_space: false,
            open: Vec::new(),
            deferred: Vec::new(),
            line: None,
        };
        for &item in items {
            self.inline_node(&mut state, item);
        }
        self.close_line(&mut state, false);
        self.place_deferred_floats(&mut state);
        state.y - content.y
    }

    fn inline_node(&mut self, state: &mut LineState, node: NodeId) {
        let Some(style_id) = self.styles.style_for(node) else {
            return;
        };
        let style = self.style(style_id);
        let dom = self.dom;
        match dom.get(node).map(|n| &n.node_type) {
            Some(NodeType::Text(text)) => self.inline_text(state, node, text, style_id),
            Some(NodeType::Element(element)) => {
                if style.display() == Display::None {
                    return;
                }
                if is_absolute(style) {
                    let x = state.line.as_ref().map_or(state.left, |line| line.cursor);
                    self.register_absolute(node, style_id, state.cb, (x, state.y));
                } else if is_float(style) {
                    if state.line.as_ref().is_some_and(|line| line.has_content) {
                        state.deferred.push((node, style_id));
                    } else {
                        let edges = (state.left, state.right);
                        self.layout_float(node, style_id, state.container, state.cb, state.y, edges);
                        self.refresh_band(state);
                    }
                } else if element.is("br") {
                    // [§ 9.4.2] A forced break ends the line even when empty.
                    self.ensure_line(state, 0);
                    self.close_line(state, false);
                } else if is_inline_box(style) {
                    self.inline_element(state, node, style_id);
                } else {
                    self.inline_block(state, node, style_id);
                }
            }
            _ => {}
        }
    }

    /// Break a text node into the open line and as many new lines as it
    /// needs.
    fn inline_text(&mut self, state: &mut LineState, node: NodeId, text: &str, style_id: StyleId) {
        if text.is_empty() {
            return;
        }
        let text_style = self.text_style(style_id);
        let metrics = self.metrics;
        let mut reflow =
            Reflow::new(text, &text_style, metrics).with_leading_space(state.pending_space);

        while !reflow.is_finished() {
            // STEP 1: Open a line wide enough for the next word.
            let first = reflow.next_word_advance().map_or(0, px_to_fixed);
            self.ensure_line(state, first);
            let Some(line) = state.line.as_ref() else {
                break;
            };

            // STEP 2: Take as many words as fit the rest of the line.
            let available = fixed_to_px(line.band_right - line.cursor);
            let Some(words) = reflow.next_line(available, !line.has_content) else {
                break;
            };
            if !words.is_empty() {
                self.place_words(state, node, style_id, &words);
            }

            // STEP 3: Close the line if the text asked for it.
            match words.end {
                LineEnd::Wrap => self.close_line(state, true),
                LineEnd::Break => self.close_line(state, false),
                LineEnd::Exhausted => {}
            }
        }
        state.pending_space = reflow.ends_with_space();
    }

    /// Emit one text box for `words` at the line cursor.
    fn place_words(&mut self, state: &mut LineState, node: NodeId, style_id: StyleId, words: &Line) {
        let Some(parent) = state.current_parent() else {
            return;
        };
        let Some(line) = state.line.as_mut() else {
            return;
        };

        let start = line.cursor;
        let mut cursor = start;
        let mut glyphs = Vec::new();
        let mut text = String::new();
        for word in &words.words {
            if word.gap_before > 0.0 {
                let gap = px_to_fixed(word.gap_before);
                line.gaps.push(cursor);
                glyphs.push(Glyph {
                    ch: ' ',
                    x: cursor,
                    y: 0,
                    advance: gap,
                });
                text.push(' ');
                cursor += gap;
            }
            for (ch, pair) in word.text.chars().zip(word.glyph_path.windows(2)) {
                let x0 = px_to_fixed(pair[0].x);
                let x1 = px_to_fixed(pair[1].x);
                glyphs.push(Glyph {
                    ch,
                    x: cursor + x0,
                    y: 0,
                    advance: x1 - x0,
                });
            }
            text.push_str(&word.text);
            cursor += px_to_fixed(word.advance);
        }
        line.cursor = cursor;
        line.has_content = true;

        let extents = self.font_extents(style_id);
        let run = TextRun {
            text,
            glyphs,
            font_size: self.font_size(style_id),
        };
        let mut text_box = self.new_box(BoxKind::Text(run), Some(node), style_id);
        text_box.background_color = Color::TRANSPARENT;
        text_box.position = Position::Static;
        text_box.dimensions.content = Rect::new(start, 0, cursor - start, extents.content_height);
        let id = self.push(text_box, parent, Slot::Child);
        line.items.push(LineItem {
            id,
            kind: ItemKind::Text,
            ascent: extents.ascent,
            descent: extents.descent,
            top: extents.content_ascent,
            relative: (0, 0),
        });
    }

    /// [§ 9.4.2](https://www.w3.org/TR/CSS2/visuren.html#inline-formatting)
    ///
    /// "When an inline box exceeds the width of a line box, it is split into
    /// several boxes and these boxes are distributed across several line
    /// boxes." Each line gets its own fragment; only the first carries the
    /// left edges and only the last the right ones.
    fn inline_element(&mut self, state: &mut LineState, node: NodeId, style_id: StyleId) {
        let (padding, border, [top, right, bottom, left]) = self.edges(style_id, state.cb.width);
        state.open.push(OpenInline {
            node,
            style: style_id,
            padding,
            border,
            margin: EdgeSizes {
                top: top.unwrap_or(0),
                right: right.unwrap_or(0),
                bottom: bottom.unwrap_or(0),
                left: left.unwrap_or(0),
            },
            started: false,
        });
        if state.line.is_some() {
            let index = state.open.len() - 1;
            self.open_fragment(state, index);
        }

        let dom = self.dom;
        for &child in dom.children(node) {
            self.inline_node(state, child);
        }

        // [§ 9.4.2] Empty inline boxes still take their horizontal margins,
        // borders and padding on a line.
        if let Some(open) = state.open.last() {
            let edges = open.padding.horizontal() + open.border.horizontal()
                + open.margin.horizontal();
            if !open.started && edges != 0 {
                self.ensure_line(state, edges);
                if let Some(line) = state.line.as_mut() {
                    line.has_content = true;
                }
            }
        }

        let Some(open) = state.open.pop() else {
            return;
        };
        let Some(line) = state.line.as_mut() else {
            return;
        };
        if line.parents.len() > state.open.len() {
            if let Some((id, start)) = line.parents.pop() {
                let dims = &mut self.tree.get_mut(id).dimensions;
                dims.content.width = line.cursor - start;
                dims.padding.right = open.padding.right;
                dims.border.right = open.border.right;
                dims.margin.right = open.margin.right;
                line.cursor += open.padding.right + open.border.right + open.margin.right;
            }
        }
    }

    /// Start the open line's fragment of `state.open[index]`.
    fn open_fragment(&mut self, state: &mut LineState, index: usize) {
        let Some(parent) = state.current_parent() else {
            return;
        };
        let (Some(open), Some(line)) = (state.open.get_mut(index), state.line.as_mut()) else {
            return;
        };

        let mut fragment = self.new_box(BoxKind::InlineElement, Some(open.node), open.style);
        if !open.started {
            line.cursor += open.padding.left + open.border.left + open.margin.left;
            fragment.dimensions.padding.left = open.padding.left;
            fragment.dimensions.border.left = open.border.left;
            fragment.dimensions.margin.left = open.margin.left;
            open.started = true;
        }
        fragment.dimensions.padding.top = open.padding.top;
        fragment.dimensions.padding.bottom = open.padding.bottom;
        fragment.dimensions.border.top = open.border.top;
        fragment.dimensions.border.bottom = open.border.bottom;

        let extents = self.font_extents(open.style);
        fragment.dimensions.content = Rect::new(line.cursor, 0, 0, extents.content_height);
        let id = self.push(fragment, parent, Slot::Child);
        line.parents.push((id, line.cursor));
        line.items.push(LineItem {
            id,
            kind: ItemKind::Fragment,
            ascent: extents.ascent,
            descent: extents.descent,
            top: extents.content_ascent,
            relative: (0, 0),
        });
    }

    /// [§ 10.3.9 'Inline-block', non-replaced elements in normal flow](https://www.w3.org/TR/CSS2/visudet.html#inlineblock-width)
    ///
    /// "If 'width' is 'auto', the used value is the shrink-to-fit width as
    /// for floating elements."
    fn inline_block(&mut self, state: &mut LineState, node: NodeId, style_id: StyleId) {
        let available = state.right - state.left;
        let h = self.solve_horizontal(
            style_id,
            Some(node),
            state.cb.width,
            available,
            Sizing::ShrinkToFit,
        );
        let outer = h.outer_width();

        // STEP 1: Find a line it fits on.
        self.ensure_line(state, outer);
        let space = px_to_fixed(
            self.metrics
                .char_advance(&self.font(state.container_style), ' '),
        );
        let gap = |state: &LineState| match &state.line {
            Some(line) if state.pending_space && line.has_content => space,
            _ => 0,
        };
        let overflows = state.line.as_ref().is_some_and(|line| {
            line.has_content && line.cursor + gap(state) + outer > line.band_right
        });
        if overflows {
            self.close_line(state, true);
            self.ensure_line(state, outer);
        }
        let gap = gap(state);
        let Some(parent) = state.current_parent() else {
            return;
        };
        let Some(line) = state.line.as_mut() else {
            return;
        };
        if gap > 0 {
            line.gaps.push(line.cursor);
            line.cursor += gap;
        }
        let x = line.cursor;

        // STEP 2: Lay it out in place; the line moves it vertically later.
        let atomic = self.new_box(BoxKind::InlineBlock, Some(node), style_id);
        let id = self.push(atomic, parent, Slot::Child);
        let height = self.layout_block(
            id,
            state.cb,
            Placement {
                left: x,
                top: state.y,
                available,
                sizing: Sizing::Exact(h.width),
                height: None,
            },
        );

        let relative = if self.style(style_id).position() == Position::Relative {
            self.relative_offset(style_id, state.cb)
        } else {
            (0, 0)
        };
        if let Some(line) = state.line.as_mut() {
            line.cursor = x + outer;
            line.has_content = true;
            // The baseline of an inline-block sits on its bottom margin edge.
            line.items.push(LineItem {
                id,
                kind: ItemKind::Atomic,
                ascent: height,
                descent: 0,
                top: height,
                relative,
            });
        }
        state.pending_space = false;
    }

    /// Open a line if none is open, moving down past floats until the band
    /// can take `first_width`.
    fn ensure_line(&mut self, state: &mut LineState, first_width: FixedPoint) {
        if state.line.is_some() {
            return;
        }
        let height = state.strut.ascent + state.strut.descent;
        let indent = if state.first_line { state.indent } else { 0 };
        let context = state.cb.context;
        let full = (state.left, state.right);

        // [§ 9.5 Floats](https://www.w3.org/TR/CSS2/visuren.html#floats)
        //
        // "If a shortened line box is too small to contain any content, then
        // the line box is shifted downward (and its width recomputed) until
        // either some content fits or there are no more floats present."
        let mut y = state.y;
        let mut band = self.floats.band(context, y, height, full.0, full.1);
        while band != full && band.1 - band.0 - indent < first_width {
            let next = if height > 0 {
                Some(y + height)
            } else {
                self.floats.next_bottom_after(context, y)
            };
            let Some(next) = next else {
                break;
            };
            y = next;
            band = self.floats.band(context, y, height, full.0, full.1);
        }
        state.y = y;

        let mut line_box = self.new_box(BoxKind::Line, None, state.container_style);
        line_box.background_color = Color::TRANSPARENT;
        line_box.position = Position::Static;
        let id = self.push(line_box, state.container, Slot::Child);
        state.line = Some(OpenLine {
            id,
            band_left: band.0,
            band_right: band.1,
            cursor: band.0 + indent,
            parents: Vec::new(),
            items: Vec::new(),
            gaps: Vec::new(),
            has_content: false,
        });
        for index in 0..state.open.len() {
            self.open_fragment(state, index);
        }
    }

    /// Re-query the band of an open but still empty line after a float was
    /// placed beside it.
    fn refresh_band(&mut self, state: &mut LineState) {
        let height = state.strut.ascent + state.strut.descent;
        let Some(line) = state.line.as_mut() else {
            return;
        };
        let (left, right) =
            self.floats
                .band(state.cb.context, state.y, height, state.left, state.right);
        let dx = left - line.band_left;
        line.band_left = left;
        line.band_right = right;
        line.cursor += dx;
        for (id, start) in &mut line.parents {
            *start += dx;
            self.tree.get_mut(*id).dimensions.content.x += dx;
        }
    }

    /// [§ 10.8 Line height calculations](https://www.w3.org/TR/CSS2/visudet.html#line-height)
    ///
    /// Close the open line: size it, align its content and move every box on
    /// it to its final position. `wrapped` says the line ended because the
    /// next content did not fit, which is when justification applies.
    fn close_line(&mut self, state: &mut LineState, wrapped: bool) {
        let Some(OpenLine {
            id,
            band_left,
            band_right,
            cursor,
            parents,
            items,
            gaps,
            ..
        }) = state.line.take()
        else {
            return;
        };

        // STEP 1: Fragments still open end at the cursor.
        for (fragment, start) in parents {
            self.tree.get_mut(fragment).dimensions.content.width = cursor - start;
        }

        // STEP 2: "The line box height is the distance between the uppermost
        // box top and the lowermost box bottom." The strut keeps every line
        // at least the container's line height.
        let baseline = items
            .iter()
            .map(|item| item.ascent)
            .fold(state.strut.ascent, FixedPoint::max);
        let depth = items
            .iter()
            .map(|item| item.descent)
            .fold(state.strut.descent, FixedPoint::max);
        let height = baseline + depth;

        // STEP 3: [§ 16.2 Alignment](https://www.w3.org/TR/CSS2/text.html#alignment-prop)
        //
        // "A block of text is a stack of line boxes. In the case of 'left',
        // 'right' and 'center', this property specifies how the inline-level
        // boxes within each line box align with respect to the line box's
        // left and right sides."
        let slack = (band_right - cursor).max(0);
        let (offset, stretch) = match state.text_align {
            TextAlign::Right => (slack, 0),
            TextAlign::Center => (slack / 2, 0),
            TextAlign::Justify if wrapped && !gaps.is_empty() => (0, slack),
            TextAlign::Left | TextAlign::Justify => (0, 0),
        };
        let gap_count = gaps.len().max(1) as i64;
        let shift = |x: FixedPoint| -> FixedPoint {
            if stretch == 0 {
                return offset;
            }
            let before = gaps.iter().filter(|&&gap| gap < x).count() as i64;
            offset + (i64::from(stretch) * before / gap_count) as FixedPoint
        };

        // STEP 4: Place every box on the line.
        let top = state.y;
        for item in &items {
            if item.kind == ItemKind::Atomic {
                let margin_box = self.tree.get(item.id).dimensions.margin_box();
                let (rx, ry) = item.relative;
                let dx = shift(margin_box.x - rx);
                let dy = top + baseline - item.top - (margin_box.y - ry);
                self.shift_subtree(item.id, dx, dy);
                continue;
            }
            let b = self.tree.get_mut(item.id);
            let rect = &mut b.dimensions.content;
            let left = rect.x + shift(rect.x);
            let right = rect.right() + shift(rect.right());
            rect.x = left;
            rect.width = right - left;
            rect.y = top + baseline - item.top;
            if let BoxKind::Text(run) = &mut b.kind {
                for glyph in &mut run.glyphs {
                    glyph.x += shift(glyph.x);
                    glyph.y = top + baseline;
                }
                if stretch != 0 {
                    // Stretched spaces cover their whole gap.
                    let mut next_x = None;
                    for glyph in run.glyphs.iter_mut().rev() {
                        if let Some(next) = next_x {
                            glyph.advance = next - glyph.x;
                        }
                        next_x = Some(glyph.x);
                    }
                }
            }
        }

        self.tree.get_mut(id).dimensions.content =
            Rect::new(band_left, top, band_right - band_left, height);

        #[cfg(feature = "layout-trace")]
        eprintln!(
            "[LAYOUT] line {id:?} y={top} h={height} items={} slack={slack} wrapped={wrapped}",
            items.len()
        );

        state.y = top + height;
        state.first_line = false;
        state.pending_space = false;

        // STEP 5: Floats that arrived mid-line go below it.
        self.place_deferred_floats(state);
    }

    fn place_deferred_floats(&mut self, state: &mut LineState) {
        for (node, style_id) in mem::take(&mut state.deferred) {
            let edges = (state.left, state.right);
            self.layout_float(node, style_id, state.container, state.cb, state.y, edges);
        }
    }
}
