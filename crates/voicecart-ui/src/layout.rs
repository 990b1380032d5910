//! Flexbox layout (taffy) and painting into a `Scene`.

use std::collections::HashMap;

use taffy::prelude::*;
use thiserror::Error;
use voicecart_core::{
    Brush, FontWeight, HitRegion, Modifier, Role, Scene, SceneNode, SemNode, View, ViewId,
    ViewKind, Viewport, dp_to_px, theme,
};

use crate::input::Interactions;

/// Label size of `Button`, in dp.
pub const BUTTON_FONT_DP: f32 = 18.0;
const LINE_HEIGHT: f32 = 1.3;
const FOCUS_RING_DP: f32 = 2.0;

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("layout engine error: {0:?}")]
    Taffy(taffy::TaffyError),
    #[error("view {0} has no layout node")]
    MissingNode(ViewId),
}

impl From<taffy::TaffyError> for LayoutError {
    fn from(e: taffy::TaffyError) -> Self {
        LayoutError::Taffy(e)
    }
}

#[derive(Clone)]
enum NodeCtx {
    Text {
        text: String,
        font_dp: f32,
        weight: FontWeight,
    },
    Button {
        label: String,
        has_icon: bool,
    },
    Icon {
        size_dp: f32,
    },
    Container,
}

/// Rough glyph-advance estimate; hosts with real shaping re-measure.
pub fn estimate_text_width(text: &str, size_px: f32, weight: FontWeight) -> f32 {
    let advance = match weight {
        FontWeight::Regular => 0.55,
        FontWeight::Semibold => 0.58,
        FontWeight::Bold => 0.6,
    };
    text.chars().count() as f32 * size_px * advance
}

fn longest_word_width(text: &str, size_px: f32, weight: FontWeight) -> f32 {
    text.split_whitespace()
        .map(|w| estimate_text_width(w, size_px, weight))
        .fold(0.0, f32::max)
}

fn style_from_modifier(m: &Modifier, kind: &ViewKind) -> Style {
    let px = dp_to_px;
    let mut s = Style::default();

    s.display = Display::Flex;
    match kind {
        ViewKind::Row => s.flex_direction = FlexDirection::Row,
        ViewKind::Column | ViewKind::Surface | ViewKind::Box => {
            s.flex_direction = FlexDirection::Column
        }
        _ => {}
    }

    let is_container = matches!(
        kind,
        ViewKind::Row | ViewKind::Column | ViewKind::Surface | ViewKind::Box
    );
    s.align_items = Some(if is_container {
        AlignItems::Stretch
    } else {
        AlignItems::FlexStart
    });
    s.justify_content = Some(JustifyContent::FlexStart);

    if let Some(a) = m.align_items_container {
        s.align_items = Some(a);
    }
    if let Some(j) = m.justify_content {
        s.justify_content = Some(j);
    }
    if let Some(a) = m.align_self {
        s.align_self = Some(a);
    }
    if let Some(g) = m.flex_grow {
        s.flex_grow = g;
    }
    if let Some(g) = m.gap {
        s.gap = Size {
            width: length(px(g)),
            height: length(px(g)),
        };
    }

    if m.absolute {
        s.position = Position::Absolute;
        let inset = |v: Option<f32>| -> LengthPercentageAuto {
            v.map(|v| length(px(v))).unwrap_or_else(auto)
        };
        s.inset.left = inset(m.offset_left);
        s.inset.right = inset(m.offset_right);
        s.inset.top = inset(m.offset_top);
        s.inset.bottom = inset(m.offset_bottom);
    }

    if let Some(v) = m.margin_top {
        s.margin.top = length(px(v));
    }
    if let Some(v) = m.margin_bottom {
        s.margin.bottom = length(px(v));
    }

    // Padding (content box)
    if let Some(pv) = m.padding_values {
        s.padding.left = length(px(pv.left));
        s.padding.right = length(px(pv.right));
        s.padding.top = length(px(pv.top));
        s.padding.bottom = length(px(pv.bottom));
    } else if let Some(p) = m.padding {
        let v = px(p);
        s.padding.left = length(v);
        s.padding.right = length(v);
        s.padding.top = length(v);
        s.padding.bottom = length(v);
    }

    // Explicit size wins over fill
    if let Some(sz) = m.size {
        s.size.width = length(px(sz.width.max(0.0)));
        s.size.height = length(px(sz.height.max(0.0)));
    } else if m.fill_max {
        // Grow along the parent's main axis, at least cover the cross axis.
        s.flex_grow = s.flex_grow.max(1.0);
        s.min_size.width = percent(1.0);
        s.min_size.height = percent(1.0);
    }
    if let Some(w) = m.max_width {
        s.max_size.width = length(px(w.max(0.0)));
    }

    s
}

fn build_node(
    v: &View,
    t: &mut TaffyTree<NodeCtx>,
    nodes_map: &mut HashMap<ViewId, NodeId>,
) -> Result<NodeId, LayoutError> {
    let mut style = style_from_modifier(&v.modifier, &v.kind);

    // Icons keep their square size instead of stretching on the cross axis.
    if let ViewKind::Icon { size, .. } = &v.kind
        && v.modifier.size.is_none()
    {
        let s = dp_to_px(*size);
        style.size = Size {
            width: length(s),
            height: length(s),
        };
    }

    let node = match &v.kind {
        ViewKind::Text {
            text,
            font_size,
            weight,
            ..
        } => t.new_leaf_with_context(
            style,
            NodeCtx::Text {
                text: text.clone(),
                font_dp: *font_size,
                weight: *weight,
            },
        )?,
        ViewKind::Button { text, icon, .. } => t.new_leaf_with_context(
            style,
            NodeCtx::Button {
                label: text.clone(),
                has_icon: icon.is_some(),
            },
        )?,
        ViewKind::Icon { size, .. } => {
            t.new_leaf_with_context(style, NodeCtx::Icon { size_dp: *size })?
        }
        ViewKind::Surface | ViewKind::Box | ViewKind::Row | ViewKind::Column => {
            let children = v
                .children
                .iter()
                .map(|c| build_node(c, t, nodes_map))
                .collect::<Result<Vec<_>, _>>()?;
            let n = t.new_with_children(style, &children)?;
            t.set_node_context(n, Some(NodeCtx::Container))?;
            n
        }
    };

    nodes_map.insert(v.id, node);
    Ok(node)
}

fn measure(
    known: Size<Option<f32>>,
    avail: Size<AvailableSpace>,
    ctx: Option<&mut NodeCtx>,
) -> Size<f32> {
    let px = dp_to_px;
    match ctx {
        Some(NodeCtx::Text {
            text,
            font_dp,
            weight,
        }) => {
            let size_px = px(*font_dp);
            let line_h = size_px * LINE_HEIGHT;
            let natural = estimate_text_width(text, size_px, *weight);
            let limit = known.width.or(match avail.width {
                AvailableSpace::Definite(w) => Some(w),
                AvailableSpace::MinContent => Some(longest_word_width(text, size_px, *weight)),
                AvailableSpace::MaxContent => None,
            });
            let (width, lines) = match limit {
                Some(w) if w > 0.0 && natural > w => (w, (natural / w).ceil().max(1.0)),
                _ => (known.width.unwrap_or(natural), 1.0),
            };
            Size {
                width,
                height: known.height.unwrap_or(line_h * lines),
            }
        }
        Some(NodeCtx::Button { label, has_icon }) => {
            let size_px = px(BUTTON_FONT_DP);
            let icon_w = if *has_icon { size_px + px(8.0) } else { 0.0 };
            Size {
                width: known
                    .width
                    .unwrap_or(estimate_text_width(label, size_px, FontWeight::Bold) + icon_w),
                height: known.height.unwrap_or(size_px * LINE_HEIGHT),
            }
        }
        Some(NodeCtx::Icon { size_dp }) => {
            let s = px(*size_dp);
            Size {
                width: known.width.unwrap_or(s),
                height: known.height.unwrap_or(s),
            }
        }
        Some(NodeCtx::Container) | None => Size::ZERO,
    }
}

struct Painter<'a> {
    t: &'a TaffyTree<NodeCtx>,
    nodes: &'a HashMap<ViewId, NodeId>,
    interactions: &'a Interactions,
    focused: Option<u64>,
    scene: Scene,
    hits: Vec<HitRegion>,
    sems: Vec<SemNode>,
}

impl Painter<'_> {
    fn walk(&mut self, v: &View, parent_offset: (f32, f32)) -> Result<(), LayoutError> {
        let node = *self
            .nodes
            .get(&v.id)
            .ok_or(LayoutError::MissingNode(v.id))?;
        let l = self.t.layout(node)?;
        let rect = voicecart_core::Rect {
            x: parent_offset.0 + l.location.x,
            y: parent_offset.1 + l.location.y,
            w: l.size.width,
            h: l.size.height,
        };
        let content = voicecart_core::Rect {
            x: rect.x + l.padding.left,
            y: rect.y + l.padding.top,
            w: (rect.w - l.padding.left - l.padding.right).max(0.0),
            h: (rect.h - l.padding.top - l.padding.bottom).max(0.0),
        };
        let radius = v.modifier.clip_rounded.map(dp_to_px).unwrap_or(0.0);
        let th = theme();

        let is_hovered = self.interactions.hover == Some(v.id);
        let is_pressed = self.interactions.pressed.contains(&v.id);
        let is_focused = self.focused == Some(v.id);

        // Buttons without an explicit background take the theme's primary.
        let background = match (&v.kind, v.modifier.background) {
            (ViewKind::Button { .. }, None) => Some(Brush::Solid(th.primary)),
            (_, bg) => bg,
        };
        if let Some(bg) = background {
            let bg = if is_pressed {
                bg.darken(0.16)
            } else if is_hovered {
                bg.darken(0.08)
            } else {
                bg
            };
            self.scene.nodes.push(SceneNode::Rect {
                rect,
                brush: bg,
                radius,
            });
        }
        if let Some(b) = &v.modifier.border {
            self.scene.nodes.push(SceneNode::Border {
                rect,
                color: b.color,
                width: dp_to_px(b.width),
                radius: dp_to_px(b.radius).max(radius),
            });
        }

        match &v.kind {
            ViewKind::Text {
                text,
                color,
                font_size,
                weight,
            } => {
                self.scene.nodes.push(SceneNode::Text {
                    rect: content,
                    text: text.clone(),
                    color: *color,
                    size: dp_to_px(*font_size),
                    weight: *weight,
                });
            }
            ViewKind::Icon {
                glyph,
                color,
                weight,
                ..
            } => {
                self.scene.nodes.push(SceneNode::Icon {
                    rect: content,
                    glyph: *glyph,
                    color: *color,
                    weight: *weight,
                });
            }
            ViewKind::Button {
                text,
                icon,
                on_click,
            } => {
                let size_px = dp_to_px(BUTTON_FONT_DP);
                let mut label_x = content.x;
                if let Some(g) = icon {
                    self.scene.nodes.push(SceneNode::Icon {
                        rect: voicecart_core::Rect {
                            x: content.x,
                            y: content.y + (content.h - size_px).max(0.0) * 0.5,
                            w: size_px,
                            h: size_px,
                        },
                        glyph: *g,
                        color: th.on_primary,
                        weight: voicecart_core::IconWeight::Fill,
                    });
                    label_x += size_px + dp_to_px(8.0);
                }
                self.scene.nodes.push(SceneNode::Text {
                    rect: voicecart_core::Rect {
                        x: label_x,
                        y: content.y,
                        w: (content.x + content.w - label_x).max(0.0),
                        h: content.h,
                    },
                    text: text.clone(),
                    color: th.on_primary,
                    size: size_px,
                    weight: FontWeight::Bold,
                });
                if is_focused {
                    self.scene.nodes.push(SceneNode::Border {
                        rect: rect.inflate(dp_to_px(FOCUS_RING_DP)),
                        color: th.focus,
                        width: dp_to_px(FOCUS_RING_DP),
                        radius: radius + dp_to_px(FOCUS_RING_DP),
                    });
                }

                self.hits.push(HitRegion {
                    id: v.id,
                    rect,
                    on_click: on_click.clone(),
                    focusable: on_click.is_some(),
                });
            }
            ViewKind::Surface | ViewKind::Box | ViewKind::Row | ViewKind::Column => {}
        }

        if let Some(s) = &v.semantics {
            self.sems.push(SemNode {
                id: v.id,
                role: s.role,
                label: s.label.clone(),
                rect,
                focused: is_focused,
                enabled: s.enabled && (s.role != Role::Button || v.kind.is_interactive()),
            });
        }

        for c in &v.children {
            self.walk(c, (rect.x, rect.y))?;
        }
        Ok(())
    }
}

/// Lays out `root` at the viewport's width and paints it shifted by the
/// viewport's scroll offset.
///
/// The root is at least as tall as the window and grows with its content;
/// the laid-out height is reported as `Scene::content_height`. Ids are
/// assigned in pre-order starting at 1, so an unchanged tree keeps its ids
/// across frames. Callbacks are only cloned into hit regions, never invoked
/// here.
pub fn layout_and_paint(
    root: &View,
    viewport: Viewport,
    interactions: &Interactions,
    focused: Option<u64>,
) -> Result<(Scene, Vec<HitRegion>, Vec<SemNode>), LayoutError> {
    fn stamp(mut v: View, id: &mut u64) -> View {
        v.id = *id;
        *id += 1;
        v.children = v.children.into_iter().map(|c| stamp(c, id)).collect();
        v
    }
    let mut next_id = 1u64;
    let root = stamp(root.clone(), &mut next_id);

    let mut taffy: TaffyTree<NodeCtx> = TaffyTree::new();
    let mut nodes_map = HashMap::new();
    let root_node = build_node(&root, &mut taffy, &mut nodes_map)?;

    let (width, height) = (viewport.width as f32, viewport.height as f32);
    let mut rs = taffy.style(root_node)?.clone();
    rs.size.width = length(width);
    rs.size.height = auto();
    rs.min_size.height = length(height);
    taffy.set_style(root_node, rs)?;

    let available = Size {
        width: AvailableSpace::Definite(width),
        height: AvailableSpace::MaxContent,
    };
    taffy.compute_layout_with_measure(root_node, available, |known, avail, _node, ctx, _style| {
        measure(known, avail, ctx)
    })?;
    let content_height = taffy.layout(root_node)?.size.height;

    let mut painter = Painter {
        t: &taffy,
        nodes: &nodes_map,
        interactions,
        focused,
        scene: Scene {
            clear_color: theme().background,
            nodes: vec![],
            content_height,
        },
        hits: vec![],
        sems: vec![],
    };
    painter.walk(&root, (0.0, -viewport.scroll_offset()))?;

    let Painter {
        scene, hits, sems, ..
    } = painter;
    log::trace!(
        "layout_and_paint: {} scene nodes, {} hit regions",
        scene.nodes.len(),
        hits.len()
    );

    Ok((scene, hits, sems))
}
