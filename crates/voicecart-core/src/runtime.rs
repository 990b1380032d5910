use std::rc::Rc;

use crate::{Rect, Scene, Vec2, View, semantics::Role};

/// Frame: output of composition for a tick: scene + input/semantics.
pub struct Frame {
    pub scene: Scene,
    pub hit_regions: Vec<HitRegion>,
    pub semantics_nodes: Vec<SemNode>,
    pub focus_chain: Vec<u64>,
    /// Viewport the frame was painted for; rects are in its window space.
    pub viewport: Viewport,
}

impl Frame {
    pub fn hit(&self, id: u64) -> Option<&HitRegion> {
        self.hit_regions.iter().find(|h| h.id == id)
    }

    pub fn semantics(&self, id: u64) -> Option<&SemNode> {
        self.semantics_nodes.iter().find(|n| n.id == id)
    }

    /// Last-painted region containing `p`. Points outside the window hit
    /// nothing, even where content has been scrolled out of view.
    pub fn hit_at(&self, p: Vec2) -> Option<&HitRegion> {
        if !self.viewport.contains(p) {
            return None;
        }
        self.hit_regions.iter().rev().find(|h| h.rect.contains(p))
    }
}

#[derive(Clone)]
pub struct HitRegion {
    pub id: u64,
    pub rect: Rect,
    pub on_click: Option<Rc<dyn Fn()>>,
    pub focusable: bool,
}

impl std::fmt::Debug for HitRegion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HitRegion")
            .field("id", &self.id)
            .field("rect", &self.rect)
            .field("on_click", &self.on_click.as_ref().map(|_| "..."))
            .field("focusable", &self.focusable)
            .finish()
    }
}

/// Flattened semantics node produced by `layout_and_paint`.
///
/// Carries the resolved screen rect, role, label and focus/enabled state so
/// a host can build its accessibility tree without walking the view.
#[derive(Clone, Debug, PartialEq)]
pub struct SemNode {
    /// Stable id, shared with the associated `HitRegion` / `ViewId`.
    pub id: u64,
    pub role: Role,
    pub label: Option<String>,
    pub rect: Rect,
    pub focused: bool,
    pub enabled: bool,
}

/// Window size plus a vertical scroll offset, all in px.
///
/// Content taller than the window scrolls; the offset is kept within
/// `0..=content_height - height`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    scroll_offset: f32,
    content_height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280, 800)
    }
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            scroll_offset: 0.0,
            content_height: 0.0,
        }
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    pub fn content_height(&self) -> f32 {
        self.content_height
    }

    fn max_offset(&self) -> f32 {
        (self.content_height - self.height as f32).max(0.0)
    }

    pub fn set_size(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.clamp_offset();
    }

    pub fn set_content_height(&mut self, h: f32) {
        self.content_height = h.max(0.0);
        self.clamp_offset();
    }

    pub fn set_offset(&mut self, off: f32) {
        self.scroll_offset = off.clamp(0.0, self.max_offset());
    }

    /// Consume dy (pixels), clamp to bounds, return leftover.
    pub fn scroll_immediate(&mut self, dy: f32) -> f32 {
        let before = self.scroll_offset;
        self.set_offset(before + dy);
        dy - (self.scroll_offset - before)
    }

    fn clamp_offset(&mut self) {
        self.scroll_offset = self.scroll_offset.clamp(0.0, self.max_offset());
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= 0.0 && p.y >= 0.0 && p.x < self.width as f32 && p.y < self.height as f32
    }
}

pub struct Scheduler {
    pub focused: Option<u64>,
    pub viewport: Viewport,
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler {
    pub fn new() -> Self {
        Self {
            focused: None,
            viewport: Viewport::default(),
        }
    }

    /// Builds the root view and runs it through `layout_paint` with the
    /// current viewport. Building must not have side effects beyond
    /// allocation. The painted content height is recorded on the viewport.
    pub fn compose<F, E>(
        &mut self,
        build_root: F,
        layout_paint: impl FnOnce(&View, Viewport, Option<u64>) -> Result<(Scene, Vec<HitRegion>, Vec<SemNode>), E>,
    ) -> Result<Frame, E>
    where
        F: FnOnce(&mut Scheduler) -> View,
    {
        let root = build_root(self);
        let viewport = self.viewport;
        let (scene, hits, sem) = layout_paint(&root, viewport, self.focused)?;
        self.viewport.set_content_height(scene.content_height);

        let focus_chain: Vec<u64> = hits.iter().filter(|h| h.focusable).map(|h| h.id).collect();
        if let Some(f) = self.focused
            && !focus_chain.contains(&f)
        {
            log::debug!("focused region {f} no longer present; clearing focus");
            self.focused = None;
        }

        Ok(Frame {
            scene,
            hit_regions: hits,
            semantics_nodes: sem,
            focus_chain,
            viewport,
        })
    }
}
