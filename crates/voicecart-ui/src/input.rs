//! Platform-neutral input routing against a composed `Frame`.
//!
//! A host forwards raw pointer and key events here; the dispatcher tracks
//! hover, pointer capture and keyboard activation, and runs a hit region's
//! `on_click` once per completed activation:
//!
//! - pointer: press inside a region captures it; release fires the click only
//!   if the pointer is still inside the captured region.
//! - keyboard: `Tab` walks `Frame::focus_chain`; `Space`/`Enter` press arms the
//!   focused region and the matching release fires it.
//!
//! Callbacks run synchronously on the caller's stack. A panicking callback is
//! not caught; dispatcher state is already settled before the call.

use std::collections::HashSet;

use voicecart_core::{Frame, Vec2};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Interactions {
    pub hover: Option<u64>,
    pub pressed: HashSet<u64>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Tab,
    BackTab,
    Enter,
    Space,
    Other,
}

#[derive(Default)]
pub struct Dispatcher {
    hover_id: Option<u64>,
    capture_id: Option<u64>,
    pressed_ids: HashSet<u64>,
    key_pressed_active: Option<u64>, // for Space/Enter press/release activation
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hover/pressed state for the next paint.
    pub fn interactions(&self) -> Interactions {
        Interactions {
            hover: self.hover_id,
            pressed: self.pressed_ids.clone(),
        }
    }

    pub fn pointer_moved(&mut self, frame: &Frame, pos: Vec2) {
        let over = frame.hit_at(pos).map(|h| h.id);
        if over != self.hover_id {
            log::trace!("hover {:?} -> {:?}", self.hover_id, over);
            self.hover_id = over;
        }
    }

    /// Returns true if a region captured the press.
    pub fn pointer_down(&mut self, frame: &Frame, pos: Vec2, focused: &mut Option<u64>) -> bool {
        self.pointer_moved(frame, pos);
        let Some(hit) = frame.hit_at(pos) else {
            return false;
        };
        self.capture_id = Some(hit.id);
        self.pressed_ids.insert(hit.id);
        if hit.focusable {
            *focused = Some(hit.id);
        }
        true
    }

    /// Releases the capture. Returns true if a click fired.
    pub fn pointer_up(&mut self, frame: &Frame, pos: Vec2) -> bool {
        self.pointer_moved(frame, pos);
        let Some(cid) = self.capture_id.take() else {
            return false;
        };
        self.pressed_ids.remove(&cid);

        // Click on release if pointer is still over the captured hit region
        let callback = frame
            .hit(cid)
            .filter(|h| h.rect.contains(pos))
            .and_then(|h| h.on_click.clone());
        match callback {
            Some(cb) => {
                log_activation(frame, cid, "pointer");
                cb();
                true
            }
            None => false,
        }
    }

    /// Press and release at the same point.
    pub fn click(&mut self, frame: &Frame, pos: Vec2, focused: &mut Option<u64>) -> bool {
        self.pointer_down(frame, pos, focused) && self.pointer_up(frame, pos)
    }

    pub fn key_down(&mut self, frame: &Frame, key: Key, focused: &mut Option<u64>) {
        match key {
            Key::Tab | Key::BackTab => {
                if let Some(active) = self.key_pressed_active.take() {
                    self.pressed_ids.remove(&active);
                }
                *focused = step_focus(&frame.focus_chain, *focused, key == Key::Tab);
                log::debug!("focus -> {:?}", focused);
            }
            Key::Space | Key::Enter => {
                if let Some(fid) = *focused
                    && frame.hit(fid).is_some()
                    && self.key_pressed_active.is_none()
                {
                    self.pressed_ids.insert(fid);
                    self.key_pressed_active = Some(fid);
                }
            }
            Key::Other => {}
        }
    }

    /// Finishes a keyboard activation. Returns true if a click fired.
    pub fn key_up(&mut self, frame: &Frame, key: Key) -> bool {
        if !matches!(key, Key::Space | Key::Enter) {
            return false;
        }
        let Some(active_id) = self.key_pressed_active.take() else {
            return false;
        };
        self.pressed_ids.remove(&active_id);

        match frame.hit(active_id).and_then(|h| h.on_click.clone()) {
            Some(cb) => {
                log_activation(frame, active_id, "keyboard");
                cb();
                true
            }
            None => false,
        }
    }

    /// Key press followed by release.
    pub fn key(&mut self, frame: &Frame, key: Key, focused: &mut Option<u64>) -> bool {
        self.key_down(frame, key, focused);
        self.key_up(frame, key)
    }
}

fn step_focus(chain: &[u64], current: Option<u64>, forward: bool) -> Option<u64> {
    if chain.is_empty() {
        return None;
    }
    let idx = current.and_then(|c| chain.iter().position(|&id| id == c));
    let next = match (idx, forward) {
        (None, true) => 0,
        (None, false) => chain.len() - 1,
        (Some(i), true) => (i + 1) % chain.len(),
        (Some(i), false) => (i + chain.len() - 1) % chain.len(),
    };
    Some(chain[next])
}

fn log_activation(frame: &Frame, id: u64, via: &str) {
    let label = frame
        .semantics(id)
        .and_then(|n| n.label.as_deref())
        .unwrap_or("");
    log::debug!("activated {label:?} ({via})");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use voicecart_core::{HitRegion, Rect, Scene, Viewport};

    fn frame_with(regions: Vec<(u64, Rect, Option<Rc<dyn Fn()>>)>) -> Frame {
        let hit_regions: Vec<HitRegion> = regions
            .into_iter()
            .map(|(id, rect, on_click)| HitRegion {
                id,
                rect,
                focusable: on_click.is_some(),
                on_click,
            })
            .collect();
        let focus_chain = hit_regions
            .iter()
            .filter(|h| h.focusable)
            .map(|h| h.id)
            .collect();
        Frame {
            scene: Scene::default(),
            hit_regions,
            semantics_nodes: vec![],
            focus_chain,
            viewport: Viewport::new(800, 600),
        }
    }

    fn counter() -> (Rc<Cell<u32>>, Rc<dyn Fn()>) {
        let n = Rc::new(Cell::new(0));
        let c = n.clone();
        (n, Rc::new(move || c.set(c.get() + 1)))
    }

    const R: Rect = Rect {
        x: 10.0,
        y: 10.0,
        w: 100.0,
        h: 40.0,
    };
    const INSIDE: Vec2 = Vec2 { x: 50.0, y: 30.0 };
    const OUTSIDE: Vec2 = Vec2 { x: 500.0, y: 300.0 };

    #[test]
    fn each_click_fires_once() {
        let (n, cb) = counter();
        let frame = frame_with(vec![(1, R, Some(cb))]);
        let mut d = Dispatcher::new();
        let mut focused = None;

        for expected in 1..=5 {
            assert!(d.click(&frame, INSIDE, &mut focused));
            assert_eq!(n.get(), expected);
        }
        assert_eq!(focused, Some(1));
    }

    #[test]
    fn release_outside_cancels() {
        let (n, cb) = counter();
        let frame = frame_with(vec![(1, R, Some(cb))]);
        let mut d = Dispatcher::new();
        let mut focused = None;

        assert!(d.pointer_down(&frame, INSIDE, &mut focused));
        assert!(d.interactions().pressed.contains(&1));
        assert!(!d.pointer_up(&frame, OUTSIDE));
        assert_eq!(n.get(), 0);
        assert!(d.interactions().pressed.is_empty());
    }

    #[test]
    fn press_outside_then_release_inside_does_nothing() {
        let (n, cb) = counter();
        let frame = frame_with(vec![(1, R, Some(cb))]);
        let mut d = Dispatcher::new();
        let mut focused = None;

        assert!(!d.pointer_down(&frame, OUTSIDE, &mut focused));
        assert!(!d.pointer_up(&frame, INSIDE));
        assert_eq!(n.get(), 0);
        assert_eq!(focused, None);
    }

    #[test]
    fn hover_follows_pointer() {
        let (_, cb) = counter();
        let frame = frame_with(vec![(7, R, Some(cb))]);
        let mut d = Dispatcher::new();
        d.pointer_moved(&frame, INSIDE);
        assert_eq!(d.interactions().hover, Some(7));
        d.pointer_moved(&frame, OUTSIDE);
        assert_eq!(d.interactions().hover, None);
    }

    #[test]
    fn keyboard_activation_needs_focus() {
        let (n, cb) = counter();
        let frame = frame_with(vec![(3, R, Some(cb))]);
        let mut d = Dispatcher::new();
        let mut focused = None;

        assert!(!d.key(&frame, Key::Enter, &mut focused));
        assert_eq!(n.get(), 0);

        d.key_down(&frame, Key::Tab, &mut focused);
        assert_eq!(focused, Some(3));
        assert!(d.key(&frame, Key::Space, &mut focused));
        assert!(d.key(&frame, Key::Enter, &mut focused));
        assert_eq!(n.get(), 2);
    }

    #[test]
    fn held_key_does_not_repeat() {
        let (n, cb) = counter();
        let frame = frame_with(vec![(3, R, Some(cb))]);
        let mut d = Dispatcher::new();
        let mut focused = Some(3);

        d.key_down(&frame, Key::Enter, &mut focused);
        d.key_down(&frame, Key::Enter, &mut focused);
        assert!(d.key_up(&frame, Key::Enter));
        assert!(!d.key_up(&frame, Key::Enter));
        assert_eq!(n.get(), 1);
    }

    #[test]
    fn tab_wraps_both_ways() {
        assert_eq!(step_focus(&[1, 2, 3], None, true), Some(1));
        assert_eq!(step_focus(&[1, 2, 3], Some(3), true), Some(1));
        assert_eq!(step_focus(&[1, 2, 3], Some(1), false), Some(3));
        assert_eq!(step_focus(&[1, 2, 3], None, false), Some(3));
        assert_eq!(step_focus(&[], Some(1), true), None);
    }

    #[test]
    fn panicking_callback_propagates_and_leaves_state_clean() {
        let boom: Rc<dyn Fn()> = Rc::new(|| panic!("session failed"));
        let frame = frame_with(vec![(1, R, Some(boom))]);
        let mut d = Dispatcher::new();
        let mut focused = None;
        d.pointer_down(&frame, INSIDE, &mut focused);

        let r = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            d.pointer_up(&frame, INSIDE);
        }));
        assert!(r.is_err());
        assert!(d.interactions().pressed.is_empty());
        assert!(!d.pointer_up(&frame, INSIDE));
    }
}
