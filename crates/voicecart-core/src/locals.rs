//! # Theming and locals
//!
//! UI parameters that apply to a whole subtree live in thread‑local
//! "composition locals" rather than being threaded through every widget:
//!
//! - `Theme`: colors for the backdrop, surfaces, text and the primary action.
//! - `Density`: dp→px scale factor.
//!
//! Override them for a subtree with `with_theme` / `with_density`:
//!
//! ```rust
//! use voicecart_core::*;
//!
//! let warm = Theme {
//!     primary: Color::from_hex("#F97316"),
//!     ..Theme::default()
//! };
//!
//! with_theme(warm, || {
//!     assert_eq!(theme().primary, Color::from_hex("#F97316"));
//! });
//! assert_eq!(theme().primary, Theme::default().primary);
//! ```

use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::collections::HashMap;

use crate::Color;

thread_local! {
    static LOCALS_STACK: RefCell<Vec<HashMap<TypeId, Box<dyn Any>>>> = RefCell::new(Vec::new());
}

/// density‑independent pixels (dp)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dp(pub f32);

impl Dp {
    /// Converts this dp value into physical pixels using the current Density.
    pub fn to_px(self) -> f32 {
        self.0 * density().scale
    }
}

/// Convenience: convert a raw dp scalar into px using current Density.
pub fn dp_to_px(dp: f32) -> f32 {
    Dp(dp).to_px()
}

fn with_locals_frame<R>(f: impl FnOnce() -> R) -> R {
    // Pops the frame on unwind too.
    struct Guard;
    impl Drop for Guard {
        fn drop(&mut self) {
            LOCALS_STACK.with(|st| {
                st.borrow_mut().pop();
            });
        }
    }
    LOCALS_STACK.with(|st| st.borrow_mut().push(HashMap::new()));
    let _guard = Guard;
    f()
}

fn set_local_boxed(t: TypeId, v: Box<dyn Any>) {
    LOCALS_STACK.with(|st| {
        let mut st = st.borrow_mut();
        if let Some(top) = st.last_mut() {
            top.insert(t, v);
        } else {
            let mut m = HashMap::new();
            m.insert(t, v);
            st.push(m);
        }
    });
}

fn local<T: Copy + Default + 'static>() -> T {
    LOCALS_STACK.with(|st| {
        for frame in st.borrow().iter().rev() {
            if let Some(v) = frame.get(&TypeId::of::<T>())
                && let Some(t) = v.downcast_ref::<T>()
            {
                return *t;
            }
        }
        T::default()
    })
}

/// Color theme used by widgets and layout.
///
/// Defaults to the dark slate/amber palette of the welcome screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    /// Backdrop gradient, top-left stop.
    pub background: Color,
    /// Backdrop gradient, middle stop.
    pub background_mid: Color,
    /// Card and panel fill.
    pub surface: Color,
    /// Primary foreground on top of `surface`/`background`.
    pub on_surface: Color,
    /// Secondary, low-emphasis text.
    pub muted: Color,
    /// Body copy; between `on_surface` and `muted`.
    pub body: Color,

    /// Accent for the primary action and highlighted copy.
    pub primary: Color,
    /// Second stop of the primary gradient.
    pub primary_end: Color,
    /// Foreground on top of `primary`.
    pub on_primary: Color,

    /// Low‑emphasis outline/border color.
    pub outline: Color,
    /// Focus ring color.
    pub focus: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::from_hex("#0F172A"),
            background_mid: Color::from_hex("#1E293B"),
            surface: Color::from_hex("#1E293B").with_alpha(128),
            on_surface: Color::WHITE,
            muted: Color::from_hex("#9CA3AF"),
            body: Color::from_hex("#D1D5DB"),
            primary: Color::from_hex("#FBBF24"),
            primary_end: Color::from_hex("#F59E0B"),
            on_primary: Color::from_hex("#0F172A"),
            outline: Color::from_hex("#334155"),
            focus: Color::from_hex("#9333EA"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Density {
    pub scale: f32, // dp→px multiplier
}
impl Default for Density {
    fn default() -> Self {
        Self { scale: 1.0 }
    }
}

pub fn with_theme<R>(theme: Theme, f: impl FnOnce() -> R) -> R {
    with_locals_frame(|| {
        set_local_boxed(TypeId::of::<Theme>(), Box::new(theme));
        f()
    })
}

pub fn with_density<R>(density: Density, f: impl FnOnce() -> R) -> R {
    with_locals_frame(|| {
        set_local_boxed(TypeId::of::<Density>(), Box::new(density));
        f()
    })
}

pub fn theme() -> Theme {
    local::<Theme>()
}

pub fn density() -> Density {
    local::<Density>()
}
