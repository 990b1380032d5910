//! # Views, modifiers and frames
//!
//! Voicecart describes a screen as a plain tree of `View` values. Building a
//! view is a pure function: it allocates, it never runs user callbacks.
//!
//! ```rust
//! use voicecart_core::*;
//!
//! let label = View::new(
//!     0,
//!     ViewKind::Text {
//!         text: "Hello".into(),
//!         color: Color::WHITE,
//!         font_size: 16.0,
//!         weight: FontWeight::Regular,
//!     },
//! )
//! .modifier(Modifier::new().padding(8.0));
//!
//! assert_eq!(label.texts(), vec!["Hello"]);
//! ```
//!
//! A host turns the tree into a `Frame` (scene, hit regions, semantics) with
//! `voicecart_ui::layout_and_paint`, usually through `Scheduler::compose`, and
//! feeds pointer and keyboard input back through the hit regions.
//!
//! - `View` / `ViewKind`: the declarative tree.
//! - `Modifier`: layout and decoration of one node.
//! - `Theme` / `Density`: scoped composition locals (see [`locals`]).
//! - `Frame` / `HitRegion` / `SemNode`: what a render pass produces.

pub mod color;
pub mod geometry;
pub mod locals;
pub mod modifier;
pub mod prelude;
pub mod runtime;
pub mod semantics;
pub mod view;

pub use color::*;
pub use geometry::*;
pub use locals::*;
pub use modifier::*;
pub use runtime::*;
pub use semantics::*;
pub use view::*;
