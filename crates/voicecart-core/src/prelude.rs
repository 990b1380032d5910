pub use crate::color::{Brush, Color, LinearGradient};
pub use crate::geometry::{Rect, Size, Vec2};
pub use crate::locals::{Density, Dp, Theme, density, dp_to_px, theme, with_density, with_theme};
pub use crate::modifier::{Modifier, PaddingValues};
pub use crate::runtime::{Frame, HitRegion, Scheduler, SemNode, Viewport};
pub use crate::semantics::{Role, Semantics};
pub use crate::view::{
    Callback, FontWeight, Glyph, IconWeight, Scene, SceneNode, View, ViewId, ViewKind,
};
pub use taffy::{AlignItems, JustifyContent};
