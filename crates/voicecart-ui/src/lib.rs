#![allow(non_snake_case)]
//! Widgets, layout and input dispatch.

pub mod input;
pub mod layout;

use std::rc::Rc;

use voicecart_core::*;

pub use input::{Dispatcher, Interactions, Key};
pub use layout::{LayoutError, layout_and_paint};

pub fn Surface(modifier: Modifier, child: View) -> View {
    let mut v = View::new(0, ViewKind::Surface).modifier(modifier);
    v.children = vec![child];
    v
}

pub fn Box(modifier: Modifier) -> View {
    View::new(0, ViewKind::Box).modifier(modifier)
}

pub fn Row(modifier: Modifier) -> View {
    View::new(0, ViewKind::Row).modifier(modifier)
}

pub fn Column(modifier: Modifier) -> View {
    View::new(0, ViewKind::Column).modifier(modifier)
}

pub fn Text(text: impl Into<String>) -> View {
    View::new(
        0,
        ViewKind::Text {
            text: text.into(),
            color: Color::WHITE,
            font_size: 16.0, // dp (converted to px in layout/paint)
            weight: FontWeight::Regular,
        },
    )
}

pub fn Button(text: impl Into<String>, on_click: impl Fn() + 'static) -> View {
    let text = text.into();
    View::new(
        0,
        ViewKind::Button {
            text: text.clone(),
            icon: None,
            on_click: Some(Rc::new(on_click)),
        },
    )
    .semantics(Semantics::new(Role::Button).label(text))
}

pub fn Icon(glyph: Glyph, size: f32) -> View {
    View::new(
        0,
        ViewKind::Icon {
            glyph,
            size,
            color: Color::WHITE,
            weight: IconWeight::Regular,
        },
    )
    .semantics(Semantics::new(Role::Image))
}

/// Extension trait for child building
pub trait ViewExt: Sized {
    fn child(self, children: impl IntoChildren) -> Self;
}

impl ViewExt for View {
    fn child(self, children: impl IntoChildren) -> Self {
        self.with_children(children.into_children())
    }
}

pub trait IntoChildren {
    fn into_children(self) -> Vec<View>;
}

impl IntoChildren for View {
    fn into_children(self) -> Vec<View> {
        vec![self]
    }
}

impl IntoChildren for Vec<View> {
    fn into_children(self) -> Vec<View> {
        self
    }
}

impl<const N: usize> IntoChildren for [View; N] {
    fn into_children(self) -> Vec<View> {
        self.into()
    }
}

macro_rules! impl_into_children_tuple {
    ($($idx:tt $t:ident),+) => {
        impl<$($t: IntoChildren),+> IntoChildren for ($($t,)+) {
            fn into_children(self) -> Vec<View> {
                let mut v = Vec::new();
                $(v.extend(self.$idx.into_children());)+
                v
            }
        }
    };
}

impl_into_children_tuple!(0 A, 1 B);
impl_into_children_tuple!(0 A, 1 B, 2 C);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D, 4 E);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G, 7 H);

/// Method styling for `Text` and `Icon`; a no-op on other kinds.
pub trait TextStyle {
    fn color(self, c: Color) -> View;
    fn size(self, dp: f32) -> View;
    fn weight(self, w: FontWeight) -> View;
    fn bold(self) -> View;
}

impl TextStyle for View {
    fn color(mut self, c: Color) -> View {
        match &mut self.kind {
            ViewKind::Text { color, .. } | ViewKind::Icon { color, .. } => *color = c,
            _ => {}
        }
        self
    }
    fn size(mut self, dp: f32) -> View {
        match &mut self.kind {
            ViewKind::Text { font_size, .. } => *font_size = dp,
            ViewKind::Icon { size, .. } => *size = dp,
            _ => {}
        }
        self
    }
    fn weight(mut self, w: FontWeight) -> View {
        if let ViewKind::Text { weight, .. } = &mut self.kind {
            *weight = w;
        }
        self
    }
    fn bold(self) -> View {
        self.weight(FontWeight::Bold)
    }
}

pub trait IconStyle {
    fn icon_weight(self, w: IconWeight) -> View;
}

impl IconStyle for View {
    fn icon_weight(mut self, w: IconWeight) -> View {
        if let ViewKind::Icon { weight, .. } = &mut self.kind {
            *weight = w;
        }
        self
    }
}

pub trait ButtonStyle {
    /// Glyph drawn before the label; the label text itself is unchanged.
    fn leading_icon(self, g: Glyph) -> View;
}

impl ButtonStyle for View {
    fn leading_icon(mut self, g: Glyph) -> View {
        if let ViewKind::Button { icon, .. } = &mut self.kind {
            *icon = Some(g);
        }
        self
    }
}

/// Marks a text node as a heading for the semantics tree.
pub fn Heading(text: impl Into<String>) -> View {
    let text = text.into();
    Text(text.clone()).semantics(Semantics::new(Role::Heading).label(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn tuple_children_flatten_in_order() {
        let v = Column(Modifier::new()).child((Text("a"), vec![Text("b"), Text("c")], [Text("d")]));
        assert_eq!(v.texts(), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn button_carries_label_semantics() {
        let v = Button("Pay", || {});
        let sem = v.semantics.expect("button semantics");
        assert_eq!(sem.role, Role::Button);
        assert_eq!(sem.label.as_deref(), Some("Pay"));
    }

    #[test]
    fn leading_icon_keeps_label() {
        let v = Button("Go", || {}).leading_icon(Glyph::Lightning);
        match v.kind {
            ViewKind::Button { text, icon, .. } => {
                assert_eq!(text, "Go");
                assert_eq!(icon, Some(Glyph::Lightning));
            }
            other => panic!("unexpected kind {other:?}"),
        }
    }

    #[test]
    fn constructing_button_does_not_click() {
        let hits = Rc::new(Cell::new(0u32));
        let h = hits.clone();
        let _v = Button("x", move || h.set(h.get() + 1));
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn text_style_applies_to_icons_and_text_only() {
        let t = Text("t").color(Color::BLACK).size(30.0).bold();
        match t.kind {
            ViewKind::Text {
                color,
                font_size,
                weight,
                ..
            } => {
                assert_eq!(color, Color::BLACK);
                assert_eq!(font_size, 30.0);
                assert_eq!(weight, FontWeight::Bold);
            }
            other => panic!("unexpected kind {other:?}"),
        }

        let i = Icon(Glyph::Star, 16.0).size(24.0).icon_weight(IconWeight::Fill);
        match i.kind {
            ViewKind::Icon { size, weight, .. } => {
                assert_eq!(size, 24.0);
                assert_eq!(weight, IconWeight::Fill);
            }
            other => panic!("unexpected kind {other:?}"),
        }

        let b = Box(Modifier::new()).color(Color::BLACK);
        assert!(matches!(b.kind, ViewKind::Box));
    }
}
