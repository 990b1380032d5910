use crate::{Brush, Color, Modifier, Rect};
use std::rc::Rc;

pub type ViewId = u64;

pub type Callback = Rc<dyn Fn()>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FontWeight {
    #[default]
    Regular,
    Semibold,
    Bold,
}

/// Vector glyphs available to `ViewKind::Icon`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Glyph {
    ShoppingBag,
    Microphone,
    ChartBar,
    Receipt,
    Lightning,
    Check,
    Star,
    Users,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IconWeight {
    #[default]
    Regular,
    Fill,
    Duotone,
}

#[derive(Clone)]
pub enum ViewKind {
    Surface,
    Box,
    Row,
    Column,
    Text {
        text: String,
        color: Color,
        font_size: f32,
        weight: FontWeight,
    },
    Button {
        text: String,
        icon: Option<Glyph>,
        on_click: Option<Callback>,
    },
    Icon {
        glyph: Glyph,
        size: f32,
        color: Color,
        weight: IconWeight,
    },
}

impl ViewKind {
    pub fn is_interactive(&self) -> bool {
        matches!(
            self,
            ViewKind::Button {
                on_click: Some(_),
                ..
            }
        )
    }
}

impl std::fmt::Debug for ViewKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewKind::Surface => write!(f, "Surface"),
            ViewKind::Box => write!(f, "Box"),
            ViewKind::Row => write!(f, "Row"),
            ViewKind::Column => write!(f, "Column"),
            ViewKind::Text {
                text,
                color,
                font_size,
                weight,
            } => f
                .debug_struct("Text")
                .field("text", text)
                .field("color", color)
                .field("font_size", font_size)
                .field("weight", weight)
                .finish(),
            ViewKind::Button { text, icon, .. } => f
                .debug_struct("Button")
                .field("text", text)
                .field("icon", icon)
                .field("on_click", &"<callback>")
                .finish(),
            ViewKind::Icon {
                glyph,
                size,
                color,
                weight,
            } => f
                .debug_struct("Icon")
                .field("glyph", glyph)
                .field("size", size)
                .field("color", color)
                .field("weight", weight)
                .finish(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct View {
    pub id: ViewId,
    pub kind: ViewKind,
    pub modifier: Modifier,
    pub children: Vec<View>,
    pub semantics: Option<crate::semantics::Semantics>,
}

impl View {
    pub fn new(id: ViewId, kind: ViewKind) -> Self {
        View {
            id,
            kind,
            modifier: Modifier::default(),
            children: vec![],
            semantics: None,
        }
    }
    pub fn modifier(mut self, m: Modifier) -> Self {
        self.modifier = m;
        self
    }
    pub fn with_children(mut self, kids: Vec<View>) -> Self {
        self.children = kids;
        self
    }
    pub fn semantics(mut self, s: crate::semantics::Semantics) -> Self {
        self.semantics = Some(s);
        self
    }

    /// Pre-order traversal of this view and all descendants.
    pub fn walk<'a>(&'a self, f: &mut impl FnMut(&'a View)) {
        f(self);
        for c in &self.children {
            c.walk(f);
        }
    }

    /// Every text run in pre-order, buttons included.
    pub fn texts(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.walk(&mut |v| match &v.kind {
            ViewKind::Text { text, .. } | ViewKind::Button { text, .. } => out.push(text.as_str()),
            _ => {}
        });
        out
    }

    pub fn interactive_count(&self) -> usize {
        let mut n = 0;
        self.walk(&mut |v| {
            if v.kind.is_interactive() {
                n += 1;
            }
        });
        n
    }
}

/// Renderable scene
#[derive(Clone, Debug, Default)]
pub struct Scene {
    pub clear_color: Color,
    pub nodes: Vec<SceneNode>,
    /// Laid-out height of the root, at least the window height.
    pub content_height: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SceneNode {
    Rect {
        rect: Rect,
        brush: Brush,
        radius: f32,
    },
    Border {
        rect: Rect,
        color: Color,
        width: f32,
        radius: f32,
    },
    Text {
        rect: Rect,
        text: String,
        color: Color,
        size: f32,
        weight: FontWeight,
    },
    Icon {
        rect: Rect,
        glyph: Glyph,
        color: Color,
        weight: IconWeight,
    },
}
