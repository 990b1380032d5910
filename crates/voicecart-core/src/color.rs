use crate::Vec2;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Color(pub u8, pub u8, pub u8, pub u8);

impl Color {
    pub const BLACK: Color = Color(0, 0, 0, 255);
    pub const WHITE: Color = Color(255, 255, 255, 255);

    /// Parses `#RRGGBB` or `#RRGGBBAA` (leading `#` optional).
    pub fn parse_hex(hex: &str) -> Option<Self> {
        let s = hex.trim().trim_start_matches('#');
        if !matches!(s.len(), 6 | 8) || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&s[i..i + 2], 16).ok();
        let alpha = if s.len() == 8 { channel(6)? } else { 255 };
        Some(Color(channel(0)?, channel(2)?, channel(4)?, alpha))
    }
    /// Like `parse_hex`, but malformed input yields opaque black.
    pub fn from_hex(hex: &str) -> Self {
        Self::parse_hex(hex).unwrap_or(Color::BLACK)
    }
    pub fn with_alpha(self, a: u8) -> Self {
        Color(self.0, self.1, self.2, a)
    }
    /// Scales the color channels towards black; `amount` in 0..=1.
    pub fn darken(self, amount: f32) -> Self {
        let k = 1.0 - amount.clamp(0.0, 1.0);
        let scale = |c: u8| (c as f32 * k).round() as u8;
        Color(scale(self.0), scale(self.1), scale(self.2), self.3)
    }
}

/// Fill for backgrounds.
///
/// Gradients are defined in normalized local space: (0,0) is the node's
/// top-left corner and (1,1) its bottom-right.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Brush {
    Solid(Color),
    Linear {
        start: Vec2,
        end: Vec2,
        start_color: Color,
        end_color: Color,
    },
}

impl Brush {
    pub fn darken(self, amount: f32) -> Self {
        match self {
            Brush::Solid(c) => Brush::Solid(c.darken(amount)),
            Brush::Linear {
                start,
                end,
                start_color,
                end_color,
            } => Brush::Linear {
                start,
                end,
                start_color: start_color.darken(amount),
                end_color: end_color.darken(amount),
            },
        }
    }
}

impl From<Color> for Brush {
    fn from(c: Color) -> Self {
        Brush::Solid(c)
    }
}

pub struct LinearGradient;

impl LinearGradient {
    pub fn horizontal(left: Color, right: Color) -> Brush {
        Self::between(Vec2 { x: 0.0, y: 0.0 }, Vec2 { x: 1.0, y: 0.0 }, left, right)
    }

    /// Top-left to bottom-right.
    pub fn diagonal(from: Color, to: Color) -> Brush {
        Self::between(Vec2 { x: 0.0, y: 0.0 }, Vec2 { x: 1.0, y: 1.0 }, from, to)
    }

    fn between(start: Vec2, end: Vec2, start_color: Color, end_color: Color) -> Brush {
        Brush::Linear {
            start,
            end,
            start_color,
            end_color,
        }
    }
}
