//! Onboarding screen shown before a voice shopping session starts.
//!
//! Everything on the screen is fixed copy except the label of the single
//! start button. Building the view never calls `on_start_call`; the input
//! dispatcher calls it once per activation of that button.

use std::rc::Rc;

use voicecart_core::prelude::*;
use voicecart_ui::*;

const AMBER: &str = "#FBBF24";
const ORANGE: &str = "#FB923C";
const GREEN: &str = "#4ADE80";
const YELLOW: &str = "#FACC15";
const BLUE: &str = "#60A5FA";

/// Render-time inputs of the welcome screen.
#[derive(Clone)]
pub struct WelcomeViewProps {
    pub start_button_text: String,
    pub on_start_call: Callback,
}

impl WelcomeViewProps {
    pub fn new(start_button_text: impl Into<String>, on_start_call: impl Fn() + 'static) -> Self {
        Self {
            start_button_text: start_button_text.into(),
            on_start_call: Rc::new(on_start_call),
        }
    }

    pub fn render(&self) -> View {
        let cb = self.on_start_call.clone();
        WelcomeView(self.start_button_text.clone(), move || cb())
    }
}

pub fn WelcomeView(start_button_text: impl Into<String>, on_start_call: impl Fn() + 'static) -> View {
    let th = theme();

    Surface(
        Modifier::new()
            .fill_max_size()
            .background_brush(LinearGradient::diagonal(th.background, th.background_mid)),
        Row(Modifier::new().fill_max_size()).child((
            BuiltWithBadge(),
            Column(
                Modifier::new()
                    .flex_grow(1.0)
                    .justify_content(JustifyContent::Center)
                    .padding_values(PaddingValues::symmetric(48.0, 0.0)),
            )
            .child((
                BrandLogo(),
                Headline(),
                Column(Modifier::new().max_width(512.0).margin_bottom(32.0)).child(
                    Text("Order groceries, snacks & fresh produce using just your voice. No typing, no clicking.")
                        .size(18.0)
                        .color(th.body),
                ),
                Row(Modifier::new().gap(48.0).margin_bottom(40.0)).child((
                    Stat("10 min", "Delivery"),
                    Stat("25,000+", "Products"),
                    Stat("24/7", "Available"),
                )),
                StartButton(start_button_text.into(), on_start_call),
                Row(Modifier::new().gap(16.0).margin_top(32.0)).child((
                    FeatureHint(Glyph::Microphone, "Speak naturally"),
                    FeatureHint(Glyph::ChartBar, "Smart cart"),
                    FeatureHint(Glyph::Receipt, "Recipe mode"),
                )),
            )),
            Column(
                Modifier::new()
                    .flex_grow(1.0)
                    .justify_content(JustifyContent::Center)
                    .gap(24.0)
                    .padding_values(PaddingValues::symmetric(48.0, 0.0)),
            )
            .child((
                FeatureCard(
                    Glyph::ChartBar,
                    Color::from_hex(AMBER),
                    "Smart Cart",
                    "Add, remove, or modify items with voice",
                ),
                FeatureCard(
                    Glyph::Receipt,
                    Color::from_hex(ORANGE),
                    "Recipe Mode",
                    "Say \"pasta\" and we add all ingredients",
                ),
                FeatureCard(
                    Glyph::Lightning,
                    Color::from_hex(GREEN),
                    "10-Min Delivery",
                    "Ultra-fast delivery guaranteed",
                ),
                TrustIndicators(),
            )),
        )),
    )
}

fn BuiltWithBadge() -> View {
    Box(Modifier::new()
        .absolute()
        .offset(None, Some(24.0), Some(24.0), None))
    .child(
        Text("BUILT WITH LIVEKIT AGENTS")
            .size(12.0)
            .color(theme().muted),
    )
}

fn BrandLogo() -> View {
    let th = theme();
    Row(Modifier::new()
        .gap(12.0)
        .align_items(AlignItems::Center)
        .margin_bottom(32.0))
    .child((
        Box(Modifier::new()
            .size(56.0, 56.0)
            .background_brush(LinearGradient::diagonal(
                Color::from_hex(AMBER),
                Color::from_hex("#F59E0B"),
            ))
            .clip_rounded(16.0)
            .align_items(AlignItems::Center)
            .justify_content(JustifyContent::Center))
        .child(Icon(Glyph::ShoppingBag, 32.0).color(Color::WHITE)),
        Column(Modifier::new()).child((
            Text("Zepto").size(24.0).bold().color(th.on_surface),
            Text("Voice Shopping").size(14.0).color(th.muted),
        )),
    ))
}

fn Headline() -> View {
    let th = theme();
    Column(Modifier::new().margin_bottom(24.0)).child((
        Heading("Groceries in").size(48.0).bold().color(th.on_surface),
        Text("10 minutes").size(48.0).bold().color(th.primary),
    ))
}

fn Stat(value: &str, label: &str) -> View {
    Column(Modifier::new()).child((
        Text(value).size(30.0).bold().color(theme().on_surface),
        Text(label).size(14.0).color(theme().muted),
    ))
}

fn StartButton(label: String, on_start_call: impl Fn() + 'static) -> View {
    let th = theme();
    Button(label, on_start_call)
        .leading_icon(Glyph::Lightning)
        .modifier(
            Modifier::new()
                .align_self_start()
                .padding_values(PaddingValues::symmetric(32.0, 16.0))
                .background_brush(LinearGradient::horizontal(th.primary, th.primary_end))
                .clip_rounded(999.0),
        )
}

fn FeatureHint(glyph: Glyph, label: &str) -> View {
    let muted = theme().muted;
    Row(Modifier::new().gap(4.0).align_items(AlignItems::Center)).child((
        Icon(glyph, 16.0).icon_weight(IconWeight::Fill).color(muted),
        Text(label).size(14.0).color(muted),
    ))
}

fn FeatureCard(glyph: Glyph, tint: Color, title: &str, description: &str) -> View {
    let th = theme();
    Box(Modifier::new()
        .background(th.surface)
        .border(1.0, th.outline, 16.0)
        .clip_rounded(16.0)
        .padding(24.0))
    .child(
        Row(Modifier::new().gap(16.0).align_items(AlignItems::FlexStart)).child((
            Box(Modifier::new()
                .size(48.0, 48.0)
                .background(tint.with_alpha(26))
                .clip_rounded(12.0)
                .align_items(AlignItems::Center)
                .justify_content(JustifyContent::Center))
            .child(Icon(glyph, 24.0).icon_weight(IconWeight::Duotone).color(tint)),
            Column(Modifier::new().flex_grow(1.0)).child((
                Text(title)
                    .size(18.0)
                    .weight(FontWeight::Semibold)
                    .color(th.on_surface)
                    .modifier(Modifier::new().margin_bottom(8.0)),
                Text(description).size(14.0).color(th.muted),
            )),
        )),
    )
}

fn TrustIndicators() -> View {
    let trust = |glyph: Glyph, tint: &str, label: &str| {
        Row(Modifier::new().gap(8.0).align_items(AlignItems::Center)).child((
            Icon(glyph, 14.0).color(Color::from_hex(tint)),
            Text(label).size(14.0).color(theme().body),
        ))
    };
    Row(Modifier::new()
        .justify_content(JustifyContent::Center)
        .align_items(AlignItems::Center)
        .gap(32.0)
        .padding_values(PaddingValues {
            top: 24.0,
            ..PaddingValues::default()
        }))
    .child((
        trust(Glyph::Check, GREEN, "Secure"),
        trust(Glyph::Star, YELLOW, "4.8★"),
        trust(Glyph::Users, BLUE, "10M+"),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn counter() -> (Rc<Cell<u32>>, impl Fn() + 'static) {
        let n = Rc::new(Cell::new(0));
        let c = n.clone();
        (n, move || c.set(c.get() + 1))
    }

    fn find_button(v: &View) -> Option<&View> {
        let mut found = None;
        v.walk(&mut |n| {
            if found.is_none() && matches!(n.kind, ViewKind::Button { .. }) {
                found = Some(n);
            }
        });
        found
    }

    #[test]
    fn label_is_rendered_verbatim() {
        for label in ["START SHOPPING", "start shopping", "Bestellen 🛒", "  padded  "] {
            let v = WelcomeView(label, || {});
            match &find_button(&v).unwrap().kind {
                ViewKind::Button { text, icon, .. } => {
                    assert_eq!(text, label);
                    assert_eq!(*icon, Some(Glyph::Lightning));
                }
                _ => unreachable!(),
            }
        }
    }

    #[test]
    fn exactly_one_interactive_control() {
        let v = WelcomeView("START SHOPPING", || {});
        assert_eq!(v.interactive_count(), 1);
    }

    #[test]
    fn building_does_not_invoke_callback() {
        let (n, cb) = counter();
        let _ = WelcomeView("", cb);
        assert_eq!(n.get(), 0);
    }

    #[test]
    fn fixed_copy_is_present() {
        let v = WelcomeView("START SHOPPING", || {});
        let texts = v.texts();
        for expected in [
            "BUILT WITH LIVEKIT AGENTS",
            "Zepto",
            "Voice Shopping",
            "Groceries in",
            "10 minutes",
            "Order groceries, snacks & fresh produce using just your voice. No typing, no clicking.",
            "10 min",
            "Delivery",
            "25,000+",
            "Products",
            "24/7",
            "Available",
            "Speak naturally",
            "Smart cart",
            "Recipe mode",
            "Smart Cart",
            "Add, remove, or modify items with voice",
            "Recipe Mode",
            "Say \"pasta\" and we add all ingredients",
            "10-Min Delivery",
            "Ultra-fast delivery guaranteed",
            "Secure",
            "4.8★",
            "10M+",
        ] {
            assert!(texts.contains(&expected), "missing {expected:?}");
        }
    }

    #[test]
    fn headline_is_a_heading() {
        let v = WelcomeView("x", || {});
        let mut headings = vec![];
        v.walk(&mut |n| {
            if let Some(s) = &n.semantics
                && s.role == Role::Heading
            {
                headings.push(s.label.clone());
            }
        });
        assert_eq!(headings, vec![Some("Groceries in".to_string())]);
    }

    #[test]
    fn props_render_shares_callback() {
        let (n, cb) = counter();
        let props = WelcomeViewProps::new("START SHOPPING", cb);
        let a = props.render();
        let b = props.render();
        for v in [&a, &b] {
            if let ViewKind::Button {
                on_click: Some(f), ..
            } = &find_button(v).unwrap().kind
            {
                f();
            }
        }
        assert_eq!(n.get(), 2);
    }
}
