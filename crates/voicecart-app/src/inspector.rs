use std::fmt::Write;

use voicecart_core::{Frame, View, ViewKind};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Metrics {
    pub scene_nodes: usize,
    pub hit_regions: usize,
    pub semantics_nodes: usize,
}

impl Metrics {
    pub fn of(frame: &Frame) -> Self {
        Self {
            scene_nodes: frame.scene.nodes.len(),
            hit_regions: frame.hit_regions.len(),
            semantics_nodes: frame.semantics_nodes.len(),
        }
    }
}

/// Indented one-line-per-node dump of a view tree.
pub fn outline(view: &View) -> String {
    fn line(v: &View, depth: usize, out: &mut String) {
        let pad = "  ".repeat(depth);
        let _ = match &v.kind {
            ViewKind::Text { text, .. } => writeln!(out, "{pad}Text {text:?}"),
            ViewKind::Button { text, icon, .. } => match icon {
                Some(g) => writeln!(out, "{pad}Button {text:?} [{g:?}]"),
                None => writeln!(out, "{pad}Button {text:?}"),
            },
            ViewKind::Icon { glyph, .. } => writeln!(out, "{pad}Icon {glyph:?}"),
            other => writeln!(out, "{pad}{other:?}"),
        };
        for c in &v.children {
            line(c, depth + 1, out);
        }
    }
    let mut out = String::new();
    line(view, 0, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use voicecart_core::Modifier;
    use voicecart_ui::{Button, ButtonStyle, Column, Text, ViewExt};

    #[test]
    fn outline_indents_children() {
        let v = Column(Modifier::new()).child((
            Text("hi"),
            Button("go", || {}).leading_icon(voicecart_core::Glyph::Lightning),
        ));
        assert_eq!(
            outline(&v),
            "Column\n  Text \"hi\"\n  Button \"go\" [Lightning]\n"
        );
    }

    #[test]
    fn metrics_of_welcome_frame() {
        let mut shell = crate::Shell::new(crate::AppConfig::default(), || {});
        let m = Metrics::of(shell.compose().unwrap());
        assert_eq!(m.hit_regions, 1);
        assert!(m.scene_nodes > m.semantics_nodes);
        assert!(outline(&shell.view()).contains("Button \"START SHOPPING\" [Lightning]"));
    }
}
