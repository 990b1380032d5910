use std::rc::Rc;

use voicecart_core::prelude::*;
use voicecart_ui::{Dispatcher, Key, LayoutError, layout_and_paint};

use crate::config::AppConfig;
use crate::welcome::WelcomeViewProps;

/// Owns the app config and the welcome screen, and routes input to it.
///
/// The config is fixed for the shell's lifetime; callers only get `&AppConfig`.
pub struct Shell {
    config: AppConfig,
    props: WelcomeViewProps,
    scheduler: Scheduler,
    dispatcher: Dispatcher,
    dark: bool,
    frame: Option<Frame>,
}

impl Shell {
    /// `on_start_call` is what a start activation should do, typically
    /// kicking off a voice session. It runs once per activation.
    pub fn new(config: AppConfig, on_start_call: impl Fn() + 'static) -> Self {
        log::info!(
            "{} (agent: {}, sandbox: {})",
            config.page_title,
            config.agent_name.as_deref().unwrap_or("-"),
            config.sandbox_id.as_deref().unwrap_or("-"),
        );
        let on_start_call: Callback = Rc::new(on_start_call);
        let props = WelcomeViewProps::new(config.start_button_label(), move || {
            log::info!("start requested from welcome view");
            on_start_call()
        });
        Self {
            config,
            props,
            scheduler: Scheduler::new(),
            dispatcher: Dispatcher::new(),
            dark: true,
            frame: None,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn frame(&self) -> Option<&Frame> {
        self.frame.as_ref()
    }

    pub fn focused(&self) -> Option<u64> {
        self.scheduler.focused
    }

    /// Theme with the configured accent on the focus ring.
    pub fn theme(&self) -> Theme {
        let base = Theme::default();
        Theme {
            focus: self.config.accent_color(self.dark).unwrap_or(base.focus),
            ..base
        }
    }

    /// The welcome view as it would be composed now.
    pub fn view(&self) -> View {
        with_theme(self.theme(), || self.props.render())
    }

    pub fn compose(&mut self) -> Result<&Frame, LayoutError> {
        let theme = self.theme();
        let interactions = self.dispatcher.interactions();
        let props = &self.props;
        let frame = with_theme(theme, || {
            self.scheduler.compose(
                |_| props.render(),
                |root, viewport, focused| layout_and_paint(root, viewport, &interactions, focused),
            )
        })?;
        let vp = frame.viewport;
        log::debug!(
            "composed {}x{} at scroll {}: {} scene nodes, {} hit regions",
            vp.width,
            vp.height,
            vp.scroll_offset(),
            frame.scene.nodes.len(),
            frame.hit_regions.len()
        );
        Ok(self.frame.insert(frame))
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scheduler.viewport.scroll_offset()
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), LayoutError> {
        self.scheduler.viewport.set_size(width, height);
        // Content height depends on width; compose again if the new layout
        // clamped the offset the frame was painted at.
        let painted_at = self.compose()?.viewport.scroll_offset();
        if self.scroll_offset() != painted_at {
            self.compose()?;
        }
        Ok(())
    }

    /// Scrolls by `dy` px, clamped to the content. Returns the unconsumed part.
    pub fn scroll_by(&mut self, dy: f32) -> Result<f32, LayoutError> {
        self.ensure_frame()?;
        let leftover = self.scheduler.viewport.scroll_immediate(dy);
        self.compose()?;
        Ok(leftover)
    }

    pub fn set_dark(&mut self, dark: bool) -> Result<(), LayoutError> {
        self.dark = dark;
        self.compose().map(|_| ())
    }

    fn ensure_frame(&mut self) -> Result<(), LayoutError> {
        if self.frame.is_none() {
            self.compose()?;
        }
        Ok(())
    }

    pub fn pointer_move(&mut self, pos: Vec2) -> Result<(), LayoutError> {
        self.ensure_frame()?;
        if let Some(frame) = &self.frame {
            self.dispatcher.pointer_moved(frame, pos);
        }
        self.compose().map(|_| ())
    }

    /// Press and release at `pos`. Returns true if a click fired.
    pub fn pointer_click(&mut self, pos: Vec2) -> Result<bool, LayoutError> {
        self.ensure_frame()?;
        let fired = match &self.frame {
            Some(frame) => self
                .dispatcher
                .click(frame, pos, &mut self.scheduler.focused),
            None => false,
        };
        self.compose()?;
        Ok(fired)
    }

    /// Press and release of `key`. Returns true if a click fired.
    pub fn key(&mut self, key: Key) -> Result<bool, LayoutError> {
        self.ensure_frame()?;
        let fired = match &self.frame {
            Some(frame) => self.dispatcher.key(frame, key, &mut self.scheduler.focused),
            None => false,
        };
        self.compose()?;
        Ok(fired)
    }

    fn primary_rect(&self) -> Option<Rect> {
        self.frame
            .as_ref()
            .and_then(|f| f.semantics_nodes.iter().find(|n| n.role == Role::Button))
            .map(|n| n.rect)
    }

    /// Scrolls the start button into view and clicks its center.
    pub fn activate_primary(&mut self) -> Result<bool, LayoutError> {
        self.ensure_frame()?;
        let Some(rect) = self.primary_rect() else {
            log::warn!("no start button in the current frame");
            return Ok(false);
        };
        let window_h = self.scheduler.viewport.height as f32;
        let dy = if rect.y < 0.0 {
            rect.y
        } else if rect.y + rect.h > window_h {
            (rect.y + rect.h - window_h).min(rect.y)
        } else {
            0.0
        };
        if dy != 0.0 {
            self.scroll_by(dy)?;
        }

        let center = self.primary_rect().map(|r| r.center());
        match center {
            Some(p) if self.scheduler.viewport.contains(p) => self.pointer_click(p),
            _ => {
                log::warn!("start button is outside the {}px wide window", self.scheduler.viewport.width);
                Ok(false)
            }
        }
    }
}
