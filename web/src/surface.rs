use junban_core::DisplaySurface;

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct PanelView {
    pub text: String,
    pub pressed: bool,
}

impl Default for PanelView {
    fn default() -> Self {
        // panels start pressed down until the first round deals labels
        Self {
            text: String::new(),
            pressed: true,
        }
    }
}

/// Display surface backed by plain view state, rendered by the yew component after each update.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct ViewSurface {
    panels: Vec<PanelView>,
    timer_text: String,
}

impl ViewSurface {
    pub(crate) fn panels(&self) -> &[PanelView] {
        &self.panels
    }

    pub(crate) fn timer_text(&self) -> &str {
        &self.timer_text
    }
}

impl Default for ViewSurface {
    fn default() -> Self {
        Self {
            panels: Vec::new(),
            timer_text: "0.00".to_string(),
        }
    }
}

impl DisplaySurface for ViewSurface {
    type PanelHandle = usize;

    fn create_panel_surface(&mut self) -> usize {
        self.panels.push(PanelView::default());
        self.panels.len() - 1
    }

    fn set_panel_text(&mut self, panel: usize, text: &str) {
        if let Some(view) = self.panels.get_mut(panel) {
            view.text = text.to_string();
        }
    }

    fn set_panel_pressed(&mut self, panel: usize, pressed: bool) {
        if let Some(view) = self.panels.get_mut(panel) {
            view.pressed = pressed;
        }
    }

    fn set_timer_text(&mut self, text: &str) {
        self.timer_text = text.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use junban_core::{Game, GameConfig, TickId, TickScheduler};
    use std::time::Duration;
    use web_time::Instant;

    #[test]
    fn panels_start_pressed_and_empty() {
        let mut surface = ViewSurface::default();

        let handle = surface.create_panel_surface();

        assert_eq!(handle, 0);
        assert_eq!(surface.panels(), [PanelView::default()]);
        assert!(surface.panels()[0].pressed);
        assert_eq!(surface.timer_text(), "0.00");
    }

    #[test]
    fn updates_target_only_the_given_panel() {
        let mut surface = ViewSurface::default();
        let first = surface.create_panel_surface();
        let second = surface.create_panel_surface();

        surface.set_panel_text(second, "3");
        surface.set_panel_pressed(second, false);
        surface.set_timer_text("1.23");

        assert_eq!(surface.panels()[first], PanelView::default());
        assert_eq!(surface.panels()[second].text, "3");
        assert!(!surface.panels()[second].pressed);
        assert_eq!(surface.timer_text(), "1.23");
    }

    struct NoopScheduler;

    impl TickScheduler for NoopScheduler {
        type Handle = ();

        fn schedule(&mut self, _tick: TickId, _delay: Duration) {}

        fn cancel(&mut self, _handle: ()) {}
    }

    #[test]
    fn round_is_reflected_in_view_state() {
        let t0 = Instant::now();
        let mut game = Game::new(GameConfig::new(3), ViewSurface::default(), NoopScheduler);
        assert!(game.display().panels().iter().all(|panel| panel.pressed));

        game.start_with_labels([2, 0, 3, 1], t0).unwrap();
        let texts: Vec<_> = game.display().panels().iter().map(|p| p.text.as_str()).collect();
        assert_eq!(texts, ["2", "0", "3", "1"]);
        assert!(game.display().panels().iter().all(|panel| !panel.pressed));

        game.click(1, t0 + Duration::from_millis(20)).unwrap();
        assert!(game.display().panels()[1].pressed);
        assert!(!game.display().panels()[0].pressed);
        assert_eq!(game.display().timer_text(), "0.00");
    }
}
