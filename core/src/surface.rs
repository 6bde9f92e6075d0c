/// Rendering collaborator driven by the game.
///
/// The game never reads anything back from the surface: panel text, the pressed look and the timer text are
/// pushed whenever they change.
pub trait DisplaySurface {
    type PanelHandle: Copy;

    /// Creates the visual cell for one panel. Called once per panel when the board is built.
    fn create_panel_surface(&mut self) -> Self::PanelHandle;

    fn set_panel_text(&mut self, panel: Self::PanelHandle, text: &str);

    fn set_panel_pressed(&mut self, panel: Self::PanelHandle, pressed: bool);

    fn set_timer_text(&mut self, text: &str);
}
