use alloc::string::ToString;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PanelState {
    /// Before the first round: pressed down, no label.
    Idle,
    Unsolved,
    Solved,
}

impl PanelState {
    pub const fn is_pressed(self) -> bool {
        !matches!(self, Self::Unsolved)
    }
}

impl Default for PanelState {
    fn default() -> Self {
        Self::Idle
    }
}

/// One clickable cell of the board.
#[derive(Clone, Debug, PartialEq)]
pub struct Panel<H> {
    handle: H,
    label: Option<Label>,
    state: PanelState,
}

impl<H: Copy> Panel<H> {
    pub fn new(handle: H) -> Self {
        Self {
            handle,
            label: None,
            state: Default::default(),
        }
    }

    pub fn handle(&self) -> H {
        self.handle
    }

    pub fn label(&self) -> Option<Label> {
        self.label
    }

    pub fn state(&self) -> PanelState {
        self.state
    }

    pub fn is_solved(&self) -> bool {
        matches!(self.state, PanelState::Solved)
    }

    /// Resets the panel for a new round showing `label`.
    pub fn activate<D>(&mut self, label: Label, surface: &mut D)
    where
        D: DisplaySurface<PanelHandle = H>,
    {
        self.state = PanelState::Unsolved;
        self.label = Some(label);
        surface.set_panel_text(self.handle, &label.to_string());
        surface.set_panel_pressed(self.handle, false);
    }

    /// Handles a click, returns whether it was accepted.
    ///
    /// Only an unsolved panel whose label equals `expected` accepts; it then turns solved until the next
    /// [`activate`](Self::activate). Everything else leaves the panel untouched.
    pub fn check<D>(&mut self, expected: Option<Label>, surface: &mut D) -> bool
    where
        D: DisplaySurface<PanelHandle = H>,
    {
        if !matches!(self.state, PanelState::Unsolved) {
            return false;
        }

        if expected.is_none() || self.label != expected {
            return false;
        }

        self.state = PanelState::Solved;
        surface.set_panel_pressed(self.handle, true);
        true
    }
}
