use rand::Rng;
use smallvec::SmallVec;

use crate::*;

/// The fixed row of panels, in display order.
#[derive(Clone, Debug, PartialEq)]
pub struct Board<H> {
    panels: [Panel<H>; PANEL_COUNT],
}

impl<H: Copy> Board<H> {
    pub fn new<D>(surface: &mut D) -> Self
    where
        D: DisplaySurface<PanelHandle = H>,
    {
        Self {
            panels: core::array::from_fn(|_| Panel::new(surface.create_panel_surface())),
        }
    }

    pub fn panels(&self) -> &[Panel<H>] {
        &self.panels
    }

    pub fn panel(&self, index: PanelIndex) -> Option<&Panel<H>> {
        self.panels.get(index)
    }

    pub fn panel_mut(&mut self, index: PanelIndex) -> Result<&mut Panel<H>> {
        self.panels.get_mut(index).ok_or(GameError::InvalidPanel)
    }

    pub fn labels(&self) -> [Option<Label>; PANEL_COUNT] {
        core::array::from_fn(|index| self.panels[index].label())
    }

    pub fn solved_count(&self) -> usize {
        self.panels.iter().filter(|panel| panel.is_solved()).count()
    }

    /// Deals a fresh random permutation of labels, drawing without replacement for each panel in display order.
    pub fn activate<R, D>(&mut self, rng: &mut R, surface: &mut D) -> [Label; PANEL_COUNT]
    where
        R: Rng,
        D: DisplaySurface<PanelHandle = H>,
    {
        let mut remaining: SmallVec<[Label; PANEL_COUNT]> = (0..TERMINAL_LABEL).collect();
        let mut labels = [0; PANEL_COUNT];

        for (slot, panel) in labels.iter_mut().zip(self.panels.iter_mut()) {
            let label = remaining.remove(rng.random_range(0..remaining.len()));
            panel.activate(label, surface);
            *slot = label;
        }

        debug_assert!(remaining.is_empty());
        labels
    }

    /// Activates with a caller-chosen arrangement. Nothing is touched when `labels` is not a permutation.
    pub fn activate_with<D>(&mut self, labels: [Label; PANEL_COUNT], surface: &mut D) -> Result<()>
    where
        D: DisplaySurface<PanelHandle = H>,
    {
        if !is_permutation(&labels) {
            return Err(GameError::InvalidLabels);
        }

        for (&label, panel) in labels.iter().zip(self.panels.iter_mut()) {
            panel.activate(label, surface);
        }
        Ok(())
    }
}
