use alloc::{
    string::{String, ToString},
    vec::Vec,
};
use core::time::Duration;

use crate::*;

#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct RecordedPanel {
    pub(crate) text: String,
    pub(crate) pressed: bool,
}

/// Display surface that keeps the latest state of every cell and the full history of timer texts.
#[derive(Clone, Debug, Default)]
pub(crate) struct RecordingSurface {
    panels: Vec<RecordedPanel>,
    timer_texts: Vec<String>,
}

impl RecordingSurface {
    pub(crate) fn panel_count(&self) -> usize {
        self.panels.len()
    }

    pub(crate) fn panel_text(&self, handle: usize) -> &str {
        &self.panels[handle].text
    }

    pub(crate) fn panel_pressed(&self, handle: usize) -> bool {
        self.panels[handle].pressed
    }

    pub(crate) fn timer_texts(&self) -> &[String] {
        &self.timer_texts
    }
}

impl DisplaySurface for RecordingSurface {
    type PanelHandle = usize;

    fn create_panel_surface(&mut self) -> usize {
        self.panels.push(RecordedPanel {
            text: String::new(),
            pressed: true,
        });
        self.panels.len() - 1
    }

    fn set_panel_text(&mut self, panel: usize, text: &str) {
        self.panels[panel].text = text.to_string();
    }

    fn set_panel_pressed(&mut self, panel: usize, pressed: bool) {
        self.panels[panel].pressed = pressed;
    }

    fn set_timer_text(&mut self, text: &str) {
        self.timer_texts.push(text.to_string());
    }
}

/// Scheduler whose ticks only fire when a test says so.
#[derive(Clone, Debug, Default)]
pub(crate) struct ManualScheduler {
    live: Vec<TickId>,
    scheduled: usize,
    cancelled: usize,
    last_delay: Option<Duration>,
}

impl ManualScheduler {
    /// Ticks that were armed and have neither fired nor been cancelled.
    pub(crate) fn live(&self) -> &[TickId] {
        &self.live
    }

    pub(crate) fn scheduled(&self) -> usize {
        self.scheduled
    }

    pub(crate) fn cancelled(&self) -> usize {
        self.cancelled
    }

    pub(crate) fn last_delay(&self) -> Option<Duration> {
        self.last_delay
    }

    /// Marks the oldest live tick as fired and returns its id for delivery.
    pub(crate) fn fire(&mut self) -> Option<TickId> {
        if self.live.is_empty() {
            None
        } else {
            Some(self.live.remove(0))
        }
    }
}

impl TickScheduler for ManualScheduler {
    type Handle = TickId;

    fn schedule(&mut self, tick: TickId, delay: Duration) -> TickId {
        self.live.push(tick);
        self.scheduled += 1;
        self.last_delay = Some(delay);
        tick
    }

    fn cancel(&mut self, handle: TickId) {
        if let Some(position) = self.live.iter().position(|&tick| tick == handle) {
            self.live.remove(position);
            self.cancelled += 1;
        }
    }
}
