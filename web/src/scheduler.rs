use std::time::Duration;

use gloo::timers::callback::Timeout;
use junban_core::{TickId, TickScheduler};
use yew::html::Scope;

use crate::game::{GameView, Msg};

/// Arms browser timeouts that come back to the component as [`Msg::Tick`].
pub(crate) struct TimeoutScheduler {
    link: Scope<GameView>,
}

impl TimeoutScheduler {
    pub(crate) fn new(link: Scope<GameView>) -> Self {
        Self { link }
    }
}

impl TickScheduler for TimeoutScheduler {
    type Handle = Timeout;

    fn schedule(&mut self, tick: TickId, delay: Duration) -> Timeout {
        let link = self.link.clone();
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        Timeout::new(millis, move || link.send_message(Msg::Tick(tick)))
    }

    fn cancel(&mut self, handle: Timeout) {
        // dropping a gloo timeout clears it, even if it already fired
        drop(handle);
    }
}
