use alloc::{format, string::String};
use core::time::Duration;
use serde::{Deserialize, Serialize};

/// Identity of one armed tick. Every scheduled tick gets a fresh id, so a late callback from a cancelled timer can
/// be told apart from the live one.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TickId(u64);

impl TickId {
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Host timer facility used to drive the elapsed time display.
///
/// `schedule` arms a one-shot callback. When it fires, the host must deliver it as
/// [`Game::tick`](crate::Game::tick) with the same id.
pub trait TickScheduler {
    type Handle;

    fn schedule(&mut self, tick: TickId, delay: Duration) -> Self::Handle;

    /// Must be a no-op for handles that already fired or were cancelled before.
    fn cancel(&mut self, handle: Self::Handle);
}

#[derive(Debug)]
pub(crate) struct ActiveTimer<H> {
    pub(crate) id: TickId,
    pub(crate) handle: H,
}

#[derive(Debug, Default)]
pub(crate) struct TickIdSource {
    next: u64,
}

impl TickIdSource {
    pub(crate) fn next_id(&mut self) -> TickId {
        let id = TickId(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }
}

/// Formats elapsed time as seconds with two decimals, rounding to the nearest hundredth.
pub fn format_elapsed(elapsed: Duration) -> String {
    let hundredths = (elapsed.as_millis() + 5) / 10;
    format!("{}.{:02}", hundredths / 100, hundredths % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_elapsed_uses_hundredths() {
        assert_eq!(format_elapsed(Duration::ZERO), "0.00");
        assert_eq!(format_elapsed(Duration::from_millis(9)), "0.01");
        assert_eq!(format_elapsed(Duration::from_millis(1234)), "1.23");
        assert_eq!(format_elapsed(Duration::from_millis(1235)), "1.24");
        assert_eq!(format_elapsed(Duration::from_millis(61_000)), "61.00");
    }

    #[test]
    fn tick_ids_are_never_reused() {
        let mut source = TickIdSource::default();
        let first = source.next_id();
        let second = source.next_id();

        assert_ne!(first, second);
        assert_eq!(second.get(), first.get() + 1);
    }
}
