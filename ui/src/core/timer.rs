//! Repeating interval timer with deterministic, idempotent cancellation.
//!
//! The loop is runtime-agnostic: it takes the sleep function as a parameter so
//! the Dioxus hooks can pass [`timing::sleep_ms`](super::timing::sleep_ms) and
//! tests can pass an instant sleeper. After every sleep the cancel token is
//! checked *before* the tick callback runs, so once `stop()` returns no tick
//! can touch the owner's state.

use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

use crate::error::{SiteError, SiteResult};

/// Shared cancellation flag. Cloning shares the flag.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Rc<Cell<bool>>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` only for the call that actually cancelled.
    pub fn cancel(&self) -> bool {
        !self.cancelled.replace(true)
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

/// Validated interval plus the token that stops it.
#[derive(Debug, Clone)]
pub struct IntervalTimer {
    interval_ms: u64,
    token: CancelToken,
}

impl IntervalTimer {
    pub fn new(interval_ms: u64) -> SiteResult<Self> {
        if interval_ms == 0 {
            return Err(SiteError::ZeroInterval(interval_ms));
        }
        Ok(Self {
            interval_ms,
            token: CancelToken::new(),
        })
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    pub fn token(&self) -> CancelToken {
        self.token.clone()
    }

    pub fn is_running(&self) -> bool {
        !self.token.is_cancelled()
    }

    /// Stop the timer. Safe to call any number of times.
    pub fn stop(&self) {
        if self.token.cancel() {
            tracing::debug!(interval_ms = self.interval_ms, "interval timer stopped");
        }
    }

    /// Drive the loop until stopped. Returns the number of ticks delivered.
    pub async fn run<S, Fut, F>(&self, mut sleep: S, mut on_tick: F) -> u64
    where
        S: FnMut(u64) -> Fut,
        Fut: Future<Output = ()>,
        F: FnMut(),
    {
        let mut ticks = 0u64;
        while !self.token.is_cancelled() {
            sleep(self.interval_ms).await;
            if self.token.is_cancelled() {
                break;
            }
            on_tick();
            ticks += 1;
        }
        ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::RefCell;

    use crate::core::rotation::RotationState;

    #[test]
    fn zero_interval_is_rejected() {
        assert!(matches!(
            IntervalTimer::new(0),
            Err(SiteError::ZeroInterval(0))
        ));
    }

    #[test]
    fn stop_is_idempotent() {
        let timer = IntervalTimer::new(10).unwrap();
        assert!(timer.is_running());
        timer.stop();
        timer.stop();
        assert!(!timer.is_running());
        assert!(!timer.token().cancel());
    }

    #[test]
    fn loop_ticks_until_cancelled() {
        let timer = IntervalTimer::new(3500).unwrap();
        let state = RefCell::new(RotationState::new(3));
        let token = timer.token();
        let slept = Cell::new(0u64);

        let ticks = block_on(timer.run(
            |ms| {
                slept.set(slept.get() + ms);
                async {}
            },
            || {
                state.borrow_mut().tick();
                if state.borrow().index() == 0 {
                    token.cancel();
                }
            },
        ));

        assert_eq!(ticks, 3);
        assert_eq!(slept.get(), 3 * 3500);
        assert_eq!(state.borrow().index(), 0);
    }

    #[test]
    fn cancel_during_sleep_suppresses_the_pending_tick() {
        let timer = IntervalTimer::new(5000).unwrap();
        let token = timer.token();
        let fired = Cell::new(0u32);
        let sleeps = Cell::new(0u32);

        let ticks = block_on(timer.run(
            |_| {
                sleeps.set(sleeps.get() + 1);
                if sleeps.get() == 2 {
                    token.cancel();
                }
                async {}
            },
            || fired.set(fired.get() + 1),
        ));

        assert_eq!(ticks, 1);
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn paused_rotation_holds_across_timer_ticks() {
        let timer = IntervalTimer::new(100).unwrap();
        let token = timer.token();
        let state = RefCell::new(RotationState::new(4));
        state.borrow_mut().tick();
        state.borrow_mut().pause();
        let count = Cell::new(0u32);

        block_on(timer.run(
            |_| async {},
            || {
                state.borrow_mut().tick();
                count.set(count.get() + 1);
                if count.get() == 5 {
                    token.cancel();
                }
            },
        ));
        assert_eq!(state.borrow().index(), 1);

        state.borrow_mut().resume();
        state.borrow_mut().tick();
        assert_eq!(state.borrow().index(), 2);
    }
}
