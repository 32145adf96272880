//! Delayed, cancellable callbacks.
//!
//! The ring never sleeps or spawns anything. It asks its host to call back
//! after a delay through the [`Scheduler`] trait and is told about expiry
//! through [`CircleBattery::on_timer`](crate::battery::CircleBattery::on_timer).
//!
//! Two timers exist per ring, each identified by a [`TimerToken`]:
//! - [`TimerToken::Animation`]: re-armed every charging frame (750 ms)
//! - [`TimerToken::Settle`]: armed once on attach (250 ms)
//!
//! Scheduling a token that is already pending replaces it, so there is never
//! more than one pending callback per token. Cancelling a token that is not
//! pending does nothing.
//!
//! [`TimerQueue`] is a ready-made scheduler with an explicit clock: the host
//! calls [`TimerQueue::advance`] with the current time and gets back the
//! tokens that fell due. The simulator and the tests drive the ring with it.

use core::time::Duration;

use heapless::Vec;
use log::debug;

/// Maximum number of pending timers per ring.
pub const MAX_PENDING_TIMERS: usize = 2;

/// Identifies one of the ring's timers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerToken {
    /// Next charge animation frame.
    Animation,
    /// One-shot redraw shortly after attach.
    Settle,
}

/// Host primitive for delayed execution.
pub trait Scheduler {
    /// Call back with `token` after `delay`, replacing a pending `token`.
    fn schedule(&mut self, token: TimerToken, delay: Duration);

    /// Drop the pending `token`, if any.
    fn cancel(&mut self, token: TimerToken);
}

impl<S: Scheduler + ?Sized> Scheduler for &mut S {
    fn schedule(&mut self, token: TimerToken, delay: Duration) { (**self).schedule(token, delay); }

    fn cancel(&mut self, token: TimerToken) { (**self).cancel(token); }
}

// =============================================================================
// Timer Queue
// =============================================================================

/// A pending callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Pending {
    token: TimerToken,
    deadline: Duration,
}

/// Fixed-capacity scheduler driven by an explicit clock.
///
/// Time is a [`Duration`] since an arbitrary epoch chosen by the host and
/// must not go backwards.
#[derive(Debug, Default)]
pub struct TimerQueue {
    now: Duration,
    pending: Vec<Pending, MAX_PENDING_TIMERS>,
}

impl TimerQueue {
    /// Create an empty queue with the clock at zero.
    pub const fn new() -> Self {
        Self {
            now: Duration::ZERO,
            pending: Vec::new(),
        }
    }

    /// Current queue time.
    #[inline]
    pub const fn now(&self) -> Duration { self.now }

    /// Number of pending timers.
    #[inline]
    pub fn len(&self) -> usize { self.pending.len() }

    /// Whether nothing is pending.
    #[inline]
    pub fn is_empty(&self) -> bool { self.pending.is_empty() }

    /// Whether `token` is pending.
    pub fn is_pending(&self, token: TimerToken) -> bool { self.pending.iter().any(|p| p.token == token) }

    /// Deadline of `token`, if pending.
    pub fn deadline(&self, token: TimerToken) -> Option<Duration> {
        self.pending.iter().find(|p| p.token == token).map(|p| p.deadline)
    }

    /// Earliest pending deadline. Hosts can sleep until then.
    pub fn next_deadline(&self) -> Option<Duration> { self.pending.iter().map(|p| p.deadline).min() }

    /// Move the clock to `now` and return the tokens that fell due,
    /// earliest deadline first. Due timers are removed.
    pub fn advance(&mut self, now: Duration) -> Vec<TimerToken, MAX_PENDING_TIMERS> {
        self.now = self.now.max(now);

        let mut due: Vec<Pending, MAX_PENDING_TIMERS> = Vec::new();
        let current = self.now;
        self.pending.retain(|p| {
            if p.deadline <= current {
                // Capacity matches `pending`, so this never fails
                due.push(*p).ok();
                false
            } else {
                true
            }
        });
        due.sort_unstable_by_key(|p| p.deadline);

        due.iter().map(|p| p.token).collect()
    }

    /// Drop every pending timer.
    pub fn clear(&mut self) { self.pending.clear(); }
}

impl Scheduler for TimerQueue {
    fn schedule(&mut self, token: TimerToken, delay: Duration) {
        self.cancel(token);
        let deadline = self.now + delay;
        debug!("timer {token:?} armed for {} ms", delay.as_millis());
        // One slot per token and tokens are unique, so there is always room
        self.pending.push(Pending { token, deadline }).ok();
    }

    fn cancel(&mut self, token: TimerToken) { self.pending.retain(|p| p.token != token); }
}
