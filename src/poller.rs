//! Polling
//!
//! Repeating timer behind a `Scheduler` seam, plus the per-view bookkeeping
//! that decides which fetch results get applied.

use std::str::FromStr;

use gloo_timers::callback::Interval;

use crate::error::FetchError;
use crate::models::Item;

// ========================
// Timer
// ========================

/// Source of repeating timers. Dropping the returned handle cancels the timer.
pub trait Scheduler {
    type Handle;

    fn repeat(&self, period_ms: u32, tick: Box<dyn FnMut()>) -> Self::Handle;
}

/// Browser timers via `setInterval`
pub struct IntervalScheduler;

impl Scheduler for IntervalScheduler {
    type Handle = Interval;

    fn repeat(&self, period_ms: u32, mut tick: Box<dyn FnMut()>) -> Interval {
        Interval::new(period_ms, move || tick())
    }
}

/// Keeps a poll loop alive; dropping it clears the timer
#[must_use = "dropping the handle stops polling"]
pub struct PollHandle<H> {
    _timer: H,
}

impl<H> PollHandle<H> {
    pub fn stop(self) {}
}

/// Stop whatever poll loop sits in `slot`; false if it was already released
pub fn release<H>(slot: &mut Option<PollHandle<H>>) -> bool {
    match slot.take() {
        Some(poll) => {
            poll.stop();
            true
        }
        None => false,
    }
}

/// Run `tick` once now, then every `period_ms` until the handle is dropped
pub fn start_polling<S: Scheduler>(
    scheduler: &S,
    period_ms: u32,
    mut tick: impl FnMut() + 'static,
) -> PollHandle<S::Handle> {
    tick();
    PollHandle {
        _timer: scheduler.repeat(period_ms, Box::new(tick)),
    }
}

// ========================
// Tick bookkeeping
// ========================

/// What to do when a response arrives while other ticks are outstanding
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OverlapPolicy {
    /// Every successful response overwrites the list, in arrival order
    Unordered,
    /// Drop a response if a later-issued tick has already been applied
    #[default]
    LatestIssued,
    /// Do not start a tick while a previous one is still in flight
    SkipWhileInFlight,
}

impl FromStr for OverlapPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "unordered" => Ok(Self::Unordered),
            "latest-issued" => Ok(Self::LatestIssued),
            "skip-while-in-flight" => Ok(Self::SkipWhileInFlight),
            other => Err(format!("Unknown overlap policy: {}", other)),
        }
    }
}

/// Handed out by `FeedState::begin_tick`, consumed by `complete`
#[derive(Debug)]
pub struct Ticket {
    seq: u64,
}

impl Ticket {
    pub fn seq(&self) -> u64 {
        self.seq
    }
}

#[derive(Debug, PartialEq)]
pub enum TickOutcome {
    /// List replaced
    Applied,
    /// A newer tick already landed; response dropped
    Stale,
    /// Tick failed; list untouched
    Failed(FetchError),
}

/// Item list of one mounted view and the ticks feeding it
#[derive(Debug, Default)]
pub struct FeedState {
    policy: OverlapPolicy,
    items: Option<Vec<Item>>,
    next_seq: u64,
    newest_applied: Option<u64>,
    in_flight: usize,
}

impl FeedState {
    pub fn new(policy: OverlapPolicy) -> Self {
        Self {
            policy,
            ..Default::default()
        }
    }

    /// `None` until the first successful tick
    pub fn items(&self) -> Option<&[Item]> {
        self.items.as_deref()
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Start a tick, or `None` if the policy skips it
    pub fn begin_tick(&mut self) -> Option<Ticket> {
        if self.policy == OverlapPolicy::SkipWhileInFlight && self.in_flight > 0 {
            return None;
        }

        let seq = self.next_seq;
        self.next_seq += 1;
        self.in_flight += 1;
        Some(Ticket { seq })
    }

    pub fn complete(&mut self, ticket: Ticket, result: Result<Vec<Item>, FetchError>) -> TickOutcome {
        self.in_flight = self.in_flight.saturating_sub(1);

        let items = match result {
            Ok(items) => items,
            Err(e) => return TickOutcome::Failed(e),
        };

        if self.policy == OverlapPolicy::LatestIssued
            && self.newest_applied.is_some_and(|newest| newest > ticket.seq)
        {
            return TickOutcome::Stale;
        }

        self.newest_applied = Some(self.newest_applied.map_or(ticket.seq, |n| n.max(ticket.seq)));
        self.items = Some(items);
        TickOutcome::Applied
    }

    /// Complete a tick and return the list the view should now show,
    /// `None` when the view must stay as it is
    pub fn settle(
        &mut self,
        ticket: Ticket,
        result: Result<Vec<Item>, FetchError>,
    ) -> (TickOutcome, Option<Vec<Item>>) {
        let outcome = self.complete(ticket, result);
        let update = match outcome {
            TickOutcome::Applied => self.items().map(<[Item]>::to_vec),
            TickOutcome::Stale | TickOutcome::Failed(_) => None,
        };
        (outcome, update)
    }
}
