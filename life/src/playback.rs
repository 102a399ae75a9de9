// playback.rs - Play/pause state machine and tick scheduling

use std::time::{Duration, Instant};

/// Owns play/pause state, the generation interval, and the single pending
/// tick deadline. Nothing else in the crate has a notion of time.
///
/// The deadline is `Some` exactly while the machine is running, and there is
/// never more than one: `play` installs it, `pause` drops it, and a fired
/// tick replaces it with the next one.
#[derive(Debug)]
pub struct Playback {
    paused: bool,
    speed: Duration,
    default_speed: Duration,
    next_due: Option<Instant>,
}

impl Playback {
    /// Starts Paused with nothing scheduled.
    pub fn new(default_speed: Duration) -> Self {
        Self {
            paused: true,
            speed: default_speed,
            default_speed,
            next_due: None,
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn speed(&self) -> Duration {
        self.speed
    }

    /// Paused -> Running. The first tick is due immediately so resuming feels
    /// instantaneous; later ticks follow at the configured interval.
    pub fn play(&mut self, now: Instant) {
        self.paused = false;
        self.next_due = Some(now);
    }

    /// Running -> Paused, a no-op when already paused. Drops the pending
    /// deadline: once this returns, no tick can fire.
    pub fn pause(&mut self) {
        self.paused = true;
        self.next_due = None;
    }

    /// Applies to future scheduling only. An already-pending deadline keeps
    /// its original due time.
    pub fn set_speed(&mut self, speed: Duration) {
        self.speed = speed;
    }

    /// Forces Paused and restores the configured default interval.
    pub fn restart(&mut self) {
        self.pause();
        self.speed = self.default_speed;
    }

    /// Scheduler query: fires at most once per due deadline and advances the
    /// deadline by the current interval when it does. Always `false` while
    /// paused, even if a stale deadline were somehow still set, so a race
    /// between cancellation and firing resolves to a no-op.
    pub fn tick_due(&mut self, now: Instant) -> bool {
        if self.paused {
            return false;
        }
        match self.next_due {
            Some(due) if now >= due => {
                self.next_due = Some(now + self.speed);
                true
            }
            _ => false,
        }
    }
}
