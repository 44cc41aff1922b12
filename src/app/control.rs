use log::debug;
use std::{
    cmp::min,
    time::{Duration, Instant},
};

/// Ticks performed since play last (re)started
struct TickRate {
    since: Instant,
    ticks: usize,
}

impl TickRate {
    fn new(now: Instant) -> Self {
        Self { since: now, ticks: 0 }
    }

    fn register(&mut self, ticks: usize) {
        self.ticks += ticks;
    }

    fn per_second_at(&self, now: Instant) -> f64 {
        let secs = now.saturating_duration_since(self.since).as_secs_f64();
        if secs > 0. {
            self.ticks as f64 / secs
        } else {
            0.
        }
    }
}

/// Turns ggez's free-running update calls into ticks at a fixed rate
pub struct Control {
    tick_duration: Duration,
    last_update: Instant,

    // fraction of a tick not yet accounted for
    remainder: f64,

    // ticks still owed to catch up with the current time
    missed_updates: Option<usize>,

    measured: TickRate,
}

impl Control {
    /// Upper bound on ticks replayed after a stall
    const MAX_CATCH_UP: usize = 3;

    pub fn new(fps: f64) -> Self {
        let now = Instant::now();
        Self {
            tick_duration: Duration::from_secs_f64(1. / fps),
            last_update: now,
            remainder: 0.,
            missed_updates: None,
            measured: TickRate::new(now),
        }
    }

    /// Repeatedly called in update() as a while loop condition,
    /// true once for every tick that is due
    pub fn can_update(&mut self) -> bool {
        self.can_update_at(Instant::now())
    }

    fn can_update_at(&mut self, now: Instant) -> bool {
        match &mut self.missed_updates {
            Some(0) => {
                self.missed_updates = None;
                false
            }
            Some(n) => {
                *n -= 1;
                true
            }
            None => {
                let ticks = now.saturating_duration_since(self.last_update).as_secs_f64()
                    / self.tick_duration.as_secs_f64()
                    + self.remainder;
                let due = ticks as usize;

                if due > 0 {
                    self.remainder = ticks % 1.;
                    self.last_update = now;

                    let due = min(due, Self::MAX_CATCH_UP);
                    self.missed_updates = Some(due - 1);
                    self.measured.register(due);
                    true
                } else {
                    false
                }
            }
        }
    }

    /// Start counting ticks from now, nothing owed from before
    pub fn play(&mut self) {
        self.play_at(Instant::now());
    }

    fn play_at(&mut self, now: Instant) {
        self.last_update = now;
        self.remainder = 0.;
        self.missed_updates = None;
        self.measured = TickRate::new(now);
    }

    /// Call when play stops to log the tick rate achieved
    pub fn stop(&self) {
        debug!(
            "measured tick rate: {:.1}/s",
            self.measured.per_second_at(Instant::now())
        );
    }
}
