// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fixed-rate frame pacing.
//!
//! [`FrameLoop`] is the on/off switch and clock arithmetic a host scheduler
//! needs to redraw at a fixed rate. It never sleeps or spawns anything: the host
//! feeds it timestamps from its own clock and draws whenever [`FrameLoop::poll`]
//! says a frame is due.
//!
//! ```
//! use core::time::Duration;
//! use understory_view_tree::FrameLoop;
//!
//! let mut pacing = FrameLoop::new(50);
//! pacing.start();
//! assert!(pacing.poll(Duration::ZERO));
//! assert!(!pacing.poll(Duration::from_millis(10)));
//! assert!(pacing.poll(Duration::from_millis(20)));
//! pacing.stop();
//! assert!(!pacing.poll(Duration::from_millis(40)));
//! ```

use core::time::Duration;

/// Default target rate, matching common display refresh.
pub const DEFAULT_FPS: u32 = 60;

/// Decides when the next frame is due.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FrameLoop {
    interval: Duration,
    running: bool,
    next_due: Due,
    frames: u64,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Due {
    Now,
    At(Duration),
    // The next deadline is past `Duration::MAX`.
    Never,
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new(DEFAULT_FPS)
    }
}

impl FrameLoop {
    /// A stopped loop targeting `fps` frames per second. Zero is treated as one.
    pub fn new(fps: u32) -> Self {
        Self {
            interval: Duration::from_secs(1) / fps.max(1),
            running: false,
            next_due: Due::Now,
            frames: 0,
        }
    }

    /// Time between frames.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Start (or resume) producing frames. The next poll is always due.
    pub fn start(&mut self) {
        if !self.running {
            self.running = true;
            self.next_due = Due::Now;
        }
    }

    /// Stop producing frames.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// True between [`start`](Self::start) and [`stop`](Self::stop).
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Frames granted so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Returns `true` if a frame should be drawn at `now`.
    ///
    /// `now` is any monotonic timestamp. When the host falls behind by more
    /// than one interval, missed frames are dropped rather than replayed. Once
    /// the next deadline would pass [`Duration::MAX`], no further frames are
    /// granted until the loop is restarted.
    pub fn poll(&mut self, now: Duration) -> bool {
        if !self.running {
            return false;
        }
        let next = match self.next_due {
            Due::Never => return false,
            Due::At(due) if now < due => return false,
            Due::At(due) => due
                .checked_add(self.interval)
                .filter(|next| *next > now)
                .or_else(|| now.checked_add(self.interval)),
            Due::Now => now.checked_add(self.interval),
        };
        self.next_due = next.map_or(Due::Never, Due::At);
        self.grant()
    }

    fn grant(&mut self) -> bool {
        self.frames += 1;
        tracing::trace!(frame = self.frames, "frame due");
        true
    }
}
