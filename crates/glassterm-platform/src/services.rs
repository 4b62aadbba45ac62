//! Clock and random-number service traits and their implementations.

use chrono::NaiveDateTime;

// ---------------------------------------------------------------------------
// Clock
// ---------------------------------------------------------------------------

/// Abstraction over the local wall clock.
pub trait Clock {
    /// Current local date and time.
    fn now(&self) -> NaiveDateTime;
}

/// Wall clock backed by the host's local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        chrono::Local::now().naive_local()
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

// ---------------------------------------------------------------------------
// Random source
// ---------------------------------------------------------------------------

/// Abstraction over a source of uniformly distributed choices.
pub trait RandomSource {
    /// Next raw 32-bit value.
    fn next_u32(&mut self) -> u32;

    /// Pick an index in `0..len`. Returns 0 when `len` is 0.
    fn pick(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        // Multiply-shift keeps the bias below 2^-32 for any table we use.
        ((u64::from(self.next_u32()) * len as u64) >> 32) as usize
    }
}

/// Linear congruential generator.
///
/// Seeded from the system clock by default; use [`SeededRandom::with_seed`]
/// for a reproducible stream.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    state: u64,
}

impl SeededRandom {
    /// Seed from the current time.
    pub fn new() -> Self {
        let seed = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos() as u64;
        Self::with_seed(seed)
    }

    /// Seed explicitly.
    pub fn with_seed(seed: u64) -> Self {
        Self { state: seed }
    }
}

impl Default for SeededRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for SeededRandom {
    fn next_u32(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.state >> 32) as u32
    }
}

/// Replays a fixed list of indices, cycling when exhausted.
///
/// `pick` returns the next scripted index reduced modulo `len`, which makes
/// selections in tests explicit.
#[derive(Debug, Clone)]
pub struct SequenceRandom {
    picks: Vec<usize>,
    pos: usize,
}

impl SequenceRandom {
    /// Replay `picks` in order, then start over.
    pub fn new(picks: Vec<usize>) -> Self {
        Self { picks, pos: 0 }
    }

    fn advance(&mut self) -> usize {
        if self.picks.is_empty() {
            return 0;
        }
        let v = self.picks[self.pos % self.picks.len()];
        self.pos += 1;
        v
    }
}

impl RandomSource for SequenceRandom {
    fn next_u32(&mut self) -> u32 {
        self.advance() as u32
    }

    fn pick(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.advance() % len
    }
}
