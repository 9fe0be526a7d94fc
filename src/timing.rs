//! Pulse timing of the single-wire LED protocol.
//!
//! Every bit is a high phase followed by a low phase. A `1` has a long high
//! and a short low, a `0` the other way round.

/// High and low phase of one encoded bit, in nanoseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitTiming {
    pub high_ns: u32,
    pub low_ns: u32,
}

impl BitTiming {
    pub const fn new(high_ns: u32, low_ns: u32) -> Self {
        Self { high_ns, low_ns }
    }
}

/// Timing for both bit values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PulseTiming {
    pub one: BitTiming,
    pub zero: BitTiming,
}

/// '1' bit: 700ns high, 600ns low
pub const ONE_BIT: BitTiming = BitTiming::new(700, 600);

/// '0' bit: 350ns high, 800ns low
pub const ZERO_BIT: BitTiming = BitTiming::new(350, 800);

impl PulseTiming {
    /// Timing for the given bit value
    #[inline(always)]
    pub const fn for_bit(self, value: bool) -> BitTiming {
        if value { self.one } else { self.zero }
    }
}

impl Default for PulseTiming {
    fn default() -> Self {
        Self {
            one: ONE_BIT,
            zero: ZERO_BIT,
        }
    }
}
