//! Rainbow colour walk and the timer tick that drives it
//!
//! The colour hands off red → green → blue → red: once a channel reaches the
//! ceiling, the channel before it drains to zero and then the one after it
//! rises. Starting from [`RainbowColor::seed`] the walk repeats every
//! [`RainbowColor::period`] ticks.

use core::cell::Cell;

use critical_section::Mutex;
use embassy_time::Duration;

use crate::color::Rgb;

/// Default tick period (timer compare 2169 at 20 MHz / 64)
pub const ANIMATION_TICK: Duration = Duration::from_micros(6_944);

/// Shared animated colour, each channel in `0..=ceiling`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RainbowColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RainbowColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Known starting phase: green at the ceiling, others off
    pub const fn seed(ceiling: u8) -> Self {
        Self::new(0, ceiling, 0)
    }

    /// Number of ticks for one full walk at this ceiling
    pub const fn period(ceiling: u8) -> u32 {
        (6 * ceiling as u32).saturating_sub(2)
    }

    /// Advance the walk by one tick
    ///
    /// The three checks run in order on the updated state, so a channel that
    /// reaches the ceiling can start the next hand-off in the same tick.
    pub fn advance(&mut self, ceiling: u8) {
        if self.r >= ceiling {
            step(&mut self.b, &mut self.g, ceiling);
        }
        if self.g >= ceiling {
            step(&mut self.r, &mut self.b, ceiling);
        }
        if self.b >= ceiling {
            step(&mut self.g, &mut self.r, ceiling);
        }
    }

    pub const fn to_rgb(self) -> Rgb {
        Rgb {
            r: self.r,
            g: self.g,
            b: self.b,
        }
    }
}

/// Drain `falling` if anything is left, otherwise raise `rising`
#[inline]
fn step(falling: &mut u8, rising: &mut u8, ceiling: u8) {
    if *falling > 0 {
        *falling -= 1;
    } else {
        *rising = rising.saturating_add(1).min(ceiling);
    }
}

#[derive(Debug, Clone, Copy)]
struct ClockState {
    armed: bool,
    ceiling: u8,
    color: RainbowColor,
}

/// Timer-driven owner of the shared [`RainbowColor`]
///
/// Lives in a `static`; the timer interrupt calls [`on_tick`](Self::on_tick)
/// and the renderer reads through [`snapshot`](Self::snapshot). Both take a
/// short critical section so a read never observes a half-updated colour.
pub struct AnimationClock {
    state: Mutex<Cell<ClockState>>,
}

impl AnimationClock {
    /// Create a disarmed clock; the ceiling is set when it is armed
    pub const fn new() -> Self {
        Self {
            state: Mutex::new(Cell::new(ClockState {
                armed: false,
                ceiling: 0,
                color: RainbowColor::new(0, 0, 0),
            })),
        }
    }

    /// Timer interrupt body: one step of the walk while armed
    pub fn on_tick(&self) {
        critical_section::with(|cs| {
            let cell = self.state.borrow(cs);
            let mut state = cell.get();
            if !state.armed {
                return;
            }
            state.color.advance(state.ceiling);
            cell.set(state);
        });
    }

    /// Copy of the current colour
    pub fn snapshot(&self) -> RainbowColor {
        critical_section::with(|cs| self.state.borrow(cs).get().color)
    }

    pub fn is_armed(&self) -> bool {
        critical_section::with(|cs| self.state.borrow(cs).get().armed)
    }

    /// Upper bound of every channel since the last arm
    pub fn ceiling(&self) -> u8 {
        critical_section::with(|cs| self.state.borrow(cs).get().ceiling)
    }

    /// Reset the colour to the seed phase at `ceiling` and start advancing
    /// on ticks
    pub(crate) fn arm(&self, ceiling: u8) {
        critical_section::with(|cs| {
            self.state.borrow(cs).set(ClockState {
                armed: true,
                ceiling,
                color: RainbowColor::seed(ceiling),
            });
        });
    }

    /// Stop advancing; the colour keeps its last value
    pub(crate) fn disarm(&self) {
        critical_section::with(|cs| {
            let cell = self.state.borrow(cs);
            let state = cell.get();
            cell.set(ClockState {
                armed: false,
                ..state
            });
        });
    }
}

impl Default for AnimationClock {
    fn default() -> Self {
        Self::new()
    }
}
