//! Output lines the strips are wired to.

use embedded_hal::digital::OutputPin;

/// Logical output line carrying one strip's bitstream
pub type Channel = u8;

/// A bank of output lines addressable by channel number
///
/// Implement this for a raw port register when setting a pin through
/// `OutputPin` is too slow for the target clock.
pub trait LedPort {
    /// Drive `channel` high or low
    fn set_line(&mut self, channel: Channel, high: bool);
}

/// [`LedPort`] over an array of `embedded-hal` output pins
///
/// Channel `n` is `pins[n]`. Channels past the end are ignored.
pub struct PinBank<P, const N: usize> {
    pins: [P; N],
}

impl<P: OutputPin, const N: usize> PinBank<P, N> {
    /// Take ownership of the pins and drive them all low
    pub fn new(mut pins: [P; N]) -> Self {
        for pin in &mut pins {
            pin.set_low().ok();
        }
        Self { pins }
    }

    /// Give the pins back
    pub fn release(self) -> [P; N] {
        self.pins
    }
}

impl<P: OutputPin, const N: usize> LedPort for PinBank<P, N> {
    #[inline(always)]
    fn set_line(&mut self, channel: Channel, high: bool) {
        let Some(pin) = self.pins.get_mut(usize::from(channel)) else {
            return;
        };
        if high {
            pin.set_high().ok();
        } else {
            pin.set_low().ok();
        }
    }
}
