//! Start-of-day configuration.

use embassy_time::Duration;

use crate::color::ColorOrder;
use crate::mode::DisplayMode;
use crate::sampler::SamplerTimings;
use crate::timing::PulseTiming;

/// Number of LEDs on each strip
pub const DEFAULT_STRIP_LENGTH: u8 = 8;

/// Number of strips on the output port
pub const DEFAULT_STRIP_COUNT: usize = 8;

/// Full-scale reading of the 8-bit converter
pub const DEFAULT_ACCURACY: u8 = 255;

/// Maximum channel level sent to the LEDs
pub const DEFAULT_BRIGHTNESS: u8 = 255;

/// Reset gap that latches a WS2812-style strip
pub const WS2812_LATCH: Duration = Duration::from_micros(50);

/// Configuration for the display controller
#[derive(Debug, Clone, Copy)]
pub struct EqualizerConfig {
    /// LEDs per strip, used by the sample mapping
    pub strip_length: u8,
    /// Full-scale sample value
    pub accuracy: u8,
    /// Channel level for lit pixels
    pub brightness: u8,
    /// Mode selected at start of day
    pub initial_mode: DisplayMode,
    /// Wire timing of the bit encoder
    pub pulse_timing: PulseTiming,
    /// Byte order of a pixel on the wire
    pub color_order: ColorOrder,
    /// Strobe and conversion timing
    pub sampler: SamplerTimings,
    /// Optional reset gap after each redrawn strip
    pub latch: Option<Duration>,
}

impl Default for EqualizerConfig {
    fn default() -> Self {
        Self {
            strip_length: DEFAULT_STRIP_LENGTH,
            accuracy: DEFAULT_ACCURACY,
            brightness: DEFAULT_BRIGHTNESS,
            initial_mode: DisplayMode::Default,
            pulse_timing: PulseTiming::default(),
            color_order: ColorOrder::default(),
            sampler: SamplerTimings::default(),
            latch: None,
        }
    }
}
