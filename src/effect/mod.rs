//! Per-mode pixel colouring
//!
//! All effects are stored in an enum to avoid trait objects.
//! Each effect implements the `Effect` trait and is a pure function of the
//! strip state, so the renderer can evaluate it inside the critical section.

mod bar;
mod rainbow;
mod shine;

pub use bar::BarEffect;
pub use rainbow::RainbowFillEffect;
pub use shine::ShineEffect;

use crate::animation::RainbowColor;
use crate::color::{OFF, Rgb};
use crate::mode::DisplayMode;
use crate::strip::Strip;

pub trait Effect {
    /// Colour of pixel `index`, which is known to be lit
    fn lit_color(&self, index: u8, strip: &Strip) -> Rgb;

    /// Colour of pixel `index`; everything above the lit part is off
    fn color_at(&self, index: u8, strip: &Strip) -> Rgb {
        if strip.is_lit(index) {
            self.lit_color(index, strip)
        } else {
            OFF
        }
    }
}

/// Effect slot - enum containing all possible effects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectSlot {
    /// Threshold bar for [`DisplayMode::Default`]
    Bar(BarEffect),
    /// Edge glow for [`DisplayMode::Shine`]
    Shine(ShineEffect),
    /// Uniform rainbow fill for [`DisplayMode::Rainbow`]
    Rainbow(RainbowFillEffect),
}

impl EffectSlot {
    /// Build the effect for `mode`
    ///
    /// `rainbow` is only used by the rainbow fill; pass a snapshot taken
    /// before rendering starts.
    pub const fn for_mode(mode: DisplayMode, brightness: u8, rainbow: RainbowColor) -> Self {
        match mode {
            DisplayMode::Default => Self::Bar(BarEffect::new(brightness)),
            DisplayMode::Shine => Self::Shine(ShineEffect::new(brightness)),
            DisplayMode::Rainbow => Self::Rainbow(RainbowFillEffect::new(rainbow.to_rgb())),
        }
    }

    /// Colour of pixel `index` on `strip`
    pub fn color_at(&self, index: u8, strip: &Strip) -> Rgb {
        match self {
            Self::Bar(effect) => effect.color_at(index, strip),
            Self::Shine(effect) => effect.color_at(index, strip),
            Self::Rainbow(effect) => effect.color_at(index, strip),
        }
    }

    /// Fill `leds` with the whole strip, base first
    ///
    /// Stops at whichever of `leds` and the strip is shorter.
    pub fn fill(&self, strip: &Strip, leds: &mut [Rgb]) {
        for (index, led) in (0..strip.pixel_count()).zip(leds.iter_mut()) {
            *led = self.color_at(index, strip);
        }
    }
}
