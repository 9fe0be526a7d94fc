//! Threshold bar ("VU meter") effect
//!
//! Lit pixels are green, the two just below the top of the strip amber and
//! the topmost red. The tiers follow the strip length, not the lit count.

use super::Effect;
use crate::color::{Rgb, amber, green, red};
use crate::strip::Strip;

/// Pixels from the top that show amber or red
const AMBER_FROM_TOP: u8 = 3;
const RED_FROM_TOP: u8 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarEffect {
    brightness: u8,
}

impl BarEffect {
    pub const fn new(brightness: u8) -> Self {
        Self { brightness }
    }
}

impl Effect for BarEffect {
    fn lit_color(&self, index: u8, strip: &Strip) -> Rgb {
        let top = u16::from(strip.pixel_count());
        let index = u16::from(index);
        if index + u16::from(AMBER_FROM_TOP) < top {
            green(self.brightness)
        } else if index + u16::from(RED_FROM_TOP) < top {
            amber(self.brightness)
        } else {
            red(self.brightness)
        }
    }
}
