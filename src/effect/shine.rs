//! Edge glow effect
//!
//! Only the top three lit pixels glow, brightening quadratically towards the
//! lit edge. With one or two pixels lit the glow is linear in position.

use super::Effect;
use crate::color::{OFF, Rgb, white};
use crate::strip::Strip;

/// Pixels below the lit edge that glow
const GLOW_DEPTH: u16 = 3;

/// Step multiplier for strips with at most two pixels lit
const SHORT_STEP: u16 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShineEffect {
    /// Brightness per glow step, `brightness / 9`
    scale: u8,
}

impl ShineEffect {
    pub const fn new(brightness: u8) -> Self {
        Self {
            scale: brightness / 9,
        }
    }
}

#[allow(clippy::cast_possible_truncation)]
fn saturate(level: u16) -> u8 {
    level.min(u16::from(u8::MAX)) as u8
}

impl Effect for ShineEffect {
    fn lit_color(&self, index: u8, strip: &Strip) -> Rgb {
        let lit = u16::from(strip.lit_count());
        let index = u16::from(index);
        let scale = u16::from(self.scale);

        if index + GLOW_DEPTH < lit {
            return OFF;
        }
        if lit > 2 {
            // 1, 2, 3 from the bottom of the glow to the edge
            let step = index + GLOW_DEPTH + 1 - lit;
            white(saturate(scale * step * step))
        } else {
            white(saturate(scale * SHORT_STEP * (index + 1)))
        }
    }
}
