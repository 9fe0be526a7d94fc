//! Rainbow fill effect
//!
//! Every lit pixel shows the same colour, a snapshot of the
//! [`AnimationClock`](crate::animation::AnimationClock) taken before the
//! strip is rendered.

use super::Effect;
use crate::color::Rgb;
use crate::strip::Strip;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RainbowFillEffect {
    color: Rgb,
}

impl RainbowFillEffect {
    pub const fn new(color: Rgb) -> Self {
        Self { color }
    }
}

impl Effect for RainbowFillEffect {
    fn lit_color(&self, _index: u8, _strip: &Strip) -> Rgb {
        self.color
    }
}
