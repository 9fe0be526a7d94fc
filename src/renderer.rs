use crate::PixelSink;
use crate::animation::RainbowColor;
use crate::effect::EffectSlot;
use crate::mode::DisplayMode;
use crate::strip::Strip;

/// Serializes a whole strip for the active display mode
#[derive(Debug, Clone, Copy)]
pub struct StripRenderer {
    brightness: u8,
}

impl StripRenderer {
    pub const fn new(brightness: u8) -> Self {
        Self { brightness }
    }

    /// Send every pixel of `strip`, base first
    ///
    /// Interrupts are masked for the whole strip and restored on return; any
    /// preemption mid-pulse would corrupt the rest of the strip. No latch gap
    /// is sent afterwards.
    pub fn render<S: PixelSink>(
        &self,
        sink: &mut S,
        strip: &Strip,
        mode: DisplayMode,
        rainbow: RainbowColor,
    ) {
        let effect = EffectSlot::for_mode(mode, self.brightness, rainbow);
        let channel = strip.channel();

        critical_section::with(|_| {
            for index in 0..strip.pixel_count() {
                sink.send_pixel(effect.color_at(index, strip), channel);
            }
        });
    }
}
