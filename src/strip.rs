use crate::port::Channel;

/// One physical LED chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strip {
    channel: Channel,
    pixel_count: u8,
    lit_count: u8,
}

impl Strip {
    /// Create a strip with nothing lit
    pub const fn new(channel: Channel, pixel_count: u8) -> Self {
        Self {
            channel,
            pixel_count,
            lit_count: 0,
        }
    }

    pub const fn channel(&self) -> Channel {
        self.channel
    }

    pub const fn pixel_count(&self) -> u8 {
        self.pixel_count
    }

    /// Number of LEDs from the base that are currently lit
    pub const fn lit_count(&self) -> u8 {
        self.lit_count
    }

    /// Set the lit count, clamped to the pixel count
    ///
    /// Returns whether the stored value changed.
    pub fn set_lit_count(&mut self, lit_count: u8) -> bool {
        let lit_count = lit_count.min(self.pixel_count);
        let changed = lit_count != self.lit_count;
        self.lit_count = lit_count;
        changed
    }

    /// Whether pixel `index` falls in the lit part
    pub const fn is_lit(&self, index: u8) -> bool {
        index < self.lit_count
    }
}
