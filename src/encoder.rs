//! Bit-banged encoder for the single-wire LED protocol
//!
//! - One pulse pair per bit, most significant bit first
//! - 24 bits per pixel in the configured colour order
//! - Implements [`PixelSink`] for the renderer and `SmartLedsWrite` per channel
//!
//! Nothing here masks interrupts. The caller must hold a critical section for
//! the whole transmission, a preempted pulse corrupts the rest of the strip.

use embassy_time::Duration;
use embedded_hal::delay::DelayNs;
use smart_leds::SmartLedsWrite;

use crate::PixelSink;
use crate::color::{ColorOrder, Rgb};
use crate::config::EqualizerConfig;
use crate::port::{Channel, LedPort};
use crate::timing::PulseTiming;

pub struct BitEncoder<P, D> {
    port: P,
    delay: D,
    timing: PulseTiming,
    order: ColorOrder,
}

impl<P, D> BitEncoder<P, D>
where
    P: LedPort,
    D: DelayNs,
{
    /// Create an encoder with the default protocol timing and RGB order
    pub fn new(port: P, delay: D) -> Self {
        Self::with_timing(port, delay, PulseTiming::default(), ColorOrder::default())
    }

    /// Create an encoder with the wire timing and colour order of `config`
    pub fn from_config(port: P, delay: D, config: &EqualizerConfig) -> Self {
        Self::with_timing(port, delay, config.pulse_timing, config.color_order)
    }

    pub fn with_timing(port: P, delay: D, timing: PulseTiming, order: ColorOrder) -> Self {
        Self {
            port,
            delay,
            timing,
            order,
        }
    }

    /// Emit one bit as a high/low pulse pair on `channel`
    #[inline(always)]
    pub fn send_bit(&mut self, value: bool, channel: Channel) {
        let bit = self.timing.for_bit(value);
        self.port.set_line(channel, true);
        self.delay.delay_ns(bit.high_ns);
        self.port.set_line(channel, false);
        self.delay.delay_ns(bit.low_ns);
    }

    /// Emit one byte, most significant bit first
    pub fn send_byte(&mut self, mut data: u8, channel: Channel) {
        for _ in 0..8 {
            self.send_bit(data & 0x80 != 0, channel);
            data <<= 1;
        }
    }

    /// Emit one pixel as three bytes in the configured colour order
    pub fn send_pixel(&mut self, color: Rgb, channel: Channel) {
        for byte in self.order.bytes(color) {
            self.send_byte(byte, channel);
        }
    }

    /// Hold `channel` low for `gap` so the strip latches what it received
    pub fn latch(&mut self, channel: Channel, gap: Duration) {
        self.port.set_line(channel, false);
        let micros = u32::try_from(gap.as_micros()).unwrap_or(u32::MAX);
        self.delay.delay_us(micros);
    }

    /// `SmartLedsWrite` view of a single channel
    pub fn channel(&mut self, channel: Channel) -> ChannelWriter<'_, Self> {
        ChannelWriter::new(self, channel)
    }

    pub fn release(self) -> (P, D) {
        (self.port, self.delay)
    }
}

impl<P, D> PixelSink for BitEncoder<P, D>
where
    P: LedPort,
    D: DelayNs,
{
    fn send_pixel(&mut self, color: Rgb, channel: Channel) {
        BitEncoder::send_pixel(self, color, channel);
    }

    fn latch(&mut self, channel: Channel, gap: Duration) {
        BitEncoder::latch(self, channel, gap);
    }
}

/// Writes whole frames to one channel of a [`PixelSink`]
///
/// Each `write` runs inside a critical section.
pub struct ChannelWriter<'a, S> {
    sink: &'a mut S,
    channel: Channel,
}

impl<'a, S: PixelSink> ChannelWriter<'a, S> {
    /// Address `channel` of any [`PixelSink`]
    pub fn new(sink: &'a mut S, channel: Channel) -> Self {
        Self { sink, channel }
    }
}

impl<S: PixelSink> SmartLedsWrite for ChannelWriter<'_, S> {
    type Error = ();
    type Color = Rgb;

    /// Write all the items of an iterator to the strip on this channel
    fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
    where
        T: IntoIterator<Item = I>,
        I: Into<Self::Color>,
    {
        let channel = self.channel;
        let sink = &mut *self.sink;
        critical_section::with(|_| {
            for item in iterator {
                sink.send_pixel(item.into(), channel);
            }
        });
        Ok(())
    }
}
