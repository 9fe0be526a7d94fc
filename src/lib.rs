#![no_std]

pub mod animation;
pub mod color;
pub mod config;
pub mod controller;
pub mod effect;
pub mod encoder;
pub mod level;
pub mod mailbox;
pub mod mode;
pub mod port;
pub mod renderer;
pub mod sampler;
pub mod strip;
pub mod timing;

pub use animation::{ANIMATION_TICK, AnimationClock, RainbowColor};
pub use color::{ColorOrder, Rgb};
pub use config::EqualizerConfig;
pub use controller::{CycleReport, DisplayController};
pub use effect::{Effect, EffectSlot};
pub use encoder::{BitEncoder, ChannelWriter};
pub use mailbox::SampleMailbox;
pub use mode::{DisplayMode, ModeMachine, TickTimer};
pub use port::{Channel, LedPort, PinBank};
pub use renderer::StripRenderer;
pub use sampler::{AdcTrigger, SampleSource, SamplerTimings, SignalSampler};
pub use strip::Strip;
pub use timing::{BitTiming, PulseTiming};

pub use embassy_time::Duration;

/// Abstract pixel output trait
///
/// Implement this trait to drive a different wire protocol or to capture
/// frames. The controller and renderer are generic over this trait.
pub trait PixelSink {
    /// Send one pixel on `channel`
    fn send_pixel(&mut self, color: Rgb, channel: Channel);

    /// Hold `channel` idle long enough for the strip to latch
    fn latch(&mut self, channel: Channel, gap: Duration);
}
