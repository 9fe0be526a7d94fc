//! Equalizer chip sampling: strobe, convert, hand off.

use embassy_time::Duration;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::config::EqualizerConfig;
use crate::mailbox::SampleMailbox;

/// Default strobe pulse width
pub const DEFAULT_STROBE_WIDTH: Duration = Duration::from_micros(18);

/// Default wait after starting a conversion
pub const DEFAULT_SETTLE: Duration = Duration::from_micros(54);

/// Starts one conversion on the ADC
///
/// The conversion result arrives asynchronously; the completion interrupt
/// must forward it to [`SampleMailbox::publish`].
pub trait AdcTrigger {
    fn start_conversion(&mut self);
}

/// Something the display loop can pull band samples from
pub trait SampleSource {
    /// Pulse the strobe to advance to the next band and start a conversion
    fn strobe_and_start_conversion(&mut self);

    /// Whether a finished conversion is waiting
    fn is_ready(&self) -> bool;

    /// Last latched sample, clearing the ready flag
    fn take_sample(&mut self) -> u8;

    /// Spin until a sample is ready and take it
    ///
    /// Interrupts stay enabled while spinning so the completion handler can
    /// run. There is no timeout: a conversion that never completes hangs here.
    fn wait_sample(&mut self) -> u8 {
        while !self.is_ready() {
            core::hint::spin_loop();
        }
        self.take_sample()
    }
}

/// Strobe and conversion timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplerTimings {
    /// How long the strobe line is held high
    pub strobe_width: Duration,
    /// Wait after starting the conversion
    pub settle: Duration,
}

impl Default for SamplerTimings {
    fn default() -> Self {
        Self {
            strobe_width: DEFAULT_STROBE_WIDTH,
            settle: DEFAULT_SETTLE,
        }
    }
}

pub struct SignalSampler<'a, S, D, A> {
    strobe: S,
    delay: D,
    adc: A,
    mailbox: &'a SampleMailbox,
    timings: SamplerTimings,
}

impl<'a, S, D, A> SignalSampler<'a, S, D, A>
where
    S: OutputPin,
    D: DelayNs,
    A: AdcTrigger,
{
    pub fn new(
        mut strobe: S,
        delay: D,
        adc: A,
        mailbox: &'a SampleMailbox,
        timings: SamplerTimings,
    ) -> Self {
        strobe.set_low().ok();
        Self {
            strobe,
            delay,
            adc,
            mailbox,
            timings,
        }
    }

    /// Create a sampler with the strobe and settle timing of `config`
    pub fn from_config(
        strobe: S,
        delay: D,
        adc: A,
        mailbox: &'a SampleMailbox,
        config: &EqualizerConfig,
    ) -> Self {
        Self::new(strobe, delay, adc, mailbox, config.sampler)
    }

    pub fn release(self) -> (S, D, A) {
        (self.strobe, self.delay, self.adc)
    }
}

fn as_micros(duration: Duration) -> u32 {
    u32::try_from(duration.as_micros()).unwrap_or(u32::MAX)
}

impl<S, D, A> SampleSource for SignalSampler<'_, S, D, A>
where
    S: OutputPin,
    D: DelayNs,
    A: AdcTrigger,
{
    fn strobe_and_start_conversion(&mut self) {
        self.strobe.set_high().ok();
        self.delay.delay_us(as_micros(self.timings.strobe_width));
        self.strobe.set_low().ok();
        self.adc.start_conversion();
        self.delay.delay_us(as_micros(self.timings.settle));
    }

    fn is_ready(&self) -> bool {
        self.mailbox.is_ready()
    }

    fn take_sample(&mut self) -> u8 {
        self.mailbox.take()
    }
}
