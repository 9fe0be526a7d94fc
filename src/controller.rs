//! Display controller - the main orchestrator
//!
//! One cycle visits every strip in registration order:
//! 1. Spin until the in-flight conversion has a sample
//! 2. Take it and immediately strobe the next band, so the next conversion
//!    runs while this strip is transmitted
//! 3. Map the sample to a lit count
//! 4. Redraw the strip unless nothing it shows can have changed

use heapless::Vec;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::PixelSink;
use crate::animation::AnimationClock;
use crate::config::EqualizerConfig;
use crate::level::lit_count_for;
use crate::mode::{DisplayMode, ModeMachine, TickTimer};
use crate::port::Channel;
use crate::renderer::StripRenderer;
use crate::sampler::SampleSource;
use crate::strip::Strip;

#[derive(Debug, Clone, Copy)]
struct StripSlot {
    strip: Strip,
    /// Set by a mode change, forces the next redraw
    stale: bool,
}

/// What happened during one [`DisplayController::run_cycle`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CycleReport<const N: usize> {
    lit_counts: Vec<u8, N>,
    redrawn: Vec<Channel, N>,
}

impl<const N: usize> CycleReport<N> {
    /// Lit count computed for every strip, in visiting order
    pub fn lit_counts(&self) -> &[u8] {
        &self.lit_counts
    }

    /// Channels that were re-sent, in visiting order
    pub fn redrawn(&self) -> &[Channel] {
        &self.redrawn
    }

    pub fn was_redrawn(&self, channel: Channel) -> bool {
        self.redrawn.contains(&channel)
    }
}

pub struct DisplayController<'a, E, S, T, const N: usize> {
    // Hardware seams
    sink: E,
    sampler: S,

    // Configuration
    config: EqualizerConfig,
    renderer: StripRenderer,

    // State
    modes: ModeMachine<'a, T>,
    slots: Vec<StripSlot, N>,
}

impl<'a, E, S, T, const N: usize> DisplayController<'a, E, S, T, N>
where
    E: PixelSink,
    S: SampleSource,
    T: TickTimer,
{
    /// Create a controller with no strips, in `config.initial_mode`
    pub fn new(
        sink: E,
        sampler: S,
        clock: &'a AnimationClock,
        timer: T,
        config: &EqualizerConfig,
    ) -> Self {
        Self {
            sink,
            sampler,
            config: *config,
            renderer: StripRenderer::new(config.brightness),
            modes: ModeMachine::new(config.initial_mode, clock, timer, config.brightness),
            slots: Vec::new(),
        }
    }

    /// Register a strip at the end of the round robin
    ///
    /// Returns the strip if all `N` slots are taken.
    pub fn add_strip(&mut self, strip: Strip) -> Result<(), Strip> {
        self.slots
            .push(StripSlot {
                strip,
                stale: true,
            })
            .map_err(|slot| {
                #[cfg(feature = "esp32-log")]
                println!(
                    "[DisplayController.add_strip] no slot for channel {}",
                    slot.strip.channel()
                );
                slot.strip
            })
    }

    /// Registered strips in visiting order
    pub fn strips(&self) -> impl Iterator<Item = &Strip> {
        self.slots.iter().map(|slot| &slot.strip)
    }

    pub fn strip(&self, index: usize) -> Option<&Strip> {
        self.slots.get(index).map(|slot| &slot.strip)
    }

    pub fn mode(&self) -> DisplayMode {
        self.modes.mode()
    }

    /// Switch the display mode
    ///
    /// Arms the animation clock for `Rainbow` and disarms it otherwise. Every
    /// strip is redrawn on the next cycle, even with an unchanged lit count.
    pub fn set_mode(&mut self, mode: DisplayMode) {
        self.modes.transition(mode);
        for slot in &mut self.slots {
            slot.stale = true;
        }
    }

    /// Put the first conversion in flight
    ///
    /// Call once before the first [`run_cycle`](Self::run_cycle).
    pub fn start(&mut self) {
        #[cfg(feature = "esp32-log")]
        println!(
            "[DisplayController.start] {} strips, mode {}",
            self.slots.len(),
            self.modes.mode().as_str()
        );
        self.sampler.strobe_and_start_conversion();
    }

    /// Visit every strip once
    pub fn run_cycle(&mut self) -> CycleReport<N> {
        let mut report = CycleReport::default();

        for index in 0..self.slots.len() {
            let sample = self.sampler.wait_sample();
            self.sampler.strobe_and_start_conversion();

            let lit = lit_count_for(sample, self.config.accuracy, self.config.strip_length);
            let Some(lit) = self.update_slot(index, lit) else {
                continue;
            };
            let _ = report.lit_counts.push(lit);

            if let Some(channel) = self.redraw(index) {
                let _ = report.redrawn.push(channel);
            }
        }

        report
    }

    /// Run forever
    pub fn run(&mut self) -> ! {
        self.start();
        loop {
            self.run_cycle();
        }
    }

    /// Store the new lit count, returning what was stored
    fn update_slot(&mut self, index: usize, lit: u8) -> Option<u8> {
        let slot = self.slots.get_mut(index)?;
        let changed = slot.strip.set_lit_count(lit);
        slot.stale |= changed;
        Some(slot.strip.lit_count())
    }

    /// Re-send the strip if needed, returning its channel when it was sent
    fn redraw(&mut self, index: usize) -> Option<Channel> {
        let mode = self.modes.mode();
        let slot = self.slots.get_mut(index)?;
        if !slot.stale && !mode.is_animated() {
            return None;
        }
        slot.stale = false;
        let strip = slot.strip;

        let rainbow = self.modes.clock().snapshot();
        self.renderer.render(&mut self.sink, &strip, mode, rainbow);
        if let Some(gap) = self.config.latch {
            self.sink.latch(strip.channel(), gap);
        }
        Some(strip.channel())
    }

    pub fn sink(&self) -> &E {
        &self.sink
    }

    pub fn sampler(&self) -> &S {
        &self.sampler
    }

    pub fn config(&self) -> &EqualizerConfig {
        &self.config
    }

    pub fn release(self) -> (E, S) {
        (self.sink, self.sampler)
    }
}
