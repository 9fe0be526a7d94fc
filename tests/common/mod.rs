#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use core::convert::Infallible;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, OutputPin};
use neopixel_equalizer::{
    AdcTrigger, Channel, Duration, PixelSink, Rgb, SampleMailbox, SampleSource, TickTimer,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Line { id: u8, high: bool },
    Delay(u32),
}

pub type Trace = Rc<RefCell<Vec<Event>>>;

pub fn trace() -> Trace {
    Rc::new(RefCell::new(Vec::new()))
}

pub struct MockPin {
    pub id: u8,
    pub trace: Trace,
}

impl ErrorType for MockPin {
    type Error = Infallible;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.trace.borrow_mut().push(Event::Line {
            id: self.id,
            high: false,
        });
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.trace.borrow_mut().push(Event::Line {
            id: self.id,
            high: true,
        });
        Ok(())
    }
}

#[derive(Clone)]
pub struct MockDelay {
    pub trace: Trace,
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.trace.borrow_mut().push(Event::Delay(ns));
    }
}

/// `(high_ns, low_ns)` of every pulse on line `id`, in order
pub fn pulses(events: &[Event], id: u8) -> Vec<(u32, u32)> {
    let mut out = Vec::new();
    let mut index = 0;
    while index + 3 < events.len() {
        match events[index..index + 4] {
            [
                Event::Line { id: a, high: true },
                Event::Delay(high),
                Event::Line { id: b, high: false },
                Event::Delay(low),
            ] if a == id && b == id => {
                out.push((high, low));
                index += 4;
            }
            _ => index += 1,
        }
    }
    out
}

/// Decode pulses back into bytes, most significant bit first
pub fn decode_bytes(pulses: &[(u32, u32)]) -> Vec<u8> {
    pulses
        .chunks(8)
        .map(|bits| {
            bits.iter()
                .fold(0u8, |acc, &(high, _)| (acc << 1) | u8::from(high == 700))
        })
        .collect()
}

#[derive(Default)]
pub struct RecordingSink {
    pub pixels: Vec<(Channel, Rgb)>,
    pub latches: Vec<(Channel, Duration)>,
}

impl RecordingSink {
    pub fn frame(&self, channel: Channel) -> Vec<Rgb> {
        self.pixels
            .iter()
            .filter(|(c, _)| *c == channel)
            .map(|(_, color)| *color)
            .collect()
    }
}

impl PixelSink for RecordingSink {
    fn send_pixel(&mut self, color: Rgb, channel: Channel) {
        self.pixels.push((channel, color));
    }

    fn latch(&mut self, channel: Channel, gap: Duration) {
        self.latches.push((channel, gap));
    }
}

/// Sampler whose conversions complete instantly, cycling through a script
pub struct ScriptedSampler {
    pub script: Vec<u8>,
    pub cursor: usize,
    pub ready: bool,
    pub value: u8,
    pub strobes: usize,
}

impl ScriptedSampler {
    pub fn new(script: &[u8]) -> Self {
        Self {
            script: script.to_vec(),
            cursor: 0,
            ready: false,
            value: 0,
            strobes: 0,
        }
    }
}

impl SampleSource for ScriptedSampler {
    fn strobe_and_start_conversion(&mut self) {
        self.strobes += 1;
        self.value = self.script[self.cursor % self.script.len()];
        self.cursor += 1;
        self.ready = true;
    }

    fn is_ready(&self) -> bool {
        self.ready
    }

    fn take_sample(&mut self) -> u8 {
        self.ready = false;
        self.value
    }
}

/// ADC whose completion interrupt fires as soon as a conversion starts
pub struct InstantAdc<'a> {
    pub mailbox: &'a SampleMailbox,
    pub script: Vec<u8>,
    pub started: usize,
}

impl AdcTrigger for InstantAdc<'_> {
    fn start_conversion(&mut self) {
        let value = self.script[self.started % self.script.len()];
        self.started += 1;
        self.mailbox.publish(value);
    }
}

#[derive(Default)]
pub struct MockTimer {
    pub enabled: bool,
    pub enables: usize,
    pub disables: usize,
}

impl TickTimer for MockTimer {
    fn enable_tick(&mut self) {
        self.enabled = true;
        self.enables += 1;
    }

    fn disable_tick(&mut self) {
        self.enabled = false;
        self.disables += 1;
    }
}
