//! Single-slot sample mailbox for `no_std` environments.
//!
//! Handoff between the conversion-complete interrupt (producer) and the
//! display loop (consumer), built on `critical-section`. Each publish
//! overwrites the slot, a slow consumer only ever sees the latest sample.

use core::cell::Cell;

use critical_section::Mutex;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Slot {
    value: u8,
    ready: bool,
}

/// Latest digitized sample plus its ready flag.
///
/// Value and flag are written in the same critical section, so the consumer
/// never sees the flag without the value it publishes.
pub struct SampleMailbox {
    slot: Mutex<Cell<Slot>>,
}

impl SampleMailbox {
    /// Create an empty mailbox.
    pub const fn new() -> Self {
        Self {
            slot: Mutex::new(Cell::new(Slot {
                value: 0,
                ready: false,
            })),
        }
    }

    /// Get a publisher handle for the interrupt side.
    pub const fn publisher(&self) -> Publisher<'_> {
        Publisher { mailbox: self }
    }

    /// Store a freshly converted sample and mark it ready.
    ///
    /// Call this from the conversion-complete handler. It only stores and
    /// flags, so it is safe to run with other interrupts pending.
    pub fn publish(&self, value: u8) {
        critical_section::with(|cs| {
            self.slot.borrow(cs).set(Slot { value, ready: true });
        });
    }

    /// Whether a sample has been published since the last [`take`](Self::take).
    pub fn is_ready(&self) -> bool {
        critical_section::with(|cs| self.slot.borrow(cs).get().ready)
    }

    /// Return the last published value and clear the ready flag.
    ///
    /// Called before [`is_ready`](Self::is_ready) turns true this returns the
    /// previous (stale) sample.
    pub fn take(&self) -> u8 {
        critical_section::with(|cs| {
            let cell = self.slot.borrow(cs);
            let slot = cell.get();
            cell.set(Slot {
                ready: false,
                ..slot
            });
            slot.value
        })
    }

    /// Take the sample only if one is ready.
    pub fn try_take(&self) -> Option<u8> {
        critical_section::with(|cs| {
            let cell = self.slot.borrow(cs);
            let slot = cell.get();
            if !slot.ready {
                return None;
            }
            cell.set(Slot {
                ready: false,
                ..slot
            });
            Some(slot.value)
        })
    }
}

impl Default for SampleMailbox {
    fn default() -> Self {
        Self::new()
    }
}

/// A publishing handle for a [`SampleMailbox`].
///
/// This is a lightweight reference that can be handed to the ADC interrupt.
#[derive(Clone, Copy)]
pub struct Publisher<'a> {
    mailbox: &'a SampleMailbox,
}

impl Publisher<'_> {
    /// Publish a sample into the mailbox.
    pub fn publish(&self, value: u8) {
        self.mailbox.publish(value);
    }
}
