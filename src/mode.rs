//! Display modes and the transition that arms the animation clock.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::animation::AnimationClock;

const MODE_NAME_DEFAULT: &str = "default";
const MODE_NAME_SHINE: &str = "shine";
const MODE_NAME_RAINBOW: &str = "rainbow";

/// What the lit part of every strip shows
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DisplayMode {
    /// Threshold bar: green, then amber, red at the top
    #[default]
    Default,
    /// White glow that brightens towards the lit edge
    Shine,
    /// Uniform fill with the animated rainbow colour
    Rainbow,
}

impl DisplayMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => MODE_NAME_DEFAULT,
            Self::Shine => MODE_NAME_SHINE,
            Self::Rainbow => MODE_NAME_RAINBOW,
        }
    }

    /// Whether this mode needs the animation tick running
    pub const fn is_animated(self) -> bool {
        matches!(self, Self::Rainbow)
    }
}

/// Hardware timer interrupt that feeds [`AnimationClock::on_tick`]
pub trait TickTimer {
    fn enable_tick(&mut self);
    fn disable_tick(&mut self);
}

/// Current display mode plus the side effects of changing it
///
/// Entering [`DisplayMode::Rainbow`] seeds the clock colour at `ceiling`,
/// arms the clock and enables the tick interrupt. Any other mode disables
/// both.
pub struct ModeMachine<'a, T> {
    mode: DisplayMode,
    clock: &'a AnimationClock,
    timer: T,
    ceiling: u8,
}

impl<'a, T: TickTimer> ModeMachine<'a, T> {
    /// Start in `initial`, applying its side effects
    ///
    /// `ceiling` bounds every rainbow channel and is normally the display
    /// brightness.
    pub fn new(initial: DisplayMode, clock: &'a AnimationClock, timer: T, ceiling: u8) -> Self {
        let mut machine = Self {
            mode: initial,
            clock,
            timer,
            ceiling,
        };
        machine.apply(initial);
        machine
    }

    pub const fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub const fn clock(&self) -> &'a AnimationClock {
        self.clock
    }

    /// Switch to `mode`
    ///
    /// Re-entering `Rainbow` restarts the walk from its seed.
    pub fn transition(&mut self, mode: DisplayMode) {
        #[cfg(feature = "esp32-log")]
        println!(
            "[ModeMachine.transition] {} -> {}",
            self.mode.as_str(),
            mode.as_str()
        );
        self.mode = mode;
        self.apply(mode);
    }

    fn apply(&mut self, mode: DisplayMode) {
        if mode.is_animated() {
            self.clock.arm(self.ceiling);
            self.timer.enable_tick();
        } else {
            self.timer.disable_tick();
            self.clock.disarm();
        }
    }

    pub fn timer(&self) -> &T {
        &self.timer
    }
}
