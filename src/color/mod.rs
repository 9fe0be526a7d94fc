use smart_leds::RGB8;

pub type Rgb = RGB8;

/// Order in which the three colour bytes of a pixel go on the wire
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorOrder {
    /// Red, green, blue
    #[default]
    Rgb,
    /// Green, red, blue (WS2812 family)
    Grb,
}

impl ColorOrder {
    /// Split a colour into the bytes to transmit, first byte first
    pub const fn bytes(self, color: Rgb) -> [u8; 3] {
        match self {
            Self::Rgb => [color.r, color.g, color.b],
            Self::Grb => [color.g, color.r, color.b],
        }
    }
}

pub const OFF: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// Pure green at the given level
pub const fn green(level: u8) -> Rgb {
    Rgb { r: 0, g: level, b: 0 }
}

/// Red plus green at the given level
pub const fn amber(level: u8) -> Rgb {
    Rgb {
        r: level,
        g: level,
        b: 0,
    }
}

/// Pure red at the given level
pub const fn red(level: u8) -> Rgb {
    Rgb { r: level, g: 0, b: 0 }
}

/// All three channels at the same level
pub const fn white(level: u8) -> Rgb {
    Rgb {
        r: level,
        g: level,
        b: level,
    }
}
