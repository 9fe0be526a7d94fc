//! Sample to bar height mapping.

/// Counts of the converter per lit LED, `accuracy / strip_length` rounded
/// down and never below one
pub const fn counts_per_led(accuracy: u8, strip_length: u8) -> u8 {
    let step = match accuracy.checked_div(strip_length) {
        Some(step) => step,
        None => accuracy,
    };
    if step == 0 { 1 } else { step }
}

/// Number of LEDs to light for `sample`
///
/// Never exceeds `strip_length`, whatever the sample and configuration.
pub const fn lit_count_for(sample: u8, accuracy: u8, strip_length: u8) -> u8 {
    let lit = sample / counts_per_led(accuracy, strip_length);
    if lit > strip_length { strip_length } else { lit }
}
