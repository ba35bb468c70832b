//! Round-half-to-even on floating point coordinates

/// Round to the nearest integer, sending ties to the even neighbour
///
/// `2.5` becomes `2.0`, `3.5` becomes `4.0`. Cut coordinates and half line
/// widths both go through here so that a given digit stream always lands on
/// the same pixels.
pub fn round_half_even(value: f64) -> f64 {
    value.round_ties_even()
}

/// Position `factor` tenths of the way from `start` to `end`, rounded half to even
///
/// A zero factor collapses the cut onto `end` instead of `start`.
// Multiply before dividing by ten: 25 * 3 / 10 is exactly 7.5 while 25 * 0.3
// is not, and ties decide the rounded result.
#[allow(clippy::suboptimal_flops)]
pub fn tenths_between(start: f64, end: f64, factor: u8) -> f64 {
    if factor == 0 {
        return end;
    }
    round_half_even(start + (end - start) * f64::from(factor) / 10.0)
}
