pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("denominator must be non-zero")]
    ZeroDenominator,
}

/// Integer division of `numerator / denominator` rounded to the nearest
/// integer, with exact halves rounded away from zero (2.5 -> 3, -2.5 -> -3).
///
/// The sign of the quotient, not of the numerator alone, picks the rounding
/// direction, so negative numerators behave symmetrically.
pub fn round_div(numerator: i128, denominator: i128) -> Result<i128> {
    if denominator == 0 {
        return Err(Error::ZeroDenominator);
    }
    Ok(div_nearest(numerator, denominator))
}

/// Infallible path for in-crate call sites. Invariant: `denominator != 0`
/// (every caller divides by one of the fixed unit constants).
pub(crate) fn div_nearest(numerator: i128, denominator: i128) -> i128 {
    let quotient = numerator / denominator;
    let remainder = numerator % denominator;

    // |remainder| * 2 >= |denominator|, written without the doubling so it
    // cannot overflow near i128::MAX.
    let rem_mag = remainder.unsigned_abs();
    let den_mag = denominator.unsigned_abs();
    if rem_mag < den_mag - rem_mag {
        return quotient;
    }

    // Halfway or past it: move one unit further from zero.
    if (numerator < 0) != (denominator < 0) {
        quotient - 1
    } else {
        quotient + 1
    }
}
