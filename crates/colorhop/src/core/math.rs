use crate::Float;

/// An extension trait for floating point numbers.
///
/// This trait pre-computes constants that depend on the floating point
/// representation.
pub(crate) trait FloatExt {
    /// The factor determining rounding precision.
    ///
    /// When limiting a floating point number's precision, the number is
    /// multiplied by some factor, rounded, and divided by the same factor
    /// again. Typically, that factor is a power of ten, which directly
    /// translates into significant digits after the decimal.
    const ROUNDING_FACTOR: Self;

    /// The chroma below which a polar color is considered achromatic.
    ///
    /// Converting grays to CIELAB or CIELUV leaves floating point noise in the
    /// colorness coordinates. Chroma below this threshold is that noise.
    const ACHROMATIC_THRESHOLD: Self;
}

impl FloatExt for f64 {
    const ROUNDING_FACTOR: f64 = 1e12;
    const ACHROMATIC_THRESHOLD: f64 = 1e-8;
}

impl FloatExt for f32 {
    const ROUNDING_FACTOR: f32 = 1e4;
    const ACHROMATIC_THRESHOLD: f32 = 1e-3;
}

// --------------------------------------------------------------------------------------------------------------------

/// Round half up, i.e., towards positive infinity for ties.
///
/// Unlike [`Float::round`], which rounds ties away from zero, this function
/// maps `-0.5` to `0.0` and `-1.5` to `-1.0`. Integer-valued color models use
/// this rounding and only as their very last step.
#[inline]
pub(crate) fn round_half_up(value: Float) -> Float {
    (value + 0.5).floor()
}

/// Round half up and clamp into the inclusive `u8` range given by `min..=max`.
///
/// Not-a-number maps to `min`.
#[inline]
pub(crate) fn round_to_u8(value: Float, min: u8, max: u8) -> u8 {
    let rounded = round_half_up(value);
    if rounded.is_nan() || rounded <= Float::from(min) {
        min
    } else if Float::from(max) <= rounded {
        max
    } else {
        rounded as u8
    }
}

/// Normalize the hue into `0..360`.
///
/// Negative hues wrap around and a hue of 360 folds to zero, including a tiny
/// negative hue that rounds to 360 after wrapping. Not-a-number passes through
/// unchanged.
#[inline]
pub(crate) fn normalize_hue(hue: Float) -> Float {
    let hue = hue.rem_euclid(360.0);
    if hue == 360.0 {
        0.0
    } else {
        hue
    }
}

/// The hue, minimum, maximum, and their delta for three unit-range channels.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct HueMinMaxDelta {
    pub hue: Float,
    pub min: Float,
    pub max: Float,
    pub delta: Float,
}

impl HueMinMaxDelta {
    /// Determine whether all three channels have the same value.
    #[inline]
    pub fn is_achromatic(&self) -> bool {
        self.max == self.min
    }

    /// Get the hue or, for achromatic channels, not-a-number.
    #[inline]
    pub fn hue_or_nan(&self) -> Float {
        if self.is_achromatic() {
            Float::NAN
        } else {
            self.hue
        }
    }
}

/// Compute hue, minimum, maximum, and delta for the given RGB channels.
///
/// The hue depends on the channel attaining the maximum, in order red, green,
/// blue. It is zero if all channels are the same. All cylindrical models
/// derived from RGB share this function, which guarantees they agree on hue.
pub(crate) fn hue_min_max_delta(r: Float, g: Float, b: Float) -> HueMinMaxDelta {
    let min = r.min(g).min(b);
    let max = r.max(g).max(b);
    let delta = max - min;

    let hue = if max == min {
        0.0
    } else if max == r {
        (60.0 * ((g - b) / delta)) % 360.0
    } else if max == g {
        60.0 * (2.0 + (b - r) / delta)
    } else {
        60.0 * (4.0 + (r - g) / delta)
    };

    HueMinMaxDelta {
        hue: normalize_hue(hue),
        min,
        max,
        delta,
    }
}
