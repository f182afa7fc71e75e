use super::{ColorModel, FloatExt};
use crate::{Bits, Float};

/// Test macro for asserting the equality of floating point numbers.
///
/// This macro relies on [`to_eq_bits`] to normalize the two floating point
/// numbers by zeroing out not-a-numbers, reducing resolution, and dropping the
/// sign of negative zeros and then compares the resulting bit strings.
///
/// # Panics
///
/// This macro panics if the normalized bit strings are not identical. Its
/// message places the numbers below each other at the beginning of subsequent
/// lines for easy comparability.
#[macro_export]
macro_rules! assert_close_enough {
    ($f1:expr, $f2:expr $(,)?) => {
        let (f1, f2) = ($f1, $f2);
        let bits1 = $crate::to_eq_bits(f1);
        let bits2 = $crate::to_eq_bits(f2);
        assert_eq!(bits1, bits2, "quantities differ:\n{:?}\n{:?}", f1, f2);
    };
}

/// Test macro for asserting that two coordinate arrays agree within an absolute
/// tolerance.
///
/// Unlike [`assert_close_enough`], this macro does not round. It accepts a
/// pair of not-a-numbers as equal, since the hue of achromatic colors is
/// not-a-number.
///
/// # Panics
///
/// This macro panics if the arrays differ in length or if any pair of
/// coordinates differs by more than the tolerance. Its message places the
/// coordinates below each other for easy comparability.
#[cfg(test)]
macro_rules! assert_approx_coordinates {
    ($cs1:expr, $cs2:expr, $tolerance:expr $(,)?) => {
        // Matching keeps temporaries such as `color.to_rgb()` alive.
        #[allow(clippy::match_single_binding)]
        match ($cs1, $cs2) {
            (cs1, cs2) => {
                let cs1: &[$crate::Float] = &cs1[..];
                let cs2: &[$crate::Float] = &cs2[..];
                let tolerance: $crate::Float = $tolerance;
                assert_eq!(cs1.len(), cs2.len(), "coordinate counts differ");
                for (index, (c1, c2)) in cs1.iter().zip(cs2.iter()).enumerate() {
                    let ok = if c1.is_nan() || c2.is_nan() {
                        c1.is_nan() && c2.is_nan()
                    } else {
                        (c1 - c2).abs() <= tolerance
                    };
                    assert!(
                        ok,
                        "color coordinates differ at index {} by more than {}:\n{:?}\n{:?}",
                        index, tolerance, cs1, cs2
                    );
                }
            }
        }
    };
}

#[cfg(test)]
pub(crate) use assert_approx_coordinates;

// --------------------------------------------------------------------------------------------------------------------

/// Normalize coordinates for equality testing and hashing.
///
/// This function replaces not-a-numbers with zero and, for polar models with a
/// not-a-number hue, also zeroes out chroma. It removes full rotations from
/// hues and scales them down to unit range. It then reduces precision and
/// drops the sign of negative zeros.
#[must_use = "function returns new color coordinates and does not mutate original value"]
pub(crate) fn to_eq_coordinates<const N: usize>(
    model: ColorModel,
    coordinates: &[Float; N],
) -> [Bits; N] {
    let mut coordinates = *coordinates;

    if let Some(index) = model.hue_index() {
        let hue = coordinates[index];
        if hue.is_nan() {
            if model.is_polar() {
                coordinates[1] = 0.0;
            }
        } else {
            coordinates[index] = hue.rem_euclid(360.0) / 360.0;
        }
    }

    coordinates.map(to_eq_bits)
}

/// Helper function to normalize a floating point number before hashing or
/// equality testing.
///
/// This function zeros out not-a-number, reduces significant digits after the
/// decimal, and drops the sign of negative zero and returns the result as a bit
/// string. It is only public because the [`assert_close_enough`] test macro
/// uses it.
#[doc(hidden)]
#[inline]
pub fn to_eq_bits(f: Float) -> Bits {
    // Eliminate not-a-number.
    let mut f = if f.is_nan() { 0.0 } else { f };

    // Reduce precision.
    f = (<Float as FloatExt>::ROUNDING_FACTOR * f).round();

    // Too much negativity!
    if f == -0.0 {
        f = 0.0
    }

    f.to_bits()
}
