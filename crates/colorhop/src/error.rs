//! Utility module with colorhop's errors.
//!
//! Conversions between color models are total and never fail. Errors only
//! arise when creating a color from out-of-range integer codes, from an
//! invalid alpha, or from malformed text.

use crate::Float;

/// An out-of-bounds error.
///
/// This error indicates an integer value that is out of bounds for some range.
/// The ranges used by this crate include:
///
///   * `0..=5` for the coordinates of the 6x6x6 RGB cube of
///     [`Ansi256`](crate::Ansi256);
///   * `0..=23` for the gray levels of [`Ansi256`](crate::Ansi256);
///   * `30..=37` and `90..=97` for the SGR codes of [`Ansi16`](crate::Ansi16).
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutOfBoundsError {
    pub value: usize,
    pub expected: core::ops::RangeInclusive<usize>,
}

impl OutOfBoundsError {
    /// Create a new out-of-bounds error.
    pub fn new<V: Into<usize>>(value: V, expected: core::ops::RangeInclusive<usize>) -> Self {
        Self {
            value: value.into(),
            expected,
        }
    }
}

impl core::fmt::Display for OutOfBoundsError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_fmt(format_args!(
            "{} does not fit into range {}..={}",
            self.value,
            self.expected.start(),
            self.expected.end()
        ))
    }
}

impl std::error::Error for OutOfBoundsError {}

// ====================================================================================================================

/// An invalid alpha.
///
/// Alpha must be a number between 0 and 1, inclusive. This error wraps the
/// offending value, which may be not-a-number.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AlphaError(pub Float);

impl core::fmt::Display for AlphaError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_fmt(format_args!(
            "alpha should be a number between 0 and 1 but is {}",
            self.0
        ))
    }
}

impl std::error::Error for AlphaError {}

/// Deserialize an alpha, rejecting values outside `0..=1` just like the
/// `with_alpha` builders.
#[cfg(feature = "serde")]
pub(crate) fn deserialize_alpha<'de, D>(deserializer: D) -> Result<Float, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let alpha = <Float as serde::Deserialize>::deserialize(deserializer)?;
    if (0.0..=1.0).contains(&alpha) {
        Ok(alpha)
    } else {
        Err(<D::Error as serde::de::Error>::custom(AlphaError(alpha)))
    }
}

// ====================================================================================================================

/// An erroneous color format.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColorFormatError {
    /// A hexadecimal color format with an unexpected number of digits, which
    /// is wrapped. Valid formats have 3, 4, 6, or 8 digits after the optional
    /// `#`. For example, `#00` has one digit too few.
    UnexpectedLength(usize),

    /// A hexadecimal color format with characters that are not hexadecimal
    /// digits. For example, `#efg` has a malformed third digit and `#💩00`
    /// has the correct length but contains an unsuitable character.
    MalformedHex,
}

impl core::fmt::Display for ColorFormatError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        use ColorFormatError::*;

        match *self {
            UnexpectedLength(length) => f.write_fmt(format_args!(
                "color format should have 3, 4, 6, or 8 hex digits but has {}",
                length
            )),
            MalformedHex => f.write_str("color format should contain hexadecimal digits only"),
        }
    }
}

impl std::error::Error for ColorFormatError {}
