//! Terminal color representations.
//!
//! This module offers [`Ansi16`] and [`Ansi256`] as the discrete color models
//! used by terminals. The former wraps one of the 16 [`AnsiColor`]s and uses
//! their foreground SGR codes `30..=37` and `90..=97`. The latter is an 8-bit
//! index that combines the 16 ANSI colors, a 6x6x6 RGB cube, and a 24-step
//! gray ramp.
//!
//! Both models convert from RGB by quantization and to RGB through fixed
//! palettes. Quantization clamps and is lossy.

use crate::convert::ConvertibleColor;
use crate::core::{
    ansi16_code_to_ansi256, ansi16_to_rgb, ansi256_to_ansi16_code, ansi256_to_rgb, format,
    ColorModel,
};
use crate::error::{AlphaError, OutOfBoundsError};
use crate::{Float, Rgb};

// ====================================================================================================================
// Ansi Color
// ====================================================================================================================

/// The 16 extended ANSI colors.
///
/// Rust code converts between indexes `0..=15` and enumeration variants with
/// [`AnsiColor as
/// TryFrom<u8>`](enum.AnsiColor.html#impl-TryFrom%3Cu8%3E-for-AnsiColor) and
/// [`u8 as
/// From<AnsiColor>`](enum.AnsiColor.html#impl-From%3CAnsiColor%3E-for-u8).
/// The ANSI colors are ordered because they are ordered as indexed colors.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AnsiColor {
    #[default]
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl AnsiColor {
    /// Determine whether this ANSI color is bright.
    pub const fn is_bright(&self) -> bool {
        8 <= *self as u8
    }

    /// Get the base version of this ANSI color.
    ///
    /// If this color is bright, this method returns its non-bright version.
    /// Otherwise, it returns the same color.
    #[must_use]
    pub fn to_base(&self) -> AnsiColor {
        use AnsiColor::*;

        match *self {
            BrightBlack => Black,
            BrightRed => Red,
            BrightGreen => Green,
            BrightYellow => Yellow,
            BrightBlue => Blue,
            BrightMagenta => Magenta,
            BrightCyan => Cyan,
            BrightWhite => White,
            color => color,
        }
    }

    /// Get the bright version of this ANSI color.
    ///
    /// If the color is not bright, this method returns its bright version.
    /// Otherwise, it returns the same color.
    #[must_use]
    pub fn to_bright(&self) -> AnsiColor {
        use AnsiColor::*;

        match *self {
            Black => BrightBlack,
            Red => BrightRed,
            Green => BrightGreen,
            Yellow => BrightYellow,
            Blue => BrightBlue,
            Magenta => BrightMagenta,
            Cyan => BrightCyan,
            White => BrightWhite,
            color => color,
        }
    }

    /// Get this ANSI color's name.
    ///
    /// This method returns the human-readable name, e.g., `"bright green"` for
    /// [`AnsiColor::BrightGreen`].
    pub const fn name(&self) -> &'static str {
        use AnsiColor::*;

        match *self {
            Black => "black",
            Red => "red",
            Green => "green",
            Yellow => "yellow",
            Blue => "blue",
            Magenta => "magenta",
            Cyan => "cyan",
            White => "white",
            BrightBlack => "bright black",
            BrightRed => "bright red",
            BrightGreen => "bright green",
            BrightYellow => "bright yellow",
            BrightBlue => "bright blue",
            BrightMagenta => "bright magenta",
            BrightCyan => "bright cyan",
            BrightWhite => "bright white",
        }
    }

    /// Get the foreground SGR code for this ANSI color.
    pub const fn code(&self) -> u8 {
        ansi256_to_ansi16_code(*self as u8)
    }
}

impl TryFrom<u8> for AnsiColor {
    type Error = OutOfBoundsError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        let ansi = match value {
            0 => AnsiColor::Black,
            1 => AnsiColor::Red,
            2 => AnsiColor::Green,
            3 => AnsiColor::Yellow,
            4 => AnsiColor::Blue,
            5 => AnsiColor::Magenta,
            6 => AnsiColor::Cyan,
            7 => AnsiColor::White,
            8 => AnsiColor::BrightBlack,
            9 => AnsiColor::BrightRed,
            10 => AnsiColor::BrightGreen,
            11 => AnsiColor::BrightYellow,
            12 => AnsiColor::BrightBlue,
            13 => AnsiColor::BrightMagenta,
            14 => AnsiColor::BrightCyan,
            15 => AnsiColor::BrightWhite,
            _ => return Err(OutOfBoundsError::new(value, 0..=15)),
        };

        Ok(ansi)
    }
}

impl From<AnsiColor> for u8 {
    fn from(value: AnsiColor) -> u8 {
        value as u8
    }
}

// ====================================================================================================================
// ANSI 16
// ====================================================================================================================

/// A color in the 16-color terminal model.
///
/// # Examples
///
/// ```
/// # use colorhop::{Ansi16, AnsiColor, ConvertibleColor, Rgb};
/// # use colorhop::error::OutOfBoundsError;
/// let red = Ansi16::try_from_code(91)?;
/// assert_eq!(red.color(), AnsiColor::BrightRed);
/// assert_eq!(red.background_code(), 101);
/// assert_eq!(Rgb::new(1.0, 0.1, 0.0).to_ansi16(), red);
/// # Ok::<(), OutOfBoundsError>(())
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ansi16 {
    color: AnsiColor,
    #[cfg_attr(
        feature = "serde",
        serde(deserialize_with = "crate::error::deserialize_alpha")
    )]
    alpha: Float,
}

impl Ansi16 {
    /// Create a new, fully opaque color.
    #[must_use]
    pub const fn new(color: AnsiColor) -> Self {
        Self { color, alpha: 1.0 }
    }

    /// Create a new, fully opaque color from its foreground SGR code.
    pub fn try_from_code(code: u8) -> Result<Self, OutOfBoundsError> {
        match code {
            30..=37 | 90..=97 => Ok(Self::from_code_unchecked(code, 1.0)),
            0..=29 | 38..=63 => Err(OutOfBoundsError::new(code, 30..=37)),
            _ => Err(OutOfBoundsError::new(code, 90..=97)),
        }
    }

    /// Create a new color from a valid foreground SGR code and alpha.
    pub(crate) fn from_code_unchecked(code: u8, alpha: Float) -> Self {
        let index = ansi16_code_to_ansi256(code);
        let color = AnsiColor::try_from(index).unwrap_or_default();
        Self { color, alpha }
    }

    /// Replace this color's alpha.
    ///
    /// Alpha must be between 0 and 1, inclusive.
    pub fn with_alpha(self, alpha: Float) -> Result<Self, AlphaError> {
        if (0.0..=1.0).contains(&alpha) {
            Ok(Self { alpha, ..self })
        } else {
            Err(AlphaError(alpha))
        }
    }

    /// Get the ANSI color.
    pub const fn color(&self) -> AnsiColor {
        self.color
    }

    /// Get the foreground SGR code, i.e., `30..=37` or `90..=97`.
    pub const fn code(&self) -> u8 {
        self.color.code()
    }

    /// Get the background SGR code, i.e., `40..=47` or `100..=107`.
    pub const fn background_code(&self) -> u8 {
        self.code() + 10
    }
}

impl From<AnsiColor> for Ansi16 {
    fn from(value: AnsiColor) -> Self {
        Self::new(value)
    }
}

impl ConvertibleColor for Ansi16 {
    fn alpha(&self) -> Float {
        self.alpha
    }

    fn model(&self) -> ColorModel {
        ColorModel::Ansi16
    }

    fn to_rgb(&self) -> Rgb {
        Rgb::from_parts(ansi16_to_rgb(self.code()), self.alpha)
    }

    fn to_ansi16(&self) -> Ansi16 {
        *self
    }

    fn to_ansi256(&self) -> Ansi256 {
        Ansi256::from_parts(self.color as u8, self.alpha)
    }
}

impl core::fmt::Display for Ansi16 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        format(
            ColorModel::Ansi16,
            &[Float::from(self.code())],
            self.alpha,
            f,
        )
    }
}

// ====================================================================================================================
// ANSI 256
// ====================================================================================================================

/// A color in the 256-color terminal model.
///
/// Indexes `0..=15` are the 16 ANSI colors, `16..=231` form a 6x6x6 RGB cube,
/// and `232..=255` form a 24-step gray ramp.
///
/// # Examples
///
/// ```
/// # use colorhop::{Ansi256, ConvertibleColor};
/// # use colorhop::error::OutOfBoundsError;
/// let orange = Ansi256::cube(5, 2, 0)?;
/// assert_eq!(orange.code(), 208);
/// assert_eq!(orange.to_cube(), Some([5, 2, 0]));
/// assert_eq!(orange.to_rgb_int().to_string(), "#ff6600");
///
/// let gray = Ansi256::gray(11)?;
/// assert_eq!(gray.code(), 243);
/// assert_eq!(gray.to_gray(), Some(11));
/// # Ok::<(), OutOfBoundsError>(())
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ansi256 {
    index: u8,
    #[cfg_attr(
        feature = "serde",
        serde(deserialize_with = "crate::error::deserialize_alpha")
    )]
    alpha: Float,
}

impl Ansi256 {
    /// Create a new, fully opaque color from its 8-bit index.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        Self { index, alpha: 1.0 }
    }

    /// Create a new, fully opaque color from its coordinates in the RGB cube.
    pub fn cube(r: u8, g: u8, b: u8) -> Result<Self, OutOfBoundsError> {
        for coordinate in [r, g, b] {
            if 6 <= coordinate {
                return Err(OutOfBoundsError::new(coordinate, 0..=5));
            }
        }

        Ok(Self::new(16 + 36 * r + 6 * g + b))
    }

    /// Create a new, fully opaque color from its level on the gray ramp.
    pub fn gray(level: u8) -> Result<Self, OutOfBoundsError> {
        if 24 <= level {
            Err(OutOfBoundsError::new(level, 0..=23))
        } else {
            Ok(Self::new(232 + level))
        }
    }

    /// Create a new color from an index and a valid alpha.
    pub(crate) const fn from_parts(index: u8, alpha: Float) -> Self {
        Self { index, alpha }
    }

    /// Replace this color's alpha.
    ///
    /// Alpha must be between 0 and 1, inclusive.
    pub fn with_alpha(self, alpha: Float) -> Result<Self, AlphaError> {
        if (0.0..=1.0).contains(&alpha) {
            Ok(Self { alpha, ..self })
        } else {
            Err(AlphaError(alpha))
        }
    }

    /// Get the 8-bit index.
    pub const fn code(&self) -> u8 {
        self.index
    }

    /// Get the ANSI color if the index is below 16.
    pub fn to_ansi_color(&self) -> Option<AnsiColor> {
        AnsiColor::try_from(self.index).ok()
    }

    /// Get the coordinates in the RGB cube if the index is in `16..=231`.
    pub const fn to_cube(&self) -> Option<[u8; 3]> {
        if 16 <= self.index && self.index <= 231 {
            let c = self.index - 16;
            Some([c / 36, (c % 36) / 6, c % 6])
        } else {
            None
        }
    }

    /// Get the level on the gray ramp if the index is `232` or larger.
    pub const fn to_gray(&self) -> Option<u8> {
        if 232 <= self.index {
            Some(self.index - 232)
        } else {
            None
        }
    }
}

impl From<u8> for Ansi256 {
    fn from(value: u8) -> Self {
        Self::new(value)
    }
}

impl From<Ansi256> for u8 {
    fn from(value: Ansi256) -> u8 {
        value.index
    }
}

impl ConvertibleColor for Ansi256 {
    fn alpha(&self) -> Float {
        self.alpha
    }

    fn model(&self) -> ColorModel {
        ColorModel::Ansi256
    }

    fn to_rgb(&self) -> Rgb {
        Rgb::from_parts(ansi256_to_rgb(self.index), self.alpha)
    }

    fn to_ansi16(&self) -> Ansi16 {
        self.to_ansi_color().map_or_else(
            || self.to_rgb().to_ansi16(),
            |color| Ansi16 {
                color,
                alpha: self.alpha,
            },
        )
    }

    fn to_ansi256(&self) -> Ansi256 {
        *self
    }
}

impl core::fmt::Display for Ansi256 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        format(
            ColorModel::Ansi256,
            &[Float::from(self.index)],
            self.alpha,
            f,
        )
    }
}
