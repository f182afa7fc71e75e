//! The RGB hub and its packed 8-bit form.
//!
//! [`Rgb`] is gamma-corrected sRGB with floating point channels. It is one of
//! the two conversion hubs: all device and terminal models convert from and to
//! RGB directly. [`RgbInt`] materializes a color as four 8-bit channels packed
//! into a `u32` and hence is the only RGB representation that clamps.

use crate::convert::ConvertibleColor;
use crate::core::{
    format_hex, normalize_hue, parse_hex, rgb_to_ansi16, rgb_to_ansi256, rgb_to_cmyk, rgb_to_hsl,
    rgb_to_hsv, rgb_to_hwb, rgb_to_xyz, round_half_up, round_to_u8, ColorModel,
};
use crate::error::ColorFormatError;
use crate::termco::{Ansi16, Ansi256};
use crate::{Cmyk, Float, Hsl, Hsv, Hwb, Xyz};

float_color! {
    /// A gamma-corrected sRGB color.
    ///
    /// Channels in `0..=1` are in gamut. Out-of-gamut and high-dynamic-range
    /// colors have channels beyond that range, which are carried through all
    /// conversions except those to discrete models, which clamp.
    ///
    /// # Examples
    ///
    /// ```
    /// # use colorhop::{ConvertibleColor, Rgb};
    /// # use colorhop::error::ColorFormatError;
    /// # use std::str::FromStr;
    /// let gold = Rgb::from_str("#ffca00")?;
    /// assert_eq!(gold.to_hex(), "#ffca00");
    ///
    /// let hsl = gold.to_hsl();
    /// assert_eq!(hsl.as_ref(), &[48.0, 100.0, 50.0]);
    /// # Ok::<(), ColorFormatError>(())
    /// ```
    Rgb, Rgb, 3, [r: 0, g: 1, b: 2]
}

impl Rgb {
    /// Format this color in hexadecimal notation.
    ///
    /// This method first materializes the color as [`RgbInt`], clamping
    /// out-of-gamut channels. The result has eight digits if the color is not
    /// fully opaque and six digits otherwise.
    pub fn to_hex(&self) -> String {
        self.to_rgb_int().to_string()
    }

    fn with_rounded_hue(coordinates: [Float; 3]) -> [Float; 3] {
        let [h, c2, c3] = coordinates;
        [
            normalize_hue(round_half_up(h)),
            round_half_up(c2),
            round_half_up(c3),
        ]
    }
}

impl core::str::FromStr for Rgb {
    type Err = ColorFormatError;

    /// Parse a hexadecimal color with 3, 4, 6, or 8 digits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<RgbInt>().map(|c| c.to_rgb())
    }
}

impl ConvertibleColor for Rgb {
    fn alpha(&self) -> Float {
        self.alpha
    }

    fn model(&self) -> ColorModel {
        ColorModel::Rgb
    }

    fn to_rgb(&self) -> Rgb {
        *self
    }

    fn to_xyz(&self) -> Xyz {
        Xyz::from_parts(rgb_to_xyz(&self.coordinates), self.alpha)
    }

    fn to_hsl(&self) -> Hsl {
        let coordinates = Self::with_rounded_hue(rgb_to_hsl(&self.coordinates));
        Hsl::from_parts(coordinates, self.alpha)
    }

    fn to_hsv(&self) -> Hsv {
        let coordinates = Self::with_rounded_hue(rgb_to_hsv(&self.coordinates));
        Hsv::from_parts(coordinates, self.alpha)
    }

    fn to_hwb(&self) -> Hwb {
        Hwb::from_parts(rgb_to_hwb(&self.coordinates), self.alpha)
    }

    fn to_cmyk(&self) -> Cmyk {
        let coordinates = rgb_to_cmyk(&self.coordinates).map(round_half_up);
        Cmyk::from_parts(coordinates, self.alpha)
    }

    fn to_ansi16(&self) -> Ansi16 {
        Ansi16::from_code_unchecked(rgb_to_ansi16(&self.coordinates), self.alpha)
    }

    fn to_ansi256(&self) -> Ansi256 {
        Ansi256::from_parts(rgb_to_ansi256(&self.coordinates), self.alpha)
    }

    fn to_rgb_int(&self) -> RgbInt {
        let [r, g, b] = self.coordinates.map(|c| round_to_u8(c * 255.0, 0, 255));
        let a = round_to_u8(self.alpha * 255.0, 0, 255);
        RgbInt::from_components(r, g, b, a)
    }
}

// ====================================================================================================================

/// A color packed into 32 bits.
///
/// The four 8-bit channels are laid out as alpha, red, green, and blue, from
/// most to least significant byte. Converting to this representation rounds
/// each channel, alpha included, to the nearest of 256 levels and clamps.
///
/// # Examples
///
/// ```
/// # use colorhop::RgbInt;
/// # use colorhop::error::ColorFormatError;
/// # use std::str::FromStr;
/// let teal = RgbInt::from_str("#0088887f")?;
/// assert_eq!(teal.argb(), 0x7f00_8888);
/// assert_eq!((teal.r(), teal.g(), teal.b(), teal.a()), (0, 0x88, 0x88, 0x7f));
/// assert_eq!(teal.to_string(), "#0088887f");
/// assert_eq!(RgbInt::new(0xff00_8888).to_string(), "#008888");
/// # Ok::<(), ColorFormatError>(())
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct RgbInt(u32);

impl RgbInt {
    /// Create a new packed color from its ARGB representation.
    #[must_use]
    pub const fn new(argb: u32) -> Self {
        Self(argb)
    }

    /// Create a new packed color from its channels.
    #[must_use]
    pub const fn from_components(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(u32::from_be_bytes([a, r, g, b]))
    }

    /// Get the packed ARGB representation.
    pub const fn argb(&self) -> u32 {
        self.0
    }

    /// Get the red channel.
    pub const fn r(&self) -> u8 {
        self.0.to_be_bytes()[1]
    }

    /// Get the green channel.
    pub const fn g(&self) -> u8 {
        self.0.to_be_bytes()[2]
    }

    /// Get the blue channel.
    pub const fn b(&self) -> u8 {
        self.0.to_be_bytes()[3]
    }

    /// Get the alpha channel.
    pub const fn a(&self) -> u8 {
        self.0.to_be_bytes()[0]
    }
}

impl core::str::FromStr for RgbInt {
    type Err = ColorFormatError;

    /// Parse a hexadecimal color with 3, 4, 6, or 8 digits.
    ///
    /// The leading `#` is optional. Three and four digit forms duplicate each
    /// digit. Four and eight digit forms include alpha as their last channel.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [r, g, b, a] = parse_hex(s)?;
        Ok(Self::from_components(r, g, b, a))
    }
}

impl core::fmt::Display for RgbInt {
    /// Format this color in hexadecimal notation, with alpha only if the color
    /// is not fully opaque.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&format_hex([self.r(), self.g(), self.b(), self.a()]))
    }
}

impl From<u32> for RgbInt {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<RgbInt> for u32 {
    fn from(value: RgbInt) -> Self {
        value.0
    }
}

impl ConvertibleColor for RgbInt {
    fn alpha(&self) -> Float {
        Float::from(self.a()) / 255.0
    }

    fn model(&self) -> ColorModel {
        ColorModel::RgbInt
    }

    fn to_rgb(&self) -> Rgb {
        Rgb::from_parts(
            [
                Float::from(self.r()) / 255.0,
                Float::from(self.g()) / 255.0,
                Float::from(self.b()) / 255.0,
            ],
            self.alpha(),
        )
    }

    fn to_rgb_int(&self) -> RgbInt {
        *self
    }
}

// ====================================================================================================================
