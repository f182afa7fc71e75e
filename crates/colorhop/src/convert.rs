//! Conversion between color models.
//!
//! Every color value type implements [`ConvertibleColor`], which has one
//! `to_*` method per target model. Only conversions to the two hubs, RGB and
//! XYZ, and between closely related models are implemented directly. All
//! other conversions compose through a hub, e.g., LAB to HSL goes through XYZ
//! and RGB. Callers never need to know which route a conversion takes.
//!
//! [`Color`] wraps any color value as one of a closed set of variants and
//! converts to a target model given at runtime.

use crate::core::ColorModel;
use crate::termco::{Ansi16, Ansi256};
use crate::{Cmyk, Float, Hsl, Hsv, Hwb, Lab, Lchab, Lchuv, Luv, Rgb, RgbInt, Xyz};

/// A color that converts to every color model.
///
/// Implementations must provide [`ConvertibleColor::to_rgb`]. The default
/// implementations of all other conversions route through RGB or XYZ. Each
/// implementation overrides the conversion to its own model with the
/// identity and the conversions it performs directly. Conversions copy alpha
/// verbatim, with the exception of [`RgbInt`], which quantizes alpha to 8
/// bits just like the color channels.
pub trait ConvertibleColor {
    /// Get this color's alpha.
    fn alpha(&self) -> Float;

    /// Get this color's model.
    fn model(&self) -> ColorModel;

    /// Convert to gamma-corrected sRGB.
    fn to_rgb(&self) -> Rgb;

    /// Convert to XYZ with the D65 white point.
    fn to_xyz(&self) -> Xyz {
        self.to_rgb().to_xyz()
    }

    /// Convert to CIELAB.
    fn to_lab(&self) -> Lab {
        self.to_xyz().to_lab()
    }

    /// Convert to CIELCh(ab).
    fn to_lchab(&self) -> Lchab {
        self.to_lab().to_lchab()
    }

    /// Convert to CIELUV.
    fn to_luv(&self) -> Luv {
        self.to_xyz().to_luv()
    }

    /// Convert to CIELCh(uv).
    fn to_lchuv(&self) -> Lchuv {
        self.to_luv().to_lchuv()
    }

    /// Convert to HSL with integer channels.
    fn to_hsl(&self) -> Hsl {
        self.to_rgb().to_hsl()
    }

    /// Convert to HSV with integer channels.
    fn to_hsv(&self) -> Hsv {
        self.to_rgb().to_hsv()
    }

    /// Convert to HWB.
    fn to_hwb(&self) -> Hwb {
        self.to_rgb().to_hwb()
    }

    /// Convert to CMYK with integer channels.
    fn to_cmyk(&self) -> Cmyk {
        self.to_rgb().to_cmyk()
    }

    /// Quantize to one of the 16 ANSI colors.
    fn to_ansi16(&self) -> Ansi16 {
        self.to_rgb().to_ansi16()
    }

    /// Quantize to one of the 256 8-bit terminal colors.
    fn to_ansi256(&self) -> Ansi256 {
        self.to_rgb().to_ansi256()
    }

    /// Materialize as packed 8-bit RGB, clamping all channels including
    /// alpha.
    fn to_rgb_int(&self) -> RgbInt {
        self.to_rgb().to_rgb_int()
    }

    /// Wrap this color as a [`Color`].
    fn to_color(&self) -> Color
    where
        Self: Copy + Into<Color>,
    {
        (*self).into()
    }
}

// ====================================================================================================================

/// A color in any of the supported color models.
///
/// This enumeration has one variant per [`ColorModel`], each carrying the
/// corresponding color value. It implements [`ConvertibleColor`] by delegating
/// to the wrapped value and adds [`Color::to`] for conversion to a color model
/// chosen at runtime.
///
/// # Examples
///
/// ```
/// # use colorhop::{Color, ColorModel, ConvertibleColor, Rgb};
/// let orange = Color::from(Rgb::new(1.0, 0.5, 0.0));
/// let hsl = orange.to(ColorModel::Hsl);
/// assert_eq!(hsl.model(), ColorModel::Hsl);
/// assert_eq!(hsl.to_string(), "hsl(30 100 50)");
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Color {
    Rgb(Rgb),
    RgbInt(RgbInt),
    Xyz(Xyz),
    Lab(Lab),
    Lchab(Lchab),
    Luv(Luv),
    Lchuv(Lchuv),
    Hsl(Hsl),
    Hsv(Hsv),
    Hwb(Hwb),
    Cmyk(Cmyk),
    Ansi16(Ansi16),
    Ansi256(Ansi256),
}

macro_rules! dispatch {
    ($self:expr, $color:ident => $body:expr) => {
        match *$self {
            Color::Rgb(ref $color) => $body,
            Color::RgbInt(ref $color) => $body,
            Color::Xyz(ref $color) => $body,
            Color::Lab(ref $color) => $body,
            Color::Lchab(ref $color) => $body,
            Color::Luv(ref $color) => $body,
            Color::Lchuv(ref $color) => $body,
            Color::Hsl(ref $color) => $body,
            Color::Hsv(ref $color) => $body,
            Color::Hwb(ref $color) => $body,
            Color::Cmyk(ref $color) => $body,
            Color::Ansi16(ref $color) => $body,
            Color::Ansi256(ref $color) => $body,
        }
    };
}

impl Color {
    /// Convert this color to the given color model.
    ///
    /// If this color already is in the target model, this method returns a
    /// copy. Otherwise, it converts through the hubs as needed.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn to(&self, target: ColorModel) -> Color {
        let source = self.model();
        if source == target {
            return *self;
        }

        tracing::trace!(%source, %target, "converting color");
        match target {
            ColorModel::Rgb => Color::Rgb(self.to_rgb()),
            ColorModel::RgbInt => Color::RgbInt(self.to_rgb_int()),
            ColorModel::Xyz => Color::Xyz(self.to_xyz()),
            ColorModel::Lab => Color::Lab(self.to_lab()),
            ColorModel::Lchab => Color::Lchab(self.to_lchab()),
            ColorModel::Luv => Color::Luv(self.to_luv()),
            ColorModel::Lchuv => Color::Lchuv(self.to_lchuv()),
            ColorModel::Hsl => Color::Hsl(self.to_hsl()),
            ColorModel::Hsv => Color::Hsv(self.to_hsv()),
            ColorModel::Hwb => Color::Hwb(self.to_hwb()),
            ColorModel::Cmyk => Color::Cmyk(self.to_cmyk()),
            ColorModel::Ansi16 => Color::Ansi16(self.to_ansi16()),
            ColorModel::Ansi256 => Color::Ansi256(self.to_ansi256()),
        }
    }
}

impl ConvertibleColor for Color {
    fn alpha(&self) -> Float {
        dispatch!(self, c => c.alpha())
    }

    fn model(&self) -> ColorModel {
        dispatch!(self, c => ConvertibleColor::model(c))
    }

    fn to_rgb(&self) -> Rgb {
        dispatch!(self, c => c.to_rgb())
    }

    fn to_xyz(&self) -> Xyz {
        dispatch!(self, c => c.to_xyz())
    }

    fn to_lab(&self) -> Lab {
        dispatch!(self, c => c.to_lab())
    }

    fn to_lchab(&self) -> Lchab {
        dispatch!(self, c => c.to_lchab())
    }

    fn to_luv(&self) -> Luv {
        dispatch!(self, c => c.to_luv())
    }

    fn to_lchuv(&self) -> Lchuv {
        dispatch!(self, c => c.to_lchuv())
    }

    fn to_hsl(&self) -> Hsl {
        dispatch!(self, c => c.to_hsl())
    }

    fn to_hsv(&self) -> Hsv {
        dispatch!(self, c => c.to_hsv())
    }

    fn to_hwb(&self) -> Hwb {
        dispatch!(self, c => c.to_hwb())
    }

    fn to_cmyk(&self) -> Cmyk {
        dispatch!(self, c => c.to_cmyk())
    }

    fn to_ansi16(&self) -> Ansi16 {
        dispatch!(self, c => c.to_ansi16())
    }

    fn to_ansi256(&self) -> Ansi256 {
        dispatch!(self, c => c.to_ansi256())
    }

    fn to_rgb_int(&self) -> RgbInt {
        dispatch!(self, c => c.to_rgb_int())
    }
}

impl core::fmt::Display for Color {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        dispatch!(self, c => core::fmt::Display::fmt(c, f))
    }
}

macro_rules! from_color {
    ($($variant:ident),+) => {
        $(
            impl From<$variant> for Color {
                fn from(value: $variant) -> Self {
                    Color::$variant(value)
                }
            }
        )+
    };
}

from_color!(Rgb, RgbInt, Xyz, Lab, Lchab, Luv, Lchuv, Hsl, Hsv, Hwb, Cmyk, Ansi16, Ansi256);

// ====================================================================================================================
