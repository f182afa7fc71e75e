//! The cylindrical device models and CMYK.
//!
//! [`Hsl`], [`Hsv`], and [`Hwb`] are cylindrical transformations of RGB with
//! the hue as first coordinate, in degrees. All three compute the hue with the
//! same helper and hence agree on it. [`Cmyk`] is the subtractive print model.
//! Non-hue channels of all four range from 0 to 100.
//!
//! Converting RGB to HSL, HSV, or CMYK rounds half up to integers as the very
//! last step. Converting to HWB does not round. Converting an achromatic color
//! to a cylindrical model yields a not-a-number hue, which converts back as
//! if it were zero.

use crate::convert::ConvertibleColor;
use crate::core::{cmyk_to_rgb, hsl_to_rgb, hsv_to_rgb, hwb_to_rgb, ColorModel};
use crate::{Float, Rgb};

float_color! {
    /// A color in HSL, i.e., hue, saturation, and lightness.
    Hsl, Hsl, 3, [h: 0, s: 1, l: 2]
}

impl ConvertibleColor for Hsl {
    fn alpha(&self) -> Float {
        self.alpha
    }

    fn model(&self) -> ColorModel {
        ColorModel::Hsl
    }

    fn to_rgb(&self) -> Rgb {
        Rgb::from_parts(hsl_to_rgb(&self.coordinates), self.alpha)
    }

    fn to_hsl(&self) -> Hsl {
        *self
    }
}

float_color! {
    /// A color in HSV, i.e., hue, saturation, and value.
    Hsv, Hsv, 3, [h: 0, s: 1, v: 2]
}

impl ConvertibleColor for Hsv {
    fn alpha(&self) -> Float {
        self.alpha
    }

    fn model(&self) -> ColorModel {
        ColorModel::Hsv
    }

    fn to_rgb(&self) -> Rgb {
        Rgb::from_parts(hsv_to_rgb(&self.coordinates), self.alpha)
    }

    fn to_hsv(&self) -> Hsv {
        *self
    }
}

float_color! {
    /// A color in HWB, i.e., hue, whiteness, and blackness.
    ///
    /// If whiteness and blackness add up to more than 100, conversion to RGB
    /// scales both down proportionally, which results in a gray.
    Hwb, Hwb, 3, [h: 0, w: 1, b: 2]
}

impl ConvertibleColor for Hwb {
    fn alpha(&self) -> Float {
        self.alpha
    }

    fn model(&self) -> ColorModel {
        ColorModel::Hwb
    }

    fn to_rgb(&self) -> Rgb {
        Rgb::from_parts(hwb_to_rgb(&self.coordinates), self.alpha)
    }

    fn to_hwb(&self) -> Hwb {
        *self
    }
}

// ====================================================================================================================

float_color! {
    /// A color in CMYK, i.e., cyan, magenta, yellow, and black.
    ///
    /// Pure black has zero cyan, magenta, and yellow.
    Cmyk, Cmyk, 4, [c: 0, m: 1, y: 2, k: 3]
}

impl ConvertibleColor for Cmyk {
    fn alpha(&self) -> Float {
        self.alpha
    }

    fn model(&self) -> ColorModel {
        ColorModel::Cmyk
    }

    fn to_rgb(&self) -> Rgb {
        Rgb::from_parts(cmyk_to_rgb(&self.coordinates), self.alpha)
    }

    fn to_cmyk(&self) -> Cmyk {
        *self
    }
}
