/// The enumeration of supported color models.
///
/// # RGB
///
/// [`Rgb`](crate::Rgb) is gamma-corrected sRGB with the D65 white point. In
/// gamut coordinates range from 0 to 1, inclusive, though out-of-gamut and
/// high-dynamic-range colors may have coordinates beyond that range.
/// [`RgbInt`](crate::RgbInt) packs the same color into a 32-bit integer with
/// four 8-bit channels and thereby is the only RGB representation that clamps.
///
/// # The CIE Models
///
/// [XYZ](https://en.wikipedia.org/wiki/CIE_1931_color_space) serves as the
/// foundational, device-independent color model. Its white point is D65, with
/// luminance Y of white being 1. CIELAB and CIELUV are two perceptual models
/// derived from XYZ, each with a polar counterpart, LCh(ab) and LCh(uv):
///
/// | Model | Lightness | Colorness 1 | Colorness 2 |
/// | ----- | :-------: | :---------: | :---------: |
/// | LAB   | L         | a           | b           |
/// | LCHab | L         | C           | hº          |
/// | LUV   | L         | u           | v           |
/// | LCHuv | L         | C           | hº          |
///
/// Lightness ranges from 0 to 100. Chroma is non-negative. The hue may be
/// not-a-number, which indicates a powerless component, i.e., a gray tone with
/// zero chroma.
///
/// # The Device Models
///
/// HSL, HSV, and HWB are cylindrical transformations of RGB; CMYK is the
/// subtractive print model. Their non-hue channels range 0 to 100. HSL, HSV,
/// and CMYK round their channels to integers when converted from RGB, whereas
/// HWB does not.
///
/// # The Terminal Models
///
/// [`Ansi16`](crate::Ansi16) and [`Ansi256`](crate::Ansi256) are the discrete
/// palettes of terminals. Conversion to them quantizes colors and hence is
/// lossy.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ColorModel {
    Rgb,
    RgbInt,
    Xyz,
    Lab,
    Lchab,
    Luv,
    Lchuv,
    Hsl,
    Hsv,
    Hwb,
    Cmyk,
    Ansi16,
    Ansi256,
}

impl ColorModel {
    /// All color models in declaration order.
    pub const ALL: [ColorModel; 13] = [
        Self::Rgb,
        Self::RgbInt,
        Self::Xyz,
        Self::Lab,
        Self::Lchab,
        Self::Luv,
        Self::Lchuv,
        Self::Hsl,
        Self::Hsv,
        Self::Hwb,
        Self::Cmyk,
        Self::Ansi16,
        Self::Ansi256,
    ];

    /// Determine whether this color model is polar, with hue as its last
    /// coordinate.
    pub const fn is_polar(&self) -> bool {
        matches!(*self, Self::Lchab | Self::Lchuv)
    }

    /// Determine whether this color model is cylindrical, with hue as its
    /// first coordinate.
    pub const fn is_cylindrical(&self) -> bool {
        matches!(*self, Self::Hsl | Self::Hsv | Self::Hwb)
    }

    /// Determine whether this color model is one of the device-independent CIE
    /// models.
    pub const fn is_cie(&self) -> bool {
        matches!(
            *self,
            Self::Xyz | Self::Lab | Self::Lchab | Self::Luv | Self::Lchuv
        )
    }

    /// Determine whether this color model is discrete.
    ///
    /// Discrete models have integer channels or codes with hard bounds.
    /// Conversion to a discrete model clamps.
    pub const fn is_discrete(&self) -> bool {
        matches!(*self, Self::RgbInt | Self::Ansi16 | Self::Ansi256)
    }

    /// Get the index of the hue coordinate, if this model has one.
    pub const fn hue_index(&self) -> Option<usize> {
        if self.is_polar() {
            Some(2)
        } else if self.is_cylindrical() {
            Some(0)
        } else {
            None
        }
    }
}

impl core::fmt::Display for ColorModel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let s = match *self {
            Self::Rgb => "RGB",
            Self::RgbInt => "packed RGB",
            Self::Xyz => "XYZ D65",
            Self::Lab => "CIELAB",
            Self::Lchab => "CIELCh(ab)",
            Self::Luv => "CIELUV",
            Self::Lchuv => "CIELCh(uv)",
            Self::Hsl => "HSL",
            Self::Hsv => "HSV",
            Self::Hwb => "HWB",
            Self::Cmyk => "CMYK",
            Self::Ansi16 => "ANSI 16",
            Self::Ansi256 => "ANSI 256",
        };

        f.write_str(s)
    }
}

#[cfg(test)]
mod test {
    use super::ColorModel;

    #[test]
    fn test_classification() {
        let polar: Vec<_> = ColorModel::ALL.iter().filter(|m| m.is_polar()).collect();
        assert_eq!(polar, [&ColorModel::Lchab, &ColorModel::Lchuv], "polar models");

        let discrete = ColorModel::ALL.iter().filter(|m| m.is_discrete()).count();
        assert_eq!(discrete, 3, "discrete models");

        assert_eq!(ColorModel::Hwb.hue_index(), Some(0), "HWB hue index");
        assert_eq!(ColorModel::Lchuv.hue_index(), Some(2), "LCHuv hue index");
        assert_eq!(ColorModel::Cmyk.hue_index(), None, "CMYK has no hue");
        assert_eq!(ColorModel::Xyz.to_string(), "XYZ D65", "display");
    }
}
