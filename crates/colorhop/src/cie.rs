//! The device-independent CIE color models.
//!
//! [`Xyz`] is the second conversion hub. [`Lab`] and [`Luv`] derive from it,
//! and [`Lchab`] and [`Lchuv`] are their polar forms. All five use the D65
//! white point, with the luminance of white being 1 in XYZ and the lightness
//! of white being 100 in the other four.

use crate::convert::ConvertibleColor;
use crate::core::{
    cartesian_to_polar, lab_to_xyz, luv_to_xyz, polar_to_cartesian, xyz_to_lab, xyz_to_luv,
    xyz_to_rgb, ColorModel,
};
use crate::{Float, Rgb};

float_color! {
    /// A color in XYZ with the D65 white point.
    ///
    /// Converting to RGB does not clamp, so that colors outside the sRGB gamut
    /// have channels outside the unit range.
    Xyz, Xyz, 3, [x: 0, y: 1, z: 2]
}

impl ConvertibleColor for Xyz {
    fn alpha(&self) -> Float {
        self.alpha
    }

    fn model(&self) -> ColorModel {
        ColorModel::Xyz
    }

    fn to_rgb(&self) -> Rgb {
        Rgb::from_parts(xyz_to_rgb(&self.coordinates), self.alpha)
    }

    fn to_xyz(&self) -> Xyz {
        *self
    }

    fn to_lab(&self) -> Lab {
        Lab::from_parts(xyz_to_lab(&self.coordinates), self.alpha)
    }

    fn to_luv(&self) -> Luv {
        Luv::from_parts(xyz_to_luv(&self.coordinates), self.alpha)
    }
}

// ====================================================================================================================

float_color! {
    /// A color in CIELAB.
    Lab, Lab, 3, [l: 0, a: 1, b: 2]
}

impl ConvertibleColor for Lab {
    fn alpha(&self) -> Float {
        self.alpha
    }

    fn model(&self) -> ColorModel {
        ColorModel::Lab
    }

    fn to_rgb(&self) -> Rgb {
        self.to_xyz().to_rgb()
    }

    fn to_xyz(&self) -> Xyz {
        Xyz::from_parts(lab_to_xyz(&self.coordinates), self.alpha)
    }

    fn to_lab(&self) -> Lab {
        *self
    }

    fn to_lchab(&self) -> Lchab {
        Lchab::from_parts(cartesian_to_polar(&self.coordinates), self.alpha)
    }
}

float_color! {
    /// A color in CIELCh(ab), the polar form of CIELAB.
    ///
    /// The hue is not-a-number for achromatic colors.
    Lchab, Lchab, 3, [l: 0, c: 1, h: 2]
}

impl ConvertibleColor for Lchab {
    fn alpha(&self) -> Float {
        self.alpha
    }

    fn model(&self) -> ColorModel {
        ColorModel::Lchab
    }

    fn to_rgb(&self) -> Rgb {
        self.to_xyz().to_rgb()
    }

    fn to_xyz(&self) -> Xyz {
        self.to_lab().to_xyz()
    }

    fn to_lab(&self) -> Lab {
        Lab::from_parts(polar_to_cartesian(&self.coordinates), self.alpha)
    }

    fn to_lchab(&self) -> Lchab {
        *self
    }
}

// ====================================================================================================================

float_color! {
    /// A color in CIELUV.
    ///
    /// Pure black, i.e., zero lightness, converts to the XYZ origin exactly.
    Luv, Luv, 3, [l: 0, u: 1, v: 2]
}

impl ConvertibleColor for Luv {
    fn alpha(&self) -> Float {
        self.alpha
    }

    fn model(&self) -> ColorModel {
        ColorModel::Luv
    }

    fn to_rgb(&self) -> Rgb {
        self.to_xyz().to_rgb()
    }

    fn to_xyz(&self) -> Xyz {
        Xyz::from_parts(luv_to_xyz(&self.coordinates), self.alpha)
    }

    fn to_luv(&self) -> Luv {
        *self
    }

    fn to_lchuv(&self) -> Lchuv {
        Lchuv::from_parts(cartesian_to_polar(&self.coordinates), self.alpha)
    }
}

float_color! {
    /// A color in CIELCh(uv), the polar form of CIELUV.
    ///
    /// The hue is not-a-number for achromatic colors.
    Lchuv, Lchuv, 3, [l: 0, c: 1, h: 2]
}

impl ConvertibleColor for Lchuv {
    fn alpha(&self) -> Float {
        self.alpha
    }

    fn model(&self) -> ColorModel {
        ColorModel::Lchuv
    }

    fn to_rgb(&self) -> Rgb {
        self.to_xyz().to_rgb()
    }

    fn to_xyz(&self) -> Xyz {
        self.to_luv().to_xyz()
    }

    fn to_luv(&self) -> Luv {
        Luv::from_parts(polar_to_cartesian(&self.coordinates), self.alpha)
    }

    fn to_lchuv(&self) -> Lchuv {
        *self
    }
}

#[cfg(test)]
mod test {
    use super::{Lab, Lchab, Lchuv, Luv, Xyz};
    use crate::convert::ConvertibleColor;
    use crate::core::assert_approx_coordinates;
    use crate::error::AlphaError;
    use crate::Float;

    #[test]
    fn test_hub_routes() -> Result<(), AlphaError> {
        let yellow = Lab::new(83.70638900177585, 4.699612758957194, 84.87974611899384)
            .with_alpha(0.75)?;

        let rgb = yellow.to_rgb();
        assert_approx_coordinates!(rgb.as_ref(), &[1.0, 0.792156862745098, 0.0], 1e-9);
        assert_eq!(rgb.alpha(), 0.75, "alpha survives two hops");

        // LAB to LUV must pass through XYZ.
        let luv = yellow.to_luv();
        assert_approx_coordinates!(
            luv.as_ref(),
            &[83.70638900177585, 45.2587709522974, 87.34183781775067],
            1e-9
        );

        let lchuv = yellow.to_lchuv();
        assert_approx_coordinates!(
            lchuv.as_ref(),
            &[83.70638900177585, 98.37150492645104, 62.607724242067825],
            1e-9
        );
        assert_eq!(lchuv.alpha(), 0.75, "alpha survives three hops");

        let back = lchuv.to_lchab();
        assert_approx_coordinates!(
            back.as_ref(),
            &[83.70638900177585, 85.00975038964062, 86.8308891409],
            1e-9
        );
        Ok(())
    }

    #[test]
    fn test_polar() {
        let gray = Lab::new(50.0, 0.0, 0.0).to_lchab();
        assert_eq!(gray.c(), 0.0, "gray chroma");
        assert!(gray.h().is_nan(), "gray hue");
        assert_eq!(gray, Lchab::new(50.0, 0.0, Float::NAN), "NaN hue equality");

        let powerless = Lchab::new(50.0, 30.0, Float::NAN).to_lab();
        assert_eq!(powerless, Lab::new(50.0, 0.0, 0.0), "NaN hue has no colorness");

        let negative = Luv::new(40.0, -10.0, -10.0).to_lchuv();
        crate::assert_close_enough!(negative.h(), 225.0);
        assert_eq!(
            Lchuv::new(40.0, 10.0, -135.0),
            Lchuv::new(40.0, 10.0, 225.0),
            "hue rotation equality"
        );
    }

    #[test]
    fn test_xyz_hub() {
        let white = Xyz::new(0.9504559270516717, 1.0, 1.0890577507598784);
        assert_approx_coordinates!(white.to_lab().as_ref(), &[100.0, 0.0, 0.0], 1e-9);
        assert_approx_coordinates!(white.to_luv().as_ref(), &[100.0, 0.0, 0.0], 1e-9);
        assert_approx_coordinates!(white.to_rgb().as_ref(), &[1.0, 1.0, 1.0], 1e-9);
        assert_eq!(white.to_xyz(), white, "identity");
    }
}
