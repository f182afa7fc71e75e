use super::math::{hue_min_max_delta, normalize_hue, round_half_up, round_to_u8, FloatExt};
use crate::Float;

/// Multiply the 3 by 3 matrix and 3-element vector with each other, producing a
/// new 3-element vector.
#[inline]
fn multiply(matrix: &[[Float; 3]; 3], vector: &[Float; 3]) -> [Float; 3] {
    let [row1, row2, row3] = *matrix;

    [
        row1[0].mul_add(vector[0], row1[1].mul_add(vector[1], row1[2] * vector[2])),
        row2[0].mul_add(vector[0], row2[1].mul_add(vector[1], row2[2] * vector[2])),
        row3[0].mul_add(vector[0], row3[1].mul_add(vector[1], row3[2] * vector[2])),
    ]
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert coordinates from gamma-corrected sRGB to linear sRGB. Values at or
/// below the knee, including negative ones, use the linear segment. This is a
/// one-hop, direct conversion.
fn rgb_to_linear_rgb(value: &[Float; 3]) -> [Float; 3] {
    #[inline]
    fn convert(value: Float) -> Float {
        if value > 0.04045 {
            ((value + 0.055) / 1.055).powf(2.4)
        } else {
            value / 12.92
        }
    }

    [convert(value[0]), convert(value[1]), convert(value[2])]
}

/// Convert coordinates from linear sRGB to gamma-corrected sRGB. This is a
/// one-hop, direct conversion.
fn linear_rgb_to_rgb(value: &[Float; 3]) -> [Float; 3] {
    #[inline]
    fn convert(value: Float) -> Float {
        if value > 0.0031308 {
            value.powf(1.0 / 2.4).mul_add(1.055, -0.055)
        } else {
            value * 12.92
        }
    }

    [convert(value[0]), convert(value[1]), convert(value[2])]
}

// --------------------------------------------------------------------------------------------------------------------
// https://github.com/color-js/color.js/blob/a77e080a070039c534dda3965a769675aac5f75e/src/spaces/srgb-linear.js

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const LINEAR_SRGB_TO_XYZ: [[Float; 3]; 3] = [
    [ 0.41239079926595934, 0.357584339383878,   0.1804807884018343  ],
    [ 0.21263900587151027, 0.715168678767756,   0.07219231536073371 ],
    [ 0.01933081871559182, 0.11919477979462598, 0.9505321522496607  ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const XYZ_TO_LINEAR_SRGB: [[Float; 3]; 3] = [
    [  3.2409699419045226,  -1.537383177570094,   -0.4986107602930034  ],
    [ -0.9692436362808796,   1.8759675015077202,   0.04155505740717559 ],
    [  0.05563007969699366, -0.20397695888897652,  1.0569715142428786  ],
];

/// The D65 reference white in XYZ, with luminance Y normalized to 1.
///
/// The X and Z values derive from the chromaticity x=0.3127, y=0.3290 and also
/// are the row sums of [`LINEAR_SRGB_TO_XYZ`], so sRGB white and grays convert
/// to XYZ values exactly proportional to this white.
#[allow(clippy::excessive_precision)]
pub(crate) const D65: [Float; 3] = [0.9504559270516717, 1.0, 1.0890577507598784];

/// Convert coordinates for sRGB to XYZ. This is a two-hop conversion.
pub(crate) fn rgb_to_xyz(value: &[Float; 3]) -> [Float; 3] {
    let linear_rgb = rgb_to_linear_rgb(value);
    multiply(&LINEAR_SRGB_TO_XYZ, &linear_rgb)
}

/// Convert coordinates for XYZ to sRGB. This is a two-hop conversion. It does
/// not clamp, so that out-of-gamut colors produce coordinates outside the unit
/// range.
pub(crate) fn xyz_to_rgb(value: &[Float; 3]) -> [Float; 3] {
    let linear_rgb = multiply(&XYZ_TO_LINEAR_SRGB, value);
    linear_rgb_to_rgb(&linear_rgb)
}

// --------------------------------------------------------------------------------------------------------------------
// CIE constants as rational numbers: http://www.brucelindbloom.com/LContinuity.html

/// The CIE ε, i.e., the luminance below which the curves are linear.
const CIE_EPSILON: Float = 216.0 / 24389.0;

/// The CIE κ, i.e., the slope of the linear segment scaled by 116.
const CIE_KAPPA: Float = 24389.0 / 27.0;

/// The CIE ε times κ, i.e., the lightness below which the curves are linear.
const CIE_EPSILON_KAPPA: Float = 8.0;

/// Convert coordinates for XYZ to CIELAB. This is a one-hop, direct conversion.
#[allow(non_snake_case)]
pub(crate) fn xyz_to_lab(value: &[Float; 3]) -> [Float; 3] {
    #[inline]
    fn f(t: Float) -> Float {
        if t > CIE_EPSILON {
            t.cbrt()
        } else {
            CIE_KAPPA.mul_add(t, 16.0) / 116.0
        }
    }

    let fx = f(value[0] / D65[0]);
    let fy = f(value[1] / D65[1]);
    let fz = f(value[2] / D65[2]);

    let L = fy.mul_add(116.0, -16.0);
    [L, 500.0 * (fx - fy), 200.0 * (fy - fz)]
}

/// Convert coordinates for CIELAB to XYZ. This is a one-hop, direct conversion.
#[allow(non_snake_case)]
pub(crate) fn lab_to_xyz(value: &[Float; 3]) -> [Float; 3] {
    let [L, a, b] = *value;
    if L == 0.0 {
        return [0.0, 0.0, 0.0];
    }

    #[inline]
    fn f_inverse(f: Float) -> Float {
        let cubed = f * f * f;
        if cubed > CIE_EPSILON {
            cubed
        } else {
            f.mul_add(116.0, -16.0) / CIE_KAPPA
        }
    }

    let fy = (L + 16.0) / 116.0;
    let fx = a / 500.0 + fy;
    let fz = fy - b / 200.0;

    let yr = if L > CIE_EPSILON_KAPPA {
        fy * fy * fy
    } else {
        L / CIE_KAPPA
    };

    [f_inverse(fx) * D65[0], yr * D65[1], f_inverse(fz) * D65[2]]
}

// --------------------------------------------------------------------------------------------------------------------

/// Compute the u′ and v′ chromaticity for the given XYZ coordinates. Zero
/// tristimulus values produce zero chromaticity.
#[inline]
fn uv_prime(value: &[Float; 3]) -> (Float, Float) {
    let [x, y, z] = *value;
    let denominator = z.mul_add(3.0, y.mul_add(15.0, x));
    if denominator == 0.0 {
        (0.0, 0.0)
    } else {
        (4.0 * x / denominator, 9.0 * y / denominator)
    }
}

/// Convert coordinates for XYZ to CIELUV. This is a one-hop, direct conversion.
#[allow(non_snake_case)]
pub(crate) fn xyz_to_luv(value: &[Float; 3]) -> [Float; 3] {
    let (u_prime, v_prime) = uv_prime(value);
    let (u_white, v_white) = uv_prime(&D65);

    let yr = value[1] / D65[1];
    let L = if yr > CIE_EPSILON {
        yr.cbrt().mul_add(116.0, -16.0)
    } else {
        CIE_KAPPA * yr
    };

    [
        L,
        13.0 * L * (u_prime - u_white),
        13.0 * L * (v_prime - v_white),
    ]
}

/// Convert coordinates for CIELUV to XYZ. This is a one-hop, direct conversion.
#[allow(non_snake_case)]
pub(crate) fn luv_to_xyz(value: &[Float; 3]) -> [Float; 3] {
    let [L, u, v] = *value;
    if L == 0.0 {
        return [0.0, 0.0, 0.0];
    }

    let (u_white, v_white) = uv_prime(&D65);

    let yr = if L > CIE_EPSILON_KAPPA {
        let fy = (L + 16.0) / 116.0;
        fy * fy * fy
    } else {
        L / CIE_KAPPA
    };
    let y = yr * D65[1];

    let a = (52.0 * L / (13.0 * L).mul_add(u_white, u) - 1.0) / 3.0;
    let b = -5.0 * y;
    let c = -1.0 / 3.0;
    let d = y * (39.0 * L / (13.0 * L).mul_add(v_white, v) - 5.0);

    let x = (d - b) / (a - c);
    let z = x.mul_add(a, b);
    [x, y, z]
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert Cartesian lightness and colorness to polar lightness, chroma, and
/// hue. CIELAB to LCh(ab) and CIELUV to LCh(uv) share this function. If the
/// chroma is indistinguishable from zero, the chroma is zero and the hue is
/// not-a-number. This is a one-hop, direct conversion.
#[allow(non_snake_case)]
pub(crate) fn cartesian_to_polar(value: &[Float; 3]) -> [Float; 3] {
    let [L, a, b] = *value;

    let C = a.hypot(b);
    if C < <Float as FloatExt>::ACHROMATIC_THRESHOLD {
        return [L, 0.0, Float::NAN];
    }

    let h = normalize_hue(b.atan2(a).to_degrees());
    [L, C, h]
}

/// Convert polar lightness, chroma, and hue to Cartesian lightness and
/// colorness. A not-a-number hue yields zero colorness. This is a one-hop,
/// direct conversion.
#[allow(non_snake_case)]
pub(crate) fn polar_to_cartesian(value: &[Float; 3]) -> [Float; 3] {
    let [L, C, h] = *value;

    if h.is_nan() {
        [L, 0.0, 0.0]
    } else {
        let hue_radian = h.to_radians();
        [L, C * hue_radian.cos(), C * hue_radian.sin()]
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert coordinates for sRGB to HSL, with saturation and lightness scaled to
/// `0..=100` but not rounded. Achromatic colors have a not-a-number hue.
pub(crate) fn rgb_to_hsl(value: &[Float; 3]) -> [Float; 3] {
    let hmmd = hue_min_max_delta(value[0], value[1], value[2]);
    let lightness = (hmmd.min + hmmd.max) / 2.0;
    let saturation = if hmmd.is_achromatic() {
        0.0
    } else if lightness <= 0.5 {
        hmmd.delta / (hmmd.max + hmmd.min)
    } else {
        hmmd.delta / (2.0 - hmmd.max - hmmd.min)
    };

    [hmmd.hue_or_nan(), saturation * 100.0, lightness * 100.0]
}

/// Compute one RGB channel for the HSL hue, shifted per channel by a third of a
/// rotation. The hue circle splits into six 60º sectors, with the channel
/// ramping up in the first, saturated in the second and third, ramping down in
/// the fourth, and flat in the last two.
#[inline]
fn hue_to_channel(t1: Float, t2: Float, hue: Float) -> Float {
    let hue = hue.rem_euclid(360.0);

    if hue < 60.0 {
        (t2 - t1).mul_add(hue / 60.0, t1)
    } else if hue < 180.0 {
        t2
    } else if hue < 240.0 {
        (t2 - t1).mul_add((240.0 - hue) / 60.0, t1)
    } else {
        t1
    }
}

/// Convert coordinates for HSL to sRGB. Saturation and lightness range
/// `0..=100`. A not-a-number hue is treated as zero.
pub(crate) fn hsl_to_rgb(value: &[Float; 3]) -> [Float; 3] {
    let hue = if value[0].is_nan() { 0.0 } else { value[0] };
    let saturation = value[1] / 100.0;
    let lightness = value[2] / 100.0;

    if saturation == 0.0 {
        return [lightness, lightness, lightness];
    }

    let t2 = if lightness <= 0.5 {
        lightness * (saturation + 1.0)
    } else {
        (-lightness).mul_add(saturation, lightness + saturation)
    };
    let t1 = lightness.mul_add(2.0, -t2);

    [
        hue_to_channel(t1, t2, hue + 120.0),
        hue_to_channel(t1, t2, hue),
        hue_to_channel(t1, t2, hue - 120.0),
    ]
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert coordinates for sRGB to HSV, with saturation and value scaled to
/// `0..=100` but not rounded. Achromatic colors have a not-a-number hue.
pub(crate) fn rgb_to_hsv(value: &[Float; 3]) -> [Float; 3] {
    let hmmd = hue_min_max_delta(value[0], value[1], value[2]);
    let saturation = if hmmd.max == 0.0 {
        0.0
    } else {
        hmmd.delta / hmmd.max
    };

    [hmmd.hue_or_nan(), saturation * 100.0, hmmd.max * 100.0]
}

/// Convert coordinates for HSV to sRGB. Saturation and value range `0..=100`.
/// A not-a-number hue is treated as zero.
pub(crate) fn hsv_to_rgb(value: &[Float; 3]) -> [Float; 3] {
    let hue = if value[0].is_nan() {
        0.0
    } else {
        value[0].rem_euclid(360.0) / 60.0
    };
    let saturation = value[1] / 100.0;
    let v = value[2] / 100.0;

    let sector = hue.floor();
    let fraction = hue - sector;
    let p = v * (1.0 - saturation);
    let q = v * saturation.mul_add(-fraction, 1.0);
    let t = v * saturation.mul_add(fraction - 1.0, 1.0);

    match (sector as u32) % 6 {
        0 => [v, t, p],
        1 => [q, v, p],
        2 => [p, v, t],
        3 => [p, q, v],
        4 => [t, p, v],
        _ => [v, p, q],
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert coordinates for sRGB to HWB, with whiteness and blackness scaled to
/// `0..=100`. Achromatic colors have a not-a-number hue.
pub(crate) fn rgb_to_hwb(value: &[Float; 3]) -> [Float; 3] {
    let hmmd = hue_min_max_delta(value[0], value[1], value[2]);
    [hmmd.hue_or_nan(), hmmd.min * 100.0, (1.0 - hmmd.max) * 100.0]
}

/// Convert coordinates for HWB to sRGB. If whiteness and blackness add up to
/// more than 100, they are scaled down proportionally, which produces a gray.
/// <https://drafts.csswg.org/css-color-4/#hwb-to-rgb>
pub(crate) fn hwb_to_rgb(value: &[Float; 3]) -> [Float; 3] {
    let mut whiteness = value[1] / 100.0;
    let mut blackness = value[2] / 100.0;

    let sum = whiteness + blackness;
    if sum > 1.0 {
        whiteness /= sum;
        blackness /= sum;
    }

    let factor = 1.0 - whiteness - blackness;
    let [r, g, b] = hsl_to_rgb(&[value[0], 100.0, 50.0]);
    [
        r.mul_add(factor, whiteness),
        g.mul_add(factor, whiteness),
        b.mul_add(factor, whiteness),
    ]
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert coordinates for sRGB to CMYK, scaled to `0..=100` but not rounded.
/// Pure black has zero cyan, magenta, and yellow.
pub(crate) fn rgb_to_cmyk(value: &[Float; 3]) -> [Float; 4] {
    let [r, g, b] = *value;
    let k = 1.0 - r.max(g).max(b);
    if k == 1.0 {
        return [0.0, 0.0, 0.0, 100.0];
    }

    let white = 1.0 - k;
    [
        (1.0 - r - k) / white * 100.0,
        (1.0 - g - k) / white * 100.0,
        (1.0 - b - k) / white * 100.0,
        k * 100.0,
    ]
}

/// Convert coordinates for CMYK, ranging `0..=100`, to sRGB.
pub(crate) fn cmyk_to_rgb(value: &[Float; 4]) -> [Float; 3] {
    let [c, m, y, k] = value.map(|v| v / 100.0);
    let white = 1.0 - k;
    [(1.0 - c) * white, (1.0 - m) * white, (1.0 - y) * white]
}

// --------------------------------------------------------------------------------------------------------------------

/// Quantize sRGB coordinates to a foreground SGR code for the 16 ANSI colors.
///
/// This function reproduces a legacy quantization rule: It rounds each channel
/// to 0 or 1 to pick one of eight base colors and uses the bright variant only
/// if the HSV value rounds to 100. An HSV value of exactly 30 maps to black.
pub(crate) fn rgb_to_ansi16(value: &[Float; 3]) -> u8 {
    let hsv_value = round_half_up(rgb_to_hsv(value)[2]);
    if hsv_value == 30.0 {
        return 30;
    }

    let [r, g, b] = value.map(|c| round_to_u8(c, 0, 1));
    let code = 30 + ((b << 2) | (g << 1) | r);

    if (hsv_value / 50.0).floor() == 2.0 {
        code + 60
    } else {
        code
    }
}

/// Convert a foreground SGR code for the 16 ANSI colors to sRGB coordinates.
///
/// The legacy palette maps normal colors to half intensity and bright colors to
/// full intensity. Black and white are spread evenly across four gray levels.
pub(crate) fn ansi16_to_rgb(code: u8) -> [Float; 3] {
    let color = code % 10;
    let is_bright = 90 <= code;

    if color == 0 || color == 7 {
        let level = Float::from(color) + if is_bright { 3.5 } else { 0.0 };
        let v = level / 10.5;
        return [v, v, v];
    }

    let intensity = if is_bright { 1.0 } else { 0.5 };
    [
        Float::from(color & 1) * intensity,
        Float::from((color >> 1) & 1) * intensity,
        Float::from((color >> 2) & 1) * intensity,
    ]
}

/// Quantize sRGB coordinates to an 8-bit terminal color.
///
/// If all three coordinates map to the same 8-bit value, this function picks
/// a color from the 24-step gray ramp, with the darkest and lightest values
/// snapping to black and white of the 6x6x6 RGB cube. Otherwise, it picks a
/// color from the RGB cube. Coordinates are clamped to unit range.
pub(crate) fn rgb_to_ansi256(value: &[Float; 3]) -> u8 {
    let [r, g, b] = value.map(|c| round_to_u8(c * 255.0, 0, 255));

    if r == g && g == b {
        return if r < 8 {
            16
        } else if r > 248 {
            231
        } else {
            let level = Float::from(r - 8) / 247.0 * 24.0;
            232 + round_to_u8(level, 0, 23)
        };
    }

    let [r, g, b] = value.map(|c| round_to_u8(c * 5.0, 0, 5));
    16 + 36 * r + 6 * g + b
}

/// Convert an 8-bit terminal color to sRGB coordinates. The first 16 colors use
/// the same palette as [`ansi16_to_rgb`].
pub(crate) fn ansi256_to_rgb(index: u8) -> [Float; 3] {
    if index < 16 {
        ansi16_to_rgb(ansi256_to_ansi16_code(index))
    } else if 232 <= index {
        let level = Float::from(10 * (index - 232) + 8) / 255.0;
        [level, level, level]
    } else {
        let c = index - 16;
        let r = c / 36;
        let g = (c % 36) / 6;
        let b = c % 6;
        [
            Float::from(r) / 5.0,
            Float::from(g) / 5.0,
            Float::from(b) / 5.0,
        ]
    }
}

/// Convert an 8-bit index `0..=15` to the corresponding foreground SGR code.
#[inline]
pub(crate) const fn ansi256_to_ansi16_code(index: u8) -> u8 {
    if index < 8 {
        30 + index
    } else {
        90 + index - 8
    }
}

/// Convert a foreground SGR code to the corresponding 8-bit index `0..=15`.
#[inline]
pub(crate) const fn ansi16_code_to_ansi256(code: u8) -> u8 {
    if 90 <= code {
        code - 90 + 8
    } else {
        code - 30
    }
}

#[cfg(test)]
#[allow(clippy::excessive_precision)]
mod test {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;
    use crate::core::assert_approx_coordinates;
    use crate::Float;

    struct Representations {
        rgb: [Float; 3],
        xyz: [Float; 3],
        lab: [Float; 3],
        lchab: [Float; 3],
        luv: [Float; 3],
        lchuv: [Float; 3],
        hsl: [Float; 3],
        hsv: [Float; 3],
        hwb: [Float; 3],
        cmyk: [Float; 4],
        ansi16: u8,
        ansi256: u8,
    }

    const BLACK: Representations = Representations {
        // #000000
        rgb: [0.0, 0.0, 0.0],
        xyz: [0.0, 0.0, 0.0],
        lab: [0.0, 0.0, 0.0],
        lchab: [0.0, 0.0, Float::NAN],
        luv: [0.0, 0.0, 0.0],
        lchuv: [0.0, 0.0, Float::NAN],
        hsl: [Float::NAN, 0.0, 0.0],
        hsv: [Float::NAN, 0.0, 0.0],
        hwb: [Float::NAN, 0.0, 100.0],
        cmyk: [0.0, 0.0, 0.0, 100.0],
        ansi16: 30,
        ansi256: 16,
    };

    const RED: Representations = Representations {
        // #ff0000
        rgb: [1.0, 0.0, 0.0],
        xyz: [0.41239079926595934, 0.21263900587151027, 0.01933081871559182],
        lab: [53.23711559542936, 80.09011352310385, 67.20326351172214],
        lchab: [53.23711559542936, 104.55001152926587, 39.99986515439812],
        luv: [53.23711559542936, 175.00982216288483, 37.76509362555973],
        lchuv: [53.23711559542936, 179.03809692362088, 12.177050630061125],
        hsl: [0.0, 100.0, 50.0],
        hsv: [0.0, 100.0, 100.0],
        hwb: [0.0, 0.0, 0.0],
        cmyk: [0.0, 100.0, 100.0, 0.0],
        ansi16: 91,
        ansi256: 196,
    };

    const YELLOW: Representations = Representations {
        // #ffca00
        rgb: [1.0, 0.792156862745098, 0.0],
        xyz: [0.6235868473237722, 0.635031101987136, 0.08972950140152941],
        lab: [83.70638900177585, 4.699612758957194, 84.87974611899384],
        lchab: [83.70638900177585, 85.00975038964062, 86.8308891409],
        luv: [83.70638900177585, 45.2587709522974, 87.34183781775067],
        lchuv: [83.70638900177585, 98.37150492645104, 62.607724242067825],
        hsl: [47.52941176470588, 100.0, 50.0],
        hsv: [47.52941176470588, 100.0, 100.0],
        hwb: [47.52941176470588, 0.0, 0.0],
        cmyk: [0.0, 20.784313725490204, 100.0, 0.0],
        ansi16: 93,
        ansi256: 220,
    };

    const BLUE: Representations = Representations {
        // #3178ea
        rgb: [0.19215686274509805, 0.47058823529411764, 0.9176470588235294],
        xyz: [0.22832473003420622, 0.20025321836938534, 0.80506528557483],
        lab: [51.86582883269902, 18.295857222358546, -63.828101755053225],
        lchab: [51.86582883269902, 66.39853134787214, 285.99456156763284],
        luv: [51.86582883269902, -24.34564765668088, -100.58623437829841],
        lchuv: [51.86582883269902, 103.49058462599017, 256.39393198803174],
        hsl: [216.97297297297297, 81.49779735682817, 55.490196078431374],
        hsv: [216.97297297297297, 79.05982905982906, 91.76470588235294],
        hwb: [216.97297297297297, 19.215686274509807, 8.235294117647063],
        cmyk: [79.05982905982906, 48.71794871794872, 0.0, 8.235294117647063],
        ansi16: 34,
        ansi256: 69,
    };

    const WHITE: Representations = Representations {
        // #ffffff
        rgb: [1.0, 1.0, 1.0],
        xyz: [0.9504559270516717, 1.0, 1.0890577507598784],
        lab: [100.0, 0.0, 0.0],
        lchab: [100.0, 0.0, Float::NAN],
        luv: [100.0, 0.0, 0.0],
        lchuv: [100.0, 0.0, Float::NAN],
        hsl: [Float::NAN, 0.0, 100.0],
        hsv: [Float::NAN, 0.0, 100.0],
        hwb: [Float::NAN, 100.0, 0.0],
        cmyk: [0.0, 0.0, 0.0, 0.0],
        ansi16: 97,
        ansi256: 231,
    };

    #[test]
    fn test_conversions() {
        for color in [&BLACK, &RED, &YELLOW, &BLUE, &WHITE] {
            let xyz = rgb_to_xyz(&color.rgb);
            assert_approx_coordinates!(&xyz, &color.xyz, 1e-9);
            assert_approx_coordinates!(&xyz_to_rgb(&xyz), &color.rgb, 1e-9);

            let lab = xyz_to_lab(&xyz);
            assert_approx_coordinates!(&lab, &color.lab, 1e-9);
            assert_approx_coordinates!(&lab_to_xyz(&lab), &xyz, 1e-9);

            let lchab = cartesian_to_polar(&lab);
            assert_approx_coordinates!(&lchab, &color.lchab, 1e-9);
            assert_approx_coordinates!(&polar_to_cartesian(&lchab), &lab, 1e-9);

            let luv = xyz_to_luv(&xyz);
            assert_approx_coordinates!(&luv, &color.luv, 1e-9);
            assert_approx_coordinates!(&luv_to_xyz(&luv), &xyz, 1e-9);

            let lchuv = cartesian_to_polar(&luv);
            assert_approx_coordinates!(&lchuv, &color.lchuv, 1e-9);
            assert_approx_coordinates!(&polar_to_cartesian(&lchuv), &luv, 1e-9);

            let hsl = rgb_to_hsl(&color.rgb);
            assert_approx_coordinates!(&hsl, &color.hsl, 1e-9);
            assert_approx_coordinates!(&hsl_to_rgb(&hsl), &color.rgb, 1e-9);

            let hsv = rgb_to_hsv(&color.rgb);
            assert_approx_coordinates!(&hsv, &color.hsv, 1e-9);
            assert_approx_coordinates!(&hsv_to_rgb(&hsv), &color.rgb, 1e-9);

            let hwb = rgb_to_hwb(&color.rgb);
            assert_approx_coordinates!(&hwb, &color.hwb, 1e-9);
            assert_approx_coordinates!(&hwb_to_rgb(&hwb), &color.rgb, 1e-9);

            let cmyk = rgb_to_cmyk(&color.rgb);
            assert_approx_coordinates!(&cmyk, &color.cmyk, 1e-9);
            assert_approx_coordinates!(&cmyk_to_rgb(&cmyk), &color.rgb, 1e-9);

            assert_eq!(rgb_to_ansi16(&color.rgb), color.ansi16, "ANSI 16 code");
            assert_eq!(rgb_to_ansi256(&color.rgb), color.ansi256, "ANSI 256 index");
        }
    }

    #[test]
    fn test_luv_reference_table() {
        assert_eq!(luv_to_xyz(&[0.0, 0.0, 0.0]), [0.0, 0.0, 0.0], "black is exact");

        assert_approx_coordinates!(
            &luv_to_xyz(&[18.0, 18.0, 18.0]),
            &[0.02854945, 0.02518041, 0.00312744],
            5e-4
        );
        assert_approx_coordinates!(
            &luv_to_xyz(&[40.0, 50.0, 60.0]),
            &[0.12749789, 0.11250974, -0.02679452],
            5e-4
        );
        assert_approx_coordinates!(
            &luv_to_xyz(&[100.0, 100.0, 100.0]),
            &[1.13379604, 1.0, 0.12420117],
            5e-4
        );

        assert_approx_coordinates!(
            &cartesian_to_polar(&[18.0, 18.0, 18.0]),
            &[18.0, 25.45584412, 45.0],
            5e-4
        );
        assert_approx_coordinates!(
            &cartesian_to_polar(&[40.0, 50.0, 60.0]),
            &[40.0, 78.10249676, 50.19442891],
            5e-4
        );
        assert_approx_coordinates!(
            &cartesian_to_polar(&[100.0, 100.0, 100.0]),
            &[100.0, 141.42135624, 45.0],
            5e-4
        );
        assert_approx_coordinates!(
            &cartesian_to_polar(&[0.0, 0.0, 0.0]),
            &[0.0, 0.0, Float::NAN],
            5e-4
        );
    }

    #[test]
    fn test_luv_through_xyz() {
        for luv in [[18.0, 18.0, 18.0], [40.0, 50.0, 60.0], [100.0, 100.0, 100.0]] {
            let direct = cartesian_to_polar(&luv);
            let routed = cartesian_to_polar(&xyz_to_luv(&luv_to_xyz(&luv)));
            assert_approx_coordinates!(&routed, &direct, 5e-4);
        }
    }

    #[test]
    fn test_random_round_trips() {
        let mut rng = StdRng::seed_from_u64(0xfade);

        for _ in 0..10_000 {
            let rgb: [Float; 3] = [rng.random(), rng.random(), rng.random()];
            assert_approx_coordinates!(&xyz_to_rgb(&rgb_to_xyz(&rgb)), &rgb, 5e-4);
            assert_approx_coordinates!(&hsl_to_rgb(&rgb_to_hsl(&rgb)), &rgb, 5e-4);
            assert_approx_coordinates!(&hsv_to_rgb(&rgb_to_hsv(&rgb)), &rgb, 5e-4);
            assert_approx_coordinates!(&hwb_to_rgb(&rgb_to_hwb(&rgb)), &rgb, 5e-4);
            assert_approx_coordinates!(&cmyk_to_rgb(&rgb_to_cmyk(&rgb)), &rgb, 5e-4);
        }
    }

    #[test]
    fn test_grays_are_achromatic() {
        for level in [0.0, 0.1, 0.25, 0.5, 0.75, 0.9, 1.0] {
            let xyz = rgb_to_xyz(&[level, level, level]);

            let [_, chroma, hue] = cartesian_to_polar(&xyz_to_lab(&xyz));
            assert_eq!(chroma, 0.0, "LCh(ab) chroma of gray {}", level);
            assert!(hue.is_nan(), "LCh(ab) hue of gray {} should be NaN", level);

            let [_, chroma, hue] = cartesian_to_polar(&xyz_to_luv(&xyz));
            assert_eq!(chroma, 0.0, "LCh(uv) chroma of gray {}", level);
            assert!(hue.is_nan(), "LCh(uv) hue of gray {} should be NaN", level);
        }
    }

    #[test]
    fn test_out_of_gamut() {
        // Display P3's green primary lies outside sRGB.
        let xyz = [0.2656676931690931, 0.6917385218365064, 0.0451133818589026];
        let [r, g, b] = xyz_to_rgb(&xyz);
        assert!(r < 0.0, "red {} should be negative", r);
        assert!(1.0 < g, "green {} should exceed 1", g);
        assert!(b < 0.0, "blue {} should be negative", b);
        assert_approx_coordinates!(&rgb_to_xyz(&[r, g, b]), &xyz, 1e-9);
    }

    #[test]
    fn test_hwb_normalization() {
        assert_approx_coordinates!(
            &hwb_to_rgb(&[120.0, 80.0, 80.0]),
            &[0.5, 0.5, 0.5],
            1e-12
        );
        assert_approx_coordinates!(
            &hwb_to_rgb(&[Float::NAN, 30.0, 10.0]),
            &[0.9, 0.3, 0.3],
            1e-12
        );
    }

    #[test]
    fn test_ansi() {
        // Legacy special case and bright variant
        assert_eq!(rgb_to_ansi16(&[0.3, 0.3, 0.3]), 30, "value 30");
        assert_eq!(rgb_to_ansi16(&[0.5, 0.5, 0.5]), 37, "mid gray");
        assert_eq!(rgb_to_ansi16(&[0.0, 1.0, 1.0]), 96, "bright cyan");
        assert_eq!(rgb_to_ansi16(&[0.0, 0.6, 0.6]), 36, "cyan");

        assert_eq!(ansi16_to_rgb(30), [0.0, 0.0, 0.0], "black");
        assert_eq!(ansi16_to_rgb(31), [0.5, 0.0, 0.0], "red");
        assert_eq!(ansi16_to_rgb(94), [0.0, 0.0, 1.0], "bright blue");
        assert_eq!(ansi16_to_rgb(97), [1.0, 1.0, 1.0], "bright white");
        assert_approx_coordinates!(&ansi16_to_rgb(90), &[1.0 / 3.0; 3], 1e-12);

        // Gray ramp
        assert_eq!(rgb_to_ansi256(&[0.01, 0.01, 0.01]), 16, "near black");
        assert_eq!(rgb_to_ansi256(&[0.99, 0.99, 0.99]), 231, "near white");
        assert_eq!(rgb_to_ansi256(&[0.5, 0.5, 0.5]), 244, "mid gray");

        // Cube, with out-of-gamut coordinates clamped
        assert_eq!(rgb_to_ansi256(&[1.4, -0.2, 0.0]), 196, "clamped red");
        assert_eq!(rgb_to_ansi256(&[1.0, 0.4, 0.0]), 208, "orange");

        assert_eq!(ansi256_to_rgb(196), [1.0, 0.0, 0.0], "cube red");
        assert_eq!(ansi256_to_rgb(232), [8.0 / 255.0; 3], "darkest gray");
        assert_eq!(ansi256_to_rgb(9), [1.0, 0.0, 0.0], "bright red");

        for index in 0..16 {
            let code = ansi256_to_ansi16_code(index);
            assert_eq!(ansi16_code_to_ansi256(code), index, "code {}", code);
        }
    }
}
