mod conversion;
mod equality;
mod math;
mod model;
mod string;

// conversion
pub(crate) use conversion::{
    ansi16_code_to_ansi256, ansi16_to_rgb, ansi256_to_ansi16_code, ansi256_to_rgb,
    cartesian_to_polar, cmyk_to_rgb, hsl_to_rgb, hsv_to_rgb, hwb_to_rgb, lab_to_xyz,
    luv_to_xyz, polar_to_cartesian, rgb_to_ansi16, rgb_to_ansi256, rgb_to_cmyk, rgb_to_hsl,
    rgb_to_hsv, rgb_to_hwb, rgb_to_xyz, xyz_to_lab, xyz_to_luv, xyz_to_rgb,
};

// equality
#[cfg(test)]
pub(crate) use equality::assert_approx_coordinates;
pub use equality::to_eq_bits;
pub(crate) use equality::to_eq_coordinates;

// math
pub(crate) use math::{normalize_hue, round_half_up, round_to_u8, FloatExt};

// model
pub use model::ColorModel;

// string
pub(crate) use string::{format, format_hex, parse_hex};
