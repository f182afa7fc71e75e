use super::ColorModel;
use crate::error::ColorFormatError;
use crate::Float;

/// Parse a color in hexadecimal format. If successful, this function returns
/// the red, green, blue, and alpha channels as unsigned bytes.
///
/// The leading `#` is optional. Three and four digit forms duplicate each
/// digit, i.e., `#abc` is `#aabbcc`. Four and eight digit forms end with the
/// alpha channel, whereas the other two forms are fully opaque. Leading and
/// trailing white space is ignored.
pub(crate) fn parse_hex(s: &str) -> Result<[u8; 4], ColorFormatError> {
    let trimmed = s.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

    let result = parse_digits(digits);
    if let Err(ref error) = result {
        tracing::debug!(input = s, %error, "rejected hexadecimal color");
    }
    result
}

fn parse_digits(digits: &str) -> Result<[u8; 4], ColorFormatError> {
    let length = digits.chars().count();
    if !matches!(length, 3 | 4 | 6 | 8) {
        return Err(ColorFormatError::UnexpectedLength(length));
    } else if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ColorFormatError::MalformedHex);
    }

    let factor = if length <= 4 { 1 } else { 2 };
    let parse_channel = |index: usize| -> Result<u8, ColorFormatError> {
        let t = digits
            .get(factor * index..factor * (index + 1))
            .ok_or(ColorFormatError::MalformedHex)?;
        let n = u8::from_str_radix(t, 16).map_err(|_| ColorFormatError::MalformedHex)?;

        Ok(if factor == 1 { 16 * n + n } else { n })
    };

    let r = parse_channel(0)?;
    let g = parse_channel(1)?;
    let b = parse_channel(2)?;
    let a = if length == 4 || length == 8 {
        parse_channel(3)?
    } else {
        255
    };

    Ok([r, g, b, a])
}

/// Format the channels as a hexadecimal color string. The alpha channel is
/// omitted if fully opaque.
pub(crate) fn format_hex(channels: [u8; 4]) -> String {
    let [r, g, b, a] = channels;
    if a == 255 {
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    } else {
        format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, a)
    }
}

// --------------------------------------------------------------------------------------------------------------------

fn css_prefix(model: ColorModel) -> &'static str {
    use ColorModel::*;
    match model {
        Rgb | RgbInt => "color(srgb ",
        Xyz => "color(xyz ",
        Lab => "color(--lab-d65 ",
        Lchab => "color(--lch-d65 ",
        Luv => "color(--luv ",
        Lchuv => "color(--lchuv ",
        Hsl => "hsl(",
        Hsv => "color(--hsv ",
        Hwb => "hwb(",
        Cmyk => "color(--cmyk ",
        Ansi16 => "color(--ansi16 ",
        Ansi256 => "color(--ansi256 ",
    }
}

/// Format the color as a string.
///
/// This function formats the given coordinates for the given color model in
/// CSS notation, using `hsl()` and `hwb()` where CSS has an exact counterpart
/// and `color()` otherwise. Since CSS defines no LUV, HSV, or CMYK and since
/// CSS LAB uses D50, the corresponding `color()` names carry two leading
/// dashes, just like custom properties. This function respects the formatter's
/// precision, defaulting to 5 digits past the decimal. Since degrees are up to
/// two orders of magnitude larger than unit-range coordinates, it uses a
/// precision smaller by 2 for hues. It writes `none` for a not-a-number hue
/// and appends the alpha after a slash only if the color is not fully opaque.
pub(crate) fn format(
    model: ColorModel,
    coordinates: &[Float],
    alpha: Float,
    f: &mut core::fmt::Formatter<'_>,
) -> core::fmt::Result {
    f.write_str(css_prefix(model))?;

    let precision = f.precision().unwrap_or(5) as i32;
    let factor = (10.0 as Float).powi(precision);
    let hue_factor = (10.0 as Float).powi((precision - 2).max(0));
    let hue_index = model.hue_index();

    for (index, coordinate) in coordinates.iter().enumerate() {
        if 0 < index {
            f.write_str(" ")?;
        }

        if coordinate.is_nan() {
            f.write_str("none")?;
        } else if hue_index == Some(index) {
            write_number(*coordinate, hue_factor, f)?;
        } else {
            write_number(*coordinate, factor, f)?;
        }
    }

    if alpha < 1.0 {
        f.write_str(" / ")?;
        write_number(alpha, factor, f)?;
    }

    f.write_str(")")
}

fn write_number(value: Float, factor: Float, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    // CSS mandates NO trailing zeros whatsoever. But formatting floats with a
    // precision produces trailing zeros. Rounding avoids them, for the most
    // part. If fractional part is zero, we do need an explicit precision of
    // zero, which also turns negative zero into plain zero.
    let mut c = (value * factor).round() / factor;
    if c == 0.0 {
        c = 0.0;
    }

    if c == c.trunc() {
        f.write_fmt(format_args!("{:.0}", c))
    } else {
        f.write_fmt(format_args!("{}", c))
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{format_hex, parse_hex, ColorFormatError};

    #[test]
    fn test_parse_hex() -> Result<(), ColorFormatError> {
        assert_eq!(parse_hex("#123")?, [0x11_u8, 0x22, 0x33, 0xff]);
        assert_eq!(parse_hex("123a")?, [0x11_u8, 0x22, 0x33, 0xaa]);
        assert_eq!(parse_hex("#112233")?, [0x11_u8, 0x22, 0x33, 0xff]);
        assert_eq!(parse_hex("  #11223344 ")?, [0x11_u8, 0x22, 0x33, 0x44]);
        assert_eq!(parse_hex("#ABCDEF")?, [0xab_u8, 0xcd, 0xef, 0xff]);

        assert_eq!(parse_hex("#ff"), Err(ColorFormatError::UnexpectedLength(2)));
        assert_eq!(parse_hex("#"), Err(ColorFormatError::UnexpectedLength(0)));
        assert_eq!(
            parse_hex("#1234567"),
            Err(ColorFormatError::UnexpectedLength(7))
        );
        assert_eq!(parse_hex("#💩00"), Err(ColorFormatError::MalformedHex));
        assert_eq!(parse_hex("#0g0"), Err(ColorFormatError::MalformedHex));
        assert_eq!(parse_hex("+1+2+3"), Err(ColorFormatError::MalformedHex));

        Ok(())
    }

    #[test]
    fn test_format_hex() {
        assert_eq!(format_hex([0x11, 0x22, 0x33, 0xff]), "#112233");
        assert_eq!(format_hex([0, 0, 0, 0x80]), "#00000080");
    }

    #[test]
    fn test_format() {
        // Color models as Display directly invoke format().
        use crate::{Hsl, Lchuv, Rgb, Xyz};

        let rgb = Rgb::new(0.3, 0.336, 0.123456);
        assert_eq!(rgb.to_string(), "color(srgb 0.3 0.336 0.12346)");
        assert_eq!(format!("{:.2}", rgb), "color(srgb 0.3 0.34 0.12)");
        assert_eq!(Xyz::new(1.0, 0.0, -0.0).to_string(), "color(xyz 1 0 0)");
        assert_eq!(
            Lchuv::new(50.0, 0.0, crate::Float::NAN).to_string(),
            "color(--lchuv 50 0 none)"
        );
        assert_eq!(
            Hsl::new(123.45678, 50.0, 25.0).to_string(),
            "hsl(123.457 50 25)"
        );
        assert_eq!(
            Rgb::new(1.0, 0.0, 0.0)
                .with_alpha(0.5)
                .map(|c| c.to_string())
                .ok(),
            Some("color(srgb 1 0 0 / 0.5)".to_string())
        );
    }
}
