//! # Color 🐇 Hop
//!
//! Colorhop converts colors between thirteen color models, ranging from
//! device-independent CIE models to the 16 and 256 colors of terminals. Every
//! conversion is total, never fails, and preserves the alpha channel.
//!
//!
//! ## 1. Overview
//!
//! Colorhop's main abstractions are:
//!
//!   * The **color model types** [`Rgb`], [`RgbInt`], [`Xyz`], [`Lab`],
//!     [`Lchab`], [`Luv`], [`Lchuv`], [`Hsl`], [`Hsv`], [`Hwb`], [`Cmyk`],
//!     [`Ansi16`], and [`Ansi256`] each hold the coordinates of a color in one
//!     model plus an alpha between 0 and 1.
//!   * [`ConvertibleColor`] is the **conversion trait** implemented by all of
//!     them. It only requires conversion to RGB and routes all other
//!     conversions through the two hubs sRGB and XYZ. Types override the
//!     routes for which a more direct hop exists, e.g., from [`Lab`] to
//!     [`Lchab`].
//!   * [`Color`] wraps any of the model types and adds **dynamic conversion**
//!     to a [`ColorModel`] picked at runtime with [`Color::to`].
//!   * The [`termco`] module holds the **terminal color formats** and the
//!     16 [`AnsiColor`]s.
//!
//! The [`error`] module holds colorhop's errors. Since conversions are total,
//! errors only arise when creating colors from out-of-bounds integers,
//! invalid alphas, or malformed hexadecimal strings.
//!
//!
//! ## 2. Hop, Hop, Hop
//!
//! Colors hop between models with the `to_<model>` methods:
//!
//! ```
//! # use colorhop::{ConvertibleColor, Lchuv, Rgb};
//! # use colorhop::error::ColorFormatError;
//! let gold: Rgb = "#ffca00".parse()?;
//! let lchuv: Lchuv = gold.to_lchuv();
//! assert_eq!(lchuv.to_string(), "color(--lchuv 83.70639 98.3715 62.608)");
//! assert_eq!(gold.to_hsl().to_string(), "hsl(48 100 50)");
//! assert_eq!(lchuv.to_ansi16().code(), 93);
//! # Ok::<(), ColorFormatError>(())
//! ```
//!
//! When the target model is only known at runtime, use [`Color`]:
//!
//! ```
//! # use colorhop::{Color, ColorModel, ConvertibleColor, Rgb};
//! let red: Color = Rgb::new(1.0, 0.0, 0.0).into();
//! for target in ColorModel::ALL {
//!     let hopped = red.to(target);
//!     assert_eq!(hopped.model(), target);
//! }
//! ```
//!
//! Equality between colors of the same model normalizes coordinates first. It
//! treats hues modulo 360, ignores the chroma of polar colors with a
//! not-a-number hue, and tolerates small floating point noise.
//!
//!
//! ## 3. Optional Features
//!
//! Colorhop supports two feature flags:
//!
//!   - **`f64`** selects the eponymous type as floating point type [`Float`]
//!     and `u64` as [`Bits`] instead of `f32` as [`Float`] and `u32` as
//!     [`Bits`]. This feature is enabled by default.
//!   - **`serde`** derives serialization and deserialization for all color
//!     model types, [`Color`], and [`ColorModel`]. This feature is disabled by
//!     default.

/// The floating point type in use.
#[cfg(feature = "f64")]
pub type Float = f64;
/// The floating point type in use.
#[cfg(not(feature = "f64"))]
pub type Float = f32;

/// [`Float`]'s bits.
#[cfg(feature = "f64")]
pub type Bits = u64;
/// [`Float`]'s bits.
#[cfg(not(feature = "f64"))]
pub type Bits = u32;

mod core;
#[macro_use]
mod macros;

mod cie;
mod convert;
mod device;
pub mod error;
mod rgb;
pub mod termco;

#[doc(hidden)]
pub use core::to_eq_bits;

pub use cie::{Lab, Lchab, Lchuv, Luv, Xyz};
pub use convert::{Color, ConvertibleColor};
pub use core::ColorModel;
pub use device::{Cmyk, Hsl, Hsv, Hwb};
pub use rgb::{Rgb, RgbInt};
pub use termco::{Ansi16, Ansi256, AnsiColor};
