/// Define a color value type with floating point coordinates.
///
/// The macro takes the type's attributes and name, its [`ColorModel`]
/// variant, the number of coordinates, and the accessor name and index of
/// each coordinate. It generates the struct, a constructor for fully opaque
/// colors, coordinate and alpha accessors, the fallible alpha builder,
/// `AsRef` for the coordinates, equality and hashing over normalized
/// coordinates, and CSS-like display.
///
/// [`ColorModel`]: crate::ColorModel
macro_rules! float_color {
    (
        $(#[$attr:meta])*
        $name:ident, $model:ident, $n:literal, [$($channel:ident: $index:literal),+ $(,)?]
    ) => {
        $(#[$attr])*
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[derive(Copy, Clone, Debug)]
        pub struct $name {
            coordinates: [$crate::Float; $n],
            #[cfg_attr(
                feature = "serde",
                serde(deserialize_with = "crate::error::deserialize_alpha")
            )]
            alpha: $crate::Float,
        }

        impl $name {
            #[doc = concat!("Create a new, fully opaque ", stringify!($name), " color.")]
            #[must_use]
            #[inline]
            pub const fn new($($channel: $crate::Float),+) -> Self {
                Self {
                    coordinates: [$($channel),+],
                    alpha: 1.0,
                }
            }

            /// Create a new color from coordinates and an already validated
            /// alpha.
            #[inline]
            pub(crate) const fn from_parts(
                coordinates: [$crate::Float; $n],
                alpha: $crate::Float,
            ) -> Self {
                Self { coordinates, alpha }
            }

            /// Replace this color's alpha.
            ///
            /// Alpha must be between 0 and 1, inclusive.
            pub fn with_alpha(self, alpha: $crate::Float) -> Result<Self, $crate::error::AlphaError> {
                if (0.0..=1.0).contains(&alpha) {
                    Ok(Self { alpha, ..self })
                } else {
                    Err($crate::error::AlphaError(alpha))
                }
            }

            $(
                #[doc = concat!("Get the `", stringify!($channel), "` coordinate.")]
                #[inline]
                pub const fn $channel(&self) -> $crate::Float {
                    self.coordinates[$index]
                }
            )+

            /// Get this color's alpha.
            #[inline]
            pub const fn alpha(&self) -> $crate::Float {
                self.alpha
            }
        }

        impl AsRef<[$crate::Float; $n]> for $name {
            fn as_ref(&self) -> &[$crate::Float; $n] {
                &self.coordinates
            }
        }

        impl PartialEq for $name {
            /// Determine whether this color equals the other color.
            ///
            /// Both colors are normalized by replacing not-a-numbers with
            /// zero, removing full rotations from hues, reducing precision,
            /// and dropping the sign of negative zeros before comparing bits.
            fn eq(&self, other: &Self) -> bool {
                use $crate::core::{to_eq_bits, to_eq_coordinates, ColorModel};

                to_eq_bits(self.alpha) == to_eq_bits(other.alpha)
                    && to_eq_coordinates(ColorModel::$model, &self.coordinates)
                        == to_eq_coordinates(ColorModel::$model, &other.coordinates)
            }
        }

        impl Eq for $name {}

        impl ::core::hash::Hash for $name {
            fn hash<H: ::core::hash::Hasher>(&self, state: &mut H) {
                use $crate::core::{to_eq_bits, to_eq_coordinates, ColorModel};

                to_eq_bits(self.alpha).hash(state);
                to_eq_coordinates(ColorModel::$model, &self.coordinates).hash(state);
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                $crate::core::format(
                    $crate::core::ColorModel::$model,
                    &self.coordinates,
                    self.alpha,
                    f,
                )
            }
        }
    };
}
