//! Closed string enumerations exchanged on the wire.
//!
//! Each enumeration declares its exhaustive set of wire values once; parsing
//! at the validation boundary rejects anything else.

use thiserror::Error;

/// Raised when a string is not a member of an enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} value: {value}")]
pub struct UnknownVariantError {
    kind: &'static str,
    value: String,
}

impl UnknownVariantError {
    pub(crate) fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    /// Rejected input.
    pub fn value(&self) -> &str {
        self.value.as_str()
    }
}

macro_rules! wire_enum {
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $wire:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
        }

        impl $name {
            /// Every legal value in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Wire representation of the value.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }

            /// Comma-separated list of the legal wire values.
            pub fn allowed() -> String {
                Self::ALL
                    .iter()
                    .map(|value| value.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            }

            /// Parse a wire value, naming `field` when it is not a member.
            pub fn parse_field(
                value: &str,
                field: &'static str,
            ) -> Result<Self, $crate::domain::FieldError> {
                value
                    .parse()
                    .map_err(|_| $crate::domain::FieldError::NotInSet {
                        field,
                        allowed: Self::allowed(),
                        value: value.to_owned(),
                    })
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::domain::UnknownVariantError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok(Self::$variant),)+
                    other => Err($crate::domain::UnknownVariantError::new(
                        stringify!($name),
                        other,
                    )),
                }
            }
        }
    };
}

pub(crate) use wire_enum;
