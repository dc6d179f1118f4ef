//! String enums as used by AWS API models.
//!
//! Every generated enum carries an `Unknown(String)` variant. Parsing never
//! fails: values outside the known set are kept verbatim so that responses
//! from newer service versions still decode. Inputs holding an `Unknown`
//! value are rejected by [`check_enum`](crate::input::check_enum) before a
//! request is built.

/// Common behaviour of model enums, implemented by [`aws_enum!`](crate::aws_enum).
pub trait AwsEnum {
    /// Shape name of the enum.
    const NAME: &'static str;

    /// Wire value of this variant.
    fn as_str(&self) -> &str;

    /// All values known to this model.
    fn values() -> &'static [&'static str];

    /// Returns `false` for values outside the known set.
    fn is_known(&self) -> bool;
}

/// Declare a model enum.
///
/// ```
/// ruststack_sdk_core::aws_enum! {
///     /// Kinesis stream capacity mode.
///     pub enum StreamMode {
///         /// Provisioned shards.
///         Provisioned = "PROVISIONED",
///         /// On-demand capacity.
///         OnDemand = "ON_DEMAND",
///     }
/// }
///
/// use ruststack_sdk_core::AwsEnum;
///
/// assert_eq!(StreamMode::OnDemand.as_str(), "ON_DEMAND");
/// assert_eq!(StreamMode::from("PROVISIONED"), StreamMode::Provisioned);
/// assert!(!StreamMode::from("BURST").is_known());
/// ```
#[macro_export]
macro_rules! aws_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $value:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// A value outside the set known to this model.
            Unknown(::std::string::String),
        }

        impl $name {
            /// All values known to this model.
            pub const VALUES: &'static [&'static str] = &[$($value),+];

            /// Returns the wire value of this variant.
            #[must_use]
            pub fn as_str(&self) -> &str {
                match self {
                    $( Self::$variant => $value, )+
                    Self::Unknown(value) => value.as_str(),
                }
            }
        }

        impl $crate::enums::AwsEnum for $name {
            const NAME: &'static str = stringify!($name);

            fn as_str(&self) -> &str {
                $name::as_str(self)
            }

            fn values() -> &'static [&'static str] {
                Self::VALUES
            }

            fn is_known(&self) -> bool {
                !matches!(self, Self::Unknown(_))
            }
        }

        impl ::std::convert::From<&str> for $name {
            fn from(value: &str) -> Self {
                match value {
                    $( $value => Self::$variant, )+
                    other => Self::Unknown(other.to_owned()),
                }
            }
        }

        impl ::std::convert::From<::std::string::String> for $name {
            fn from(value: ::std::string::String) -> Self {
                Self::from(value.as_str())
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                let value: ::std::string::String =
                    $crate::__private::serde::Deserialize::deserialize(deserializer)?;
                Ok(Self::from(value))
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::AwsEnum;

    crate::aws_enum! {
        /// Test enum.
        pub enum Color {
            /// Red.
            Red = "RED",
            /// Light blue.
            LightBlue = "light-blue",
        }
    }

    #[test]
    fn test_should_round_trip_known_values() {
        for value in Color::VALUES {
            assert_eq!(Color::from(*value).as_str(), *value);
        }
        assert_eq!(Color::from("light-blue"), Color::LightBlue);
        assert!(Color::Red.is_known());
    }

    #[test]
    fn test_should_keep_unknown_values() {
        let color = Color::from("PURPLE");
        assert_eq!(color, Color::Unknown("PURPLE".to_owned()));
        assert_eq!(color.as_str(), "PURPLE");
        assert!(!color.is_known());
    }

    #[test]
    fn test_should_serialize_as_string() {
        let json = serde_json::to_string(&Color::LightBlue).unwrap();
        assert_eq!(json, "\"light-blue\"");

        let parsed: Color = serde_json::from_str("\"RED\"").unwrap();
        assert_eq!(parsed, Color::Red);

        let unknown: Color = serde_json::from_str("\"GREEN\"").unwrap();
        assert_eq!(unknown.to_string(), "GREEN");
    }

    #[test]
    fn test_should_expose_trait_metadata() {
        assert_eq!(<Color as AwsEnum>::NAME, "Color");
        assert_eq!(<Color as AwsEnum>::values(), &["RED", "light-blue"]);
    }
}
