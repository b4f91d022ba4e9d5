// Domain value objects

/// Declares a closed categorical tag: a fieldless enum with its canonical
/// SCREAMING_SNAKE tag text, a strict parser and serde support.
/// Variant order is the declaration order and drives `Ord`.
macro_rules! categorical_tag {
    (
        $(#[$meta:meta])*
        $name:ident ($kind:literal) {
            $($variant:ident => $tag:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            serde::Serialize,
            serde::Deserialize,
        )]
        #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $tag),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::error::DomainError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                let normalized = $crate::value_objects::normalize_tag(value);
                Self::ALL
                    .iter()
                    .copied()
                    .find(|candidate| candidate.as_str() == normalized)
                    .ok_or_else(|| $crate::error::DomainError::UnknownTag {
                        kind: $kind,
                        value: value.trim().to_string(),
                    })
            }
        }

        impl TryFrom<&str> for $name {
            type Error = $crate::error::DomainError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                value.parse()
            }
        }
    };
}

pub mod decision;
pub mod identifiers;
pub mod status;
pub mod taxonomy;
pub mod threat_level;

pub use decision::*;
pub use identifiers::*;
pub use status::*;
pub use taxonomy::*;
pub use threat_level::*;

/// Accepts `single-use plastic`, `Single_Use_Plastic` and friends.
pub(crate) fn normalize_tag(value: &str) -> String {
    value
        .trim()
        .chars()
        .map(|c| match c {
            '-' | ' ' => '_',
            other => other.to_ascii_uppercase(),
        })
        .collect()
}
