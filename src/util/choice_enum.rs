/// Declares a closed, `Copy` enum whose variants map to a lowercase wire name
/// used by the CLI, environment variables and serialized reports.
///
/// Each variant lists its wire name first, then any accepted aliases.
#[macro_export]
macro_rules! define_choice_enum {
    (
        $(#[$enum_meta:meta])*
        $enum_name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $wire_name:literal
                $( | $alias:literal )*
            ),* $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $enum_name {
            $(
                $(#[$variant_meta])*
                $variant,
            )*
        }

        impl serde::Serialize for $enum_name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(self.name())
            }
        }

        impl<'de> serde::Deserialize<'de> for $enum_name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                Self::from_name(&s).ok_or_else(|| {
                    serde::de::Error::unknown_variant(&s, &[$($wire_name),*])
                })
            }
        }

        impl $enum_name {
            pub const fn name(&self) -> &'static str {
                match self {
                    $(
                        Self::$variant => $wire_name,
                    )*
                }
            }

            /// Case-insensitive lookup by wire name or alias.
            pub fn from_name(name: &str) -> Option<Self> {
                match name.trim().to_ascii_lowercase().as_str() {
                    $(
                        $wire_name $(| $alias)* => Some(Self::$variant),
                    )*
                    _ => None,
                }
            }

            pub fn all_variants() -> &'static [Self] {
                &[
                    $(
                        Self::$variant,
                    )*
                ]
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}
