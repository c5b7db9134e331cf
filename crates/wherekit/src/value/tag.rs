///
/// ValueTag
///
/// Stable canonical value-variant tag used by fingerprint and diagnostic
/// surfaces.
///
/// IMPORTANT:
/// Tag values feed filter fingerprints and must remain fixed once released.
///

#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ValueTag {
    Bool = 1,
    Float64 = 2,
    Int = 3,
    List = 4,
    Null = 5,
    Text = 6,
    Uint = 7,
}

impl ValueTag {
    /// Stable hash byte tag for this variant.
    #[must_use]
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    /// Stable human-readable value kind label for diagnostics.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Bool => "Bool",
            Self::Float64 => "Float64",
            Self::Int => "Int",
            Self::List => "List",
            Self::Null => "Null",
            Self::Text => "Text",
            Self::Uint => "Uint",
        }
    }
}
