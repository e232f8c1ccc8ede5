//! The closed set of persisted value kinds.

use std::fmt;

/// Type tag written alongside every value slot.
///
/// The wire names are fixed: they are exactly what lands in the
/// `<namespace>:<key>:type` slot, so changing them would orphan previously
/// persisted data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TypeTag {
    /// Absence of a value. Decodes to absent regardless of the stored
    /// string.
    Absent,
    /// 64-bit floating point.
    Number,
    /// UTF-8 text.
    Text,
    /// JSON-structured data.
    Structured,
}

impl TypeTag {
    /// The string written to the type slot.
    pub fn as_str(self) -> &'static str {
        match self {
            TypeTag::Absent => "undefined",
            TypeTag::Number => "number",
            TypeTag::Text => "string",
            TypeTag::Structured => "object",
        }
    }

    /// Parse a type slot back into a tag.
    ///
    /// Unknown strings yield `None`; the store treats those the same as a
    /// missing tag and falls back to the raw string.
    pub fn parse(s: &str) -> Option<TypeTag> {
        match s {
            "undefined" => Some(TypeTag::Absent),
            "number" => Some(TypeTag::Number),
            "string" => Some(TypeTag::Text),
            "object" => Some(TypeTag::Structured),
            _ => None,
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_round_trip() {
        for tag in [
            TypeTag::Absent,
            TypeTag::Number,
            TypeTag::Text,
            TypeTag::Structured,
        ] {
            assert_eq!(TypeTag::parse(tag.as_str()), Some(tag));
        }
    }

    #[test]
    fn unknown_names_parse_to_none() {
        assert_eq!(TypeTag::parse("boolean"), None);
        assert_eq!(TypeTag::parse(""), None);
    }
}
