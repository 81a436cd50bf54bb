//! Wire shape of the schema document.
//!
//! These structures mirror the JSON document one-to-one. They carry no ordering
//! guarantees of their own: the top-level mappings are plain hash maps, and it
//! is [`crate::ApiModel`] that turns them into a sorted, validated model.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};

/// Prefix that marks a field description as optional.
pub const OPTIONAL_MARKER: &str = "Optional.";

/// Prefix that turns a type token into a sequence of the remaining token.
pub const ARRAY_PREFIX: &str = "Array of ";

/// Prefix shared by file-upload placeholder types (`InputFile`, ...).
pub const UPLOAD_PREFIX: &str = "Input";

/// The schema document as parsed from disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiDocument {
    /// Record types keyed by their schema name.
    #[serde(default)]
    pub types: HashMap<String, TypeDescription>,
    /// Methods keyed by their schema name.
    #[serde(default)]
    pub methods: HashMap<String, MethodDescription>,
}

/// A named record type.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TypeDescription {
    /// Documentation lines, emitted verbatim.
    #[serde(default)]
    pub description: Vec<String>,
    /// Fields in declaration order.
    #[serde(default)]
    pub fields: Vec<TypeField>,
}

/// One field of a record type.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TypeField {
    /// Schema identifier of the field (lower snake case).
    pub field: String,
    /// Alternative type tokens; only the first one is used.
    #[serde(default)]
    pub types: Vec<String>,
    /// Free-form description, possibly starting with [`OPTIONAL_MARKER`].
    #[serde(default)]
    pub description: String,
}

impl TypeField {
    /// The type token used for generation.
    ///
    /// Loading through [`crate::ApiModel`] guarantees at least one alternative.
    pub fn primary_type(&self) -> &str { self.types.first().map(String::as_str).unwrap_or("") }

    /// Whether the description carries the literal optional marker.
    pub fn is_marked_optional(&self) -> bool { self.description.starts_with(OPTIONAL_MARKER) }
}

/// A named method.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MethodDescription {
    /// Parameters in declaration order.
    #[serde(default)]
    pub fields: Vec<MethodField>,
    /// Alternative return type tokens; only the first one is used.
    #[serde(default)]
    pub returns: Vec<String>,
    /// Documentation lines, emitted verbatim.
    #[serde(default)]
    pub description: Vec<String>,
}

impl MethodDescription {
    /// The return type token used for generation.
    pub fn primary_return(&self) -> &str {
        self.returns.first().map(String::as_str).unwrap_or("")
    }
}

/// One parameter of a method.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MethodField {
    /// Schema identifier of the parameter (lower snake case).
    pub parameter: String,
    /// Alternative type tokens; only the first one is used.
    #[serde(default)]
    pub types: Vec<String>,
    /// Whether the parameter must be supplied positionally.
    #[serde(default, deserialize_with = "deserialize_required")]
    pub required: bool,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
}

impl MethodField {
    /// The type token used for generation.
    pub fn primary_type(&self) -> &str { self.types.first().map(String::as_str).unwrap_or("") }

    /// Whether the parameter is a file-upload placeholder.
    pub fn is_upload(&self) -> bool { self.primary_type().starts_with(UPLOAD_PREFIX) }

    /// Whether the parameter is declared as an array.
    pub fn is_array(&self) -> bool { self.primary_type().starts_with(ARRAY_PREFIX) }
}

/// Published schemas spell the flag as `"Yes"` / `"Optional"`; hand-written
/// ones tend to use booleans. Both are accepted.
#[derive(Deserialize)]
#[serde(untagged)]
enum RequiredFlag {
    Flag(bool),
    Word(String),
}

fn deserialize_required<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RequiredFlag::deserialize(deserializer)? {
        RequiredFlag::Flag(flag) => flag,
        RequiredFlag::Word(word) => word == "Yes",
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_flag_accepts_words_and_booleans() {
        let json = r#"[
            {"parameter": "a", "types": ["Integer"], "required": "Yes"},
            {"parameter": "b", "types": ["Integer"], "required": "Optional"},
            {"parameter": "c", "types": ["Integer"], "required": true},
            {"parameter": "d", "types": ["Integer"], "required": false},
            {"parameter": "e", "types": ["Integer"]}
        ]"#;
        let fields: Vec<MethodField> = serde_json::from_str(json).expect("valid parameters");
        let flags: Vec<bool> = fields.iter().map(|f| f.required).collect();
        assert_eq!(flags, vec![true, false, true, false, false]);
    }

    #[test]
    fn test_optional_marker_is_a_literal_prefix() {
        let field = |description: &str| TypeField {
            field: "reply_to_message".into(),
            types: vec!["Message".into()],
            description: description.into(),
        };
        assert!(field("Optional. The original message.").is_marked_optional());
        assert!(!field("optional. lower case").is_marked_optional());
        assert!(!field(" Optional. leading space").is_marked_optional());
    }

    #[test]
    fn test_upload_and_array_detection_uses_first_alternative() {
        let param = MethodField {
            parameter: "photo".into(),
            types: vec!["InputFile".into(), "String".into()],
            required: true,
            description: String::new(),
        };
        assert!(param.is_upload());
        assert!(!param.is_array());

        let media = MethodField {
            parameter: "media".into(),
            types: vec!["Array of InputMediaPhoto".into()],
            required: true,
            description: String::new(),
        };
        assert!(!media.is_upload());
        assert!(media.is_array());
    }
}
