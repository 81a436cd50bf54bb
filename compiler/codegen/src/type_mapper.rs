//! Schema type tokens → Rust type expressions.
//!
//! A token is either a primitive (`Integer`, `Float`, `Boolean`, `String`), an
//! `Array of <token>` (recursively), or the name of another schema type. The
//! mapper also owns the two places where a type becomes nullable:
//!
//! - a *type field* whose rendered type string exactly equals a declared type
//!   name and whose description starts with `Optional.`;
//! - a *method return* whose rendered type string names a declared type.
//!
//! The field rule compares the prefix-included string, so `Array of Message`
//! (rendered `Vec<Message>`) never matches a declared name and an optional
//! array-of-reference field stays a plain `Vec`. Method parameters are never
//! wrapped.

use std::fmt;

use ir::{ApiModel, MethodDescription, MethodField, TypeField, ARRAY_PREFIX};

/// Schema primitives and their Rust counterparts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    /// `Integer` → `i64`
    Integer,
    /// `Float` → `f64`
    Float,
    /// `Boolean` → `bool`
    Boolean,
    /// `String` → `String`
    String,
}

impl Primitive {
    /// Parse a bare schema token.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "Integer" => Some(Primitive::Integer),
            "Float" => Some(Primitive::Float),
            "Boolean" => Some(Primitive::Boolean),
            "String" => Some(Primitive::String),
            _ => None,
        }
    }

    /// Rust spelling of the primitive.
    pub fn rust_name(self) -> &'static str {
        match self {
            Primitive::Integer => "i64",
            Primitive::Float => "f64",
            Primitive::Boolean => "bool",
            Primitive::String => "String",
        }
    }

    /// Zero value used on failure paths.
    pub fn zero_value(self) -> &'static str {
        match self {
            Primitive::Integer => "0",
            Primitive::Float => "0.0",
            Primitive::Boolean => "false",
            Primitive::String => "String::new()",
        }
    }
}

/// A mapped Rust type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RustType {
    /// A primitive scalar.
    Primitive(Primitive),
    /// A reference to another schema type, named verbatim.
    Reference(String),
    /// `Vec<T>`
    Sequence(Box<RustType>),
    /// `Option<Box<T>>`
    Nullable(Box<RustType>),
}

impl RustType {
    /// Wrap `self` in nullable indirection.
    pub fn nullable(self) -> Self { RustType::Nullable(Box::new(self)) }

    /// Whether this is a bare primitive.
    pub fn is_primitive(&self) -> bool { matches!(self, RustType::Primitive(_)) }

    /// Whether this is nullable.
    pub fn is_nullable(&self) -> bool { matches!(self, RustType::Nullable(_)) }

    /// Rust expression for the zero value of this type.
    ///
    /// Undeclared references have no known zero literal and fall back to
    /// `Default::default()`.
    pub fn zero_value(&self) -> String {
        match self {
            RustType::Primitive(p) => p.zero_value().to_string(),
            RustType::Nullable(_) => "None".to_string(),
            RustType::Sequence(_) => "Vec::new()".to_string(),
            RustType::Reference(_) => "Default::default()".to_string(),
        }
    }
}

impl fmt::Display for RustType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RustType::Primitive(p) => f.write_str(p.rust_name()),
            RustType::Reference(name) => f.write_str(name),
            RustType::Sequence(inner) => write!(f, "Vec<{inner}>"),
            RustType::Nullable(inner) => write!(f, "Option<Box<{inner}>>"),
        }
    }
}

/// Map a bare token without applying any nullable rule.
///
/// Every leading `Array of ` adds one `Vec` level.
pub fn map_token(token: &str) -> RustType {
    match token.strip_prefix(ARRAY_PREFIX) {
        Some(rest) => RustType::Sequence(Box::new(map_token(rest))),
        None => match Primitive::from_token(token) {
            Some(p) => RustType::Primitive(p),
            None => RustType::Reference(token.to_string()),
        },
    }
}

/// Maps schema tokens against a loaded model.
#[derive(Debug, Clone, Copy)]
pub struct TypeMapper<'a> {
    model: &'a ApiModel,
}

impl<'a> TypeMapper<'a> {
    /// Create a mapper bound to `model`'s declared types.
    pub fn new(model: &'a ApiModel) -> Self { Self { model } }

    /// Type of a record field, applying the optional-field rule.
    pub fn map_type_field(&self, field: &TypeField) -> RustType {
        let mapped = map_token(field.primary_type());
        if field.is_marked_optional() && self.model.is_declared_type(&mapped.to_string()) {
            mapped.nullable()
        } else {
            mapped
        }
    }

    /// Type of a method parameter. Parameters are never wrapped.
    pub fn map_parameter(&self, field: &MethodField) -> RustType { map_token(field.primary_type()) }

    /// Return type of a method; declared types become nullable.
    pub fn map_return(&self, method: &MethodDescription) -> RustType {
        let mapped = map_token(method.primary_return());
        if self.model.is_declared_type(&mapped.to_string()) {
            mapped.nullable()
        } else {
            mapped
        }
    }
}
