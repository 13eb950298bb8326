// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Schema-level type model: definitions, fields and named type references.
//!
//! A [`TypeRef`] never embeds another definition; it carries a name plus
//! list/non-null wrappers. Cyclic entity graphs are therefore finite values
//! and are resolved against the registry only at composition time.

use std::fmt;

use serde::Serialize;

/// Built-in scalar names.
pub mod scalar {
    /// Opaque identifier scalar.
    pub const ID: &str = "ID";
    /// UTF-8 string scalar.
    pub const STRING: &str = "String";
    /// Signed 32-bit integer scalar.
    pub const INT: &str = "Int";
    /// Double-precision float scalar.
    pub const FLOAT: &str = "Float";
    /// Boolean scalar.
    pub const BOOLEAN: &str = "Boolean";

    /// All built-in scalars, in the order they are pre-registered.
    pub const BUILTIN: [&str; 5] = [ID, STRING, INT, FLOAT, BOOLEAN];

    /// Returns `true` for the five built-in scalar names.
    pub fn is_builtin(name: &str) -> bool {
        BUILTIN.contains(&name)
    }
}

/// Returns `true` if `name` matches `[_A-Za-z][_0-9A-Za-z]*`.
pub fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first == '_' || first.is_ascii_alphabetic())
        && chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}

/// Explicit nullability of a list wrapper.
///
/// A non-null list, a list of non-null items and a non-null list of non-null
/// items are three different contracts. List references are only built
/// through [`TypeRef::list_of`], which requires one of these to be chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListNullability {
    /// `[T]`
    Nullable,
    /// `[T]!`
    NonNullList,
    /// `[T!]`
    NonNullItems,
    /// `[T!]!`
    NonNullListAndItems,
}

impl ListNullability {
    fn list_non_null(self) -> bool {
        matches!(self, Self::NonNullList | Self::NonNullListAndItems)
    }

    fn items_non_null(self) -> bool {
        matches!(self, Self::NonNullItems | Self::NonNullListAndItems)
    }
}

/// Reference to a type by name, optionally wrapped in list/non-null modifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRef {
    /// Direct reference to a named definition.
    Named(String),
    /// List of the inner reference.
    List(Box<TypeRef>),
    /// Non-null wrapper around the inner reference.
    NonNull(Box<TypeRef>),
}

impl TypeRef {
    /// Nullable reference to `name`.
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Non-null reference to `name`.
    pub fn required(name: impl Into<String>) -> Self {
        Self::named(name).non_null()
    }

    /// Wraps `self` in non-null. Already non-null references are returned unchanged.
    pub fn non_null(self) -> Self {
        match self {
            Self::NonNull(_) => self,
            other => Self::NonNull(Box::new(other)),
        }
    }

    /// Strips an outer non-null wrapper, if any.
    pub fn nullable(self) -> Self {
        match self {
            Self::NonNull(inner) => *inner,
            other => other,
        }
    }

    /// List of `item` with the given nullability.
    ///
    /// Any non-null wrapper already on `item` is replaced by the item
    /// nullability stated in `nullability`.
    pub fn list_of(item: TypeRef, nullability: ListNullability) -> Self {
        let item = item.nullable();
        let item = if nullability.items_non_null() {
            item.non_null()
        } else {
            item
        };
        let list = Self::List(Box::new(item));
        if nullability.list_non_null() {
            list.non_null()
        } else {
            list
        }
    }

    /// Innermost named type.
    pub fn named_type(&self) -> &str {
        match self {
            Self::Named(name) => name,
            Self::List(inner) | Self::NonNull(inner) => inner.named_type(),
        }
    }

    /// Returns `true` if the outermost wrapper is non-null.
    pub fn is_non_null(&self) -> bool {
        matches!(self, Self::NonNull(_))
    }

    /// Returns `false` if a non-null wrapper directly wraps another non-null.
    pub fn is_well_formed(&self) -> bool {
        match self {
            Self::Named(_) => true,
            Self::List(inner) => inner.is_well_formed(),
            Self::NonNull(inner) => !inner.is_non_null() && inner.is_well_formed(),
        }
    }

    /// Returns `true` if a value of type `self` is always a valid value of `other`.
    ///
    /// Used for interface implementation checks: `ID!` satisfies `ID`, `[T!]`
    /// satisfies `[T]`, but not the reverse.
    pub fn is_subtype_of(&self, other: &TypeRef) -> bool {
        match (self, other) {
            (Self::NonNull(a), Self::NonNull(b)) => a.is_subtype_of(b),
            (Self::NonNull(a), b) => a.is_subtype_of(b),
            (_, Self::NonNull(_)) => false,
            (Self::List(a), Self::List(b)) => a.is_subtype_of(b),
            (Self::Named(a), Self::Named(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => f.write_str(name),
            Self::List(inner) => write!(f, "[{inner}]"),
            Self::NonNull(inner) => write!(f, "{inner}!"),
        }
    }
}

/// Argument or input-object field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputValue {
    /// Argument/field name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Declared type.
    pub ty: TypeRef,
    /// Default value as a schema-language literal (e.g. `false`, `"x"`).
    pub default_value: Option<String>,
}

impl InputValue {
    /// New input value without description or default.
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            description: None,
            ty,
            default_value: None,
        }
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the default value literal.
    pub fn default_value(mut self, literal: impl Into<String>) -> Self {
        self.default_value = Some(literal.into());
        self
    }
}

/// Output field of an object or interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Field name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Result type.
    pub ty: TypeRef,
    /// Arguments in declaration order.
    pub args: Vec<InputValue>,
    /// Deprecation reason; `Some` marks the field deprecated.
    pub deprecation: Option<String>,
}

impl Field {
    /// New field without arguments.
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            description: None,
            ty,
            args: Vec::new(),
            deprecation: None,
        }
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Appends one argument.
    pub fn arg(mut self, arg: InputValue) -> Self {
        self.args.push(arg);
        self
    }

    /// Appends several arguments, preserving order.
    pub fn args(mut self, args: impl IntoIterator<Item = InputValue>) -> Self {
        self.args.extend(args);
        self
    }

    /// Marks the field deprecated.
    pub fn deprecated(mut self, reason: impl Into<String>) -> Self {
        self.deprecation = Some(reason.into());
        self
    }
}

/// Stable discriminant carried by an enum value.
///
/// Consumers may persist discriminants, so they must be unique within an
/// enum and never renumbered.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(untagged)]
pub enum Discriminant {
    /// Integer discriminant.
    Int(i64),
    /// String discriminant.
    Str(String),
}

impl fmt::Display for Discriminant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Str(s) => write!(f, "{s:?}"),
        }
    }
}

impl From<i64> for Discriminant {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for Discriminant {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

/// One member of an enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumValue {
    /// Member name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Stable discriminant.
    pub discriminant: Discriminant,
    /// Deprecation reason; `Some` marks the value deprecated.
    pub deprecation: Option<String>,
}

impl EnumValue {
    /// New enum member.
    pub fn new(name: impl Into<String>, discriminant: impl Into<Discriminant>) -> Self {
        Self {
            name: name.into(),
            description: None,
            discriminant: discriminant.into(),
            deprecation: None,
        }
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Marks the value deprecated.
    pub fn deprecated(mut self, reason: impl Into<String>) -> Self {
        self.deprecation = Some(reason.into());
        self
    }
}

/// Kind-specific payload of a [`TypeDefinition`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeKind {
    /// Leaf scalar.
    Scalar,
    /// Enumerated leaf type.
    Enum {
        /// Members in declaration order.
        values: Vec<EnumValue>,
    },
    /// Concrete output object.
    Object {
        /// Fields in declaration order.
        fields: Vec<Field>,
        /// Names of implemented interfaces.
        interfaces: Vec<String>,
    },
    /// Abstract output type.
    Interface {
        /// Fields every implementer must expose.
        fields: Vec<Field>,
    },
    /// Input object (argument payloads).
    InputObject {
        /// Fields in declaration order.
        fields: Vec<InputValue>,
    },
}

/// Fieldless tag for [`TypeKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DefinitionKind {
    /// See [`TypeKind::Scalar`].
    Scalar,
    /// See [`TypeKind::Enum`].
    Enum,
    /// See [`TypeKind::Object`].
    Object,
    /// See [`TypeKind::Interface`].
    Interface,
    /// See [`TypeKind::InputObject`].
    InputObject,
}

impl DefinitionKind {
    /// Introspection `__TypeKind` spelling.
    pub fn as_introspection_str(self) -> &'static str {
        match self {
            Self::Scalar => "SCALAR",
            Self::Enum => "ENUM",
            Self::Object => "OBJECT",
            Self::Interface => "INTERFACE",
            Self::InputObject => "INPUT_OBJECT",
        }
    }

    /// Legal as an argument or input field type.
    pub fn is_input(self) -> bool {
        matches!(self, Self::Scalar | Self::Enum | Self::InputObject)
    }

    /// Legal as an output field type.
    pub fn is_output(self) -> bool {
        !matches!(self, Self::InputObject)
    }
}

impl fmt::Display for DefinitionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Scalar => "scalar",
            Self::Enum => "enum",
            Self::Object => "object",
            Self::Interface => "interface",
            Self::InputObject => "input object",
        };
        f.write_str(s)
    }
}

/// A named definition in the type graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDefinition {
    /// Globally unique name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Kind-specific payload.
    pub kind: TypeKind,
}

impl TypeDefinition {
    /// Scalar definition.
    pub fn scalar(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            kind: TypeKind::Scalar,
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Kind tag.
    pub fn kind(&self) -> DefinitionKind {
        match self.kind {
            TypeKind::Scalar => DefinitionKind::Scalar,
            TypeKind::Enum { .. } => DefinitionKind::Enum,
            TypeKind::Object { .. } => DefinitionKind::Object,
            TypeKind::Interface { .. } => DefinitionKind::Interface,
            TypeKind::InputObject { .. } => DefinitionKind::InputObject,
        }
    }

    /// Output fields (empty unless object or interface).
    pub fn fields(&self) -> &[Field] {
        match &self.kind {
            TypeKind::Object { fields, .. } | TypeKind::Interface { fields } => fields,
            _ => &[],
        }
    }

    /// Output field by name.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields().iter().find(|f| f.name == name)
    }

    /// Implemented interfaces (empty unless object).
    pub fn interfaces(&self) -> &[String] {
        match &self.kind {
            TypeKind::Object { interfaces, .. } => interfaces,
            _ => &[],
        }
    }

    /// Returns `true` if this is an object implementing `interface`.
    pub fn implements(&self, interface: &str) -> bool {
        self.interfaces().iter().any(|i| i == interface)
    }

    /// Input fields (empty unless input object).
    pub fn input_fields(&self) -> &[InputValue] {
        match &self.kind {
            TypeKind::InputObject { fields } => fields,
            _ => &[],
        }
    }

    /// Enum members (empty unless enum).
    pub fn enum_values(&self) -> &[EnumValue] {
        match &self.kind {
            TypeKind::Enum { values } => values,
            _ => &[],
        }
    }

    /// Every type reference held by this definition, paired with the name of
    /// the field (or `field.arg`) it appears on and whether it is an input position.
    pub(crate) fn references(&self) -> Vec<(String, &TypeRef, bool)> {
        let mut out = Vec::new();
        match &self.kind {
            TypeKind::Object { fields, .. } | TypeKind::Interface { fields } => {
                for field in fields {
                    out.push((field.name.clone(), &field.ty, false));
                    for arg in &field.args {
                        out.push((format!("{}.{}", field.name, arg.name), &arg.ty, true));
                    }
                }
            }
            TypeKind::InputObject { fields } => {
                for field in fields {
                    out.push((field.name.clone(), &field.ty, true));
                }
            }
            TypeKind::Scalar | TypeKind::Enum { .. } => {}
        }
        out
    }
}

/// Builder for object definitions.
#[derive(Debug, Clone)]
pub struct ObjectBuilder {
    name: String,
    description: Option<String>,
    fields: Vec<Field>,
    interfaces: Vec<String>,
}

impl ObjectBuilder {
    /// Starts an object named `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            fields: Vec::new(),
            interfaces: Vec::new(),
        }
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Appends a field.
    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Declares an implemented interface by name.
    pub fn implements(mut self, interface: impl Into<String>) -> Self {
        self.interfaces.push(interface.into());
        self
    }

    /// Finishes the definition.
    pub fn build(self) -> TypeDefinition {
        TypeDefinition {
            name: self.name,
            description: self.description,
            kind: TypeKind::Object {
                fields: self.fields,
                interfaces: self.interfaces,
            },
        }
    }
}

/// Builder for interface definitions.
#[derive(Debug, Clone)]
pub struct InterfaceBuilder {
    name: String,
    description: Option<String>,
    fields: Vec<Field>,
}

impl InterfaceBuilder {
    /// Starts an interface named `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            fields: Vec::new(),
        }
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Appends a field.
    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Finishes the definition.
    pub fn build(self) -> TypeDefinition {
        TypeDefinition {
            name: self.name,
            description: self.description,
            kind: TypeKind::Interface {
                fields: self.fields,
            },
        }
    }
}

/// Builder for enum definitions.
#[derive(Debug, Clone)]
pub struct EnumBuilder {
    name: String,
    description: Option<String>,
    values: Vec<EnumValue>,
}

impl EnumBuilder {
    /// Starts an enum named `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            values: Vec::new(),
        }
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Appends a member without description.
    pub fn value(self, name: impl Into<String>, discriminant: impl Into<Discriminant>) -> Self {
        self.member(EnumValue::new(name, discriminant))
    }

    /// Appends a fully specified member.
    pub fn member(mut self, value: EnumValue) -> Self {
        self.values.push(value);
        self
    }

    /// Finishes the definition.
    pub fn build(self) -> TypeDefinition {
        TypeDefinition {
            name: self.name,
            description: self.description,
            kind: TypeKind::Enum {
                values: self.values,
            },
        }
    }
}

/// Builder for input object definitions.
#[derive(Debug, Clone)]
pub struct InputObjectBuilder {
    name: String,
    description: Option<String>,
    fields: Vec<InputValue>,
}

impl InputObjectBuilder {
    /// Starts an input object named `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            fields: Vec::new(),
        }
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Appends a field.
    pub fn field(mut self, field: InputValue) -> Self {
        self.fields.push(field);
        self
    }

    /// Finishes the definition.
    pub fn build(self) -> TypeDefinition {
        TypeDefinition {
            name: self.name,
            description: self.description,
            kind: TypeKind::InputObject {
                fields: self.fields,
            },
        }
    }
}
