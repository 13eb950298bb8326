// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Object identification: the `Node` interface and opaque global ids.
//!
//! A global id is `"<TypeName>:<localId>"` encoded with the URL-safe base64
//! alphabet without padding. Type names cannot contain `:`, so splitting at
//! the first separator is unambiguous and local ids may contain anything.
//! Decoding is strict: padded, non-canonical or otherwise malformed tokens
//! are rejected instead of producing a partial result.

use std::collections::BTreeSet;
use std::fmt;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use thiserror::Error;

use crate::types::{is_valid_name, scalar, Field, InterfaceBuilder, TypeDefinition, TypeRef};

/// Name of the identity interface.
pub const NODE_INTERFACE: &str = "Node";
/// Name of the identifier field every implementer exposes.
pub const ID_FIELD: &str = "id";
/// Name of the generated root lookup field.
pub const NODE_FIELD: &str = "node";

const SEPARATOR: char = ':';

/// Errors from global id decoding and resolution.
///
/// These are the only failures reachable outside the build, so they are kept
/// apart from [`SchemaError`](crate::SchemaError).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GlobalIdError {
    /// The token is not a well-formed global id.
    #[error("malformed global id {token:?}: {reason}")]
    MalformedGlobalId {
        /// Offending token.
        token: String,
        /// What failed.
        reason: &'static str,
    },
    /// The decoded type name is not an identity implementer.
    #[error("unknown identity type: {0}")]
    UnknownIdentityType(String),
}

/// Decoded global identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GlobalId {
    type_name: String,
    local_id: String,
}

impl GlobalId {
    /// Pairs a type name with a local id.
    pub fn new(type_name: impl Into<String>, local_id: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            local_id: local_id.into(),
        }
    }

    /// Concrete type name.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Identifier local to the type.
    pub fn local_id(&self) -> &str {
        &self.local_id
    }

    /// Splits into `(type_name, local_id)`.
    pub fn into_parts(self) -> (String, String) {
        (self.type_name, self.local_id)
    }

    /// Opaque token for this id.
    pub fn encode(&self) -> String {
        URL_SAFE_NO_PAD.encode(format!("{}{SEPARATOR}{}", self.type_name, self.local_id))
    }

    /// Decodes an opaque token.
    ///
    /// # Errors
    /// [`GlobalIdError::MalformedGlobalId`] if the token is not canonical
    /// URL-safe base64, is not UTF-8, lacks the separator, names an illegal
    /// type or has an empty local id.
    pub fn decode(token: &str) -> Result<Self, GlobalIdError> {
        let malformed = |reason| GlobalIdError::MalformedGlobalId {
            token: token.to_owned(),
            reason,
        };
        let bytes = URL_SAFE_NO_PAD
            .decode(token)
            .map_err(|_| malformed("not url-safe base64"))?;
        let text = String::from_utf8(bytes).map_err(|_| malformed("not utf-8"))?;
        let (type_name, local_id) = text
            .split_once(SEPARATOR)
            .ok_or_else(|| malformed("missing separator"))?;
        if !is_valid_name(type_name) {
            return Err(malformed("invalid type name"));
        }
        if local_id.is_empty() {
            return Err(malformed("empty local id"));
        }
        Ok(Self::new(type_name, local_id))
    }
}

impl fmt::Display for GlobalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

/// Encodes `(type_name, local_id)` into an opaque token.
pub fn build_global_id(type_name: &str, local_id: &str) -> String {
    GlobalId::new(type_name, local_id).encode()
}

/// Decodes a token into `(type_name, local_id)` without checking registration.
///
/// # Errors
/// See [`GlobalId::decode`].
pub fn resolve_global_id(token: &str) -> Result<(String, String), GlobalIdError> {
    GlobalId::decode(token).map(GlobalId::into_parts)
}

/// The `Node` interface definition.
pub fn node_interface() -> TypeDefinition {
    InterfaceBuilder::new(NODE_INTERFACE)
        .description("An object with an ID")
        .field(
            Field::new(ID_FIELD, TypeRef::required(scalar::ID))
                .description("The id of the object."),
        )
        .build()
}

/// The non-null `id` field an implementer exposes.
pub fn id_field() -> Field {
    Field::new(ID_FIELD, TypeRef::required(scalar::ID))
}

/// Returns `true` if `def` claims `Node` and exposes a non-null `ID` id field.
pub fn implements_identity(def: &TypeDefinition) -> bool {
    def.implements(NODE_INTERFACE)
        && def
            .field(ID_FIELD)
            .is_some_and(|f| f.ty.is_subtype_of(&TypeRef::required(scalar::ID)))
}

/// A domain entity that opts into global identification.
///
/// Implementors supply their definition (which must declare `Node`) and get
/// global id construction for free.
pub trait Identifiable {
    /// Schema type name.
    const TYPE_NAME: &'static str;

    /// Full object definition, including the `id` field and `Node` claim.
    fn definition() -> TypeDefinition;

    /// Opaque global id for a local id of this type.
    fn global_id(local_id: &str) -> String {
        build_global_id(Self::TYPE_NAME, local_id)
    }
}

/// Reverse lookup table from type name to identity implementer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentityTable {
    types: BTreeSet<String>,
}

impl IdentityTable {
    pub(crate) fn insert(&mut self, type_name: &str) {
        self.types.insert(type_name.to_owned());
    }

    /// Returns `true` if `type_name` implements the identity interface.
    pub fn contains(&self, type_name: &str) -> bool {
        self.types.contains(type_name)
    }

    /// Implementer names in byte-wise order.
    pub fn implementers(&self) -> impl Iterator<Item = &str> {
        self.types.iter().map(String::as_str)
    }

    /// Number of implementers.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns `true` if no type implements the identity interface.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Builds a token for a registered implementer.
    ///
    /// # Errors
    /// [`GlobalIdError::UnknownIdentityType`] if `type_name` is not registered.
    pub fn build_global_id(&self, type_name: &str, local_id: &str) -> Result<String, GlobalIdError> {
        if !self.contains(type_name) {
            return Err(GlobalIdError::UnknownIdentityType(type_name.to_owned()));
        }
        Ok(build_global_id(type_name, local_id))
    }

    /// Decodes a token and checks the type against the table.
    ///
    /// # Errors
    /// [`GlobalIdError::MalformedGlobalId`] for undecodable tokens and
    /// [`GlobalIdError::UnknownIdentityType`] for unregistered type names.
    pub fn resolve_global_id(&self, token: &str) -> Result<GlobalId, GlobalIdError> {
        let id = GlobalId::decode(token)?;
        if !self.contains(id.type_name()) {
            return Err(GlobalIdError::UnknownIdentityType(id.type_name.clone()));
        }
        Ok(id)
    }
}
