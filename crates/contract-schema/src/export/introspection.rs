// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Introspection document builder.
//!
//! Key order inside every object follows the field order of the standard
//! introspection query; the type list is sorted by name.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::composer::RootSchema;
use crate::types::{
    scalar, DefinitionKind, Discriminant, EnumValue, Field, InputValue, TypeDefinition, TypeRef,
};

use super::meta;

/// Machine-readable description of a closed schema, shaped like the
/// response to the standard introspection query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntrospectionDocument {
    data: Data,
}

impl IntrospectionDocument {
    /// Pretty-printed JSON (two-space indent) with a trailing newline.
    ///
    /// # Errors
    /// Propagates `serde_json` serialization failures.
    pub fn to_json_string(&self) -> serde_json::Result<String> {
        let mut out = serde_json::to_string_pretty(self)?;
        out.push('\n');
        Ok(out)
    }

    /// The document as a JSON value.
    ///
    /// # Errors
    /// Propagates `serde_json` serialization failures.
    pub fn to_value(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }

    /// Type names in document order.
    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.data.schema.types.iter().map(|t| t.name.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct Data {
    #[serde(rename = "__schema")]
    schema: SchemaMeta,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
struct SchemaMeta {
    query_type: NamedMeta,
    mutation_type: Option<NamedMeta>,
    subscription_type: Option<NamedMeta>,
    types: Vec<TypeMeta>,
    directives: Vec<DirectiveMeta>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct NamedMeta {
    name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
struct TypeMeta {
    kind: &'static str,
    name: String,
    description: Option<String>,
    fields: Option<Vec<FieldMeta>>,
    input_fields: Option<Vec<InputValueMeta>>,
    interfaces: Option<Vec<TypeRefMeta>>,
    enum_values: Option<Vec<EnumValueMeta>>,
    possible_types: Option<Vec<TypeRefMeta>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
struct FieldMeta {
    name: String,
    description: Option<String>,
    args: Vec<InputValueMeta>,
    #[serde(rename = "type")]
    ty: TypeRefMeta,
    is_deprecated: bool,
    deprecation_reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
struct InputValueMeta {
    name: String,
    description: Option<String>,
    #[serde(rename = "type")]
    ty: TypeRefMeta,
    default_value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
struct EnumValueMeta {
    name: String,
    description: Option<String>,
    is_deprecated: bool,
    deprecation_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    discriminant: Option<Discriminant>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
struct TypeRefMeta {
    kind: &'static str,
    name: Option<String>,
    of_type: Option<Box<TypeRefMeta>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct DirectiveMeta {
    name: String,
    description: Option<String>,
    locations: Vec<&'static str>,
    args: Vec<InputValueMeta>,
}

/// Builds the document for a closed schema.
pub(crate) fn build(schema: &RootSchema) -> IntrospectionDocument {
    let metas = meta::meta_types();
    let string = TypeDefinition::scalar(scalar::STRING);
    let boolean = TypeDefinition::scalar(scalar::BOOLEAN);

    let mut all: BTreeMap<&str, &TypeDefinition> = BTreeMap::new();
    for def in schema.types().iter().chain(&metas) {
        all.insert(def.name.as_str(), def);
    }
    all.entry(scalar::STRING).or_insert(&string);
    all.entry(scalar::BOOLEAN).or_insert(&boolean);

    let ctx = Context { all: &all };
    let types = all.values().map(|def| ctx.type_meta(def)).collect();
    let directives = meta::directives()
        .into_iter()
        .map(|d| DirectiveMeta {
            name: d.name.to_owned(),
            description: Some(d.description.to_owned()),
            locations: d.locations.to_vec(),
            args: d.args.iter().map(|a| ctx.input_value(a)).collect(),
        })
        .collect();

    IntrospectionDocument {
        data: Data {
            schema: SchemaMeta {
                query_type: NamedMeta {
                    name: schema.query_type().name.clone(),
                },
                mutation_type: schema.mutation_type().map(|m| NamedMeta {
                    name: m.name.clone(),
                }),
                subscription_type: None,
                types,
                directives,
            },
        },
    }
}

struct Context<'a> {
    all: &'a BTreeMap<&'a str, &'a TypeDefinition>,
}

impl Context<'_> {
    fn type_meta(&self, def: &TypeDefinition) -> TypeMeta {
        let is_meta = def.name.starts_with("__");
        let mut meta = TypeMeta {
            kind: def.kind().as_introspection_str(),
            name: def.name.clone(),
            description: def.description.clone(),
            fields: None,
            input_fields: None,
            interfaces: None,
            enum_values: None,
            possible_types: None,
        };
        match def.kind() {
            DefinitionKind::Scalar => {}
            DefinitionKind::Enum => {
                meta.enum_values = Some(
                    def.enum_values()
                        .iter()
                        .map(|v| enum_value(v, is_meta))
                        .collect(),
                );
            }
            DefinitionKind::Object => {
                meta.fields = Some(def.fields().iter().map(|f| self.field(f)).collect());
                meta.interfaces = Some(
                    def.interfaces()
                        .iter()
                        .map(|i| self.type_ref(&TypeRef::named(i.as_str())))
                        .collect(),
                );
            }
            DefinitionKind::Interface => {
                meta.fields = Some(def.fields().iter().map(|f| self.field(f)).collect());
                meta.possible_types = Some(
                    self.all
                        .values()
                        .filter(|d| d.implements(&def.name))
                        .map(|d| self.type_ref(&TypeRef::named(d.name.as_str())))
                        .collect(),
                );
            }
            DefinitionKind::InputObject => {
                meta.input_fields = Some(
                    def.input_fields()
                        .iter()
                        .map(|f| self.input_value(f))
                        .collect(),
                );
            }
        }
        meta
    }

    fn field(&self, field: &Field) -> FieldMeta {
        FieldMeta {
            name: field.name.clone(),
            description: field.description.clone(),
            args: field.args.iter().map(|a| self.input_value(a)).collect(),
            ty: self.type_ref(&field.ty),
            is_deprecated: field.deprecation.is_some(),
            deprecation_reason: field.deprecation.clone(),
        }
    }

    fn input_value(&self, value: &InputValue) -> InputValueMeta {
        InputValueMeta {
            name: value.name.clone(),
            description: value.description.clone(),
            ty: self.type_ref(&value.ty),
            default_value: value.default_value.clone(),
        }
    }

    fn type_ref(&self, ty: &TypeRef) -> TypeRefMeta {
        match ty {
            TypeRef::Named(name) => TypeRefMeta {
                kind: self
                    .all
                    .get(name.as_str())
                    .map_or("SCALAR", |def| def.kind().as_introspection_str()),
                name: Some(name.clone()),
                of_type: None,
            },
            TypeRef::List(inner) => TypeRefMeta {
                kind: "LIST",
                name: None,
                of_type: Some(Box::new(self.type_ref(inner))),
            },
            TypeRef::NonNull(inner) => TypeRefMeta {
                kind: "NON_NULL",
                name: None,
                of_type: Some(Box::new(self.type_ref(inner))),
            },
        }
    }
}

fn enum_value(value: &EnumValue, is_meta: bool) -> EnumValueMeta {
    EnumValueMeta {
        name: value.name.clone(),
        description: value.description.clone(),
        is_deprecated: value.deprecation.is_some(),
        deprecation_reason: value.deprecation.clone(),
        discriminant: (!is_meta).then(|| value.discriminant.clone()),
    }
}
