// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Schema definition language printer.
//!
//! Layout rules:
//! - custom scalars and enums first, then objects, interfaces and inputs,
//!   then `Query` and `Mutation`; declaration order within each group;
//! - builtin scalars and the schema block are never printed;
//! - descriptions are `"""` blocks, split over lines past 70 characters;
//! - arguments print inline unless one of them carries a description;
//! - one blank line between definitions and a trailing newline.

use std::fmt::Write as _;

use crate::composer::{RootSchema, MUTATION_TYPE, QUERY_TYPE};
use crate::types::{scalar, DefinitionKind, InputValue, TypeDefinition, TypeKind};

const DEFAULT_DEPRECATION_REASON: &str = "No longer supported";
const INDENT: &str = "  ";

/// Renders the closed schema as definition text.
pub(crate) fn render(schema: &RootSchema) -> String {
    let is_root = |def: &&TypeDefinition| def.name == QUERY_TYPE || def.name == MUTATION_TYPE;
    let printable = || {
        schema
            .types()
            .iter()
            .filter(|def| !(def.kind() == DefinitionKind::Scalar && scalar::is_builtin(&def.name)))
    };
    let leaves = printable()
        .filter(|def| matches!(def.kind(), DefinitionKind::Scalar | DefinitionKind::Enum));
    let composites = printable().filter(|def| {
        !matches!(def.kind(), DefinitionKind::Scalar | DefinitionKind::Enum) && !is_root(def)
    });
    let roots = [Some(schema.query_type()), schema.mutation_type()]
        .into_iter()
        .flatten();

    let blocks: Vec<String> = leaves.chain(composites).chain(roots).map(print_type).collect();
    let mut out = blocks.join("\n\n");
    out.push('\n');
    out
}

fn print_type(def: &TypeDefinition) -> String {
    let mut out = description(def.description.as_deref(), "", true);
    match &def.kind {
        TypeKind::Scalar => {
            let _ = write!(out, "scalar {}", def.name);
        }
        TypeKind::Enum { values } => {
            let _ = write!(out, "enum {}", def.name);
            let lines = values.iter().enumerate().map(|(i, v)| {
                format!(
                    "{}{INDENT}{}{}",
                    description(v.description.as_deref(), INDENT, i == 0),
                    v.name,
                    deprecated(v.deprecation.as_deref())
                )
            });
            out.push_str(&block(lines));
        }
        TypeKind::Object { fields, .. } | TypeKind::Interface { fields } => {
            let keyword = if def.kind() == DefinitionKind::Object {
                "type"
            } else {
                "interface"
            };
            let _ = write!(out, "{keyword} {}", def.name);
            if !def.interfaces().is_empty() {
                let _ = write!(out, " implements {}", def.interfaces().join(" & "));
            }
            let lines = fields.iter().enumerate().map(|(i, f)| {
                format!(
                    "{}{INDENT}{}{}: {}{}",
                    description(f.description.as_deref(), INDENT, i == 0),
                    f.name,
                    args(&f.args, INDENT),
                    f.ty,
                    deprecated(f.deprecation.as_deref())
                )
            });
            out.push_str(&block(lines));
        }
        TypeKind::InputObject { fields } => {
            let _ = write!(out, "input {}", def.name);
            let lines = fields.iter().enumerate().map(|(i, f)| {
                format!(
                    "{}{INDENT}{}",
                    description(f.description.as_deref(), INDENT, i == 0),
                    input_value(f)
                )
            });
            out.push_str(&block(lines));
        }
    }
    out
}

fn block(lines: impl Iterator<Item = String>) -> String {
    let lines: Vec<String> = lines.collect();
    if lines.is_empty() {
        String::new()
    } else {
        format!(" {{\n{}\n}}", lines.join("\n"))
    }
}

fn args(args: &[InputValue], indentation: &str) -> String {
    if args.is_empty() {
        return String::new();
    }
    if args.iter().all(|a| a.description.is_none()) {
        let inline: Vec<String> = args.iter().map(input_value).collect();
        return format!("({})", inline.join(", "));
    }
    let nested = format!("{INDENT}{indentation}");
    let lines: Vec<String> = args
        .iter()
        .enumerate()
        .map(|(i, a)| {
            format!(
                "{}{nested}{}",
                description(a.description.as_deref(), &nested, i == 0),
                input_value(a)
            )
        })
        .collect();
    format!("(\n{}\n{indentation})", lines.join("\n"))
}

fn input_value(value: &InputValue) -> String {
    match &value.default_value {
        Some(default) => format!("{}: {} = {default}", value.name, value.ty),
        None => format!("{}: {}", value.name, value.ty),
    }
}

fn deprecated(reason: Option<&str>) -> String {
    match reason {
        None => String::new(),
        Some(DEFAULT_DEPRECATION_REASON) => " @deprecated".to_owned(),
        Some(reason) => format!(" @deprecated(reason: {})", string_literal(reason)),
    }
}

fn string_literal(value: &str) -> String {
    serde_json::Value::from(value).to_string()
}

/// Description block followed by a newline, or nothing.
///
/// Non-first members of an indented block get a leading blank line.
fn description(text: Option<&str>, indentation: &str, first_in_block: bool) -> String {
    let Some(text) = text else {
        return String::new();
    };
    let prefix = if !indentation.is_empty() && !first_in_block {
        format!("\n{indentation}")
    } else {
        indentation.to_owned()
    };
    let body = block_string(text, text.chars().count() > 70).replace('\n', &format!("\n{indentation}"));
    format!("{prefix}{body}\n")
}

fn block_string(value: &str, prefer_multiple_lines: bool) -> String {
    let single_line = !value.contains('\n');
    let leading_space = value.starts_with([' ', '\t']);
    let trailing_special = value.ends_with(['"', '\\']);
    let multiple_lines = !single_line || trailing_special || prefer_multiple_lines;

    let mut body = String::new();
    if multiple_lines && !(single_line && leading_space) {
        body.push('\n');
    }
    body.push_str(value);
    if multiple_lines {
        body.push('\n');
    }
    format!("\"\"\"{}\"\"\"", body.replace("\"\"\"", "\\\"\"\""))
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::{EnumBuilder, EnumValue, Field, ObjectBuilder, TypeRef};

    #[test]
    fn short_description_is_single_line() {
        assert_eq!(
            description(Some("Total number of projects"), "", true),
            "\"\"\"Total number of projects\"\"\"\n"
        );
    }

    #[test]
    fn long_description_is_multi_line() {
        let text = "x".repeat(71);
        assert_eq!(
            description(Some(&text), INDENT, true),
            format!("  \"\"\"\n  {text}\n  \"\"\"\n")
        );
    }

    #[test]
    fn non_first_member_gets_blank_line() {
        assert_eq!(description(Some("a"), INDENT, false), "\n  \"\"\"a\"\"\"\n");
    }

    #[test]
    fn deprecation_forms() {
        assert_eq!(deprecated(Some(DEFAULT_DEPRECATION_REASON)), " @deprecated");
        assert_eq!(
            deprecated(Some("use \"edgeClusters\"")),
            " @deprecated(reason: \"use \\\"edgeClusters\\\"\")"
        );
    }

    #[test]
    fn enum_and_object_layout() {
        let e = EnumBuilder::new("SortingDirection")
            .value("ASCENDING", 0)
            .member(EnumValue::new("DESCENDING", 1).deprecated(DEFAULT_DEPRECATION_REASON))
            .build();
        assert_eq!(
            print_type(&e),
            "enum SortingDirection {\n  ASCENDING\n  DESCENDING @deprecated\n}"
        );

        let o = ObjectBuilder::new("Project")
            .implements("Node")
            .field(Field::new("id", TypeRef::required("ID")))
            .field(
                Field::new("edgeCluster", TypeRef::named("EdgeCluster")).arg(InputValue::new(
                    "edgeClusterID",
                    TypeRef::required("ID"),
                )),
            )
            .build();
        assert_eq!(
            print_type(&o),
            "type Project implements Node {\n  id: ID!\n  edgeCluster(edgeClusterID: ID!): EdgeCluster\n}"
        );
    }

    #[test]
    fn described_args_print_one_per_line() {
        let o = ObjectBuilder::new("Q")
            .field(
                Field::new("items", TypeRef::named("Int"))
                    .arg(InputValue::new("first", TypeRef::named("Int")).description("How many"))
                    .arg(InputValue::new("after", TypeRef::named("String"))),
            )
            .build();
        assert_eq!(
            print_type(&o),
            "type Q {\n  items(\n    \"\"\"How many\"\"\"\n    first: Int\n    after: String\n  ): Int\n}"
        );
    }
}
