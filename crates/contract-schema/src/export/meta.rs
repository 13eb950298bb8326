// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Introspection meta types and builtin directives.

use crate::types::{
    scalar, EnumBuilder, EnumValue, Field, InputValue, ListNullability, ObjectBuilder,
    TypeDefinition, TypeRef,
};

/// A builtin directive as it appears in the introspection document.
pub(crate) struct Directive {
    pub name: &'static str,
    pub description: &'static str,
    pub locations: &'static [&'static str],
    pub args: Vec<InputValue>,
}

fn required_list(item: &str) -> TypeRef {
    TypeRef::list_of(TypeRef::named(item), ListNullability::NonNullListAndItems)
}

fn list(item: &str) -> TypeRef {
    TypeRef::list_of(TypeRef::named(item), ListNullability::NonNullItems)
}

fn include_deprecated() -> InputValue {
    InputValue::new("includeDeprecated", TypeRef::named(scalar::BOOLEAN)).default_value("false")
}

/// `@include`, `@skip` and `@deprecated`.
pub(crate) fn directives() -> Vec<Directive> {
    vec![
        Directive {
            name: "include",
            description: "Directs the executor to include this field or fragment only when the `if` argument is true.",
            locations: &["FIELD", "FRAGMENT_SPREAD", "INLINE_FRAGMENT"],
            args: vec![InputValue::new("if", TypeRef::required(scalar::BOOLEAN))
                .description("Included when true.")],
        },
        Directive {
            name: "skip",
            description: "Directs the executor to skip this field or fragment when the `if` argument is true.",
            locations: &["FIELD", "FRAGMENT_SPREAD", "INLINE_FRAGMENT"],
            args: vec![InputValue::new("if", TypeRef::required(scalar::BOOLEAN))
                .description("Skipped when true.")],
        },
        Directive {
            name: "deprecated",
            description: "Marks an element of a GraphQL schema as no longer supported.",
            locations: &["FIELD_DEFINITION", "ENUM_VALUE"],
            args: vec![InputValue::new("reason", TypeRef::named(scalar::STRING))
                .description(
                    "Explains why this element was deprecated, usually also including a \
                     suggestion for how to access supported similar data. Formatted using \
                     the Markdown syntax, as specified by [CommonMark](https://commonmark.org/).",
                )
                .default_value("\"No longer supported\"")],
        },
    ]
}

/// The eight `__`-prefixed types every introspection document carries.
pub(crate) fn meta_types() -> Vec<TypeDefinition> {
    let schema = ObjectBuilder::new("__Schema")
        .description(
            "A GraphQL Schema defines the capabilities of a GraphQL server. It exposes all \
             available types and directives on the server, as well as the entry points for \
             query, mutation, and subscription operations.",
        )
        .field(
            Field::new("types", required_list("__Type"))
                .description("A list of all types supported by this server."),
        )
        .field(
            Field::new("queryType", TypeRef::required("__Type"))
                .description("The type that query operations will be rooted at."),
        )
        .field(Field::new("mutationType", TypeRef::named("__Type")).description(
            "If this server supports mutation, the type that mutation operations will be rooted at.",
        ))
        .field(Field::new("subscriptionType", TypeRef::named("__Type")).description(
            "If this server support subscription, the type that subscription operations will be rooted at.",
        ))
        .field(
            Field::new("directives", required_list("__Directive"))
                .description("A list of all directives supported by this server."),
        )
        .build();

    let ty = ObjectBuilder::new("__Type")
        .description(
            "The fundamental unit of any GraphQL Schema is the type. There are many kinds of \
             types in GraphQL as represented by the `__TypeKind` enum.\n\nDepending on the \
             kind of a type, certain fields describe information about that type. Scalar \
             types provide no information beyond a name and description, while Enum types \
             provide their values. Object and Interface types provide the fields they \
             describe. Abstract types, Union and Interface, provide the Object types \
             possible at runtime. List and NonNull types compose other types.",
        )
        .field(Field::new("kind", TypeRef::required("__TypeKind")))
        .field(Field::new("name", TypeRef::named(scalar::STRING)))
        .field(Field::new("description", TypeRef::named(scalar::STRING)))
        .field(Field::new("fields", list("__Field")).arg(include_deprecated()))
        .field(Field::new("interfaces", list("__Type")))
        .field(Field::new("possibleTypes", list("__Type")))
        .field(Field::new("enumValues", list("__EnumValue")).arg(include_deprecated()))
        .field(Field::new("inputFields", list("__InputValue")))
        .field(Field::new("ofType", TypeRef::named("__Type")))
        .build();

    let type_kind = EnumBuilder::new("__TypeKind")
        .description("An enum describing what kind of type a given `__Type` is.")
        .value("SCALAR", 0)
        .value("OBJECT", 1)
        .value("INTERFACE", 2)
        .value("UNION", 3)
        .value("ENUM", 4)
        .value("INPUT_OBJECT", 5)
        .value("LIST", 6)
        .value("NON_NULL", 7)
        .build();

    let field = ObjectBuilder::new("__Field")
        .description(
            "Object and Interface types are described by a list of Fields, each of which has \
             a name, potentially a list of arguments, and a return type.",
        )
        .field(Field::new("name", TypeRef::required(scalar::STRING)))
        .field(Field::new("description", TypeRef::named(scalar::STRING)))
        .field(Field::new("args", required_list("__InputValue")))
        .field(Field::new("type", TypeRef::required("__Type")))
        .field(Field::new("isDeprecated", TypeRef::required(scalar::BOOLEAN)))
        .field(Field::new("deprecationReason", TypeRef::named(scalar::STRING)))
        .build();

    let input_value = ObjectBuilder::new("__InputValue")
        .description(
            "Arguments provided to Fields or Directives and the input fields of an \
             InputObject are represented as Input Values which describe their type and \
             optionally a default value.",
        )
        .field(Field::new("name", TypeRef::required(scalar::STRING)))
        .field(Field::new("description", TypeRef::named(scalar::STRING)))
        .field(Field::new("type", TypeRef::required("__Type")))
        .field(
            Field::new("defaultValue", TypeRef::named(scalar::STRING)).description(
                "A GraphQL-formatted string representing the default value for this input value.",
            ),
        )
        .build();

    let enum_value = ObjectBuilder::new("__EnumValue")
        .description(
            "One possible value for a given Enum. Enum values are unique values, not a \
             placeholder for a string or numeric value. However an Enum value is returned in \
             a JSON response as a string.",
        )
        .field(Field::new("name", TypeRef::required(scalar::STRING)))
        .field(Field::new("description", TypeRef::named(scalar::STRING)))
        .field(Field::new("isDeprecated", TypeRef::required(scalar::BOOLEAN)))
        .field(Field::new("deprecationReason", TypeRef::named(scalar::STRING)))
        .build();

    let directive = ObjectBuilder::new("__Directive")
        .description(
            "A Directive provides a way to describe alternate runtime execution and type \
             validation behavior in a GraphQL document.",
        )
        .field(Field::new("name", TypeRef::required(scalar::STRING)))
        .field(Field::new("description", TypeRef::named(scalar::STRING)))
        .field(Field::new("locations", required_list("__DirectiveLocation")))
        .field(Field::new("args", required_list("__InputValue")))
        .build();

    let locations = [
        ("QUERY", "Location adjacent to a query operation."),
        ("MUTATION", "Location adjacent to a mutation operation."),
        ("SUBSCRIPTION", "Location adjacent to a subscription operation."),
        ("FIELD", "Location adjacent to a field."),
        ("FRAGMENT_DEFINITION", "Location adjacent to a fragment definition."),
        ("FRAGMENT_SPREAD", "Location adjacent to a fragment spread."),
        ("INLINE_FRAGMENT", "Location adjacent to an inline fragment."),
        ("VARIABLE_DEFINITION", "Location adjacent to a variable definition."),
        ("SCHEMA", "Location adjacent to a schema definition."),
        ("SCALAR", "Location adjacent to a scalar definition."),
        ("OBJECT", "Location adjacent to an object type definition."),
        ("FIELD_DEFINITION", "Location adjacent to a field definition."),
        ("ARGUMENT_DEFINITION", "Location adjacent to an argument definition."),
        ("INTERFACE", "Location adjacent to an interface definition."),
        ("UNION", "Location adjacent to a union definition."),
        ("ENUM", "Location adjacent to an enum definition."),
        ("ENUM_VALUE", "Location adjacent to an enum value definition."),
        ("INPUT_OBJECT", "Location adjacent to an input object type definition."),
        ("INPUT_FIELD_DEFINITION", "Location adjacent to an input object field definition."),
    ];
    let directive_location = locations
        .iter()
        .zip(0_i64..)
        .fold(
            EnumBuilder::new("__DirectiveLocation").description(
                "A Directive can be adjacent to many parts of the GraphQL language, a \
                 __DirectiveLocation describes one such possible adjacencies.",
            ),
            |builder, ((name, description), discriminant)| {
                builder.member(EnumValue::new(*name, discriminant).description(*description))
            },
        )
        .build();

    vec![
        schema,
        ty,
        type_kind,
        field,
        input_value,
        enum_value,
        directive,
        directive_location,
    ]
}
