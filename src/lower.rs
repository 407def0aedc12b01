//! IR → schema-shape lowering.
//!
//! Two pure functions, leaves first: `json_type_schema` maps one IR node to
//! one schema node (recursing into composites), `json_schema` folds a whole
//! contract into a document. No I/O, no shared state, fresh output per call.

use indexmap::IndexMap;

use crate::ir::{Contract, Type};
use crate::schema::{Document, Schema};

/// Compile a contract into a schema document: one `definitions` entry per
/// named type, in declaration order.
///
/// Duplicate names are not rejected; the last definition's shape wins, kept
/// at the first occurrence's position. Validating name uniqueness is the
/// contract producer's job, not this back-end's.
pub fn json_schema(contract: &Contract) -> Document {
    let mut definitions = IndexMap::with_capacity(contract.types.len());
    for def in &contract.types {
        definitions.insert(def.name.clone(), json_type_schema(&def.ty));
    }
    Document::new(definitions)
}

/// Compile one IR node into one schema node.
///
/// Total over the closed `Type` set; the match is exhaustive, so extending
/// the IR without extending this mapping fails to compile. Reference names
/// are taken verbatim and never checked against the contract's definitions —
/// a dangling reference compiles into a dangling `$ref`.
pub fn json_type_schema(ty: &Type) -> Schema {
    match ty {
        Type::Null => Schema::Null,
        Type::Boolean => Schema::Boolean(None),
        Type::BooleanLiteral(value) => Schema::Boolean(Some(*value)),
        Type::Date | Type::DateTime | Type::String => Schema::String(None),
        Type::StringLiteral(value) => Schema::String(Some(value.clone())),
        Type::Float | Type::Double => Schema::Number(None),
        Type::FloatLiteral(value) => Schema::Number(Some(*value)),
        Type::Int32 | Type::Int64 => Schema::Integer(None),
        Type::IntLiteral(value) => Schema::Integer(Some(*value)),
        Type::Object { properties } => {
            // One left-to-right pass builds `properties` and `required`
            // together; properties are never reordered.
            let mut props = IndexMap::with_capacity(properties.len());
            let mut required = Vec::new();
            for property in properties {
                if !property.optional {
                    required.push(property.name.clone());
                }
                props.insert(property.name.clone(), json_type_schema(&property.ty));
            }
            Schema::Object { properties: props, required }
        }
        Type::Array { element } => Schema::Array(Box::new(json_type_schema(element))),
        Type::Union { members } => {
            // Input order, no flattening or deduplication.
            Schema::OneOf(members.iter().map(json_type_schema).collect())
        }
        Type::Reference { name } => Schema::Ref(format!("#/definitions/{name}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{NamedType, Property};
    use pretty_assertions::assert_eq;

    fn named(name: &str, ty: Type) -> NamedType {
        NamedType { name: name.to_string(), ty }
    }

    #[test]
    fn scalars_lower_to_bare_shapes() {
        let cases = [
            (Type::Null, Schema::Null),
            (Type::Boolean, Schema::Boolean(None)),
            (Type::Date, Schema::String(None)),
            (Type::DateTime, Schema::String(None)),
            (Type::String, Schema::String(None)),
            (Type::Float, Schema::Number(None)),
            (Type::Double, Schema::Number(None)),
            (Type::Int32, Schema::Integer(None)),
            (Type::Int64, Schema::Integer(None)),
        ];
        for (ty, expected) in cases {
            assert_eq!(json_type_schema(&ty), expected);
        }
    }

    #[test]
    fn literals_lower_to_const_constrained_scalars() {
        let cases = [
            (Type::BooleanLiteral(true), Schema::Boolean(Some(true))),
            (
                Type::StringLiteral("x".into()),
                Schema::String(Some("x".into())),
            ),
            (Type::IntLiteral(-7), Schema::Integer(Some(-7))),
            (Type::FloatLiteral(1.5), Schema::Number(Some(1.5))),
        ];
        for (ty, expected) in cases {
            assert_eq!(json_type_schema(&ty), expected);
        }
    }

    #[test]
    fn object_required_holds_non_optional_names_in_order() {
        let ty = Type::Object {
            properties: vec![
                Property { name: "a".into(), ty: Type::String, optional: false },
                Property { name: "b".into(), ty: Type::Int32, optional: true },
            ],
        };
        let Schema::Object { properties, required } = json_type_schema(&ty) else {
            panic!("object did not lower to an object shape");
        };
        assert_eq!(required, vec!["a".to_string()]);
        let keys: Vec<&String> = properties.keys().collect();
        assert_eq!(keys, ["a", "b"]);
        assert_eq!(properties["a"], Schema::String(None));
        assert_eq!(properties["b"], Schema::Integer(None));
    }

    #[test]
    fn array_wraps_the_lowered_element() {
        let ty = Type::Array { element: Box::new(Type::String) };
        assert_eq!(
            json_type_schema(&ty),
            Schema::Array(Box::new(Schema::String(None)))
        );
    }

    #[test]
    fn union_keeps_member_order_and_duplicates() {
        let ty = Type::Union { members: vec![Type::String, Type::String] };
        assert_eq!(
            json_type_schema(&ty),
            Schema::OneOf(vec![Schema::String(None), Schema::String(None)])
        );
    }

    #[test]
    fn reference_compiles_without_existence_check() {
        // "Foo" is defined nowhere; the pointer is emitted anyway.
        let ty = Type::Reference { name: "Foo".into() };
        assert_eq!(
            json_type_schema(&ty),
            Schema::Ref("#/definitions/Foo".into())
        );
    }

    #[test]
    fn nested_composites_recurse() {
        let ty = Type::Object {
            properties: vec![Property {
                name: "tags".into(),
                ty: Type::Array {
                    element: Box::new(Type::Union {
                        members: vec![
                            Type::StringLiteral("on".into()),
                            Type::Reference { name: "Tag".into() },
                        ],
                    }),
                },
                optional: false,
            }],
        };
        let Schema::Object { properties, .. } = json_type_schema(&ty) else {
            panic!("object did not lower to an object shape");
        };
        assert_eq!(
            properties["tags"],
            Schema::Array(Box::new(Schema::OneOf(vec![
                Schema::String(Some("on".into())),
                Schema::Ref("#/definitions/Tag".into()),
            ])))
        );
    }

    #[test]
    fn definitions_preserve_contract_order() {
        let contract = Contract {
            types: vec![
                named("A", Type::Null),
                named("B", Type::Boolean),
                named("C", Type::String),
            ],
        };
        let document = json_schema(&contract);
        let keys: Vec<&String> = document.definitions.keys().collect();
        assert_eq!(keys, ["A", "B", "C"]);
    }

    #[test]
    fn duplicate_definition_names_keep_the_last_shape() {
        let contract = Contract {
            types: vec![named("A", Type::Int32), named("A", Type::String)],
        };
        let document = json_schema(&contract);
        assert_eq!(document.definitions.len(), 1);
        assert_eq!(document.definitions["A"], Schema::String(None));
    }
}
