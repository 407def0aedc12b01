// Strongly-typed input IR for the schema back-end. Produced by the contract
// parser; this crate only reads it and never re-validates its invariants.

/// One type expression. Closed set: adding a variant without updating the
/// lowering in `crate::lower` is a compile error, not a silent omission.
#[derive(Debug, Clone, PartialEq)]
pub enum Type {
    Null,
    Boolean,
    BooleanLiteral(bool),
    Date,
    DateTime,
    String,
    StringLiteral(String),
    Float,                   // single precision
    Double,
    FloatLiteral(f64),
    Int32,
    Int64,
    IntLiteral(i64),
    Object {
        properties: Vec<Property>,   // declaration order, names unique per object
    },
    Array {
        element: Box<Type>,
    },
    Union {
        members: Vec<Type>,          // ordered, non-empty, never deduplicated
    },
    Reference {
        name: String,                // unresolved; trusted to exist in the contract
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub name: String,
    pub ty: Type,
    pub optional: bool,
}

/// One named top-level definition within a contract.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedType {
    pub name: String,
    pub ty: Type,
}

/// One compilation unit: an ordered list of named type definitions. Order
/// determines the key order of the output `definitions` map.
#[derive(Debug, Clone, PartialEq)]
pub struct Contract {
    pub types: Vec<NamedType>,
}
