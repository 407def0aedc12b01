//! JSON Schema (draft-07) back-end for contract type definitions.
//!
//! Takes the contract toolchain's type IR (scalars, literals, objects,
//! arrays, unions, named references) and compiles it into a schema document,
//! optionally rendered as JSON or YAML text.
//!
//! Design goals:
//! - Total and pure: every IR variant maps to exactly one schema shape;
//!   lowering never fails, never validates, never touches I/O.
//! - Exhaustiveness by construction: IR and shape kinds are closed enums,
//!   so an unhandled variant is a compile error rather than a silent hole.
//! - Deterministic output: definitions and object properties keep their
//!   declaration order all the way into the rendered text.
//!
//! Input invariants (unique property names, resolvable reference names) are
//! the producer's responsibility and are not re-checked here.

pub mod error;
pub mod ir;
pub mod lower;
pub mod render;
pub mod schema;

pub use error::Error;
pub use ir::{Contract, NamedType, Property, Type};
pub use lower::{json_schema, json_type_schema};
pub use render::{Format, render};
pub use schema::{Document, Schema};

/// Compile a contract and render it in one call.
pub fn generate_json_schema(contract: &Contract, format: Format) -> Result<String, Error> {
    render::render(&lower::json_schema(contract), format)
}
