//! Recovers the type-system context at the cursor from a
//! [`ParserStateChain`](crate::grammar::ParserStateChain).

mod field_def_lookup;
mod resolver;
mod type_context;

pub use field_def_lookup::lookup_field_def;
pub use field_def_lookup::schema_meta_field;
pub use field_def_lookup::type_meta_field;
pub use field_def_lookup::typename_meta_field;
pub use resolver::resolve;
pub use type_context::TypeContext;
pub use type_context::TypeRef;
