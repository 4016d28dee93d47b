use crate::schema::SchemaBuilder;
use crate::types::Directive;
use crate::types::GraphQLType;
use indexmap::IndexMap;

/// Represents a built, immutable GraphQL schema.
///
/// A [`Schema`] is the read-only snapshot every hint request is resolved
/// against. Nothing in this crate mutates one after
/// [`SchemaBuilder::build()`] returns it, so a single instance can be shared
/// freely between threads and requests.
#[derive(Clone, Debug, PartialEq)]
pub struct Schema {
    pub(crate) directive_defs: IndexMap<String, Directive>,
    pub(crate) mutation_type: Option<String>,
    pub(crate) query_type: String,
    pub(crate) subscription_type: Option<String>,
    pub(crate) types: IndexMap<String, GraphQLType>,
}
impl Schema {
    /// All directives defined within this [`Schema`], built-ins first and then
    /// in definition order.
    pub fn all_directives(&self) -> &IndexMap<String, Directive> {
        &self.directive_defs
    }

    /// All types defined within this [`Schema`], built-in scalars first and
    /// then in definition order.
    pub fn all_types(&self) -> &IndexMap<String, GraphQLType> {
        &self.types
    }

    /// Helper function that just delegates to [`SchemaBuilder::new()`].
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    pub fn directive(&self, name: &str) -> Option<&Directive> {
        self.directive_defs.get(name)
    }

    /// Indicates if `type_` is this schema's Query root operation type.
    pub fn is_query_type(&self, type_: &GraphQLType) -> bool {
        type_.is_composite() && type_.name() == self.query_type
    }

    pub fn lookup_type(&self, name: &str) -> Option<&GraphQLType> {
        self.types.get(name)
    }

    /// Returns this [`Schema`]'s Mutation root operation type (if one was
    /// defined).
    pub fn mutation_type(&self) -> Option<&GraphQLType> {
        self.mutation_type
            .as_deref()
            .and_then(|type_name| self.types.get(type_name))
    }

    /// The object types a value of `type_` may be at runtime.
    ///
    /// For a union this is its members; for an interface it is every object
    /// type declaring that it implements the interface; an object type is its
    /// own only possible type. Any other kind of type has none.
    pub fn possible_types<'schema>(
        &'schema self,
        type_: &'schema GraphQLType,
    ) -> Vec<&'schema GraphQLType> {
        match type_ {
            GraphQLType::Interface(iface) =>
                self.types
                    .values()
                    .filter(|candidate| match candidate {
                        GraphQLType::Object(obj) =>
                            obj.interface_names().contains(&iface.name()),
                        _ => false,
                    })
                    .collect(),

            GraphQLType::Object(_) => vec![type_],

            GraphQLType::Union(union_type) => union_type.member_types(self),

            GraphQLType::Bool
                | GraphQLType::Enum(_)
                | GraphQLType::Float
                | GraphQLType::ID
                | GraphQLType::InputObject(_)
                | GraphQLType::Int
                | GraphQLType::Scalar(_)
                | GraphQLType::String => vec![],
        }
    }

    /// Returns this [`Schema`]'s Query root operation type.
    ///
    /// This factors in any `schema { query: ... }` override of the default
    /// `Query` type name.
    pub fn query_type(&self) -> &GraphQLType {
        self.types
            .get(self.query_type.as_str())
            .expect("type is present in schema")
    }

    /// The name of this [`Schema`]'s Query root operation type.
    pub fn query_type_name(&self) -> &str {
        self.query_type.as_str()
    }

    /// Returns this [`Schema`]'s Subscription root operation type (if one was
    /// defined).
    pub fn subscription_type(&self) -> Option<&GraphQLType> {
        self.subscription_type
            .as_deref()
            .and_then(|type_name| self.types.get(type_name))
    }
}
