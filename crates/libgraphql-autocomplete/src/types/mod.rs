mod directive;
mod enum_type;
mod field;
mod graphql_type;
mod graphql_type_kind;
mod input_field;
mod input_object_type;
mod interface_type;
mod list_type_annotation;
mod named_type_annotation;
mod object_or_interface_type_data;
mod object_or_interface_type_trait;
mod object_type;
mod parameter;
mod scalar_type;
mod type_annotation;
mod union_type;

pub use directive::Directive;
pub use directive::DirectiveLocation;
pub use enum_type::EnumType;
pub use enum_type::EnumValue;
pub use field::Field;
pub use graphql_type::GraphQLType;
pub use graphql_type_kind::GraphQLTypeKind;
pub use input_field::InputField;
pub use input_object_type::InputObjectType;
pub use interface_type::InterfaceType;
pub use list_type_annotation::ListTypeAnnotation;
pub use named_type_annotation::NamedTypeAnnotation;
pub(crate) use object_or_interface_type_data::ObjectOrInterfaceTypeData;
pub use object_or_interface_type_trait::ObjectOrInterfaceTypeTrait;
pub use object_type::ObjectType;
pub use parameter::Parameter;
pub use scalar_type::ScalarType;
pub use type_annotation::TypeAnnotation;
pub use union_type::UnionType;

#[cfg(test)]
mod tests;
