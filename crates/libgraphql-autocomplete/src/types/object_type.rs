use crate::loc;
use crate::schema::Schema;
use crate::types::Field;
use crate::types::InterfaceType;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectOrInterfaceTypeTrait;
use indexmap::IndexMap;
use inherent::inherent;

/// Represents an
/// [object type](https://spec.graphql.org/October2021/#sec-Objects) defined
/// within some [`Schema`].
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ObjectType(pub(crate) ObjectOrInterfaceTypeData);

#[inherent]
impl ObjectOrInterfaceTypeTrait for ObjectType {
    /// The [`SourceLocation`](loc::SourceLocation) indicating where this
    /// [`ObjectType`] was defined.
    pub fn def_location(&self) -> &loc::SourceLocation {
        self.0.def_location()
    }

    /// The description of this [`ObjectType`] as defined in the schema
    /// (e.g. in a """-string immediately before the type definition).
    pub fn description(&self) -> Option<&str> {
        self.0.description()
    }

    /// A map from FieldName -> [`Field`] for all fields defined on this
    /// [`ObjectType`], in the order they were declared (fields added by type
    /// extensions follow those of the original definition).
    pub fn fields(&self) -> &IndexMap<String, Field> {
        self.0.fields()
    }

    /// The names of all [`InterfaceType`]s this [`ObjectType`] declares that it
    /// implements.
    pub fn interface_names(&self) -> Vec<&str> {
        self.0.interface_names()
    }

    pub fn interfaces<'schema>(&self, schema: &'schema Schema) -> Vec<&'schema InterfaceType> {
        self.0.interfaces(schema)
    }

    pub fn name(&self) -> &str {
        self.0.name()
    }
}
