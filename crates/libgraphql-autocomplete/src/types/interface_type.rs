use crate::loc;
use crate::schema::Schema;
use crate::types::Field;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectOrInterfaceTypeTrait;
use indexmap::IndexMap;
use inherent::inherent;

/// Represents an
/// [interface type](https://spec.graphql.org/October2021/#sec-Interfaces)
/// defined within some [`Schema`].
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct InterfaceType(pub(crate) ObjectOrInterfaceTypeData);

#[inherent]
impl ObjectOrInterfaceTypeTrait for InterfaceType {
    pub fn def_location(&self) -> &loc::SourceLocation {
        self.0.def_location()
    }

    pub fn description(&self) -> Option<&str> {
        self.0.description()
    }

    /// A map from FieldName -> [`Field`] for all fields defined on this
    /// [`InterfaceType`], in declaration order.
    pub fn fields(&self) -> &IndexMap<String, Field> {
        self.0.fields()
    }

    pub fn interface_names(&self) -> Vec<&str> {
        self.0.interface_names()
    }

    /// The list of [`InterfaceType`]s implemented by this `InterfaceType`.
    pub fn interfaces<'schema>(&self, schema: &'schema Schema) -> Vec<&'schema InterfaceType> {
        self.0.interfaces(schema)
    }

    pub fn name(&self) -> &str {
        self.0.name()
    }
}
