use crate::loc;
use crate::schema::Schema;
use crate::types::Field;
use crate::types::InterfaceType;
use crate::types::ObjectOrInterfaceTypeTrait;
use indexmap::IndexMap;
use inherent::inherent;

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub(crate) struct ObjectOrInterfaceTypeData {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) description: Option<String>,
    pub(crate) fields: IndexMap<String, Field>,
    pub(crate) interfaces: Vec<String>,
    pub(crate) name: String,
}

#[inherent]
impl ObjectOrInterfaceTypeTrait for ObjectOrInterfaceTypeData {
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn fields(&self) -> &IndexMap<String, Field> {
        &self.fields
    }

    pub fn interface_names(&self) -> Vec<&str> {
        self.interfaces
            .iter()
            .map(|iface_name| iface_name.as_str())
            .collect()
    }

    /// Names that do not resolve to an interface type are skipped.
    pub fn interfaces<'schema>(
        &self,
        schema: &'schema Schema,
    ) -> Vec<&'schema InterfaceType> {
        self.interfaces
            .iter()
            .filter_map(|iface_name| {
                schema.lookup_type(iface_name)?.as_interface()
            })
            .collect()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
