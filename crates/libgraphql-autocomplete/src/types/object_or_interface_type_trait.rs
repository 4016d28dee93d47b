use crate::loc;
use crate::schema::Schema;
use crate::types::Field;
use crate::types::InterfaceType;
use indexmap::IndexMap;

/// Accessors shared by [`ObjectType`](crate::types::ObjectType) and
/// [`InterfaceType`], the two kinds of type that declare output fields.
pub trait ObjectOrInterfaceTypeTrait {
    fn def_location(&self) -> &loc::SourceLocation;
    fn description(&self) -> Option<&str>;
    fn fields(&self) -> &IndexMap<String, Field>;
    fn interface_names(&self) -> Vec<&str>;
    fn interfaces<'schema>(&self, schema: &'schema Schema) -> Vec<&'schema InterfaceType>;
    fn name(&self) -> &str;
}
