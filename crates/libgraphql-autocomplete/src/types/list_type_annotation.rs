use crate::loc;
use crate::types::TypeAnnotation;

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ListTypeAnnotation {
    pub(super) inner_type_annotation: Box<TypeAnnotation>,
    pub(super) nullable: bool,
    pub(super) ref_location: loc::SourceLocation,
}
impl ListTypeAnnotation {
    /// The annotation of each item in this list.
    pub fn inner_type_annotation(&self) -> &TypeAnnotation {
        &self.inner_type_annotation
    }

    pub fn nullable(&self) -> bool {
        self.nullable
    }

    pub fn ref_location(&self) -> &loc::SourceLocation {
        &self.ref_location
    }
}
