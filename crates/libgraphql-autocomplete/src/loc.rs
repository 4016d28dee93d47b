use std::path::Path;
use std::path::PathBuf;

/// A line/column position within a schema file on disk.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct FilePosition {
    pub col: usize,
    pub file: Box<PathBuf>,
    pub line: usize,
}

/// Indicates where some schema element was defined.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum SourceLocation {
    /// Implicitly defined by GraphQL itself (e.g. `Boolean`, `@skip`,
    /// `__typename`).
    GraphQLBuiltIn,

    /// Defined in a schema string that was loaded without a file path.
    Schema,

    /// Defined in a schema file on disk.
    SchemaFile(FilePosition),
}
impl SourceLocation {
    pub(crate) fn from_schema_ast_position(
        file_path: Option<&Path>,
        pos: &graphql_parser::Pos,
    ) -> Self {
        match file_path {
            Some(file_path) => Self::SchemaFile(FilePosition {
                col: pos.column,
                file: Box::new(file_path.to_path_buf()),
                line: pos.line,
            }),
            None => Self::Schema,
        }
    }
}
