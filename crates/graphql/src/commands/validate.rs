use crate::commands::schema_files;
use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libgraphql_autocomplete::schema::SchemaBuilder;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct ValidateCmd {
    #[arg(
        default_values_t=schema_files::DEFAULT_GRAPHQL_FILE_EXTS.map(String::from),
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        help="Paths to one or more GraphQL files or directories containing \
             GraphQL files which need to be validated.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

#[inherent::inherent]
impl RunnableCommand for ValidateCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let found = schema_files::collect_schema_files(
            &self.file_or_dir_paths,
            &self.graphql_file_exts,
        );
        if !found.errors.is_empty() {
            return CommandResult::stderr(format_args!(
                "{} Errors locating GraphQL files: {:#?}",
                output_utils::RED_X,
                found.errors,
            ));
        }

        let schema = SchemaBuilder::new()
            .load_files(found.file_paths.clone())
            .and_then(|builder| builder.build());

        match schema {
            Ok(schema) => CommandResult::stdout(format_args!(
                concat!(
                    "{} All GraphQL validated successfully:\n",
                    "  * Analyzed {} files.\n",
                    "  * Skipped {} non-graphql files.\n",
                    "  * Validated {} type definitions.\n",
                    "  * Validated {} directive definitions.",
                ),
                output_utils::GREEN_CHECK,
                found.file_paths.len(),
                found.num_skipped,
                schema.all_types().len(),
                schema.all_directives().len(),
            )),

            Err(err) => CommandResult::stderr(format_args!(
                "{} Errors validating schema: {err:#?}",
                output_utils::RED_X,
            )),
        }
    }
}
