use crate::commands::schema_files;
use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libgraphql_autocomplete::candidates::KnownFragment;
use libgraphql_autocomplete::completion::CompletionResult;
use libgraphql_autocomplete::completion::CursorToken;
use libgraphql_autocomplete::completion::HintRequest;
use libgraphql_autocomplete::completion::Hinter;
use libgraphql_autocomplete::completion::TokenClass;
use libgraphql_autocomplete::fuzzy::RankOptions;
use libgraphql_autocomplete::grammar::ParserStateChain;
use libgraphql_autocomplete::schema::SchemaBuilder;
use std::fmt::Write;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct HintCmd {
    #[arg(
        help="The grammar states enclosing the cursor, outermost first, \
             written as `Kind[#step][:name][@type]` and separated by `>` \
             (e.g. `Document > SelectionSet > Field:hero > SelectionSet`).",
        long,
    )]
    chain: ParserStateChain,

    #[arg(
        help="Fragments to offer at fragment spreads, as `Name:TypeCondition`.",
        long="fragment",
        value_name="NAME:TYPE",
    )]
    fragments: Vec<KnownFragment>,

    #[arg(
        default_values_t=schema_files::DEFAULT_GRAPHQL_FILE_EXTS.map(String::from),
        help="Set of file extensions to filter to when searching for schema \
             files within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        default_value_t=0,
        help="The cursor's line, copied into the result.",
        long,
    )]
    line: usize,

    #[arg(
        default_value_t=RankOptions::default().max_proximity,
        help="Candidates scoring above this proximity are filtered out.",
        long,
    )]
    max_proximity: f64,

    #[arg(
        help="Return nothing, rather than every candidate, when no candidate \
             is close enough to the typed text.",
        long,
    )]
    no_fallback: bool,

    #[arg(
        help="Paths to one or more GraphQL schema files or directories \
             containing them.",
        long,
        num_args=1..,
        required=true,
    )]
    schema: Vec<PathBuf>,

    #[arg(
        default_value="",
        help="The text of the token under the cursor.",
        long,
    )]
    token: String,

    #[arg(
        help="The class of the token under the cursor (e.g. `property`, \
             `punctuation`). Omit when the cursor is on whitespace.",
        long,
    )]
    token_class: Option<TokenClass>,

    #[arg(
        help="Column where the token under the cursor ends. Defaults to \
             `--token-start` plus the token's length.",
        long,
    )]
    token_end: Option<usize>,

    #[arg(
        default_value_t=0,
        help="Column where the token under the cursor starts.",
        long,
    )]
    token_start: usize,
}

#[inherent::inherent]
impl RunnableCommand for HintCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let found = schema_files::collect_schema_files(
            &self.schema,
            &self.graphql_file_exts,
        );
        if !found.errors.is_empty() {
            return CommandResult::stderr(format_args!(
                "{} Errors locating GraphQL schema files: {:#?}",
                output_utils::RED_X,
                found.errors,
            ));
        }

        let schema = match SchemaBuilder::new()
            .load_files(found.file_paths)
            .and_then(|builder| builder.build()) {
            Ok(schema) => schema,
            Err(err) => return CommandResult::stderr(format_args!(
                "{} Errors loading schema: {err:#?}",
                output_utils::RED_X,
            )),
        };

        let token_end = self.token_end.unwrap_or_else(|| {
            self.token_start + self.token.chars().count()
        });
        let token = CursorToken::new(
            self.token_class,
            self.token.as_str(),
            self.token_start,
            token_end,
        );
        let request = HintRequest::new(self.chain, token)
            .with_known_fragments(self.fragments)
            .with_line(self.line);

        let hinter = Hinter::new(RankOptions {
            max_proximity: self.max_proximity,
            fall_back_to_unfiltered: !self.no_fallback,
        });
        match hinter.hint(Some(&schema), &request) {
            Some(result) => CommandResult::stdout(format_args!(
                "{}",
                format_completion_result(&result),
            )),
            None => CommandResult::stdout(format_args!(
                "No completions at `{}`.",
                request.chain,
            )),
        }
    }
}

fn format_completion_result(result: &CompletionResult) -> String {
    let mut out = format!(
        "{} {} completion(s) replacing line {}, columns {}..{}:",
        output_utils::GREEN_CHECK,
        result.candidates.len(),
        result.line,
        result.range_start,
        result.range_end,
    );
    for candidate in &result.candidates {
        let _ = write!(out, "\n  * {}", candidate.text());
        if let Some(type_ref) = candidate.type_ref() {
            let _ = write!(out, ": {type_ref}");
        }
        if let Some(description) = candidate.description() {
            let _ = write!(out, " - {description}");
        }
        if let Some(reason) = candidate.deprecation_reason() {
            let _ = write!(out, " (deprecated: {reason})");
        }
    }
    out
}
