use std::collections::HashSet;
use std::path::PathBuf;
use walkdir::WalkDir;

pub(crate) const DEFAULT_GRAPHQL_FILE_EXTS: [&str; 2] = ["graphql", "graphqls"];

/// The schema files found at or under a set of input paths.
#[derive(Debug, Default)]
pub(crate) struct SchemaFiles {
    pub errors: Vec<anyhow::Error>,
    pub file_paths: Vec<PathBuf>,
    pub num_skipped: usize,
}

/// Recursively collect every file at or under `paths` whose extension is one
/// of `file_exts` (with or without a leading `.`).
///
/// A single file path given on its own is always collected, whatever its
/// extension.
pub(crate) fn collect_schema_files(
    paths: &[PathBuf],
    file_exts: &[String],
) -> SchemaFiles {
    let file_exts: HashSet<&str> =
        file_exts.iter()
            .map(|ext| ext.trim_start_matches('.'))
            .collect();

    log::debug!("Scanning {} input paths...", paths.len());
    let mut found = SchemaFiles::default();
    for path in paths {
        for entry in WalkDir::new(path.as_path()).follow_links(true) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    log::trace!(
                        "Encountered an error while iterating recursive \
                        filesystem entities at/under {path:#?}."
                    );
                    found.errors.push(err.into());
                    continue
                },
            };

            let entry_path = entry.path();
            if !entry.file_type().is_file() {
                log::trace!("Skipping non-file: {entry_path:#?}.");
                continue
            }

            let has_graphql_ext =
                entry_path.extension()
                    .map(|ext| file_exts.contains(&*ext.to_string_lossy()))
                    .unwrap_or(false);
            if !has_graphql_ext {
                log::trace!("Skipping non-graphql file: {entry_path:#?}.");
                found.num_skipped += 1;
                continue
            }

            match std::fs::canonicalize(entry_path) {
                Ok(file_path) => found.file_paths.push(file_path),
                Err(err) => found.errors.push(err.into()),
            }
        }
    }

    if found.file_paths.is_empty() && paths.len() == 1 && paths[0].is_file() {
        log::warn!(
            "Proceeding with {:#?} even though it doesn't match any of the \
            GraphQL file extensions ({}).",
            paths[0],
            file_exts.iter()
                .map(|ext| format!("`.{ext}`"))
                .collect::<Vec<_>>()
                .join(", "),
        );
        found.num_skipped = found.num_skipped.saturating_sub(1);
        match std::fs::canonicalize(&paths[0]) {
            Ok(file_path) => found.file_paths.push(file_path),
            Err(err) => found.errors.push(err.into()),
        }
    }

    log::debug!("Found {} GraphQL files.", found.file_paths.len());
    found
}
