//! Reads syntax documents handed over by the front end.

use augmentor::{SyntaxDocument, SyntaxTree};
use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;

use crate::error::CliError;

/// Reads and lowers the JSON syntax document at `path`.
///
/// # Errors
///
/// Returns [`CliError::Io`] when the file cannot be read and
/// [`CliError::Augment`] when the JSON or its structure is invalid.
pub fn read_tree(path: &Utf8Path) -> Result<SyntaxTree, CliError> {
    let parent = match path.parent() {
        Some(dir) if !dir.as_str().is_empty() => dir,
        _ => Utf8Path::new("."),
    };
    let file_name = path.file_name().ok_or_else(|| CliError::Io {
        path: path.to_path_buf(),
        source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "path has no file name"),
    })?;

    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(|io_err| CliError::Io {
        path: parent.to_path_buf(),
        source: io_err,
    })?;
    let text = dir.read_to_string(file_name).map_err(|io_err| CliError::Io {
        path: path.to_path_buf(),
        source: io_err,
    })?;

    let tree = SyntaxDocument::from_json(&text)?.to_tree()?;
    tracing::debug!(path = %path, nodes = tree.node_count(), "syntax document loaded");
    Ok(tree)
}
