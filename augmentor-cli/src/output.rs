//! Directory sink and manifest writer for the `augmentor` driver.

use std::collections::{HashMap, HashSet};
use std::io::Write;

use augmentor::{
    CollisionPolicy, Encoding, FragmentSink, GenerationReport, ReportEntry, SinkError,
};
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::{Dir, OpenOptions};
use serde::Serialize;

use crate::error::CliError;

/// Name of the manifest written next to the fragments.
pub const MANIFEST_FILE: &str = "manifest.json";

/// Writes each fragment to `<out_dir>/<key>.<extension>`.
///
/// Keys are tracked per sink, so a key written twice within one pass is
/// subject to the collision policy even though files from earlier runs are
/// simply replaced.
#[derive(Debug)]
pub struct DirectorySink {
    root: Utf8PathBuf,
    dir: Dir,
    extension: String,
    policy: CollisionPolicy,
    seen: HashSet<String>,
    files: Vec<Utf8PathBuf>,
}

impl DirectorySink {
    /// Opens (creating when needed) `out_dir` for writing.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Io`] when the directory cannot be created.
    pub fn create(
        out_dir: &Utf8Path,
        extension: &str,
        policy: CollisionPolicy,
    ) -> Result<Self, CliError> {
        Ok(Self {
            root: out_dir.to_path_buf(),
            dir: ensure_dir(out_dir)?,
            extension: extension.to_owned(),
            policy,
            seen: HashSet::new(),
            files: Vec::new(),
        })
    }

    /// Returns the file name used for `key`.
    #[must_use]
    pub fn file_name(&self, key: &str) -> String {
        format!("{key}.{}", self.extension)
    }

    /// Returns the files written so far, in first-write order.
    #[must_use]
    pub fn files(&self) -> &[Utf8PathBuf] {
        &self.files
    }

    /// Writes the manifest describing `report`.
    ///
    /// Entries sharing a key describe one file, so only the last of them is
    /// listed, at the position of the first.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::ManifestJson`] or [`CliError::Io`] when the
    /// manifest cannot be serialized or written.
    pub fn write_manifest(&self, report: &GenerationReport) -> Result<Utf8PathBuf, CliError> {
        let manifest = Manifest {
            encoding: Encoding::Utf8,
            fragments: retained_entries(report)
                .into_iter()
                .map(|entry| ManifestEntry {
                    key: &entry.key,
                    file: self.file_name(&entry.key),
                    container: &entry.container,
                    name: &entry.name,
                    kind: entry.kind.as_str(),
                })
                .collect(),
        };
        let content = serde_json::to_string_pretty(&manifest)?;
        let path = self.root.join(MANIFEST_FILE);
        write_file(&self.dir, MANIFEST_FILE, &content).map_err(|io_err| CliError::Io {
            path: path.clone(),
            source: io_err,
        })?;
        Ok(path)
    }
}

impl FragmentSink for DirectorySink {
    fn register(&mut self, key: &str, text: &str, encoding: Encoding) -> Result<(), SinkError> {
        let is_new = self.seen.insert(key.to_owned());
        if !is_new && self.policy == CollisionPolicy::Reject {
            return Err(SinkError::Collision(key.to_owned()));
        }

        let file_name = self.file_name(key);
        write_file(&self.dir, &file_name, text).map_err(|io_err| SinkError::Io {
            key: key.to_owned(),
            source: io_err,
        })?;

        let path = self.root.join(&file_name);
        if is_new {
            tracing::info!(%path, %encoding, "wrote fragment");
            self.files.push(path);
        } else {
            tracing::warn!(%path, key, "fragment key repeated; file overwritten");
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
struct Manifest<'a> {
    encoding: Encoding,
    fragments: Vec<ManifestEntry<'a>>,
}

#[derive(Debug, Serialize)]
struct ManifestEntry<'a> {
    key: &'a str,
    file: String,
    container: &'a str,
    name: &'a str,
    kind: &'static str,
}

/// Collapses repeated keys to their last entry, kept in first-seen order.
fn retained_entries(report: &GenerationReport) -> Vec<&ReportEntry> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut retained: Vec<&ReportEntry> = Vec::with_capacity(report.entries.len());
    for entry in &report.entries {
        match positions.get(entry.key.as_str()) {
            Some(&position) => {
                if let Some(slot) = retained.get_mut(position) {
                    *slot = entry;
                }
            }
            None => {
                positions.insert(&entry.key, retained.len());
                retained.push(entry);
            }
        }
    }
    retained
}

fn write_file(dir: &Dir, file_name: &str, content: &str) -> std::io::Result<()> {
    let mut file = dir.open_with(
        file_name,
        OpenOptions::new().write(true).create(true).truncate(true),
    )?;
    file.write_all(content.as_bytes())
}

fn ensure_dir(path: &Utf8Path) -> Result<Dir, CliError> {
    match Dir::open_ambient_dir(path, ambient_authority()) {
        Ok(dir) => Ok(dir),
        Err(open_err) if open_err.kind() == std::io::ErrorKind::NotFound => {
            Dir::create_ambient_dir_all(path, ambient_authority()).map_err(|io_err| {
                CliError::Io {
                    path: path.to_path_buf(),
                    source: io_err,
                }
            })?;
            Dir::open_ambient_dir(path, ambient_authority()).map_err(|io_err| CliError::Io {
                path: path.to_path_buf(),
                source: io_err,
            })
        }
        Err(open_err) => Err(CliError::Io {
            path: path.to_path_buf(),
            source: open_err,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{Result, anyhow, ensure};
    use augmentor::NodeKind;
    use serde_json::Value;
    use rstest::{fixture, rstest};
    use tempfile::TempDir;

    #[fixture]
    fn out_dir() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn utf8(dir: &TempDir) -> Result<Utf8PathBuf> {
        Utf8PathBuf::from_path_buf(dir.path().join("fragments"))
            .map_err(|path| anyhow!("non-UTF-8 path: {}", path.display()))
    }

    fn read(root: &Utf8Path, name: &str) -> Result<String> {
        let dir = Dir::open_ambient_dir(root, ambient_authority())?;
        Ok(dir.read_to_string(name)?)
    }

    #[rstest]
    fn writes_one_file_per_key(out_dir: TempDir) -> Result<()> {
        let root = utf8(&out_dir)?;
        let mut sink = DirectorySink::create(&root, "cs", CollisionPolicy::Overwrite)?;
        sink.register("Foo_generated", "foo", Encoding::Utf8)?;
        sink.register("Bar_generated", "bar", Encoding::Utf8)?;
        assert_eq!(
            sink.files(),
            [root.join("Foo_generated.cs"), root.join("Bar_generated.cs")]
        );
        assert_eq!(read(&root, "Bar_generated.cs")?, "bar");
        Ok(())
    }

    #[rstest]
    fn overwrite_replaces_the_file(out_dir: TempDir) -> Result<()> {
        let root = utf8(&out_dir)?;
        let mut sink = DirectorySink::create(&root, "cs", CollisionPolicy::Overwrite)?;
        sink.register("Baz_generated", "first", Encoding::Utf8)?;
        sink.register("Baz_generated", "second", Encoding::Utf8)?;
        assert_eq!(sink.files().len(), 1);
        assert_eq!(read(&root, "Baz_generated.cs")?, "second");
        Ok(())
    }

    #[rstest]
    fn reject_keeps_the_first_file(out_dir: TempDir) -> Result<()> {
        let root = utf8(&out_dir)?;
        let mut sink = DirectorySink::create(&root, "txt", CollisionPolicy::Reject)?;
        sink.register("Baz_generated", "first", Encoding::Utf8)?;
        let err = sink
            .register("Baz_generated", "second", Encoding::Utf8)
            .expect_err("duplicate keys are refused");
        assert!(matches!(err, SinkError::Collision(_)));
        assert_eq!(read(&root, "Baz_generated.txt")?, "first");
        Ok(())
    }

    fn entry(key: &str, container: &str) -> ReportEntry {
        ReportEntry {
            key: key.to_owned(),
            container: container.to_owned(),
            name: key.trim_end_matches("_generated").to_owned(),
            kind: NodeKind::Class,
        }
    }

    #[rstest]
    fn manifest_lists_each_file_once_with_the_last_entry(out_dir: TempDir) -> Result<()> {
        let root = utf8(&out_dir)?;
        let sink = DirectorySink::create(&root, "cs", CollisionPolicy::Overwrite)?;
        let report = GenerationReport {
            entries: vec![
                entry("Baz_generated", "Acme"),
                entry("Foo_generated", "Acme"),
                entry("Baz_generated", "Beta"),
            ],
        };
        sink.write_manifest(&report)?;

        let manifest: Value = serde_json::from_str(&read(&root, MANIFEST_FILE)?)?;
        let fragments = manifest["fragments"]
            .as_array()
            .ok_or_else(|| anyhow!("fragments should be an array"))?;
        let listed: Vec<_> = fragments
            .iter()
            .map(|item| (item["file"].as_str(), item["container"].as_str()))
            .collect();
        ensure!(
            listed
                == [
                    (Some("Baz_generated.cs"), Some("Beta")),
                    (Some("Foo_generated.cs"), Some("Acme")),
                ],
            "manifest listed {listed:?}"
        );
        Ok(())
    }
}
