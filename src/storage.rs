use std::path::{Path, PathBuf};

use anyhow::Context;
use bytes::Bytes;
use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

/// Shared directory of uploaded images, served back under `/uploads/`.
///
/// Files are keyed by sanitized name only; a later upload with the same name replaces the
/// earlier one. Uploads are not tied to accounts.
#[derive(Debug, Clone)]
pub struct UploadStore {
    root: PathBuf,
}

impl UploadStore {
    pub async fn open(root: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let root = root.into();
        tokio::fs::create_dir_all(&root)
            .await
            .with_context(|| format!("create upload dir {}", root.display()))?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Writes `body` under `filename`, which must come from [`sanitize_filename`].
    pub async fn put(&self, filename: &str, body: Bytes) -> anyhow::Result<()> {
        let path = self.root.join(filename);
        tokio::fs::write(&path, &body)
            .await
            .with_context(|| format!("write upload {}", path.display()))?;
        debug!(%filename, bytes = body.len(), "upload stored");
        Ok(())
    }

    /// Name of the most recently modified upload, if any.
    pub async fn latest(&self) -> anyhow::Result<Option<String>> {
        let mut entries = tokio::fs::read_dir(&self.root)
            .await
            .with_context(|| format!("read upload dir {}", self.root.display()))?;

        let mut newest: Option<(std::time::SystemTime, String)> = None;
        while let Some(entry) = entries.next_entry().await.context("list uploads")? {
            let meta = entry.metadata().await.context("stat upload")?;
            if !meta.is_file() {
                continue;
            }
            let modified = meta.modified().context("upload mtime")?;
            let name = entry.file_name().to_string_lossy().into_owned();
            let newer = match &newest {
                Some((t, n)) => (modified, &name) > (*t, n),
                None => true,
            };
            if newer {
                newest = Some((modified, name));
            }
        }
        Ok(newest.map(|(_, name)| name))
    }
}

/// Reduces a client-supplied filename to a safe flat name.
///
/// Path separators and whitespace become `_`, anything outside `[A-Za-z0-9_.-]` is dropped,
/// and leading/trailing dots and underscores are stripped. `None` when nothing is left.
pub fn sanitize_filename(raw: &str) -> Option<String> {
    lazy_static! {
        static ref UNSAFE: Regex = Regex::new(r"[^A-Za-z0-9_.-]").unwrap();
    }
    let spaced: String = raw
        .chars()
        .map(|c| if c == '/' || c == '\\' { ' ' } else { c })
        .collect();
    let joined = spaced.split_whitespace().collect::<Vec<_>>().join("_");
    let cleaned = UNSAFE.replace_all(&joined, "");
    let trimmed = cleaned.trim_matches(|c| c == '.' || c == '_');
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
