use crate::config::types::Result;
use crate::toolchain::language_id_for_path;
use std::path::{Path, PathBuf};

/// The source file a workflow acts on
pub trait Document {
    fn path(&self) -> &Path;
    fn language_id(&self) -> &str;
    /// Persist pending edits before compiling.
    fn save(&mut self) -> Result<()>;
}

/// A source file on disk
#[derive(Debug, Clone)]
pub struct SourceFile {
    path: PathBuf,
    language_id: String,
}

impl SourceFile {
    /// Language detected from the file extension
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let language_id = language_id_for_path(&path).to_string();
        Self { path, language_id }
    }

    pub fn with_language(path: impl Into<PathBuf>, language_id: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            language_id: language_id.into(),
        }
    }
}

impl Document for SourceFile {
    fn path(&self) -> &Path {
        &self.path
    }

    fn language_id(&self) -> &str {
        &self.language_id
    }

    // Contents already live on disk; only confirm the file is still there.
    fn save(&mut self) -> Result<()> {
        std::fs::metadata(&self.path)?;
        log::debug!("{} has no unsaved changes", self.path.display());
        Ok(())
    }
}
