/// Core types shared by the compile-and-run workflow
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Source language of the active document
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum LanguageKind {
    #[serde(rename = "c")]
    C,
    #[serde(rename = "cpp")]
    Cpp,
}

impl std::fmt::Display for LanguageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LanguageKind::C => write!(f, "C"),
            LanguageKind::Cpp => write!(f, "C++"),
        }
    }
}

/// Host platform discriminator
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Linux,
    MacOs,
    Other,
}

impl Platform {
    /// Platform this binary was built for
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            Platform::Windows
        } else if cfg!(target_os = "linux") {
            Platform::Linux
        } else if cfg!(target_os = "macos") {
            Platform::MacOs
        } else {
            Platform::Other
        }
    }

    /// Suffix appended to compiled executables
    pub fn executable_suffix(self) -> &'static str {
        match self {
            Platform::Windows => ".exe",
            _ => "",
        }
    }
}

/// One source file to compile, with its derived output path
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompileTarget {
    source_path: PathBuf,
    language: LanguageKind,
    output_path: PathBuf,
}

impl CompileTarget {
    /// Relative sources are anchored to the current directory, since the
    /// compiler runs inside the source directory.
    pub fn new(source_path: impl Into<PathBuf>, language: LanguageKind, platform: Platform) -> Self {
        let source_path = source_path.into();
        let source_path = std::path::absolute(&source_path).unwrap_or(source_path);
        let output_path = Self::output_path_for(&source_path, platform);
        Self {
            source_path,
            language,
            output_path,
        }
    }

    /// Strip the source extension and append the platform executable suffix.
    pub fn output_path_for(source_path: &Path, platform: Platform) -> PathBuf {
        let mut output = source_path.with_extension("").into_os_string();
        output.push(platform.executable_suffix());
        PathBuf::from(output)
    }

    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    pub fn language(&self) -> LanguageKind {
        self.language
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Directory the compiler and the program are spawned in
    pub fn directory(&self) -> PathBuf {
        match self.source_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    /// File name of the compiled executable
    pub fn executable_name(&self) -> String {
        self.output_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Compiler executable and its default flags for one language
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CompilerConfig {
    pub executable_path: String,
    pub default_flags: String,
}

/// Error types for ccrun
#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Process error: {0}")]
    Process(String),

    #[error("Prompt error: {0}")]
    Prompt(String),
}

impl From<serde_json::Error> for RunnerError {
    fn from(err: serde_json::Error) -> Self {
        RunnerError::Config(err.to_string())
    }
}

/// Result type for ccrun operations
pub type Result<T> = std::result::Result<T, RunnerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path_strips_extension_on_unix_like() {
        let target = CompileTarget::new("/work/src/foo.c", LanguageKind::C, Platform::Linux);
        assert_eq!(target.output_path(), Path::new("/work/src/foo"));
        assert_eq!(target.executable_name(), "foo");
    }

    #[test]
    fn test_output_path_appends_exe_on_windows() {
        let target = CompileTarget::new("/work/src/bar.cpp", LanguageKind::Cpp, Platform::Windows);
        assert_eq!(target.output_path(), Path::new("/work/src/bar.exe"));
        assert_eq!(target.executable_name(), "bar.exe");
    }

    #[test]
    fn test_output_path_only_strips_last_extension() {
        let output = CompileTarget::output_path_for(Path::new("dir/my.test.cc"), Platform::MacOs);
        assert_eq!(output, PathBuf::from("dir/my.test"));
    }

    #[test]
    fn test_bare_file_name_resolves_against_current_dir() {
        let cwd = std::env::current_dir().unwrap();
        let target = CompileTarget::new("main.c", LanguageKind::C, Platform::Linux);
        assert_eq!(target.source_path(), cwd.join("main.c"));
        assert_eq!(target.directory(), cwd);
        assert_eq!(target.output_path(), cwd.join("main"));
    }

    #[test]
    fn test_relative_source_with_directory_is_absolute() {
        let cwd = std::env::current_dir().unwrap();
        let target = CompileTarget::new("sub/prog.c", LanguageKind::C, Platform::Linux);
        assert!(target.source_path().is_absolute());
        assert_eq!(target.source_path(), cwd.join("sub").join("prog.c"));
        assert_eq!(target.directory(), cwd.join("sub"));
        assert_eq!(target.output_path(), cwd.join("sub").join("prog"));
    }

    #[test]
    fn test_language_display() {
        assert_eq!(LanguageKind::C.to_string(), "C");
        assert_eq!(LanguageKind::Cpp.to_string(), "C++");
    }
}
