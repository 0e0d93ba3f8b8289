/// Settings loading from ccrun.json
use crate::config::types::{CompilerConfig, LanguageKind, Result, RunnerError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const DEFAULT_SETTINGS_FILE: &str = "ccrun.json";

/// User-facing configuration, resolved once per invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct Settings {
    pub c_compiler: String,
    pub cpp_compiler: String,
    pub save_before_compile: bool,
    pub c_flags: String,
    pub cpp_flags: String,
    pub run_args: String,
    pub run_in_external_terminal: bool,
    pub show_notifications: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            c_compiler: "gcc".to_string(),
            cpp_compiler: "g++".to_string(),
            save_before_compile: true,
            c_flags: "-Wall -Wextra".to_string(),
            cpp_flags: "-Wall -Wextra".to_string(),
            run_args: String::new(),
            run_in_external_terminal: false,
            show_notifications: true,
        }
    }
}

impl Settings {
    /// Load settings from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            RunnerError::Config(format!(
                "Failed to read settings file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        serde_json::from_str(&content).map_err(|e| {
            RunnerError::Config(format!(
                "Failed to parse settings file {}: {}",
                path.as_ref().display(),
                e
            ))
        })
    }

    /// Load from `path` if it exists, defaults otherwise
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load_from_file(path)
        } else {
            log::debug!(
                "No settings file at {}, using defaults",
                path.as_ref().display()
            );
            Ok(Self::default())
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Compiler executable and default flags for `language`
    pub fn compiler_for(&self, language: LanguageKind) -> CompilerConfig {
        match language {
            LanguageKind::C => CompilerConfig {
                executable_path: self.c_compiler.clone(),
                default_flags: self.c_flags.clone(),
            },
            LanguageKind::Cpp => CompilerConfig {
                executable_path: self.cpp_compiler.clone(),
                default_flags: self.cpp_flags.clone(),
            },
        }
    }

    pub fn set_compiler(&mut self, language: LanguageKind, path: impl Into<String>) {
        match language {
            LanguageKind::C => self.c_compiler = path.into(),
            LanguageKind::Cpp => self.cpp_compiler = path.into(),
        }
    }
}

/// Where corrected settings are written back to
pub trait SettingsStore {
    fn persist(&self, settings: &Settings) -> Result<()>;
}

/// JSON file backed settings store
#[derive(Debug, Clone)]
pub struct JsonSettingsFile {
    path: PathBuf,
}

impl JsonSettingsFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `ccrun.json` in the current directory
    pub fn in_current_dir() -> Result<Self> {
        let dir = std::env::current_dir().map_err(|e| {
            RunnerError::Config(format!("Failed to get current directory: {}", e))
        })?;
        Ok(Self::new(dir.join(DEFAULT_SETTINGS_FILE)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Settings> {
        Settings::load_or_default(&self.path)
    }
}

impl SettingsStore for JsonSettingsFile {
    fn persist(&self, settings: &Settings) -> Result<()> {
        let content = settings.to_json()?;
        atomic_write(&self.path, content.as_bytes())?;
        log::info!("Settings written to {}", self.path.display());
        Ok(())
    }
}

/// Write to a temp file next to `target`, fsync, then rename over it.
fn atomic_write(target: &Path, content: &[u8]) -> std::io::Result<()> {
    let parent = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let temp_path = parent.join(format!(
        ".{}.tmp.{}",
        target.file_name().unwrap_or_default().to_string_lossy(),
        std::process::id()
    ));

    let written = fs::File::create(&temp_path).and_then(|mut f| {
        f.write_all(content)?;
        f.sync_all()
    });
    let result = written.and_then(|()| fs::rename(&temp_path, target));

    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    result
}
