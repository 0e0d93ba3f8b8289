use crate::config::types::Platform;
use std::path::{Path, PathBuf};

/// A compiled program ready to execute.
///
/// Pure descriptor; the terminal launchers and the integrated runner consume
/// it, nothing here spawns a process.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSpec {
    executable_name: String,
    working_directory: PathBuf,
    run_arguments: String,
}

impl RunSpec {
    pub fn new(
        executable_name: impl Into<String>,
        working_directory: impl Into<PathBuf>,
        run_arguments: impl Into<String>,
    ) -> Self {
        Self {
            executable_name: executable_name.into(),
            working_directory: working_directory.into(),
            run_arguments: run_arguments.into(),
        }
    }

    pub fn executable_name(&self) -> &str {
        &self.executable_name
    }

    pub fn run_arguments(&self) -> &str {
        &self.run_arguments
    }

    /// Working directory used for spawning
    pub fn directory(&self) -> &Path {
        &self.working_directory
    }

    /// Command line relative to [`RunSpec::directory`], e.g. `./foo 1 2`.
    pub fn executable_with_args(&self, platform: Platform) -> String {
        let qualifier = match platform {
            Platform::Windows => ".\\",
            _ => "./",
        };
        let mut executable = format!("{}{}", qualifier, self.executable_name);
        if executable.contains(char::is_whitespace) {
            executable = format!("\"{}\"", executable);
        }

        let args = self.run_arguments.trim();
        if args.is_empty() {
            executable
        } else {
            format!("{} {}", executable, args)
        }
    }
}
