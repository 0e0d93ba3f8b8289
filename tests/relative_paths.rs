//! Relative source paths
//!
//! Runs from the parent of the source directory, so it lives in its own test
//! binary: changing the current directory is process-wide.

#![cfg(unix)]

use ccrun::config::settings::{Settings, SettingsStore};
use ccrun::exec::SystemExecutor;
use ccrun::prompt::{PromptOutcome, Prompter};
use ccrun::utils::output::MemorySink;
use ccrun::workflow::{Action, Launcher, Orchestrator, Outcome, SourceFile};
use ccrun::{Platform, Result};

struct NoPrompts;

impl Prompter for NoPrompts {
    fn prompt_flags(&mut self, _default_flags: &str) -> Result<PromptOutcome<String>> {
        panic!("unexpected flags prompt")
    }

    fn prompt_run_args(&mut self, _default_args: &str) -> Result<PromptOutcome<String>> {
        panic!("unexpected run_args prompt")
    }

    fn prompt_path(&mut self) -> Result<PromptOutcome<String>> {
        panic!("unexpected path prompt")
    }
}

struct NoStore;

impl SettingsStore for NoStore {
    fn persist(&self, _settings: &Settings) -> Result<()> {
        panic!("settings should not be written")
    }
}

// `sh` stands in for the compiler and writes a runnable script to the
// output path it receives after `-o`.
#[test]
fn test_compile_and_run_relative_source_in_subdirectory() {
    let dir = tempfile::tempdir().unwrap();
    let sub = dir.path().join("sub");
    std::fs::create_dir(&sub).unwrap();
    std::fs::write(
        sub.join("prog.c"),
        "printf '#!/bin/sh\\nexit 5\\n' > \"$2\"\nchmod +x \"$2\"\necho 'Compilation finished'\n",
    )
    .unwrap();

    let previous = std::env::current_dir().unwrap();
    std::env::set_current_dir(dir.path()).unwrap();

    let host = SystemExecutor::new();
    let sink = MemorySink::new();
    let mut prompter = NoPrompts;
    let mut doc = SourceFile::open("sub/prog.c");
    let settings = Settings {
        c_compiler: "sh".to_string(),
        c_flags: String::new(),
        ..Settings::default()
    };

    let mut orchestrator = Orchestrator::new(settings, &NoStore, &mut prompter, &host, &sink)
        .with_platform(Platform::Linux);
    let compiled = orchestrator.execute(Action::Compile, &mut doc).unwrap();
    let ran = orchestrator.execute(Action::Run, &mut doc).unwrap();

    std::env::set_current_dir(previous).unwrap();

    assert_eq!(compiled, Outcome::Compiled, "sink lines: {:?}", sink.lines());
    assert!(sub.join("prog").is_file());
    assert!(sink.lines().contains(&"Compilation finished".to_string()));
    assert_eq!(ran, Outcome::Ran(Launcher::Integrated { exit_code: Some(5) }));
}
