/// Compile-run orchestrator
///
/// One invocation walks
/// Idle → Saving → ResolvingCompiler → AwaitingFlags → Compiling →
/// {CompileFailed | CompileSucceeded} → Running → Done,
/// skipping the optional states its action does not need. Every step that
/// can end the invocation early yields an [`Outcome`] rather than an error;
/// `Err` is reserved for I/O and spawn failures.
use crate::config::settings::{Settings, SettingsStore};
use crate::config::types::{CompileTarget, CompilerConfig, LanguageKind, Platform, Result};
use crate::exec::{CompilerInvocation, ExternalTerminal, ProcessHost, RunSpec};
use crate::observability::events::{self, InvocationId};
use crate::prompt::{PromptOutcome, Prompter};
use crate::toolchain::{language_for_id, CompilerResolver};
use crate::utils::output::{Notification, OutputSink};
use crate::verdict::{classify, CompileVerdict, FailureCause};
use crate::workflow::action::Action;
use crate::workflow::document::Document;
use std::ops::ControlFlow;
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WorkflowState {
    Idle,
    Saving,
    ResolvingCompiler,
    AwaitingFlags,
    Compiling,
    CompileFailed,
    CompileSucceeded,
    Running,
    Done,
}

/// Where the program was handed off to
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Launcher {
    /// Fire-and-forget in an OS terminal window
    External(ExternalTerminal),
    /// Ran in the invoking terminal; `exit_code` is `None` when killed by a signal
    Integrated { exit_code: Option<i32> },
}

/// How one invocation ended
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Compile-only action succeeded
    Compiled,
    Ran(Launcher),
    CompileFailed(FailureCause),
    /// Run requested but no compiled executable exists
    OutputMissing(PathBuf),
    /// Compiler unreachable and no usable replacement given
    CompilerNotFound(String),
    /// Document language is neither C nor C++; nothing was done
    UnsupportedLanguage(String),
    /// A prompt was dismissed; nothing further was spawned
    Cancelled,
}

impl Outcome {
    /// Failures surfaced to the user; silent outcomes are not failures.
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            Outcome::CompileFailed(_) | Outcome::OutputMissing(_) | Outcome::CompilerNotFound(_)
        )
    }

    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Compiled => "compiled",
            Outcome::Ran(Launcher::External(_)) => "ran_external",
            Outcome::Ran(Launcher::Integrated { .. }) => "ran_integrated",
            Outcome::CompileFailed(_) => "compile_failed",
            Outcome::OutputMissing(_) => "output_missing",
            Outcome::CompilerNotFound(_) => "compiler_not_found",
            Outcome::UnsupportedLanguage(_) => "unsupported_language",
            Outcome::Cancelled => "cancelled",
        }
    }
}

pub struct Orchestrator<'a> {
    settings: Settings,
    store: &'a dyn SettingsStore,
    prompter: &'a mut dyn Prompter,
    host: &'a dyn ProcessHost,
    sink: &'a dyn OutputSink,
    platform: Platform,
    force_external_terminal: bool,
    invocation_id: InvocationId,
    history: Vec<WorkflowState>,
}

impl<'a> Orchestrator<'a> {
    pub fn new(
        settings: Settings,
        store: &'a dyn SettingsStore,
        prompter: &'a mut dyn Prompter,
        host: &'a dyn ProcessHost,
        sink: &'a dyn OutputSink,
    ) -> Self {
        Self {
            settings,
            store,
            prompter,
            host,
            sink,
            platform: Platform::current(),
            force_external_terminal: false,
            invocation_id: InvocationId::new(),
            history: vec![WorkflowState::Idle],
        }
    }

    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    /// Prefer an external terminal for this orchestrator's runs without
    /// touching the settings that get persisted.
    pub fn with_external_terminal(mut self, force: bool) -> Self {
        self.force_external_terminal = force;
        self
    }

    /// Settings as of the end of the last invocation, including a corrected
    /// compiler path.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// States visited by the last invocation, in order
    pub fn history(&self) -> &[WorkflowState] {
        &self.history
    }

    pub fn invocation_id(&self) -> &InvocationId {
        &self.invocation_id
    }

    /// Run `action` against `document`.
    pub fn execute(&mut self, action: Action, document: &mut dyn Document) -> Result<Outcome> {
        self.invocation_id = InvocationId::new();
        self.history = vec![WorkflowState::Idle];
        events::workflow_start(
            &self.invocation_id,
            action.name(),
            &document.path().to_string_lossy(),
        );

        match self.drive(action, document) {
            Ok(outcome) => {
                self.transition(WorkflowState::Done);
                events::workflow_end(&self.invocation_id, outcome.label());
                Ok(outcome)
            }
            Err(e) => {
                events::workflow_end(&self.invocation_id, &format!("error: {}", e));
                Err(e)
            }
        }
    }

    fn drive(&mut self, action: Action, document: &mut dyn Document) -> Result<Outcome> {
        let language = match language_for_id(document.language_id()) {
            Some(language) => language,
            None => {
                log::debug!(
                    "Ignoring {}: language '{}' is not C or C++",
                    document.path().display(),
                    document.language_id()
                );
                return Ok(Outcome::UnsupportedLanguage(document.language_id().to_string()));
            }
        };
        let target = CompileTarget::new(document.path(), language, self.platform);

        if action.compiles() {
            if self.settings.save_before_compile {
                self.transition(WorkflowState::Saving);
                document.save()?;
            }

            if let ControlFlow::Break(outcome) = self.compile(action, &target)? {
                return Ok(outcome);
            }

            if !action.runs() {
                return Ok(Outcome::Compiled);
            }
        }

        self.run(action, &target)
    }

    fn compile(&mut self, action: Action, target: &CompileTarget) -> Result<ControlFlow<Outcome>> {
        self.transition(WorkflowState::ResolvingCompiler);
        let compiler = match self.resolve_compiler(target.language())? {
            Ok(compiler) => compiler,
            Err(path) => {
                self.sink.notify(Notification::Failure(format!(
                    "{} compiler '{}' not found",
                    target.language(),
                    path
                )));
                return Ok(ControlFlow::Break(Outcome::CompilerNotFound(path)));
            }
        };

        let flags = if action.prompts_for_flags() {
            self.transition(WorkflowState::AwaitingFlags);
            match self.prompter.prompt_flags(&compiler.default_flags)? {
                PromptOutcome::Value(flags) => flags,
                PromptOutcome::Cancelled => return Ok(ControlFlow::Break(Outcome::Cancelled)),
            }
        } else {
            compiler.default_flags.clone()
        };

        self.transition(WorkflowState::Compiling);
        let invocation = CompilerInvocation::new(&compiler.executable_path, target, &flags);
        events::compiler_spawned(&self.invocation_id, &invocation.command_line());
        self.sink.append_line(&format!("> {}", invocation.command_line()));

        let status = self.host.compile(&invocation, self.sink)?;
        match classify(status.exit_code, &status.transcript) {
            CompileVerdict::Succeeded => {
                self.transition(WorkflowState::CompileSucceeded);
                self.sink
                    .notify(Notification::Success("Compilation successful".to_string()));
                Ok(ControlFlow::Continue(()))
            }
            CompileVerdict::Failed(cause) => {
                self.transition(WorkflowState::CompileFailed);
                self.sink
                    .notify(Notification::Failure(format!("Compilation failed: {}", cause)));
                Ok(ControlFlow::Break(Outcome::CompileFailed(cause)))
            }
        }
    }

    /// Configured compiler, or one replacement path from the user.
    /// `Ok(Err(path))` names the compiler that could not be found.
    fn resolve_compiler(
        &mut self,
        language: LanguageKind,
    ) -> Result<std::result::Result<CompilerConfig, String>> {
        let compiler = CompilerResolver::new(&self.settings).resolve(language);
        if self.host.is_reachable(&compiler.executable_path) {
            return Ok(Ok(compiler));
        }

        log::warn!(
            "{} compiler '{}' is not reachable",
            language,
            compiler.executable_path
        );
        let replacement = match self.prompter.prompt_path()? {
            PromptOutcome::Value(path) if !path.trim().is_empty() => path.trim().to_string(),
            _ => return Ok(Err(compiler.executable_path)),
        };

        self.settings.set_compiler(language, replacement.as_str());
        self.store.persist(&self.settings)?;
        events::compiler_path_corrected(&self.invocation_id, &language.to_string(), &replacement);

        let compiler = CompilerResolver::new(&self.settings).resolve(language);
        if self.host.is_reachable(&compiler.executable_path) {
            Ok(Ok(compiler))
        } else {
            Ok(Err(compiler.executable_path))
        }
    }

    fn run(&mut self, action: Action, target: &CompileTarget) -> Result<Outcome> {
        self.transition(WorkflowState::Running);

        if !target.output_path().is_file() {
            self.sink.notify(Notification::Failure(format!(
                "{} does not exist, compile it first",
                target.output_path().display()
            )));
            return Ok(Outcome::OutputMissing(target.output_path().to_path_buf()));
        }

        let arguments = if action.prompts_for_arguments() {
            match self.prompter.prompt_run_args(&self.settings.run_args)? {
                PromptOutcome::Value(arguments) => arguments,
                PromptOutcome::Cancelled => return Ok(Outcome::Cancelled),
            }
        } else {
            self.settings.run_args.clone()
        };

        let spec = RunSpec::new(target.executable_name(), target.directory(), arguments);
        let command_line = spec.executable_with_args(self.platform);

        if self.settings.run_in_external_terminal || self.force_external_terminal {
            if let Some(terminal) = ExternalTerminal::for_platform(self.platform) {
                if self.host.launch_external(terminal, &spec) {
                    events::run_handoff(&self.invocation_id, "external", &command_line);
                    return Ok(Outcome::Ran(Launcher::External(terminal)));
                }
            }
            log::info!("No external terminal available, running in the current terminal");
        }

        events::run_handoff(&self.invocation_id, "integrated", &command_line);
        let exit_code = self.host.run_integrated(&spec, self.platform)?;
        Ok(Outcome::Ran(Launcher::Integrated { exit_code }))
    }

    fn transition(&mut self, next: WorkflowState) {
        let previous = self.history.last().copied().unwrap_or(WorkflowState::Idle);
        events::state_transition(
            &self.invocation_id,
            &format!("{:?}", previous),
            &format!("{:?}", next),
        );
        self.history.push(next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_outcomes() {
        assert!(Outcome::CompileFailed(FailureCause::NonZeroExit(1)).is_failure());
        assert!(Outcome::OutputMissing(PathBuf::from("foo")).is_failure());
        assert!(Outcome::CompilerNotFound("gcc".to_string()).is_failure());
        assert!(!Outcome::Cancelled.is_failure());
        assert!(!Outcome::UnsupportedLanguage("rust".to_string()).is_failure());
        assert!(!Outcome::Compiled.is_failure());
    }

    #[test]
    fn test_outcome_labels() {
        assert_eq!(Outcome::Compiled.label(), "compiled");
        assert_eq!(
            Outcome::Ran(Launcher::Integrated { exit_code: Some(0) }).label(),
            "ran_integrated"
        );
        assert_eq!(
            Outcome::Ran(Launcher::External(ExternalTerminal::Linux)).label(),
            "ran_external"
        );
    }
}
