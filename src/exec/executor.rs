use crate::config::types::{CompileTarget, Platform, Result, RunnerError};
use crate::exec::run_spec::RunSpec;
use crate::exec::terminal::ExternalTerminal;
use crate::utils::output::{stream_lines, OutputSink};
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// Fully assembled compiler command line
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompilerInvocation {
    pub program: String,
    pub args: Vec<String>,
    pub working_dir: PathBuf,
}

impl CompilerInvocation {
    /// `<program> <source> -o <output> <flags...>`, run in the source directory.
    pub fn new(program: &str, target: &CompileTarget, flags: &str) -> Self {
        let mut args = vec![
            target.source_path().to_string_lossy().into_owned(),
            "-o".to_string(),
            target.output_path().to_string_lossy().into_owned(),
        ];
        args.extend(flags.split_whitespace().map(str::to_string));

        Self {
            program: program.to_string(),
            args,
            working_dir: target.directory(),
        }
    }

    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Exit status and captured output of a finished compiler
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompileStatus {
    pub exit_code: Option<i32>,
    pub transcript: String,
}

/// Everything the workflow needs from the operating system.
pub trait ProcessHost {
    fn is_reachable(&self, program: &str) -> bool {
        crate::toolchain::is_reachable(program)
    }

    /// Run the compiler to completion, streaming its output into `sink`.
    fn compile(&self, invocation: &CompilerInvocation, sink: &dyn OutputSink)
        -> Result<CompileStatus>;

    fn launch_external(&self, terminal: ExternalTerminal, spec: &RunSpec) -> bool {
        terminal.launch(spec)
    }

    /// Run the program in the invoking terminal and wait for it.
    fn run_integrated(&self, spec: &RunSpec, platform: Platform) -> Result<Option<i32>>;
}

/// [`ProcessHost`] backed by real child processes
#[derive(Debug, Clone, Default)]
pub struct SystemExecutor;

impl SystemExecutor {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessHost for SystemExecutor {
    fn compile(
        &self,
        invocation: &CompilerInvocation,
        sink: &dyn OutputSink,
    ) -> Result<CompileStatus> {
        let mut child = Command::new(&invocation.program)
            .args(&invocation.args)
            .current_dir(&invocation.working_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                RunnerError::Process(format!("Failed to start {}: {}", invocation.program, e))
            })?;

        let transcript = stream_lines(child.stdout.take(), child.stderr.take(), sink);
        let status = child.wait()?;

        Ok(CompileStatus {
            exit_code: status.code(),
            transcript,
        })
    }

    fn run_integrated(&self, spec: &RunSpec, platform: Platform) -> Result<Option<i32>> {
        let command_line = spec.executable_with_args(platform);
        let mut command = match platform {
            Platform::Windows => {
                let mut command = Command::new("cmd");
                command.arg("/C").arg(&command_line);
                command
            }
            _ => {
                let mut command = Command::new("sh");
                command.arg("-c").arg(&command_line);
                command
            }
        };

        let status = command
            .current_dir(spec.directory())
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| RunnerError::Process(format!("Failed to run {}: {}", command_line, e)))?;

        Ok(status.code())
    }
}
