/// External terminal launching
///
/// One capability, three platform variants. Launches are fire-and-forget:
/// the terminal is spawned and never waited on, so only the spawn itself can
/// report failure.
use crate::config::types::Platform;
use crate::exec::run_spec::RunSpec;
use std::path::PathBuf;
use std::process::{Command, Stdio};

const PAUSE_PROMPT: &str = "Press any key to continue...";

/// OS terminal emulator able to host the program in its own window
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExternalTerminal {
    Windows,
    Linux,
    MacOs,
}

/// One candidate command that opens a terminal
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TerminalCommand {
    pub program: String,
    pub args: Vec<String>,
    pub current_dir: PathBuf,
}

impl ExternalTerminal {
    pub fn for_platform(platform: Platform) -> Option<Self> {
        match platform {
            Platform::Windows => Some(ExternalTerminal::Windows),
            Platform::Linux => Some(ExternalTerminal::Linux),
            Platform::MacOs => Some(ExternalTerminal::MacOs),
            Platform::Other => None,
        }
    }

    fn platform(self) -> Platform {
        match self {
            ExternalTerminal::Windows => Platform::Windows,
            ExternalTerminal::Linux => Platform::Linux,
            ExternalTerminal::MacOs => Platform::MacOs,
        }
    }

    /// Commands to try in order; the first one that spawns wins.
    pub fn candidates(self, spec: &RunSpec) -> Vec<TerminalCommand> {
        let command_line = spec.executable_with_args(self.platform());
        let current_dir = spec.directory().to_path_buf();

        match self {
            // `start` reads its first argument as the window title only when
            // quoted; an empty argument is always passed as `""`.
            ExternalTerminal::Windows => vec![TerminalCommand {
                program: "cmd".to_string(),
                args: vec![
                    "/C".to_string(),
                    "start".to_string(),
                    String::new(),
                    "cmd".to_string(),
                    "/C".to_string(),
                    format!("{} & echo. & pause", command_line),
                ],
                current_dir,
            }],
            ExternalTerminal::Linux => {
                let script = format!(
                    "{}; echo; read -n1 -s -r -p {}",
                    command_line,
                    shell_quote(PAUSE_PROMPT)
                );
                vec![
                    TerminalCommand {
                        program: "gnome-terminal".to_string(),
                        args: vec![
                            "--".to_string(),
                            "bash".to_string(),
                            "-c".to_string(),
                            script.clone(),
                        ],
                        current_dir: current_dir.clone(),
                    },
                    TerminalCommand {
                        program: "xterm".to_string(),
                        args: vec![
                            "-e".to_string(),
                            "bash".to_string(),
                            "-c".to_string(),
                            script,
                        ],
                        current_dir,
                    },
                ]
            }
            ExternalTerminal::MacOs => {
                let shell_line = format!(
                    "cd {} && {}",
                    shell_quote(&spec.directory().to_string_lossy()),
                    command_line
                );
                vec![TerminalCommand {
                    program: "osascript".to_string(),
                    args: vec![
                        "-e".to_string(),
                        format!(
                            "tell application \"Terminal\" to do script \"{}\"",
                            applescript_escape(&shell_line)
                        ),
                        "-e".to_string(),
                        "tell application \"Terminal\" to activate".to_string(),
                    ],
                    current_dir,
                }]
            }
        }
    }

    /// Open the program in a new terminal window. Returns false when no
    /// candidate terminal could be started.
    pub fn launch(self, spec: &RunSpec) -> bool {
        for candidate in self.candidates(spec) {
            if self == ExternalTerminal::Linux && !crate::toolchain::is_reachable(&candidate.program)
            {
                log::debug!("{} not installed, trying next terminal", candidate.program);
                continue;
            }

            match Command::new(&candidate.program)
                .args(&candidate.args)
                .current_dir(&candidate.current_dir)
                .stdin(Stdio::null())
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .spawn()
            {
                Ok(child) => {
                    log::info!(
                        "Launched {} in external terminal {} (pid {})",
                        spec.executable_name(),
                        candidate.program,
                        child.id()
                    );
                    return true;
                }
                Err(e) => {
                    log::warn!("Failed to start {}: {}", candidate.program, e);
                }
            }
        }
        false
    }
}

/// Single-quote `value` for a POSIX shell.
fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "'\\''"))
}

fn applescript_escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
