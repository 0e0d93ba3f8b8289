use crate::config::settings::{JsonSettingsFile, Settings};
use crate::config::types::LanguageKind;
use crate::exec::SystemExecutor;
use crate::prompt::LinePrompter;
use crate::utils::output::ConsoleSink;
use crate::workflow::{Action, Launcher, Orchestrator, Outcome, SourceFile};
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process::Command;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Settings file (defaults to ./ccrun.json)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Run the program in a new terminal window for this invocation
    #[arg(long, global = true)]
    external_terminal: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct SourceArgs {
    /// C or C++ source file
    source: PathBuf,
    /// Language identifier overriding extension detection (c, cpp, cuda-cpp)
    #[arg(long)]
    language: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile the source file and run it
    CompileRun(SourceArgs),
    /// Compile with prompted flags and run with prompted arguments
    CustomCompileRun(SourceArgs),
    /// Compile the source file
    Compile(SourceArgs),
    /// Run the previously compiled executable
    Run(SourceArgs),
    /// Compile with prompted flags
    CustomCompile(SourceArgs),
    /// Run with prompted arguments
    CustomRun(SourceArgs),
    /// Check that the configured C and C++ compilers are installed
    CheckDeps {
        /// Show the version reported by each compiler
        #[arg(long)]
        verbose: bool,
    },
}

impl Commands {
    fn workflow(&self) -> Option<(Action, &SourceArgs)> {
        match self {
            Self::CompileRun(args) => Some((Action::CompileAndRun, args)),
            Self::CustomCompileRun(args) => Some((Action::CustomCompileRun, args)),
            Self::Compile(args) => Some((Action::Compile, args)),
            Self::Run(args) => Some((Action::Run, args)),
            Self::CustomCompile(args) => Some((Action::CompileWithCustomFlags, args)),
            Self::CustomRun(args) => Some((Action::RunWithCustomArguments, args)),
            Self::CheckDeps { .. } => None,
        }
    }
}

pub fn run() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let store = match &cli.config {
        Some(path) => JsonSettingsFile::new(path),
        None => JsonSettingsFile::in_current_dir()?,
    };
    let settings = store
        .load()
        .with_context(|| format!("Failed to load settings from {}", store.path().display()))?;

    if let Commands::CheckDeps { verbose } = cli.command {
        return check_compilers(&settings, verbose);
    }

    if let Some((action, args)) = cli.command.workflow() {
        let code = run_workflow(action, args, settings, &store, cli.external_terminal)?;
        if code != 0 {
            std::process::exit(code);
        }
    }
    Ok(())
}

fn run_workflow(
    action: Action,
    args: &SourceArgs,
    settings: Settings,
    store: &JsonSettingsFile,
    external_terminal: bool,
) -> Result<i32> {
    let mut document = match &args.language {
        Some(language) => SourceFile::with_language(&args.source, language.as_str()),
        None => SourceFile::open(&args.source),
    };

    let tag = args
        .source
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| args.source.display().to_string());
    let sink = ConsoleSink::new(tag, settings.show_notifications);
    let host = SystemExecutor::new();
    let mut prompter = LinePrompter::stdio();

    let mut orchestrator = Orchestrator::new(settings, store, &mut prompter, &host, &sink)
        .with_external_terminal(external_terminal);
    let outcome = orchestrator
        .execute(action, &mut document)
        .with_context(|| format!("{} failed for {}", action, args.source.display()))?;

    log::debug!("Invocation {} finished: {:?}", orchestrator.invocation_id(), outcome);
    Ok(exit_code_for(&outcome))
}

/// Process exit status for a finished invocation
pub fn exit_code_for(outcome: &Outcome) -> i32 {
    match outcome {
        Outcome::Ran(Launcher::Integrated {
            exit_code: Some(code),
        }) => *code,
        Outcome::Ran(Launcher::Integrated { exit_code: None }) => 1,
        other if other.is_failure() => 1,
        _ => 0,
    }
}

/// Check that the configured compilers can be found
fn check_compilers(settings: &Settings, verbose: bool) -> Result<()> {
    println!("🔍 Checking compilers...");
    println!();

    let mut missing = Vec::new();

    for language in [LanguageKind::C, LanguageKind::Cpp] {
        let compiler = settings.compiler_for(language);
        if crate::toolchain::is_reachable(&compiler.executable_path) {
            println!("✅ {} - {}", language, compiler.executable_path);
            if verbose {
                println!("  {}", compiler_version(&compiler.executable_path));
            }
        } else {
            println!("❌ {} - {} NOT FOUND", language, compiler.executable_path);
            missing.push(language);
        }
    }

    println!();

    if missing.is_empty() {
        println!("🎉 All compilers are installed!");
        return Ok(());
    }

    println!("🔧 Install the missing compilers or point ccrun at them in ccrun.json:");
    for language in &missing {
        match language {
            LanguageKind::C => println!("  • C: sudo apt install gcc   (or set \"c-compiler\")"),
            LanguageKind::Cpp => println!("  • C++: sudo apt install g++   (or set \"cpp-compiler\")"),
        }
    }
    std::process::exit(1);
}

fn compiler_version(program: &str) -> String {
    match Command::new(program).arg("--version").output() {
        Ok(output) if output.status.success() => {
            let text = if !output.stdout.is_empty() {
                String::from_utf8_lossy(&output.stdout)
            } else {
                String::from_utf8_lossy(&output.stderr)
            };
            text.lines().next().unwrap_or("").trim().to_string()
        }
        Ok(_) => "version query FAILED".to_string(),
        Err(e) => format!("version query FAILED: {}", e),
    }
}
