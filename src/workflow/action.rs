use serde::{Deserialize, Serialize};

/// Entry points of the workflow
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Action {
    Compile,
    Run,
    CompileAndRun,
    CompileWithCustomFlags,
    RunWithCustomArguments,
    CustomCompileRun,
}

impl Action {
    pub const ALL: [Action; 6] = [
        Action::Compile,
        Action::Run,
        Action::CompileAndRun,
        Action::CompileWithCustomFlags,
        Action::RunWithCustomArguments,
        Action::CustomCompileRun,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Action::Compile => "compile",
            Action::Run => "run",
            Action::CompileAndRun => "compile-run",
            Action::CompileWithCustomFlags => "custom-compile",
            Action::RunWithCustomArguments => "custom-run",
            Action::CustomCompileRun => "custom-compile-run",
        }
    }

    pub fn compiles(self) -> bool {
        !matches!(self, Action::Run | Action::RunWithCustomArguments)
    }

    pub fn runs(self) -> bool {
        !matches!(self, Action::Compile | Action::CompileWithCustomFlags)
    }

    pub fn prompts_for_flags(self) -> bool {
        matches!(self, Action::CompileWithCustomFlags | Action::CustomCompileRun)
    }

    pub fn prompts_for_arguments(self) -> bool {
        matches!(self, Action::RunWithCustomArguments | Action::CustomCompileRun)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_capabilities() {
        assert!(Action::Compile.compiles() && !Action::Compile.runs());
        assert!(!Action::Run.compiles() && Action::Run.runs());
        assert!(Action::CompileAndRun.compiles() && Action::CompileAndRun.runs());

        assert!(Action::CompileWithCustomFlags.prompts_for_flags());
        assert!(!Action::CompileWithCustomFlags.prompts_for_arguments());
        assert!(Action::RunWithCustomArguments.prompts_for_arguments());
        assert!(!Action::RunWithCustomArguments.compiles());

        assert!(Action::CustomCompileRun.prompts_for_flags());
        assert!(Action::CustomCompileRun.prompts_for_arguments());
    }

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<_> = Action::ALL.iter().map(|a| a.name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 6);
    }
}
