/// Compile verdict classification
///
/// A build counts as successful only when the compiler exits with 0 and its
/// combined output does not contain the literal `ERROR` marker. The marker
/// check misclassifies successful builds whose output mentions `ERROR`; that
/// false positive is kept as established behaviour.
use serde::{Deserialize, Serialize};

/// Marker that fails a build even on exit code 0
pub const ERROR_MARKER: &str = "ERROR";

/// Why a compile was classified as failed
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum FailureCause {
    /// Compiler exited with a non-zero status
    #[serde(rename = "nonzero_exit")]
    NonZeroExit(i32),
    /// Exit status 0 but the output carried the error marker
    #[serde(rename = "error_marker")]
    ErrorMarker,
    /// Compiler was terminated without an exit code
    #[serde(rename = "terminated")]
    Terminated,
}

impl std::fmt::Display for FailureCause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailureCause::NonZeroExit(code) => write!(f, "compiler exited with code {}", code),
            FailureCause::ErrorMarker => write!(f, "compiler output reported {}", ERROR_MARKER),
            FailureCause::Terminated => write!(f, "compiler was terminated by a signal"),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum CompileVerdict {
    Succeeded,
    Failed(FailureCause),
}

impl CompileVerdict {
    pub fn is_success(&self) -> bool {
        matches!(self, CompileVerdict::Succeeded)
    }
}

/// Pure function over the exit code and the captured stdout+stderr.
pub fn classify(exit_code: Option<i32>, transcript: &str) -> CompileVerdict {
    match exit_code {
        Some(0) if transcript.contains(ERROR_MARKER) => {
            CompileVerdict::Failed(FailureCause::ErrorMarker)
        }
        Some(0) => CompileVerdict::Succeeded,
        Some(code) => CompileVerdict::Failed(FailureCause::NonZeroExit(code)),
        None => CompileVerdict::Failed(FailureCause::Terminated),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_exit_succeeds() {
        assert_eq!(classify(Some(0), "Compilation finished\n"), CompileVerdict::Succeeded);
        assert_eq!(classify(Some(0), ""), CompileVerdict::Succeeded);
    }

    #[test]
    fn test_nonzero_exit_fails() {
        let verdict = classify(Some(1), "bar.cpp:3:1: error: expected ';'\n");
        assert_eq!(verdict, CompileVerdict::Failed(FailureCause::NonZeroExit(1)));
        assert!(!verdict.is_success());
    }

    #[test]
    fn test_error_marker_fails_clean_exit() {
        assert_eq!(
            classify(Some(0), "linker: ERROR something odd\n"),
            CompileVerdict::Failed(FailureCause::ErrorMarker)
        );
    }

    #[test]
    fn test_marker_is_case_sensitive() {
        // gcc diagnostics use lowercase "error:" and only appear on failing exits
        assert!(classify(Some(0), "no error here\n").is_success());
    }

    #[test]
    fn test_missing_exit_code_fails() {
        assert_eq!(classify(None, ""), CompileVerdict::Failed(FailureCause::Terminated));
    }

    #[test]
    fn test_failure_cause_display() {
        assert_eq!(
            FailureCause::NonZeroExit(2).to_string(),
            "compiler exited with code 2"
        );
        assert_eq!(FailureCause::ErrorMarker.to_string(), "compiler output reported ERROR");
    }
}
