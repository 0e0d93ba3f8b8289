use crate::config::settings::Settings;
use crate::config::types::{CompilerConfig, LanguageKind};

/// Resolves the compiler for a language from the invocation's settings.
pub struct CompilerResolver<'a> {
    settings: &'a Settings,
}

impl<'a> CompilerResolver<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }

    pub fn resolve(&self, language: LanguageKind) -> CompilerConfig {
        self.settings.compiler_for(language)
    }
}

/// Whether `program` can be spawned: a search path hit for bare names, an
/// existing executable file for paths with a directory component.
pub fn is_reachable(program: &str) -> bool {
    if program.trim().is_empty() {
        return false;
    }
    match which::which(program) {
        Ok(found) => {
            log::debug!("Resolved {} to {}", program, found.display());
            true
        }
        Err(e) => {
            log::debug!("{} not reachable: {}", program, e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_resolution() {
        let settings = Settings::default();
        let resolver = CompilerResolver::new(&settings);

        let c = resolver.resolve(LanguageKind::C);
        assert_eq!(c.executable_path, "gcc");
        assert_eq!(c.default_flags, "-Wall -Wextra");

        let cpp = resolver.resolve(LanguageKind::Cpp);
        assert_eq!(cpp.executable_path, "g++");
        assert_eq!(cpp.default_flags, "-Wall -Wextra");
    }

    #[test]
    fn test_configured_resolution() {
        let mut settings = Settings::default();
        settings.cpp_compiler = "clang++".to_string();
        settings.cpp_flags = "-std=c++20 -O2".to_string();

        let cpp = CompilerResolver::new(&settings).resolve(LanguageKind::Cpp);
        assert_eq!(cpp.executable_path, "clang++");
        assert_eq!(cpp.default_flags, "-std=c++20 -O2");
    }

    #[test]
    fn test_unreachable_names() {
        assert!(!is_reachable(""));
        assert!(!is_reachable("   "));
        assert!(!is_reachable("definitely-not-a-compiler-3f9a1c"));
        assert!(!is_reachable("/nonexistent/dir/gcc"));
    }

    #[cfg(unix)]
    #[test]
    fn test_shell_is_reachable() {
        assert!(is_reachable("sh"));
        assert!(is_reachable("/bin/sh"));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_executable_file_is_not_reachable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cc");
        std::fs::write(&path, "not a program").unwrap();
        assert!(!is_reachable(path.to_str().unwrap()));
    }
}
