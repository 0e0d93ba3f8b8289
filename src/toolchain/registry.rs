use crate::config::types::LanguageKind;
use std::path::Path;

/// Language kind for an editor-style language identifier.
pub fn language_for_id(language_id: &str) -> Option<LanguageKind> {
    match language_id {
        "c" => Some(LanguageKind::C),
        "cpp" | "c++" | "cuda-cpp" => Some(LanguageKind::Cpp),
        _ => None,
    }
}

/// Language identifier guessed from a file extension.
pub fn language_id_for_path(path: &Path) -> &'static str {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("c") => "c",
        Some("cpp" | "cc" | "cxx" | "c++" | "C") => "cpp",
        Some("cu") => "cuda-cpp",
        _ => "plaintext",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_ids() {
        assert_eq!(language_for_id("c"), Some(LanguageKind::C));
        assert_eq!(language_for_id("cpp"), Some(LanguageKind::Cpp));
        assert_eq!(language_for_id("cuda-cpp"), Some(LanguageKind::Cpp));
        assert_eq!(language_for_id("python"), None);
        assert_eq!(language_for_id("C"), None);
    }

    #[test]
    fn test_extension_detection() {
        assert_eq!(language_id_for_path(Path::new("a/foo.c")), "c");
        assert_eq!(language_id_for_path(Path::new("foo.cc")), "cpp");
        assert_eq!(language_id_for_path(Path::new("foo.cxx")), "cpp");
        assert_eq!(language_id_for_path(Path::new("foo.C")), "cpp");
        assert_eq!(language_id_for_path(Path::new("kernel.cu")), "cuda-cpp");
        assert_eq!(language_id_for_path(Path::new("notes.txt")), "plaintext");
        assert_eq!(language_id_for_path(Path::new("Makefile")), "plaintext");
    }
}
