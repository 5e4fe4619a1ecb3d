/// How references to a scrap name are resolved.
///
/// `Unknown` and `LocalMacro` resolve within the referencing file only;
/// `GlobalMacro` and `OutputFile` gather every file's definitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScrapKind {
    #[default]
    Unknown,
    OutputFile,
    GlobalMacro,
    LocalMacro,
}

impl ScrapKind {
    pub const FILE: &'static str = "file";
    pub const GLOBAL: &'static str = "global";
    pub const LOCAL: &'static str = "local";

    /// Parses the `kind` in `<<kind:id>>=`.
    pub fn from_marker(marker: &str) -> Option<Self> {
        match marker {
            Self::FILE => Some(ScrapKind::OutputFile),
            Self::GLOBAL => Some(ScrapKind::GlobalMacro),
            Self::LOCAL => Some(ScrapKind::LocalMacro),
            _ => None,
        }
    }

    pub fn marker(self) -> &'static str {
        match self {
            ScrapKind::Unknown => "unset",
            ScrapKind::OutputFile => Self::FILE,
            ScrapKind::GlobalMacro => Self::GLOBAL,
            ScrapKind::LocalMacro => Self::LOCAL,
        }
    }

    /// True when a reference expands definitions from every file.
    pub fn is_global(self) -> bool {
        matches!(self, ScrapKind::OutputFile | ScrapKind::GlobalMacro)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("file", Some(ScrapKind::OutputFile))]
    #[case("global", Some(ScrapKind::GlobalMacro))]
    #[case("local", Some(ScrapKind::LocalMacro))]
    #[case("File", None)]
    #[case("macro", None)]
    fn markers_are_exact(#[case] marker: &str, #[case] expected: Option<ScrapKind>) {
        assert_eq!(ScrapKind::from_marker(marker), expected);
    }

    #[test]
    fn only_file_and_global_resolve_across_files() {
        assert!(ScrapKind::OutputFile.is_global());
        assert!(ScrapKind::GlobalMacro.is_global());
        assert!(!ScrapKind::LocalMacro.is_global());
        assert!(!ScrapKind::Unknown.is_global());
    }
}
