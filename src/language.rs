/// Toolchains `run` knows how to drive, keyed by file extension.
///
/// Templates are rendered by [`crate::invocation::Invocation::render`], which
/// understands three placeholders: `{file}`, `{stem}` and `{args}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    JavaScript,
    C,
    Cpp,
    Dart,
    Swift,
    Python,
    Java,
    Go,
}

impl Language {
    pub const ALL: [Language; 8] = [
        Language::JavaScript,
        Language::C,
        Language::Cpp,
        Language::Dart,
        Language::Swift,
        Language::Python,
        Language::Java,
        Language::Go,
    ];

    pub fn extension(self) -> &'static str {
        match self {
            Language::JavaScript => "js",
            Language::C => "c",
            Language::Cpp => "cpp",
            Language::Dart => "dart",
            Language::Swift => "swift",
            Language::Python => "py",
            Language::Java => "java",
            Language::Go => "go",
        }
    }

    /// Exact, case-sensitive match on the extension without its dot.
    pub fn from_extension(extension: &str) -> Option<Language> {
        Language::ALL
            .into_iter()
            .find(|language| language.extension() == extension)
    }

    /// Command templates in execution order: compile, run, cleanup.
    pub fn templates(self) -> &'static [&'static str] {
        match self {
            Language::JavaScript => &["bun run {file} {args}"],
            Language::C => &[
                "gcc -std=c2x -o {stem} {file}",
                "./{stem} {args}",
                "rm -rf {stem}",
            ],
            Language::Cpp => &[
                "g++ -std=c++17 -o {stem} {file}",
                "./{stem} {args}",
                "rm -rf {stem}",
            ],
            Language::Dart => &["dart run {file} {args}"],
            Language::Swift => &["swift {file} {args}"],
            // trailing space is intentional, the tokenizer drops it
            Language::Python => &["python3 -u {file} {args} "],
            Language::Java => &[
                "javac {file}",
                "java {stem} {args}",
                "rm -rf {stem}.class",
            ],
            Language::Go => &["go run {file} {args}"],
        }
    }
}
