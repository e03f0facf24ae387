use std::path::{self, Path};

/// One `run <file> [...args]` call: what gets substituted into templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    file: String,
    stem: String,
    extension: String,
    args: Vec<String>,
}

impl Invocation {
    pub fn new(file: &str, args: &[String]) -> Self {
        let (stem, extension) = split_extension(file);
        Invocation {
            file: file.to_string(),
            stem: stem.to_string(),
            extension: extension.to_string(),
            args: args.to_vec(),
        }
    }

    pub fn file(&self) -> &str {
        &self.file
    }

    /// Extension without the leading dot, empty if the file name has none.
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Final path component, used in user-facing messages.
    pub fn base_name(&self) -> String {
        Path::new(&self.file)
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.file.clone())
    }

    /// Every argument wrapped in single quotes, joined by one space.
    /// Quotes inside an argument are not escaped.
    pub fn quoted_args(&self) -> String {
        self.args
            .iter()
            .map(|arg| format!("'{}'", arg))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Substitutes `{file}`, `{stem}` and `{args}` in a single pass, so values
    /// that happen to contain a placeholder are left alone.
    pub fn render(&self, template: &str) -> String {
        let args = self.quoted_args();
        let mut rendered = String::with_capacity(template.len() + self.file.len() + args.len());
        let mut rest = template;

        while let Some(open) = rest.find('{') {
            rendered.push_str(&rest[..open]);
            let tail = &rest[open..];

            let placeholder = tail.find('}').map(|close| &tail[..=close]);
            let value = match placeholder {
                Some("{file}") => Some(self.file.as_str()),
                Some("{stem}") => Some(self.stem.as_str()),
                Some("{args}") => Some(args.as_str()),
                _ => None,
            };

            match (placeholder, value) {
                (Some(token), Some(value)) => {
                    rendered.push_str(value);
                    rest = &tail[token.len()..];
                }
                _ => {
                    rendered.push('{');
                    rest = &tail[1..];
                }
            }
        }
        rendered.push_str(rest);
        rendered
    }
}

/// Splits at the last `.` of the final path component.
/// `dir/foo.c` gives `("dir/foo", "c")`, `Makefile` gives `("Makefile", "")`.
pub fn split_extension(file: &str) -> (&str, &str) {
    let name_start = file.rfind(path::is_separator).map_or(0, |sep| sep + 1);
    match file[name_start..].rfind('.') {
        Some(dot) => {
            let dot = name_start + dot;
            (&file[..dot], &file[dot + 1..])
        }
        None => (file, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn splits_extension_from_the_file_name_only() {
        assert_eq!(split_extension("foo.c"), ("foo", "c"));
        assert_eq!(split_extension("dir/foo.tar.gz"), ("dir/foo.tar", "gz"));
        assert_eq!(split_extension("some.dir/Makefile"), ("some.dir/Makefile", ""));
        assert_eq!(split_extension(".py"), ("", "py"));
        assert_eq!(split_extension("trailing."), ("trailing", ""));
    }

    #[test]
    fn quotes_and_joins_arguments() {
        let invocation = Invocation::new("foo.py", &args(&["a", "b c"]));
        assert_eq!(invocation.quoted_args(), "'a' 'b c'");
        assert_eq!(Invocation::new("foo.py", &[]).quoted_args(), "");
    }

    #[test]
    fn renders_python_with_trailing_space() {
        let invocation = Invocation::new("foo.py", &args(&["a", "b c"]));
        assert_eq!(
            invocation.render("python3 -u {file} {args} "),
            "python3 -u foo.py 'a' 'b c' "
        );
    }

    #[test]
    fn renders_stem_for_compiled_languages() {
        let invocation = Invocation::new("src/main.c", &args(&["7"]));
        assert_eq!(invocation.render("gcc -std=c2x -o {stem} {file}"), "gcc -std=c2x -o src/main src/main.c");
        assert_eq!(invocation.render("./{stem} {args}"), "./src/main '7'");
        assert_eq!(invocation.render("rm -rf {stem}.class"), "rm -rf src/main.class");
    }

    #[test]
    fn leaves_unknown_braces_and_substituted_values_alone() {
        let invocation = Invocation::new("{stem}.js", &args(&["{file}"]));
        assert_eq!(invocation.render("echo {x} {file} {args} {"), "echo {x} {stem}.js '{file}' {");
    }

    #[test]
    fn base_name_drops_directories() {
        assert_eq!(Invocation::new("/tmp/deep/prog.go", &[]).base_name(), "prog.go");
        assert_eq!(Invocation::new("prog.go", &[]).base_name(), "prog.go");
    }
}
