use std::env;
use std::ffi::OsStr;
use std::io::IsTerminal;

/// Whether colored output should go to `stream`: it must be a terminal and
/// the environment must not opt out.
pub fn enabled(stream: &impl IsTerminal) -> bool {
    stream.is_terminal()
        && allowed_by_env(
            env::var_os("NO_COLOR").as_deref(),
            env::var_os("TERM").as_deref(),
        )
}

/// A non-empty `NO_COLOR` or `TERM=dumb` turns color off.
pub fn allowed_by_env(no_color: Option<&OsStr>, term: Option<&OsStr>) -> bool {
    let opted_out = no_color.is_some_and(|value| !value.is_empty());
    let dumb = term.is_some_and(|value| value == "dumb");
    !opted_out && !dumb
}
