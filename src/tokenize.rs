/// A rendered command split into the program and its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub program: String,
    pub args: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Normal,
    Quoted,
}

/// Program is everything before the first space; the rest goes through
/// [`split_args`].
pub fn tokenize(command: &str) -> CommandLine {
    match command.split_once(' ') {
        Some((program, rest)) => CommandLine {
            program: program.to_string(),
            args: split_args(rest),
        },
        None => CommandLine {
            program: command.to_string(),
            args: Vec::new(),
        },
    }
}

/// Splits on whitespace outside single quotes, then trims `'` from both ends
/// of every token.
///
/// There is no escaping: a `'` inside a quoted argument or an unbalanced
/// quote gives whatever splitting falls out of the toggling below.
pub fn split_args(rest: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut state = State::Normal;

    for c in rest.chars() {
        if c == '\'' {
            state = match state {
                State::Normal => State::Quoted,
                State::Quoted => State::Normal,
            };
        }

        if c.is_whitespace() && state == State::Normal {
            if !current.is_empty() {
                tokens.push(std::mem::take(&mut current));
            }
        } else {
            current.push(c);
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }

    tokens
        .into_iter()
        .map(|token| token.trim_matches('\'').to_string())
        .collect()
}
