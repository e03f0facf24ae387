use color_print::cformat;

pub const ISSUES_URL: &str = "https://github.com/jatindotdev/cli/issues";

/// Conditions that stop `run` before any command is executed.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum LaunchError {
    #[error("`{name}` does not exist!")]
    MissingFile { name: String },
    #[error("we don't support `.{extension}` extensions yet.")]
    UnsupportedExtension { extension: String },
}

impl LaunchError {
    /// An unsupported extension is reported but still exits 0.
    pub fn exit_code(&self) -> i32 {
        match self {
            LaunchError::MissingFile { .. } => 1,
            LaunchError::UnsupportedExtension { .. } => 0,
        }
    }

    /// Text written to stderr, newline-terminated. Only the headline is
    /// colored.
    pub fn report(&self, colored: bool) -> String {
        let headline = if colored {
            cformat!("<red>Error: {}</>", self)
        } else {
            format!("Error: {}", self)
        };
        match self {
            LaunchError::MissingFile { .. } => format!("{}\n", headline),
            LaunchError::UnsupportedExtension { .. } => {
                format!("{}\nPlease raise an issue here {}\n", headline, ISSUES_URL)
            }
        }
    }
}

pub type LaunchResult<T> = Result<T, LaunchError>;
