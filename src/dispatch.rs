use color_print::cformat;
use log::debug;
use std::ffi::OsString;
use std::fs;
use std::io;

use crate::color;
use crate::error::{LaunchError, LaunchResult};
use crate::invocation::Invocation;
use crate::language::Language;
use crate::runner::Runner;
use crate::tokenize::{tokenize, CommandLine};

pub const HELP_KEYWORDS: [&str; 3] = ["help", "-h", "--help"];

/// What a set of command-line arguments asks `run` to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Plan {
    Help,
    Run(Vec<CommandLine>),
}

/// Converts raw process arguments to strings. Bytes that are not UTF-8 are
/// replaced with U+FFFD instead of aborting the launch.
pub fn args_from_os<I>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| match arg.into_string() {
            Ok(arg) => arg,
            Err(raw) => {
                let lossy = raw.to_string_lossy().into_owned();
                debug!("argument {:?} is not UTF-8, passing {:?}", raw, lossy);
                lossy
            }
        })
        .collect()
}

/// Parses `args` (program name already stripped) into a [`Plan`].
///
/// Help is decided before the filesystem is looked at. The file only has to
/// exist; it is never opened.
pub fn plan(args: &[String]) -> LaunchResult<Plan> {
    let Some(file) = args.first() else {
        return Ok(Plan::Help);
    };
    if HELP_KEYWORDS.contains(&file.as_str()) {
        return Ok(Plan::Help);
    }

    let invocation = Invocation::new(file, &args[1..]);

    if fs::metadata(invocation.file()).is_err() {
        return Err(LaunchError::MissingFile {
            name: invocation.base_name(),
        });
    }

    let language = Language::from_extension(invocation.extension()).ok_or_else(|| {
        LaunchError::UnsupportedExtension {
            extension: invocation.extension().to_string(),
        }
    })?;
    debug!("{} resolved to {:?}", invocation.file(), language);

    Ok(Plan::Run(commands_for(language, &invocation)))
}

/// Renders and tokenizes every template of `language`, in order.
pub fn commands_for(language: Language, invocation: &Invocation) -> Vec<CommandLine> {
    language
        .templates()
        .iter()
        .map(|template| tokenize(&invocation.render(template)))
        .collect()
}

/// Runs every command, one at a time, whatever the previous one did.
/// Returns how many of them failed to start or exited non-zero.
pub fn execute<R: Runner>(commands: &[CommandLine], runner: &mut R) -> usize {
    let mut failures = 0;
    for command in commands {
        debug!("running {} {:?}", command.program, command.args);
        match runner.run(command) {
            Ok(Some(0)) => {}
            Ok(code) => {
                debug!("{} exited with {:?}, continuing", command.program, code);
                failures += 1;
            }
            Err(e) => {
                debug!("{:#}, continuing", e);
                failures += 1;
            }
        }
    }
    failures
}

/// Entry point for the binary: returns the process exit code.
pub fn dispatch<R: Runner>(args: &[String], runner: &mut R) -> LaunchResult<i32> {
    match plan(args)? {
        Plan::Help => {
            print!("{}", usage(color::enabled(&io::stdout())));
            Ok(0)
        }
        Plan::Run(commands) => {
            let failures = execute(&commands, runner);
            debug!("{} of {} commands failed", failures, commands.len());
            Ok(0)
        }
    }
}

pub fn usage(colored: bool) -> String {
    let mut text = if colored {
        cformat!("<bold,magenta>Run</> does what its name says: it runs a file.\n\n")
    } else {
        "Run does what its name says: it runs a file.\n\n".to_string()
    };
    if colored {
        text.push_str(&cformat!(
            "<bold>Usage: run {}</><bold,green> [...args]</>\n",
            "<command>"
        ));
    } else {
        text.push_str("Usage: run <command> [...args]\n");
    }
    text.push_str("\n  [...args]     Arguments that will be passed to the command\n\n");
    if colored {
        text.push_str(&cformat!("<bold>Commands:</>\n"));
    } else {
        text.push_str("Commands:\n");
    }
    text.push_str("  help          Show this help message\n");
    text
}
