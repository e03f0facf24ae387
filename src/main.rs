use std::{env, io, process};

use run::color;
use run::dispatch::args_from_os;
use run::runner::InheritedStdio;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::new().filter_or("RUN_LOG", "off"))
        .format_timestamp(None)
        .init();

    let args = args_from_os(env::args_os().skip(1));

    let exit_code = match run::dispatch(&args, &mut InheritedStdio) {
        Ok(code) => code,
        Err(e) => {
            eprint!("{}", e.report(color::enabled(&io::stderr())));
            e.exit_code()
        }
    };

    process::exit(exit_code);
}
