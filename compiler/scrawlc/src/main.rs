//! Scrawl protocol validator CLI.

use std::io::IsTerminal;
use std::process::ExitCode;

use scrawlc::{init_tracing, parse_args, verify, ColorMode, Invocation, Palette, USAGE};

fn main() -> ExitCode {
    init_tracing();

    let config = match parse_args(std::env::args().skip(1)) {
        Ok(Invocation::Verify(config)) => config,
        Ok(Invocation::Help) => {
            println!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("{err}");
            eprintln!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    let mode = if config.color {
        ColorMode::Always
    } else {
        ColorMode::Auto
    };
    let palette = Palette::new(mode, std::io::stderr().is_terminal());
    eprintln!("{}", palette.banner());

    match verify(&config, &mut std::io::stdout()) {
        Ok(_) => {
            eprintln!("{}", palette.passed());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}", palette.error(&err));
            ExitCode::FAILURE
        }
    }
}
