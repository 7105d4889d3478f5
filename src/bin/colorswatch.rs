//! `colorswatch`: print a terminal swatch for each CSS color string.
//!
//! ```text
//! $ colorswatch tomato "hsl(120, 100%, 25%)" '#5G5'
//! ▒▒▒▒▒ R:255 G: 99 B: 71 <tomato>
//! ▒▒▒▒▒ R:  0 G:127 B:  0 <hsl(120, 100%, 25%)>
//!       <invalid value> <#5G5>
//! ```

use std::io::{self, ErrorKind};
use std::process::ExitCode;

use colorswatch::cli::{self, Config, HELP_TEXT, LOG_ENV, LogLevel, VERSION_TEXT};
use colorswatch::console::Console;
use colorswatch::input::InputSource;
use colorswatch::logging::SwatchLogger;
use colorswatch::terminal;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();
    let cfg = match cli::parse_args(args) {
        Ok(cfg) => cfg,
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::from(2);
        }
    };

    if cfg.help {
        print!("{HELP_TEXT}");
        return ExitCode::SUCCESS;
    }
    if cfg.version {
        print!("{VERSION_TEXT}");
        return ExitCode::SUCCESS;
    }

    let env_level = std::env::var(LOG_ENV).ok();
    let level = cfg
        .resolve_log_level(env_level.as_deref())
        .unwrap_or_else(|message| {
            eprintln!("Warning: {message}");
            LogLevel::Off
        });
    if level != LogLevel::Off {
        init_logger(level);
    }

    match run(&cfg) {
        Ok(()) => ExitCode::SUCCESS,
        // Downstream closed the pipe (`colorswatch --list | head`)
        Err(err) if err.kind() == ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("colorswatch: {err}");
            ExitCode::from(1)
        }
    }
}

fn init_logger(level: LogLevel) {
    if let Err(err) = SwatchLogger::new().level(level.to_level_filter()).init() {
        eprintln!("Warning: Failed to initialize logger: {err}");
    }
}

fn run(cfg: &Config) -> io::Result<()> {
    let mut builder = cfg.console_builder();
    if terminal::is_terminal()
        && let Some(width) = terminal::terminal_width()
    {
        builder = builder.max_line_width(width);
    }
    let console: Console = builder.build();

    if cfg.list {
        return console.print_keywords();
    }

    let mut invalid = 0usize;
    let mut total = 0usize;
    let source = InputSource::from_args(cfg.colors.clone());
    for input in source.inputs(io::stdin().lock()) {
        total += 1;
        if !console.print_color(&input?)? {
            invalid += 1;
        }
    }
    log::info!("{total} inputs, {invalid} invalid");

    Ok(())
}
