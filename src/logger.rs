use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

/// Log to stderr; stdout is reserved for the JSON result.
pub fn init(verbose: bool) {
    let level = if verbose { LevelFilter::Info } else { LevelFilter::Warn };
    let _ = TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto);
}
