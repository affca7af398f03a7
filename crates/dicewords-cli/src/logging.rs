use crate::error::{CliError, Result};
use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{
    filter::{LevelFilter, Targets},
    fmt::{self, format::FmtSpan},
    prelude::*,
};

/// The word search emits one trace event per anagram key hit, which drowns everything else.
/// Its trace output needs one more `-v` than the rest of the program.
const SEARCH_TARGET: &str = "dicewords::engine::enumerator";

pub fn setup_logging(verbosity: u8, quiet: bool, log_file: Option<PathBuf>) -> Result<()> {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    // The file log records when each instrumented phase closes, with its busy time.
    let file_layer = match log_file {
        Some(path) => {
            let file = File::create(&path).map_err(CliError::Io)?;
            Some(
                fmt::layer()
                    .with_writer(Mutex::new(file))
                    .with_ansi(false)
                    .with_thread_ids(true)
                    .with_span_events(FmtSpan::CLOSE),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(log_filter(verbosity, quiet))
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| CliError::Other(anyhow::anyhow!("Failed to install logger: {}", e)))
}

fn log_filter(verbosity: u8, quiet: bool) -> Targets {
    let level = match (quiet, verbosity) {
        (true, _) => LevelFilter::ERROR,
        (false, 0) => LevelFilter::WARN,
        (false, 1) => LevelFilter::INFO,
        (false, 2) => LevelFilter::DEBUG,
        (false, _) => LevelFilter::TRACE,
    };
    let search_level = if !quiet && verbosity >= 4 {
        LevelFilter::TRACE
    } else {
        level.min(LevelFilter::DEBUG)
    };

    Targets::new()
        .with_default(level)
        .with_target(SEARCH_TARGET, search_level)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::path::Path;
    use std::sync::OnceLock;
    use tracing::{Level, info, info_span};

    static GLOBAL_LOG: OnceLock<PathBuf> = OnceLock::new();

    fn install_global_logger() -> &'static Path {
        GLOBAL_LOG.get_or_init(|| {
            let path = std::env::temp_dir()
                .join(format!("dicewords-logging-{}.log", std::process::id()));
            setup_logging(2, false, Some(path.clone())).unwrap();
            path
        })
    }

    #[test]
    fn verbosity_raises_the_default_level() {
        let quiet = log_filter(3, true);
        assert!(quiet.would_enable("dicewords::workflows::build", &Level::ERROR));
        assert!(!quiet.would_enable("dicewords::workflows::build", &Level::WARN));

        let default = log_filter(0, false);
        assert!(default.would_enable("dicewords::workflows::build", &Level::WARN));
        assert!(!default.would_enable("dicewords::workflows::build", &Level::INFO));

        let debug = log_filter(2, false);
        assert!(debug.would_enable("dicewords::commands::build", &Level::DEBUG));
        assert!(!debug.would_enable("dicewords::commands::build", &Level::TRACE));
    }

    #[test]
    fn search_lookups_are_traced_only_at_the_highest_verbosity() {
        let trace = log_filter(3, false);
        assert!(trace.would_enable("dicewords::engine::alignment", &Level::TRACE));
        assert!(trace.would_enable(SEARCH_TARGET, &Level::DEBUG));
        assert!(!trace.would_enable(SEARCH_TARGET, &Level::TRACE));

        let lookups = log_filter(4, false);
        assert!(lookups.would_enable(SEARCH_TARGET, &Level::TRACE));
    }

    #[test]
    fn search_is_not_louder_than_the_rest_at_low_verbosity() {
        let default = log_filter(0, false);
        assert!(default.would_enable(SEARCH_TARGET, &Level::WARN));
        assert!(!default.would_enable(SEARCH_TARGET, &Level::INFO));
    }

    #[test]
    #[serial]
    fn log_file_records_events_and_phase_timings() {
        let path = install_global_logger();

        info_span!("word_enumeration").in_scope(|| {
            info!(candidates = 3, "Word enumeration finished.");
        });

        let content = std::fs::read_to_string(path).unwrap();
        assert!(content.contains("Word enumeration finished."));
        assert!(content.contains("candidates=3"));
        assert!(content.contains("word_enumeration"));
        assert!(content.contains("close"));
    }

    #[test]
    #[serial]
    fn second_installation_is_an_error_not_a_panic() {
        install_global_logger();
        assert!(matches!(
            setup_logging(0, true, None),
            Err(CliError::Other(_))
        ));
    }

    #[test]
    #[serial]
    fn unwritable_log_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("run.log");

        let result = setup_logging(0, false, Some(path));
        assert!(matches!(result, Err(CliError::Io(_))));
    }
}
