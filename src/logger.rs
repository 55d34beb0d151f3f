use env_logger::{Builder, Env, Target};
use log::LevelFilter;

/// Sets up `env_logger` on stderr. With `None`, `RUST_LOG` decides and defaults to `warn`.
/// Calling it twice keeps the first logger.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    builder.target(Target::Stderr).format_timestamp(None);
    if let Some(level) = level {
        builder.filter_level(level);
    }
    let _ = builder.try_init();
}

/// Resolves the `--quiet` / `--debug` pair shared by the binaries.
pub fn level_from_flags(quiet: bool, debug: bool) -> Option<LevelFilter> {
    if quiet {
        Some(LevelFilter::Off)
    } else if debug {
        Some(LevelFilter::Debug)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_wins_over_debug() {
        assert_eq!(level_from_flags(true, true), Some(LevelFilter::Off));
        assert_eq!(level_from_flags(false, true), Some(LevelFilter::Debug));
        assert_eq!(level_from_flags(false, false), None);
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init_logger(Some(LevelFilter::Off));
        init_logger(None);
    }
}
