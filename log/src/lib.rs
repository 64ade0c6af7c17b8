use std::env;
use std::str::FromStr;
use std::sync::Mutex;

use slog::Drain;
use slog::Fuse;
use slog_async::Async;
use slog_json::Json;

pub use slog::{debug, error, info, o, trace, warn, Level, Logger};

/// Environment variable holding the minimum level to emit.
pub const LEVEL_VARIABLE: &str = "GAMEIMPACT_LOG_LEVEL";

/// How much the root logger lets through.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Verbosity {
    Off,
    AtLeast(Level),
}

/// Builds the root logger: JSON lines on stderr, written asynchronously,
/// filtered by `GAMEIMPACT_LOG_LEVEL` (default `info`, `off` to silence).
///
/// Panics if the variable names no level.
pub fn initialize_logger() -> slog::Logger {
    let verbosity = match env::var(LEVEL_VARIABLE) {
        Ok(name) => parse_verbosity(&name)
            .unwrap_or_else(|| panic!("parse {} as a log level or `off`", LEVEL_VARIABLE)),
        Err(_) => Verbosity::AtLeast(Level::Info),
    };

    let level = match verbosity {
        Verbosity::Off => return Logger::root(slog::Discard, build_info()),
        Verbosity::AtLeast(level) => level,
    };

    let drain = Mutex::new(Json::default(std::io::stderr())).map(Fuse);
    let drain = drain.filter_level(level).fuse();
    let drain = Async::new(drain).build().fuse();

    Logger::root(drain, build_info())
}

fn build_info() -> slog::OwnedKV<impl slog::SendSyncRefUnwindSafeKV> {
    o!("version" => info::VERSION, "revision" => info::REVISION, "build_timestamp" => info::BUILD_TIMESTAMP)
}

/// A logger that drops everything, for tests and tools.
pub fn discard() -> slog::Logger {
    Logger::root(slog::Discard, o!())
}

/// Parses a level name such as `debug` or `WARN`, or `off`.
pub fn parse_verbosity(name: &str) -> Option<Verbosity> {
    let name = name.trim();

    // slog lists "off" among its names but has no level for it
    if name.eq_ignore_ascii_case("off") {
        return Some(Verbosity::Off);
    }

    Level::from_str(name).ok().map(Verbosity::AtLeast)
}
