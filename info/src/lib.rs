//! Build information baked in at compile time.

/// Released in lockstep with the server, so this is the server's version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const REVISION: Option<&str> = option_env!("GAMEIMPACT_REVISION");

pub const BUILD_TIMESTAMP: Option<&str> = option_env!("BUILD_TIMESTAMP");
