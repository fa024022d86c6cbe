use std::env;

use log::LevelFilter;

/// Logs at info level, or debug when `debug_enabled`. `RUST_LOG` overrides
/// both.
pub fn init_logger(debug_enabled: bool) {
  let level = if debug_enabled {
    LevelFilter::Debug
  } else {
    LevelFilter::Info
  };

  let mut builder = env_logger::Builder::new();
  builder
    .filter(None, level)
    .format_timestamp(None)
    .format_target(false);

  if let Ok(spec) = env::var("RUST_LOG") {
    builder.parse_filters(&spec);
  }

  builder.init();
  log::debug!("Logger initialized at {level:?} level");
}
