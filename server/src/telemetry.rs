// tracker_server/src/telemetry.rs

use crate::config::AppEnv;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber for `env`. `RUST_LOG` overrides the
/// default level. Does nothing for [`AppEnv::Off`].
pub fn init_tracing(env: AppEnv) {
  let default_level = match env {
    AppEnv::Local | AppEnv::Dev => "debug",
    AppEnv::Prod => "info",
    AppEnv::Off => return,
  };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

  let installed = match env {
    AppEnv::Local => tracing_subscriber::fmt()
      .with_env_filter(filter)
      .with_span_events(FmtSpan::CLOSE) // Log when spans close, showing duration
      .try_init(),
    _ => tracing_subscriber::fmt()
      .json()
      .with_env_filter(filter)
      .with_current_span(true)
      .try_init(),
  };

  if let Err(e) = installed {
    // A subscriber was already set (e.g. by a test harness).
    eprintln!("tracing subscriber not installed: {}", e);
  }
}
