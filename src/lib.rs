pub mod cli;
pub mod config;
pub mod dashboard;
pub mod memory;
pub mod observability;
pub mod seed;
pub mod session;
pub mod snapshot;

pub use config::Config;
pub use dashboard::Dashboard;
pub use session::Session;
pub use snapshot::Snapshot;

use time::OffsetDateTime;

/// The configured snapshot, or the demo data when none is configured.
pub fn load_snapshot(config: &Config, now: OffsetDateTime) -> anyhow::Result<Snapshot> {
    match config.data.path.as_deref() {
        Some(path) => Snapshot::load(path),
        None => {
            tracing::info!(user.id = %config.user.id, "no snapshot configured, using demo data");
            Ok(seed::snapshot(&config.user.id, now))
        }
    }
}
