use std::path::PathBuf;

use crate::db::CompetitorStore;

/// Application-wide dependencies, constructed once at startup and
/// handed to every handler. Logging goes through the global tracing
/// dispatcher rather than a field here.
#[derive(Clone)]
pub struct AppState {
    pub competitors: CompetitorStore,
    pub static_dir: PathBuf,
}
