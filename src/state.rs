use std::sync::Arc;

use crate::cache::FileSessionCache;
use crate::config::Config;
use crate::latency::FixedLatency;
use crate::seed;
use crate::stores::notice::NoticeStore;
use crate::stores::session::{AdminSeed, SessionStore};

/// The application's state: the two stores, constructed once at process
/// start and handed to the presentation layer.
#[derive(Clone)]
pub struct AppState {
    /// The session store.
    pub session: Arc<SessionStore>,
    /// The notice store.
    pub notices: Arc<NoticeStore>,
}

impl AppState {
    /// Creates a new `AppState`.
    ///
    /// Wires the file-backed session cache and the configured latency into
    /// both stores, seeds the registry with the administrator account, and
    /// preloads the demo notices.
    ///
    /// # Arguments
    ///
    /// * `config` - The application's configuration.
    pub fn new(config: &Config) -> Self {
        let cache = Arc::new(FileSessionCache::new(config.session_cache_path.clone()));

        let session = Arc::new(SessionStore::new(
            AdminSeed {
                name: config.admin_name.clone(),
                email: config.admin_email.clone(),
                secret: config.admin_secret.clone(),
            },
            cache,
            Arc::new(FixedLatency::from_millis(config.auth_latency_ms)),
        ));
        tracing::info!("✅ Session store initialized (1 seeded account)");

        let notices = Arc::new(NoticeStore::new(
            seed::demo_notices(),
            session.clone(),
            Arc::new(FixedLatency::from_millis(config.notice_latency_ms)),
        ));
        tracing::info!("✅ Notice store initialized (4 seeded notices)");

        AppState { session, notices }
    }
}
