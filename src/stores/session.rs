use std::sync::{Arc, RwLock};

use chrono::Utc;
use subtle::ConstantTimeEq;
use tokio::sync::watch;
use zeroize::Zeroizing;

use crate::cache::SessionCache;
use crate::latency::Latency;
use crate::models::session::SessionSnapshot;
use crate::models::user::{Role, User};

/// The administrator account the registry is seeded with.
pub struct AdminSeed {
    /// The administrator's full name.
    pub name: String,
    /// The administrator's email address.
    pub email: String,
    /// The administrator's password.
    pub secret: String,
}

/// A registry entry pairing a user with its credential.
///
/// The secret never leaves this structure and is never serialized.
struct RegistryEntry {
    user: User,
    secret: Zeroizing<String>,
}

struct SessionState {
    registry: Vec<RegistryEntry>,
    current: Option<User>,
    pending: bool,
}

/// The single authority for "who is logged in" and the only writer of the
/// user registry.
///
/// All mutations are serialized through the public operations; subscribers
/// receive a [`SessionSnapshot`] on every state change.
pub struct SessionStore {
    state: RwLock<SessionState>,
    events: watch::Sender<SessionSnapshot>,
    cache: Arc<dyn SessionCache>,
    latency: Arc<dyn Latency>,
}

/// Compares two secrets byte-for-byte in constant time.
fn secret_matches(stored: &str, given: &str) -> bool {
    stored.as_bytes().ct_eq(given.as_bytes()).into()
}

impl SessionStore {
    /// Creates a store whose registry holds exactly the seeded
    /// administrator account.
    ///
    /// # Arguments
    ///
    /// * `admin` - The administrator account to seed.
    /// * `cache` - The persisted session cache.
    /// * `latency` - The simulated-backend delay strategy.
    pub fn new(
        admin: AdminSeed,
        cache: Arc<dyn SessionCache>,
        latency: Arc<dyn Latency>,
    ) -> Self {
        let admin_user = User {
            id: 1,
            name: admin.name,
            email: admin.email,
            role: Role::Admin,
            created_at: Utc::now(),
        };
        let (events, _) = watch::channel(SessionSnapshot::empty());
        SessionStore {
            state: RwLock::new(SessionState {
                registry: vec![RegistryEntry {
                    user: admin_user,
                    secret: Zeroizing::new(admin.secret),
                }],
                current: None,
                pending: false,
            }),
            events,
            cache,
            latency,
        }
    }

    /// Attempts to authenticate with the given credentials.
    ///
    /// Failure is uniform: the result does not distinguish an unknown email
    /// from a wrong secret, so callers cannot probe which addresses are
    /// registered.
    ///
    /// # Arguments
    ///
    /// * `email` - The email to look up (exact match).
    /// * `secret` - The password to compare.
    ///
    /// # Returns
    ///
    /// `true` when a session was established.
    pub async fn login(&self, email: &str, secret: &str) -> bool {
        tracing::debug!("🔐 Login attempt for: {}", email);
        self.set_pending(true);
        tokio::time::sleep(self.latency.round_trip()).await;

        let matched = {
            let state = self.read();
            state
                .registry
                .iter()
                .find(|e| e.user.email == email && secret_matches(&e.secret, secret))
                .map(|e| e.user.clone())
        };

        match matched {
            Some(user) => {
                {
                    let mut state = self.write();
                    state.current = Some(user.clone());
                    state.pending = false;
                }
                self.publish();
                if let Err(e) = self.cache.store(&user) {
                    tracing::warn!("❌ Failed to persist session cache: {}", e);
                }
                tracing::info!("✅ User logged in: {}", user.id);
                true
            }
            None => {
                self.set_pending(false);
                tracing::debug!("Login failed for: {}", email);
                false
            }
        }
    }

    /// Registers a new account and logs it in immediately.
    ///
    /// The duplicate-email check is a case-sensitive string compare.
    ///
    /// # Arguments
    ///
    /// * `name` - The new user's full name.
    /// * `email` - The new user's email address.
    /// * `secret` - The new user's password.
    ///
    /// # Returns
    ///
    /// `false` when the email is already registered (registry unchanged),
    /// `true` when the account was created and a session established.
    pub async fn register(&self, name: &str, email: &str, secret: &str) -> bool {
        tracing::debug!("📝 Register attempt for: {}", email);
        self.set_pending(true);
        tokio::time::sleep(self.latency.round_trip()).await;

        let user = {
            let mut state = self.write();
            if state.registry.iter().any(|e| e.user.email == email) {
                state.pending = false;
                drop(state);
                self.publish();
                tracing::debug!("Registration rejected, email in use: {}", email);
                return false;
            }

            let user = User {
                id: state.registry.len() as u64 + 1,
                name: name.to_string(),
                email: email.to_string(),
                role: Role::User,
                created_at: Utc::now(),
            };
            state.registry.push(RegistryEntry {
                user: user.clone(),
                secret: Zeroizing::new(secret.to_string()),
            });
            state.current = Some(user.clone());
            state.pending = false;
            user
        };

        self.publish();
        if let Err(e) = self.cache.store(&user) {
            tracing::warn!("❌ Failed to persist session cache: {}", e);
        }
        tracing::info!("✅ User registered: {}", user.id);
        true
    }

    /// Clears the session back to the unauthenticated initial state and
    /// removes the persisted cache entry. Always succeeds.
    pub fn logout(&self) {
        let user_id = {
            let mut state = self.write();
            let id = state.current.as_ref().map(|u| u.id);
            state.current = None;
            state.pending = false;
            id
        };
        self.publish();
        if let Err(e) = self.cache.clear() {
            tracing::warn!("❌ Failed to clear session cache: {}", e);
        }
        if let Some(id) = user_id {
            tracing::info!("👋 User logged out: {}", id);
        }
    }

    /// Restores a session from the persisted cache.
    ///
    /// Invoked once at process start. A malformed cache entry is treated as
    /// absent: it is purged and the session stays unauthenticated. Never
    /// panics on malformed content.
    pub fn restore_session(&self) {
        match self.cache.load() {
            Ok(Some(user)) => {
                tracing::info!("✅ Session restored for user: {}", user.id);
                self.write().current = Some(user);
                self.publish();
            }
            Ok(None) => {
                tracing::debug!("No cached session found");
            }
            Err(e) => {
                tracing::warn!("❌ Malformed session cache, purging: {}", e);
                if let Err(e) = self.cache.clear() {
                    tracing::warn!("❌ Failed to clear session cache: {}", e);
                }
            }
        }
    }

    /// Returns the currently authenticated user's projection, if any.
    pub fn current_user(&self) -> Option<User> {
        self.read().current.clone()
    }

    /// Returns whether a user is currently authenticated.
    pub fn is_authenticated(&self) -> bool {
        self.read().current.is_some()
    }

    /// Returns whether an asynchronous operation is in flight.
    pub fn is_pending(&self) -> bool {
        self.read().pending
    }

    /// Returns the number of registered accounts.
    pub fn registered_users(&self) -> usize {
        self.read().registry.len()
    }

    /// Returns the current state as a snapshot.
    pub fn snapshot(&self) -> SessionSnapshot {
        let state = self.read();
        SessionSnapshot {
            user: state.current.clone(),
            is_authenticated: state.current.is_some(),
            is_pending: state.pending,
        }
    }

    /// Subscribes to state changes. Dropping the receiver unsubscribes.
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.events.subscribe()
    }

    fn set_pending(&self, pending: bool) {
        self.write().pending = pending;
        self.publish();
    }

    fn publish(&self) {
        self.events.send_replace(self.snapshot());
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, SessionState> {
        // A poisoned lock means a prior panic mid-mutation.
        self.state.read().expect("session state lock poisoned")
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, SessionState> {
        self.state.write().expect("session state lock poisoned")
    }
}
