use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::error::Result;
use crate::models::user::User;

/// The persisted session cache boundary.
///
/// Holds at most one serialized [`User`] projection. Written on every
/// successful login or registration, deleted on logout, read once at
/// process start.
pub trait SessionCache: Send + Sync {
    /// Reads the cached projection.
    ///
    /// Returns `Ok(None)` when no entry exists; unreadable or unparsable
    /// content is an error so the caller can purge the entry.
    fn load(&self) -> Result<Option<User>>;

    /// Writes the given projection, replacing any previous entry.
    fn store(&self, user: &User) -> Result<()>;

    /// Removes the cached entry, if any.
    fn clear(&self) -> Result<()>;
}

/// A session cache backed by a single JSON file on disk.
pub struct FileSessionCache {
    path: PathBuf,
}

impl FileSessionCache {
    /// Creates a cache backed by the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileSessionCache { path: path.into() }
    }
}

impl SessionCache for FileSessionCache {
    fn load(&self) -> Result<Option<User>> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => Ok(Some(sonic_rs::from_str(&raw)?)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn store(&self, user: &User) -> Result<()> {
        let raw = sonic_rs::to_string(user)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// An in-process session cache for tests and embedding.
#[derive(Default)]
pub struct MemorySessionCache {
    slot: Mutex<Option<String>>,
}

impl MemorySessionCache {
    /// Creates an empty in-process cache.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionCache for MemorySessionCache {
    fn load(&self) -> Result<Option<User>> {
        let slot = self.slot.lock().expect("cache lock poisoned");
        match slot.as_deref() {
            Some(raw) => Ok(Some(sonic_rs::from_str(raw)?)),
            None => Ok(None),
        }
    }

    fn store(&self, user: &User) -> Result<()> {
        let raw = sonic_rs::to_string(user)?;
        *self.slot.lock().expect("cache lock poisoned") = Some(raw);
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.slot.lock().expect("cache lock poisoned") = None;
        Ok(())
    }
}
