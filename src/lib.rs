//! Client-side digital notice board core: two stateful stores (session and
//! notices) over an in-memory mock backend, plus the pure form validators
//! the presentation layer runs before issuing commands.

pub mod cache;
pub mod config;
pub mod error;
pub mod latency;
pub mod seed;
pub mod state;

pub mod models {
    pub mod forms;
    pub mod notice;
    pub mod session;
    pub mod user;
}

pub mod stores {
    pub mod notice;
    pub mod session;
}

pub mod validation {
    pub mod auth;
    pub mod notice;
}

pub use error::{AppError, Result};
