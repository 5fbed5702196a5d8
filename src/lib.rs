//! parolee-service - a REST service for tracking parolees
//!
//! The service is split along the same lines as its responsibilities:
//! - `store`: a thread-safe keyed collection, ignorant of what it stores
//! - `domain`: parolees and what is recorded against them
//! - `web`: the HTTP resources, translating requests into store operations
//! - `fixtures` and `config`: start-up data and settings

pub mod config;
pub mod domain;
pub mod fixtures;
pub mod store;
pub mod web;

/// Re-export commonly used types
pub use config::Config;
pub use domain::{Parolee, ParoleeDto};
pub use store::{EntityRef, Identified, KeyedStore, StoreError};
pub use web::AppState;

/// The store of parolees shared by every request handler
pub type ParoleeDb = KeyedStore<Parolee>;
