//! Web interface module
//!
//! Exposes the parolee store as a REST resource over HTTP with JSON bodies.
//! Handlers only translate between HTTP and the store; the store itself knows
//! nothing about requests or status codes.

mod error;
mod handlers;
mod server;
mod state;

pub use error::ApiError;
pub use server::{router, run_web_server};
pub use state::AppState;
