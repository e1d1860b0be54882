//! Game sessions and suggestion strategies

mod engine;
pub mod strategy;

pub use engine::{DEFAULT_MAX_ROUNDS, Session, SessionError};
pub use strategy::Strategy;
