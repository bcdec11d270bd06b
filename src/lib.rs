pub mod artwork;
pub mod catalog;
pub mod config;
pub mod constants;
pub mod error;
pub mod graphql;
pub mod lolomo;
pub mod observability;
pub mod server;

// Domain data shapes shared across layers
pub mod domain;

pub use error::{LolomoError, Result};
