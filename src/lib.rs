pub mod cache;
pub mod cli;
pub mod config;
pub mod graph;
pub mod model;
pub mod platform;
pub mod processor;
pub mod resolver;

mod api;

pub use api::{BuildError, FxResolve, FxResolveBuilder};
