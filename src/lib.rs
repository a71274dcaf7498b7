pub mod api;
pub mod cli;
pub mod config;
pub mod database;
pub mod error;
pub mod models;
pub mod query_engine;
pub mod readers;
pub mod utils;

pub use error::{ClimateError, RequestError, Result};
