pub mod auction;
pub mod config;
pub mod error;
pub mod gateway;
pub mod routes;

pub use config::ApiConfig;
pub use error::ApiError;
pub use routes::{app, AppState};
