pub mod config;
pub mod error;
pub mod http;
pub mod logging;
pub mod models;
pub mod providers;
pub mod state;

pub use http::build_router;
pub use state::AppState;
