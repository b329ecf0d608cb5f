//! Unified configuration layer.
//!
//! Every environment variable is read here; the rest of the code works with
//! the structured configs and never calls `std::env::var` directly.
//!
//! - `loader`: `env_or`, `env_optional`, `env_bool`, `.env` loading
//! - `schema`: `ResourceConfig`, `ObservabilityConfig`, `RuntimeConfig`
//! - `env_keys`: key constants and their aliases

pub mod env_keys;
pub mod loader;
pub mod schema;

pub use loader::{env_bool, env_optional, env_or, load_dotenv};
pub use schema::{ObservabilityConfig, OutputFormat, ResourceConfig, RuntimeConfig};
