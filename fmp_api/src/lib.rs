//! Typed client for the Financial Modeling Prep market-data REST API.

mod client;
pub mod endpoints;
mod errors;
pub mod options;
pub mod params;
pub mod tabular;
pub mod types;
pub use self::client::{Client, ClientConfig, RawResponse, DEFAULT_BASE_URL};
pub use self::errors::Error;
pub use self::options::RequestOptions;
pub use reqwest::{Method, StatusCode};
pub use tokio_util::sync::CancellationToken;
