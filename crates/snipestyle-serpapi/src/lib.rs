pub mod client;
pub mod error;
pub mod types;

pub use client::SerpApiClient;
pub use error::SerpApiError;
pub use types::{QueryOutcome, ShoppingResponse};
