pub mod client;
pub mod search;

pub use client::{ChzzkAuth, ChzzkFetcher, ChzzkHttpClient};
pub use search::{ChzzkSearch, Endpoints};
