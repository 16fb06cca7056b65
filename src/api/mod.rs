pub mod client;
pub mod store;
pub mod types;

pub use client::TaskClient;
pub use store::{ApiError, TaskStore, apply};
pub use types::{ApiResponse, TaskPayload};
