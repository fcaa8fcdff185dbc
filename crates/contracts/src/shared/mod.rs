pub mod api_response;
pub mod error;
pub mod serde_helpers;

pub use api_response::StandardResponse;
pub use error::ApiError;
