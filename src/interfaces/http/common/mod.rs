//! Shared HTTP plumbing: response envelope, error mapping, body and path extractors.

pub mod error;
pub mod id_path;
pub mod response;
pub mod validated_json;

pub use error::{error_response, ApiError};
pub use id_path::IdPath;
pub use response::ApiResponse;
pub use validated_json::ValidatedJson;
