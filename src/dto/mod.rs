pub mod common;
pub mod request;
pub mod response;
pub mod rpc;

// Re-export commonly used types for convenience
pub use common::*;
pub use request::*;
pub use response::*;
pub use rpc::{ApiRequest, ApiResponse};
