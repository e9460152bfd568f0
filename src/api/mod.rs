pub mod errors;
pub mod handlers;
pub mod server;

pub use errors::{ApiError, ErrorResponse};
pub use handlers::{FetchDocRequest, HealthResponse, McpInvokeRequest};
pub use server::ApiServer;
