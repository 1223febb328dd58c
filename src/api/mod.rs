//! REST API module
//!
//! HTTP surface for the reservation engine: the status board, the park and
//! status-override operations, and the loyalty lookup.

pub mod dto;
pub mod handlers;
pub mod router;

pub use router::{create_api_router, ApiState};
