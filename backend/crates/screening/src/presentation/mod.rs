//! Presentation Layer
//!
//! HTTP handlers, DTOs, and router.

pub mod dto;
pub mod handlers;
pub mod router;

pub use handlers::ScreeningAppState;
pub use router::{screening_router, screening_router_generic};
