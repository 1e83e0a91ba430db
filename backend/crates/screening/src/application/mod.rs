//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod sign_up;
pub mod validate_email;

// Re-exports
pub use config::ScreeningConfig;
pub use sign_up::{SignUpInput, SignUpOutput, SignUpUseCase};
pub use validate_email::{
    ValidateAction, ValidateEmailInput, ValidateEmailOutput, ValidateEmailUseCase,
};
