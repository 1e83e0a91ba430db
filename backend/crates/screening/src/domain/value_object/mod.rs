//! Value Object Module

pub mod email;
pub mod public_id;
pub mod risk;
