//! Entity Module

pub mod account;
pub mod credential;
pub mod screening_event;
