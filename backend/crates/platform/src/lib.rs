//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Client identification (IP extraction, User-Agent fingerprints)
//! - Cryptographic utilities (SHA-256)
//! - Password hashing (Argon2id, NIST SP 800-63B compliant)
//! - Rate limiting infrastructure

pub mod client;
pub mod crypto;
pub mod password;
pub mod rate_limit;
