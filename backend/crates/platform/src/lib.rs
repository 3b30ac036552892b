//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (SHA-256, hex, Base64)
//! - RSA key generation, PEM encoding, PKCS#1 v1.5 signatures

pub mod crypto;
pub mod rsa;
