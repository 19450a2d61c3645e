//! Common library for the StudySync client
//!
//! This crate provides shared functionality used across the StudySync
//! client crates: environment-driven configuration, the file-backed local
//! store that stands in for the browser's localStorage, and error handling.

pub mod config;
pub mod error;
pub mod storage;
