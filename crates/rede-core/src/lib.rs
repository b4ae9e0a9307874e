//! # rede-core
//!
//! Core types, ID generation, and error types for RedePro.
//!
//! This crate provides the foundational types shared across all RedePro crates:
//! - Entity structs for the partner network domain (partners, professionals,
//!   affiliation links, exams, activity log)
//! - Category, status, and activity-action enums
//! - ID prefix constants and the monotonic ID generator
//! - The read-only niche taxonomy
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod niches;
