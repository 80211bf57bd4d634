//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep view layers decoupled from storage details.

pub mod catalog_service;
pub mod profile_service;
