//! Core use-case services.
//!
//! # Responsibility
//! - Model the edit session and validation rules.
//! - Orchestrate store, persistence and view into board-level operations.
//! - Keep UI adapters decoupled from storage details.

pub mod edit_session;
pub mod notes_service;
