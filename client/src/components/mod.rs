//! Reusable UI components.

pub mod require_auth;
