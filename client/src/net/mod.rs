//! Network layer for the `/users/*` JSON API.
//!
//! ARCHITECTURE
//! ============
//! `types` holds the wire DTOs shared with the server; `api` owns the
//! request seam (`AuthApi`) and its browser implementation.

pub mod api;
pub mod types;
