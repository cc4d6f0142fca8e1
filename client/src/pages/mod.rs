//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components` or the shared `auth_form`.

pub mod auth_form;
pub mod home;
pub mod login;
pub mod register;
