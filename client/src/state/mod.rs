//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Each state model is a plain struct wrapped in an `RwSignal` by `App` and
//! handed to components through context.

pub mod session;
