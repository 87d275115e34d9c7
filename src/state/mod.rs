//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `toast`, `queries`, `selection`) so
//! individual components can depend on small focused models. `session` is a
//! process-wide singleton; `toast` and `queries` are provided as reactive
//! contexts by the root component.

pub mod queries;
pub mod selection;
pub mod session;
pub mod toast;
