//! Top-level facade crate for casedash.
//!
//! Re-exports the core model and the surface runtime so users can depend on a single crate.

pub mod core {
    pub use casedash_core::*;
}

pub mod surface {
    pub use casedash_surface::*;
}
