//! Building blocks shared by the RILEM concrete deformation models.
//!
//! - [`constraint`]: numeric invariants checked once at construction.
//! - [`units`]: quantity aliases missing from `uom` and small unit helpers.
//! - [`Component`]: the trait every model variant implements.

mod component;

pub mod constraint;
pub mod units;

pub use component::Component;
