//! ts-core: shared foundation for the turboshaft gas-path model.
//!
//! Contains:
//! - units (uom SI types + constructors + gas constants)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error type)

pub mod error;
pub mod numeric;
pub mod units;

pub use error::{TsError, TsResult};
pub use numeric::*;
pub use units::*;
