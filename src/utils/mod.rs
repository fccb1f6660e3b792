// Utility functions
pub mod authz;
pub mod error;

pub use authz::*;
pub use error::*;
