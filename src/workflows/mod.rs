//! Mutation Workflows
//!
//! Each workflow sends its request(s), reports the outcome through the
//! snackbar and returns what the caller needs to refresh: the caller then
//! bumps the reload trigger (re-fetch) or patches its local copy.

mod campaign;
mod medication;
mod record;

pub use campaign::*;
pub use medication::*;
pub use record::*;
