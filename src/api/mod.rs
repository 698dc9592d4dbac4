//! The HTTP-facing translation layer: raw query-string parameters in,
//! JSON envelope out. No server lives here; the routing layer is an
//! external collaborator that feeds this module.

pub mod params;
pub mod response;

pub use params::{ParamError, RawProductQuery};
pub use response::{ErrorBody, ProductListBody};
