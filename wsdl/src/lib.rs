//! Read-only WSDL interface model consumed by the stub generator.
//!
//! Documents are parsed upstream; this crate only describes the resulting
//! graph and the lookups the generator needs to walk it.

pub mod error;
pub mod types;
