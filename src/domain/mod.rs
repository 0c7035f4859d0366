//! Domain layer: the rental value types and the ports the service talks through.
//!
//! Nothing in here performs I/O. Adapters for the ports live in
//! `infrastructure` and `interfaces`.

pub mod car;
pub mod customer;
pub mod ports;
pub mod tax;
pub mod transaction;
