// junos-query: Async Rust client for read-only Junos device queries
//
// Issues Junos RPCs over the device's REST service and flattens the nested
// JSON output into small fixed-shape records: source-NAT rules, source-NAT
// pool ranges, security-zone interface membership, interface addressing.

pub mod auth;
pub mod client;
pub mod error;
pub mod interfaces;
pub mod models;
pub mod nat;
mod path;
pub mod transport;
pub mod zones;

pub use auth::Credentials;
pub use client::JunosClient;
pub use error::Error;
pub use models::{
    AddressRange, InterfaceAddresses, SnatPoolRange, SnatRule, SnatRuleSet, ZoneInterfaces,
};
pub use transport::{TlsMode, TransportConfig};
