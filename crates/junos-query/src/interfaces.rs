// Interface addressing query endpoint.

use serde_json::Value;
use tracing::debug;

use crate::client::JunosClient;
use crate::error::Error;
use crate::models::InterfaceAddresses;
use crate::path::{first, leaf, list};

impl JunosClient {
    /// IP addresses of the named logical interface.
    ///
    /// `get-interface-information` with `interface-name` and the `terse`
    /// flag. Each address keeps its host part only: any prefix length after
    /// '/' is stripped. An interface with no addresses (or an absent path)
    /// yields the zero-entry record.
    pub async fn interface_addresses(&self, interface: &str) -> Result<InterfaceAddresses, Error> {
        let body = self
            .rpc(
                "get-interface-information",
                &[("interface-name", interface), ("terse", "")],
            )
            .await?;
        let addresses = extract_addresses(&body).unwrap_or_else(|| {
            debug!("no addresses found on {interface}");
            Vec::new()
        });
        Ok(InterfaceAddresses::new(interface, addresses))
    }
}

fn extract_addresses(body: &Value) -> Option<Vec<String>> {
    let cells = first(body, "interface-information")
        .and_then(|info| first(info, "logical-interface"))
        .and_then(|logical| first(logical, "address-family"))
        .and_then(|family| list(family, "interface-address"))?;

    cells
        .iter()
        .map(|cell| {
            let local = leaf(cell, "ifa-local")?;
            let host = local.split_once('/').map_or(local, |(host, _)| host);
            Some(host.to_owned())
        })
        .collect()
}
