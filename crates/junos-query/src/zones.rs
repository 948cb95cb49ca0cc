// Security-zone query endpoint.

use serde_json::Value;
use tracing::debug;

use crate::client::JunosClient;
use crate::error::Error;
use crate::models::ZoneInterfaces;
use crate::path::{first, list};

impl JunosClient {
    /// Interface membership of the named security zone.
    ///
    /// `get-zones-information` scoped with `get-zones-named-information`.
    /// A zone that does not exist yields the zero-entry record.
    pub async fn zone_interfaces(&self, zone: &str) -> Result<ZoneInterfaces, Error> {
        let body = self
            .rpc(
                "get-zones-information",
                &[("get-zones-named-information", zone)],
            )
            .await?;
        Ok(extract_interfaces(&body).map_or_else(
            || {
                debug!("security zone {zone} does not exist");
                ZoneInterfaces::empty(zone)
            },
            |interfaces| ZoneInterfaces::new(zone, interfaces),
        ))
    }
}

fn extract_interfaces(body: &Value) -> Option<Vec<String>> {
    let names = first(body, "zones-information")
        .and_then(|info| first(info, "zones-security"))
        .and_then(|zone| first(zone, "zones-security-interfaces"))
        .and_then(|ifaces| list(ifaces, "zones-security-interface-name"))?;

    names
        .iter()
        .map(|cell| Some(cell.get("data")?.as_str()?.to_owned()))
        .collect()
}
