// Source-NAT query endpoints.
//
// Response paths follow the `ssg-*` / `source-nat-pool-*` element names of
// the SRX NAT RPCs. A miss anywhere along the fixed path degrades the whole
// result to its zero-entry record.

use serde_json::Value;
use tracing::debug;

use crate::client::JunosClient;
use crate::error::Error;
use crate::models::{AddressRange, SnatPoolRange, SnatRule, SnatRuleSet};
use crate::path::{first, leaf, list};

impl JunosClient {
    /// Source-NAT rule summary, one flat record per configured rule.
    ///
    /// `retrieve-source-nat-summary` — extracts each rule's name, context
    /// zones, and action. A device with no source-NAT configuration yields
    /// the zero-entry set.
    pub async fn snat_rules(&self) -> Result<SnatRuleSet, Error> {
        let body = self.rpc("retrieve-source-nat-summary", &[]).await?;
        Ok(extract_rules(&body).map_or_else(
            || {
                debug!("no source NAT configuration on device");
                SnatRuleSet::empty()
            },
            SnatRuleSet::new,
        ))
    }

    /// Address range of the named source-NAT pool.
    ///
    /// `retrieve-source-nat-pool-information` with the `all` flag. Only the
    /// FIRST pool entry in the response is ever inspected, and `pool_name`
    /// matches by substring containment against that entry's name; a
    /// matching second pool is never found. A miss returns the zero-entry
    /// record carrying the requested name.
    pub async fn snat_pool_range(&self, pool_name: &str) -> Result<SnatPoolRange, Error> {
        let body = self
            .rpc("retrieve-source-nat-pool-information", &[("all", "")])
            .await?;
        Ok(extract_pool_range(&body, pool_name).map_or_else(
            || {
                debug!("source NAT pool {pool_name} not found");
                SnatPoolRange::absent(pool_name)
            },
            |range| SnatPoolRange::matched(pool_name, range),
        ))
    }
}

fn extract_rules(body: &Value) -> Option<Vec<SnatRule>> {
    let entries = first(body, "ssg-source-nat-summary-information")
        .and_then(|info| list(info, "ssg-source-rule-entry"))?;

    let mut rules = Vec::with_capacity(entries.len());
    for entry in entries {
        rules.push(SnatRule {
            name: leaf(entry, "ssg-source-rule-name")?.to_owned(),
            from_zone: leaf(entry, "ssg-source-rule-context-from")?.to_owned(),
            to_zone: leaf(entry, "ssg-source-rule-context-to")?.to_owned(),
            action: leaf(entry, "ssg-source-rule-action")?.to_owned(),
        });
    }
    Some(rules)
}

fn extract_pool_range(body: &Value, pool_name: &str) -> Option<AddressRange> {
    let pool = first(body, "source-nat-pool-detail-information")
        .and_then(|info| first(info, "source-nat-pool-info-entry"))?;

    let device_name = leaf(pool, "pool-name")?;
    if !device_name.contains(pool_name) {
        return None;
    }

    let range = first(pool, "source-pool-address-range")?;
    Some(AddressRange {
        low: leaf(range, "address-range-low")?.to_owned(),
        high: leaf(range, "address-range-high")?.to_owned(),
    })
}
