// Flattened result records.
//
// Each query returns one fixed-shape record; `count` always equals the
// length of the accompanying sequence, enforced by the constructors. The
// zero-entry form of a record means the requested object is absent on the
// device OR the response missed the expected path -- the two are not
// distinguishable by design.

use serde::Serialize;

// ── Source NAT ───────────────────────────────────────────────────────

/// One source-NAT rule flattened from the summary RPC.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnatRule {
    pub name: String,
    pub from_zone: String,
    pub to_zone: String,
    pub action: String,
}

/// All source-NAT rules configured on the device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnatRuleSet {
    pub count: usize,
    pub rules: Vec<SnatRule>,
}

impl SnatRuleSet {
    pub fn new(rules: Vec<SnatRule>) -> Self {
        Self {
            count: rules.len(),
            rules,
        }
    }

    /// The zero-entry form: no SNAT configuration found.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }
}

/// Low/high bounds of a source-NAT pool's first address range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddressRange {
    pub low: String,
    pub high: String,
}

/// Address range of one named source-NAT pool.
///
/// `pool_name` is always the name the caller asked for, so a zero-entry
/// result can still be correlated with its request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnatPoolRange {
    pub count: usize,
    pub pool_name: String,
    pub address_range: Option<AddressRange>,
}

impl SnatPoolRange {
    pub fn matched(pool_name: impl Into<String>, range: AddressRange) -> Self {
        Self {
            count: 1,
            pool_name: pool_name.into(),
            address_range: Some(range),
        }
    }

    /// The zero-entry form: the requested pool was not found.
    pub fn absent(pool_name: impl Into<String>) -> Self {
        Self {
            count: 0,
            pool_name: pool_name.into(),
            address_range: None,
        }
    }
}

// ── Zones ────────────────────────────────────────────────────────────

/// Interface membership of one security zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ZoneInterfaces {
    pub count: usize,
    pub zone: String,
    pub interfaces: Vec<String>,
}

impl ZoneInterfaces {
    pub fn new(zone: impl Into<String>, interfaces: Vec<String>) -> Self {
        Self {
            count: interfaces.len(),
            zone: zone.into(),
            interfaces,
        }
    }

    /// The zero-entry form: the zone does not exist.
    pub fn empty(zone: impl Into<String>) -> Self {
        Self::new(zone, Vec::new())
    }
}

// ── Interfaces ───────────────────────────────────────────────────────

/// IP addresses of one logical interface, prefix lengths stripped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterfaceAddresses {
    pub count: usize,
    pub interface: String,
    pub addresses: Vec<String>,
}

impl InterfaceAddresses {
    pub fn new(interface: impl Into<String>, addresses: Vec<String>) -> Self {
        Self {
            count: addresses.len(),
            interface: interface.into(),
            addresses,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_tracks_sequence_length() {
        let rule = SnatRule {
            name: "r1".into(),
            from_zone: "trust".into(),
            to_zone: "untrust".into(),
            action: "interface".into(),
        };
        assert_eq!(SnatRuleSet::new(vec![rule.clone(), rule]).count, 2);
        assert_eq!(SnatRuleSet::empty().count, 0);

        assert_eq!(ZoneInterfaces::new("dmz", vec!["ge-0/0/1.0".into()]).count, 1);
        assert_eq!(ZoneInterfaces::empty("dmz").count, 0);

        assert_eq!(InterfaceAddresses::new("lo0.0", Vec::new()).count, 0);
    }

    #[test]
    fn absent_pool_keeps_requested_name() {
        let pool = SnatPoolRange::absent("pool_outbound");
        assert_eq!(pool.count, 0);
        assert_eq!(pool.pool_name, "pool_outbound");
        assert_eq!(pool.address_range, None);

        let range = AddressRange {
            low: "1.2.3.4".into(),
            high: "1.2.3.4".into(),
        };
        let pool = SnatPoolRange::matched("pool_outbound", range);
        assert_eq!(pool.count, 1);
    }
}
