// Safe descent through Junos JSON RPC output.
//
// The JSON rendering wraps every XML element in a single-element array and
// every leaf in a `[{"data": "<value>"}]` cell. These helpers walk that
// shape, returning `None` on any missing step so a query can degrade to
// its zero-entry record instead of erroring.

use serde_json::Value;

/// First element of the array at `key`: `value[key][0]`.
pub(crate) fn first<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    value.get(key)?.get(0)
}

/// The `data` string of the leaf cell at `key`: `value[key][0]["data"]`.
pub(crate) fn leaf<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    first(value, key)?.get("data")?.as_str()
}

/// The full array at `key`.
pub(crate) fn list<'a>(value: &'a Value, key: &str) -> Option<&'a [Value]> {
    value.get(key)?.as_array().map(Vec::as_slice)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use serde_json::json;

    use super::*;

    #[test]
    fn first_descends_one_element_arrays() {
        let doc = json!({ "outer": [{ "inner": [{ "data": "x" }] }] });
        let outer = first(&doc, "outer").unwrap();
        assert!(outer.get("inner").is_some());
        assert!(first(&doc, "missing").is_none());
        assert!(first(&json!({ "outer": [] }), "outer").is_none());
    }

    #[test]
    fn leaf_reads_data_cells() {
        let doc = json!({ "pool-name": [{ "data": "pool_outbound" }] });
        assert_eq!(leaf(&doc, "pool-name"), Some("pool_outbound"));
        assert_eq!(leaf(&doc, "pool-id"), None);
        // present but not a data cell
        let doc = json!({ "pool-name": [{ "value": "x" }] });
        assert_eq!(leaf(&doc, "pool-name"), None);
    }

    #[test]
    fn list_returns_whole_arrays() {
        let doc = json!({ "names": [{ "data": "a" }, { "data": "b" }] });
        assert_eq!(list(&doc, "names").unwrap().len(), 2);
        assert!(list(&doc, "other").is_none());
        assert!(list(&json!({ "names": "scalar" }), "names").is_none());
    }
}
