//! JSON presentation rendering for scheduler-held offers.
//!
//! Every function here is a pure conversion from the decoded offer model to
//! the generic JSON mapping the `/offers` endpoint serves: string keys,
//! arrays in input order, nested mappings for record lists. Nothing is
//! cached or shared; a document is built per request and dropped once
//! serialized.
//!
//! Record output contract: a rendered resource or attribute holds the
//! `name` key plus exactly one of `scalar`, `ranges`, `set` or `text`,
//! chosen by the value's variant. Ranges render as `"<begin>-<end>"`
//! strings; both ranges and set members keep the order the pool provided,
//! unsorted and unmerged.

use offerscope_types::{Attribute, Offer, Resource, TypedValue};
use serde_json::{Map, Value};

/// Renders a typed value into its JSON payload.
///
/// The key the payload is stored under is the record's concern; this
/// function only shapes the payload itself.
pub fn render_value(value: &TypedValue) -> Value {
    match value {
        TypedValue::Scalar(magnitude) => Value::from(*magnitude),
        TypedValue::Ranges(ranges) => Value::Array(
            ranges
                .iter()
                .map(|range| Value::String(format!("{}-{}", range.begin, range.end)))
                .collect(),
        ),
        TypedValue::Set(items) => {
            Value::Array(items.iter().map(|item| Value::String(item.clone())).collect())
        }
        TypedValue::Text(text) => Value::String(text.clone()),
    }
}

/// The output key a value renders under.
fn variant_key(value: &TypedValue) -> &'static str {
    match value {
        TypedValue::Scalar(_) => "scalar",
        TypedValue::Ranges(_) => "ranges",
        TypedValue::Set(_) => "set",
        TypedValue::Text(_) => "text",
    }
}

fn render_record(name: &str, value: &TypedValue) -> Map<String, Value> {
    let mut record = Map::new();
    record.insert("name".to_string(), Value::String(name.to_string()));
    record.insert(variant_key(value).to_string(), render_value(value));
    record
}

/// Renders one attribute as its `name` plus the single variant key.
pub fn render_attribute(attribute: &Attribute) -> Map<String, Value> {
    render_record(&attribute.name, &attribute.value)
}

/// Renders one resource as its `name` plus the single variant key.
pub fn render_resource(resource: &Resource) -> Map<String, Value> {
    render_record(&resource.name, &resource.value)
}

/// Renders a whole offer into the generic mapping served to clients.
///
/// Identity fields are copied verbatim under fixed keys; `resources`,
/// `attributes` and `executor_ids` are always present, as empty arrays
/// when the offer carries none.
pub fn render_offer(offer: &Offer) -> Map<String, Value> {
    let mut document = Map::new();
    document.insert("id".to_string(), Value::String(offer.id.clone()));
    document.insert(
        "framework_id".to_string(),
        Value::String(offer.framework_id.clone()),
    );
    document.insert("slave_id".to_string(), Value::String(offer.slave_id.clone()));
    document.insert("hostname".to_string(), Value::String(offer.hostname.clone()));
    document.insert(
        "resources".to_string(),
        Value::Array(
            offer
                .resources
                .iter()
                .map(|resource| Value::Object(render_resource(resource)))
                .collect(),
        ),
    );
    document.insert(
        "attributes".to_string(),
        Value::Array(
            offer
                .attributes
                .iter()
                .map(|attribute| Value::Object(render_attribute(attribute)))
                .collect(),
        ),
    );
    document.insert(
        "executor_ids".to_string(),
        Value::Array(
            offer
                .executor_ids
                .iter()
                .map(|id| Value::String(id.clone()))
                .collect(),
        ),
    );
    document
}

#[cfg(test)]
mod tests {
    use super::*;
    use offerscope_types::ValueRange;
    use serde_json::json;

    fn offer_skeleton() -> Offer {
        Offer {
            id: "offer-1".to_string(),
            framework_id: "fw-1".to_string(),
            slave_id: "slave-1".to_string(),
            hostname: "host-1".to_string(),
            resources: Vec::new(),
            attributes: Vec::new(),
            executor_ids: Vec::new(),
        }
    }

    #[test]
    fn test_scalar_renders_as_raw_number() {
        assert_eq!(render_value(&TypedValue::Scalar(16.7)), json!(16.7));
        assert_eq!(render_value(&TypedValue::Scalar(4.0)), json!(4.0));
    }

    #[test]
    fn test_range_renders_as_begin_dash_end() {
        let value = TypedValue::Ranges(vec![ValueRange::new(5, 12)]);
        assert_eq!(render_value(&value), json!(["5-12"]));
    }

    #[test]
    fn test_ranges_keep_input_order_unmerged() {
        let value = TypedValue::Ranges(vec![
            ValueRange::new(31000, 32000),
            ValueRange::new(100, 200),
            ValueRange::new(150, 180),
        ]);
        assert_eq!(render_value(&value), json!(["31000-32000", "100-200", "150-180"]));
    }

    #[test]
    fn test_set_keeps_member_order() {
        let value = TypedValue::Set(vec!["b".into(), "a".into(), "c".into()]);
        assert_eq!(render_value(&value), json!(["b", "a", "c"]));
    }

    #[test]
    fn test_text_renders_as_plain_string() {
        assert_eq!(render_value(&TypedValue::Text("rack-3".into())), json!("rack-3"));
    }

    #[test]
    fn test_record_carries_name_and_exactly_one_variant_key() {
        let cases = vec![
            (TypedValue::Scalar(1.0), "scalar"),
            (TypedValue::Ranges(vec![ValueRange::new(1, 2)]), "ranges"),
            (TypedValue::Set(vec!["x".into()]), "set"),
            (TypedValue::Text("t".into()), "text"),
        ];
        for (value, expected_key) in cases {
            let record = render_attribute(&Attribute::new("attr", value));
            assert_eq!(record.len(), 2);
            assert_eq!(record.get("name"), Some(&json!("attr")));
            assert!(record.contains_key(expected_key));
        }
    }

    #[test]
    fn test_resource_record_mirrors_attribute_shape() {
        let record = render_resource(&Resource::new("cpus", TypedValue::Scalar(8.0)));
        assert_eq!(record.len(), 2);
        assert_eq!(record.get("name"), Some(&json!("cpus")));
        assert_eq!(record.get("scalar"), Some(&json!(8.0)));
    }

    #[test]
    fn test_offer_document_matches_expected_json() {
        let mut offer = offer_skeleton();
        offer.resources = vec![Resource::new("cpu", TypedValue::Scalar(4.0))];
        offer.attributes = vec![Attribute::new("rack", TypedValue::Text("rack-3".into()))];
        offer.executor_ids = vec!["exec-1".to_string()];

        let document = render_offer(&offer);
        assert_eq!(
            Value::Object(document),
            json!({
                "id": "offer-1",
                "framework_id": "fw-1",
                "slave_id": "slave-1",
                "hostname": "host-1",
                "resources": [{"name": "cpu", "scalar": 4.0}],
                "attributes": [{"name": "rack", "text": "rack-3"}],
                "executor_ids": ["exec-1"],
            })
        );
    }

    #[test]
    fn test_offer_without_records_renders_empty_arrays() {
        let document = render_offer(&offer_skeleton());
        assert_eq!(document.len(), 7);
        assert_eq!(document.get("resources"), Some(&json!([])));
        assert_eq!(document.get("attributes"), Some(&json!([])));
        assert_eq!(document.get("executor_ids"), Some(&json!([])));
    }

    #[test]
    fn test_offer_record_lists_keep_input_order() {
        let mut offer = offer_skeleton();
        offer.resources = vec![
            Resource::new("mem", TypedValue::Scalar(2048.0)),
            Resource::new("cpus", TypedValue::Scalar(4.0)),
            Resource::new(
                "ports",
                TypedValue::Ranges(vec![ValueRange::new(31000, 32000)]),
            ),
        ];

        let document = render_offer(&offer);
        let names: Vec<&Value> = document["resources"]
            .as_array()
            .unwrap()
            .iter()
            .map(|record| &record["name"])
            .collect();
        assert_eq!(names, vec![&json!("mem"), &json!("cpus"), &json!("ports")]);
    }
}
