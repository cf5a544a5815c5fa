//! The fixed diagnostic offer used for endpoint smoke-testing.

use offerscope_types::wire;

/// Builds the sample offer appended when `includeSampleOffer` is enabled.
///
/// Identity values are constant and self-describing so a fabricated offer
/// can never be mistaken for a live one.
pub fn sample_offer() -> wire::Offer {
    wire::Offer {
        id: "offer-id".to_string(),
        framework_id: "framework-id".to_string(),
        slave_id: "slave-id".to_string(),
        hostname: "hostname".to_string(),
        resources: vec![wire::Resource {
            name: "cpu".to_string(),
            kind: wire::ValueKind::Scalar,
            scalar: Some(16.7),
            ranges: None,
            set: None,
        }],
        attributes: vec![wire::Attribute {
            name: "attr".to_string(),
            kind: wire::ValueKind::Text,
            scalar: None,
            ranges: None,
            set: None,
            text: Some("some text".to_string()),
        }],
        executor_ids: Vec::new(),
    }
}
