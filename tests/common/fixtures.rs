use super::doc;
use filterpath::Value;
use serde_json::json;

/// A loan application with a primary and a dependent applicant.
pub fn application() -> Value {
    doc(json!({
        "application": {
            "id": "APP-2025-001",
            "applicants": [
                {
                    "id": "A1",
                    "relationship": "primary",
                    "firstName": "John",
                    "addresses": [
                        { "type": "home", "street": "123 Main St", "city": "NYC", "zip": "10001" },
                        { "type": "billing", "street": "456 Business Ave", "city": "NYC", "zip": "10002" },
                        { "type": "mailing", "street": "123 Main St", "city": "NYC", "zip": "10001" }
                    ]
                },
                {
                    "id": "A2",
                    "relationship": "dependent",
                    "firstName": "Alice",
                    "addresses": [
                        { "type": "home", "street": "123 Main St", "city": "NYC", "zip": "10001" }
                    ]
                }
            ]
        }
    }))
}

/// Numeric, decimal and boolean keyed records.
pub fn typed_records() -> Value {
    doc(json!({
        "items": [
            { "id": 30, "name": "thirty" },
            { "id": 40, "name": "forty" }
        ],
        "vals": [
            { "val": 3.14, "name": "pi" }
        ],
        "flags": [
            { "enabled": true, "name": "on" },
            { "enabled": false, "name": "off" }
        ]
    }))
}
