mod common;

use common::fixtures::*;
use common::{TestResult, doc, init_logging};
use filterpath::{PathExpression, Resolution, Value, read, read_expression, validate};
use serde_json::json;

#[test]
fn test_primary_billing_street() {
    init_logging();
    let data = application();
    let result = read(
        &data,
        "application.applicants[relationship='primary'].addresses[type='billing'].street",
    );
    assert_eq!(result, Resolution::Single(&Value::from("456 Business Ave")));
}

#[test]
fn test_home_streets_across_applicants() {
    let data = application();
    let result = read(&data, "application.applicants.addresses[type='home'].street");
    let street = Value::from("123 Main St");
    assert_eq!(result, Resolution::Many(vec![&street, &street]));
}

#[test]
fn test_primary_home_zip() {
    let data = application();
    let result = read(
        &data,
        "application.applicants[relationship='primary'].addresses[type='home'].zip",
    );
    assert_eq!(result, Resolution::Single(&Value::from("10001")));
}

#[test]
fn test_three_condition_predicate() {
    let data = application();
    let result = read(
        &data,
        "application.applicants.addresses[city='NYC' and zip='10001' and type='mailing'].street",
    );
    assert_eq!(result, Resolution::Single(&Value::from("123 Main St")));
}

#[test]
fn test_numeric_literal_quoted_and_bare() {
    let data = typed_records();
    let thirty = Value::from("thirty");
    assert_eq!(read(&data, "items[id=30].name"), Resolution::Single(&thirty));
    assert_eq!(read(&data, "items[id='30'].name"), Resolution::Single(&thirty));
    assert_eq!(read(&data, "items[id=\"30\"].name"), Resolution::Single(&thirty));
    assert!(read(&data, "items[id=31].name").is_absent());
}

#[test]
fn test_decimal_literal() {
    let data = typed_records();
    assert_eq!(
        read(&data, "vals[val=3.14].name"),
        Resolution::Single(&Value::from("pi"))
    );
    assert_eq!(
        read(&data, "vals[val='3.14'].name"),
        Resolution::Single(&Value::from("pi"))
    );
}

#[test]
fn test_boolean_literal() {
    let data = typed_records();
    assert_eq!(
        read(&data, "flags[enabled=true].name"),
        Resolution::Single(&Value::from("on"))
    );
    assert_eq!(
        read(&data, "flags[enabled=FALSE].name"),
        Resolution::Single(&Value::from("off"))
    );
}

#[test]
fn test_no_match_is_absent() {
    let data = doc(json!({
        "applicants": [
            {
                "firstName": "John",
                "addresses": [
                    { "type": "home", "street": "123 Main St" },
                    { "type": "billing", "street": "456 Business Ave" }
                ]
            }
        ]
    }));
    assert_eq!(
        read(&data, "applicants.addresses[type='home'].street"),
        Resolution::Single(&Value::from("123 Main St"))
    );
    assert_eq!(
        read(&data, "applicants.addresses[type='billing'].street"),
        Resolution::Single(&Value::from("456 Business Ave"))
    );
    assert!(read(&data, "applicants.addresses[type='work'].street").is_absent());
}

#[test]
fn test_flattening_multiplies_across_parents() {
    let data = doc(json!({
        "parents": [
            { "kids": [ {"n": 1}, {"n": 2} ] },
            { "kids": [ {"n": 3}, {"n": 4} ] }
        ]
    }));
    let result = read(&data, "parents.kids");
    assert_eq!(result.len(), 4);
    assert!(result.values().iter().all(|v| v.as_map().is_some()));
}

#[test]
fn test_singleton_collapse() {
    let data = doc(json!({ "one": [ "x" ], "two": [ "x", "y" ], "none": [] }));
    assert!(matches!(read(&data, "one"), Resolution::Single(_)));
    assert!(matches!(read(&data, "two"), Resolution::Many(ref v) if v.len() == 2));
    assert!(read(&data, "none").is_absent());
}

#[test]
fn test_results_keep_encounter_order() {
    let data = doc(json!({
        "groups": [
            { "items": [ {"k": "a", "ok": true}, {"k": "b", "ok": false} ] },
            { "items": [ {"k": "c", "ok": true} ] }
        ]
    }));
    assert_eq!(
        read(&data, "groups.items[ok=true].k").to_value(),
        doc(json!(["a", "c"]))
    );
}

#[test]
fn test_removing_a_condition_never_shrinks_the_match_set() {
    let data = application();
    let base = "application.applicants.addresses";
    let all = read(&data, &format!("{}[city='NYC' and zip='10001' and type='mailing']", base));
    let two = read(&data, &format!("{}[city='NYC' and zip='10001']", base));
    let one = read(&data, &format!("{}[city='NYC']", base));
    assert!(all.len() <= two.len());
    assert!(two.len() <= one.len());
    assert_eq!((all.len(), two.len(), one.len()), (1, 3, 4));
}

#[test]
fn test_repeated_reads_are_identical() {
    let data = application();
    let path = "application.applicants.addresses[type='home'].street";
    let first = read(&data, path).to_value();
    for _ in 0..3 {
        assert_eq!(read(&data, path).to_value(), first);
    }
}

#[test]
fn test_dot_inside_quoted_literal() {
    let data = doc(json!({
        "releases": [
            { "version": "1.2", "name": "old" },
            { "version": "1.3", "name": "new" }
        ]
    }));
    assert_eq!(
        read(&data, "releases[version='1.3'].name"),
        Resolution::Single(&Value::from("new"))
    );
    // Bare 1.3 is a decimal literal and matches the string "1.3" by parsing it.
    assert_eq!(
        read(&data, "releases[version=1.3].name"),
        Resolution::Single(&Value::from("new"))
    );
}

#[test]
fn test_malformed_input_fails_soft() -> TestResult {
    let data = application();
    assert!(read(&data, "application.applicants[relationship='primary'.id").is_absent());
    assert!(read(&data, "application..applicants").is_absent());
    assert_eq!(read(&data, "application.applicants[nonsense].id").len(), 2);
    assert!(validate("application.applicants[relationship='primary'.id").is_err());
    assert!(validate("application.applicants[nonsense].id").is_err());
    validate("application.applicants[relationship='primary'].id")?;
    Ok(())
}

#[test]
fn test_preparsed_expression_matches_read() {
    let data = application();
    let path = "application.applicants[relationship='dependent'].firstName";
    let expr = PathExpression::parse(path);
    assert_eq!(read_expression(&data, &expr), read(&data, path));
}

#[test]
fn test_deserialized_payload() -> TestResult {
    let data: Value = serde_json::from_str(
        r#"{ "orders": [ { "total": 10.0, "id": "o1" }, { "total": 10, "id": "o2" } ] }"#,
    )?;
    // Both the float and the integer total equal 10 numerically.
    assert_eq!(read(&data, "orders[total=10].id").len(), 2);
    assert_eq!(read(&data, "orders[total=10.0].id").len(), 2);
    // Textual comparison distinguishes the stored forms.
    assert_eq!(
        read(&data, "orders[total='10'].id"),
        Resolution::Single(&Value::from("o2"))
    );
    Ok(())
}
