//! services/api/tests/openapi_document.rs
//!
//! Checks the serialized OpenAPI document the service publishes.

use dattebayo_api::docs::{base_document, build_openapi, openapi};
use dattebayo_core::COLLECTION_NAMES;
use serde_json::Value;

fn as_json(doc: &utoipa::openapi::OpenApi) -> Value {
    serde_json::to_value(doc).expect("document serializes")
}

#[test]
fn every_collection_has_exactly_its_two_paths() {
    let json = as_json(&base_document(COLLECTION_NAMES));
    let paths = json["paths"].as_object().unwrap();

    assert_eq!(paths.len(), COLLECTION_NAMES.len() * 2);
    for collection in COLLECTION_NAMES {
        assert!(paths.contains_key(&format!("/{}", collection)));
        assert!(paths.contains_key(&format!("/{}/{{ids}}", collection)));
    }
}

#[test]
fn unmapped_collection_falls_back_to_capitalized_tag() {
    let json = as_json(&base_document(&["shinobi"]));
    assert_eq!(json["paths"]["/shinobi"]["get"]["tags"][0], "Shinobi");
    assert_eq!(json["paths"]["/shinobi/{ids}"]["get"]["tags"][0], "Shinobi");
}

#[test]
fn list_schema_property_follows_the_collection_name() {
    let json = as_json(&base_document(&["kara", "tailed-beasts"]));
    for collection in ["kara", "tailed-beasts"] {
        let props = &json["paths"][format!("/{}", collection)]["get"]["responses"]["200"]
            ["content"]["application/json"]["schema"]["properties"];
        assert_eq!(props[collection]["type"], "array");
        assert!(props.get("characters").is_none());
    }
}

#[test]
fn not_found_example_mentions_the_collection() {
    let json = as_json(&base_document(&["villages"]));
    let example = json["paths"]["/villages/{ids}"]["get"]["responses"]["404"]["content"]
        ["text/plain"]["schema"]["examples"][0]
        .as_str()
        .unwrap();
    assert!(example.contains("villages with ids"));
}

#[test]
fn empty_collection_list_still_has_metadata() {
    let json = as_json(&base_document(&[]));
    assert!(json["paths"].as_object().map_or(true, |p| p.is_empty()));
    assert_eq!(json["info"]["title"], "Dattebayo API");
    assert_eq!(json["info"]["contact"]["name"], "API Support");
    assert_eq!(json["servers"].as_array().unwrap().len(), 2);
    assert_eq!(json["tags"].as_array().unwrap().len(), 8);
}

#[test]
fn generation_is_deterministic() {
    let first = serde_json::to_string(&build_openapi(COLLECTION_NAMES)).unwrap();
    let second = serde_json::to_string(&build_openapi(COLLECTION_NAMES)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn published_document_renders_as_json() {
    let rendered = openapi().to_pretty_json().unwrap();
    let parsed: Value = serde_json::from_str(&rendered).unwrap();

    assert!(parsed.get("openapi").is_some());
    assert_eq!(parsed["info"]["version"], "1.0.0");
    assert!(parsed["paths"].get("/characters").is_some());
    assert!(parsed["paths"].get("/health").is_some());
    assert_eq!(
        parsed["servers"][1]["url"],
        "https://dattebayo-api.onrender.com"
    );
}
