//! services/api/src/docs/paths.rs
//!
//! Generates the two documented operations every collection exposes: the
//! paginated list at `/{collection}` and the lookup at `/{collection}/{ids}`.

use dattebayo_core::display_name;
use serde_json::json;
use utoipa::openapi::content::ContentBuilder;
use utoipa::openapi::path::{
    HttpMethod, OperationBuilder, Parameter, ParameterBuilder, ParameterIn, PathItem, Paths,
};
use utoipa::openapi::response::{Response, ResponseBuilder, ResponsesBuilder};
use utoipa::openapi::schema::{ArrayBuilder, ObjectBuilder, OneOfBuilder, Type};
use utoipa::openapi::Required;

const JSON: &str = "application/json";
const TEXT: &str = "text/plain";

/// Path of the paginated list endpoint for a collection.
pub fn list_path(collection: &str) -> String {
    format!("/{}", collection)
}

/// Path of the by-ID endpoint for a collection.
pub fn by_ids_path(collection: &str) -> String {
    format!("/{}/{{ids}}", collection)
}

/// Builds the path map for every collection, in input order.
///
/// A repeated identifier replaces the entries written for it earlier.
pub fn generate_paths(collections: &[&str]) -> Paths {
    let mut paths = Paths::new();
    for collection in collections {
        for (path, item) in collection_paths(collection) {
            paths.paths.insert(path, item);
        }
    }
    paths
}

/// The list and by-ID entries for a single collection.
pub fn collection_paths(collection: &str) -> [(String, PathItem); 2] {
    let tag = display_name(collection);
    [
        (list_path(collection), list_item(collection, &tag)),
        (by_ids_path(collection), by_ids_item(collection, &tag)),
    ]
}

fn list_item(collection: &str, tag: &str) -> PathItem {
    let operation = OperationBuilder::new()
        .tag(tag)
        .summary(Some(format!("Get all {}", collection)))
        .description(Some(format!(
            "Retrieve a paginated list of {} with optional name filtering",
            collection
        )))
        .parameter(page_param())
        .parameter(limit_param())
        .parameter(name_param())
        .responses(ResponsesBuilder::new().response("200", page_response(collection)));

    PathItem::new(HttpMethod::Get, operation)
}

fn by_ids_item(collection: &str, tag: &str) -> PathItem {
    let operation = OperationBuilder::new()
        .tag(tag)
        .summary(Some(format!("Get {} by ID(s)", collection)))
        .description(Some(format!(
            "Retrieve one or more {} by their ID(s). Multiple IDs can be provided as comma-separated values.",
            collection
        )))
        .parameter(ids_param())
        .responses(
            ResponsesBuilder::new()
                .response("200", single_or_many_response())
                .response(
                    "400",
                    text_response(
                        "Bad request - At least one ID is required",
                        "At least one id is required".to_string(),
                    ),
                )
                .response(
                    "404",
                    text_response(
                        "Not found - Item(s) with the provided ID(s) not found",
                        format!("{} with ids '1,2' not found", collection),
                    ),
                ),
        );

    PathItem::new(HttpMethod::Get, operation)
}

//=========================================================================================
// Parameters
//=========================================================================================

fn page_param() -> Parameter {
    ParameterBuilder::new()
        .name("page")
        .parameter_in(ParameterIn::Query)
        .required(Required::False)
        .description(Some("Page number for pagination"))
        .schema(Some(
            ObjectBuilder::new()
                .schema_type(Type::Integer)
                .default(Some(json!(1)))
                .minimum(Some(1)),
        ))
        .build()
}

fn limit_param() -> Parameter {
    ParameterBuilder::new()
        .name("limit")
        .parameter_in(ParameterIn::Query)
        .required(Required::False)
        .description(Some("Number of items per page"))
        .schema(Some(
            ObjectBuilder::new()
                .schema_type(Type::Integer)
                .default(Some(json!(20)))
                .minimum(Some(1))
                .maximum(Some(100)),
        ))
        .build()
}

// Matching is case-insensitive and partial; the route handler enforces it.
fn name_param() -> Parameter {
    ParameterBuilder::new()
        .name("name")
        .parameter_in(ParameterIn::Query)
        .required(Required::False)
        .description(Some("Filter by name (case-insensitive partial match)"))
        .schema(Some(ObjectBuilder::new().schema_type(Type::String)))
        .build()
}

fn ids_param() -> Parameter {
    ParameterBuilder::new()
        .name("ids")
        .parameter_in(ParameterIn::Path)
        .required(Required::True)
        .description(Some(
            "Single ID or comma-separated list of IDs (e.g., \"1\" or \"1,2,3\")",
        ))
        .schema(Some(ObjectBuilder::new().schema_type(Type::String)))
        .example(Some(json!("1")))
        .build()
}

//=========================================================================================
// Responses
//=========================================================================================

fn untyped_object() -> ObjectBuilder {
    ObjectBuilder::new().schema_type(Type::Object)
}

fn example_integer(value: i64) -> ObjectBuilder {
    ObjectBuilder::new()
        .schema_type(Type::Integer)
        .examples([json!(value)])
}

/// One page of a collection: the items live under a property named after
/// the collection itself.
fn page_response(collection: &str) -> Response {
    let schema = ObjectBuilder::new()
        .schema_type(Type::Object)
        .property(collection, ArrayBuilder::new().items(untyped_object()))
        .property("currentPage", example_integer(1))
        .property("pageSize", example_integer(20))
        .property("total", example_integer(100));

    ResponseBuilder::new()
        .description("Successful response")
        .content(JSON, ContentBuilder::new().schema(Some(schema)).build())
        .build()
}

// No discriminator: the handler picks the shape from how many ids were asked for.
fn single_or_many_response() -> Response {
    let schema = OneOfBuilder::new()
        .item(untyped_object().description(Some("Single item response")))
        .item(
            ArrayBuilder::new()
                .items(untyped_object())
                .description(Some("Multiple items response")),
        );

    ResponseBuilder::new()
        .description("Successful response")
        .content(JSON, ContentBuilder::new().schema(Some(schema)).build())
        .build()
}

fn text_response(description: &str, example: String) -> Response {
    let schema = ObjectBuilder::new()
        .schema_type(Type::String)
        .examples([json!(example)]);

    ResponseBuilder::new()
        .description(description)
        .content(TEXT, ContentBuilder::new().schema(Some(schema)).build())
        .build()
}
