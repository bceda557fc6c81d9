//! services/api/src/bin/openapi.rs
//!
//! This binary generates the OpenAPI specification for the API and saves it
//! to `openapi.json`, or to the path given as the first argument.

use dattebayo_api::{docs, error::ApiError};

/// Generates the OpenAPI specification and writes it to a file.
fn generate_spec(api_doc: &utoipa::openapi::OpenApi, path: &str) -> Result<(), ApiError> {
    let spec_json = api_doc.to_pretty_json()?;
    std::fs::write(path, spec_json)?;
    println!("OpenAPI specification generated at {}", path);
    Ok(())
}

fn main() -> Result<(), ApiError> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "openapi.json".to_string());
    generate_spec(docs::openapi(), &path)?;
    Ok(())
}
