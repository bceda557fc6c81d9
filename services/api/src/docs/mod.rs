//! services/api/src/docs/mod.rs
//!
//! Assembles the OpenAPI document for the API: fixed metadata, servers and
//! tags, one pair of generated paths per collection, then the operations
//! annotated on the service's own handlers merged on top.

pub mod paths;

use crate::web::rest::RoutesDoc;
use dattebayo_core::{API_METADATA, COLLECTION_NAMES, SERVERS, TAGS};
use std::sync::OnceLock;
use tracing::debug;
use utoipa::openapi::info::{ContactBuilder, InfoBuilder};
use utoipa::openapi::server::ServerBuilder;
use utoipa::openapi::tag::TagBuilder;
use utoipa::openapi::{OpenApi as OpenApiDoc, OpenApiBuilder};
use utoipa::OpenApi;

pub use paths::generate_paths;

/// The generated document before annotated handlers are merged in.
///
/// Deterministic: the same collections always produce the same document.
pub fn base_document(collections: &[&str]) -> OpenApiDoc {
    let info = InfoBuilder::new()
        .title(API_METADATA.title)
        .version(API_METADATA.version)
        .description(Some(API_METADATA.description))
        .contact(Some(
            ContactBuilder::new()
                .name(Some(API_METADATA.contact_name))
                .build(),
        ))
        .build();

    let servers = SERVERS.iter().map(|server| {
        ServerBuilder::new()
            .url(server.url)
            .description(Some(server.description))
            .build()
    });

    let tags = TAGS.iter().map(|tag| {
        TagBuilder::new()
            .name(tag.name)
            .description(Some(tag.description))
            .build()
    });

    debug!("Documenting {} collections", collections.len());

    OpenApiBuilder::new()
        .info(info)
        .servers(Some(servers))
        .tags(Some(tags))
        .paths(generate_paths(collections))
        .build()
}

/// Builds the complete document: the base plus every annotated handler.
pub fn build_openapi(collections: &[&str]) -> OpenApiDoc {
    let mut doc = base_document(collections);
    doc.merge(RoutesDoc::openapi());
    doc
}

/// The document for the API's collections, built on first use and shared
/// for the rest of the process.
pub fn openapi() -> &'static OpenApiDoc {
    static DOC: OnceLock<OpenApiDoc> = OnceLock::new();
    DOC.get_or_init(|| build_openapi(COLLECTION_NAMES))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_document_carries_fixed_metadata() {
        let doc = base_document(COLLECTION_NAMES);

        assert_eq!(doc.info.title, "Dattebayo API");
        assert_eq!(doc.info.version, "1.0.0");
        assert_eq!(
            doc.info.contact.as_ref().and_then(|c| c.name.as_deref()),
            Some("API Support")
        );

        let servers = doc.servers.as_ref().unwrap();
        assert_eq!(servers.len(), 2);
        assert_eq!(servers[0].url, "http://localhost:8080");
        assert_eq!(servers[1].url, "https://dattebayo-api.onrender.com");

        let tags: Vec<&str> = doc.tags.as_ref().unwrap().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(
            tags,
            [
                "Characters",
                "Akatsuki",
                "Clans",
                "Kara",
                "Kekkei Genkai",
                "Tailed Beasts",
                "Teams",
                "Villages"
            ]
        );
    }

    #[test]
    fn empty_collections_keep_metadata_but_no_paths() {
        let doc = base_document(&[]);
        assert!(doc.paths.paths.is_empty());
        assert_eq!(doc.servers.map(|s| s.len()), Some(2));
        assert_eq!(doc.tags.map(|t| t.len()), Some(8));
    }

    #[test]
    fn merge_keeps_base_metadata_and_adds_annotated_routes() {
        let doc = build_openapi(&["clans"]);

        assert_eq!(doc.info.title, "Dattebayo API");
        assert!(doc.paths.paths.contains_key("/clans"));
        assert!(doc.paths.paths.contains_key("/clans/{ids}"));
        assert!(doc.paths.paths.contains_key("/"));
        assert!(doc.paths.paths.contains_key("/health"));

        let tags: Vec<&str> = doc.tags.as_ref().unwrap().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(tags.len(), 9);
        assert_eq!(tags[0], "Characters");
        assert_eq!(tags[8], "Meta");
    }

    #[test]
    fn assembling_twice_gives_the_same_document() {
        let first = serde_json::to_value(build_openapi(COLLECTION_NAMES)).unwrap();
        let second = serde_json::to_value(build_openapi(COLLECTION_NAMES)).unwrap();
        assert_eq!(first, second);
        assert!(build_openapi(COLLECTION_NAMES) == build_openapi(COLLECTION_NAMES));
    }

    #[test]
    fn cached_document_is_shared() {
        let first = openapi();
        let second = openapi();
        assert!(std::ptr::eq(first, second));
        assert_eq!(first.paths.paths.len(), COLLECTION_NAMES.len() * 2 + 2);
    }
}
