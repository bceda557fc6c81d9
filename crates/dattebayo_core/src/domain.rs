//! crates/dattebayo_core/src/domain.rs
//!
//! Defines the plain descriptor types for the API's documentation metadata.
//! These structs carry no serialization format of their own; the service
//! crate turns them into OpenAPI objects.

/// A documentation tag: one per collection category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagInfo {
    pub name: &'static str,
    pub description: &'static str,
}

/// A server the API is reachable at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerInfo {
    pub url: &'static str,
    pub description: &'static str,
}

/// Top-level metadata shown at the head of the documentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiMetadata {
    pub title: &'static str,
    pub version: &'static str,
    pub description: &'static str,
    pub contact_name: &'static str,
}

pub const API_METADATA: ApiMetadata = ApiMetadata {
    title: "Dattebayo API",
    version: "1.0.0",
    description: "A Naruto-themed REST API providing information about characters, clans, villages, and more from the Naruto universe.",
    contact_name: "API Support",
};

/// Development first, then production.
pub const SERVERS: [ServerInfo; 2] = [
    ServerInfo {
        url: "http://localhost:8080",
        description: "Development server",
    },
    ServerInfo {
        url: "https://dattebayo-api.onrender.com",
        description: "Production server",
    },
];
