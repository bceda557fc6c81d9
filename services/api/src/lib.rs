pub mod config;
pub mod docs;
pub mod error;
pub mod web;
