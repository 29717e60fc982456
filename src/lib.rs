//! Travel Planning API Library
//!
//! This library provides the core functionality for the travel planning API:
//! AI-backed itinerary generation, destination and culinary discovery, image
//! enrichment, and a typeahead location search over a bundled dataset.
//!
//! # Modules
//!
//! - `ai_client`: Language-model provider client and response parsing.
//! - `config`: Configuration management.
//! - `dataset`: Bundled country and city tables.
//! - `errors`: Error handling types.
//! - `handlers`: HTTP request handlers.
//! - `images`: Stock-photo lookup and list enrichment.
//! - `models`: Request/response models and JSON accessors.
//! - `prompts`: Structured prompt builder and language map.
//! - `prompts_config`: System instructions for each AI feature.
//! - `sanitize`: Placeholder sentinel replacement.

pub mod ai_client;
pub mod config;
pub mod dataset;
pub mod errors;
pub mod handlers;
pub mod images;
pub mod models;
pub mod prompts;
pub mod prompts_config;
pub mod sanitize;
