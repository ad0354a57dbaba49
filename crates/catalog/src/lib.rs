//! Catalog reference data module.
//!
//! This crate contains the immutable product collection and its filter-option
//! universes, implemented purely as deterministic domain data (no IO, no HTTP,
//! no storage). The collection is validated once at ingest and never mutated
//! afterwards.

pub mod catalog;
pub mod product;

pub use catalog::{Catalog, CatalogDocument};
pub use product::{Brand, CategoryTag, Price, Product, ProductId, Rating, Specs};
