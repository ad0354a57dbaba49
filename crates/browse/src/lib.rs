//! Catalog Filter Engine.
//!
//! This crate contains the business rules for browsing a catalog, implemented
//! purely as deterministic domain logic (no IO, no HTTP, no storage): filter
//! state, the membership predicate, the sort comparator, and the view
//! derivation pipeline that recomputes the visible product sequence after
//! every mutation.

pub mod filter;
pub mod session;
pub mod view;

pub use filter::{FilterState, PriceRange, SortKey};
pub use session::BrowseSession;
pub use view::{CatalogView, derive_view};
