//! Browse session: one user's catalog, filter state, and derived view.

use chrono::{DateTime, Utc};

use vitrine_catalog::{Brand, Catalog, CategoryTag, Price};
use vitrine_core::SessionId;

use crate::filter::{FilterState, SortKey};
use crate::view::{CatalogView, derive_view};

/// Owns the immutable catalog and the session's mutable [`FilterState`].
///
/// Single-threaded and synchronous: each method is one discrete user action
/// that mutates state in place and hands back the freshly derived view. The
/// session is created at browse start and discarded at the end; nothing is
/// persisted.
#[derive(Debug, Clone)]
pub struct BrowseSession {
    id: SessionId,
    started_at: DateTime<Utc>,
    catalog: Catalog,
    state: FilterState,
}

impl BrowseSession {
    /// Start a session over a catalog with default filter state.
    pub fn new(catalog: Catalog) -> Self {
        let id = SessionId::new();
        tracing::info!(session = %id, products = catalog.len(), "browse session started");
        let state = FilterState::new(catalog.price_ceiling());
        Self {
            id,
            started_at: Utc::now(),
            catalog,
            state,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    /// Derive the current view without mutating anything.
    pub fn view(&self) -> CatalogView<'_> {
        derive_view(&self.catalog, &self.state)
    }

    pub fn toggle_category(&mut self, tag: CategoryTag) -> CatalogView<'_> {
        tracing::debug!(session = %self.id, tag = %tag, "category toggled");
        self.state.toggle_category(tag);
        self.recompute()
    }

    pub fn toggle_brand(&mut self, brand: Brand) -> CatalogView<'_> {
        tracing::debug!(session = %self.id, brand = %brand, "brand toggled");
        self.state.toggle_brand(brand);
        self.recompute()
    }

    pub fn set_price_range(&mut self, min: Price, max: Price) -> CatalogView<'_> {
        tracing::debug!(session = %self.id, %min, %max, "price range set");
        self.state.set_price_range(min, max);
        self.recompute()
    }

    pub fn set_sort_key(&mut self, key: SortKey) -> CatalogView<'_> {
        tracing::debug!(session = %self.id, ?key, "sort key set");
        self.state.set_sort_key(key);
        self.recompute()
    }

    pub fn reset_filters(&mut self) -> CatalogView<'_> {
        tracing::debug!(session = %self.id, "filters reset");
        self.state.reset_filters();
        self.recompute()
    }

    fn recompute(&self) -> CatalogView<'_> {
        let view = derive_view(&self.catalog, &self.state);
        tracing::debug!(session = %self.id, results = view.result_count(), "view recomputed");
        view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_catalog::{Product, ProductId, Rating, Specs};

    fn product(id: u64, price: u64, category: &str, brand: &str, rating: f64) -> Product {
        Product::new(
            ProductId::new(id),
            format!("Product {id}"),
            Price::new(price),
            CategoryTag::from(category),
            Brand::from(brand),
            Rating::new(rating).unwrap(),
            Specs::new(),
            format!("https://example.com/{id}.jpg"),
        )
    }

    fn session() -> BrowseSession {
        let catalog = Catalog::new(
            vec![
                product(1, 34999, "audio", "SoundElite", 4.9),
                product(2, 149999, "computers", "TechCore", 4.8),
                product(3, 89999, "phones", "MobileX", 4.7),
            ],
            vec!["audio".into(), "computers".into(), "phones".into()],
            vec!["SoundElite".into(), "TechCore".into(), "MobileX".into()],
            Price::new(200000),
        )
        .unwrap();
        BrowseSession::new(catalog)
    }

    #[test]
    fn fresh_session_shows_the_whole_catalog_by_rating() {
        let session = session();
        let view = session.view();
        assert_eq!(
            view.ids(),
            vec![ProductId::new(1), ProductId::new(2), ProductId::new(3)]
        );
    }

    #[test]
    fn every_mutation_returns_the_recomputed_view() {
        let mut session = session();

        let view = session.set_price_range(Price::new(0), Price::new(100000));
        assert_eq!(view.ids(), vec![ProductId::new(1), ProductId::new(3)]);

        let view = session.toggle_category("phones".into());
        assert_eq!(view.ids(), vec![ProductId::new(3)]);

        let view = session.toggle_category("phones".into());
        assert_eq!(view.ids(), vec![ProductId::new(1), ProductId::new(3)]);
    }

    #[test]
    fn sort_change_reorders_without_changing_the_count() {
        let mut session = session();
        let before = session.view().result_count();

        let view = session.set_sort_key(SortKey::PriceDesc);
        assert_eq!(view.result_count(), before);
        assert_eq!(
            view.ids(),
            vec![ProductId::new(2), ProductId::new(3), ProductId::new(1)]
        );
    }

    #[test]
    fn reset_returns_to_the_default_view_but_keeps_sort() {
        let mut session = session();
        session.set_sort_key(SortKey::PriceAsc);
        session.set_price_range(Price::new(0), Price::new(50000));
        session.toggle_brand("TechCore".into());

        let view = session.reset_filters();
        assert_eq!(view.result_count(), 3);
        assert_eq!(
            view.ids(),
            vec![ProductId::new(1), ProductId::new(3), ProductId::new(2)]
        );
        assert_eq!(session.state().sort_key(), SortKey::PriceAsc);
    }

    #[test]
    fn zero_match_state_is_reachable_and_recoverable() {
        let mut session = session();
        let view = session.toggle_brand("NoSuchBrand".into());
        assert!(view.is_empty());

        let view = session.reset_filters();
        assert_eq!(view.result_count(), 3);
    }
}
