//! Filter state: price bounds, selections, sort key, and the membership
//! predicate.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use vitrine_catalog::{Brand, CategoryTag, Price, Product};
use vitrine_core::ValueObject;

/// Inclusive price window, always well-formed (min ≤ max ≤ ceiling).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    min: Price,
    max: Price,
}

impl PriceRange {
    /// Build a range from an arbitrary (min, max) pair.
    ///
    /// A reversed pair is swapped and both bounds are clamped to the ceiling.
    /// An invalid range is never produced and never an error; the correction
    /// is silent so a slider mid-drag cannot fail the session.
    pub fn normalized(min: Price, max: Price, ceiling: Price) -> Self {
        let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
        Self {
            min: lo.min(ceiling),
            max: hi.min(ceiling),
        }
    }

    /// The full window [0, ceiling].
    pub fn full(ceiling: Price) -> Self {
        Self {
            min: Price::ZERO,
            max: ceiling,
        }
    }

    pub fn min(&self) -> Price {
        self.min
    }

    pub fn max(&self) -> Price {
        self.max
    }

    pub fn contains(&self, price: Price) -> bool {
        self.min <= price && price <= self.max
    }
}

impl ValueObject for PriceRange {}

/// Display ordering for the derived view.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Descending by rating (the storefront default).
    #[default]
    RatingDesc,
    /// Ascending by price.
    PriceAsc,
    /// Descending by price.
    PriceDesc,
}

impl SortKey {
    /// Comparator for the derived view.
    ///
    /// Ties compare `Equal`; the pipeline relies on a stable sort to keep the
    /// filtered sequence's relative order among equal-key products.
    pub fn compare(&self, a: &Product, b: &Product) -> core::cmp::Ordering {
        match self {
            SortKey::RatingDesc => b.rating().total_cmp(&a.rating()),
            SortKey::PriceAsc => a.price().cmp(&b.price()),
            SortKey::PriceDesc => b.price().cmp(&a.price()),
        }
    }
}

/// Mutable per-session filter constraints.
///
/// Created with defaults at session start, mutated in place by discrete user
/// actions, discarded with the session. Nothing here is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    price_range: PriceRange,
    selected_categories: BTreeSet<CategoryTag>,
    selected_brands: BTreeSet<Brand>,
    sort_key: SortKey,
    ceiling: Price,
}

impl FilterState {
    /// Defaults: full price window, no selections, rating-descending sort.
    pub fn new(ceiling: Price) -> Self {
        Self {
            price_range: PriceRange::full(ceiling),
            selected_categories: BTreeSet::new(),
            selected_brands: BTreeSet::new(),
            sort_key: SortKey::default(),
            ceiling,
        }
    }

    pub fn price_range(&self) -> PriceRange {
        self.price_range
    }

    pub fn selected_categories(&self) -> &BTreeSet<CategoryTag> {
        &self.selected_categories
    }

    pub fn selected_brands(&self) -> &BTreeSet<Brand> {
        &self.selected_brands
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    /// Membership predicate: all three clauses must hold.
    ///
    /// An empty selection set means "no filter on that dimension", not "match
    /// nothing". Pure function of the state and the product.
    pub fn matches(&self, product: &Product) -> bool {
        let price_ok = self.price_range.contains(product.price());
        let category_ok = self.selected_categories.is_empty()
            || self.selected_categories.contains(product.category());
        let brand_ok =
            self.selected_brands.is_empty() || self.selected_brands.contains(product.brand());
        price_ok && category_ok && brand_ok
    }

    /// Flip category membership. Two toggles of the same tag cancel out.
    ///
    /// Tags outside the known universe are accepted; they simply match zero
    /// products.
    pub fn toggle_category(&mut self, tag: CategoryTag) {
        if !self.selected_categories.remove(&tag) {
            self.selected_categories.insert(tag);
        }
    }

    /// Flip brand membership, same contract as [`toggle_category`].
    ///
    /// [`toggle_category`]: FilterState::toggle_category
    pub fn toggle_brand(&mut self, brand: Brand) {
        if !self.selected_brands.remove(&brand) {
            self.selected_brands.insert(brand);
        }
    }

    /// Replace the price window, normalizing the pair (see
    /// [`PriceRange::normalized`]).
    pub fn set_price_range(&mut self, min: Price, max: Price) {
        self.price_range = PriceRange::normalized(min, max, self.ceiling);
    }

    pub fn set_sort_key(&mut self, key: SortKey) {
        self.sort_key = key;
    }

    /// Restore the filter dimensions to their defaults in one step.
    ///
    /// The sort key is left untouched; whether sorting also resets is the
    /// rendering layer's call, one `set_sort_key(SortKey::default())` away.
    pub fn reset_filters(&mut self) {
        self.price_range = PriceRange::full(self.ceiling);
        self.selected_categories.clear();
        self.selected_brands.clear();
    }
}
