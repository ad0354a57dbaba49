//! View derivation pipeline: filter, then stable sort.

use vitrine_catalog::{Catalog, Product, ProductId};

use crate::filter::FilterState;

/// The visible, ordered slice of the catalog for one filter state.
///
/// Borrows the catalog; recomputed from scratch after every mutation (no
/// memoization — the collection is small and recomputation is O(n log n)).
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogView<'a> {
    products: Vec<&'a Product>,
}

impl<'a> CatalogView<'a> {
    pub fn products(&self) -> &[&'a Product] {
        &self.products
    }

    /// The "N results found" count. Equal to the filtered length, independent
    /// of the sort key.
    pub fn result_count(&self) -> usize {
        self.products.len()
    }

    /// Zero matches is a valid terminal state, not an error; the rendering
    /// layer shows its "no results" affordance off this.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn ids(&self) -> Vec<ProductId> {
        self.products.iter().map(|p| p.id_typed()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Product> + '_ {
        self.products.iter().copied()
    }
}

/// Run the pipeline: (a) filter every product through the predicate keeping
/// the collection's relative order, then (b) sort with the state's key.
///
/// `slice::sort_by` is stable, so equal-key products keep their order from
/// step (a) — the tie contract the comparator relies on.
pub fn derive_view<'a>(catalog: &'a Catalog, state: &FilterState) -> CatalogView<'a> {
    let mut products: Vec<&Product> = catalog
        .products()
        .iter()
        .filter(|p| state.matches(p))
        .collect();

    let key = state.sort_key();
    products.sort_by(|a, b| key.compare(a, b));

    CatalogView { products }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::SortKey;
    use vitrine_catalog::{Brand, CategoryTag, Price, Rating, Specs};

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

    fn catalog(products: Vec<Product>) -> Catalog {
        Catalog::new(
            products,
            vec!["audio".into(), "computers".into(), "phones".into()],
            vec!["SoundElite".into(), "TechCore".into(), "MobileX".into()],
            Price::new(200000),
        )
        .unwrap()
    }

    fn storefront_catalog() -> Catalog {
        catalog(vec![
            product(1, 34999, "audio", "SoundElite", 4.9),
            product(2, 149999, "computers", "TechCore", 4.8),
            product(3, 89999, "phones", "MobileX", 4.7),
        ])
    }

    #[test]
    fn price_window_excludes_and_default_sort_is_rating_desc() {
        let catalog = storefront_catalog();
        let mut state = FilterState::new(catalog.price_ceiling());
        state.set_price_range(Price::new(0), Price::new(100000));

        let view = derive_view(&catalog, &state);
        assert_eq!(view.ids(), vec![ProductId::new(1), ProductId::new(3)]);
        assert_eq!(view.result_count(), 2);
    }

    #[test]
    fn category_selection_with_price_asc() {
        let catalog = storefront_catalog();
        let mut state = FilterState::new(catalog.price_ceiling());
        state.toggle_category("phones".into());
        state.set_sort_key(SortKey::PriceAsc);

        let view = derive_view(&catalog, &state);
        assert_eq!(view.ids(), vec![ProductId::new(3)]);
    }

    #[test]
    fn price_desc_over_the_unrestricted_catalog() {
        let catalog = storefront_catalog();
        let mut state = FilterState::new(catalog.price_ceiling());
        state.set_sort_key(SortKey::PriceDesc);

        let view = derive_view(&catalog, &state);
        assert_eq!(
            view.ids(),
            vec![ProductId::new(2), ProductId::new(3), ProductId::new(1)]
        );
    }

    #[test]
    fn zero_matches_is_a_normal_empty_view() {
        let catalog = storefront_catalog();
        let mut state = FilterState::new(catalog.price_ceiling());
        state.toggle_category("appliances".into());

        let view = derive_view(&catalog, &state);
        assert!(view.is_empty());
        assert_eq!(view.result_count(), 0);
    }

    #[test]
    fn equal_price_products_keep_catalog_order() {
        let catalog = catalog(vec![
            product(10, 5000, "audio", "SoundElite", 4.0),
            product(11, 5000, "phones", "MobileX", 3.0),
            product(12, 1000, "audio", "SoundElite", 5.0),
            product(13, 5000, "computers", "TechCore", 2.0),
        ]);
        let mut state = FilterState::new(catalog.price_ceiling());
        state.set_sort_key(SortKey::PriceAsc);

        let view = derive_view(&catalog, &state);
        assert_eq!(
            view.ids(),
            vec![
                ProductId::new(12),
                ProductId::new(10),
                ProductId::new(11),
                ProductId::new(13)
            ]
        );
    }

    #[test]
    fn equal_rating_products_keep_catalog_order() {
        let catalog = catalog(vec![
            product(20, 1000, "audio", "SoundElite", 4.5),
            product(21, 2000, "phones", "MobileX", 4.5),
            product(22, 3000, "computers", "TechCore", 4.5),
        ]);
        let state = FilterState::new(catalog.price_ceiling());

        let view = derive_view(&catalog, &state);
        assert_eq!(
            view.ids(),
            vec![ProductId::new(20), ProductId::new(21), ProductId::new(22)]
        );
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn arb_products() -> impl Strategy<Value = Vec<Product>> {
            prop::collection::vec(
                (
                    0u64..=200000,
                    prop::sample::select(vec!["audio", "computers", "phones"]),
                    prop::sample::select(vec!["SoundElite", "TechCore", "MobileX"]),
                    0.0f64..=5.0,
                ),
                0..20,
            )
            .prop_map(|rows| {
                rows.into_iter()
                    .enumerate()
                    .map(|(i, (price, category, brand, rating))| {
                        product(i as u64, price, category, brand, rating)
                    })
                    .collect()
            })
        }

        fn arb_state() -> impl Strategy<Value = FilterState> {
            (
                0u64..=200000,
                0u64..=200000,
                prop::collection::btree_set(
                    prop::sample::select(vec!["audio", "computers", "phones"]),
                    0..3,
                ),
                prop::collection::btree_set(
                    prop::sample::select(vec!["SoundElite", "TechCore", "MobileX"]),
                    0..3,
                ),
                prop::sample::select(vec![
                    SortKey::RatingDesc,
                    SortKey::PriceAsc,
                    SortKey::PriceDesc,
                ]),
            )
                .prop_map(|(lo, hi, cats, brands, key)| {
                    let mut state = FilterState::new(Price::new(200000));
                    state.set_price_range(Price::new(lo), Price::new(hi));
                    for c in cats {
                        state.toggle_category(c.into());
                    }
                    for b in brands {
                        state.toggle_brand(b.into());
                    }
                    state.set_sort_key(key);
                    state
                })
        }

        proptest! {
            /// Property: a product appears in the view iff the predicate holds.
            #[test]
            fn view_membership_equals_predicate(
                products in arb_products(),
                state in arb_state(),
            ) {
                let catalog = catalog(products);
                let view = derive_view(&catalog, &state);
                let visible = view.ids();

                for p in catalog.products() {
                    prop_assert_eq!(
                        visible.contains(&p.id_typed()),
                        state.matches(p),
                        "product {} membership disagrees with predicate",
                        p.id_typed()
                    );
                }
            }

            /// Property: the result count is the number of matching products,
            /// whatever the sort key.
            #[test]
            fn result_count_is_sort_independent(
                products in arb_products(),
                state in arb_state(),
            ) {
                let catalog = catalog(products);
                let expected = catalog.products().iter().filter(|p| state.matches(p)).count();

                for key in [SortKey::RatingDesc, SortKey::PriceAsc, SortKey::PriceDesc] {
                    let mut keyed = state.clone();
                    keyed.set_sort_key(key);
                    prop_assert_eq!(derive_view(&catalog, &keyed).result_count(), expected);
                }
            }

            /// Property: equal-key products keep their relative order from the
            /// filtered sequence (sort stability).
            #[test]
            fn equal_key_products_stay_in_filtered_order(
                products in arb_products(),
                state in arb_state(),
            ) {
                let catalog = catalog(products);
                let filtered: Vec<ProductId> = catalog
                    .products()
                    .iter()
                    .filter(|p| state.matches(p))
                    .map(|p| p.id_typed())
                    .collect();

                let view = derive_view(&catalog, &state);
                let key = state.sort_key();
                let shown = view.products();

                for pair in shown.windows(2) {
                    if key.compare(pair[0], pair[1]) == core::cmp::Ordering::Equal {
                        let i = filtered.iter().position(|id| *id == pair[0].id_typed());
                        let j = filtered.iter().position(|id| *id == pair[1].id_typed());
                        prop_assert!(i < j, "tied products reordered");
                    }
                }
            }
        }
    }
}
