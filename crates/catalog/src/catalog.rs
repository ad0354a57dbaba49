//! The immutable catalog: product collection plus filter-option universes.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use vitrine_core::{DomainError, DomainResult};

use crate::product::{Brand, CategoryTag, Price, Product, ProductId};

/// Wire shape of the static data source document.
///
/// The category and brand universes are supplied alongside the collection,
/// not derived from it (a product may belong to a tag the storefront does not
/// expose as a filter option, and vice versa).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogDocument {
    pub price_ceiling: Price,
    pub categories: Vec<CategoryTag>,
    pub brands: Vec<Brand>,
    pub products: Vec<Product>,
}

/// Validated, read-only catalog.
///
/// Product order is the supplier's order; the browse pipeline treats it as the
/// stability baseline, so it is preserved exactly as ingested.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
    categories: Vec<CategoryTag>,
    brands: Vec<Brand>,
    price_ceiling: Price,
}

impl Catalog {
    /// Build a catalog, checking the data source's contract once.
    ///
    /// Rejects duplicate product ids, ratings outside [0, 5] and prices above
    /// the ceiling. After construction the catalog is infallible to read.
    pub fn new(
        products: Vec<Product>,
        categories: Vec<CategoryTag>,
        brands: Vec<Brand>,
        price_ceiling: Price,
    ) -> DomainResult<Self> {
        let mut seen = BTreeSet::new();
        for product in &products {
            if !seen.insert(product.id_typed()) {
                return Err(DomainError::conflict(format!(
                    "duplicate product id: {}",
                    product.id_typed()
                )));
            }
            if !product.rating().is_valid() {
                return Err(DomainError::validation(format!(
                    "product {}: rating {} outside [0, 5]",
                    product.id_typed(),
                    product.rating().value()
                )));
            }
            if product.price() > price_ceiling {
                return Err(DomainError::validation(format!(
                    "product {}: price {} above catalog ceiling {}",
                    product.id_typed(),
                    product.price(),
                    price_ceiling
                )));
            }
        }

        Ok(Self {
            products,
            categories,
            brands,
            price_ceiling,
        })
    }

    /// Ingest the static data source from its JSON document form.
    pub fn from_json(json: &str) -> DomainResult<Self> {
        let doc: CatalogDocument = serde_json::from_str(json)
            .map_err(|e| DomainError::validation(format!("catalog document: {e}")))?;
        Self::new(doc.products, doc.categories, doc.brands, doc.price_ceiling)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id_typed() == id)
    }

    /// Filter-option universe for categories, as supplied.
    pub fn categories(&self) -> &[CategoryTag] {
        &self.categories
    }

    /// Filter-option universe for brands, as supplied.
    pub fn brands(&self) -> &[Brand] {
        &self.brands
    }

    pub fn price_ceiling(&self) -> Price {
        self.price_ceiling
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Convenience view: distinct categories actually present in the
    /// collection, in first-appearance order.
    pub fn derived_categories(&self) -> Vec<CategoryTag> {
        let mut seen = BTreeSet::new();
        self.products
            .iter()
            .map(Product::category)
            .filter(|c| seen.insert((*c).clone()))
            .cloned()
            .collect()
    }

    /// Convenience view: distinct brands actually present in the collection,
    /// in first-appearance order.
    pub fn derived_brands(&self) -> Vec<Brand> {
        let mut seen = BTreeSet::new();
        self.products
            .iter()
            .map(Product::brand)
            .filter(|b| seen.insert((*b).clone()))
            .cloned()
            .collect()
    }
}
