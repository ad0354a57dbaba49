//! Product record and its value objects.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use vitrine_core::{DomainError, DomainResult, Entity, ValueObject};

/// Product identifier (unique within one catalog).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u64);

impl ProductId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Category tag.
///
/// The known universe of tags is supplied alongside the catalog, but the type
/// itself is open: an unknown tag is representable and simply matches no
/// products when used as a filter.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryTag(String);

impl CategoryTag {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for CategoryTag {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CategoryTag {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl ValueObject for CategoryTag {}

/// Brand label, same openness as [`CategoryTag`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Brand(String);

impl Brand {
    pub fn new(brand: impl Into<String>) -> Self {
        Self(brand.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Brand {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Brand {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl ValueObject for Brand {}

/// Price in the smallest currency unit (e.g. cents).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    pub const ZERO: Price = Price(0);

    pub const fn new(minor_units: u64) -> Self {
        Self(minor_units)
    }

    pub fn minor_units(&self) -> u64 {
        self.0
    }
}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl ValueObject for Price {}

/// Customer rating on the [0, 5] scale.
///
/// Construction rejects NaN and out-of-range values, so a rating inside a
/// validated catalog always admits a total order via [`Rating::total_cmp`].
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rating(f64);

impl Rating {
    pub const MIN: f64 = 0.0;
    pub const MAX: f64 = 5.0;

    pub fn new(value: f64) -> DomainResult<Self> {
        if value.is_nan() || !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(DomainError::validation(format!(
                "rating must be within [{}, {}], got {value}",
                Self::MIN,
                Self::MAX
            )));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Check the range invariant on an already-deserialized rating.
    pub fn is_valid(&self) -> bool {
        Self::new(self.0).is_ok()
    }

    /// Total order over ratings (IEEE 754 totalOrder).
    pub fn total_cmp(&self, other: &Rating) -> core::cmp::Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl ValueObject for Rating {}

/// Open mapping from spec name to spec value (e.g. "memory" -> "32GB").
///
/// An arbitrary subset of keys may be present per product. BTreeMap keeps
/// iteration order deterministic for display and serialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Specs(BTreeMap<String, String>);

impl Specs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// One catalog entry. Immutable once ingested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    price: Price,
    category: CategoryTag,
    brand: Brand,
    rating: Rating,
    #[serde(default)]
    specs: Specs,
    image: String,
}

impl Product {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        price: Price,
        category: CategoryTag,
        brand: Brand,
        rating: Rating,
        specs: Specs,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            category,
            brand,
            rating,
            specs,
            image: image.into(),
        }
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn category(&self) -> &CategoryTag {
        &self.category
    }

    pub fn brand(&self) -> &Brand {
        &self.brand
    }

    pub fn rating(&self) -> Rating {
        self.rating
    }

    pub fn specs(&self) -> &Specs {
        &self.specs
    }

    pub fn image(&self) -> &str {
        &self.image
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
