use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Catalog identifier. Assigned sequentially, never reused.
pub type ItemId = u64;

/// Item entity - one catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct Item {
    /// Item name, unique across the catalog at creation time
    pub name: String,
    /// Optional free-form description
    #[serde(default)]
    pub description: Option<String>,
    /// Unit price
    pub price: f64,
    /// Optional tax amount
    #[serde(default)]
    pub tax: Option<f64>,
}

impl Item {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            description: None,
            price,
            tax: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_tax(mut self, tax: f64) -> Self {
        self.tax = Some(tax);
        self
    }

    /// Apply a partial update; only fields present in the patch change.
    pub fn apply_patch(&mut self, patch: ItemPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(tax) = patch.tax {
            self.tax = tax;
        }
    }
}

/// Partial update payload.
///
/// Each field is `None` when absent from the JSON body. The nullable fields
/// use `Some(None)` for an explicit `null`; `name` and `price` cannot be
/// nulled and reject `null`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Validate, ToSchema)]
pub struct ItemPatch {
    #[serde(default, deserialize_with = "present_non_null")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "present_nullable")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "present_non_null")]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "present_nullable")]
    #[schema(value_type = Option<f64>)]
    pub tax: Option<Option<f64>>,
}

/// Field was present; `null` is a deserialization error.
fn present_non_null<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Field was present; `null` becomes `Some(None)`.
fn present_nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Pagination for `GET /items/`
#[derive(Debug, Clone, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListParams {
    /// Number of items to skip
    #[serde(default)]
    pub skip: usize,
    /// Maximum number of items to return
    #[serde(default = "default_limit")]
    #[validate(range(min = 1))]
    pub limit: usize,
}

/// Pagination plus price floor for `GET /query/`
#[derive(Debug, Clone, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct QueryParams {
    /// Number of items to skip (0..100)
    #[serde(default)]
    #[validate(range(max = 99))]
    pub skip: usize,
    /// Maximum number of items to return (1..=100)
    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = 100))]
    pub limit: usize,
    /// Minimum price, inclusive
    #[validate(range(exclusive_min = 0.0))]
    pub price: Option<f64>,
}

fn default_limit() -> usize {
    10
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: default_limit(),
        }
    }
}

impl Default for QueryParams {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: default_limit(),
            price: None,
        }
    }
}

/// Repository-level selection: optional price floor, then offset/limit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemFilter {
    pub min_price: Option<f64>,
    pub skip: usize,
    pub limit: Option<usize>,
}

impl ItemFilter {
    pub fn matches(&self, item: &Item) -> bool {
        self.min_price.is_none_or(|min| item.price >= min)
    }
}

/// Body for single-item responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ItemResponse {
    pub message: String,
    pub item: Item,
}

/// Result of a successful create: the new id and the catalog after insert
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreatedItem {
    pub id: ItemId,
    pub items: Vec<Item>,
}

/// Body for `POST /create_items/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreatedItemResponse {
    pub message: String,
    pub id: ItemId,
    pub item: Item,
    pub items: Vec<Item>,
}

/// The five items every fresh catalog starts with (ids 0..=4).
pub fn seed_items() -> Vec<Item> {
    [(1, 15.0, 2.0), (2, 25.0, 4.0), (3, 35.0, 5.0), (4, 45.0, 7.0), (5, 50.0, 8.0)]
        .into_iter()
        .map(|(n, price, tax)| {
            Item::new(format!("Product {n}"), price)
                .with_description(format!("This is Product {n}"))
                .with_tax(tax)
        })
        .collect()
}
