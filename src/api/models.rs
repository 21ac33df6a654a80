//! Food catalog models and their JSON wire form.
//!
//! Contains the `Food` record served by the backend and the `FoodInput`
//! edited in the add/edit modals.

use serde::{Deserialize, Deserializer, Serialize};

/// A food record from the catalog.
///
/// The `id` is assigned by the backend and never changes afterwards. It is
/// the only key used to reconcile the local list after an update or delete.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Food {
    /// Backend-assigned identifier
    pub id: u64,
    /// Dish name
    #[serde(default)]
    pub name: String,
    /// Dish description
    #[serde(default)]
    pub description: String,
    /// Price kept as text (e.g. "19.90")
    #[serde(default, deserialize_with = "price_from_text_or_number")]
    pub price: String,
    /// Whether the dish can currently be ordered
    #[serde(default)]
    pub available: bool,
    /// Image URL
    #[serde(default)]
    pub image: String,
}

impl Food {
    /// Merge modal input into this record.
    ///
    /// # Arguments
    /// * `input` - Fields edited in the modal
    ///
    /// # Returns
    /// * `Food` - Record carrying this food's `id` and `available` with the
    ///   input's name, description, price and image
    pub fn merged_with(&self, input: FoodInput) -> Food {
        Food {
            id: self.id,
            name: input.name,
            description: input.description,
            price: input.price,
            available: self.available,
            image: input.image,
        }
    }

    /// Copy of this record with availability set to `available`.
    pub fn with_available(&self, available: bool) -> Food {
        Food {
            available,
            ..self.clone()
        }
    }

    /// Format price with a currency symbol.
    ///
    /// # Arguments
    /// * `currency_symbol` - Symbol placed before the amount (e.g. "R$")
    ///
    /// # Returns
    /// * `String` - Formatted price (e.g. "R$ 19.90")
    pub fn format_price(&self, currency_symbol: &str) -> String {
        if currency_symbol.is_empty() {
            self.price.clone()
        } else {
            format!("{} {}", currency_symbol, self.price)
        }
    }
}

/// Editable fields of a food, as entered in the add/edit modals.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FoodInput {
    /// Dish name
    pub name: String,
    /// Dish description
    pub description: String,
    /// Price as typed
    pub price: String,
    /// Image URL
    pub image: String,
}

impl From<&Food> for FoodInput {
    fn from(food: &Food) -> Self {
        Self {
            name: food.name.clone(),
            description: food.description.clone(),
            price: food.price.clone(),
            image: food.image.clone(),
        }
    }
}

/// Request body for `POST /foods`.
///
/// New dishes are always created available.
#[derive(Debug, Serialize)]
pub struct NewFood<'a> {
    #[serde(flatten)]
    pub input: &'a FoodInput,
    pub available: bool,
}

impl<'a> NewFood<'a> {
    pub fn new(input: &'a FoodInput) -> Self {
        Self {
            input,
            available: true,
        }
    }
}

/// Accept `"19.90"` as well as `19.9` for the price field. `null` becomes empty.
fn price_from_text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Price {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Option::<Price>::deserialize(deserializer)? {
        Some(Price::Text(text)) => text,
        Some(Price::Number(number)) => number.to_string(),
        None => String::new(),
    })
}
