//! Frontend Models
//!
//! Data structures matching the food API's JSON records.

use serde::{Deserialize, Serialize};

/// A menu entry as stored by the API
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Food {
    pub id: u32,
    pub name: String,
    /// Image URL
    pub image: String,
    /// Formatted currency text, never parsed as a number
    pub price: String,
    pub description: String,
    pub available: bool,
}

impl Food {
    /// Same record with `available` flipped
    pub fn with_availability_toggled(&self) -> Self {
        Self {
            available: !self.available,
            ..self.clone()
        }
    }
}

/// Business fields collected by the create/edit forms (a Food minus id and availability)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodFields {
    pub name: String,
    pub image: String,
    pub price: String,
    pub description: String,
}

impl FoodFields {
    /// Merge with the identity and availability of an existing record
    pub fn into_food(self, id: u32, available: bool) -> Food {
        Food {
            id,
            name: self.name,
            image: self.image,
            price: self.price,
            description: self.description,
            available,
        }
    }
}

impl From<&Food> for FoodFields {
    fn from(food: &Food) -> Self {
        Self {
            name: food.name.clone(),
            image: food.image.clone(),
            price: food.price.clone(),
            description: food.description.clone(),
        }
    }
}

/// POST body for a new food. The server assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewFood {
    #[serde(flatten)]
    pub fields: FoodFields,
    pub available: bool,
}

impl From<FoodFields> for NewFood {
    /// New foods always start out available
    fn from(fields: FoodFields) -> Self {
        Self {
            fields,
            available: true,
        }
    }
}
