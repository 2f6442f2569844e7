//! Food Collection
//!
//! Ordered list of foods keyed by id. Order is the server's order,
//! with newly created foods appended at the end.

use crate::models::Food;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FoodCollection {
    foods: Vec<Food>,
}

impl FoodCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a food, or replace it in place if the id is already present
    pub fn append(&mut self, food: Food) {
        if !self.replace(food.clone()) {
            self.foods.push(food);
        }
    }

    /// Replace the food with the same id. Returns false (and does nothing) if absent.
    pub fn replace(&mut self, updated: Food) -> bool {
        match self.foods.iter_mut().find(|food| food.id == updated.id) {
            Some(food) => {
                *food = updated;
                true
            }
            None => false,
        }
    }

    /// Remove the food with this id, keeping the others in order
    pub fn remove(&mut self, id: u32) -> Option<Food> {
        let index = self.foods.iter().position(|food| food.id == id)?;
        Some(self.foods.remove(index))
    }

    pub fn get(&self, id: u32) -> Option<&Food> {
        self.foods.iter().find(|food| food.id == id)
    }

    #[cfg(test)]
    pub fn ids(&self) -> Vec<u32> {
        self.foods.iter().map(|food| food.id).collect()
    }

    pub fn to_vec(&self) -> Vec<Food> {
        self.foods.clone()
    }

    pub fn len(&self) -> usize {
        self.foods.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }
}

impl From<Vec<Food>> for FoodCollection {
    /// Duplicate ids collapse onto the first position, last record wins
    fn from(foods: Vec<Food>) -> Self {
        let mut collection = Self::new();
        for food in foods {
            collection.append(food);
        }
        collection
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn food(id: u32, name: &str) -> Food {
        Food {
            id,
            name: name.to_string(),
            image: format!("{}.png", name),
            price: "10.00".to_string(),
            description: String::new(),
            available: true,
        }
    }

    fn sample() -> FoodCollection {
        FoodCollection::from(vec![food(1, "a"), food(7, "b"), food(3, "c")])
    }

    #[test]
    fn test_from_keeps_server_order() {
        assert_eq!(sample().ids(), vec![1, 7, 3]);
    }

    #[test]
    fn test_from_collapses_duplicate_ids() {
        let collection = FoodCollection::from(vec![food(1, "a"), food(2, "b"), food(1, "z")]);
        assert_eq!(collection.ids(), vec![1, 2]);
        assert_eq!(collection.get(1).unwrap().name, "z");
    }

    #[test]
    fn test_append_goes_to_end() {
        let mut collection = sample();
        collection.append(food(5, "Pizza"));
        assert_eq!(collection.ids(), vec![1, 7, 3, 5]);
    }

    #[test]
    fn test_append_existing_id_replaces() {
        let mut collection = sample();
        collection.append(food(7, "again"));
        assert_eq!(collection.ids(), vec![1, 7, 3]);
        assert_eq!(collection.get(7).unwrap().name, "again");
    }

    #[test]
    fn test_replace_by_id() {
        let mut collection = sample();
        assert!(collection.replace(food(3, "New")));
        assert_eq!(collection.get(3).unwrap().name, "New");
        assert_eq!(collection.ids(), vec![1, 7, 3]);
    }

    #[test]
    fn test_replace_missing_is_noop() {
        let mut collection = sample();
        assert!(!collection.replace(food(42, "ghost")));
        assert_eq!(collection, sample());
    }

    #[test]
    fn test_remove_keeps_others_in_order() {
        let mut collection = sample();
        let removed = collection.remove(7);
        assert_eq!(removed.map(|f| f.name), Some("b".to_string()));
        assert!(collection.get(7).is_none());
        assert_eq!(collection.to_vec(), vec![food(1, "a"), food(3, "c")]);
    }

    #[test]
    fn test_remove_missing() {
        let mut collection = sample();
        assert!(collection.remove(99).is_none());
        assert_eq!(collection.len(), 3);
    }
}
