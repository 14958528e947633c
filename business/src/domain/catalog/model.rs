use serde::{Deserialize, Serialize};

use super::errors::CatalogError;

/// The four fixed meal slots of a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    pub const ALL: [MealType; 4] = [
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Dinner,
        MealType::Snack,
    ];
}

impl std::fmt::Display for MealType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MealType::Breakfast => write!(f, "Breakfast"),
            MealType::Lunch => write!(f, "Lunch"),
            MealType::Dinner => write!(f, "Dinner"),
            MealType::Snack => write!(f, "Snack"),
        }
    }
}

impl std::str::FromStr for MealType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Breakfast" | "breakfast" => Ok(MealType::Breakfast),
            "Lunch" | "lunch" => Ok(MealType::Lunch),
            "Dinner" | "dinner" => Ok(MealType::Dinner),
            "Snack" | "snack" => Ok(MealType::Snack),
            _ => Err(format!("Invalid meal type: {}", s)),
        }
    }
}

/// A user's selectable meal names, one ordered list per meal type.
///
/// Names inside a list are expected to be unique; `add_item` and
/// `normalized` keep them that way, but documents loaded from storage are
/// taken as they are.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MealCatalog {
    #[serde(rename = "Breakfast", default)]
    pub breakfast: Vec<String>,
    #[serde(rename = "Lunch", default)]
    pub lunch: Vec<String>,
    #[serde(rename = "Dinner", default)]
    pub dinner: Vec<String>,
    #[serde(rename = "Snack", default)]
    pub snack: Vec<String>,
}

impl MealCatalog {
    pub fn new(
        breakfast: Vec<String>,
        lunch: Vec<String>,
        dinner: Vec<String>,
        snack: Vec<String>,
    ) -> Self {
        Self {
            breakfast,
            lunch,
            dinner,
            snack,
        }
    }

    /// Catalog handed to a user the first time they open the planner.
    pub fn default_seed() -> Self {
        fn owned(items: &[&str]) -> Vec<String> {
            items.iter().map(|item| item.to_string()).collect()
        }

        Self {
            breakfast: owned(&[
                "Oatmeal with berries",
                "Scrambled eggs on toast",
                "Greek yogurt with granola",
                "Avocado toast",
                "Banana pancakes",
            ]),
            lunch: owned(&[
                "Chicken Caesar salad",
                "Lentil soup",
                "Turkey and cheese sandwich",
                "Quinoa bowl",
                "Tomato pasta salad",
            ]),
            dinner: owned(&[
                "Spaghetti bolognese",
                "Grilled salmon with vegetables",
                "Chicken stir-fry",
                "Beef tacos",
                "Vegetable curry",
            ]),
            snack: owned(&[
                "Apple slices with peanut butter",
                "Hummus and carrots",
                "Mixed nuts",
                "Cheese and crackers",
                "Fruit smoothie",
            ]),
        }
    }

    pub fn items(&self, meal_type: MealType) -> &[String] {
        match meal_type {
            MealType::Breakfast => &self.breakfast,
            MealType::Lunch => &self.lunch,
            MealType::Dinner => &self.dinner,
            MealType::Snack => &self.snack,
        }
    }

    fn items_mut(&mut self, meal_type: MealType) -> &mut Vec<String> {
        match meal_type {
            MealType::Breakfast => &mut self.breakfast,
            MealType::Lunch => &mut self.lunch,
            MealType::Dinner => &mut self.dinner,
            MealType::Snack => &mut self.snack,
        }
    }

    /// Returns the stored spelling of `name` if the list contains it.
    ///
    /// Surrounding whitespace is ignored on both sides.
    pub fn find(&self, meal_type: MealType, name: &str) -> Option<&str> {
        let wanted = name.trim();
        self.items(meal_type)
            .iter()
            .find(|item| item.trim() == wanted)
            .map(|item| item.as_str())
    }

    pub fn contains(&self, meal_type: MealType, name: &str) -> bool {
        self.find(meal_type, name).is_some()
    }

    /// Appends a trimmed name to the list of `meal_type`.
    pub fn add_item(&mut self, meal_type: MealType, name: &str) -> Result<(), CatalogError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CatalogError::NameEmpty);
        }
        if self.contains(meal_type, name) {
            return Err(CatalogError::AlreadyExists);
        }
        self.items_mut(meal_type).push(name.to_string());
        Ok(())
    }

    /// Removes every entry equal to `name` from the list of `meal_type`.
    pub fn remove_item(&mut self, meal_type: MealType, name: &str) -> Result<(), CatalogError> {
        let wanted = name.trim();
        let items = self.items_mut(meal_type);
        let before = items.len();
        items.retain(|item| item.trim() != wanted);
        if items.len() == before {
            return Err(CatalogError::NotFound);
        }
        Ok(())
    }

    /// Trims every name, drops blanks and collapses duplicates, keeping the
    /// first occurrence of each name.
    pub fn normalized(self) -> Self {
        fn clean(items: Vec<String>) -> Vec<String> {
            let mut cleaned: Vec<String> = Vec::with_capacity(items.len());
            for item in items {
                let item = item.trim();
                if !item.is_empty() && !cleaned.iter().any(|kept| kept == item) {
                    cleaned.push(item.to_string());
                }
            }
            cleaned
        }

        Self {
            breakfast: clean(self.breakfast),
            lunch: clean(self.lunch),
            dinner: clean(self.dinner),
            snack: clean(self.snack),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_catalog() -> MealCatalog {
        MealCatalog::new(
            vec!["Oats".to_string(), "Eggs".to_string()],
            vec!["Salad".to_string()],
            vec!["Pasta".to_string(), "Soup".to_string()],
            vec!["Apple".to_string()],
        )
    }

    #[test]
    fn should_parse_meal_type_in_both_cases() {
        assert_eq!("Dinner".parse::<MealType>().unwrap(), MealType::Dinner);
        assert_eq!("snack".parse::<MealType>().unwrap(), MealType::Snack);
        assert!("Brunch".parse::<MealType>().is_err());
    }

    #[test]
    fn should_display_meal_type_with_capital_letter() {
        let names: Vec<String> = MealType::ALL.iter().map(|t| t.to_string()).collect();
        assert_eq!(names, vec!["Breakfast", "Lunch", "Dinner", "Snack"]);
    }

    #[test]
    fn should_seed_every_meal_type() {
        let seed = MealCatalog::default_seed();
        for meal_type in MealType::ALL {
            assert!(!seed.items(meal_type).is_empty());
        }
    }

    #[test]
    fn should_add_trimmed_item() {
        let mut catalog = small_catalog();

        catalog.add_item(MealType::Lunch, "  Wrap ").unwrap();

        assert_eq!(catalog.items(MealType::Lunch), ["Salad", "Wrap"]);
    }

    #[test]
    fn should_reject_empty_item() {
        let mut catalog = small_catalog();

        let result = catalog.add_item(MealType::Snack, "   ");

        assert!(matches!(result, Err(CatalogError::NameEmpty)));
    }

    #[test]
    fn should_reject_duplicate_item() {
        let mut catalog = small_catalog();

        let result = catalog.add_item(MealType::Dinner, "Soup");

        assert!(matches!(result, Err(CatalogError::AlreadyExists)));
        assert_eq!(catalog.items(MealType::Dinner).len(), 2);
    }

    #[test]
    fn should_remove_existing_item() {
        let mut catalog = small_catalog();

        catalog.remove_item(MealType::Breakfast, "Oats").unwrap();

        assert_eq!(catalog.items(MealType::Breakfast), ["Eggs"]);
    }

    #[test]
    fn should_fail_removing_unknown_item() {
        let mut catalog = small_catalog();

        let result = catalog.remove_item(MealType::Breakfast, "Waffles");

        assert!(matches!(result, Err(CatalogError::NotFound)));
    }

    #[test]
    fn should_find_stored_spelling_ignoring_whitespace() {
        let catalog = small_catalog();

        assert_eq!(catalog.find(MealType::Dinner, " Pasta "), Some("Pasta"));
        assert_eq!(catalog.find(MealType::Dinner, "pasta"), None);
    }

    #[test]
    fn should_normalize_blanks_and_duplicates() {
        let catalog = MealCatalog::new(
            vec![" Oats".to_string(), "Oats".to_string(), "".to_string()],
            vec![],
            vec!["Soup".to_string(), " Soup ".to_string(), "Pasta".to_string()],
            vec!["  ".to_string()],
        );

        let normalized = catalog.normalized();

        assert_eq!(normalized.breakfast, vec!["Oats"]);
        assert_eq!(normalized.dinner, vec!["Soup", "Pasta"]);
        assert!(normalized.snack.is_empty());
    }

    #[test]
    fn should_serialize_with_meal_type_keys() {
        let json = serde_json::to_value(small_catalog()).unwrap();

        assert_eq!(json["Breakfast"][1], "Eggs");
        assert_eq!(json["Snack"][0], "Apple");
    }
}
