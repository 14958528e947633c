use poem_openapi::Object;

use business::domain::catalog::model::MealCatalog;

/// Selectable meal names, one list per meal type.
#[derive(Debug, Clone, Object)]
pub struct MealCatalogDto {
    pub breakfast: Vec<String>,
    pub lunch: Vec<String>,
    pub dinner: Vec<String>,
    pub snack: Vec<String>,
}

impl From<MealCatalog> for MealCatalogDto {
    fn from(catalog: MealCatalog) -> Self {
        Self {
            breakfast: catalog.breakfast,
            lunch: catalog.lunch,
            dinner: catalog.dinner,
            snack: catalog.snack,
        }
    }
}

impl From<MealCatalogDto> for MealCatalog {
    fn from(dto: MealCatalogDto) -> Self {
        MealCatalog::new(dto.breakfast, dto.lunch, dto.dinner, dto.snack)
    }
}

#[derive(Debug, Clone, Object)]
pub struct AddCatalogItemRequest {
    /// Meal name (cannot be empty)
    pub name: String,
}
