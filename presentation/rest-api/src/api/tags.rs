use poem_openapi::Tags;

#[derive(Debug, Tags)]
pub enum ApiTags {
    Health,
    /// Selectable meal names per meal type
    Catalog,
    /// Generated plans and per-slot edits
    MealPlans,
}
