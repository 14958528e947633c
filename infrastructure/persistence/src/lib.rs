pub mod db;
pub mod catalog {
    pub mod entity;
    pub mod repository;
}
pub mod meal_plan {
    pub mod entity;
    pub mod repository;
}
