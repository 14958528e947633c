pub mod catalog;
pub mod error;
pub mod health;
pub mod meal_plan;
pub mod security;
pub mod tags;
