pub mod catalog;
pub mod meal_plan;
pub mod server;
pub mod system;
