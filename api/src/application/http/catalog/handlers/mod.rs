pub mod get_food_items;
