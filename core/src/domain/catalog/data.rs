use crate::domain::catalog::entities::{FoodItem, Nutrients};

/// Builds the fixed food catalog served by the planner.
pub fn zimbabwe_food_catalog() -> Vec<FoodItem> {
    vec![
        FoodItem::new(
            "Sadza (Maize Porridge)",
            "Traditional Zimbabwean staple food made from maize meal",
            Nutrients::new(120.0, 2.5, 25.0, 0.5),
            &["mother", "child_9_plus"],
            &["lunch", "dinner"],
            true,
            "🌽🍚",
        ),
        FoodItem::new(
            "Mashed Sweet Potato and Avocado",
            "Nutritious blend for babies combining sweet potatoes and avocados",
            Nutrients::new(150.0, 2.0, 20.0, 7.0),
            &["child_6_plus"],
            &["lunch"],
            true,
            "🍠🥑",
        ),
        FoodItem::new(
            "Enriched Maize Porridge (Hupfu)",
            "A traditional Zimbabwean porridge made from maize meal, enriched with peanut butter and milk for added nutrition.",
            Nutrients::new(180.0, 6.0, 30.0, 4.0),
            &["child_6_plus", "child_9_plus"],
            &["breakfast"],
            true,
            "🌽🥣",
        ),
        FoodItem::new(
            "Lactation-Boosting Oatmeal with Moringa",
            "A nutritious breakfast for breastfeeding mothers that helps boost milk production.",
            Nutrients::new(350.0, 12.0, 45.0, 14.0),
            &["mother"],
            &["breakfast"],
            false,
            "🥣🌿",
        ),
        FoodItem::new(
            "Iron-Rich Liver Stew with Sadza",
            "A traditional Zimbabwean meal that helps new mothers recover from blood loss during childbirth.",
            Nutrients::new(450.0, 35.0, 40.0, 15.0),
            &["mother"],
            &["dinner"],
            true,
            "🍲🍖",
        ),
        FoodItem::new(
            "Pumpkin and Millet Porridge",
            "A nutritious breakfast option combining locally grown pumpkin with millet, rich in iron.",
            Nutrients::new(160.0, 4.0, 28.0, 3.0),
            &["child_7_plus", "child_9_plus", "child_12_plus"],
            &["breakfast"],
            true,
            "🎃🌾",
        ),
        FoodItem::new(
            "Mashed Banana and Avocado",
            "A simple, nutritious first food for babies starting solids.",
            Nutrients::new(120.0, 1.0, 15.0, 8.0),
            &["child_6_plus"],
            &["breakfast", "snack"],
            false,
            "🍌🥑",
        ),
        FoodItem::new(
            "Nutritious Vegetable Soup for Mothers",
            "A hearty soup packed with vegetables and beans to provide essential nutrients for postpartum recovery.",
            Nutrients::new(320.0, 15.0, 45.0, 8.0),
            &["mother"],
            &["lunch", "dinner"],
            false,
            "🍲🥕",
        ),
    ]
}
