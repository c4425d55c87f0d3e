use crate::domain::{
    catalog::entities::FoodItem,
    meal_plan::value_objects::{MealPlanRequest, MOTHER_TAG, TargetUser},
};

/// Selects the catalog items a request may draw from.
///
/// Children with a known age are matched on their exact band tag, mothers on
/// the `mother` tag. When nothing matches the whole catalog is returned.
pub fn eligible_food_items(request: &MealPlanRequest, catalog: &[FoodItem]) -> Vec<FoodItem> {
    let tag = match (request.target_user, request.age_band()) {
        (TargetUser::Child, Some(band)) => Some(band.tag()),
        (TargetUser::Mother, _) => Some(MOTHER_TAG),
        (TargetUser::Child, None) => None,
    };

    let filtered: Vec<FoodItem> = match tag {
        Some(tag) => catalog
            .iter()
            .filter(|item| item.is_suitable_for(tag))
            .cloned()
            .collect(),
        None => Vec::new(),
    };

    if filtered.is_empty() {
        return catalog.to_vec();
    }

    filtered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::data::zimbabwe_food_catalog;

    fn names(items: &[FoodItem]) -> Vec<&str> {
        items.iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn mother_keeps_only_mother_items() {
        let catalog = zimbabwe_food_catalog();
        let request = MealPlanRequest::new(TargetUser::Mother, None, "dinner".into());

        let items = eligible_food_items(&request, &catalog);

        assert!(!items.is_empty());
        assert!(items.len() < catalog.len());
        assert!(items.iter().all(|i| i.is_suitable_for("mother")));
    }

    #[test]
    fn child_matches_exact_band_tag() {
        let catalog = zimbabwe_food_catalog();
        let request = MealPlanRequest::new(TargetUser::Child, Some(7), "lunch".into());

        let items = eligible_food_items(&request, &catalog);

        assert_eq!(
            names(&items),
            vec![
                "Mashed Sweet Potato and Avocado",
                "Enriched Maize Porridge (Hupfu)",
                "Mashed Banana and Avocado",
            ]
        );
    }

    #[test]
    fn child_age_ignored_for_mother() {
        let catalog = zimbabwe_food_catalog();
        let with_age = MealPlanRequest::new(TargetUser::Mother, Some(3), "lunch".into());
        let without = MealPlanRequest::new(TargetUser::Mother, None, "lunch".into());

        assert_eq!(
            eligible_food_items(&with_age, &catalog),
            eligible_food_items(&without, &catalog)
        );
    }

    #[test]
    fn empty_match_falls_back_to_full_catalog() {
        let catalog = zimbabwe_food_catalog();
        // No item carries child_0_6.
        let request = MealPlanRequest::new(TargetUser::Child, Some(3), "breakfast".into());

        assert_eq!(eligible_food_items(&request, &catalog), catalog);
    }

    #[test]
    fn child_without_age_gets_full_catalog() {
        let catalog = zimbabwe_food_catalog();
        let request = MealPlanRequest::new(TargetUser::Child, None, "snack".into());

        assert_eq!(eligible_food_items(&request, &catalog), catalog);
    }

    #[test]
    fn empty_catalog_stays_empty() {
        let request = MealPlanRequest::new(TargetUser::Mother, None, "dinner".into());
        assert!(eligible_food_items(&request, &[]).is_empty());
    }
}
