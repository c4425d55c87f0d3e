use crate::domain::{
    catalog::entities::FoodItem,
    common::entities::app_errors::CoreError,
    meal_plan::{
        schema::{get_meal_plan_schema, get_recommendations_schema},
        value_objects::MealPlanRequest,
    },
};

pub const MEAL_PLAN_USER_PROMPT: &str = "Please generate a meal plan based on my preferences.";
pub const RECOMMENDATIONS_USER_PROMPT: &str = "Please recommend meals based on my criteria.";

const PERSONA: &str = "You are a nutritional expert specializing in meal planning for mothers \
and children in Zimbabwe.";

const GUIDELINES: &str = "Follow these rules:
1. Target user:
   - mother: focus on maternal needs such as energy, protein, iron, calcium and folate.
   - child: childAge is given in MONTHS. Under 12 months recommend soft, easily digestible \
foods; from 12 months recommend nutrient-dense finger foods and small meals.
2. Meal type: breakfast provides energy for the day, lunch is a balanced meal, dinner is \
nutritious but lighter, a snack is healthy and convenient.
3. Never use ingredients listed in dietaryRestrictions.
4. Shape the plan around nutritionGoals.focus (balanced, protein, iron, calcium, energy).
5. When preferTraditional is true, prefer traditional Zimbabwean foods.";

/// A system/user prompt pair for one completion call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionPrompt {
    pub system: String,
    pub user: String,
}

/// Renders the eligible items and the request into the meal plan prompt.
pub fn build_meal_plan_prompt(
    food_items: &[FoodItem],
    request: &MealPlanRequest,
) -> Result<CompletionPrompt, CoreError> {
    let food_items_json = serde_json::to_string_pretty(food_items)?;
    let request_json = serde_json::to_string_pretty(request)?;
    let schema_json = serde_json::to_string_pretty(&get_meal_plan_schema())?;

    let system = format!(
        "{PERSONA}
Your task is to create a personalized meal plan based on the user's preferences and the \
available food items. The plan must be nutritionally balanced, culturally appropriate and \
tailored to the target user.

{GUIDELINES}

Available food items:
{food_items_json}

User preferences:
{request_json}

The meal plan contains:
1. A brief introduction explaining the benefits of the plan
2. A list of meals for the requested meal type
3. For each meal: name, ingredients, preparation instructions, nutritional information, \
benefits for the target user and one emoji representing the food
4. Tips for preparation and storage

Respond with a single JSON object matching this JSON schema:
{schema_json}"
    );

    Ok(CompletionPrompt {
        system,
        user: MEAL_PLAN_USER_PROMPT.to_string(),
    })
}

/// Renders the eligible items and the criteria into the recommendations prompt.
pub fn build_recommendations_prompt(
    food_items: &[FoodItem],
    request: &MealPlanRequest,
) -> Result<CompletionPrompt, CoreError> {
    let food_items_json = serde_json::to_string_pretty(food_items)?;
    let request_json = serde_json::to_string_pretty(request)?;
    let schema_json = serde_json::to_string_pretty(&get_recommendations_schema())?;

    let system = format!(
        "{PERSONA}
Your task is to recommend 3 to 5 meals that best match the user's criteria, using the \
available food items.

{GUIDELINES}

Available food items:
{food_items_json}

User criteria:
{request_json}

For each recommendation give a name, a brief description, the key nutritional benefits, why \
it suits the target user, and 2 to 4 food emojis for its main ingredients. Use food emojis \
only.

Respond with a single JSON object matching this JSON schema:
{schema_json}"
    );

    Ok(CompletionPrompt {
        system,
        user: RECOMMENDATIONS_USER_PROMPT.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        catalog::data::zimbabwe_food_catalog, meal_plan::value_objects::TargetUser,
    };

    fn request() -> MealPlanRequest {
        let mut request = MealPlanRequest::new(TargetUser::Child, Some(10), "breakfast".into());
        request.dietary_restrictions = vec!["peanuts".into()];
        request
    }

    #[test]
    fn embeds_items_and_request() {
        let items = zimbabwe_food_catalog();
        let prompt = build_meal_plan_prompt(&items[..2], &request()).unwrap();

        assert!(prompt.system.contains("\"name\": \"Sadza (Maize Porridge)\""));
        assert!(prompt.system.contains("\"name\": \"Mashed Sweet Potato and Avocado\""));
        assert!(!prompt.system.contains(&items[2].name));
        assert!(prompt.system.contains("\"targetUser\": \"child\""));
        assert!(prompt.system.contains("\"childAge\": 10"));
        assert!(prompt.system.contains("\"peanuts\""));
        assert!(prompt.system.contains("\"imageEmoji\""));
        assert_eq!(prompt.user, MEAL_PLAN_USER_PROMPT);
    }

    #[test]
    fn is_deterministic() {
        let items = zimbabwe_food_catalog();
        let first = build_meal_plan_prompt(&items, &request()).unwrap();
        let second = build_meal_plan_prompt(&items, &request()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn recommendations_prompt_uses_its_own_schema() {
        let items = zimbabwe_food_catalog();
        let prompt = build_recommendations_prompt(&items, &request()).unwrap();

        assert!(prompt.system.contains("\"suitabilityReason\""));
        assert!(!prompt.system.contains("\"imageEmoji\""));
        assert_eq!(prompt.user, RECOMMENDATIONS_USER_PROMPT);
    }
}
