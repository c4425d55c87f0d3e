use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, de::DeserializeOwned};

use crate::domain::{
    common::entities::app_errors::CoreError,
    meal_plan::entities::{MealPlan, MealRecommendation},
};

static FENCED_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```(?:json)?\s*([\s\S]*?)\s*```").expect("valid regex"));

/// Texts worth trying as JSON, most literal first: the whole content, the
/// body of a fenced code block, then the outermost object and array spans.
fn json_candidates(content: &str) -> Vec<&str> {
    let mut candidates = vec![content.trim()];

    if let Some(block) = FENCED_BLOCK.captures(content).and_then(|c| c.get(1)) {
        candidates.push(block.as_str());
    }

    for (open, close) in [('{', '}'), ('[', ']')] {
        if let (Some(start), Some(end)) = (content.find(open), content.rfind(close))
            && start < end
        {
            candidates.push(&content[start..=end]);
        }
    }

    candidates
}

fn extract_json<T: DeserializeOwned>(content: &str) -> Result<T, CoreError> {
    let mut last_error = None;
    for candidate in json_candidates(content) {
        match serde_json::from_str::<T>(candidate) {
            Ok(value) => return Ok(value),
            Err(e) => last_error = Some(e),
        }
    }

    Err(CoreError::MalformedCompletion(match last_error {
        Some(e) => e.to_string(),
        None => "empty completion".to_string(),
    }))
}

/// Parses completion content into a meal plan with at least one meal.
pub fn parse_meal_plan(content: &str) -> Result<MealPlan, CoreError> {
    let plan: MealPlan = extract_json(content)?;
    if plan.meals.is_empty() {
        return Err(CoreError::MalformedCompletion(
            "meal plan contains no meals".to_string(),
        ));
    }
    Ok(plan)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RecommendationsPayload {
    List(Vec<MealRecommendation>),
    Wrapped {
        recommendations: Vec<MealRecommendation>,
    },
}

/// Parses completion content into a non-empty list of recommendations.
///
/// Both a bare array and an object with a `recommendations` array are accepted.
pub fn parse_recommendations(content: &str) -> Result<Vec<MealRecommendation>, CoreError> {
    let recommendations = match extract_json::<RecommendationsPayload>(content)? {
        RecommendationsPayload::List(list) => list,
        RecommendationsPayload::Wrapped { recommendations } => recommendations,
    };
    if recommendations.is_empty() {
        return Err(CoreError::MalformedCompletion(
            "no recommendations returned".to_string(),
        ));
    }
    Ok(recommendations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::meal_plan::entities::DEFAULT_MEAL_EMOJI;

    const PLAN: &str = r#"{
        "introduction": "A warm dinner plan.",
        "meals": [{
            "name": "Liver Stew",
            "ingredients": ["liver", "onion"],
            "instructions": ["fry onion", "add liver"],
            "nutrients": {"calories": 450, "protein": 35.5, "carbs": 40, "fat": 15},
            "benefits": "Iron for recovery.",
            "imageEmoji": "🍲"
        }],
        "tips": ["Cook the liver through."]
    }"#;

    #[test]
    fn parses_plain_json() {
        let plan = parse_meal_plan(PLAN).unwrap();
        assert_eq!(plan.meals.len(), 1);
        assert_eq!(plan.meals[0].nutrients.calories, 450.0);
        assert_eq!(plan.meals[0].nutrients.protein, 35.5);
        assert_eq!(plan.meals[0].image_emoji, "🍲");
    }

    #[test]
    fn parses_fenced_block() {
        let content = format!("Here is your plan:\n```json\n{PLAN}\n```\nEnjoy!");
        assert_eq!(parse_meal_plan(&content).unwrap(), parse_meal_plan(PLAN).unwrap());
    }

    #[test]
    fn parses_object_surrounded_by_prose() {
        let content = format!("Sure! {PLAN} Let me know if you need more.");
        assert!(parse_meal_plan(&content).is_ok());
    }

    #[test]
    fn defaults_missing_emoji() {
        let content = PLAN.replace(r#""imageEmoji": "🍲""#, r#""extra": true"#);
        let plan = parse_meal_plan(&content).unwrap();
        assert_eq!(plan.meals[0].image_emoji, DEFAULT_MEAL_EMOJI);
    }

    #[test]
    fn rejects_non_json() {
        let err = parse_meal_plan("I cannot help with that.").unwrap_err();
        assert!(matches!(err, CoreError::MalformedCompletion(_)));
    }

    #[test]
    fn rejects_wrong_shape() {
        let err = parse_meal_plan(r#"{"plan": "soup"}"#).unwrap_err();
        assert!(matches!(err, CoreError::MalformedCompletion(_)));
    }

    #[test]
    fn rejects_plan_without_meals() {
        let err =
            parse_meal_plan(r#"{"introduction": "x", "meals": [], "tips": []}"#).unwrap_err();
        assert_eq!(
            err,
            CoreError::MalformedCompletion("meal plan contains no meals".to_string())
        );
    }

    #[test]
    fn accepts_both_recommendation_shapes() {
        let item = r#"{"name": "Hupfu", "description": "Porridge",
            "nutritionalBenefits": "Energy", "suitabilityReason": "Soft",
            "emojis": ["🌽", "🥣"]}"#;

        let bare = parse_recommendations(&format!("[{item}]")).unwrap();
        let wrapped =
            parse_recommendations(&format!(r#"{{"recommendations": [{item}]}}"#)).unwrap();

        assert_eq!(bare, wrapped);
        assert_eq!(bare[0].emojis, vec!["🌽", "🥣"]);
    }

    #[test]
    fn rejects_empty_recommendations() {
        assert!(parse_recommendations(r#"{"recommendations": []}"#).is_err());
    }
}
