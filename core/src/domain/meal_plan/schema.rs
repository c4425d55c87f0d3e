use serde_json::json;

/// Returns the JSON schema the model is asked to follow for meal plans
pub fn get_meal_plan_schema() -> serde_json::Value {
    let nutrients = json!({
        "type": "object",
        "properties": {
            "calories": { "type": "number" },
            "protein": { "type": "number" },
            "carbs": { "type": "number" },
            "fat": { "type": "number" }
        },
        "required": ["calories", "protein", "carbs", "fat"]
    });

    json!({
        "type": "object",
        "properties": {
            "introduction": { "type": "string" },
            "meals": {
                "type": "array",
                "minItems": 1,
                "items": {
                    "type": "object",
                    "properties": {
                        "name": { "type": "string" },
                        "ingredients": { "type": "array", "items": { "type": "string" } },
                        "instructions": { "type": "array", "items": { "type": "string" } },
                        "nutrients": nutrients,
                        "benefits": { "type": "string" },
                        "imageEmoji": {
                            "type": "string",
                            "description": "A single emoji that represents this food"
                        }
                    },
                    "required": [
                        "name", "ingredients", "instructions", "nutrients", "benefits", "imageEmoji"
                    ]
                }
            },
            "tips": { "type": "array", "items": { "type": "string" } }
        },
        "required": ["introduction", "meals", "tips"]
    })
}

/// Returns the JSON schema for meal recommendation responses
pub fn get_recommendations_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "recommendations": {
                "type": "array",
                "minItems": 3,
                "maxItems": 5,
                "items": {
                    "type": "object",
                    "properties": {
                        "name": { "type": "string" },
                        "description": { "type": "string" },
                        "nutritionalBenefits": { "type": "string" },
                        "suitabilityReason": { "type": "string" },
                        "emojis": {
                            "type": "array",
                            "minItems": 2,
                            "maxItems": 4,
                            "items": { "type": "string" }
                        }
                    },
                    "required": [
                        "name", "description", "nutritionalBenefits", "suitabilityReason", "emojis"
                    ]
                }
            }
        },
        "required": ["recommendations"]
    })
}
