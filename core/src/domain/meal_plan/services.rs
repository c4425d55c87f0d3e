use tracing::{debug, info, warn};

use crate::domain::{
    catalog::ports::CatalogRepository,
    common::{entities::app_errors::CoreError, services::Service},
    meal_plan::{
        eligibility::eligible_food_items,
        entities::{GeneratedMealPlan, GeneratedRecommendations, PlanSource},
        fallback::{fallback_meal_plan, fallback_recommendations},
        parsing::{parse_meal_plan, parse_recommendations},
        ports::{LLMClient, MealPlanService},
        prompt::{build_meal_plan_prompt, build_recommendations_prompt},
        value_objects::{
            CompletionRequest, MEAL_PLAN_MAX_TOKENS, MealPlanRequest, RECOMMENDATIONS_MAX_TOKENS,
        },
    },
};

impl<C, LLM> MealPlanService for Service<C, LLM>
where
    C: CatalogRepository,
    LLM: LLMClient,
{
    async fn generate_meal_plan(
        &self,
        request: MealPlanRequest,
    ) -> Result<GeneratedMealPlan, CoreError> {
        // 1. Narrow the catalog
        let catalog = self.catalog_repository.get_all().await?;
        let food_items = eligible_food_items(&request, &catalog);
        debug!(
            target_user = ?request.target_user,
            child_age = ?request.child_age,
            "{} of {} food items eligible",
            food_items.len(),
            catalog.len()
        );

        // 2. Build prompt
        let prompt = build_meal_plan_prompt(&food_items, &request)?;

        // 3. Call LLM and parse
        let completion = self
            .llm_client
            .complete_json(CompletionRequest {
                system_prompt: prompt.system,
                user_prompt: prompt.user,
                max_tokens: MEAL_PLAN_MAX_TOKENS,
            })
            .await
            .and_then(|content| parse_meal_plan(&content));

        match completion {
            Ok(plan) => {
                info!(meals = plan.meals.len(), "meal plan generated");
                Ok(GeneratedMealPlan {
                    plan,
                    source: PlanSource::Generated,
                })
            }
            Err(e) => {
                warn!("Meal plan generation failed, serving fallback plan: {}", e);
                Ok(GeneratedMealPlan {
                    plan: fallback_meal_plan(),
                    source: PlanSource::Fallback,
                })
            }
        }
    }

    async fn recommend_meals(
        &self,
        request: MealPlanRequest,
    ) -> Result<GeneratedRecommendations, CoreError> {
        let catalog = self.catalog_repository.get_all().await?;
        let food_items = eligible_food_items(&request, &catalog);

        let prompt = build_recommendations_prompt(&food_items, &request)?;

        let completion = self
            .llm_client
            .complete_json(CompletionRequest {
                system_prompt: prompt.system,
                user_prompt: prompt.user,
                max_tokens: RECOMMENDATIONS_MAX_TOKENS,
            })
            .await
            .and_then(|content| parse_recommendations(&content));

        match completion {
            Ok(recommendations) => Ok(GeneratedRecommendations {
                recommendations,
                source: PlanSource::Generated,
            }),
            Err(e) => {
                warn!(
                    "Meal recommendations failed, deriving them from the catalog: {}",
                    e
                );
                Ok(GeneratedRecommendations {
                    recommendations: fallback_recommendations(&food_items),
                    source: PlanSource::Fallback,
                })
            }
        }
    }
}
