use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const MOTHER_TAG: &str = "mother";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TargetUser {
    Mother,
    Child,
}

/// Age categories a child's age in months is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AgeBand {
    UnderSixMonths,
    SixToEightMonths,
    NineToElevenMonths,
    TwelveMonthsPlus,
}

impl AgeBand {
    pub fn from_months(months: u32) -> Self {
        match months {
            0..=5 => AgeBand::UnderSixMonths,
            6..=8 => AgeBand::SixToEightMonths,
            9..=11 => AgeBand::NineToElevenMonths,
            _ => AgeBand::TwelveMonthsPlus,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            AgeBand::UnderSixMonths => "child_0_6",
            AgeBand::SixToEightMonths => "child_6_plus",
            AgeBand::NineToElevenMonths => "child_9_plus",
            AgeBand::TwelveMonthsPlus => "child_12_plus",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NutritionGoals {
    #[serde(default = "default_focus")]
    pub focus: String,
}

fn default_focus() -> String {
    "balanced".to_string()
}

impl Default for NutritionGoals {
    fn default() -> Self {
        Self {
            focus: default_focus(),
        }
    }
}

/// Preferences a plan or recommendation list is generated for.
///
/// Serialized as-is into the prompt, so optional fields are kept with their
/// defaults filled in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MealPlanRequest {
    pub target_user: TargetUser,
    /// Age in months, only meaningful when `target_user` is `child`.
    pub child_age: Option<u32>,
    pub meal_type: String,
    #[serde(default)]
    pub dietary_restrictions: Vec<String>,
    #[serde(default)]
    pub nutrition_goals: NutritionGoals,
    #[serde(default = "default_prefer_traditional")]
    pub prefer_traditional: bool,
}

fn default_prefer_traditional() -> bool {
    true
}

impl MealPlanRequest {
    pub fn new(target_user: TargetUser, child_age: Option<u32>, meal_type: String) -> Self {
        Self {
            target_user,
            child_age,
            meal_type,
            dietary_restrictions: Vec::new(),
            nutrition_goals: NutritionGoals::default(),
            prefer_traditional: default_prefer_traditional(),
        }
    }

    /// The age band to filter by, present only for a child with a known age.
    pub fn age_band(&self) -> Option<AgeBand> {
        match (self.target_user, self.child_age) {
            (TargetUser::Child, Some(months)) => Some(AgeBand::from_months(months)),
            _ => None,
        }
    }
}

pub const MEAL_PLAN_MAX_TOKENS: u32 = 4000;
pub const RECOMMENDATIONS_MAX_TOKENS: u32 = 2000;

/// One chat completion call: a system and a user message, answered in JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest {
    pub system_prompt: String,
    pub user_prompt: String,
    pub max_tokens: u32,
}
