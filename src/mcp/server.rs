//! FitCoach MCP Server Implementation
//!
//! Implements the MCP server with all FitCoach tools.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::Deserialize;
use tokio::sync::Mutex;

use crate::analysis::measurement::UnitSystem;
use crate::api::ApiClient;
use crate::tools::chat::{self, ConversationState};
use crate::tools::status::StatusTracker;
use crate::tools::{bmi, exercise, motivation, nutrition};

/// FitCoach MCP Service
#[derive(Clone)]
pub struct FitCoachService {
    status_tracker: Arc<Mutex<StatusTracker>>,
    api: ApiClient,
    tool_router: ToolRouter<FitCoachService>,
    /// Chat await-state shared across messages in a session
    conversation: Arc<std::sync::Mutex<ConversationState>>,
}

impl FitCoachService {
    pub fn new(api: ApiClient) -> Self {
        let status_tracker = StatusTracker::new(api.has_key(), api.base_url().to_string());
        Self {
            status_tracker: Arc::new(Mutex::new(status_tracker)),
            api,
            tool_router: Self::tool_router(),
            conversation: Arc::new(std::sync::Mutex::new(ConversationState::default())),
        }
    }
}

// ============================================================================
// Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ChatParams {
    /// Free-form user message
    pub message: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct AnalyzeMeasurementsParams {
    /// Text that may contain a height and weight pair
    pub text: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CalculateBmiParams {
    /// Height: meters for metric, inches for imperial
    pub height: f64,
    /// Weight: kilograms for metric, pounds for imperial
    pub weight: f64,
    /// "metric" (default) or "imperial"
    #[serde(default = "default_unit_system")]
    pub unit_system: String,
}

fn default_unit_system() -> String {
    "metric".to_string()
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct BmiAdviceParams {
    /// BMI category name: underweight, normal, overweight, or obese
    pub category: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct NutritionInfoParams {
    /// Food to look up, or a question mentioning one (e.g. "calories in apple")
    pub query: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ExerciseRecommendationsParams {
    /// Target muscle group (e.g. "chest", "lats", "quadriceps")
    pub muscle: Option<String>,
    /// Exercise type: cardio, strength, stretching, or plyometrics
    pub exercise_type: Option<String>,
    /// Difficulty: beginner, intermediate, or advanced
    pub difficulty: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct MotivationParams {
    /// Optional context describing how the user feels
    pub context: Option<String>,
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl FitCoachService {
    // --- Status ---

    #[tool(description = "Get the current status of the FitCoach service including build info, remote API configuration, and process information")]
    async fn fitcoach_status(&self) -> Result<CallToolResult, McpError> {
        let tracker = self.status_tracker.lock().await;
        let status = tracker.get_status();
        let json = serde_json::to_string_pretty(&status)
            .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Get instructions for using the FitCoach tools. Call this when starting a session or when unsure which tool fits a question.")]
    fn chat_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::CHAT_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(CHAT_INSTRUCTIONS)]))
    }

    // --- Chat ---

    #[tool(description = "Send a free-form chat message. Classifies the intent (greeting, BMI, nutrition, workout, motivation) and returns the assistant reply.")]
    async fn chat(&self, Parameters(p): Parameters<ChatParams>) -> Result<CallToolResult, McpError> {
        let reply = chat::process_message(&self.api, &self.conversation, &p.message).await;
        let json = serde_json::to_string_pretty(&reply)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    // --- BMI ---

    #[tool(description = "Extract a height and weight pair from free text (metric or imperial) and compute the BMI with category and advice. A text without a recognizable pair returns a clarification prompt, not an error.")]
    fn analyze_measurements(&self, Parameters(p): Parameters<AnalyzeMeasurementsParams>) -> Result<CallToolResult, McpError> {
        let json = match bmi::analyze_text(&p.text) {
            Some(analysis) => serde_json::to_string_pretty(&analysis),
            None => serde_json::to_string_pretty(&serde_json::json!({
                "recognized": false,
                "prompt": bmi::MEASUREMENT_PROMPT,
            })),
        }
        .map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Calculate BMI from explicit values. Metric: height in meters, weight in kilograms. Imperial: height in inches, weight in pounds. Values must be strictly positive.")]
    fn calculate_bmi(&self, Parameters(p): Parameters<CalculateBmiParams>) -> Result<CallToolResult, McpError> {
        let Some(unit_system) = UnitSystem::from_str(&p.unit_system) else {
            return Err(McpError::invalid_params(
                format!("unknown unit_system '{}', expected 'metric' or 'imperial'", p.unit_system),
                None,
            ));
        };
        let json = match bmi::calculate(p.height, p.weight, unit_system) {
            Some(analysis) => serde_json::to_string_pretty(&analysis),
            None => Ok(r#"{"error": "Height and weight must be positive numbers"}"#.to_string()),
        }
        .map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Get the recommendation text for a BMI category (underweight, normal, overweight, obese). Unknown categories get generic guidance.")]
    fn bmi_advice(&self, Parameters(p): Parameters<BmiAdviceParams>) -> Result<CallToolResult, McpError> {
        let reply = bmi::advice_reply(&p.category);
        let json = serde_json::to_string_pretty(&reply)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    // --- Nutrition ---

    #[tool(description = "Look up nutrition facts for a food. Falls back to general nutrition advice when the remote API is unavailable.")]
    async fn nutrition_info(&self, Parameters(p): Parameters<NutritionInfoParams>) -> Result<CallToolResult, McpError> {
        let reply = nutrition::lookup(&self.api, &p.query).await;
        let json = serde_json::to_string_pretty(&reply)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    // --- Exercise ---

    #[tool(description = "Get exercise recommendations filtered by muscle group, exercise type, and difficulty. Falls back to the built-in catalog when the remote API is unavailable.")]
    async fn exercise_recommendations(&self, Parameters(p): Parameters<ExerciseRecommendationsParams>) -> Result<CallToolResult, McpError> {
        let reply = exercise::recommend(
            &self.api,
            p.muscle.as_deref(),
            p.exercise_type.as_deref(),
            p.difficulty.as_deref(),
        )
        .await;
        let json = serde_json::to_string_pretty(&reply)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    // --- Motivation ---

    #[tool(description = "Get a motivational message with an encouragement line and a practical success tip, optionally tailored to how the user feels")]
    fn motivation(&self, Parameters(p): Parameters<MotivationParams>) -> Result<CallToolResult, McpError> {
        let reply = motivation::boost(p.context.as_deref());
        let json = serde_json::to_string_pretty(&reply)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for FitCoachService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "fitcoach".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("FitCoach".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "FitCoach - fitness chat assistance: BMI analysis, nutrition lookups, \
                 exercise recommendations, and motivation. \
                 IMPORTANT: Call chat_instructions when unsure which tool fits. \
                 Free-form messages: chat. \
                 BMI: analyze_measurements (free text) or calculate_bmi (explicit values). \
                 Lookups: nutrition_info, exercise_recommendations. \
                 Morale: motivation. Service info: fitcoach_status."
                    .into(),
            ),
        }
    }
}
