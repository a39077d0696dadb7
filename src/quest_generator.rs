use log::info;
use serde::de::IgnoredAny;

use crate::error::{AIServiceError, ai_service_envelope};
use crate::llm_manager::{ChatMessage, LLMProvider};
use crate::thinking::strip_thinking;

/// Instruction template sent as the system message of every request.
pub const SYSTEM_PROMPT: &str = r#"
You are an assistant that generates quests in strict JSON format.
RETURN ONLY JSON WITHOUT ANY ADDITIONAL TEXT OR COMMENTS!

The JSON structure must be:
{
    "quest": {
        "title": "Quest title",
        "description": "Quest description [Generated]",
        "category": "health/willpower/intelligence/creativity/social",
        "rarity": "common/rare/epic/legendary",
        "difficulty": 1-5,
        "price": 10-100,
        "tasks_count": 3-7,
        "reward_xp": 50-500,
        "reward_coin": 25-250,
        "time_limit_hours": 24-336
    },
    "tasks": [
        {
            "title": "Task title 1",
            "description": "Task description 1",
            "difficulty": 1-3,
            "rarity": "common/rare/epic",
            "category": "health/willpower/intelligence/creativity/social",
            "base_xp_reward": 10-50,
            "base_coin_reward": 5-25,
            "task_order": 1
        }
    ]
}

Rules:
- quest difficulty must be the average of the task difficulties
- price = reward_coin * 1.5 (rounded)
- tasks_count must equal the number of tasks in the array
- time_limit_hours: 24-168 (1-7 days)
- reward_xp = sum of base_xp_reward of all tasks * 1.5
- reward_coin = sum of base_coin_reward of all tasks * 1.5
"#;

/// Result of one generation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestOutcome {
    /// Model output that parsed as JSON, exactly as the model wrote it.
    Success(String),
    /// Description of what went wrong.
    Failure(String),
}

impl QuestOutcome {
    /// Render the outcome as JSON text: the payload itself or an error envelope.
    pub fn into_json(self) -> String {
        match self {
            QuestOutcome::Success(text) => text,
            QuestOutcome::Failure(description) => ai_service_envelope(&description),
        }
    }
}

impl From<Result<String, AIServiceError>> for QuestOutcome {
    fn from(result: Result<String, AIServiceError>) -> Self {
        match result {
            Ok(text) => QuestOutcome::Success(text),
            Err(e) => QuestOutcome::Failure(e.to_string()),
        }
    }
}

/// Turns free-text prompts into quest payloads using an LLM provider.
pub struct QuestGenerator {
    provider: Box<dyn LLMProvider>,
}

impl QuestGenerator {
    pub fn new(provider: Box<dyn LLMProvider>) -> Self {
        Self { provider }
    }

    /// Generate a quest. Always returns JSON text, either the model's payload
    /// or `{"error": "AI service error: ..."}`.
    pub async fn generate_quest(&self, user_message: &str) -> String {
        self.try_generate(user_message).await.into_json()
    }

    /// Generate a quest, keeping success and failure apart.
    pub async fn try_generate(&self, user_message: &str) -> QuestOutcome {
        self.request(user_message).await.into()
    }

    async fn request(&self, user_message: &str) -> Result<String, AIServiceError> {
        let messages = build_messages(user_message);
        info!(
            "Requesting quest from {} ({})",
            self.provider.name(),
            self.provider.model_name()
        );

        let raw = self.provider.send_messages(&messages).await?;
        let answer = strip_thinking(&raw);

        // Only well-formedness is checked; the parsed value is dropped.
        serde_json::from_str::<IgnoredAny>(answer)?;

        Ok(answer.to_string())
    }
}

/// System instructions followed by the caller's text, untouched.
fn build_messages(user_message: &str) -> Vec<ChatMessage> {
    vec![ChatMessage::system(SYSTEM_PROMPT), ChatMessage::user(user_message)]
}
