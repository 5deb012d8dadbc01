use domain::generation::{Credential, GenerationClient};
use domain::language::LanguageSelector;
use domain::plan::{ExecutionPlan, PlanError};
use infrastructure::config::Config;
use infrastructure::gemini_client::GeminiClient;
use shared::telemetry::Telemetry;
use tracing::{debug, info, warn};

use crate::prompt::build_request;

/// Turns a task description into one generation call and a validated plan.
///
/// Holds only immutable state; each call is independent.
pub struct PlanRequester<C: GenerationClient> {
    client: C,
    credential: Credential,
    model: String,
}

impl PlanRequester<GeminiClient> {
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            GeminiClient::from_config(config),
            config.credential.clone(),
            config.model.clone(),
        )
    }
}

impl<C: GenerationClient> PlanRequester<C> {
    pub fn new(client: C, credential: Credential, model: impl Into<String>) -> Self {
        Self {
            client,
            credential,
            model: model.into(),
        }
    }

    pub fn has_credential(&self) -> bool {
        self.credential.is_present()
    }

    /// `None` on every failure; the reason is logged.
    pub async fn generate_plan(&self, task: &str, language: LanguageSelector) -> Option<ExecutionPlan> {
        match self.request_plan(task, language).await {
            Ok(plan) => Some(plan),
            Err(PlanError::MissingCredential) => {
                warn!("plan generation unavailable: no API key configured (set GEMINI_API_KEY)");
                None
            }
            Err(err) => {
                warn!(error = %err, "plan generation failed");
                None
            }
        }
    }

    /// Same call with the failure reason kept.
    pub async fn request_plan(
        &self,
        task: &str,
        language: LanguageSelector,
    ) -> Result<ExecutionPlan, PlanError> {
        let api_key = self.credential.api_key().ok_or(PlanError::MissingCredential)?;

        let request = build_request(&self.model, task, language);
        debug!(model = %self.model, %language, "requesting execution plan");

        let telemetry = Telemetry::new();
        let raw = self.client.generate(&request, api_key).await?;
        let plan = ExecutionPlan::from_json(&raw)?;

        info!(
            steps = plan.len(),
            elapsed_ms = telemetry.elapsed_ms() as u64,
            "execution plan generated"
        );
        Ok(plan)
    }
}
