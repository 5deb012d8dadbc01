use serde::{Deserialize, Serialize};
use shared::utils::strip_code_fence;
use thiserror::Error;

/// One step of a phased execution plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanStep {
    pub title: String,
    pub prompt_strategy: String,
    pub risk: String,
}

/// Ordered steps, in the order the service suggested them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionPlan {
    pub steps: Vec<PlanStep>,
}

/// Why a plan could not be produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    #[error("no API credential configured")]
    MissingCredential,

    #[error("transport error: {0}")]
    Transport(String),

    #[error("generation service returned an empty response")]
    EmptyResponse,

    #[error("malformed plan response: {0}")]
    Malformed(String),
}

impl ExecutionPlan {
    /// Decode and validate the service's JSON payload. All-or-nothing.
    pub fn from_json(raw: &str) -> Result<Self, PlanError> {
        let body = strip_code_fence(raw);
        if body.is_empty() {
            return Err(PlanError::EmptyResponse);
        }

        let plan: ExecutionPlan =
            serde_json::from_str(body).map_err(|e| PlanError::Malformed(e.to_string()))?;
        plan.validate()?;
        Ok(plan)
    }

    pub fn validate(&self) -> Result<(), PlanError> {
        for (index, step) in self.steps.iter().enumerate() {
            let fields = [
                ("title", &step.title),
                ("promptStrategy", &step.prompt_strategy),
                ("risk", &step.risk),
            ];
            for (name, value) in fields {
                if value.trim().is_empty() {
                    return Err(PlanError::Malformed(format!(
                        "step {} has an empty `{}`",
                        index + 1,
                        name
                    )));
                }
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
