use crate::plan::ExecutionPlan;

/// Observable state of the interactive planner.
///
/// Transitions happen only on `submit` and `resolve`; a request in flight
/// cannot be re-submitted, and a new submission drops the previous result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PlannerState {
    #[default]
    Idle,
    InFlight,
    Succeeded(ExecutionPlan),
    Failed(String),
}

impl PlannerState {
    /// Start a request. Returns `false` (and changes nothing) while one is in flight.
    pub fn submit(&mut self) -> bool {
        if self.is_in_flight() {
            return false;
        }
        *self = PlannerState::InFlight;
        true
    }

    /// Settle the in-flight request. Ignored in any other state.
    pub fn resolve(&mut self, outcome: Option<ExecutionPlan>, failure_message: impl Into<String>) {
        if !self.is_in_flight() {
            return;
        }
        *self = match outcome {
            Some(plan) => PlannerState::Succeeded(plan),
            None => PlannerState::Failed(failure_message.into()),
        };
    }

    /// Back to input, unless a request is still pending.
    pub fn reset(&mut self) {
        if !self.is_in_flight() {
            *self = PlannerState::Idle;
        }
    }

    pub fn is_in_flight(&self) -> bool {
        matches!(self, PlannerState::InFlight)
    }

    pub fn plan(&self) -> Option<&ExecutionPlan> {
        match self {
            PlannerState::Succeeded(plan) => Some(plan),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            PlannerState::Failed(message) => Some(message),
            _ => None,
        }
    }
}
