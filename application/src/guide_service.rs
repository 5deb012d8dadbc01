use domain::catalog::{Phase, PHASES};

/// Read-only lookups over the static phase catalog.
pub struct GuideService {
    phases: &'static [Phase],
}

impl GuideService {
    pub fn new() -> Self {
        Self { phases: PHASES }
    }

    pub fn phases(&self) -> &'static [Phase] {
        self.phases
    }

    /// Match by id (case-insensitive) or by 1-based position.
    pub fn find(&self, key: &str) -> Option<&'static Phase> {
        let key = key.trim();
        if let Ok(index) = key.parse::<usize>() {
            return index.checked_sub(1).and_then(|i| self.phases.get(i));
        }
        self.phases.iter().find(|p| p.id.eq_ignore_ascii_case(key))
    }

    pub fn planner_phase(&self) -> Option<&'static Phase> {
        self.phases.iter().find(|p| p.interactive_planner)
    }

    pub fn ids(&self) -> Vec<&'static str> {
        self.phases.iter().map(|p| p.id).collect()
    }
}

impl Default for GuideService {
    fn default() -> Self {
        Self::new()
    }
}
