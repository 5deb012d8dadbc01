pub mod guide_service;
pub mod plan_service;
pub mod prompt;
