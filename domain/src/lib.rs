pub mod catalog;
pub mod generation;
pub mod language;
pub mod plan;
pub mod planner_state;
