pub mod confirmation;
pub mod telemetry;
pub mod terminal;
pub mod types;
pub mod utils;
