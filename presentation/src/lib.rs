pub mod cli;
pub mod clipboard;
pub mod i18n;
pub mod render;
