mod app;
mod core;

pub use app::{AppConfig, AppConfigError, IntakeConfig, ProfileConfig, ResolverConfig};
pub use core::Config;
