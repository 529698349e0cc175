pub mod collector;
pub mod preferences;
pub mod profile;

pub use collector::StatsCollector;
pub use preferences::Preferences;
pub use profile::{complete_onboarding, UserProfile};
