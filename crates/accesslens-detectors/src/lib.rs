pub mod burst;
pub mod error;
pub mod user_agent;

pub use burst::{BurstAnalyzer, BurstReport, BurstResult, BurstWindow, ClientHistory};
pub use error::{Error, Result};
pub use user_agent::{UserAgentAnalyzer, UserAgentCategory, UserAgentCounter};
