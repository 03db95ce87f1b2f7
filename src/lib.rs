pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod openai;
pub mod prompt;

pub use config::OpenAiConfig;
pub use error::{LogoError, Result};
pub use models::*;
pub use openai::{ImagesClient, OpenAiClient};
pub use prompt::build_prompt;
