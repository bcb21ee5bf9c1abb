//! Storyteller — pluggable backend that turns a theme into story text.
//!
//! Default: `TemplateStoryteller` (fixed templates, deterministic, no I/O).
//! `AppState` holds an `Arc<dyn Storyteller>`, chosen at startup.

use async_trait::async_trait;

use crate::errors::AppError;
use crate::story::template::{story_for, tale_for};

/// Implement this to swap story backends without touching the handlers.
#[async_trait]
pub trait Storyteller: Send + Sync {
    /// One-sentence story for `POST /generate-story`.
    async fn tell(&self, theme: &str) -> Result<String, AppError>;

    /// Multi-line tale for the story record endpoint.
    async fn tale(&self, theme: &str) -> Result<String, AppError>;

    /// Backend name reported by `/health`.
    fn backend(&self) -> &'static str;
}

/// Fills the fixed templates. Never fails.
pub struct TemplateStoryteller;

#[async_trait]
impl Storyteller for TemplateStoryteller {
    async fn tell(&self, theme: &str) -> Result<String, AppError> {
        Ok(story_for(theme))
    }

    async fn tale(&self, theme: &str) -> Result<String, AppError> {
        Ok(tale_for(theme))
    }

    fn backend(&self) -> &'static str {
        "template"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_template_tell_matches_template() {
        let teller = TemplateStoryteller;
        assert_eq!(teller.tell("unicorn").await.unwrap(), story_for("unicorn"));
    }

    #[tokio::test]
    async fn test_template_tale_matches_template() {
        let teller = TemplateStoryteller;
        assert_eq!(teller.tale("unicorn").await.unwrap(), tale_for("unicorn"));
    }

    #[tokio::test]
    async fn test_usable_as_trait_object() {
        let teller: Arc<dyn Storyteller> = Arc::new(TemplateStoryteller);
        assert_eq!(teller.backend(), "template");
        assert!(teller.tell("").await.unwrap().contains("a  started"));
    }
}
