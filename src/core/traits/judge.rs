use crate::core::{domain::Page, errors::Result};

#[mockall::automock]
#[async_trait::async_trait]
pub trait JudgeClient: std::fmt::Debug + Send + Sync {
    async fn get(&self, url: &str) -> Result<Page>;
}
