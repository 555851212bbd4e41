use async_trait::async_trait;
use crate::shared::error::CollectionError;

#[async_trait]
pub trait AsyncDataCollector<T: Send> {
    async fn collect(&mut self) -> Result<T, CollectionError>;
}

pub trait MetadataProvider {
    fn name(&self) -> &str;
    fn category(&self) -> &str;
    fn output_file(&self) -> &str;
}

pub trait Validatable {
    fn validate(&self) -> Result<(), String>;
}
