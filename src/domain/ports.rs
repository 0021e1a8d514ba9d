use crate::domain::model::{Court, Person, ReportBundle};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn people_file(&self) -> &str;
    fn output_path(&self) -> &str;
    fn request_timeout_secs(&self) -> u64;
}

/// Fetch capability for the courts finder service. Injectable so pipelines can
/// be tested without real network access.
#[async_trait]
pub trait CourtLookup: Send + Sync {
    /// The courts nearest to `postcode`, sorted by ascending distance.
    /// The ordering is the external service's contract, not re-checked here.
    async fn nearest_courts(&self, postcode: &str) -> Result<Vec<Court>>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<Person>>;
    async fn transform(&self, people: Vec<Person>) -> Result<ReportBundle>;
    async fn load(&self, bundle: ReportBundle) -> Result<String>;
}
