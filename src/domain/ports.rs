use crate::domain::model::TransformResult;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
    fn exists(&self, path: &str) -> bool;
}

pub trait ConfigProvider: Send + Sync {
    fn input_path(&self) -> Option<&str>;
    fn output_path(&self) -> Option<&str>;
    fn overwrite(&self) -> bool;
    fn ensembl_id(&self) -> Option<&str>;
    fn api_server(&self) -> &str;
    fn timeout_secs(&self) -> u64;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    /// Collects the identifiers to process, in input order.
    async fn extract(&self) -> Result<Vec<String>>;
    /// Resolves each identifier against the remote service and renders the report.
    async fn transform(&self, genes: Vec<String>) -> Result<TransformResult>;
    /// Delivers the report, returning where it went.
    async fn load(&self, result: TransformResult) -> Result<String>;
}
