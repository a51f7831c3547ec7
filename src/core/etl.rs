use crate::core::{Pipeline, RunReport};
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub async fn run(&self) -> Result<RunReport> {
        tracing::info!("Collecting identifiers...");
        let genes = self.pipeline.extract().await?;
        tracing::info!("Extracted {} identifiers", genes.len());
        self.monitor.log_stats("Extract");

        tracing::info!("Resolving orthologs...");
        let result = self.pipeline.transform(genes).await?;
        tracing::info!("Resolved {} records", result.records.len());
        self.monitor.log_stats("Transform");

        let not_found_count = result.not_found_count;
        let error_count = result.error_count;

        tracing::info!("Writing report...");
        let output_path = self.pipeline.load(result).await?;
        self.monitor.log_stats("Load");
        self.monitor.log_final_stats();

        Ok(RunReport {
            output_path,
            not_found_count,
            error_count,
        })
    }
}
