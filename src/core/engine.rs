use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

/// Drives a pipeline through extract -> transform -> load, with optional
/// resource monitoring at each phase boundary.
pub struct LookupEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> LookupEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub async fn run(&self) -> Result<String> {
        println!("Starting court lookup...");

        println!("Reading people...");
        let people = self.pipeline.extract().await?;
        println!("Read {} people", people.len());
        self.monitor.log_phase("extract", people.len());

        println!("Looking up courts...");
        let bundle = self.pipeline.transform(people).await?;
        println!(
            "Matched {}/{} people to a court",
            bundle.matched_count(),
            bundle.outcomes.len()
        );
        self.monitor.log_phase("transform", bundle.outcomes.len());

        println!("Writing report...");
        let output_path = self.pipeline.load(bundle).await?;
        println!("Report saved to: {}", output_path);
        self.monitor.log_final_stats();

        Ok(output_path)
    }
}
