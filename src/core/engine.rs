use crate::core::Pipeline;
use crate::utils::error::Result;
use tracing::Instrument;

pub struct ReportEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ReportEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Runs extract, transform and load in order and returns the output location.
    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting recipe report");

        let recipes = self
            .pipeline
            .extract()
            .instrument(tracing::info_span!("extract"))
            .await?;
        tracing::info!("Loaded {} recipes", recipes.len());

        let report = self
            .pipeline
            .transform(recipes)
            .instrument(tracing::info_span!("transform"))
            .await?;
        tracing::info!("Classified {} recipes", report.rows.len());

        let output_path = self
            .pipeline
            .load(report)
            .instrument(tracing::info_span!("load"))
            .await?;
        tracing::info!("Report saved to: {}", output_path);

        Ok(output_path)
    }
}
