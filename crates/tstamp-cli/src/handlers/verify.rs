use crate::console::ConsolePage;
use anyhow::Result;
use tstamp_runtime::{BatchRunner, Config, HttpTransport, TracingTelemetry};

pub fn handle(config: &Config) -> Result<()> {
    let transport = HttpTransport::new()?;
    let page = ConsolePage::new();
    let telemetry = TracingTelemetry;

    let runner = BatchRunner::new(&transport, &page, &telemetry, &config.endpoints);
    let outcome = super::block_on(runner.run_verify())??;

    super::finish(outcome)
}
