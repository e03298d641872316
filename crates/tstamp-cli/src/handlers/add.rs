use super::selection::checked_table;
use crate::args::SelectionArgs;
use crate::console::ConsolePage;
use anyhow::Result;
use tstamp_runtime::{BatchRunner, Config, HttpTransport, TracingTelemetry};

pub fn handle(config: &Config, selection: &SelectionArgs) -> Result<()> {
    let table = checked_table(selection)?;
    let records = table.checked_records();

    let transport = HttpTransport::new()?;
    let page = ConsolePage::new();
    let telemetry = TracingTelemetry;

    let runner = BatchRunner::new(&transport, &page, &telemetry, &config.endpoints);
    let outcome = super::block_on(runner.run_add(&records))??;

    super::finish(outcome)
}
