use std::io::{BufRead, Write};

use tracing::info;

use crate::error::TrackerError;
use crate::models::QueryWindow;
use crate::service::catalog::CatalogClient;
use crate::service::input::{self, InputError};
use crate::service::report;

/// Prompt, query the catalog once, and write the report.
///
/// The report is fully rendered before anything is written, so a failure
/// never leaves a partial report behind.
pub async fn run<R, W>(
    reader: &mut R,
    writer: &mut W,
    client: &CatalogClient,
) -> Result<(), TrackerError>
where
    R: BufRead,
    W: Write,
{
    let request = input::collect(reader, writer)?;
    let window = QueryWindow::last_days(request.days).ok_or_else(|| InputError::InvalidDays {
        input: request.days.to_string(),
    })?;
    info!(
        "Tracking '{}' over {} days ({} to {})",
        request.label, request.days, window.start, window.end
    );

    let body = client.fetch(&window).await?;
    let events = report::parse(&body, &request.label)?;
    let rendered = report::render(&events, request.days);

    writer.write_all(rendered.as_bytes())?;
    writer.flush()?;
    Ok(())
}
