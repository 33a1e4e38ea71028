use std::io::Write;

use crate::args::OutputFormat;
use crate::error::AppResult;
use crate::positions::PositionSource;

/// Prints the devices visible to the configured account.
///
/// # Errors
///
/// Returns an error when the device list cannot be fetched or written.
pub(crate) async fn run_devices<S, W>(source: &S, format: OutputFormat, out: &mut W) -> AppResult<()>
where
    S: PositionSource + ?Sized,
    W: Write,
{
    let devices = source.fetch_devices().await?;
    tracing::debug!("Fetched {} devices", devices.len());

    match format {
        OutputFormat::Text => {
            for device in &devices {
                writeln!(
                    out,
                    "{:>6}  {:<24}  {:<16}  {}",
                    device.id,
                    device.name,
                    device.unique_id.as_deref().unwrap_or("-"),
                    device.status.as_deref().unwrap_or("-"),
                )?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &devices)?;
            writeln!(out)?;
        }
        OutputFormat::Jsonl => {
            for device in &devices {
                serde_json::to_writer(&mut *out, device)?;
                writeln!(out)?;
            }
        }
    }
    out.flush()?;
    Ok(())
}
