use std::io::Write;

use crate::args::OutputFormat;
use crate::error::{AppError, AppResult, ValidationError};
use crate::positions::{PositionField, PositionRecord, PositionSource, format_position};
use crate::replay::{ReplayController, ReplayOutcome};

/// Fetches once and prints the replay, or the highlighted record when an
/// index is given.
///
/// # Errors
///
/// Returns an error when the filter is incomplete, the fetch fails, the index
/// is out of range, or writing the output fails.
pub(crate) async fn run_headless<S, W>(
    controller: &mut ReplayController<S>,
    format: OutputFormat,
    index: Option<usize>,
    out: &mut W,
) -> AppResult<()>
where
    S: PositionSource + ?Sized,
    W: Write,
{
    match controller.replay().await? {
        ReplayOutcome::Loaded { records } => {
            tracing::debug!("Headless replay loaded {} positions", records);
        }
        ReplayOutcome::Failed(err) => return Err(AppError::fetch(err)),
    }

    let selected = match index {
        Some(index) => {
            if !controller.set_scrub_index(index) {
                return Err(AppError::validation(
                    ValidationError::ScrubIndexOutOfRange {
                        index,
                        len: controller.state().records().len(),
                    },
                ));
            }
            let scrub_index = controller.state().scrub_index();
            let records = controller.state().records();
            records.get(scrub_index..=scrub_index).unwrap_or(&[])
        }
        None => controller.state().records(),
    };
    let offset = index.unwrap_or(0);

    match format {
        OutputFormat::Text => write_text(out, selected, offset)?,
        OutputFormat::Json => {
            if index.is_some()
                && let Some(record) = selected.first()
            {
                serde_json::to_writer_pretty(&mut *out, record)?;
            } else {
                serde_json::to_writer_pretty(&mut *out, selected)?;
            }
            writeln!(out)?;
        }
        OutputFormat::Jsonl => {
            for record in selected {
                serde_json::to_writer(&mut *out, record)?;
                writeln!(out)?;
            }
        }
    }
    out.flush()?;
    Ok(())
}

fn write_text<W: Write>(out: &mut W, records: &[PositionRecord], offset: usize) -> AppResult<()> {
    if records.is_empty() {
        tracing::info!("No positions in the requested range");
        return Ok(());
    }
    for (idx, record) in records.iter().enumerate() {
        writeln!(
            out,
            "{:>5}  {}  {} {}  {}  {}  {}",
            offset.saturating_add(idx),
            format_position(record, PositionField::FixTime),
            format_position(record, PositionField::Latitude),
            format_position(record, PositionField::Longitude),
            format_position(record, PositionField::Speed),
            format_position(record, PositionField::Course),
            format_position(record, PositionField::Address),
        )?;
    }
    Ok(())
}
