use std::io;
use std::sync::Arc;

use crate::app::{FilterForm, InteractiveOptions, run_devices, run_headless, run_interactive};
use crate::error::AppResult;
use crate::positions::HttpPositionSource;
use crate::replay::ReplayController;

use super::types::RunPlan;

pub(crate) async fn execute_plan(plan: RunPlan) -> AppResult<()> {
    match plan {
        RunPlan::Devices { source, format } => {
            let source = HttpPositionSource::new(&source)?;
            run_devices(&source, format, &mut io::stdout()).await
        }
        RunPlan::Headless(plan) => {
            let source = Arc::new(HttpPositionSource::new(&plan.source)?);
            tracing::debug!("Fetching from {}", source.positions_url());
            let mut controller = ReplayController::new(source, plan.filter);
            run_headless(&mut controller, plan.format, plan.index, &mut io::stdout()).await
        }
        RunPlan::Interactive(plan) => {
            let source = Arc::new(HttpPositionSource::new(&plan.source)?);
            let form = FilterForm::new(&plan.filter, plan.period);
            let controller = ReplayController::new(source, plan.filter);
            run_interactive(
                controller,
                form,
                InteractiveOptions {
                    play_interval: plan.play_interval,
                    no_color: plan.no_color,
                },
            )
            .await
        }
    }
}
