use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use chrono::Local;
use crossterm::event::{self, Event, KeyEventKind};
use tokio::sync::{mpsc, watch};

use crate::error::{AppError, AppResult};
use crate::positions::{Device, PositionSource};
use crate::replay::{ReplayController, ReplayEvent};
use crate::ui::render::setup_render_ui;

use super::form::FilterForm;
use super::keys::{KeyAction, map_key};
use super::view::build_ui_data;

/// UI refresh poll cadence.
const UI_POLL_INTERVAL: Duration = Duration::from_millis(50);
/// Non-blocking poll interval for keyboard events.
const EVENT_POLL_INTERVAL: Duration = Duration::from_millis(0);
/// Responses and device lists queued between two loop turns.
const CHANNEL_CAPACITY: usize = 8;

#[derive(Debug, Clone, Copy)]
pub(crate) struct InteractiveOptions {
    pub(crate) play_interval: Duration,
    pub(crate) no_color: bool,
}

/// Runs the terminal view until the user quits. All state changes happen on
/// this task; fetches run on spawned tasks and report back as events.
///
/// # Errors
///
/// Returns an error when reading terminal events fails.
pub(crate) async fn run_interactive<S>(
    mut controller: ReplayController<S>,
    mut form: FilterForm,
    options: InteractiveOptions,
) -> AppResult<()>
where
    S: PositionSource + ?Sized + 'static,
{
    let stop = Arc::new(AtomicBool::new(false));
    let stop_handle = stop.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            stop_handle.store(true, Ordering::SeqCst);
        }
    });

    let (fetch_tx, mut fetch_rx) = mpsc::channel::<ReplayEvent>(CHANNEL_CAPACITY);
    let (devices_tx, mut devices_rx) = mpsc::channel::<Vec<Device>>(1);
    spawn_device_list(controller.source(), devices_tx);

    if form.filter().is_complete() {
        show(&mut controller, &form, &fetch_tx);
    }

    let (shutdown_tx, _) = crate::shutdown::shutdown_channel();
    let (ui_tx, _) = watch::channel(build_ui_data(
        controller.state(),
        &form,
        options.no_color,
    ));
    let render_ui_handle = setup_render_ui(&shutdown_tx, &ui_tx);

    let mut last_tick = tokio::time::Instant::now();
    let mut dirty = false;
    let result = async {
        loop {
            if stop.load(Ordering::SeqCst) {
                break;
            }

            if event::poll(EVENT_POLL_INTERVAL)?
                && let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
            {
                match map_key(&key, controller.state().panel_expanded()) {
                    KeyAction::Quit => break,
                    KeyAction::Replay(event) => {
                        controller.apply(event);
                        dirty = true;
                    }
                    KeyAction::Show => {
                        show(&mut controller, &form, &fetch_tx);
                        dirty = true;
                    }
                    KeyAction::Edit(edit) => {
                        form.edit(edit, &Local::now());
                        dirty = true;
                    }
                    KeyAction::Ignore => {}
                }
            }

            while let Ok(event) = fetch_rx.try_recv() {
                controller.apply(event);
                dirty = true;
            }
            if let Ok(devices) = devices_rx.try_recv() {
                form.set_devices(devices);
                dirty = true;
            }

            if controller.state().playing() {
                if last_tick.elapsed() >= options.play_interval {
                    controller.apply(ReplayEvent::Tick);
                    last_tick = tokio::time::Instant::now();
                    dirty = true;
                }
            } else {
                last_tick = tokio::time::Instant::now();
            }

            if dirty {
                drop(ui_tx.send(build_ui_data(
                    controller.state(),
                    &form,
                    options.no_color,
                )));
                dirty = false;
            }

            tokio::time::sleep(UI_POLL_INTERVAL).await;
        }
        Ok::<(), AppError>(())
    }
    .await;

    drop(shutdown_tx.send(()));
    if let Err(err) = render_ui_handle.await {
        tracing::error!("Replay UI task failed: {}", err);
    }
    result
}

/// Commits the form to the controller and fires a request for it.
fn show<S>(
    controller: &mut ReplayController<S>,
    form: &FilterForm,
    fetch_tx: &mpsc::Sender<ReplayEvent>,
) where
    S: PositionSource + ?Sized + 'static,
{
    controller.apply(ReplayEvent::SetFilter(form.filter()));
    let pending = match controller.request_replay() {
        Ok(pending) => pending,
        Err(err) => {
            tracing::debug!("Not requesting replay: {}", err);
            return;
        }
    };
    let source = controller.source();
    let fetch_tx = fetch_tx.clone();
    tokio::spawn(async move {
        let event = pending.resolve(source.as_ref()).await;
        drop(fetch_tx.send(event).await);
    });
}

fn spawn_device_list<S>(source: Arc<S>, devices_tx: mpsc::Sender<Vec<Device>>)
where
    S: PositionSource + ?Sized + 'static,
{
    tokio::spawn(async move {
        match source.fetch_devices().await {
            Ok(devices) => {
                tracing::debug!("Loaded {} devices", devices.len());
                drop(devices_tx.send(devices).await);
            }
            Err(err) => tracing::warn!("Device list unavailable: {}", err),
        }
    });
}
