use crate::app::AppEvent;
use crate::types::{SystemTimeTick, Tick};
use std::time::Duration;
use tokio::{select, sync::mpsc, task::JoinHandle, time};
use tokio_util::sync::CancellationToken;

pub const TICK_FPS: u8 = 40;

/// Sends the current time to the app `fps` times per second. Round
/// transitions are fired from these ticks, so their delay is only as
/// precise as the tick interval.
pub fn start_tick_event_loop(
    fps: u8,
    event_sender: mpsc::Sender<AppEvent>,
    cancellation_token: CancellationToken,
) -> JoinHandle<()> {
    let mut ticker = time::interval(Duration::from_secs_f32(1.0 / fps.max(1) as f32));
    ticker.set_missed_tick_behavior(time::MissedTickBehavior::Skip);

    tokio::spawn(async move {
        loop {
            select! {
                _ = cancellation_token.cancelled() => {
                    log::info!("Tick loop stopped.");
                    break;
                }

                _ = ticker.tick() => {
                    if event_sender.send(AppEvent::Tick(Tick::now())).await.is_err() {
                        log::warn!("App event channel closed, stopping tick loop.");
                        break;
                    }
                }
            }
        }
    })
}
