use crate::app_config;
use crate::domain::{GeoLocation, HistoryPoint, PositionRecord, TrackerStatus};
use crate::randomness::RandomSource;
use crate::simulator;
use chrono::Utc;
use thiserror::Error;
use tokio::sync::mpsc::{self, Receiver, Sender};
use tokio::sync::oneshot;
use tokio::task;
use tracing::{debug, info, instrument};

#[derive(Debug)]
pub enum TrackerCommand {
    CurrentPosition { reply: oneshot::Sender<PositionRecord> },
    PositionHistory { reply: oneshot::Sender<Vec<HistoryPoint>> },
    Status { reply: oneshot::Sender<TrackerStatus> },
}

/// The mock device. Sole owner of the current position and of the random source, commands are handled one at a time.
#[derive(Debug)]
pub struct Tracker {
    position: PositionRecord,
    reference: GeoLocation,
    device_id: String,
    random: Box<dyn RandomSource>,
    rx: Receiver<TrackerCommand>,
}

impl Tracker {
    pub fn new(config: &app_config::Tracker, random: Box<dyn RandomSource>, rx: Receiver<TrackerCommand>) -> Self {
        let reference = config.location().clone();

        Tracker {
            position: PositionRecord::at(&reference, config.location_label(), Utc::now()),
            reference,
            device_id: config.device_id().to_string(),
            random,
            rx,
        }
    }

    #[instrument(skip(self), fields(device_id = %self.device_id))]
    pub async fn listen(&mut self) {
        while let Some(command) = self.rx.recv().await {
            debug!("📡 Received command: {:?}", command);
            let now = Utc::now();
            let delivered = match command {
                TrackerCommand::CurrentPosition { reply } => {
                    simulator::advance(&mut self.position, self.random.as_mut(), now);
                    debug!(lat = self.position.latitude, lon = self.position.longitude, speed = self.position.speed_kph, "📍 Moved tracker");
                    reply.send(self.position.clone()).is_ok()
                }
                TrackerCommand::PositionHistory { reply } => reply.send(simulator::history(&self.reference, self.random.as_mut(), now)).is_ok(),
                TrackerCommand::Status { reply } => reply.send(simulator::status(&self.device_id, self.random.as_mut(), now)).is_ok(),
            };

            if !delivered {
                debug!("📡 Requester went away before the reply was delivered");
            }
        }

        info!("📡 Tracker stopped, all handles dropped");
    }
}

/// Cheap, cloneable access to a running [`Tracker`].
#[derive(Clone, Debug)]
pub struct TrackerHandle {
    tx: Sender<TrackerCommand>,
}

impl TrackerHandle {
    pub fn new(tx: Sender<TrackerCommand>) -> Self {
        TrackerHandle { tx }
    }

    /// Advances the random walk and returns the new position.
    pub async fn current_position(&self) -> Result<PositionRecord, TrackerError> {
        self.request(|reply| TrackerCommand::CurrentPosition { reply }).await
    }

    pub async fn position_history(&self) -> Result<Vec<HistoryPoint>, TrackerError> {
        self.request(|reply| TrackerCommand::PositionHistory { reply }).await
    }

    pub async fn status(&self) -> Result<TrackerStatus, TrackerError> {
        self.request(|reply| TrackerCommand::Status { reply }).await
    }

    async fn request<T>(&self, command: impl FnOnce(oneshot::Sender<T>) -> TrackerCommand) -> Result<T, TrackerError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.tx.send(command(reply_tx)).await.map_err(|_| TrackerError::Stopped)?;
        Ok(reply_rx.await?)
    }
}

/// Spawns the tracker task and returns a handle to it.
pub fn start(config: &app_config::Tracker, random: Box<dyn RandomSource>) -> TrackerHandle {
    let (tx, rx) = mpsc::channel::<TrackerCommand>(config.command_buffer_size());
    let mut tracker = Tracker::new(config, random, rx);

    task::spawn(async move {
        tracker.listen().await;
    });

    TrackerHandle::new(tx)
}

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("tracker is not running")]
    Stopped,
    #[error("tracker did not reply: {0}")]
    NoReply(#[from] oneshot::error::RecvError),
}
