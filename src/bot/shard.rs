//! Shard manager owning the gateway session of every shard.
//!
//! Each shard is launched on its own task. The only state shared between those tasks is the
//! slot collection holding one session handle per shard; its lock is taken for the slot write
//! alone, so sessions are built and opened concurrently.
//!
//! There is no isolation between shards: the first shard that fails to build or to stay
//! connected makes `ShardManager::wait` return its error, which ends the process.

use std::sync::Arc;

use dioxus_logger::tracing;
use serenity::async_trait;
use tokio::{sync::RwLock, task::JoinSet};

use crate::error::AppError;

/// Position of a shard among all shards of the bot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShardSpec {
    /// Zero-based shard id as sent to Discord.
    pub index: u32,
    /// Total number of shards the bot runs.
    pub total: u32,
}

impl ShardSpec {
    /// One-based shard number used in log output.
    pub fn number(&self) -> u32 {
        self.index + 1
    }
}

/// Gateway client library seam.
///
/// `build` creates a session for one shard and returns the client that drives it together
/// with a handle that can close it from elsewhere. `open` connects and runs the session until
/// it is closed.
#[async_trait]
pub trait Gateway: Send + Sync + 'static {
    type Client: Send + 'static;
    type Handle: Clone + Send + Sync + 'static;

    async fn build(
        &self,
        token: &str,
        shard: ShardSpec,
    ) -> Result<(Self::Client, Self::Handle), AppError>;

    async fn open(&self, client: Self::Client, shard: ShardSpec) -> Result<(), AppError>;

    async fn close(&self, handle: &Self::Handle);
}

type ShardSlots<H> = Arc<RwLock<Vec<Option<H>>>>;

pub struct ShardManager<G: Gateway> {
    gateway: Arc<G>,
    token: Arc<str>,
    total: u32,
    slots: ShardSlots<G::Handle>,
    tasks: JoinSet<Result<(), AppError>>,
    started: bool,
}

impl<G: Gateway> ShardManager<G> {
    /// Creates a manager for `total` shards with every slot empty.
    pub fn new(gateway: G, token: impl Into<Arc<str>>, total: u32) -> Self {
        Self {
            gateway: Arc::new(gateway),
            token: token.into(),
            total,
            slots: Arc::new(RwLock::new(vec![None; total as usize])),
            tasks: JoinSet::new(),
            started: false,
        }
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    /// Spawns one launch task per shard and returns without waiting for them.
    ///
    /// Calling this more than once has no effect.
    pub fn start_shards(&mut self) {
        if self.started {
            tracing::warn!("Shards have already been started");
            return;
        }
        self.started = true;

        for index in 0..self.total {
            let shard = ShardSpec {
                index,
                total: self.total,
            };

            self.tasks.spawn(launch_shard(
                Arc::clone(&self.gateway),
                Arc::clone(&self.token),
                Arc::clone(&self.slots),
                shard,
            ));
        }

        tracing::info!("Launching {} shard(s)", self.total);
    }

    /// Snapshot of the session handle of every shard, indexed by shard id.
    pub async fn handles(&self) -> Vec<Option<G::Handle>> {
        self.slots.read().await.clone()
    }

    /// Number of shards whose session has been built.
    pub async fn launched(&self) -> usize {
        self.slots.read().await.iter().flatten().count()
    }

    /// Waits for every shard task to finish.
    ///
    /// # Returns
    /// - `Ok(())` - Every shard closed cleanly
    /// - `Err(AppError)` - The first shard failure; the remaining shards are aborted
    pub async fn wait(&mut self) -> Result<(), AppError> {
        while let Some(joined) = self.tasks.join_next().await {
            if let Err(e) = joined.map_err(AppError::from).and_then(|result| result) {
                self.tasks.abort_all();
                return Err(e);
            }
        }

        Ok(())
    }

    /// Closes the session of every shard launched so far.
    pub async fn shutdown(&self) {
        let handles: Vec<G::Handle> = self.slots.read().await.iter().flatten().cloned().collect();

        tracing::info!("Closing {} shard(s)", handles.len());

        for handle in &handles {
            self.gateway.close(handle).await;
        }
    }
}

async fn launch_shard<G: Gateway>(
    gateway: Arc<G>,
    token: Arc<str>,
    slots: ShardSlots<G::Handle>,
    shard: ShardSpec,
) -> Result<(), AppError> {
    let (client, handle) = gateway.build(&token, shard).await.inspect_err(|e| {
        tracing::error!(
            "Error creating Discord session for shard {}: {}",
            shard.index,
            e
        )
    })?;

    slots.write().await[shard.index as usize] = Some(handle);

    tracing::info!("Shard #{} launched successfully", shard.number());

    gateway.open(client, shard).await.inspect_err(|e| {
        tracing::error!("Error opening connection for shard {}: {}", shard.index, e)
    })?;

    tracing::info!("Shard #{} closed", shard.number());

    Ok(())
}
