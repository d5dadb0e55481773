use std::sync::{
    atomic::{AtomicU32, Ordering},
    Arc,
};

use serenity::async_trait;
use tokio::sync::{Barrier, Notify};

use crate::bot::shard::{Gateway, ShardSpec};
use crate::error::AppError;

/// In-memory gateway whose sessions stay open until closed through their handle.
#[derive(Default)]
pub(crate) struct FakeGateway {
    pub(crate) builds: Arc<AtomicU32>,
    pub(crate) fail_on: Option<u32>,
    pub(crate) barrier: Option<Barrier>,
    pub(crate) hold_open: bool,
}

#[async_trait]
impl Gateway for FakeGateway {
    type Client = Arc<Notify>;
    type Handle = Arc<Notify>;

    async fn build(
        &self,
        token: &str,
        shard: ShardSpec,
    ) -> Result<(Self::Client, Self::Handle), AppError> {
        assert_eq!(token, "token");
        self.builds.fetch_add(1, Ordering::SeqCst);

        if let Some(barrier) = &self.barrier {
            barrier.wait().await;
        }

        if self.fail_on == Some(shard.index) {
            return Err(serenity::Error::Other("invalid token").into());
        }

        let notify = Arc::new(Notify::new());
        Ok((Arc::clone(&notify), notify))
    }

    async fn open(&self, client: Self::Client, _shard: ShardSpec) -> Result<(), AppError> {
        if self.hold_open {
            client.notified().await;
        }
        Ok(())
    }

    async fn close(&self, handle: &Self::Handle) {
        handle.notify_one();
    }
}
