use crate::domain::model::SchedulingRequest;
use crate::domain::ports::Dispatcher;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::Mutex;

/// In-memory dispatcher: accepted requests pile up until the caller
/// drains them. Clones share the same queue, so the handler can hold one
/// end while the driver holds the other.
#[derive(Debug, Clone, Default)]
pub struct QueueDispatcher {
    pending: Arc<Mutex<VecDeque<SchedulingRequest>>>,
}

impl QueueDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes all pending requests, oldest first.
    pub async fn drain(&self) -> Vec<SchedulingRequest> {
        let mut pending = self.pending.lock().await;
        pending.drain(..).collect()
    }

    pub async fn len(&self) -> usize {
        self.pending.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.pending.lock().await.is_empty()
    }
}

#[async_trait]
impl Dispatcher for QueueDispatcher {
    async fn schedule(&self, request: SchedulingRequest) -> Result<()> {
        tracing::debug!(
            "Queued '{}' for {}",
            request.operation,
            request.parameters.book_full_url
        );
        self.pending.lock().await.push_back(request);
        Ok(())
    }
}
