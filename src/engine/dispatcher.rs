use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::{Semaphore, mpsc, oneshot};
use tracing::{debug, warn};

use super::{ValidateOperationRequest, ValidateOperationResponse, ValidationEngine};
use crate::core::EngineConfig;
use crate::error::{Result, ValidateOperationError};

struct Envelope {
    request: ValidateOperationRequest,
    reply: oneshot::Sender<Result<ValidateOperationResponse>>,
}

/// Runs a validation engine behind a message channel.
pub struct EngineDispatcher;

impl EngineDispatcher {
    /// Start the worker task and return a handle for sending requests.
    ///
    /// At most `capacity` engine calls run at once and at most `capacity`
    /// further requests wait in the channel; senders beyond that wait in
    /// [`EngineHandle::send`]. Must be called from within a tokio runtime. The
    /// worker stops once every handle has been dropped.
    pub fn spawn<E>(engine: E, capacity: usize) -> EngineHandle
    where
        E: ValidationEngine + 'static,
    {
        let capacity = capacity.max(1);
        let (tx, rx) = mpsc::channel(capacity);
        tokio::spawn(run(Arc::new(engine), rx, Arc::new(Semaphore::new(capacity))));
        EngineHandle { tx }
    }

    pub fn spawn_with_config<E>(engine: E, config: &EngineConfig) -> EngineHandle
    where
        E: ValidationEngine + 'static,
    {
        Self::spawn(engine, config.channel_capacity)
    }
}

async fn run<E>(engine: Arc<E>, mut rx: mpsc::Receiver<Envelope>, permits: Arc<Semaphore>)
where
    E: ValidationEngine + 'static,
{
    while let Some(Envelope { request, mut reply }) = rx.recv().await {
        // The semaphore is never closed.
        let Ok(permit) = Arc::clone(&permits).acquire_owned().await else {
            break;
        };
        let engine = Arc::clone(&engine);

        tokio::spawn(async move {
            let _permit = permit;
            let request_id = request.id;

            // Stop working on a request whose caller is gone.
            let result = tokio::select! {
                result = engine.validate(request) => result,
                _ = reply.closed() => {
                    debug!(%request_id, "Caller went away, engine call cancelled");
                    return;
                }
            };

            if let Err(e) = &result {
                warn!(%request_id, error = %e, "Validation engine failed");
            }

            if reply.send(result).is_err() {
                debug!(%request_id, "Caller went away before the engine replied");
            }
        });
    }

    debug!("Validation engine dispatcher stopped");
}

/// Sending side of an [`EngineDispatcher`]. Cheap to clone.
#[derive(Debug, Clone)]
pub struct EngineHandle {
    tx: mpsc::Sender<Envelope>,
}

impl EngineHandle {
    /// Send one request and wait for the engine's reply.
    pub async fn send(&self, request: ValidateOperationRequest) -> Result<ValidateOperationResponse> {
        let (reply, response) = oneshot::channel();

        self.tx
            .send(Envelope { request, reply })
            .await
            .map_err(|_| ValidateOperationError::engine_unavailable("dispatcher has shut down"))?;

        response.await.map_err(|_| {
            ValidateOperationError::engine_unavailable("engine dropped the request without replying")
        })?
    }

    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

#[async_trait]
impl ValidationEngine for EngineHandle {
    async fn validate(&self, request: ValidateOperationRequest) -> Result<ValidateOperationResponse> {
        self.send(request).await
    }
}
