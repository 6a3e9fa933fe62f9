use std::future::Future;
use std::sync::Arc;
use tokio::sync::{Semaphore, mpsc::Receiver};
use tokio::task::JoinHandle;
use tokio_util::task::TaskTracker;
use twilight_gateway::Event;

use super::PriorityClass;

pub struct EnqueuedEvent {
    pub event: Event,
    pub enqueue_at: std::time::Instant,
}

pub struct Worker;

impl Worker {
    /// Drains `rx`, running at most `sem`'s permit count of handlers at once.
    /// Permits are granted in queue order, so a single permit processes
    /// events strictly one after another.
    ///
    /// The returned handle resolves once `rx` is closed and every handler it
    /// started has finished.
    pub fn spawn<C, F, Fut>(
        ctx: Arc<C>,
        sem: Arc<Semaphore>,
        mut rx: Receiver<EnqueuedEvent>,
        priority: PriorityClass,
        handler: F,
    ) -> JoinHandle<()>
    where
        C: Send + Sync + 'static,
        F: Fn(Arc<C>, Event) -> Fut + Send + Sync + 'static + Copy,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let queue_wait = metrics::histogram!("bot_queue_wait_seconds", "priority" => priority.as_str());

        tokio::spawn(async move {
            let in_flight = TaskTracker::new();
            while let Some(EnqueuedEvent { event, enqueue_at }) = rx.recv().await {
                queue_wait.record(enqueue_at.elapsed().as_secs_f64());

                let permit = match sem.clone().acquire_owned().await {
                    Ok(p) => p,
                    Err(_) => {
                        tracing::info!("{} semaphore closed, exit worker", priority.as_str());
                        break;
                    }
                };

                let ctx2 = ctx.clone();
                in_flight.spawn(async move {
                    let _permit = permit;
                    handler(ctx2, event).await;
                });
            }

            in_flight.close();
            if !in_flight.is_empty() {
                tracing::info!(
                    pending = in_flight.len(),
                    "{} worker waiting for in-flight handlers",
                    priority.as_str()
                );
            }
            in_flight.wait().await;
        })
    }
}
