pub mod worker;

use metrics::Histogram;
use once_cell::sync::Lazy;
use std::sync::Arc;
use tokio::sync::{Semaphore, mpsc};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use twilight_gateway::StreamExt;
use twilight_gateway::{Event, EventTypeFlags, Shard};

use crate::{
    commands,
    context::Context,
    services::{health::HealthService, latency::LatencyService},
};

use worker::{EnqueuedEvent, Worker};

const HIGH_QUEUE_CAP: usize = 64;
const HIGH_PERMITS: usize = 8;
const MEMBERSHIP_QUEUE_CAP: usize = 512;
// One permit keeps joins and leaves in gateway order.
const MEMBERSHIP_PERMITS: usize = 1;
const LOW_QUEUE_CAP: usize = 24;
const LOW_PERMITS: usize = 4;

static HIGH_ENQ_BLOCK: Lazy<Histogram> =
    Lazy::new(|| metrics::histogram!("bot_queue_enqueue_block_seconds", "priority" => "high"));
static MEMBERSHIP_ENQ_BLOCK: Lazy<Histogram> = Lazy::new(|| {
    metrics::histogram!("bot_queue_enqueue_block_seconds", "priority" => "membership")
});
static LOW_ENQ_BLOCK: Lazy<Histogram> =
    Lazy::new(|| metrics::histogram!("bot_queue_enqueue_block_seconds", "priority" => "low"));

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PriorityClass {
    High,
    Membership,
    Low,
    Ignore,
}

impl PriorityClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriorityClass::High => "high",
            PriorityClass::Membership => "membership",
            PriorityClass::Low => "low",
            PriorityClass::Ignore => "ignore",
        }
    }
}

fn event_type(e: &Event) -> &'static str {
    match e {
        Event::InteractionCreate(_) => "interaction",
        Event::MemberAdd(_) => "member_add",
        Event::MemberRemove(_) => "member_remove",
        Event::Ready(_) => "ready",
        _ => "other",
    }
}

pub fn classify_priority(e: &Event) -> PriorityClass {
    match e {
        Event::InteractionCreate(_) => PriorityClass::High,
        Event::MemberAdd(_) | Event::MemberRemove(_) => PriorityClass::Membership,
        Event::Ready(_) => PriorityClass::Low,
        _ => PriorityClass::Ignore,
    }
}

pub struct Bot {
    shard: Shard,
    ctx: Arc<Context>,
    high_tx: mpsc::Sender<EnqueuedEvent>,
    membership_tx: mpsc::Sender<EnqueuedEvent>,
    low_tx: mpsc::Sender<EnqueuedEvent>,
    workers: Vec<JoinHandle<()>>,
}

impl Bot {
    pub async fn new(ctx: Arc<Context>, shard: Shard) -> anyhow::Result<Self> {
        let application = ctx
            .http
            .current_user_application()
            .await?
            .model()
            .await?;
        ctx.http
            .interaction(application.id)
            .set_global_commands(&commands::all())
            .await?;

        let (high_tx, high_rx) = mpsc::channel(HIGH_QUEUE_CAP);
        let (membership_tx, membership_rx) = mpsc::channel(MEMBERSHIP_QUEUE_CAP);
        let (low_tx, low_rx) = mpsc::channel(LOW_QUEUE_CAP);

        let high = Worker::spawn(
            ctx.clone(),
            Arc::new(Semaphore::new(HIGH_PERMITS)),
            high_rx,
            PriorityClass::High,
            |ctx, event| async move { crate::dispatch::handle_interaction_fast(ctx, event).await },
        );
        let membership = Worker::spawn(
            ctx.clone(),
            Arc::new(Semaphore::new(MEMBERSHIP_PERMITS)),
            membership_rx,
            PriorityClass::Membership,
            |ctx, event| async move { crate::dispatch::dispatch_event(ctx, event).await },
        );
        let low = Worker::spawn(
            ctx.clone(),
            Arc::new(Semaphore::new(LOW_PERMITS)),
            low_rx,
            PriorityClass::Low,
            |ctx, event| async move { crate::dispatch::dispatch_event(ctx, event).await },
        );

        Ok(Self {
            shard,
            ctx,
            high_tx,
            membership_tx,
            low_tx,
            workers: vec![high, membership, low],
        })
    }

    pub async fn run(mut self, shutdown: CancellationToken) -> anyhow::Result<()> {
        let mut failure_count = 0usize;

        loop {
            tokio::select! {
                _ = shutdown.cancelled() => break,
                item = self.shard.next_event(EventTypeFlags::all()) => {
                    let Some(item) = item else { break };
                    let event = match item {
                        Ok(event) => event,
                        Err(source) => {
                            tracing::warn!(?source, "error receiving event");
                            failure_count += 1;
                            if failure_count >= 5 {
                                HealthService::set_discord(false);
                            }
                            continue;
                        }
                    };

                    failure_count = 0;
                    self.ctx.cache.update(&event);
                    LatencyService::update(self.shard.latency().average());
                    HealthService::set_discord(self.shard.state().is_identified());

                    let priority = classify_priority(&event);
                    let (tx, blocked_hist) = match priority {
                        PriorityClass::Ignore => continue,
                        PriorityClass::High => (&self.high_tx, &*HIGH_ENQ_BLOCK),
                        PriorityClass::Membership => (&self.membership_tx, &*MEMBERSHIP_ENQ_BLOCK),
                        PriorityClass::Low => (&self.low_tx, &*LOW_ENQ_BLOCK),
                    };

                    let start = std::time::Instant::now();
                    let ev_type = event_type(&event);
                    if let Err(e) = tx.send(EnqueuedEvent { event, enqueue_at: start }).await {
                        tracing::warn!(error = ?e, "{} queue closed", priority.as_str());
                        break;
                    }
                    blocked_hist.record(start.elapsed().as_secs_f64());
                    metrics::counter!("bot_events_total", "priority" => priority.as_str(), "event_type" => ev_type, "result" => "enqueued").increment(1);
                }
            }
        }

        HealthService::set_discord(false);
        HealthService::set_ready(false);

        self.drain().await;
        Ok(())
    }

    /// Closes every queue and waits until already queued events are handled.
    async fn drain(self) {
        let Bot { high_tx, membership_tx, low_tx, workers, .. } = self;
        drop((high_tx, membership_tx, low_tx));

        tracing::info!("draining event queues");
        for worker in workers {
            if let Err(e) = worker.await {
                tracing::error!(error = %e, "worker task failed");
            }
        }
        tracing::info!("event queues drained");
    }
}
