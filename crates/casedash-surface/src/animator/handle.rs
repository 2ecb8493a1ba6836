use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::{broadcast, watch};
use tokio::task::JoinHandle;
use tokio::time::{self, Duration, Instant, MissedTickBehavior};
use tracing::Instrument;

use casedash_core::animation::{AnimationRun, Phase, Snapshot};
use casedash_core::error::{CaseDashError, Result};
use casedash_core::metric::Targets;

use crate::obs::metrics::AnimatorMetrics;

use super::CounterAnimator;

const MAX_SNAPSHOT_BACKLOG: usize = 256;

/// Run state plus its outbound channels.
///
/// Ticking and cancelling both happen under this one lock, so a snapshot is
/// either emitted before `stop` takes the lock or never.
///
/// `snapshots` is dropped as soon as the run reaches a terminal phase, which
/// closes every subscriber's channel instead of leaving it waiting.
struct RunCore {
    run: AnimationRun,
    snapshots: Option<broadcast::Sender<Snapshot>>,
    phase: watch::Sender<Phase>,
}

type Shared = Arc<Mutex<RunCore>>;

fn lock(shared: &Mutex<RunCore>) -> MutexGuard<'_, RunCore> {
    shared.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Owned handle to one animation run.
///
/// Dropping the handle stops the run, so the timer task never outlives its
/// owner.
pub struct RunHandle {
    id: u64,
    shared: Shared,
    phase_rx: watch::Receiver<Phase>,
    task: Option<JoinHandle<()>>,
    animator: CounterAnimator,
}

impl RunHandle {
    pub(super) fn spawn(animator: CounterAnimator, targets: &Targets) -> Result<Self> {
        let rt = tokio::runtime::Handle::try_current().map_err(|e| {
            CaseDashError::Internal(format!("animator requires a tokio runtime: {e}"))
        })?;

        let id = animator.next_run_id();
        let metrics = animator.metrics();

        let mut run = AnimationRun::new(targets, animator.cap());
        let planned = run.planned_ticks();
        let phase = run.begin();

        let backlog = usize::try_from(planned)
            .unwrap_or(MAX_SNAPSHOT_BACKLOG)
            .clamp(1, MAX_SNAPSHOT_BACKLOG);
        let snapshots = (phase == Phase::Running).then(|| broadcast::channel(backlog).0);
        let (phase_tx, phase_rx) = watch::channel(phase);

        let shared = Arc::new(Mutex::new(RunCore {
            run,
            snapshots,
            phase: phase_tx,
        }));

        metrics.runs_started.inc();
        let span = tracing::info_span!("animation_run", run_id = id);

        let task = if phase == Phase::Running {
            tracing::info!(
                parent: &span,
                metrics = targets.len(),
                planned_ticks = planned,
                "animation run started"
            );
            let fut = drive(Arc::clone(&shared), animator.period(), metrics);
            Some(rt.spawn(fut.instrument(span)))
        } else {
            // nothing to animate
            metrics.runs_completed.inc();
            tracing::debug!(
                parent: &span,
                metrics = targets.len(),
                "animation run completed without ticking"
            );
            None
        };

        Ok(Self {
            id,
            shared,
            phase_rx,
            task,
            animator,
        })
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn phase(&self) -> Phase {
        *self.phase_rx.borrow()
    }

    /// Current values, read under the run lock.
    pub fn snapshot(&self) -> Snapshot {
        lock(&self.shared).run.snapshot()
    }

    /// Receive every snapshot emitted from now on. The channel closes right
    /// after the final snapshot, or on `stop`, so a blocked `recv` always
    /// wakes. Subscribing to a finished run yields an already-closed receiver.
    pub fn subscribe(&self) -> broadcast::Receiver<Snapshot> {
        match &lock(&self.shared).snapshots {
            Some(tx) => tx.subscribe(),
            None => broadcast::channel(1).1,
        }
    }

    /// Resolve once the run is `Completed` or `Cancelled`.
    pub async fn finished(&self) -> Phase {
        let mut rx = self.phase_rx.clone();
        let result = rx.wait_for(|p| p.is_terminal()).await.map(|p| *p);
        match result {
            Ok(phase) => phase,
            Err(_) => self.phase(),
        }
    }

    /// Cancel future ticks. No snapshot is emitted after this returns;
    /// subscribers see their channel close instead.
    /// Safe to call repeatedly and after natural completion.
    pub fn stop(&self) {
        let mut core = lock(&self.shared);
        core.snapshots = None;
        if core.run.cancel() {
            core.phase.send_replace(Phase::Cancelled);
            self.animator.metrics().runs_cancelled.inc();
            tracing::info!(run_id = self.id, tick = core.run.ticks(), "animation run cancelled");
        }
        drop(core);

        if let Some(task) = &self.task {
            task.abort();
        }
    }

    /// Cancel this run, then start a fresh one toward `targets` in its place.
    /// Existing subscribers see their channel close and must resubscribe.
    pub fn restart(&mut self, targets: &Targets) -> Result<()> {
        self.stop();
        let next = RunHandle::spawn(self.animator.clone(), targets)?;
        tracing::debug!(prev_run_id = self.id, run_id = next.id, "animation run restarted");
        *self = next;
        Ok(())
    }
}

impl Drop for RunHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

async fn drive(shared: Shared, period: Duration, metrics: Arc<AnimatorMetrics>) {
    // First tick lands one period after start, not immediately.
    let mut ticker = time::interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;

        let mut core = lock(&shared);
        let Some(snap) = core.run.tick() else {
            break;
        };
        metrics.ticks.inc();

        let tick = snap.tick;
        let phase = snap.phase;
        tracing::trace!(tick, "tick");
        if let Some(tx) = &core.snapshots {
            // no subscribers is fine
            let _ = tx.send(snap);
        }

        if phase.is_terminal() {
            core.snapshots = None;
            core.phase.send_replace(phase);
            metrics.runs_completed.inc();
            tracing::info!(ticks = tick, "animation run completed");
            break;
        }
    }
}
