//! Timer seam.
//!
//! Controllers never touch a global timer API. They receive a [`Scheduler`] at
//! construction and keep the handle of every timer they arm, so teardown can
//! always cancel it. The browser front end implements the trait on top of
//! `window.setInterval`; tests and headless hosts use [`ManualScheduler`]
//! (virtual clock) or [`TokioScheduler`].

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;
use std::time::Duration;

use futures::channel::oneshot;

/// Something that can run callbacks later on the current thread.
pub trait Scheduler {
    /// Owned token for one armed timer.
    type Handle;

    /// Run `callback` every `period` until the returned handle is cleared.
    /// The first run happens one full period after arming.
    fn set_interval(&self, period: Duration, callback: Box<dyn Fn()>) -> Self::Handle;

    /// Run `callback` once after `delay` unless the handle is cleared first.
    fn set_timeout(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> Self::Handle;

    /// Cancel a timer. Clearing an already-fired timeout is a no-op.
    fn clear(&self, handle: Self::Handle);
}

impl<S: Scheduler + ?Sized> Scheduler for Rc<S> {
    type Handle = S::Handle;

    fn set_interval(&self, period: Duration, callback: Box<dyn Fn()>) -> Self::Handle {
        (**self).set_interval(period, callback)
    }

    fn set_timeout(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> Self::Handle {
        (**self).set_timeout(delay, callback)
    }

    fn clear(&self, handle: Self::Handle) {
        (**self).clear(handle)
    }
}

/// Future that resolves once `delay` has elapsed on `scheduler`.
///
/// Dropping the future before it resolves clears the timeout.
pub async fn sleep<S: Scheduler>(scheduler: &S, delay: Duration) {
    let (tx, rx) = oneshot::channel::<()>();
    let handle = scheduler.set_timeout(
        delay,
        Box::new(move || {
            let _ = tx.send(());
        }),
    );
    let mut pending = PendingTimer {
        scheduler,
        handle: Some(handle),
    };
    // A cleared timer drops the sender; treat that as "woken".
    let _ = rx.await;
    pending.handle = None;
}

/// Clears the held timer on drop.
struct PendingTimer<'a, S: Scheduler> {
    scheduler: &'a S,
    handle: Option<S::Handle>,
}

impl<S: Scheduler> Drop for PendingTimer<'_, S> {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.scheduler.clear(handle);
        }
    }
}

// =============================================================================
// Manual (virtual clock) scheduler
// =============================================================================

/// Identifier of a timer armed on a [`ManualScheduler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

enum Task {
    Interval {
        period: Duration,
        callback: Rc<dyn Fn()>,
    },
    Timeout(Box<dyn FnOnce()>),
}

struct Entry {
    due: Duration,
    task: Task,
}

#[derive(Default)]
struct ManualInner {
    now: Duration,
    next_id: u64,
    timers: BTreeMap<TimerId, Entry>,
}

/// Deterministic scheduler driven by [`advance`](ManualScheduler::advance).
///
/// Cloning yields another handle to the same clock. Callbacks run inside
/// `advance`, in due order (ties broken by arming order), and may freely arm
/// or clear timers on the same scheduler.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    inner: Rc<RefCell<ManualInner>>,
}

impl ManualScheduler {
    /// Create a clock at time zero with no timers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    pub fn now(&self) -> Duration {
        self.inner.borrow().now
    }

    /// Number of timers currently armed.
    pub fn pending(&self) -> usize {
        self.inner.borrow().timers.len()
    }

    /// Move the clock forward by `dt`, firing every timer that falls due.
    pub fn advance(&self, dt: Duration) {
        let target = self.now().saturating_add(dt);

        while let Some(fire) = self.pop_due(target) {
            match fire {
                Fire::Repeating(callback) => callback(),
                Fire::Once(callback) => callback(),
            }
        }

        self.inner.borrow_mut().now = target;
    }

    fn pop_due(&self, target: Duration) -> Option<Fire> {
        let mut guard = self.inner.borrow_mut();
        let inner = &mut *guard;

        let id = inner
            .timers
            .iter()
            .filter(|(_, entry)| entry.due <= target)
            .min_by_key(|(id, entry)| (entry.due, **id))
            .map(|(id, _)| *id)?;

        let entry = inner.timers.get_mut(&id)?;
        inner.now = entry.due;

        if let Task::Interval { period, callback } = &entry.task {
            let callback = Rc::clone(callback);
            let period = *period;
            entry.due = entry.due.saturating_add(period);
            return Some(Fire::Repeating(callback));
        }

        match inner.timers.remove(&id) {
            Some(Entry {
                task: Task::Timeout(callback),
                ..
            }) => Some(Fire::Once(callback)),
            _ => None,
        }
    }

    fn arm(&self, delay: Duration, task: Task) -> TimerId {
        let mut inner = self.inner.borrow_mut();
        let id = TimerId(inner.next_id);
        inner.next_id += 1;
        let due = inner.now.saturating_add(delay);
        inner.timers.insert(id, Entry { due, task });
        id
    }
}

enum Fire {
    Repeating(Rc<dyn Fn()>),
    Once(Box<dyn FnOnce()>),
}

impl Scheduler for ManualScheduler {
    type Handle = TimerId;

    fn set_interval(&self, period: Duration, callback: Box<dyn Fn()>) -> TimerId {
        // A zero period would make `advance` spin forever.
        let period = period.max(Duration::from_millis(1));
        self.arm(
            period,
            Task::Interval {
                period,
                callback: Rc::from(callback),
            },
        )
    }

    fn set_timeout(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> TimerId {
        // Same floor as intervals: a timeout that re-arms itself at zero
        // delay would otherwise keep `advance` from returning.
        self.arm(delay.max(Duration::from_millis(1)), Task::Timeout(callback))
    }

    fn clear(&self, handle: TimerId) {
        self.inner.borrow_mut().timers.remove(&handle);
    }
}

impl std::fmt::Debug for ManualScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("ManualScheduler")
            .field("now", &inner.now)
            .field("pending", &inner.timers.len())
            .finish()
    }
}

// =============================================================================
// Tokio scheduler
// =============================================================================

#[cfg(feature = "tokio")]
pub use tokio_backend::TokioScheduler;

#[cfg(feature = "tokio")]
mod tokio_backend {
    use std::time::Duration;

    use tokio::task::JoinHandle;
    use tokio::time::{Instant, MissedTickBehavior, interval_at};

    use super::Scheduler;

    /// Runs timers as local tasks on the current tokio `LocalSet`.
    ///
    /// Must be used from inside `LocalSet::run_until` (or a task spawned on
    /// one); clearing a handle aborts the task before its next poll.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct TokioScheduler;

    impl Scheduler for TokioScheduler {
        type Handle = JoinHandle<()>;

        fn set_interval(&self, period: Duration, callback: Box<dyn Fn()>) -> JoinHandle<()> {
            let period = period.max(Duration::from_millis(1));
            tokio::task::spawn_local(async move {
                let mut ticks = interval_at(Instant::now() + period, period);
                ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);
                loop {
                    ticks.tick().await;
                    callback();
                }
            })
        }

        fn set_timeout(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> JoinHandle<()> {
            tokio::task::spawn_local(async move {
                tokio::time::sleep(delay).await;
                callback();
            })
        }

        fn clear(&self, handle: JoinHandle<()>) {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn counter() -> (Rc<Cell<u32>>, Box<dyn Fn()>) {
        let hits = Rc::new(Cell::new(0));
        let sink = Rc::clone(&hits);
        (hits, Box::new(move || sink.set(sink.get() + 1)))
    }

    #[test]
    fn interval_fires_once_per_period() {
        let clock = ManualScheduler::new();
        let (hits, cb) = counter();
        clock.set_interval(Duration::from_millis(100), cb);

        clock.advance(Duration::from_millis(99));
        assert_eq!(hits.get(), 0);
        clock.advance(Duration::from_millis(1));
        assert_eq!(hits.get(), 1);
        clock.advance(Duration::from_millis(350));
        assert_eq!(hits.get(), 4);
        assert_eq!(clock.now(), Duration::from_millis(450));
    }

    #[test]
    fn timeout_fires_once_and_disarms() {
        let clock = ManualScheduler::new();
        let (hits, cb) = counter();
        clock.set_timeout(Duration::from_millis(10), Box::new(move || cb()));

        clock.advance(Duration::from_millis(50));
        clock.advance(Duration::from_millis(50));
        assert_eq!(hits.get(), 1);
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn cleared_timer_never_fires() {
        let clock = ManualScheduler::new();
        let (hits, cb) = counter();
        let id = clock.set_interval(Duration::from_millis(10), cb);
        clock.clear(id);

        clock.advance(Duration::from_secs(1));
        assert_eq!(hits.get(), 0);
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn callbacks_may_rearm_during_advance() {
        let clock = ManualScheduler::new();
        let hits = Rc::new(Cell::new(0));
        let (inner_clock, inner_hits) = (clock.clone(), Rc::clone(&hits));
        clock.set_timeout(
            Duration::from_millis(10),
            Box::new(move || {
                inner_hits.set(inner_hits.get() + 1);
                let again = Rc::clone(&inner_hits);
                inner_clock.set_timeout(
                    Duration::from_millis(10),
                    Box::new(move || again.set(again.get() + 1)),
                );
            }),
        );

        clock.advance(Duration::from_millis(25));
        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn timers_fire_in_due_order() {
        let clock = ManualScheduler::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        for (label, ms) in [("late", 30), ("early", 10), ("middle", 20)] {
            let log = Rc::clone(&log);
            clock.set_timeout(
                Duration::from_millis(ms),
                Box::new(move || log.borrow_mut().push(label)),
            );
        }

        clock.advance(Duration::from_millis(30));
        assert_eq!(*log.borrow(), vec!["early", "middle", "late"]);
    }

    #[test]
    fn self_rearming_zero_timeout_advances_in_millisecond_steps() {
        fn rearm(clock: ManualScheduler, fired: Rc<RefCell<Vec<Duration>>>) {
            fired.borrow_mut().push(clock.now());
            let next = clock.clone();
            clock.set_timeout(Duration::ZERO, Box::new(move || rearm(next, fired)));
        }

        let clock = ManualScheduler::new();
        let fired = Rc::new(RefCell::new(Vec::new()));
        let (next, log) = (clock.clone(), Rc::clone(&fired));
        clock.set_timeout(Duration::ZERO, Box::new(move || rearm(next, log)));

        clock.advance(Duration::from_millis(3));
        assert_eq!(
            *fired.borrow(),
            vec![
                Duration::from_millis(1),
                Duration::from_millis(2),
                Duration::from_millis(3),
            ]
        );
        assert_eq!(clock.pending(), 1);
    }

    #[test]
    fn dropped_sleep_clears_its_timeout() {
        use futures::FutureExt;

        let clock = ManualScheduler::new();
        assert!(sleep(&clock, Duration::from_millis(200)).now_or_never().is_none());
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn sleep_resolves_after_delay() {
        use futures::executor::LocalPool;
        use futures::task::LocalSpawnExt;

        let clock = ManualScheduler::new();
        let done = Rc::new(Cell::new(false));
        let mut pool = LocalPool::new();

        let (task_clock, flag) = (clock.clone(), Rc::clone(&done));
        pool.spawner()
            .spawn_local(async move {
                sleep(&task_clock, Duration::from_millis(200)).await;
                flag.set(true);
            })
            .expect("spawn sleeper");

        pool.run_until_stalled();
        assert!(!done.get());

        clock.advance(Duration::from_millis(200));
        pool.run_until_stalled();
        assert!(done.get());
    }

    #[cfg(feature = "tokio")]
    #[tokio::test(start_paused = true)]
    async fn tokio_interval_stops_after_clear() {
        let local = tokio::task::LocalSet::new();
        local
            .run_until(async {
                let (hits, cb) = counter();
                let handle = TokioScheduler.set_interval(Duration::from_millis(100), cb);

                tokio::time::sleep(Duration::from_millis(250)).await;
                assert_eq!(hits.get(), 2);

                TokioScheduler.clear(handle);
                tokio::time::sleep(Duration::from_millis(500)).await;
                assert_eq!(hits.get(), 2);
            })
            .await;
    }
}
