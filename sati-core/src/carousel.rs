//! Testimonial carousel with autoplay.
//!
//! The controller owns its item list, the current index and at most one armed
//! autoplay timer. Every manual command re-arms the timer (cancel first, then
//! arm) so autoplay always resumes a full period after the last interaction.
//!
//! Timer callbacks only hold a weak reference to the index state and carry the
//! generation they were armed with. A callback that outlives its controller,
//! or belongs to a superseded arming, does nothing.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

use tracing::{debug, trace};

use crate::error::CarouselError;
use crate::scheduler::Scheduler;

/// Index after moving forward one slide, wrapping at the end.
pub fn next_index(current: usize, len: usize) -> usize {
    if len == 0 { 0 } else { (current + 1) % len }
}

/// Index after moving back one slide, wrapping at the start.
pub fn previous_index(current: usize, len: usize) -> usize {
    if len == 0 { 0 } else { (current + len - 1) % len }
}

/// Mutable part of a carousel: where it is and which timer arming is live.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CarouselState {
    /// Index of the visible slide
    pub current_index: usize,
    /// Bumped on every (re)arm and on stop; stale timer callbacks compare against it
    pub timer_generation: u64,
}

type Observer = Rc<dyn Fn(usize)>;

/// Autoplaying carousel over a fixed list of items.
pub struct CarouselController<T, S: Scheduler> {
    items: Rc<[T]>,
    state: Rc<RefCell<CarouselState>>,
    scheduler: S,
    period: Duration,
    timer: Option<S::Handle>,
    observer: Option<Observer>,
}

impl<T, S: Scheduler> CarouselController<T, S> {
    /// Create a stopped carousel at index 0. Call [`start`](Self::start) to
    /// begin autoplay.
    pub fn new(items: impl Into<Rc<[T]>>, scheduler: S, period: Duration) -> Self {
        Self {
            items: items.into(),
            state: Rc::new(RefCell::new(CarouselState::default())),
            scheduler,
            period,
            timer: None,
            observer: None,
        }
    }

    /// Register a callback invoked with the new index after every change,
    /// manual or timer-driven. Register before [`start`](Self::start).
    pub fn on_change(mut self, observer: impl Fn(usize) + 'static) -> Self {
        self.observer = Some(Rc::new(observer));
        self
    }

    /// Number of slides.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when there is nothing to show.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// All slides in display order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Index of the visible slide (0 for an empty carousel).
    pub fn current_index(&self) -> usize {
        self.state.borrow().current_index
    }

    /// The visible slide.
    pub fn current(&self) -> Option<&T> {
        self.items.get(self.current_index())
    }

    /// Snapshot of index and timer generation.
    pub fn state(&self) -> CarouselState {
        *self.state.borrow()
    }

    /// Whether an autoplay timer is armed.
    pub fn is_autoplaying(&self) -> bool {
        self.timer.is_some()
    }

    /// Autoplay period.
    pub fn period(&self) -> Duration {
        self.period
    }

    /// (Re)arm autoplay. Any previously armed timer is cancelled first, so
    /// calling this repeatedly never leaves more than one timer running.
    pub fn start(&mut self) {
        self.cancel_timer();

        let generation = {
            let mut state = self.state.borrow_mut();
            state.timer_generation += 1;
            state.timer_generation
        };

        if self.items.is_empty() {
            trace!("carousel has no items, autoplay not armed");
            return;
        }

        let callback = tick_callback(
            Rc::downgrade(&self.state),
            self.items.len(),
            generation,
            self.observer.clone(),
        );
        self.timer = Some(self.scheduler.set_interval(self.period, callback));
        debug!(generation, period_ms = self.period.as_millis() as u64, "carousel autoplay armed");
    }

    /// Cancel autoplay. The index stays where it is.
    pub fn stop(&mut self) {
        if self.cancel_timer() {
            debug!("carousel autoplay stopped");
        }
        self.state.borrow_mut().timer_generation += 1;
    }

    /// Show the next slide, wrapping to the first, and restart the autoplay period.
    pub fn next(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.set_index(next_index(self.current_index(), self.items.len()));
        self.start();
    }

    /// Show the previous slide, wrapping to the last, and restart the autoplay period.
    pub fn previous(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.set_index(previous_index(self.current_index(), self.items.len()));
        self.start();
    }

    /// Jump to `index` and restart the autoplay period.
    ///
    /// Jumping to the slide already shown is valid and still restarts the
    /// period. An out-of-range index is rejected and leaves both the index and
    /// the running timer untouched.
    pub fn go_to(&mut self, index: usize) -> Result<(), CarouselError> {
        let len = self.items.len();
        if index >= len {
            return Err(CarouselError::IndexOutOfRange { index, len });
        }
        self.set_index(index);
        self.start();
        Ok(())
    }

    fn set_index(&mut self, index: usize) {
        self.state.borrow_mut().current_index = index;
        if let Some(observer) = &self.observer {
            observer(index);
        }
    }

    fn cancel_timer(&mut self) -> bool {
        match self.timer.take() {
            Some(handle) => {
                self.scheduler.clear(handle);
                true
            }
            None => false,
        }
    }
}

impl<T, S: Scheduler> Drop for CarouselController<T, S> {
    fn drop(&mut self) {
        self.stop();
    }
}

impl<T, S: Scheduler> std::fmt::Debug for CarouselController<T, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CarouselController")
            .field("len", &self.items.len())
            .field("state", &self.state())
            .field("autoplaying", &self.is_autoplaying())
            .field("period", &self.period)
            .finish()
    }
}

fn tick_callback(
    state: Weak<RefCell<CarouselState>>,
    len: usize,
    generation: u64,
    observer: Option<Observer>,
) -> Box<dyn Fn()> {
    Box::new(move || {
        let Some(state) = state.upgrade() else {
            return;
        };
        let index = {
            let mut state = state.borrow_mut();
            if state.timer_generation != generation {
                trace!(generation, live = state.timer_generation, "stale carousel tick ignored");
                return;
            }
            state.current_index = next_index(state.current_index, len);
            state.current_index
        };
        if let Some(observer) = &observer {
            observer(index);
        }
    })
}
