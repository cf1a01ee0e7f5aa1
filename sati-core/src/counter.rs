//! Animated statistics counters ("50+ Projects Completed").
//!
//! A stat label is parsed once into a numeric target and a display format.
//! The animation counts from zero to the target linearly over a fixed
//! duration; labels that are not plain quantities (`24/7`) are shown as-is.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use tracing::debug;

use crate::scheduler::Scheduler;

/// How a counter value is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatFormat {
    /// `50` -> `50+`
    Plus,
    /// `95` -> `95%`
    Percent,
    /// Bare number
    Plain,
    /// Label is not a quantity; always show it as written
    Verbatim,
}

/// Parsed stat label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatTarget {
    label: String,
    target: u32,
    format: StatFormat,
}

impl StatTarget {
    /// Parse a label such as `"50+"`, `"95%"`, `"24/7"` or `"12"`.
    ///
    /// The target is every ASCII digit in the label read as one number
    /// (0 when there are none or it overflows).
    pub fn parse(label: &str) -> Self {
        let digits: String = label.chars().filter(char::is_ascii_digit).collect();
        let target = digits.parse().unwrap_or(0);
        let format = if label.contains('+') {
            StatFormat::Plus
        } else if label.contains('%') {
            StatFormat::Percent
        } else if label.contains('/') {
            StatFormat::Verbatim
        } else {
            StatFormat::Plain
        };
        Self {
            label: label.to_string(),
            target,
            format,
        }
    }

    /// Final numeric value.
    pub fn target(&self) -> u32 {
        self.target
    }

    /// Display format.
    pub fn format(&self) -> StatFormat {
        self.format
    }

    /// Render `count` in this stat's format.
    pub fn render(&self, count: u32) -> String {
        match self.format {
            StatFormat::Plus => format!("{count}+"),
            StatFormat::Percent => format!("{count}%"),
            StatFormat::Plain => count.to_string(),
            StatFormat::Verbatim => self.label.clone(),
        }
    }
}

/// Progress of one counter.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterAnimation {
    stat: StatTarget,
    duration: Duration,
    elapsed: Duration,
}

impl CounterAnimation {
    /// Counter for `label`, running over `duration`.
    pub fn new(label: &str, duration: Duration) -> Self {
        Self {
            stat: StatTarget::parse(label),
            duration,
            elapsed: Duration::ZERO,
        }
    }

    /// The parsed label.
    pub fn stat(&self) -> &StatTarget {
        &self.stat
    }

    /// Fraction complete in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    /// Current count: `floor(progress * target)`.
    pub fn value(&self) -> u32 {
        (self.progress() * f64::from(self.stat.target)).floor() as u32
    }

    /// Current count, formatted.
    pub fn text(&self) -> String {
        self.stat.render(self.value())
    }

    /// Whether the target has been reached.
    pub fn is_finished(&self) -> bool {
        self.progress() >= 1.0
    }

    /// Move time forward by `dt`.
    pub fn advance(&mut self, dt: Duration) {
        self.elapsed = self.elapsed.saturating_add(dt).min(self.duration);
    }
}

/// Drives a [`CounterAnimation`] with a frame interval that disarms itself
/// when the counter reaches its target.
pub struct CounterDriver<S: Scheduler> {
    animation: Rc<RefCell<CounterAnimation>>,
    scheduler: S,
    frame: Duration,
    timer: Rc<RefCell<Option<S::Handle>>>,
    started: bool,
}

impl<S> CounterDriver<S>
where
    S: Scheduler + Clone + 'static,
    S::Handle: 'static,
{
    /// Idle driver; nothing runs until [`start`](Self::start).
    pub fn new(animation: CounterAnimation, scheduler: S, frame: Duration) -> Self {
        Self {
            animation: Rc::new(RefCell::new(animation)),
            scheduler,
            frame,
            timer: Rc::new(RefCell::new(None)),
            started: false,
        }
    }

    /// Current formatted value.
    pub fn text(&self) -> String {
        self.animation.borrow().text()
    }

    /// Whether the counter reached its target.
    pub fn is_finished(&self) -> bool {
        self.animation.borrow().is_finished()
    }

    /// Whether a frame timer is armed.
    pub fn is_running(&self) -> bool {
        self.timer.borrow().is_some()
    }

    /// Begin counting, calling `on_frame` with the formatted value on every
    /// frame. Only the first call has any effect: a counter plays once.
    pub fn start(&mut self, on_frame: impl Fn(String) + 'static) {
        if self.started {
            return;
        }
        self.started = true;

        let animation = Rc::downgrade(&self.animation);
        let slot = Rc::downgrade(&self.timer);
        let scheduler = self.scheduler.clone();
        let frame = self.frame;

        let handle = self.scheduler.set_interval(
            frame,
            Box::new(move || {
                let Some(animation) = animation.upgrade() else {
                    return;
                };
                let (text, done) = {
                    let mut animation = animation.borrow_mut();
                    animation.advance(frame);
                    (animation.text(), animation.is_finished())
                };
                on_frame(text);
                if let (true, Some(slot)) = (done, slot.upgrade()) {
                    let handle = slot.borrow_mut().take();
                    if let Some(handle) = handle {
                        scheduler.clear(handle);
                    }
                }
            }),
        );
        *self.timer.borrow_mut() = Some(handle);
        debug!(
            target = self.animation.borrow().stat().target(),
            "counter animation started"
        );
    }
}

impl<S: Scheduler> Drop for CounterDriver<S> {
    fn drop(&mut self) {
        if let Some(handle) = self.timer.borrow_mut().take() {
            self.scheduler.clear(handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::ManualScheduler;

    #[test]
    fn parses_stat_labels() {
        let plus = StatTarget::parse("50+");
        assert_eq!((plus.target(), plus.format()), (50, StatFormat::Plus));

        let pct = StatTarget::parse("95%");
        assert_eq!((pct.target(), pct.format()), (95, StatFormat::Percent));

        let always = StatTarget::parse("24/7");
        assert_eq!(always.format(), StatFormat::Verbatim);
        assert_eq!(always.render(3), "24/7");

        let plain = StatTarget::parse("12");
        assert_eq!(plain.render(7), "7");

        assert_eq!(StatTarget::parse("n/a").target(), 0);
    }

    #[test]
    fn counts_linearly_and_floors() {
        let mut anim = CounterAnimation::new("50+", Duration::from_millis(2000));
        assert_eq!(anim.text(), "0+");

        anim.advance(Duration::from_millis(500));
        assert_eq!(anim.value(), 12);

        anim.advance(Duration::from_millis(1000));
        assert_eq!(anim.text(), "37+");

        anim.advance(Duration::from_secs(10));
        assert!(anim.is_finished());
        assert_eq!(anim.text(), "50+");
    }

    #[test]
    fn zero_duration_is_immediately_done() {
        let anim = CounterAnimation::new("95%", Duration::ZERO);
        assert!(anim.is_finished());
        assert_eq!(anim.text(), "95%");
    }

    #[test]
    fn driver_plays_once_and_disarms() {
        let clock = ManualScheduler::new();
        let frames = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&frames);

        let mut driver = CounterDriver::new(
            CounterAnimation::new("95%", Duration::from_millis(100)),
            clock.clone(),
            Duration::from_millis(25),
        );
        driver.start(move |text| sink.borrow_mut().push(text));
        driver.start(|_| panic!("second start must be ignored"));
        assert!(driver.is_running());

        clock.advance(Duration::from_millis(500));
        assert!(driver.is_finished());
        assert!(!driver.is_running());
        assert_eq!(clock.pending(), 0);
        assert_eq!(*frames.borrow(), vec!["23%", "47%", "71%", "95%"]);
    }

    #[test]
    fn dropping_driver_cancels_frames() {
        let clock = ManualScheduler::new();
        let mut driver = CounterDriver::new(
            CounterAnimation::new("50+", Duration::from_secs(2)),
            clock.clone(),
            Duration::from_millis(16),
        );
        driver.start(|_| {});
        drop(driver);
        assert_eq!(clock.pending(), 0);
    }
}
