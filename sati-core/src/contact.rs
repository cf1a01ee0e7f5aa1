//! Contact form: validation, draft editing and the submission lifecycle.
//!
//! Validation is pure. The lifecycle (`Idle -> Submitting -> Success|Failed ->
//! Idle`) is driven by [`SubmissionLifecycle::submit`], which awaits an opaque
//! [`MessageSender`] and arms a one-shot timer to fall back to `Idle`.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::future::Future;
use std::rc::{Rc, Weak};
use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{SendError, SubmitError};
use crate::scheduler::{Scheduler, sleep};

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// Form fields, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    /// Sender's name (required)
    Name,
    /// Reply address (required, must look like `local@domain.tld`)
    Email,
    /// Company (optional)
    Company,
    /// Message body (required)
    Message,
}

impl Field {
    /// All fields in display order.
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Company, Field::Message];

    /// Form control name / id.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Company => "company",
            Field::Message => "message",
        }
    }

    /// Whether the field must be filled in.
    pub fn is_required(&self) -> bool {
        !matches!(self, Field::Company)
    }
}

/// What the visitor typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFormData {
    /// Sender's name
    pub name: String,
    /// Reply address
    pub email: String,
    /// Company, may be empty
    pub company: String,
    /// Message body
    pub message: String,
}

impl ContactFormData {
    /// Current value of `field`.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Company => &self.company,
            Field::Message => &self.message,
        }
    }

    /// Replace the value of `field`.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Company => &mut self.company,
            Field::Message => &mut self.message,
        };
        *slot = value.into();
    }
}

/// Field-level validation errors. Empty means the form is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationResult(BTreeMap<Field, String>);

impl ValidationResult {
    /// No field failed.
    pub fn is_valid(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of failing fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Alias of [`is_valid`](Self::is_valid) for collection-style callers.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Message for `field`, if it failed.
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    /// Drop the error for `field` (the user started editing it).
    pub fn clear(&mut self, field: Field) -> bool {
        self.0.remove(&field).is_some()
    }

    /// Failing fields with their messages, in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, msg)| (*field, msg.as_str()))
    }

    fn insert(&mut self, field: Field, message: &str) {
        self.0.insert(field, message.to_string());
    }
}

impl<const N: usize> From<[(Field, &str); N]> for ValidationResult {
    fn from(entries: [(Field, &str); N]) -> Self {
        Self(
            entries
                .into_iter()
                .map(|(field, msg)| (field, msg.to_string()))
                .collect(),
        )
    }
}

/// Check `data` and report every failing field.
pub fn validate(data: &ContactFormData) -> ValidationResult {
    let mut errors = ValidationResult::default();

    if data.name.trim().is_empty() {
        errors.insert(Field::Name, "Name is required");
    }

    if data.email.trim().is_empty() {
        errors.insert(Field::Email, "Email is required");
    } else if !EMAIL_PATTERN.is_match(&data.email) {
        errors.insert(Field::Email, "Please enter a valid email address");
    }

    if data.message.trim().is_empty() {
        errors.insert(Field::Message, "Message is required");
    }

    errors
}

/// Form contents plus the errors currently on display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    data: ContactFormData,
    errors: ValidationResult,
}

impl ContactDraft {
    /// Empty form, no errors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current contents.
    pub fn data(&self) -> &ContactFormData {
        &self.data
    }

    /// Errors from the last [`validate`](Self::validate), minus fields edited since.
    pub fn errors(&self) -> &ValidationResult {
        &self.errors
    }

    /// Update one field and clear its error, leaving other errors in place.
    pub fn edit(&mut self, field: Field, value: impl Into<String>) {
        self.data.set(field, value);
        self.errors.clear(field);
    }

    /// Re-run validation and keep the result for display.
    pub fn validate(&mut self) -> bool {
        self.errors = validate(&self.data);
        self.errors.is_valid()
    }

    /// Empty the form after a successful send.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Where a submission stands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionState {
    /// Nothing in flight, no banner.
    #[default]
    Idle,
    /// Waiting on the sender; the submit button is disabled.
    Submitting,
    /// Sent; success banner until the reset delay elapses.
    Success,
    /// Send failed; error banner until the reset delay elapses.
    Failed,
}

impl SubmissionState {
    /// Lowercase label for CSS classes and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionState::Idle => "idle",
            SubmissionState::Submitting => "submitting",
            SubmissionState::Success => "success",
            SubmissionState::Failed => "failed",
        }
    }

    /// Success and Failed both revert to Idle on a timer.
    pub fn is_settled(&self) -> bool {
        matches!(self, SubmissionState::Success | SubmissionState::Failed)
    }
}

/// Transport for a validated message. Out of scope for the site itself.
pub trait MessageSender {
    /// Deliver `message`.
    fn send(&self, message: &ContactFormData) -> impl Future<Output = Result<(), SendError>>;
}

/// Pretends to send: waits `latency`, logs, succeeds.
#[derive(Debug, Clone)]
pub struct SimulatedSender<S> {
    scheduler: S,
    latency: Duration,
}

impl<S: Scheduler> SimulatedSender<S> {
    /// Sender that resolves after `latency` on `scheduler`.
    pub fn new(scheduler: S, latency: Duration) -> Self {
        Self { scheduler, latency }
    }
}

impl<S: Scheduler> MessageSender for SimulatedSender<S> {
    async fn send(&self, message: &ContactFormData) -> Result<(), SendError> {
        sleep(&self.scheduler, self.latency).await;
        info!(
            name = %message.name,
            email = %message.email,
            company = %message.company,
            chars = message.message.chars().count(),
            "contact form submitted"
        );
        Ok(())
    }
}

struct Shared {
    state: SubmissionState,
    generation: u64,
}

type StateObserver = Rc<dyn Fn(SubmissionState)>;

/// Runs submissions and owns the auto-revert timer.
pub struct SubmissionLifecycle<S: Scheduler> {
    shared: Rc<RefCell<Shared>>,
    scheduler: S,
    reset_delay: Duration,
    revert_timer: RefCell<Option<S::Handle>>,
    observer: Option<StateObserver>,
}

impl<S: Scheduler> SubmissionLifecycle<S> {
    /// Idle lifecycle; settled states revert after `reset_delay`.
    pub fn new(scheduler: S, reset_delay: Duration) -> Self {
        Self {
            shared: Rc::new(RefCell::new(Shared {
                state: SubmissionState::Idle,
                generation: 0,
            })),
            scheduler,
            reset_delay,
            revert_timer: RefCell::new(None),
            observer: None,
        }
    }

    /// Callback for every state change, including the timed revert.
    pub fn on_change(mut self, observer: impl Fn(SubmissionState) + 'static) -> Self {
        self.observer = Some(Rc::new(observer));
        self
    }

    /// Current state.
    pub fn state(&self) -> SubmissionState {
        self.shared.borrow().state
    }

    /// Validate `data`, send it and settle.
    ///
    /// Invalid data returns [`SubmitError::Invalid`] without any transition; a
    /// second call while one is in flight returns [`SubmitError::InFlight`].
    /// Otherwise resolves to the settled state (`Success` or `Failed`).
    pub async fn submit<M: MessageSender>(
        &self,
        data: &ContactFormData,
        sender: &M,
    ) -> Result<SubmissionState, SubmitError> {
        if self.state() == SubmissionState::Submitting {
            return Err(SubmitError::InFlight);
        }

        let errors = validate(data);
        if !errors.is_valid() {
            debug!(fields = errors.len(), "contact form rejected by validation");
            return Err(SubmitError::Invalid(errors));
        }

        self.cancel_revert();
        self.transition(SubmissionState::Submitting);
        let abandon = AbandonGuard::new(self);

        let settled = match sender.send(data).await {
            Ok(()) => SubmissionState::Success,
            Err(e) => {
                warn!("contact form send failed: {e}");
                SubmissionState::Failed
            }
        };

        abandon.disarm();
        self.transition(settled);
        self.arm_revert();
        Ok(settled)
    }

    fn transition(&self, next: SubmissionState) {
        {
            let mut shared = self.shared.borrow_mut();
            shared.state = next;
            shared.generation += 1;
        }
        debug!(state = next.as_str(), "submission state changed");
        if let Some(observer) = &self.observer {
            observer(next);
        }
    }

    fn arm_revert(&self) {
        let generation = self.shared.borrow().generation;
        let callback = revert_callback(Rc::downgrade(&self.shared), generation, self.observer.clone());
        let handle = self.scheduler.set_timeout(self.reset_delay, callback);
        if let Some(previous) = self.revert_timer.replace(Some(handle)) {
            self.scheduler.clear(previous);
        }
    }

    fn cancel_revert(&self) {
        if let Some(handle) = self.revert_timer.take() {
            self.scheduler.clear(handle);
        }
    }
}

impl<S: Scheduler> Drop for SubmissionLifecycle<S> {
    fn drop(&mut self) {
        self.cancel_revert();
    }
}

impl<S: Scheduler> std::fmt::Debug for SubmissionLifecycle<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubmissionLifecycle")
            .field("state", &self.state())
            .field("reset_delay", &self.reset_delay)
            .finish()
    }
}

/// Puts `Submitting` back to `Idle` if the submit future is dropped before
/// the send settles.
struct AbandonGuard {
    shared: Rc<RefCell<Shared>>,
    generation: u64,
    observer: Option<StateObserver>,
    armed: bool,
}

impl AbandonGuard {
    fn new<S: Scheduler>(lifecycle: &SubmissionLifecycle<S>) -> Self {
        Self {
            shared: Rc::clone(&lifecycle.shared),
            generation: lifecycle.shared.borrow().generation,
            observer: lifecycle.observer.clone(),
            armed: true,
        }
    }

    fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for AbandonGuard {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        {
            let mut shared = self.shared.borrow_mut();
            if shared.generation != self.generation || shared.state != SubmissionState::Submitting {
                return;
            }
            shared.state = SubmissionState::Idle;
            shared.generation += 1;
        }
        debug!("submission abandoned before the send settled");
        if let Some(observer) = &self.observer {
            observer(SubmissionState::Idle);
        }
    }
}

fn revert_callback(
    shared: Weak<RefCell<Shared>>,
    generation: u64,
    observer: Option<StateObserver>,
) -> Box<dyn FnOnce()> {
    Box::new(move || {
        let Some(shared) = shared.upgrade() else {
            return;
        };
        {
            let mut shared = shared.borrow_mut();
            if shared.generation != generation || !shared.state.is_settled() {
                return;
            }
            shared.state = SubmissionState::Idle;
            shared.generation += 1;
        }
        debug!("submission banner cleared");
        if let Some(observer) = &observer {
            observer(SubmissionState::Idle);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::ManualScheduler;
    use futures::executor::{LocalPool, block_on};
    use futures::task::LocalSpawnExt;
    use pretty_assertions::assert_eq;

    fn form(name: &str, email: &str, message: &str) -> ContactFormData {
        ContactFormData {
            name: name.into(),
            email: email.into(),
            company: String::new(),
            message: message.into(),
        }
    }

    #[test]
    fn missing_name() {
        assert_eq!(
            validate(&form("", "a@b.com", "hi")),
            ValidationResult::from([(Field::Name, "Name is required")])
        );
    }

    #[test]
    fn malformed_email() {
        assert_eq!(
            validate(&form("A", "not-an-email", "hi")),
            ValidationResult::from([(Field::Email, "Please enter a valid email address")])
        );
    }

    #[test]
    fn missing_message() {
        assert_eq!(
            validate(&form("A", "a@b.com", "")),
            ValidationResult::from([(Field::Message, "Message is required")])
        );
    }

    #[test]
    fn blank_fields_are_reported_together() {
        let errors = validate(&form("   ", "  ", "\n"));
        assert_eq!(
            errors,
            ValidationResult::from([
                (Field::Name, "Name is required"),
                (Field::Email, "Email is required"),
                (Field::Message, "Message is required"),
            ])
        );
        assert_eq!(
            errors.iter().map(|(f, _)| f).collect::<Vec<_>>(),
            vec![Field::Name, Field::Email, Field::Message]
        );
    }

    #[test]
    fn email_shapes() {
        for ok in ["a@b.co", "first.last@sub.example.org", "x+tag@d.io"] {
            assert!(validate(&form("A", ok, "hi")).is_valid(), "{ok}");
        }
        for bad in ["a@b", "@b.com", "a b@c.com", "a@@b.com", " a@b.com", "a@b.com "] {
            assert_eq!(
                validate(&form("A", bad, "hi")).get(Field::Email),
                Some("Please enter a valid email address"),
                "{bad}"
            );
        }
    }

    #[test]
    fn company_is_never_required() {
        let mut data = form("A", "a@b.com", "hi");
        data.company = "   ".into();
        assert!(validate(&data).is_valid());
        assert!(!Field::Company.is_required());
    }

    #[test]
    fn editing_clears_only_that_field() {
        let mut draft = ContactDraft::new();
        assert!(!draft.validate());
        assert_eq!(draft.errors().len(), 3);

        draft.edit(Field::Email, "a@");
        assert_eq!(draft.errors().get(Field::Email), None);
        assert_eq!(draft.errors().get(Field::Name), Some("Name is required"));

        draft.edit(Field::Name, "Ada");
        draft.edit(Field::Message, "Hello");
        assert!(!draft.validate());
        assert_eq!(
            draft.errors().get(Field::Email),
            Some("Please enter a valid email address")
        );

        draft.edit(Field::Email, "ada@example.com");
        assert!(draft.validate());
        draft.clear();
        assert_eq!(draft.data(), &ContactFormData::default());
    }

    struct FailingSender;

    impl MessageSender for FailingSender {
        async fn send(&self, _message: &ContactFormData) -> Result<(), SendError> {
            Err(SendError("smtp relay unreachable".into()))
        }
    }

    type Lifecycle = Rc<SubmissionLifecycle<ManualScheduler>>;

    fn lifecycle(clock: &ManualScheduler) -> (Lifecycle, Rc<RefCell<Vec<SubmissionState>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let lifecycle = SubmissionLifecycle::new(clock.clone(), Duration::from_millis(5000))
            .on_change(move |s| sink.borrow_mut().push(s));
        (Rc::new(lifecycle), seen)
    }

    fn spawn_submit<M: MessageSender + 'static>(
        pool: &LocalPool,
        lifecycle: &Lifecycle,
        data: ContactFormData,
        sender: M,
    ) -> Rc<RefCell<Option<Result<SubmissionState, SubmitError>>>> {
        let out = Rc::new(RefCell::new(None));
        let (slot, lifecycle) = (Rc::clone(&out), Rc::clone(lifecycle));
        pool.spawner()
            .spawn_local(async move {
                let result = lifecycle.submit(&data, &sender).await;
                *slot.borrow_mut() = Some(result);
            })
            .expect("spawn submit");
        out
    }

    #[test]
    fn successful_submission_reverts_to_idle() {
        let clock = ManualScheduler::new();
        let (lifecycle, seen) = lifecycle(&clock);
        let mut pool = LocalPool::new();
        let sender = SimulatedSender::new(clock.clone(), Duration::from_millis(2000));

        let out = spawn_submit(&pool, &lifecycle, form("Ada", "ada@example.com", "Hi"), sender);
        pool.run_until_stalled();
        assert_eq!(lifecycle.state(), SubmissionState::Submitting);

        clock.advance(Duration::from_millis(2000));
        pool.run_until_stalled();
        assert_eq!(lifecycle.state(), SubmissionState::Success);
        assert_eq!(*out.borrow(), Some(Ok(SubmissionState::Success)));

        clock.advance(Duration::from_millis(4999));
        assert_eq!(lifecycle.state(), SubmissionState::Success);
        clock.advance(Duration::from_millis(1));
        assert_eq!(lifecycle.state(), SubmissionState::Idle);

        assert_eq!(
            *seen.borrow(),
            vec![
                SubmissionState::Submitting,
                SubmissionState::Success,
                SubmissionState::Idle
            ]
        );
    }

    #[test]
    fn failed_send_surfaces_then_clears() {
        let clock = ManualScheduler::new();
        let (lifecycle, _seen) = lifecycle(&clock);

        let settled = block_on(lifecycle.submit(&form("Ada", "ada@example.com", "Hi"), &FailingSender));
        assert_eq!(settled, Ok(SubmissionState::Failed));
        assert_eq!(lifecycle.state(), SubmissionState::Failed);

        clock.advance(Duration::from_millis(5000));
        assert_eq!(lifecycle.state(), SubmissionState::Idle);
    }

    #[test]
    fn invalid_data_causes_no_transition() {
        let clock = ManualScheduler::new();
        let (lifecycle, seen) = lifecycle(&clock);

        let result = block_on(lifecycle.submit(&form("", "a@b.com", "hi"), &FailingSender));
        assert_eq!(
            result,
            Err(SubmitError::Invalid(ValidationResult::from([(
                Field::Name,
                "Name is required"
            )])))
        );
        assert_eq!(lifecycle.state(), SubmissionState::Idle);
        assert!(seen.borrow().is_empty());
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn second_submit_while_in_flight_is_rejected() {
        let clock = ManualScheduler::new();
        let (lifecycle, _seen) = lifecycle(&clock);
        let mut pool = LocalPool::new();
        let sender = SimulatedSender::new(clock.clone(), Duration::from_millis(2000));

        spawn_submit(&pool, &lifecycle, form("Ada", "ada@example.com", "Hi"), sender);
        pool.run_until_stalled();

        let again = block_on(lifecycle.submit(&form("Ada", "ada@example.com", "Hi"), &FailingSender));
        assert_eq!(again, Err(SubmitError::InFlight));
    }

    #[test]
    fn resubmitting_cancels_pending_revert() {
        let clock = ManualScheduler::new();
        let (lifecycle, _seen) = lifecycle(&clock);
        let mut pool = LocalPool::new();
        let data = form("Ada", "ada@example.com", "Hi");

        let first = SimulatedSender::new(clock.clone(), Duration::from_millis(2000));
        spawn_submit(&pool, &lifecycle, data.clone(), first);
        pool.run_until_stalled();
        clock.advance(Duration::from_millis(2000));
        pool.run_until_stalled();
        assert_eq!(lifecycle.state(), SubmissionState::Success);

        // Second submission starts while the first banner is still up.
        clock.advance(Duration::from_millis(1000));
        let second = SimulatedSender::new(clock.clone(), Duration::from_millis(6000));
        spawn_submit(&pool, &lifecycle, data, second);
        pool.run_until_stalled();
        assert_eq!(lifecycle.state(), SubmissionState::Submitting);

        // The first revert would have fired here.
        clock.advance(Duration::from_millis(4500));
        assert_eq!(lifecycle.state(), SubmissionState::Submitting);

        clock.advance(Duration::from_millis(1500));
        pool.run_until_stalled();
        assert_eq!(lifecycle.state(), SubmissionState::Success);
    }

    #[test]
    fn dropped_submit_returns_to_idle() {
        use futures::FutureExt;

        let clock = ManualScheduler::new();
        let (lifecycle, seen) = lifecycle(&clock);
        let data = form("Ada", "ada@example.com", "Hi");
        let slow = SimulatedSender::new(clock.clone(), Duration::from_millis(2000));

        // Navigating away mid-send drops the future while it waits on the relay.
        assert!(lifecycle.submit(&data, &slow).now_or_never().is_none());
        assert_eq!(lifecycle.state(), SubmissionState::Idle);
        assert_eq!(*seen.borrow(), vec![SubmissionState::Submitting, SubmissionState::Idle]);
        assert_eq!(clock.pending(), 0);

        let result = block_on(lifecycle.submit(&data, &FailingSender));
        assert_eq!(result, Ok(SubmissionState::Failed));
    }

    #[test]
    fn dropping_lifecycle_cancels_revert() {
        let clock = ManualScheduler::new();
        let (lifecycle, _seen) = lifecycle(&clock);
        let _ = block_on(lifecycle.submit(&form("Ada", "ada@example.com", "Hi"), &FailingSender));
        assert_eq!(clock.pending(), 1);
        drop(lifecycle);
        assert_eq!(clock.pending(), 0);
    }
}
