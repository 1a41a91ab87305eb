use log::{debug, info, warn};

use crate::config;
use crate::signup::email::{EmailError, SignupEmail};
use crate::signup::store::{SignupStore, StoreError};

/// Everything the signup form renders from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub email_input: String,
    pub submitted: bool,
    pub signup_count: usize,
    pub warning: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank input, nothing happened.
    Ignored,
    Invalid(EmailError),
    Joined { count: usize },
    AlreadyJoined { count: usize },
    /// Accepted from the user's side but the browser refused to keep it.
    NotPersisted,
}

type Listener = Box<dyn Fn(&FormState)>;

pub struct SignupController<S> {
    store: S,
    state: FormState,
    confirm_until: Option<f64>,
    listeners: Vec<Listener>,
}

impl<S: SignupStore> SignupController<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            state: FormState::default(),
            confirm_until: None,
            listeners: Vec::new(),
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Called with the new state after every change.
    pub fn subscribe(&mut self, listener: impl Fn(&FormState) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    fn notify(&self) {
        for listener in &self.listeners {
            listener(&self.state);
        }
    }

    pub fn on_load(&mut self) {
        self.state.signup_count = self.store.load().len();
        debug!("Loaded {} existing signups", self.state.signup_count);
        self.notify();
    }

    pub fn on_input(&mut self, value: String) {
        self.state.email_input = value;
        self.notify();
    }

    pub fn on_submit(&mut self, raw: &str, now_ms: f64) -> SubmitOutcome {
        if raw.trim().is_empty() {
            return SubmitOutcome::Ignored;
        }

        let email = match SignupEmail::parse(raw) {
            Ok(email) => email,
            Err(e) => {
                debug!("Rejected signup input: {}", e);
                self.state.warning = Some(e.to_string());
                self.notify();
                return SubmitOutcome::Invalid(e);
            }
        };

        let outcome = match self.store.append(email.as_ref()) {
            Ok(appended) if appended.inserted => {
                self.state.signup_count = appended.signups.len();
                self.state.warning = None;
                info!("New signup, count is now {}", self.state.signup_count);
                SubmitOutcome::Joined { count: self.state.signup_count }
            }
            Ok(_) => {
                self.state.warning = None;
                SubmitOutcome::AlreadyJoined { count: self.state.signup_count }
            }
            Err(StoreError::EmptyEmail) => return SubmitOutcome::Ignored,
            Err(e @ StoreError::PersistenceUnavailable(_)) => {
                warn!("Signup for {} was not saved: {}", email, e);
                self.state.warning = Some(
                    "You're on the list, but this browser couldn't save your signup. \
                     Try again later or from another browser."
                        .to_string(),
                );
                SubmitOutcome::NotPersisted
            }
        };

        self.state.email_input.clear();
        self.state.submitted = true;
        // A later submit pushes the deadline out; the older timer then finds it early.
        self.confirm_until = Some(now_ms + f64::from(config::CONFIRMATION_WINDOW_MS));
        self.notify();
        outcome
    }

    pub fn confirmation_deadline(&self) -> Option<f64> {
        self.confirm_until
    }

    /// Closes the confirmation window once `now_ms` reaches its deadline.
    /// Returns whether anything changed.
    pub fn on_confirmation_elapsed(&mut self, now_ms: f64) -> bool {
        match self.confirm_until {
            Some(deadline) if now_ms >= deadline => {
                self.confirm_until = None;
                self.state.submitted = false;
                self.notify();
                true
            }
            _ => false,
        }
    }

    pub fn is_confirming(&self, now_ms: f64) -> bool {
        self.state.submitted && self.confirm_until.map_or(false, |deadline| now_ms < deadline)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use claims::assert_matches;

    use super::{FormState, SignupController, SubmitOutcome};
    use crate::signup::store::{MemoryStore, SignupStore};

    fn controller_with(raw: Option<&str>) -> SignupController<MemoryStore> {
        let store = match raw {
            Some(raw) => MemoryStore::with_raw(raw),
            None => MemoryStore::new(),
        };
        let mut controller = SignupController::new(store);
        controller.on_load();
        controller
    }

    #[test]
    fn load_reflects_persisted_signups() {
        let controller = controller_with(Some(r#"["x@y.com","z@y.com"]"#));
        assert_eq!(controller.state().signup_count, 2);
    }

    #[test]
    fn load_recovers_from_corrupt_storage() {
        let controller = controller_with(Some("not json"));
        assert_eq!(controller.state().signup_count, 0);
    }

    #[test]
    fn blank_submissions_change_nothing() {
        let mut controller = controller_with(Some(r#"["x@y.com"]"#));
        controller.on_input("   ".to_string());
        let before = controller.state().clone();

        assert_eq!(controller.on_submit("", 0.0), SubmitOutcome::Ignored);
        assert_eq!(controller.on_submit("   ", 0.0), SubmitOutcome::Ignored);
        assert_eq!(controller.state(), &before);
        assert_eq!(controller.store.load(), vec!["x@y.com"]);
        assert!(!controller.is_confirming(0.0));
    }

    #[test]
    fn new_email_bumps_the_count() {
        let mut controller = controller_with(Some(r#"["x@y.com"]"#));
        let outcome = controller.on_submit("User@Example.COM", 0.0);

        assert_eq!(outcome, SubmitOutcome::Joined { count: 2 });
        assert_eq!(controller.state().signup_count, 2);
        assert_eq!(controller.store.load(), vec!["x@y.com", "user@example.com"]);
    }

    #[test]
    fn resubmitting_with_different_case_and_spacing_counts_once() {
        let mut controller = controller_with(None);
        controller.on_submit(" A@B.com ", 0.0);
        let outcome = controller.on_submit("a@b.com", 10.0);

        assert_eq!(outcome, SubmitOutcome::AlreadyJoined { count: 1 });
        assert_eq!(controller.state().signup_count, 1);
        assert_eq!(controller.store.load().len(), 1);
    }

    #[test]
    fn input_is_cleared_after_insert_and_after_duplicate() {
        let mut controller = controller_with(None);

        controller.on_input("fan@arena.io".to_string());
        controller.on_submit("fan@arena.io", 0.0);
        assert_eq!(controller.state().email_input, "");

        controller.on_input("FAN@arena.io".to_string());
        controller.on_submit("FAN@arena.io", 100.0);
        assert_eq!(controller.state().email_input, "");
    }

    #[test]
    fn confirmation_closes_exactly_three_seconds_after_submit() {
        let mut controller = controller_with(None);
        controller.on_submit("a@b.com", 1_000.0);

        assert!(controller.state().submitted);
        assert!(controller.is_confirming(1_000.0));
        assert!(!controller.on_confirmation_elapsed(3_999.0));
        assert!(controller.is_confirming(3_999.0));

        assert!(controller.on_confirmation_elapsed(4_000.0));
        assert!(!controller.state().submitted);
        assert!(!controller.is_confirming(4_000.0));
    }

    #[test]
    fn second_submit_restarts_the_confirmation_window() {
        let mut controller = controller_with(None);
        controller.on_submit("a@b.com", 0.0);
        controller.on_submit("c@d.com", 2_000.0);

        // the first submit's timer fires and finds the window extended
        assert!(!controller.on_confirmation_elapsed(3_000.0));
        assert!(controller.state().submitted);

        assert!(controller.on_confirmation_elapsed(5_000.0));
        assert!(!controller.state().submitted);
    }

    #[test]
    fn invalid_format_keeps_the_input_and_does_not_confirm() {
        let mut controller = controller_with(None);
        controller.on_input("not-an-email".to_string());

        let outcome = controller.on_submit("not-an-email", 0.0);

        assert_matches!(outcome, SubmitOutcome::Invalid(_));
        assert_eq!(controller.state().email_input, "not-an-email");
        assert!(controller.state().warning.is_some());
        assert!(!controller.state().submitted);
        assert!(controller.store.load().is_empty());
    }

    #[test]
    fn storage_failure_is_reported_without_blocking_the_user() {
        let mut controller = controller_with(Some(r#"["x@y.com"]"#));
        controller.store.fail_writes(true);

        let outcome = controller.on_submit("new@y.com", 0.0);

        assert_eq!(outcome, SubmitOutcome::NotPersisted);
        assert_eq!(controller.state().signup_count, 1);
        assert!(controller.state().warning.is_some());
        assert!(controller.state().submitted);
        assert_eq!(controller.state().email_input, "");
    }

    #[test]
    fn successful_submit_clears_an_earlier_warning() {
        let mut controller = controller_with(None);
        controller.store.fail_writes(true);
        controller.on_submit("a@b.com", 0.0);

        controller.store.fail_writes(false);
        controller.on_submit("a@b.com", 10.0);
        assert_eq!(controller.state().warning, None);
        assert_eq!(controller.state().signup_count, 1);
    }

    #[test]
    fn subscribers_see_every_state_change() {
        let seen: Rc<RefCell<Vec<FormState>>> = Rc::new(RefCell::new(Vec::new()));
        let mut controller = SignupController::new(MemoryStore::new());
        {
            let seen = seen.clone();
            controller.subscribe(move |state| seen.borrow_mut().push(state.clone()));
        }

        controller.on_load();
        controller.on_input("a@b.com".to_string());
        controller.on_submit("a@b.com", 0.0);
        controller.on_confirmation_elapsed(3_000.0);

        let seen = seen.borrow();
        assert_eq!(seen.len(), 4);
        assert_eq!(seen[1].email_input, "a@b.com");
        assert!(seen[2].submitted);
        assert_eq!(seen[2].signup_count, 1);
        assert!(!seen[3].submitted);
    }
}
