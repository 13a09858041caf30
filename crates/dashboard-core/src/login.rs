//! Login Controller
//!
//! Password form state and the submit flow behind the login view.

use std::cell::RefCell;

use log::{error, warn};

use crate::api::DashboardApi;
use crate::error::LoginError;
use crate::notify::Listener;
use crate::session::{SessionGate, SessionState};
use crate::storage::FlagStore;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub password: String,
    pub error: Option<String>,
    pub submitting: bool,
}

impl LoginForm {
    /// Submit stays disabled for an empty field or while a request is out
    pub fn can_submit(&self) -> bool {
        !self.submitting && !self.password.is_empty()
    }

    pub fn button_label(&self) -> &'static str {
        if self.submitting {
            "Authenticating..."
        } else {
            "Access Dashboard"
        }
    }
}

pub struct LoginController<A, S> {
    api: A,
    session: SessionGate<S>,
    form: RefCell<LoginForm>,
    listener: Listener<LoginForm>,
}

impl<A: DashboardApi, S: FlagStore> LoginController<A, S> {
    pub fn new(api: A, session: SessionGate<S>) -> Self {
        Self {
            api,
            session,
            form: RefCell::new(LoginForm::default()),
            listener: Listener::default(),
        }
    }

    pub fn form(&self) -> LoginForm {
        self.form.borrow().clone()
    }

    pub fn session(&self) -> &SessionGate<S> {
        &self.session
    }

    /// Called with the new form after every change
    pub fn subscribe(&self, callback: impl Fn(&LoginForm) + 'static) {
        self.listener.set(callback);
    }

    pub fn set_password(&self, password: String) {
        self.form.borrow_mut().password = password;
        self.publish();
    }

    /// Send the password; on success the session flag is persisted.
    ///
    /// An empty field or a request already in flight returns immediately
    /// without contacting the backend.
    pub async fn submit(&self) -> Result<SessionState, LoginError> {
        let password = {
            let mut form = self.form.borrow_mut();
            if form.submitting {
                return Err(LoginError::InFlight);
            }
            if form.password.is_empty() {
                return Err(LoginError::EmptyPassword);
            }
            form.submitting = true;
            form.error = None;
            form.password.clone()
        };
        self.publish();

        let outcome = match self.api.login(&password).await {
            Ok(ack) if ack.success => Ok(self.session.login().await),
            Ok(ack) => {
                warn!("[LOGIN] rejected: {}", ack.error.as_deref().unwrap_or("invalid password"));
                Err(LoginError::InvalidPassword)
            }
            Err(e) => {
                error!("[LOGIN] request failed: {}", e);
                Err(LoginError::Transport(e))
            }
        };

        {
            let mut form = self.form.borrow_mut();
            form.submitting = false;
            if let Err(e) = &outcome {
                form.error = e.user_message().map(str::to_string);
                if *e == LoginError::InvalidPassword {
                    form.password.clear();
                }
            }
        }
        self.publish();

        outcome
    }

    fn publish(&self) {
        let form = self.form();
        self.listener.notify(&form);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ApiError, CONNECT_FAILED_MESSAGE, INVALID_PASSWORD_MESSAGE};
    use crate::models::Ack;
    use crate::storage::MemoryFlagStore;
    use crate::testing::{settle, MockApi};
    use std::rc::Rc;
    use std::time::Duration;

    const KEY: &str = "dashboard_auth";

    fn controller(api: &Rc<MockApi>) -> LoginController<Rc<MockApi>, MemoryFlagStore> {
        LoginController::new(api.clone(), SessionGate::new(MemoryFlagStore::new(), KEY))
    }

    #[tokio::test]
    async fn test_empty_password_never_calls_backend() {
        let api = Rc::new(MockApi::healthy());
        let login = controller(&api);

        assert!(!login.form().can_submit());
        assert_eq!(login.submit().await, Err(LoginError::EmptyPassword));
        assert_eq!(api.login.calls(), 0);
        assert_eq!(login.form().error, None);
    }

    #[tokio::test]
    async fn test_successful_login_persists_flag() {
        let api = Rc::new(MockApi::healthy());
        let login = controller(&api);

        login.set_password("s3cret".to_string());
        assert_eq!(login.submit().await, Ok(SessionState::Authenticated));

        assert_eq!(*api.passwords.borrow(), vec!["s3cret".to_string()]);
        assert_eq!(login.session().store().get(KEY).as_deref(), Some("true"));
        assert!(!login.form().submitting);
    }

    #[tokio::test]
    async fn test_rejected_password_clears_field() {
        let api = Rc::new(MockApi::healthy());
        api.login.set(Ok(Ack::rejected()));
        let login = controller(&api);

        login.set_password("wrong".to_string());
        assert_eq!(login.submit().await, Err(LoginError::InvalidPassword));

        let form = login.form();
        assert_eq!(form.password, "");
        assert_eq!(form.error.as_deref(), Some(INVALID_PASSWORD_MESSAGE));
        assert!(!form.submitting);
        assert_eq!(login.session().store().get(KEY), None);
    }

    #[tokio::test]
    async fn test_transport_failure_keeps_password() {
        let api = Rc::new(MockApi::healthy());
        api.login.set(Err(ApiError::Network("connection refused".into())));
        let login = controller(&api);

        login.set_password("s3cret".to_string());
        let result = login.submit().await;
        assert!(matches!(result, Err(LoginError::Transport(_))));

        let form = login.form();
        assert_eq!(form.password, "s3cret");
        assert_eq!(form.error.as_deref(), Some(CONNECT_FAILED_MESSAGE));
        assert!(form.can_submit());
    }

    #[tokio::test(start_paused = true)]
    async fn test_single_submission_in_flight() {
        let api = Rc::new(MockApi::healthy());
        api.login.push(Duration::from_secs(1), Ok(Ack::accepted()));
        let login = controller(&api);
        let seen = Rc::new(RefCell::new(Vec::new()));
        {
            let seen = seen.clone();
            login.subscribe(move |form| seen.borrow_mut().push(form.submitting));
        }

        login.set_password("s3cret".to_string());
        let (first, second) = tokio::join!(login.submit(), async {
            settle().await;
            assert!(login.form().submitting);
            assert!(!login.form().can_submit());
            assert_eq!(login.form().button_label(), "Authenticating...");
            login.submit().await
        });

        assert_eq!(first, Ok(SessionState::Authenticated));
        assert_eq!(second, Err(LoginError::InFlight));
        assert_eq!(api.login.calls(), 1);
        assert_eq!(*seen.borrow(), vec![false, true, false]);
    }
}
