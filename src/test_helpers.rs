//! Mocks shared by flow tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::config::{ClientConfig, DemoMode};
use crate::flows::FlowContext;
use crate::net::api::AuthApi;
use crate::net::types::{ApiError, LoginRequest, LoginResponse, SignupRequest};
use crate::state::alert::{AlertLevel, AlertPresenter};
use crate::state::session::SessionStore;
use crate::util::storage::{KeyValueStore, MemoryStore, StorageError};

// =========================================================================
// MockApi
// =========================================================================

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    Login(LoginRequest),
    Signup(SignupRequest),
    Logout,
}

/// Scripted [`AuthApi`]. Each call pops the next queued reply; an empty
/// queue answers like an unreachable backend.
#[derive(Default)]
pub struct MockApi {
    login: RefCell<VecDeque<Result<LoginResponse, ApiError>>>,
    signup: RefCell<VecDeque<Result<(), ApiError>>>,
    logout: RefCell<VecDeque<Result<(), ApiError>>>,
    pub calls: RefCell<Vec<Call>>,
}

impl MockApi {
    pub fn login_replies(replies: Vec<Result<LoginResponse, ApiError>>) -> Self {
        Self { login: RefCell::new(replies.into()), ..Self::default() }
    }

    pub fn signup_replies(replies: Vec<Result<(), ApiError>>) -> Self {
        Self { signup: RefCell::new(replies.into()), ..Self::default() }
    }

    pub fn logout_replies(replies: Vec<Result<(), ApiError>>) -> Self {
        Self { logout: RefCell::new(replies.into()), ..Self::default() }
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

fn unreachable_backend() -> ApiError {
    ApiError::Transport("TypeError: Failed to fetch".to_owned())
}

#[async_trait::async_trait(?Send)]
impl AuthApi for MockApi {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.calls.borrow_mut().push(Call::Login(request.clone()));
        self.login.borrow_mut().pop_front().unwrap_or_else(|| Err(unreachable_backend()))
    }

    async fn signup(&self, request: &SignupRequest) -> Result<(), ApiError> {
        self.calls.borrow_mut().push(Call::Signup(request.clone()));
        self.signup.borrow_mut().pop_front().unwrap_or_else(|| Err(unreachable_backend()))
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.calls.borrow_mut().push(Call::Logout);
        self.logout.borrow_mut().pop_front().unwrap_or_else(|| Err(unreachable_backend()))
    }
}

// =========================================================================
// RecordingAlerts
// =========================================================================

#[derive(Default)]
pub struct RecordingAlerts {
    pub shown: RefCell<Vec<(String, AlertLevel)>>,
}

impl RecordingAlerts {
    pub fn last(&self) -> Option<(String, AlertLevel)> {
        self.shown.borrow().last().cloned()
    }
}

impl AlertPresenter for RecordingAlerts {
    fn show(&self, message: &str, level: AlertLevel) {
        self.shown.borrow_mut().push((message.to_owned(), level));
    }
}

// =========================================================================
// Stores
// =========================================================================

/// Store whose writes always fail, like a full or disabled `localStorage`.
#[derive(Default)]
pub struct FullStore;

impl KeyValueStore for FullStore {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Write("QuotaExceededError".to_owned()))
    }

    fn delete(&self, _key: &str) {}
}

// =========================================================================
// Harness
// =========================================================================

pub struct Harness {
    pub ctx: FlowContext,
    pub api: Rc<MockApi>,
    pub alerts: Rc<RecordingAlerts>,
    pub store: Rc<MemoryStore>,
}

impl Harness {
    pub fn new(api: MockApi) -> Self {
        Self::with_demo_mode(api, DemoMode::Enabled)
    }

    pub fn with_demo_mode(api: MockApi, demo_mode: DemoMode) -> Self {
        let api = Rc::new(api);
        let alerts = Rc::new(RecordingAlerts::default());
        let store = Rc::new(MemoryStore::new());
        let config = ClientConfig { demo_mode, ..ClientConfig::default() };
        let sessions = SessionStore::new(store.clone(), config.storage_key.clone());
        let ctx = FlowContext::new(api.clone(), sessions, alerts.clone(), Rc::new(config));
        Self { ctx, api, alerts, store }
    }

    /// Context identical to `self.ctx` but persisting into `backend`.
    pub fn with_store(&self, backend: Rc<dyn KeyValueStore>) -> FlowContext {
        FlowContext {
            sessions: SessionStore::new(backend, self.ctx.config.storage_key.clone()),
            ..self.ctx.clone()
        }
    }
}
