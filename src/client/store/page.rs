//! Per-page load state machine.
//!
//! Every page tracks its data through one explicit state value instead of
//! separate loading/error flags, so invalid combinations (loading and failed
//! at once) cannot be represented. All pages funnel their fetch outcomes
//! through the single [`PageState::advance`] transition.

use crate::client::util::fetch::FetchError;

/// Why a page has no data to show.
#[derive(Clone, Debug, PartialEq)]
pub enum PageError {
    /// The requested entity does not exist in the remote catalog. Terminal
    /// for this page view; a retry would fetch the same absence.
    NotFound { entity: &'static str },
    /// The fetch itself failed (network, non-2xx, malformed body). The user
    /// can retry.
    Failed(String),
}

impl PageError {
    pub fn message(&self) -> String {
        match self {
            Self::NotFound { entity } => format!("{entity} not found"),
            Self::Failed(message) => message.clone(),
        }
    }

    /// Whether a user-triggered retry makes sense for this error.
    pub fn retryable(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

impl From<&FetchError> for PageError {
    fn from(error: &FetchError) -> Self {
        match error {
            FetchError::NotFound { entity } => Self::NotFound { entity: *entity },
            other => Self::Failed(other.to_string()),
        }
    }
}

/// A fetch lifecycle event observed by a page.
#[derive(Clone, Debug, PartialEq)]
pub enum PageEvent<T> {
    Started,
    Loaded(T),
    Failed(PageError),
}

/// Load lifecycle of one page's data.
#[derive(Clone, Debug, PartialEq)]
pub enum PageState<T> {
    Idle,
    Loading,
    Success(T),
    Error(PageError),
}

impl<T> PageState<T> {
    /// The single transition function: applies one fetch event to the
    /// current state. Starting a (re)fetch always moves to `Loading`,
    /// discarding any previous success or error.
    pub fn advance(self, event: PageEvent<T>) -> Self {
        match event {
            PageEvent::Started => Self::Loading,
            PageEvent::Loaded(data) => Self::Success(data),
            PageEvent::Failed(error) => Self::Error(error),
        }
    }
}

impl<T: Clone> PageState<T> {
    /// Projects the current value of a fetch future onto the state machine:
    /// a pending future is a started fetch, a settled one is loaded or
    /// failed.
    pub fn from_result(value: Option<&Result<T, FetchError>>) -> Self {
        match value {
            None => Self::Idle.advance(PageEvent::Started),
            Some(Ok(data)) => Self::Loading.advance(PageEvent::Loaded(data.clone())),
            Some(Err(error)) => Self::Loading.advance(PageEvent::Failed(error.into())),
        }
    }
}
