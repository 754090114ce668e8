//! Per-feature request lifecycle.

/// Lifecycle of one asynchronous action. A feature is never loading and
/// failed at the same time.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestState<T> {
    #[default]
    Idle,
    Loading,
    Success(T),
    Error(String),
}

/// Lifecycle of an action whose result lives elsewhere in the view, such as
/// a list that must stay visible when a reload fails.
pub type ActionState = RequestState<()>;

/// Text of a submit control when idle and while its request is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitLabels {
    pub idle: &'static str,
    pub busy: &'static str,
}

impl<T> RequestState<T> {
    /// Enters `Loading`. Returns `false` when a request is already in flight,
    /// in which case the submission must be dropped.
    pub fn begin(&mut self) -> bool {
        if self.is_loading() {
            return false;
        }
        *self = RequestState::Loading;
        true
    }

    pub fn succeed(&mut self, value: T) {
        *self = RequestState::Success(value);
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        *self = RequestState::Error(message.into());
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            RequestState::Success(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            RequestState::Error(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifecycle() {
        let mut state = RequestState::<u32>::default();
        assert_eq!(state, RequestState::Idle);
        assert!(state.begin());
        assert!(state.is_loading());
        assert!(!state.begin());

        state.succeed(7);
        assert_eq!(state.data(), Some(&7));
        assert!(state.error().is_none());

        assert!(state.begin());
        state.fail("Failed");
        assert_eq!(state.error(), Some("Failed"));
        assert!(state.data().is_none());
        assert!(!state.is_loading());
    }
}
