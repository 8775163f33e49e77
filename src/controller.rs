use crate::error::Error;
use crate::github::GitHubApi;
use crate::models::{ProfileReport, RequestOutcome};
use crate::profile::ProfileFetcher;
use crate::view::{ProfileView, RenderTarget};

/// Discriminant of the controller's current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    Idle,
    Loading,
    Displayed,
    Errored,
}

/// Submit-driven state machine: idle → loading → displayed | errored.
///
/// Reactive with no terminal state; it lives for the whole session. Every
/// completed request replaces the previous outcome wholesale, and a valid
/// submission always transitions out of `Displayed` or `Errored`.
pub struct RequestController<A: GitHubApi, R: RenderTarget> {
    fetcher: ProfileFetcher<A>,
    render: R,
    outcome: Option<RequestOutcome>,
}

impl<A: GitHubApi, R: RenderTarget> RequestController<A, R> {
    pub fn new(fetcher: ProfileFetcher<A>, render: R) -> Self {
        Self {
            fetcher,
            render,
            outcome: None,
        }
    }

    pub fn state(&self) -> ControllerState {
        match self.outcome {
            None => ControllerState::Idle,
            Some(RequestOutcome::Loading) => ControllerState::Loading,
            Some(RequestOutcome::Success(_)) => ControllerState::Displayed,
            Some(RequestOutcome::Failure(_)) => ControllerState::Errored,
        }
    }

    /// The currently displayed report, if any.
    pub fn report(&self) -> Option<&ProfileReport> {
        match &self.outcome {
            Some(RequestOutcome::Success(report)) => Some(report),
            _ => None,
        }
    }

    /// The failure behind the error view. The user-visible message does not
    /// discriminate kinds; this does, for logs and tests.
    pub fn last_error(&self) -> Option<&Error> {
        match &self.outcome {
            Some(RequestOutcome::Failure(err)) => Some(err),
            _ => None,
        }
    }

    /// Handle a submit trigger with the raw input field contents.
    pub async fn submit(&mut self, input: &str) {
        let username = input.trim().to_string();
        if username.is_empty() {
            // Validation prompt, not the error view; no state transition.
            self.render.prompt_blank_username();
            return;
        }

        if self.state() == ControllerState::Loading {
            tracing::debug!("Request already in flight, ignoring submit");
            return;
        }

        self.outcome = Some(RequestOutcome::Loading);
        self.render.set_loading(true);

        let result = self.fetcher.fetch(&username).await;
        self.render.set_loading(false);

        self.outcome = Some(match result {
            Ok(report) => {
                self.render.show_profile(&ProfileView::from_report(&report));
                RequestOutcome::Success(report)
            }
            Err(err) => {
                tracing::warn!("Profile fetch failed for {}: {}", username, err);
                self.render.show_error();
                RequestOutcome::Failure(err)
            }
        });
    }
}
