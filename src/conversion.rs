//! Conversion flow: what a settled form snapshot, a finished request, a
//! catalog fetch or a reset does to the displayed result.
//!
//! The UI owns the timers and the network futures; everything that decides
//! how state changes lives here so it can be exercised without a browser.

use crate::api::{ApiError, ConversionRequest, ConversionResult, CATALOG_LOAD_ERROR};
use crate::debounce::RequestSequence;
use crate::form::{ConversionPlan, FormAction, FormState};
use std::rc::Rc;
use tracing::{debug, info, warn};
use yew::Reducible;

/// Result, error text and loading flag shown under the form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConversionView {
    pub result: Option<ConversionResult>,
    pub error: Option<String>,
    pub loading: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewAction {
    /// Inputs became incomplete.
    Clear,
    /// A request went out.
    Start,
    Succeeded(ConversionResult),
    Failed(String),
    CatalogFailed,
    /// A game selection changed; stale error text goes away.
    DismissError,
    Reset,
}

impl ConversionView {
    pub fn apply(&self, action: ViewAction) -> Self {
        match action {
            ViewAction::Clear => Self {
                result: None,
                loading: false,
                error: self.error.clone(),
            },
            ViewAction::Start => Self {
                result: self.result,
                error: None,
                loading: true,
            },
            ViewAction::Succeeded(result) => Self {
                result: Some(result),
                error: self.error.clone(),
                loading: false,
            },
            ViewAction::Failed(message) => Self {
                result: None,
                error: Some(message),
                loading: false,
            },
            ViewAction::CatalogFailed => Self {
                error: Some(CATALOG_LOAD_ERROR.to_string()),
                ..self.clone()
            },
            ViewAction::DismissError => Self {
                error: None,
                ..self.clone()
            },
            ViewAction::Reset => Self::default(),
        }
    }
}

impl Reducible for ConversionView {
    type Action = ViewAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

/// What to do with a settled snapshot.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    Clear,
    Hold,
    Send(u64, ConversionRequest),
}

impl Step {
    /// Immediate view update for this step, if any.
    pub fn view_action(&self) -> Option<ViewAction> {
        match self {
            Step::Clear => Some(ViewAction::Clear),
            Step::Hold => None,
            Step::Send(..) => Some(ViewAction::Start),
        }
    }
}

/// Tracks which request is current so late responses can be dropped.
#[derive(Debug, Default)]
pub struct ConversionFlow {
    sequence: RequestSequence,
}

impl ConversionFlow {
    /// Run the gates over `form`. Clearing also invalidates whatever is in
    /// flight, since its response would otherwise repaint a cleared panel.
    pub fn settle(&mut self, form: &FormState) -> Step {
        match form.plan_conversion() {
            ConversionPlan::Clear => {
                self.sequence.invalidate();
                Step::Clear
            }
            ConversionPlan::Hold => {
                debug!("Inputs out of range, keeping current result");
                Step::Hold
            }
            ConversionPlan::Request(request) => Step::Send(self.sequence.issue(), request),
        }
    }

    /// Forget any request in flight.
    pub fn reset(&mut self) {
        self.sequence.invalidate();
    }

    /// Map a finished request to a view update, or `None` when a newer
    /// request (or a clear/reset) has superseded it.
    pub fn finish(
        &self,
        request_id: u64,
        outcome: Result<ConversionResult, ApiError>,
    ) -> Option<ViewAction> {
        if !self.sequence.is_current(request_id) {
            debug!("Discarding stale conversion response #{}", request_id);
            return None;
        }
        Some(match outcome {
            Ok(converted) => {
                info!(
                    "Converted: {} (cm/360 {})",
                    converted.target_sensitivity, converted.cm_360
                );
                ViewAction::Succeeded(converted)
            }
            Err(err) => {
                warn!("Conversion failed: {}", err);
                ViewAction::Failed(err.user_message())
            }
        })
    }
}

/// Outcome of the one-shot catalog fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogUpdate {
    Loaded(Rc<Vec<String>>),
    Failed,
}

impl CatalogUpdate {
    pub fn from_fetch(outcome: Result<Vec<String>, ApiError>) -> Self {
        match outcome {
            Ok(games) => {
                info!("Loaded {} games", games.len());
                CatalogUpdate::Loaded(Rc::new(games))
            }
            Err(err) => {
                warn!("Failed to load game catalog: {}", err);
                CatalogUpdate::Failed
            }
        }
    }

    pub fn games(&self) -> Option<Rc<Vec<String>>> {
        match self {
            CatalogUpdate::Loaded(games) => Some(games.clone()),
            CatalogUpdate::Failed => None,
        }
    }

    pub fn form_action(&self) -> Option<FormAction> {
        self.games().map(FormAction::CatalogLoaded)
    }

    pub fn view_action(&self) -> Option<ViewAction> {
        match self {
            CatalogUpdate::Loaded(_) => None,
            CatalogUpdate::Failed => Some(ViewAction::CatalogFailed),
        }
    }
}
