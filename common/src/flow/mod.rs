//! The inspection flow: a user-driven state machine that accumulates one
//! walkthrough and turns it into a `SubmitInspectionRequest`.
//!
//! ```text
//! ChooseLocation -> ChooseDataHall -> IssueFlag -> RackDetails* -> Submitting -> Confirmation
//! ```
//!
//! Nothing here is persisted: abandoning the flow (or `Reset`) drops every
//! entered value. Events that do not fit the current step are rejected with
//! a `FlowError` and leave the state untouched.

mod rack_form;

pub use rack_form::{PduForm, PsuForm, RackForm, RackFormError, RdhxForm};

use crate::model::inspection::ReportData;
use crate::model::site::find_site;
use crate::requests::SubmitInspectionRequest;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowStep {
    ChooseLocation,
    ChooseDataHall,
    IssueFlag,
    RackDetails,
    Submitting,
    Confirmation(SubmissionOutcome),
}

impl FlowStep {
    pub fn name(&self) -> &'static str {
        match self {
            FlowStep::ChooseLocation => "choose-location",
            FlowStep::ChooseDataHall => "choose-data-hall",
            FlowStep::IssueFlag => "issue-flag",
            FlowStep::RackDetails => "rack-details",
            FlowStep::Submitting => "submitting",
            FlowStep::Confirmation(_) => "confirmation",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Success { inspection_id: String },
    Failure { error: String },
}

/// Hall-wide readings entered alongside the issue flag.
#[derive(Debug, Clone, PartialEq)]
pub struct HallConditions {
    pub status: String,
    pub temperature_reading: String,
    pub humidity_reading: String,
    pub comments: String,
    pub is_urgent: bool,
    pub security_passed: bool,
    pub cooling_system_check: bool,
}

impl Default for HallConditions {
    fn default() -> Self {
        Self {
            status: "Operational".to_string(),
            temperature_reading: String::new(),
            humidity_reading: String::new(),
            comments: String::new(),
            is_urgent: false,
            security_passed: true,
            cooling_system_check: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FlowEvent {
    SelectLocation(String),
    SelectDataHall(String),
    UpdateConditions(HallConditions),
    FlagIssues(bool),
    AddRack,
    UpdateRack(usize, RackForm),
    RemoveRack(usize),
    Back,
    Submit,
    SubmitSucceeded(String),
    SubmitFailed(String),
    Retry,
    Reset,
}

impl FlowEvent {
    pub fn name(&self) -> &'static str {
        match self {
            FlowEvent::SelectLocation(_) => "select-location",
            FlowEvent::SelectDataHall(_) => "select-data-hall",
            FlowEvent::UpdateConditions(_) => "update-conditions",
            FlowEvent::FlagIssues(_) => "flag-issues",
            FlowEvent::AddRack => "add-rack",
            FlowEvent::UpdateRack(..) => "update-rack",
            FlowEvent::RemoveRack(_) => "remove-rack",
            FlowEvent::Back => "back",
            FlowEvent::Submit => "submit",
            FlowEvent::SubmitSucceeded(_) => "submit-succeeded",
            FlowEvent::SubmitFailed(_) => "submit-failed",
            FlowEvent::Retry => "retry",
            FlowEvent::Reset => "reset",
        }
    }
}

/// What the caller has to do after an accepted event.
#[derive(Debug, Clone, PartialEq)]
pub enum FlowEffect {
    None,
    /// Send this request to `POST /api/SubmitInspection` and report back
    /// with `SubmitSucceeded` or `SubmitFailed`.
    Send(SubmitInspectionRequest),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlowError {
    #[error("{event} is not allowed during {step}")]
    InvalidTransition {
        step: &'static str,
        event: &'static str,
    },
    #[error("unknown location {0:?}")]
    UnknownLocation(String),
    #[error("data hall {hall:?} is not part of {location:?}")]
    UnknownDataHall { location: String, hall: String },
    #[error("no rack at position {0}")]
    NoSuchRack(usize),
    #[error("answer whether issues were found before submitting")]
    IssuesUndecided,
    #[error("data hall status is required")]
    MissingStatus,
    #[error("rack {}: {source}", .index + 1)]
    Rack {
        index: usize,
        #[source]
        source: RackFormError,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct InspectionFlow {
    step: FlowStep,
    user_email: Option<String>,
    walkthrough_number: Option<u32>,
    location: Option<String>,
    data_hall: Option<String>,
    has_issues: Option<bool>,
    conditions: HallConditions,
    racks: Vec<RackForm>,
}

impl InspectionFlow {
    pub fn new(user_email: Option<String>, walkthrough_number: Option<u32>) -> Self {
        Self {
            step: FlowStep::ChooseLocation,
            user_email,
            walkthrough_number,
            location: None,
            data_hall: None,
            has_issues: None,
            conditions: HallConditions::default(),
            racks: Vec::new(),
        }
    }

    pub fn step(&self) -> &FlowStep {
        &self.step
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn data_hall(&self) -> Option<&str> {
        self.data_hall.as_deref()
    }

    pub fn has_issues(&self) -> Option<bool> {
        self.has_issues
    }

    pub fn conditions(&self) -> &HallConditions {
        &self.conditions
    }

    pub fn racks(&self) -> &[RackForm] {
        &self.racks
    }

    pub fn user_email(&self) -> Option<&str> {
        self.user_email.as_deref()
    }

    /// Replaces the submitter at any step; blank input clears it.
    pub fn set_user_email(&mut self, email: Option<String>) {
        self.user_email = email
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty());
    }

    pub fn walkthrough_number(&self) -> Option<u32> {
        self.walkthrough_number
    }

    /// Applies one user event.
    pub fn apply(&mut self, event: FlowEvent) -> Result<FlowEffect, FlowError> {
        let rejected = FlowError::InvalidTransition {
            step: self.step.name(),
            event: event.name(),
        };

        match (self.step.clone(), event) {
            (_, FlowEvent::Reset) => self.restart(),

            (FlowStep::ChooseLocation, FlowEvent::SelectLocation(name)) => {
                if find_site(&name).is_none() {
                    return Err(FlowError::UnknownLocation(name));
                }
                self.location = Some(name);
                self.data_hall = None;
                self.step = FlowStep::ChooseDataHall;
            }

            (FlowStep::ChooseDataHall, FlowEvent::SelectDataHall(hall)) => {
                let location = self.location.clone().unwrap_or_default();
                match find_site(&location) {
                    Some(site) if site.has_data_hall(&hall) => {}
                    _ => return Err(FlowError::UnknownDataHall { location, hall }),
                }
                self.data_hall = Some(hall);
                self.step = FlowStep::IssueFlag;
            }

            (FlowStep::IssueFlag | FlowStep::RackDetails, FlowEvent::UpdateConditions(c)) => {
                self.conditions = c;
            }

            (FlowStep::IssueFlag, FlowEvent::FlagIssues(true)) => {
                self.has_issues = Some(true);
                if self.racks.is_empty() {
                    self.racks.push(RackForm::default());
                }
                self.step = FlowStep::RackDetails;
            }
            (FlowStep::IssueFlag, FlowEvent::FlagIssues(false)) => {
                self.has_issues = Some(false);
                self.racks.clear();
            }

            (FlowStep::RackDetails, FlowEvent::AddRack) => self.racks.push(RackForm::default()),
            (FlowStep::RackDetails, FlowEvent::UpdateRack(index, form)) => {
                let slot = self.racks.get_mut(index).ok_or(FlowError::NoSuchRack(index))?;
                *slot = form;
            }
            (FlowStep::RackDetails, FlowEvent::RemoveRack(index)) => {
                if index >= self.racks.len() {
                    return Err(FlowError::NoSuchRack(index));
                }
                self.racks.remove(index);
                if self.racks.is_empty() {
                    self.has_issues = None;
                    self.step = FlowStep::IssueFlag;
                }
            }

            (FlowStep::ChooseDataHall, FlowEvent::Back) => {
                self.location = None;
                self.step = FlowStep::ChooseLocation;
            }
            (FlowStep::IssueFlag, FlowEvent::Back) => {
                self.data_hall = None;
                self.step = FlowStep::ChooseDataHall;
            }
            (FlowStep::RackDetails, FlowEvent::Back) => {
                self.has_issues = None;
                self.step = FlowStep::IssueFlag;
            }

            (FlowStep::IssueFlag | FlowStep::RackDetails, FlowEvent::Submit) => {
                let request = self.submission()?;
                self.step = FlowStep::Submitting;
                return Ok(FlowEffect::Send(request));
            }

            (FlowStep::Submitting, FlowEvent::SubmitSucceeded(inspection_id)) => {
                self.step = FlowStep::Confirmation(SubmissionOutcome::Success { inspection_id });
            }
            (FlowStep::Submitting, FlowEvent::SubmitFailed(error)) => {
                self.step = FlowStep::Confirmation(SubmissionOutcome::Failure { error });
            }

            (FlowStep::Confirmation(SubmissionOutcome::Failure { .. }), FlowEvent::Retry) => {
                self.restart()
            }

            _ => return Err(rejected),
        }
        Ok(FlowEffect::None)
    }

    /// Builds the request the current answers would submit.
    pub fn submission(&self) -> Result<SubmitInspectionRequest, FlowError> {
        let has_issues = self.has_issues.ok_or(FlowError::IssuesUndecided)?;
        let status = self.conditions.status.trim();
        if status.is_empty() {
            return Err(FlowError::MissingStatus);
        }

        let racks = if has_issues {
            self.racks
                .iter()
                .enumerate()
                .map(|(index, rack)| {
                    rack.finalize()
                        .map_err(|source| FlowError::Rack { index, source })
                })
                .collect::<Result<Vec<_>, _>>()?
        } else {
            Vec::new()
        };

        let c = &self.conditions;
        Ok(SubmitInspectionRequest {
            user_email: self.user_email.clone(),
            report: ReportData {
                location: self.location.clone(),
                datahall: self.data_hall.clone().unwrap_or_default(),
                status: status.to_string(),
                temperature_reading: non_empty(&c.temperature_reading),
                humidity_reading: non_empty(&c.humidity_reading),
                comments: non_empty(&c.comments),
                is_urgent: c.is_urgent,
                security_passed: Some(c.security_passed),
                cooling_system_check: Some(c.cooling_system_check),
                has_issues,
                racks,
                walkthrough_number: self.walkthrough_number,
                extra: Default::default(),
            },
        })
    }

    fn restart(&mut self) {
        *self = Self::new(self.user_email.take(), self.walkthrough_number);
    }
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}
