use crate::helpers::current_walkthrough_number;
use common::flow::InspectionFlow;

pub struct InspectionFlowComponent {
    pub flow: InspectionFlow,
    /// Message of the last rejected event, cleared by the next accepted one.
    pub error: Option<String>,
    pub user_email: Option<String>,
}

impl InspectionFlowComponent {
    pub fn new(user_email: Option<String>) -> Self {
        Self {
            flow: InspectionFlow::new(user_email.clone(), Some(current_walkthrough_number())),
            error: None,
            user_email,
        }
    }
}
