use common::flow::FlowEvent;
use common::model::inspection::InspectionRecord;

pub enum Msg {
    /// A user action forwarded to the state machine.
    Flow(FlowEvent),
    /// Outcome of `POST /api/SubmitInspection`.
    Submitted(Result<InspectionRecord, String>),
    /// Starts a fresh walkthrough after a successful one.
    StartOver,
}
