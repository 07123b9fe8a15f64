use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct FlowProps {
    /// Submitter recorded on the walkthrough; the backend stores `unknown`
    /// when absent.
    #[prop_or_default]
    pub user_email: Option<String>,
    /// Opens the report page of a stored walkthrough.
    pub on_open_report: Callback<String>,
    /// Leaves the wizard.
    pub on_finish: Callback<()>,
}
