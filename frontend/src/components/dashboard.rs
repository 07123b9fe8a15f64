//! Landing page: status counts, urgent walkthroughs and the most recent ones.

use crate::api::fetch_inspections;
use crate::helpers::{format_timestamp, show_toast};
use common::model::inspection::InspectionRecord;
use common::model::status::StatusCategory;
use common::views::dashboard::DashboardSummary;
use gloo_console::error;
use yew::platform::spawn_local;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DashboardProps {
    pub on_open_report: Callback<String>,
    pub on_start: Callback<()>,
}

pub enum Msg {
    Loaded(Result<Vec<InspectionRecord>, String>),
}

pub struct DashboardComponent {
    records: Option<Vec<InspectionRecord>>,
    error: Option<String>,
}

impl Component for DashboardComponent {
    type Message = Msg;
    type Properties = DashboardProps;

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        spawn_local(async move {
            link.send_message(Msg::Loaded(fetch_inspections().await));
        });
        Self {
            records: None,
            error: None,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(Ok(records)) => {
                self.records = Some(records);
                self.error = None;
            }
            Msg::Loaded(Err(e)) => {
                error!(format!("loading dashboard failed: {}", e));
                show_toast("Could not load inspections.");
                self.error = Some(e);
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let on_start = props.on_start.reform(|_: MouseEvent| ());

        let Some(records) = &self.records else {
            return match &self.error {
                Some(e) => html! { <div class="card error-text">{ e }</div> },
                None => html! { <div class="card">{"Loading inspections..."}</div> },
            };
        };
        let summary = DashboardSummary::from_records(records);

        html! {
            <div class="dashboard">
                <div class="card">
                    <h2>{"Overview"}</h2>
                    <p>{ format!("{} inspections on record", summary.total) }</p>
                    <button onclick={on_start}>{"Start new inspection"}</button>
                </div>
                <div class="stat-grid">
                    { for StatusCategory::KNOWN.iter().map(|category| html! {
                        <div class="card">
                            <div class={category.css_class()}>{ category.label() }</div>
                            <h2>{ summary.counts.get(*category) }</h2>
                        </div>
                    }) }
                </div>
                <div class="card">
                    <h3>{ format!("Urgent ({})", summary.urgent.len()) }</h3>
                    { record_table(&summary.urgent, &props.on_open_report) }
                </div>
                <div class="card">
                    <h3>{"Recent inspections"}</h3>
                    { record_table(&summary.recent, &props.on_open_report) }
                </div>
            </div>
        }
    }
}

fn record_table(records: &[&InspectionRecord], on_open: &Callback<String>) -> Html {
    if records.is_empty() {
        return html! { <p>{"None"}</p> };
    }
    html! {
        <table>
            <tbody>
                { for records.iter().map(|record| {
                    let id = record.id.clone();
                    let on_open = on_open.clone();
                    let category = StatusCategory::from_status(&record.report_data.status);
                    html! {
                        <tr class="clickable" onclick={Callback::from(move |_| on_open.emit(id.clone()))}>
                            <td>{ format_timestamp(&record.timestamp) }</td>
                            <td>{ record.report_data.location.clone().unwrap_or_default() }</td>
                            <td>{ record.report_data.datahall.clone() }</td>
                            <td class={category.css_class()}>{ record.report_data.status.clone() }</td>
                        </tr>
                    }
                }) }
            </tbody>
        </table>
    }
}
