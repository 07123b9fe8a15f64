//! Report page for one walkthrough: readings with their levels, rack
//! findings, the mock spreadsheet link and a JSON download.

use crate::api::generate_report;
use crate::helpers::{download_json, format_timestamp, show_toast};
use common::requests::GenerateReportResponse;
use common::views::readings::{humidity_level, temperature_level, ReadingLevel};
use gloo_console::error;
use yew::platform::spawn_local;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ReportProps {
    pub id: String,
    pub on_back: Callback<()>,
}

pub enum Msg {
    Loaded(Result<GenerateReportResponse, String>),
    Download,
}

pub struct ReportComponent {
    report: Option<GenerateReportResponse>,
    error: Option<String>,
}

impl Component for ReportComponent {
    type Message = Msg;
    type Properties = ReportProps;

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        let id = ctx.props().id.clone();
        spawn_local(async move {
            link.send_message(Msg::Loaded(generate_report(&id).await));
        });
        Self {
            report: None,
            error: None,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(Ok(report)) => {
                self.report = Some(report);
                true
            }
            Msg::Loaded(Err(e)) => {
                error!(format!("loading report failed: {}", e));
                self.error = Some(e);
                true
            }
            Msg::Download => {
                if let Some(report) = &self.report {
                    let filename = format!("inspection-{}.json", report.data.id);
                    if let Err(e) = download_json(&filename, &report.data) {
                        error!(format!("download failed: {}", e));
                        show_toast("Could not download the report.");
                    }
                }
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let back = ctx.props().on_back.reform(|_: MouseEvent| ());

        let body = match (&self.report, &self.error) {
            (Some(report), _) => {
                let record = &report.data;
                let data = &record.report_data;
                html! {
                    <>
                        <div class="card">
                            <h2>{ format!("{} / {}", data.location.as_deref().unwrap_or("-"), data.datahall) }</h2>
                            <p>{ format!("Status: {}", data.status) }</p>
                            <p>{ format!("Submitted by {} on {}", record.user_email, format_timestamp(&record.timestamp)) }</p>
                            if let Some(number) = data.walkthrough_number {
                                <p>{ format!("Walkthrough #{}", number) }</p>
                            }
                            { reading("Temperature", "°C", data.temperature_reading.as_deref(), temperature_level) }
                            { reading("Humidity", "%", data.humidity_reading.as_deref(), humidity_level) }
                            if let Some(comments) = &data.comments {
                                <p>{ comments.clone() }</p>
                            }
                        </div>
                        if !data.racks.is_empty() {
                            <div class="card">
                                <h3>{"Rack findings"}</h3>
                                { for data.racks.iter().map(|rack| html! {
                                    <div>
                                        <strong>{ format!("Rack {}", rack.location) }</strong>
                                        <ul>
                                            { for rack.findings.iter().map(|f| html! {
                                                <li>{ format!("{} ({})", f.summary(), f.severity()) }</li>
                                            }) }
                                        </ul>
                                    </div>
                                }) }
                            </div>
                        }
                        <div class="card">
                            <p>{ report.message.clone() }</p>
                            <a href={report.report_url.clone()} target="_blank">{"Spreadsheet link"}</a>
                            <button onclick={link.callback(|_| Msg::Download)}>{"Download JSON"}</button>
                        </div>
                    </>
                }
            }
            (None, Some(e)) => html! { <div class="card error-text">{ e }</div> },
            (None, None) => html! { <div class="card">{"Loading report..."}</div> },
        };

        html! {
            <div class="report">
                <button onclick={back}>{"Back to inspections"}</button>
                { body }
            </div>
        }
    }
}

fn reading(
    label: &str,
    unit: &str,
    value: Option<&str>,
    level: fn(&str) -> Option<ReadingLevel>,
) -> Html {
    match value {
        Some(value) => {
            let class = level(value).map(ReadingLevel::css_class);
            html! { <p class={classes!(class)}>{ format!("{}: {} {}", label, value, unit) }</p> }
        }
        None => html! { <p>{ format!("{}: -", label) }</p> },
    }
}
