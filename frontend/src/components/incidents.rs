//! Incidents raised by flagged walkthroughs, newest first.

use crate::api::fetch_incidents;
use crate::helpers::{format_timestamp, show_toast};
use common::model::incident::{Incident, IncidentStatus};
use common::views::incidents::{severity_class, status_class, IncidentFilter};
use gloo_console::error;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::platform::spawn_local;
use yew::prelude::*;

pub enum Msg {
    Loaded(Result<Vec<Incident>, String>),
    Search(String),
    FilterStatus(Option<IncidentStatus>),
}

pub struct IncidentsComponent {
    incidents: Vec<Incident>,
    loading: bool,
    filter: IncidentFilter,
}

impl Component for IncidentsComponent {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        spawn_local(async move {
            link.send_message(Msg::Loaded(fetch_incidents().await));
        });
        Self {
            incidents: Vec::new(),
            loading: true,
            filter: IncidentFilter::default(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(Ok(incidents)) => {
                self.loading = false;
                self.incidents = incidents;
            }
            Msg::Loaded(Err(e)) => {
                self.loading = false;
                error!(format!("loading incidents failed: {}", e));
                show_toast("Could not load incidents.");
            }
            Msg::Search(text) => self.filter.search = text,
            Msg::FilterStatus(status) => self.filter.status = status,
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let visible = self.filter.apply(&self.incidents);

        html! {
            <div class="incidents">
                <div class="card">
                    <input
                        type="search"
                        placeholder="Search by location, description or hall"
                        value={self.filter.search.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            Msg::Search(input.value())
                        })}
                    />
                    <select onchange={link.callback(|e: Event| {
                        let select: HtmlSelectElement = e.target_unchecked_into();
                        Msg::FilterStatus(IncidentStatus::parse(&select.value()))
                    })}>
                        <option value="" selected={self.filter.status.is_none()}>{"All statuses"}</option>
                        { for IncidentStatus::ALL.iter().map(|s| html! {
                            <option value={s.as_str()} selected={self.filter.status == Some(*s)}>{ s.as_str() }</option>
                        }) }
                    </select>
                </div>
                <div class="card">
                    {
                        if self.loading {
                            html! { <p>{"Loading incidents..."}</p> }
                        } else if visible.is_empty() {
                            html! { <p>{"No incidents."}</p> }
                        } else {
                            html! {
                                <table>
                                    <thead>
                                        <tr>
                                            <th>{"Raised"}</th>
                                            <th>{"Location"}</th>
                                            <th>{"Description"}</th>
                                            <th>{"Severity"}</th>
                                            <th>{"Status"}</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        { for visible.iter().map(|incident| html! {
                                            <tr>
                                                <td>{ format_timestamp(&incident.created_at) }</td>
                                                <td>{ format!("{} / {}", incident.location, incident.datahall) }</td>
                                                <td>{ incident.description.clone() }</td>
                                                <td><span class={severity_class(incident.severity)}>{ incident.severity.as_str() }</span></td>
                                                <td><span class={status_class(incident.status)}>{ incident.status.as_str() }</span></td>
                                            </tr>
                                        }) }
                                    </tbody>
                                </table>
                            }
                        }
                    }
                </div>
            </div>
        }
    }
}
