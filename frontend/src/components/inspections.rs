//! Inspections list: search, status filter, pages of ten and a detail sheet.

use crate::api::fetch_inspections;
use crate::helpers::{format_timestamp, show_toast};
use crate::tops_sheet::yw_material_top_sheet::{close_top_sheet, open_top_sheet, YwMaterialTopSheet};
use common::model::inspection::InspectionRecord;
use common::model::status::StatusCategory;
use common::views::inspections::{page, page_count, InspectionFilter, PAGE_SIZE};
use gloo_console::error;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::platform::spawn_local;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct InspectionsProps {
    pub on_open_report: Callback<String>,
}

pub enum Msg {
    Loaded(Result<Vec<InspectionRecord>, String>),
    Search(String),
    FilterStatus(Option<StatusCategory>),
    Page(usize),
    Select(String),
    CloseDetail,
}

pub struct InspectionsComponent {
    records: Vec<InspectionRecord>,
    loading: bool,
    filter: InspectionFilter,
    page: usize,
    selected: Option<String>,
    detail_ref: NodeRef,
}

impl Component for InspectionsComponent {
    type Message = Msg;
    type Properties = InspectionsProps;

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        spawn_local(async move {
            link.send_message(Msg::Loaded(fetch_inspections().await));
        });
        Self {
            records: Vec::new(),
            loading: true,
            filter: InspectionFilter::default(),
            page: 1,
            selected: None,
            detail_ref: NodeRef::default(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(result) => {
                self.loading = false;
                match result {
                    Ok(records) => self.records = records,
                    Err(e) => {
                        error!(format!("loading inspections failed: {}", e));
                        show_toast("Could not load inspections.");
                    }
                }
            }
            Msg::Search(text) => {
                self.filter.search = text;
                self.page = 1;
            }
            Msg::FilterStatus(status) => {
                self.filter.status = status;
                self.page = 1;
            }
            Msg::Page(page) => self.page = page,
            Msg::Select(id) => {
                self.selected = Some(id);
                open_top_sheet(&self.detail_ref);
            }
            Msg::CloseDetail => {
                close_top_sheet(&self.detail_ref);
                return false;
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let matching = self.filter.apply(&self.records);
        let pages = page_count(matching.len(), PAGE_SIZE);
        let current = self.page.min(pages);
        let visible = page(&matching, current, PAGE_SIZE);
        let selected = self
            .selected
            .as_ref()
            .and_then(|id| self.records.iter().find(|r| &r.id == id));

        html! {
            <div class="inspections">
                <div class="card">
                    <input
                        type="search"
                        placeholder="Search by hall, location, status or submitter"
                        value={self.filter.search.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            Msg::Search(input.value())
                        })}
                    />
                    <select onchange={link.callback(|e: Event| {
                        let select: HtmlSelectElement = e.target_unchecked_into();
                        Msg::FilterStatus(
                            StatusCategory::KNOWN
                                .into_iter()
                                .find(|c| c.label() == select.value()),
                        )
                    })}>
                        <option value="" selected={self.filter.status.is_none()}>{"All statuses"}</option>
                        { for StatusCategory::KNOWN.iter().map(|c| html! {
                            <option value={c.label()} selected={self.filter.status == Some(*c)}>{ c.label() }</option>
                        }) }
                    </select>
                </div>
                <div class="card">
                    {
                        if self.loading {
                            html! { <p>{"Loading inspections..."}</p> }
                        } else if visible.is_empty() {
                            html! { <p>{"No inspections match."}</p> }
                        } else {
                            html! {
                                <table>
                                    <thead>
                                        <tr>
                                            <th>{"Date"}</th>
                                            <th>{"Location"}</th>
                                            <th>{"Data hall"}</th>
                                            <th>{"Status"}</th>
                                            <th>{"Submitted by"}</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        { for visible.iter().map(|record| row(record, link)) }
                                    </tbody>
                                </table>
                            }
                        }
                    }
                    <div class="pager">
                        <button
                            disabled={current <= 1}
                            onclick={link.callback(move |_| Msg::Page(current.saturating_sub(1).max(1)))}
                        >{"Previous"}</button>
                        <span>{ format!(" Page {} of {} ", current, pages) }</span>
                        <button
                            disabled={current >= pages}
                            onclick={link.callback(move |_| Msg::Page(current + 1))}
                        >{"Next"}</button>
                    </div>
                </div>
                <YwMaterialTopSheet
                    node_ref={self.detail_ref.clone()}
                    title="Inspection details"
                    on_close={link.callback(|_| Msg::CloseDetail)}
                >
                    { selected.map(|record| detail(record, &ctx.props().on_open_report)).unwrap_or_default() }
                </YwMaterialTopSheet>
            </div>
        }
    }
}

fn row(record: &InspectionRecord, link: &Scope<InspectionsComponent>) -> Html {
    let id = record.id.clone();
    let data = &record.report_data;
    let category = StatusCategory::from_status(&data.status);
    html! {
        <tr class="clickable" onclick={link.callback(move |_| Msg::Select(id.clone()))}>
            <td>{ format_timestamp(&record.timestamp) }</td>
            <td>{ data.location.clone().unwrap_or_default() }</td>
            <td>{ data.datahall.clone() }</td>
            <td class={category.css_class()}>{ data.status.clone() }</td>
            <td>{ record.user_email.clone() }</td>
        </tr>
    }
}

fn detail(record: &InspectionRecord, on_open_report: &Callback<String>) -> Html {
    let data = &record.report_data;
    let id = record.id.clone();
    let on_open_report = on_open_report.clone();
    let yes_no = |v: Option<bool>| match v {
        Some(true) => "Yes",
        Some(false) => "No",
        None => "-",
    };
    html! {
        <div>
            <p>{ format!("{} / {}", data.location.as_deref().unwrap_or("-"), data.datahall) }</p>
            <p>{ format!("Status: {}", data.status) }</p>
            <p>{ format!("Submitted by {} on {}", record.user_email, format_timestamp(&record.timestamp)) }</p>
            <p>{ format!("Temperature: {}", data.temperature_reading.as_deref().unwrap_or("-")) }</p>
            <p>{ format!("Humidity: {}", data.humidity_reading.as_deref().unwrap_or("-")) }</p>
            <p>{ format!("Security passed: {}", yes_no(data.security_passed)) }</p>
            <p>{ format!("Cooling system check: {}", yes_no(data.cooling_system_check)) }</p>
            if data.is_urgent {
                <p class="status-critical">{"Urgent"}</p>
            }
            { for data.racks.iter().map(|rack| html! {
                <div>
                    <strong>{ format!("Rack {}", rack.location) }</strong>
                    <ul>
                        { for rack.findings.iter().map(|f| html! { <li>{ f.summary() }</li> }) }
                    </ul>
                </div>
            }) }
            if let Some(comments) = &data.comments {
                <p>{ comments.clone() }</p>
            }
            <button onclick={Callback::from(move |_| on_open_report.emit(id.clone()))}>
                {"Open report"}
            </button>
        </div>
    }
}
