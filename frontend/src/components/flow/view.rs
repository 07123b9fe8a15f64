//! View rendering for the inspection wizard.
//!
//! One pane per `FlowStep`. Form inputs never mutate state directly: each
//! callback clones the current `HallConditions` or `RackForm`, applies the
//! edit and sends the result as a `FlowEvent`.

use common::flow::{
    FlowEvent, FlowStep, HallConditions, PduForm, PsuForm, RackForm, RdhxForm, SubmissionOutcome,
};
use common::model::device::{DeviceKind, PduStatus, PsuStatus, RdhxStatus};
use common::model::site::{find_site, SITES};
use common::model::status::HALL_STATUSES;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::InspectionFlowComponent;

type Link = Scope<InspectionFlowComponent>;

pub fn view(component: &InspectionFlowComponent, ctx: &Context<InspectionFlowComponent>) -> Html {
    let link = ctx.link();
    let flow = &component.flow;

    let pane = match flow.step() {
        FlowStep::ChooseLocation => choose_location(link),
        FlowStep::ChooseDataHall => choose_data_hall(component, link),
        FlowStep::IssueFlag => issue_flag(component, link),
        FlowStep::RackDetails => rack_details(component, link),
        FlowStep::Submitting => html! { <div class="card">{"Submitting inspection..."}</div> },
        FlowStep::Confirmation(outcome) => confirmation(outcome, ctx),
    };

    html! {
        <div class="inspection-flow">
            <div class="card">
                <h2>{"New inspection"}</h2>
                <p>{ breadcrumb(component) }</p>
                if let Some(error) = &component.error {
                    <p class="error-text">{ error.clone() }</p>
                }
            </div>
            { pane }
        </div>
    }
}

fn breadcrumb(component: &InspectionFlowComponent) -> String {
    let flow = &component.flow;
    let mut parts = Vec::new();
    if let Some(number) = flow.walkthrough_number() {
        parts.push(format!("Walkthrough #{}", number));
    }
    parts.extend(flow.location().map(str::to_string));
    parts.extend(flow.data_hall().map(str::to_string));
    parts.join(" / ")
}

fn event(link: &Link, event: FlowEvent) -> Callback<MouseEvent> {
    link.callback(move |_| Msg::Flow(event.clone()))
}

fn choose_location(link: &Link) -> Html {
    html! {
        <div class="card">
            <h3>{"Choose a location"}</h3>
            <div class="choice-grid">
                { for SITES.iter().map(|site| html! {
                    <button onclick={event(link, FlowEvent::SelectLocation(site.name.to_string()))}>
                        { site.name }
                    </button>
                }) }
            </div>
        </div>
    }
}

fn choose_data_hall(component: &InspectionFlowComponent, link: &Link) -> Html {
    let halls = component
        .flow
        .location()
        .and_then(find_site)
        .map(|site| site.data_halls)
        .unwrap_or_default();

    html! {
        <div class="card">
            <h3>{"Choose a data hall"}</h3>
            <div class="choice-grid">
                { for halls.iter().map(|hall| html! {
                    <button onclick={event(link, FlowEvent::SelectDataHall(hall.to_string()))}>
                        { *hall }
                    </button>
                }) }
            </div>
            <button onclick={event(link, FlowEvent::Back)}>{"Back"}</button>
        </div>
    }
}

fn issue_flag(component: &InspectionFlowComponent, link: &Link) -> Html {
    let flow = &component.flow;
    let decided_clean = flow.has_issues() == Some(false);

    html! {
        <>
            { conditions_form(flow.conditions(), link) }
            <div class="card">
                <h3>{"Were any rack issues found?"}</h3>
                <button
                    class={classes!(decided_clean.then_some("active"))}
                    onclick={event(link, FlowEvent::FlagIssues(false))}
                >{"No issues"}</button>
                <button onclick={event(link, FlowEvent::FlagIssues(true))}>{"Report issues"}</button>
            </div>
            <div class="card">
                <button onclick={event(link, FlowEvent::Back)}>{"Back"}</button>
                <button disabled={!decided_clean} onclick={event(link, FlowEvent::Submit)}>
                    {"Submit inspection"}
                </button>
            </div>
        </>
    }
}

fn conditions_form(conditions: &HallConditions, link: &Link) -> Html {
    html! {
        <div class="card">
            <h3>{"Hall conditions"}</h3>
            <div class="form-row">
                <label>{"Status"}</label>
                <select onchange={edit_conditions(link, conditions, |c, e: Event| c.status = select_value(&e))}>
                    { for HALL_STATUSES.iter().map(|status| html! {
                        <option value={*status} selected={conditions.status == *status}>{ *status }</option>
                    }) }
                </select>
            </div>
            <div class="form-row">
                <label>{"Temperature (°C)"}</label>
                <input
                    type="number"
                    step="0.1"
                    value={conditions.temperature_reading.clone()}
                    oninput={edit_conditions(link, conditions, |c, e: InputEvent| c.temperature_reading = input_value(&e))}
                />
            </div>
            <div class="form-row">
                <label>{"Humidity (%)"}</label>
                <input
                    type="number"
                    step="0.1"
                    value={conditions.humidity_reading.clone()}
                    oninput={edit_conditions(link, conditions, |c, e: InputEvent| c.humidity_reading = input_value(&e))}
                />
            </div>
            <div class="form-row">
                <label>
                    <input
                        type="checkbox"
                        checked={conditions.security_passed}
                        onchange={edit_conditions(link, conditions, |c, e: Event| c.security_passed = checked(&e))}
                    />
                    {" Security check passed"}
                </label>
                <label>
                    <input
                        type="checkbox"
                        checked={conditions.cooling_system_check}
                        onchange={edit_conditions(link, conditions, |c, e: Event| c.cooling_system_check = checked(&e))}
                    />
                    {" Cooling system OK"}
                </label>
                <label>
                    <input
                        type="checkbox"
                        checked={conditions.is_urgent}
                        onchange={edit_conditions(link, conditions, |c, e: Event| c.is_urgent = checked(&e))}
                    />
                    {" Urgent"}
                </label>
            </div>
            <div class="form-row">
                <label>{"Comments"}</label>
                <textarea
                    value={conditions.comments.clone()}
                    oninput={edit_conditions(link, conditions, |c, e: InputEvent| c.comments = textarea_value(&e))}
                />
            </div>
        </div>
    }
}

fn rack_details(component: &InspectionFlowComponent, link: &Link) -> Html {
    html! {
        <>
            { for component.flow.racks().iter().enumerate().map(|(index, rack)| rack_card(index, rack, link)) }
            <div class="card">
                <button onclick={event(link, FlowEvent::AddRack)}>{"Add rack"}</button>
                <button onclick={event(link, FlowEvent::Back)}>{"Back"}</button>
                <button onclick={event(link, FlowEvent::Submit)}>{"Submit inspection"}</button>
            </div>
        </>
    }
}

fn rack_card(index: usize, rack: &RackForm, link: &Link) -> Html {
    html! {
        <div class="card rack-card">
            <h3>{ format!("Rack {}", index + 1) }</h3>
            <div class="form-row">
                <label>{"Rack location"}</label>
                <input
                    placeholder="e.g. R07"
                    value={rack.location.clone()}
                    oninput={edit_rack(link, index, rack, |r, e: InputEvent| r.location = input_value(&e))}
                />
            </div>
            <div class="form-row">
                { for [DeviceKind::Psu, DeviceKind::Pdu, DeviceKind::Rdhx].into_iter().map(|kind| html! {
                    <label>
                        <input
                            type="checkbox"
                            checked={rack.is_checked(kind)}
                            onchange={edit_rack(link, index, rack, move |r, e: Event| r.toggle(kind, checked(&e)))}
                        />
                        { format!(" {}", kind) }
                    </label>
                }) }
            </div>
            if let Some(psu) = &rack.psu {
                { psu_fields(index, rack, psu, link) }
            }
            if let Some(pdu) = &rack.pdu {
                { pdu_fields(index, rack, pdu, link) }
            }
            if let Some(rdhx) = &rack.rdhx {
                { rdhx_fields(index, rack, rdhx, link) }
            }
            <div class="form-row">
                <label>{"Rack comments"}</label>
                <textarea
                    value={rack.comments.clone()}
                    oninput={edit_rack(link, index, rack, |r, e: InputEvent| r.comments = textarea_value(&e))}
                />
            </div>
            <button onclick={event(link, FlowEvent::RemoveRack(index))}>{"Remove rack"}</button>
        </div>
    }
}

fn psu_fields(index: usize, rack: &RackForm, psu: &PsuForm, link: &Link) -> Html {
    html! {
        <div class="form-row device-details">
            <label>{"PSU ID"}</label>
            <input
                value={psu.psu_id.clone()}
                oninput={edit_rack(link, index, rack, |r, e: InputEvent| {
                    if let Some(psu) = r.psu.as_mut() {
                        psu.psu_id = input_value(&e);
                    }
                })}
            />
            <label>{"U height"}</label>
            <input
                type="number"
                min="1"
                value={psu.u_height.clone()}
                oninput={edit_rack(link, index, rack, |r, e: InputEvent| {
                    if let Some(psu) = r.psu.as_mut() {
                        psu.u_height = input_value(&e);
                    }
                })}
            />
            <label>{"PSU status"}</label>
            <select onchange={edit_rack(link, index, rack, |r, e: Event| {
                if let Some(psu) = r.psu.as_mut() {
                    psu.status = PsuStatus::from_label(&select_value(&e));
                }
            })}>
                <option value="" selected={psu.status.is_none()}>{"Select status"}</option>
                { for PsuStatus::ALL.iter().map(|s| html! {
                    <option value={s.label()} selected={psu.status == Some(*s)}>{ s.label() }</option>
                }) }
            </select>
        </div>
    }
}

fn pdu_fields(index: usize, rack: &RackForm, pdu: &PduForm, link: &Link) -> Html {
    html! {
        <div class="form-row device-details">
            <label>{"PDU ID"}</label>
            <input
                value={pdu.pdu_id.clone()}
                oninput={edit_rack(link, index, rack, |r, e: InputEvent| {
                    if let Some(pdu) = r.pdu.as_mut() {
                        pdu.pdu_id = input_value(&e);
                    }
                })}
            />
            <label>{"PDU status"}</label>
            <select onchange={edit_rack(link, index, rack, |r, e: Event| {
                if let Some(pdu) = r.pdu.as_mut() {
                    pdu.status = PduStatus::from_label(&select_value(&e));
                }
            })}>
                <option value="" selected={pdu.status.is_none()}>{"Select status"}</option>
                { for PduStatus::ALL.iter().map(|s| html! {
                    <option value={s.label()} selected={pdu.status == Some(*s)}>{ s.label() }</option>
                }) }
            </select>
        </div>
    }
}

fn rdhx_fields(index: usize, rack: &RackForm, rdhx: &RdhxForm, link: &Link) -> Html {
    html! {
        <div class="form-row device-details">
            <label>{"RDHX status"}</label>
            <select onchange={edit_rack(link, index, rack, |r, e: Event| {
                if let Some(rdhx) = r.rdhx.as_mut() {
                    rdhx.status = RdhxStatus::from_label(&select_value(&e));
                }
            })}>
                <option value="" selected={rdhx.status.is_none()}>{"Select status"}</option>
                { for RdhxStatus::ALL.iter().map(|s| html! {
                    <option value={s.label()} selected={rdhx.status == Some(*s)}>{ s.label() }</option>
                }) }
            </select>
        </div>
    }
}

fn confirmation(outcome: &SubmissionOutcome, ctx: &Context<InspectionFlowComponent>) -> Html {
    let link = ctx.link();
    match outcome {
        SubmissionOutcome::Success { inspection_id } => {
            let id = inspection_id.clone();
            let on_open_report = ctx.props().on_open_report.clone();
            let on_finish = ctx.props().on_finish.reform(|_: MouseEvent| ());
            html! {
                <div class="card">
                    <h3 class="status-ok">{"Inspection submitted"}</h3>
                    <p>{ format!("Reference: {}", inspection_id) }</p>
                    <button onclick={Callback::from(move |_| on_open_report.emit(id.clone()))}>
                        {"View report"}
                    </button>
                    <button onclick={link.callback(|_| Msg::StartOver)}>{"Start another"}</button>
                    <button onclick={on_finish}>{"Done"}</button>
                </div>
            }
        }
        SubmissionOutcome::Failure { error } => html! {
            <div class="card">
                <h3 class="status-critical">{"Submission failed"}</h3>
                <p class="error-text">{ error.clone() }</p>
                <p>{"Nothing was saved. Start again to re-enter the walkthrough."}</p>
                <button onclick={event(link, FlowEvent::Retry)}>{"Try again"}</button>
            </div>
        },
    }
}

fn edit_conditions<E, F>(link: &Link, conditions: &HallConditions, edit: F) -> Callback<E>
where
    E: 'static,
    F: Fn(&mut HallConditions, E) + 'static,
{
    let base = conditions.clone();
    link.callback(move |e: E| {
        let mut next = base.clone();
        edit(&mut next, e);
        Msg::Flow(FlowEvent::UpdateConditions(next))
    })
}

fn edit_rack<E, F>(link: &Link, index: usize, rack: &RackForm, edit: F) -> Callback<E>
where
    E: 'static,
    F: Fn(&mut RackForm, E) + 'static,
{
    let base = rack.clone();
    link.callback(move |e: E| {
        let mut next = base.clone();
        edit(&mut next, e);
        Msg::Flow(FlowEvent::UpdateRack(index, next))
    })
}

fn input_value(e: &Event) -> String {
    e.target_unchecked_into::<HtmlInputElement>().value()
}

fn textarea_value(e: &Event) -> String {
    e.target_unchecked_into::<HtmlTextAreaElement>().value()
}

fn select_value(e: &Event) -> String {
    e.target_unchecked_into::<HtmlSelectElement>().value()
}

fn checked(e: &Event) -> bool {
    e.target_unchecked_into::<HtmlInputElement>().checked()
}
