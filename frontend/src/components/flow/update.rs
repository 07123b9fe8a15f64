//! Update function of the inspection wizard.
//!
//! Events go through `InspectionFlow::apply`; a rejected event only sets the
//! inline error. `FlowEffect::Send` spawns the submission and its result is
//! fed back as `SubmitSucceeded` / `SubmitFailed`.

use common::flow::{FlowEffect, FlowEvent};
use gloo_console::error;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::submit_inspection;
use crate::helpers::{advance_walkthrough_number, show_toast};

use super::messages::Msg;
use super::state::InspectionFlowComponent;

pub fn update(
    component: &mut InspectionFlowComponent,
    ctx: &Context<InspectionFlowComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::Flow(event) => apply(component, ctx, event),
        Msg::Submitted(Ok(record)) => {
            advance_walkthrough_number();
            show_toast("Inspection submitted.");
            apply(component, ctx, FlowEvent::SubmitSucceeded(record.id))
        }
        Msg::Submitted(Err(e)) => {
            error!(format!("submitting inspection failed: {}", e));
            apply(component, ctx, FlowEvent::SubmitFailed(e))
        }
        Msg::StartOver => {
            *component = InspectionFlowComponent::new(component.user_email.clone());
            true
        }
    }
}

fn apply(
    component: &mut InspectionFlowComponent,
    ctx: &Context<InspectionFlowComponent>,
    event: FlowEvent,
) -> bool {
    match component.flow.apply(event) {
        Ok(effect) => {
            component.error = None;
            if let FlowEffect::Send(request) = effect {
                let link = ctx.link().clone();
                spawn_local(async move {
                    link.send_message(Msg::Submitted(submit_inspection(&request).await));
                });
            }
        }
        Err(e) => component.error = Some(e.to_string()),
    }
    true
}
