//! New-inspection wizard: root module wiring the Yew `Component` to the
//! `common::flow::InspectionFlow` state machine.
//!
//! The component owns one `InspectionFlow`. Every user action becomes a
//! `FlowEvent`; the only side effect the flow can ask for is sending the
//! finished request, which `update` performs and reports back.

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::FlowProps;
pub use state::InspectionFlowComponent;
use yew::prelude::*;

impl Component for InspectionFlowComponent {
    type Message = Msg;
    type Properties = FlowProps;

    fn create(ctx: &Context<Self>) -> Self {
        InspectionFlowComponent::new(ctx.props().user_email.clone())
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        let user_email = &ctx.props().user_email;
        if *user_email != old_props.user_email {
            self.user_email = user_email.clone();
            self.flow.set_user_email(user_email.clone());
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
