//! Sliding sheet used to show details over the current view.
//!
//! The sheet is always rendered; `open_top_sheet` / `close_top_sheet` toggle
//! the `show` class that slides it into view.

use uuid::Uuid;
use yew::{html, Callback, Component, Context, Html, MouseEvent, NodeRef, Properties};

pub struct YwMaterialTopSheet {
    pub id: String,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Html,
    pub node_ref: NodeRef,
    #[prop_or_default]
    pub title: String,
    pub on_close: Callback<MouseEvent>,
}

impl Component for YwMaterialTopSheet {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            id: format!("id-{}", Uuid::new_v4()),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        html! {
            <div class="top-sheet" id={self.id.clone()} ref={props.node_ref.clone()}>
                <div class="top-sheet-header">
                    <h3>{ props.title.clone() }</h3>
                    <button onclick={props.on_close.clone()}>{"Close"}</button>
                </div>
                { props.children.clone() }
            </div>
        }
    }
}

pub fn open_top_sheet(top_sheet_ref: &NodeRef) {
    if let Some(top_sheet) = top_sheet_ref.cast::<web_sys::HtmlElement>() {
        top_sheet.class_list().add_1("show").ok();
    }
}

pub fn close_top_sheet(top_sheet_ref: &NodeRef) {
    if let Some(top_sheet) = top_sheet_ref.cast::<web_sys::HtmlElement>() {
        top_sheet.class_list().remove_1("show").ok();
    }
}
