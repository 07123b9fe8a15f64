//! Application shell: header navigation, the submitter email and the active
//! page. Routing is kept in component state; the backend serves
//! `index.html` for every non-API path.

use crate::components::dashboard::DashboardComponent;
use crate::components::flow::InspectionFlowComponent;
use crate::components::incidents::IncidentsComponent;
use crate::components::inspections::InspectionsComponent;
use crate::components::report::ReportComponent;
use crate::helpers::{load_user_email, save_user_email};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub enum Route {
    Dashboard,
    Inspections,
    Report(String),
    Incidents,
    NewInspection,
}

pub enum Msg {
    Navigate(Route),
    SetUserEmail(String),
}

pub struct App {
    route: Route,
    user_email: String,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            route: Route::Dashboard,
            user_email: load_user_email(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Navigate(route) => {
                if self.route == route {
                    return false;
                }
                self.route = route;
                true
            }
            Msg::SetUserEmail(email) => {
                save_user_email(&email);
                self.user_email = email.trim().to_string();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let navigate = link.callback(Msg::Navigate);
        let open_report = link.callback(|id: String| Msg::Navigate(Route::Report(id)));

        let page = match &self.route {
            Route::Dashboard => html! {
                <DashboardComponent
                    on_open_report={open_report}
                    on_start={link.callback(|_| Msg::Navigate(Route::NewInspection))}
                />
            },
            Route::Inspections => html! { <InspectionsComponent on_open_report={open_report} /> },
            Route::Report(id) => html! {
                <ReportComponent
                    key={id.clone()}
                    id={id.clone()}
                    on_back={link.callback(|_| Msg::Navigate(Route::Inspections))}
                />
            },
            Route::Incidents => html! { <IncidentsComponent /> },
            Route::NewInspection => html! {
                <InspectionFlowComponent
                    user_email={(!self.user_email.is_empty()).then(|| self.user_email.clone())}
                    on_open_report={open_report}
                    on_finish={link.callback(|_| Msg::Navigate(Route::Dashboard))}
                />
            },
        };

        html! {
            <>
                <header class="app-header">
                    <strong>{"Datacenter Walkthrough"}</strong>
                    <nav>
                        { self.nav_button(&navigate, Route::Dashboard, "Dashboard") }
                        { self.nav_button(&navigate, Route::NewInspection, "New inspection") }
                        { self.nav_button(&navigate, Route::Inspections, "Inspections") }
                        { self.nav_button(&navigate, Route::Incidents, "Incidents") }
                    </nav>
                    <input
                        type="email"
                        placeholder="your.email@company.com"
                        value={self.user_email.clone()}
                        onchange={link.callback(|e: Event| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            Msg::SetUserEmail(input.value())
                        })}
                    />
                </header>
                <main>{ page }</main>
            </>
        }
    }
}

impl App {
    fn nav_button(&self, navigate: &Callback<Route>, route: Route, label: &str) -> Html {
        let active = match (&self.route, &route) {
            (Route::Report(_), Route::Inspections) => true,
            (current, target) => current == target,
        };
        let navigate = navigate.clone();
        html! {
            <button
                class={classes!(active.then_some("active"))}
                onclick={Callback::from(move |_| navigate.emit(route.clone()))}
            >
                { label }
            </button>
        }
    }
}
