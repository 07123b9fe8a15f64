//! Browser utilities shared by the components.
//!
//! - **User Feedback**: `show_toast` injects a short-lived notification.
//! - **Local Settings**: the submitter email and the running walkthrough
//!   number live in `localStorage`, so they survive reloads.
//! - **Downloads**: `download_json` saves a value as a `.json` file through a
//!   temporary object URL.

use chrono::{DateTime, Local, Utc};
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, HtmlElement, Storage, Url};

const USER_EMAIL_KEY: &str = "walkthrough.userEmail";
const WALKTHROUGH_NUMBER_KEY: &str = "walkthrough.number";

/// Displays a temporary notification message at the bottom of the screen.
///
/// The toast removes itself after three seconds.
pub fn show_toast(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
                toast.set_text_content(Some(message));
                let html_toast: HtmlElement = toast.unchecked_into();
                let style = html_toast.style();
                style.set_property("position", "fixed").ok();
                style.set_property("bottom", "20px").ok();
                style.set_property("left", "50%").ok();
                style.set_property("transform", "translateX(-50%)").ok();
                style.set_property("background", "rgba(0, 0, 0, 0.8)").ok();
                style.set_property("color", "#fff").ok();
                style.set_property("padding", "10px 20px").ok();
                style.set_property("border-radius", "4px").ok();
                style.set_property("z-index", "10000").ok();

                if body.append_child(&html_toast).is_ok() {
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(3000).await;
                        if let Some(parent) = html_toast.parent_node() {
                            parent.remove_child(&html_toast).ok();
                        }
                    });
                }
            }
        }
    }
}

/// Local wall-clock rendering of a stored UTC timestamp.
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string()
}

fn storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

pub fn load_user_email() -> String {
    storage()
        .and_then(|s| s.get_item(USER_EMAIL_KEY).ok().flatten())
        .unwrap_or_default()
}

pub fn save_user_email(email: &str) {
    if let Some(storage) = storage() {
        storage.set_item(USER_EMAIL_KEY, email.trim()).ok();
    }
}

/// Number the next walkthrough will carry; starts at 1.
pub fn current_walkthrough_number() -> u32 {
    storage()
        .and_then(|s| s.get_item(WALKTHROUGH_NUMBER_KEY).ok().flatten())
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(1)
}

/// Bumps the stored walkthrough number after a successful submission.
pub fn advance_walkthrough_number() -> u32 {
    let next = current_walkthrough_number().saturating_add(1);
    if let Some(storage) = storage() {
        storage
            .set_item(WALKTHROUGH_NUMBER_KEY, &next.to_string())
            .ok();
    }
    next
}

/// Offers `value` as a pretty-printed JSON download named `filename`.
pub fn download_json<T: Serialize>(filename: &str, value: &T) -> Result<(), String> {
    let json = serde_json::to_string_pretty(value).map_err(|e| e.to_string())?;

    let parts = js_sys::Array::of1(&JsValue::from_str(&json));
    let options = BlobPropertyBag::new();
    options.set_type("application/json");
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options).map_err(js_error)?;
    let url = Url::create_object_url_with_blob(&blob).map_err(js_error)?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("document is not available")?;
    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(js_error)?
        .unchecked_into();
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();
    Url::revoke_object_url(&url).map_err(js_error)?;
    Ok(())
}

fn js_error(value: JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}
