mod app;
mod components;
mod config;
mod models;
mod utils;

use app::App;
use leptos::prelude::*;

use crate::config::{MOUNT_ELEMENT_ID, PROPS_ATTRIBUTE};
use crate::models::StoriesProps;
use crate::utils::dom;

fn main() {
    console_error_panic_hook::set_once();

    let Some(root) = dom::element_by_id(MOUNT_ELEMENT_ID) else {
        web_sys::console::error_1(&format!("Missing #{MOUNT_ELEMENT_ID} element").into());
        return;
    };
    let host = StoriesProps::parse(root.get_attribute(PROPS_ATTRIBUTE).as_deref());

    mount_to(root, move || view! { <App host=host /> }).forget();
}
