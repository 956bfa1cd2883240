//! Upload and New Folder actions.
//!
//! Both stay visible for read-only viewers but are disabled.

use leptos::prelude::*;
use leptos_icons::Icon;
use stories_core::ContentRef;
use web_sys::HtmlInputElement;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::utils::{file_sources, revoke_all};

stylance::import_crate_style!(css, "src/components/stories/toolbar.module.css");

#[component]
pub fn Toolbar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let can_manage = ctx.session.with_untracked(|s| s.can_manage());

    let handle_upload = move |ev: leptos::ev::Event| {
        let input: HtmlInputElement = event_target(&ev);
        let sources = input.files().map(|files| file_sources(&files)).unwrap_or_default();
        // Reset so picking the same file again fires another change.
        input.set_value("");
        if sources.is_empty() {
            return;
        }

        let handles: Vec<ContentRef> = sources.iter().map(|s| s.content.clone()).collect();
        match ctx.apply(|s| s.upload(sources)) {
            Some(ids) => {
                web_sys::console::log_1(&format!("Uploaded {} files", ids.len()).into());
            }
            None => revoke_all(&handles),
        }
    };

    let handle_new_folder = move |_: leptos::ev::MouseEvent| {
        ctx.apply(|s| s.request_new_folder());
    };

    let selected = Signal::derive(move || ctx.session.with(|s| s.selected().len()));

    let upload_class = if can_manage {
        format!("{} {}", css::button, css::upload)
    } else {
        format!("{} {} {}", css::button, css::upload, css::disabled)
    };

    view! {
        <div class=css::toolbar>
            <Show when=move || { selected.get() > 0 }>
                <button
                    class=css::selection
                    title="Clear selection"
                    on:click=move |_| ctx.session.update(|s| s.clear_selection())
                >
                    {move || format!("{} selected", selected.get())}
                    <Icon icon=ic::CLOSE />
                </button>
            </Show>
            <label class=upload_class aria-disabled={(!can_manage).to_string()}>
                <Icon icon=ic::UPLOAD />
                <span>"Upload"</span>
                <input
                    class=css::fileInput
                    type="file"
                    multiple
                    disabled={!can_manage}
                    on:change=handle_upload
                />
            </label>
            <button
                class=format!("{} {}", css::button, css::newFolder)
                disabled={!can_manage}
                on:click=handle_new_folder
            >
                <Icon icon=ic::PLUS />
                <span>"New Folder"</span>
            </button>
        </div>
    }
}
