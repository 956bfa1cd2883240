//! Full-screen preview overlay.
//!
//! Images cycle with the arrow buttons or a horizontal swipe; PDFs render in
//! an `<object>`; anything else gets a download link.

use leptos::ev::{MouseEvent, TouchEvent};
use leptos::prelude::*;
use leptos_icons::Icon;
use stories_core::{FileEntry, MediaKind};

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::NO_INLINE_PREVIEW_TEXT;

stylance::import_crate_style!(css, "src/components/stories/preview.module.css");

fn render_content(file: &FileEntry) -> AnyView {
    let url = file.content.as_str().to_string();
    let name = file.name.clone();
    match file.kind() {
        MediaKind::Image => view! { <img class=css::image src=url alt=name /> }.into_any(),
        MediaKind::Pdf => {
            let download_url = url.clone();
            view! {
                <object class=css::pdf data=url type="application/pdf">
                    <p>
                        "PDF preview is not supported in this browser. "
                        <a href=download_url download=name>"Download"</a>
                    </p>
                </object>
            }
            .into_any()
        }
        MediaKind::Other => view! {
            <div class=css::note>
                <p>{NO_INLINE_PREVIEW_TEXT}</p>
                <a class=css::download href=url download=name>"Download"</a>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn PreviewOverlay() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let current = Memo::new(move |_| ctx.session.with(|s| s.preview().current().cloned()));
    let can_cycle = Signal::derive(move || ctx.session.with(|s| s.preview().can_cycle()));
    let position = Signal::derive(move || {
        ctx.session.with(|s| {
            let preview = s.preview();
            preview.index().map(|i| format!("{} / {}", i + 1, preview.len()))
        })
    });

    let touch_start_x = StoredValue::new(None::<f64>);

    let close = move |_: MouseEvent| ctx.session.update(|s| s.close_preview());
    let prev = move |ev: MouseEvent| {
        ev.stop_propagation();
        ctx.session.update(|s| s.preview_prev());
    };
    let next = move |ev: MouseEvent| {
        ev.stop_propagation();
        ctx.session.update(|s| s.preview_next());
    };

    let handle_touchstart = move |ev: TouchEvent| {
        let x = ev.touches().get(0).map(|t| t.client_x() as f64);
        touch_start_x.set_value(x);
    };
    let handle_touchend = move |ev: TouchEvent| {
        let Some(start) = touch_start_x.get_value() else {
            return;
        };
        touch_start_x.set_value(None);
        let Some(touch) = ev.changed_touches().get(0) else {
            return;
        };
        let delta_x = touch.client_x() as f64 - start;
        ctx.session.update(|s| {
            s.preview_swipe(delta_x);
        });
    };

    move || {
        current.get().map(|file| {
            view! {
                <div class=css::overlay on:click=close role="dialog" aria-modal="true">
                    <button class=css::close on:click=close aria-label="Close">
                        <Icon icon=ic::CLOSE />
                    </button>
                    <Show when=move || can_cycle.get()>
                        <button class=format!("{} {}", css::nav, css::navPrev) on:click=prev aria-label="Previous">
                            <Icon icon=ic::CHEVRON_LEFT />
                        </button>
                        <button class=format!("{} {}", css::nav, css::navNext) on:click=next aria-label="Next">
                            <Icon icon=ic::CHEVRON_RIGHT />
                        </button>
                    </Show>
                    <div
                        class=css::panel
                        on:click=|ev: MouseEvent| ev.stop_propagation()
                        on:touchstart=handle_touchstart
                        on:touchend=handle_touchend
                    >
                        <div class=css::heading>
                            <span class=css::name>{file.name.clone()}</span>
                            <span class=css::position>{move || position.get()}</span>
                        </div>
                        {render_content(&file)}
                    </div>
                </div>
            }
        })
    }
}
