//! Modal for naming and confirmation prompts.
//!
//! Renders whatever [`DialogRequest`](stories_core::DialogRequest) the
//! session holds and answers it. A failed answer keeps the dialog open with
//! the message inline.

use leptos::ev::{KeyboardEvent, SubmitEvent};
use leptos::prelude::*;
use stories_core::DialogResponse;

use crate::app::AppContext;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/stories/dialog.module.css");

const INPUT_ID: &str = "stories-dialog-input";

#[component]
pub fn NameDialog() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let notice = ctx.notice;

    let request = Memo::new(move |_| ctx.session.with(|s| s.dialog().cloned()));

    let cancel = move || {
        ctx.apply(|s| s.respond(DialogResponse::Cancel));
    };

    move || {
        request.get().map(|request| {
            let wants_name = request.wants_name();
            let draft = RwSignal::new(request.initial_value().to_string());

            let handle_submit = move |ev: SubmitEvent| {
                ev.prevent_default();
                let response = if wants_name {
                    DialogResponse::Name(draft.get_untracked())
                } else {
                    DialogResponse::Confirm
                };
                let outcome = ctx.apply(|s| s.respond(response));
                ctx.settle(outcome);
            };

            let handle_keydown = move |ev: KeyboardEvent| {
                if ev.key() == "Escape" {
                    cancel();
                }
            };

            if wants_name {
                request_animation_frame(move || {
                    dom::focus_element(&format!("#{INPUT_ID}"));
                });
            }

            let confirm_class = if request.is_destructive() {
                format!("{} {}", css::button, css::danger)
            } else {
                format!("{} {}", css::button, css::primary)
            };

            view! {
                <div class=css::backdrop on:click=move |_| cancel()>
                    <form
                        class=css::dialog
                        role="dialog"
                        aria-modal="true"
                        on:click=|ev: leptos::ev::MouseEvent| ev.stop_propagation()
                        on:submit=handle_submit
                        on:keydown=handle_keydown
                    >
                        <h2 class=css::title>{request.title()}</h2>
                        {wants_name.then(|| view! {
                            <input
                                id=INPUT_ID
                                class=css::input
                                type="text"
                                prop:value=move || draft.get()
                                on:input=move |ev| draft.set(event_target_value(&ev))
                            />
                        })}
                        <Show when=move || notice.with(Option::is_some)>
                            <p class=css::error role="alert">
                                {move || notice.get().unwrap_or_default()}
                            </p>
                        </Show>
                        <div class=css::buttons>
                            <button class=css::button type="button" on:click=move |_| cancel()>
                                "Cancel"
                            </button>
                            <button class=confirm_class type="submit">
                                {request.confirm_label()}
                            </button>
                        </div>
                    </form>
                </div>
            }
        })
    }
}
