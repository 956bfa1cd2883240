//! Page shell for the Stories browser.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::{ContextMenuView, Grid, NameDialog, PathBar, PreviewOverlay, Toolbar};
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::APP_TITLE;

stylance::import_crate_style!(css, "src/components/stories/stories.module.css");

#[component]
pub fn StoriesPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let notice = ctx.notice;

    // Uploaded blobs live as long as the page.
    on_cleanup(move || ctx.teardown());

    // Any click that reaches the page closes an open context menu.
    let handle_click = move |_: leptos::ev::MouseEvent| {
        if ctx.session.with_untracked(|s| s.menu().is_some()) {
            ctx.session.update(|s| s.dismiss_context_menu());
        }
    };

    view! {
        <div class=css::page on:click=handle_click>
            <div class=css::container>
                <header class=css::header>
                    <h1 class=css::title>{APP_TITLE}</h1>
                    <Toolbar />
                </header>
                <Show when=move || notice.with(Option::is_some)>
                    <div class=css::notice role="alert">
                        <span>{move || notice.get().unwrap_or_default()}</span>
                        <button
                            class=css::noticeClose
                            on:click=move |_| ctx.dismiss_notice()
                            aria-label="Dismiss"
                        >
                            <Icon icon=ic::CLOSE />
                        </button>
                    </div>
                </Show>
                <PathBar />
                <Grid />
            </div>
            <ContextMenuView />
            <PreviewOverlay />
            <NameDialog />
        </div>
    }
}
