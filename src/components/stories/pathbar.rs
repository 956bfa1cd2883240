//! Breadcrumb navigation from the root to the folder on screen.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/stories/pathbar.module.css");

#[component]
pub fn PathBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let crumbs = Signal::derive(move || ctx.session.with(|s| s.crumbs()));
    let depth = Signal::derive(move || ctx.session.with(|s| s.path().len()));

    view! {
        <nav class=css::pathbar aria-label="Folder path">
            <For
                each=move || crumbs.get()
                key=|crumb| (crumb.index, crumb.id.clone(), crumb.name.clone())
                children=move |crumb| {
                    let index = crumb.index;
                    let is_current = move || depth.get() == index + 1;
                    let segment_class = move || {
                        if is_current() {
                            format!("{} {}", css::segment, css::current)
                        } else {
                            css::segment.to_string()
                        }
                    };

                    view! {
                        {(index > 0).then(|| view! {
                            <span class=css::separator><Icon icon=ic::CHEVRON_RIGHT /></span>
                        })}
                        <button
                            class=segment_class
                            aria-current=move || is_current().then_some("page")
                            on:click=move |_| ctx.session.update(|s| s.jump_to(index))
                        >
                            {(index == 0).then(|| view! { <Icon icon=ic::HOME /> })}
                            <span>{crumb.name}</span>
                        </button>
                    }
                }
            />
        </nav>
    }
}
