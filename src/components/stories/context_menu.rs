//! Rename/Delete menu anchored at the pointer.

use leptos::prelude::*;
use stories_core::ContextAction;

use crate::app::AppContext;

stylance::import_crate_style!(css, "src/components/stories/context_menu.module.css");

#[component]
pub fn ContextMenuView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let menu = Memo::new(move |_| ctx.session.with(|s| s.menu().cloned()));

    move || {
        menu.get().map(|menu| {
            let style = format!("left: {}px; top: {}px;", menu.left(), menu.top());
            view! {
                <div
                    class=css::menu
                    style=style
                    role="menu"
                    aria-label=format!("Actions for {}", menu.name)
                    on:contextmenu=|ev: leptos::ev::MouseEvent| ev.prevent_default()
                >
                    {ContextAction::ALL
                        .into_iter()
                        .map(|action| {
                            let class = if action == ContextAction::Delete {
                                format!("{} {}", css::item, css::danger)
                            } else {
                                css::item.to_string()
                            };
                            view! {
                                <button
                                    class=class
                                    role="menuitem"
                                    on:click=move |_| {
                                        ctx.apply(|s| s.context_action(action));
                                    }
                                >
                                    {action.label()}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            }
        })
    }
}
