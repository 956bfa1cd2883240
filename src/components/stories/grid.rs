//! Tiles for the children of the current folder.
//!
//! Click enters a folder or previews a file; ctrl/cmd-click toggles
//! selection. Right-click or touch-and-hold opens the context menu for
//! managers.

use gloo_timers::callback::Timeout;
use icondata::Icon as IconData;
use leptos::ev::{MouseEvent, TouchEvent};
use leptos::prelude::*;
use leptos_icons::Icon;
use stories_core::{MediaKind, Node};

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::{EMPTY_FOLDER_READ_ONLY_TEXT, EMPTY_FOLDER_TEXT, LONG_PRESS_MS};

stylance::import_crate_style!(css, "src/components/stories/grid.module.css");

/// Icon for a node without an image thumbnail.
fn get_icon(node: &Node) -> IconData {
    match node {
        Node::Folder(_) => ic::FOLDER,
        Node::File(file) => match file.kind() {
            MediaKind::Image => ic::FILE_IMAGE,
            MediaKind::Pdf => ic::FILE_PDF,
            MediaKind::Other => ic::FILE,
        },
    }
}

fn icon_class(node: &Node) -> String {
    let tone = match node {
        Node::Folder(_) => css::iconFolder,
        Node::File(file) if file.kind() == MediaKind::Pdf => css::iconPdf,
        Node::File(_) => css::iconFile,
    };
    format!("{} {}", css::icon, tone)
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("1 {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

#[component]
pub fn Grid() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let can_manage = ctx.session.with_untracked(|s| s.can_manage());

    let children = Signal::derive(move || ctx.session.with(|s| s.current_folder().children.clone()));
    let empty_text = if can_manage {
        EMPTY_FOLDER_TEXT
    } else {
        EMPTY_FOLDER_READ_ONLY_TEXT
    };

    view! {
        <section class=css::panel>
            <Show
                when=move || !children.with(Vec::is_empty)
                fallback=move || view! { <p class=css::empty>{empty_text}</p> }
            >
                <div class=css::grid role="list">
                    <For
                        each=move || children.get()
                        key=|node| (node.id().clone(), node.name().to_string())
                        children=move |node| view! { <Tile node=node can_manage=can_manage /> }
                    />
                </div>
            </Show>
        </section>
    }
}

#[component]
fn Tile(node: Node, can_manage: bool) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let id = node.id().clone();
    let name = node.name().to_string();
    let is_file = !node.is_folder();

    let is_selected = {
        let id = id.clone();
        Signal::derive(move || ctx.session.with(|s| s.selected().contains(id.as_str())))
    };
    let is_featured = {
        let id = id.clone();
        Signal::derive(move || ctx.session.with(|s| s.featured().contains(id.as_str())))
    };

    // Folder contents change without the tile being re-keyed.
    let folder_summary = {
        let id = id.clone();
        Signal::derive(move || {
            ctx.session.with(|s| {
                s.tree()
                    .find(id.as_str())
                    .and_then(Node::as_folder)
                    .map(|folder| {
                        let (files, folders) = folder.counts();
                        format!("{}, {}", plural(folders, "folder"), plural(files, "file"))
                    })
            })
        })
    };

    let tile_class = move || {
        let mut class = css::tile.to_string();
        if is_selected.get() {
            class.push(' ');
            class.push_str(css::selected);
        }
        class
    };

    let handle_click = {
        let id = id.clone();
        move |ev: MouseEvent| {
            if ev.ctrl_key() || ev.meta_key() {
                ctx.session.update(|s| {
                    s.toggle_selected(&id);
                });
            } else {
                ctx.session.update(|s| s.activate(id.as_str()));
            }
        }
    };

    let handle_contextmenu = {
        let id = id.clone();
        move |ev: MouseEvent| {
            if !can_manage {
                return;
            }
            ev.prevent_default();
            ev.stop_propagation();
            let (x, y) = (ev.client_x() as f64, ev.client_y() as f64);
            ctx.session.update(|s| {
                s.open_context_menu(&id, x, y);
            });
        }
    };

    // Dropping the stored timeout cancels it.
    let press_timer = StoredValue::new_local(None::<Timeout>);

    let handle_touchstart = {
        let id = id.clone();
        move |ev: TouchEvent| {
            let Some(touch) = ev.touches().get(0) else {
                return;
            };
            let (x, y) = (touch.client_x() as f64, touch.client_y() as f64);
            let generation = ctx
                .session
                .try_update_untracked(|s| s.press(id.clone(), x, y))
                .flatten();
            let Some(generation) = generation else {
                return;
            };
            let timeout = Timeout::new(LONG_PRESS_MS, move || {
                ctx.session.update(|s| {
                    s.long_press_elapsed(generation);
                });
            });
            press_timer.set_value(Some(timeout));
        }
    };

    let cancel_press = move || {
        press_timer.set_value(None);
        ctx.session.update_untracked(|s| s.cancel_press());
    };

    let handle_touchend = {
        let id = id.clone();
        move |ev: TouchEvent| {
            cancel_press();
            // Swallow the synthetic click after a hold opened the menu.
            if ctx
                .session
                .with_untracked(|s| s.menu().is_some_and(|m| m.target == id))
            {
                ev.prevent_default();
            }
        }
    };

    let thumbnail = match &node {
        Node::File(file) if file.is_image() => view! {
            <img class=css::thumb src=file.content.as_str().to_string() alt=name.clone() loading="lazy" />
        }
        .into_any(),
        other => view! {
            <span class=icon_class(other)><Icon icon=get_icon(other) /></span>
        }
        .into_any(),
    };

    let preview_button = {
        let id = id.clone();
        is_file.then(move || {
            view! {
                <button
                    class=css::previewButton
                    title="Preview"
                    on:click=move |ev: MouseEvent| {
                        ev.stop_propagation();
                        ctx.session.update(|s| s.activate(id.as_str()));
                    }
                >
                    <Icon icon=ic::EYE />
                </button>
            }
        })
    };

    let actions = can_manage.then(move || {
        let star_id = id.clone();
        let rename_id = id.clone();
        let delete_id = id;
        let star_class = move || {
            if is_featured.get() {
                format!("{} {}", css::action, css::starred)
            } else {
                css::action.to_string()
            }
        };
        view! {
            <div class=css::actions>
                {is_file.then(move || view! {
                    <button
                        class=star_class
                        title="Feature"
                        aria-pressed=move || is_featured.get().to_string()
                        on:click=move |ev: MouseEvent| {
                            ev.stop_propagation();
                            ctx.apply(|s| s.toggle_featured(&star_id));
                        }
                    >
                        <Icon icon=Signal::derive(move || {
                            if is_featured.get() { ic::STAR_FILL } else { ic::STAR }
                        }) />
                    </button>
                })}
                <button
                    class=css::action
                    title="Rename"
                    on:click=move |ev: MouseEvent| {
                        ev.stop_propagation();
                        ctx.apply(|s| s.request_rename(&rename_id));
                    }
                >
                    <Icon icon=ic::EDIT />
                </button>
                <button
                    class=format!("{} {}", css::action, css::danger)
                    title="Delete"
                    on:click=move |ev: MouseEvent| {
                        ev.stop_propagation();
                        ctx.apply(|s| s.request_delete(&delete_id));
                    }
                >
                    <Icon icon=ic::TRASH />
                </button>
            </div>
        }
    });

    view! {
        <div
            class=tile_class
            role="listitem"
            aria-selected=move || is_selected.get().to_string()
            on:click=handle_click
            on:contextmenu=handle_contextmenu
            on:touchstart=handle_touchstart
            on:touchmove=move |_: TouchEvent| cancel_press()
            on:touchend=handle_touchend
        >
            <div class=css::frame>
                {thumbnail}
                {preview_button}
            </div>
            <div class=css::footer>
                <div class=css::label>
                    <span class=css::name title=name.clone()>{name.clone()}</span>
                    {move || folder_summary.get().map(|summary| view! {
                        <span class=css::meta>{summary}</span>
                    })}
                </div>
                {actions}
            </div>
        </div>
    }
}
