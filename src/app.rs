//! Root application module.
//!
//! Contains the main App component, the AppContext shared by every
//! component, and the glue between browser events and the session.

use leptos::prelude::*;
use stories_core::{DialogOutcome, StoreResult, StoriesSession};

use crate::components::stories::StoriesPage;
use crate::models::StoriesProps;
use crate::utils::{dom, revoke_all};

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and read by children through
/// `use_context::<AppContext>()`. All folder, preview and menu state sits in
/// the one session signal so a gesture can never leave two views disagreeing.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Tree, navigation and overlay state.
    pub session: RwSignal<StoriesSession>,

    /// Last failure message, shown inline until the next successful action.
    pub notice: RwSignal<Option<String>>,
}

impl AppContext {
    pub fn new(props: &StoriesProps) -> Self {
        Self {
            session: RwSignal::new(StoriesSession::new(props.capability())),
            notice: RwSignal::new(None),
        }
    }

    /// Run a fallible session operation.
    ///
    /// Errors are logged and surfaced as the notice; the session keeps its
    /// previous state.
    pub fn apply<T>(
        &self,
        action: impl FnOnce(&mut StoriesSession) -> StoreResult<T>,
    ) -> Option<T> {
        match self.session.try_update(action)? {
            Ok(value) => {
                self.notice.set(None);
                Some(value)
            }
            Err(e) => {
                web_sys::console::warn_1(&format!("{} error: {e}", e.kind()).into());
                self.notice.set(Some(e.to_string()));
                None
            }
        }
    }

    /// Release the blob URLs of anything a dialog removed.
    pub fn settle(&self, outcome: Option<DialogOutcome>) {
        if let Some(outcome) = outcome {
            revoke_all(outcome.released());
        }
    }

    /// Close every overlay and release all blob URLs.
    pub fn teardown(&self) {
        if let Some(refs) = self.session.try_update(|s| s.teardown()) {
            web_sys::console::log_1(&format!("Released {} uploads", refs.len()).into());
            revoke_all(&refs);
        }
    }

    pub fn dismiss_notice(&self) {
        self.notice.set(None);
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext from the host props
/// - Wraps the app in an ErrorBoundary for graceful error handling
/// - Renders the Stories page
#[component]
pub fn App(host: StoriesProps) -> impl IntoView {
    let ctx = AppContext::new(&host);
    provide_context(ctx);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    min-height: 60vh;
                    padding: 2rem;
                    font-family: system-ui, sans-serif;
                ">
                    <h1 style="color: #dc2626; margin-bottom: 1rem;">
                        "Something went wrong"
                    </h1>
                    <ul style="color: #6b7280; margin-bottom: 2rem;">
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button
                        on:click=move |_| dom::reload()
                        style="
                            background: #2563eb;
                            color: white;
                            border: none;
                            padding: 0.75rem 2rem;
                            border-radius: 6px;
                            cursor: pointer;
                        "
                    >
                        "Reload Page"
                    </button>
                </div>
            }
        >
            <StoriesPage />
        </ErrorBoundary>
    }
}
