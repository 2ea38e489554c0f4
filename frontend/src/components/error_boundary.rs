//! Error boundaries for render failures.
//!
//! Collaborator failures never reach these: they are logged and leave the
//! current view in place. These only catch component errors.

use dioxus::{logger::tracing, prelude::*};

/// Full-width fallback with a link back to a fresh search.
#[component]
pub fn GlobalErrorBoundary(boundary_name: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |err: ErrorContext| {
                tracing::error!("render failure under {boundary_name}: {err:?}");
                rsx! {
                    div {
                        style: "display: flex; flex-direction: column; gap: 12px; padding: 24px;",
                        h2 { style: "color: #B91C1C; font-size: 28px; margin: 0;", "Something went wrong" }
                        p { style: "color: #7F1D1D; font-size: 16px; margin: 0;", "While rendering: {boundary_name}" }
                        a {
                            href: "/",
                            style: "color: #2563EB; font-size: 16px;",
                            "Start a new search"
                        }
                        pre {
                            style: "color: #111827; border: 1px solid #FCA5A5; border-radius: 6px; padding: 8px; text-wrap: auto;",
                            "{err:#?}"
                        }
                    }
                }
            },
            children
        }
    }
}

/// Inline fallback for one panel, with a retry that re-renders it.
#[component]
pub fn PanelErrorBoundary(children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: |err: ErrorContext| {
                let error_txt = match err.error() {
                    Some(e) => format!("{:#?}", e.0),
                    None => "Unknown error".to_string(),
                };
                rsx! {
                    div {
                        style: "display: flex; flex-direction: column; align-items: center; gap: 8px; padding: 12px;",
                        p { style: "color: #B91C1C; font-size: 16px; margin: 0;", "This panel failed to load" }
                        pre {
                            style: "color: #7F1D1D; font-size: 12px; max-width: 280px; max-height: 200px; overflow: auto; text-wrap: auto;",
                            "{error_txt}"
                        }
                        button {
                            style: "color: #2563EB; border: 1px solid #2563EB; border-radius: 6px; background: white; padding: 4px 10px; cursor: pointer;",
                            onclick: move |_| err.clear_errors(),
                            "Try Again"
                        }
                    }
                }
            },
            {children}
        }
    }
}
