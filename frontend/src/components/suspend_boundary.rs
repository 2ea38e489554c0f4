use dioxus::prelude::*;

use crate::components::error_boundary::PanelErrorBoundary;

/// Suspense with a "Loading..." placeholder, plus a panel error boundary.
#[component]
pub fn SuspendWrapper(children: Element) -> Element {
    rsx! {
        SuspenseBoundary {
            fallback: |_s: SuspenseContext| rsx! {
                div {
                    style: "color: #4B5563; font-size: 16px; padding: 16px; text-align: center;",
                    "Loading..."
                }
            },
            PanelErrorBoundary { children }
        }
    }
}
