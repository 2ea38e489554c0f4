//! Page shell: title bar, scripture sidebar and footer around the routed page.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_navigation_icons::{MdClose, MdMenu};

use crate::components::error_boundary::GlobalErrorBoundary;
use crate::components::scripture_sidebar::ScriptureSidebar;
use crate::components::suspend_boundary::SuspendWrapper;
use crate::data_definitions::app_state::AppStateControl;
use crate::routes::Route;


/// Shared layout component.
#[component]
pub fn Navbar() -> Element {
    let app_state = use_context::<AppStateControl>();
    let sidebar_width = if *app_state.sidebar_open.read() { "320px" } else { "0px" };

    rsx! {
        div {
            id: "x-nav-container",
            style: "
                display:flex;
                flex-direction: column;
                width: 100%;
                height: 100vh;
                background-color: #F9FAFB;
            ",

            div {
                id: "x-nav-body",
                style: "
                    display:flex;
                    flex-direction: row;
                    flex-grow: 1;
                    min-height: 0;
                ",

                div {
                    id: "x-nav-sidebar",
                    style: "
                        width: {sidebar_width};
                        flex-shrink: 0;
                        overflow-x: hidden;
                        overflow-y: auto;
                        background-color: white;
                        border-right: 1px solid #E5E7EB;
                        transition: width 0.3s;
                    ",
                    SuspendWrapper { ScriptureSidebar {} }
                }

                div {
                    id: "x-page-container",
                    style: "
                        display:flex;
                        flex-direction: column;
                        flex-grow:1;
                        min-width: 100px;
                        overflow-y: auto;
                    ",
                    NavbarHeader {}
                    GlobalErrorBoundary {
                        boundary_name: "Navbar".to_string(),
                        Outlet::<Route> {}
                    }
                }
            }

            NavbarFooter {}
        }
    }
}

#[component]
fn NavbarHeader() -> Element {
    let mut sidebar_open = use_context::<AppStateControl>().sidebar_open;

    rsx! {
        header {
            style: "
                display:flex;
                align-items: center;
                gap: 16px;
                background-color: white;
                border-bottom: 1px solid #E5E7EB;
                padding: 16px 24px;
                flex-shrink: 0;
            ",
            button {
                style: "border: none; background: none; cursor: pointer; padding: 4px;",
                onclick: move |_| {
                    let open = *sidebar_open.read();
                    sidebar_open.set(!open);
                },
                if *sidebar_open.read() {
                    Icon { icon: MdClose, style: "width: 20px; height: 20px; color: #111827;" }
                } else {
                    Icon { icon: MdMenu, style: "width: 20px; height: 20px; color: #111827;" }
                }
            }
            h1 {
                style: "font-size: 20px; font-weight: 600; color: #111827; margin: 0;",
                "Search Diligently"
            }
        }
    }
}

#[component]
fn NavbarFooter() -> Element {
    rsx! {
        footer {
            style: "
                background-color: white;
                border-top: 1px solid #E5E7EB;
                padding: 12px;
                text-align: center;
                font-size: 14px;
                color: #4B5563;
                flex-shrink: 0;
            ",
            "Scripture search, version 1"
        }
    }
}
