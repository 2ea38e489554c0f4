use dioxus::prelude::*;

use crate::components::navbar::Navbar;
use crate::pages::scripture_page::ScripturePage;

/// The three views (welcome, results, chapter) share one route; switching
/// between them is driven by the result navigator, not the URL.
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]


    #[route("/")]
    ScripturePage {},

}
