use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use crate::views::{MenuView, SessionView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", MenuView)] Menu {},
        #[route("/session/:operation/:target/:seconds", SessionView)]
        Session { operation: String, target: String, seconds: u32 },
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            header { class: "masthead",
                h1 { "Arithmetic Drill" }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}
