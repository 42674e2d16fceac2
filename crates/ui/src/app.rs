use dioxus::prelude::*;

use crate::context::{AppContext, use_arcade_state};
use crate::routes::ScreenSwitch;
use crate::views::HeartsBackground;

#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();
    use_arcade_state(&ctx);

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }
        document::Title { "Valentine Arcade" }

        HeartsBackground {}
        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                ScreenSwitch {}
            }
        }
    }
}
