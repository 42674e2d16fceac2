mod final_view;
mod guess;
mod hearts;
mod home;
mod memory;
mod notes;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use final_view::FinalView;
pub use guess::GuessView;
pub use hearts::HeartsBackground;
pub use home::HomeView;
pub use memory::MemoryView;
pub use notes::NotesView;

use arcade_core::screen::{Screen, ScreenRouter};
use dioxus::prelude::*;

/// Header shared by every game screen: title plus a back button to home.
#[component]
fn ScreenHeader(screen: Screen) -> Element {
    let mut router = use_context::<Signal<ScreenRouter>>();
    let back_id = format!("{}Back", screen.id().trim_end_matches("Screen"));

    rsx! {
        header { class: "view-header",
            button {
                id: "{back_id}",
                class: "btn btn-outline-secondary btn-sm",
                r#type: "button",
                onclick: move |_| {
                    router.write().back();
                },
                "← Back"
            }
            h2 { class: "view-title", "{screen.title()}" }
        }
    }
}
