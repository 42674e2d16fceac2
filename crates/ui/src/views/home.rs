use arcade_core::screen::{Screen, ScreenRouter};
use dioxus::prelude::*;

use crate::vm::ArcadeVm;

#[component]
pub fn HomeView() -> Element {
    let vm = use_context::<Signal<ArcadeVm>>();
    let router = use_context::<Signal<ScreenRouter>>();
    let snapshot = vm();

    let entries = [Screen::Notes, Screen::Memory, Screen::Guess]
        .into_iter()
        .zip(snapshot.badges.iter().cloned())
        .map(|(screen, badge)| {
            let mut router = router;
            let class = badge.class();
            let status = if badge.done { "Done" } else { "Not yet" };
            rsx! {
                li { class: "arcade-entry",
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        "data-screen": "{screen.id()}",
                        onclick: move |_| {
                            router.write().show(screen);
                        },
                        "{badge.label}"
                    }
                    span { id: "{badge.id}", class: "{class}", "{status}" }
                }
            }
        });

    let mut router = router;
    let final_class = snapshot.final_badge.class();
    rsx! {
        div { class: "page home-page",
            header { class: "view-header",
                h1 { class: "view-title", "{Screen::Home.title()}" }
                p { class: "view-subtitle", "Finish all three games to unlock a surprise." }
            }
            ul { class: "arcade-list", {entries} }
            div { class: "arcade-final",
                span { id: "badgeFinal", class: "{final_class}", "Final" }
                if snapshot.final_unlocked {
                    button {
                        id: "finalBtn",
                        class: "btn btn-danger",
                        r#type: "button",
                        onclick: move |_| {
                            router.write().show(Screen::Final);
                        },
                        "Open the final surprise ❤️"
                    }
                }
            }
        }
    }
}
