use arcade_core::screen::{Screen, ScreenRouter};
use dioxus::prelude::*;

use crate::views::{FinalView, GuessView, HomeView, MemoryView, NotesView};

/// Render whichever screen the router currently shows.
#[component]
pub fn ScreenSwitch() -> Element {
    let router = use_context::<Signal<ScreenRouter>>();
    let screen = router().current();

    let view = match screen {
        Screen::Home => rsx! { HomeView {} },
        Screen::Notes => rsx! { NotesView {} },
        Screen::Memory => rsx! { MemoryView {} },
        Screen::Guess => rsx! { GuessView {} },
        Screen::Final => rsx! { FinalView {} },
    };

    rsx! {
        section { id: "{screen.id()}", class: "screen", {view} }
    }
}
