use arcade_core::screen::Screen;
use dioxus::prelude::*;
use tracing::warn;

use super::ScreenHeader;
use crate::context::{AppContext, apply};
use crate::vm::ArcadeVm;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum NotesAction {
    Reveal,
    Next,
    Reset,
}

#[component]
pub fn NotesView() -> Element {
    let ctx = use_context::<AppContext>();
    let vm = use_context::<Signal<ArcadeVm>>();
    let notes = vm().notes;

    let run = move |action: NotesAction| {
        let ctx = ctx.clone();
        spawn(async move {
            apply(&ctx, vm, move |arcade, mut session| async move {
                let result = match action {
                    NotesAction::Reveal => arcade.reveal_note(&mut session).await.map(|_| ()),
                    NotesAction::Next => arcade.next_note(&mut session).await,
                    NotesAction::Reset => arcade.reset_notes(&mut session).await,
                };
                if let Err(err) = result {
                    warn!(error = %err, ?action, "notes progress not saved");
                }
                session
            })
            .await;
        });
    };

    rsx! {
        div { class: "page notes-page",
            ScreenHeader { screen: Screen::Notes }
            div { class: "note-card",
                p { id: "noteText", class: "note-text", "{notes.text}" }
            }
            p { class: "view-subtitle", "Revealed: {notes.revealed_count}" }
            div { class: "button-row",
                button {
                    id: "revealNoteBtn",
                    class: "btn btn-danger",
                    r#type: "button",
                    disabled: !notes.can_reveal,
                    onclick: {
                        let run = run.clone();
                        move |_| run(NotesAction::Reveal)
                    },
                    "Reveal"
                }
                button {
                    id: "nextNoteBtn",
                    class: "btn btn-outline-danger",
                    r#type: "button",
                    onclick: {
                        let run = run.clone();
                        move |_| run(NotesAction::Next)
                    },
                    "Next"
                }
                button {
                    id: "notesReset",
                    class: "btn btn-link",
                    r#type: "button",
                    onclick: move |_| run(NotesAction::Reset),
                    "Reset"
                }
            }
        }
    }
}
