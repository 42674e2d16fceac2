use arcade_core::screen::Screen;
use dioxus::prelude::*;
use tracing::warn;

use super::ScreenHeader;
use crate::context::{AppContext, apply};
use crate::vm::ArcadeVm;

#[component]
pub fn GuessView() -> Element {
    let ctx = use_context::<AppContext>();
    let vm = use_context::<Signal<ArcadeVm>>();
    let mut input = use_signal(String::new);
    let guess = vm().guess;

    let submit_ctx = ctx.clone();
    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let ctx = submit_ctx.clone();
        spawn(async move {
            apply(&ctx, vm, |arcade, mut session| async move {
                if let Err(err) = arcade.submit_guess(&mut session).await {
                    warn!(error = %err, "guess progress not saved");
                }
                session
            })
            .await;
        });
    };

    let on_reset = move |_| {
        input.set(String::new());
        let ctx = ctx.clone();
        spawn(async move {
            apply(&ctx, vm, |arcade, mut session| async move {
                if let Err(err) = arcade.reset_guess(&mut session).await {
                    warn!(error = %err, "guess reset not saved");
                }
                session
            })
            .await;
        });
    };

    rsx! {
        div { class: "page guess-page",
            ScreenHeader { screen: Screen::Guess }
            form { class: "guess-form", onsubmit: on_submit,
                input {
                    id: "guessInput",
                    class: "form-control",
                    r#type: "text",
                    placeholder: "Type a number…",
                    value: "{input}",
                    oninput: move |evt| input.set(evt.value()),
                }
                button { class: "btn btn-danger", r#type: "submit", "Guess" }
            }
            if let Some(response) = guess.response {
                p { id: "guessResponse", class: "guess-response", "{response}" }
            } else {
                p { id: "guessResponse", class: "guess-response muted" }
            }
            p { class: "view-subtitle", "Guesses: {guess.count}" }
            div { class: "button-row",
                button {
                    id: "guessReset",
                    class: "btn btn-link",
                    r#type: "button",
                    onclick: on_reset,
                    "Reset"
                }
            }
        }
    }
}
