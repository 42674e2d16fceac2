use arcade_core::model::CardId;
use arcade_core::screen::Screen;
use dioxus::prelude::*;
use tracing::warn;

use super::ScreenHeader;
use crate::context::{AppContext, apply};
use crate::vm::{ArcadeVm, MemoryVm};

/// Flip a card; on a mismatch, wait out the delay and turn the pair back over.
///
/// The task is not owned by the memory screen: leaving mid-delay must still
/// unlock the board.
pub(crate) fn flip(ctx: AppContext, mut vm: Signal<ArcadeVm>, id: CardId) {
    spawn_forever(async move {
        let scheduled = {
            let arcade = ctx.arcade();
            let mut session = ctx.session().lock_owned().await;
            let scheduled = match arcade.flip_card(&mut session, id).await {
                Ok(result) => result.flip_back,
                Err(err) => {
                    warn!(error = %err, "memory progress not saved");
                    None
                }
            };
            vm.set(ArcadeVm::capture(&arcade, &session));
            scheduled
        };

        let Some(scheduled) = scheduled else {
            return;
        };
        scheduled.wait().await;
        apply(&ctx, vm, move |arcade, mut session| async move {
            arcade.resolve_flip_back(&mut session, &scheduled);
            session
        })
        .await;
    });
}

#[component]
pub fn MemoryView() -> Element {
    let ctx = use_context::<AppContext>();
    let vm = use_context::<Signal<ArcadeVm>>();
    let memory = vm().memory;

    let restart_ctx = ctx.clone();
    let restart = move |_| {
        let ctx = restart_ctx.clone();
        spawn(async move {
            apply(&ctx, vm, |arcade, mut session| async move {
                if let Err(err) = arcade.restart_memory(&mut session).await {
                    warn!(error = %err, "memory restart not saved");
                }
                session
            })
            .await;
        });
    };

    let board = match memory {
        MemoryVm::Unavailable => rsx! {
            div { id: "memoryGrid",
                div { class: "alert alert-warning mb-0",
                    "No photo pairs yet. Add some to the arcade content to play."
                }
            }
        },
        MemoryVm::Board {
            tiles,
            won,
            match_count,
            pair_count,
            ..
        } => {
            let grid = tiles.into_iter().map(|tile| {
                let ctx = ctx.clone();
                let class = tile.class();
                let id = tile.id;
                rsx! {
                    button {
                        key: "{tile.id}",
                        class: "{class}",
                        r#type: "button",
                        "aria-label": "memory card",
                        onclick: move |_| flip(ctx.clone(), vm, id),
                        if tile.face_up {
                            img {
                                class: "card-photo",
                                src: "{tile.image}",
                                alt: "{tile.alt}",
                                draggable: false,
                            }
                        } else {
                            span { class: "card-back", "💗" }
                        }
                    }
                }
            });
            rsx! {
                p { class: "view-subtitle", "Pairs found: {match_count} / {pair_count}" }
                div { id: "memoryGrid", class: "memory-grid", {grid} }
                if won {
                    div { id: "memoryWin", class: "alert alert-success",
                        "You matched them all! 💞"
                    }
                }
            }
        }
    };

    rsx! {
        div { class: "page memory-page",
            ScreenHeader { screen: Screen::Memory }
            {board}
            div { class: "button-row",
                button {
                    id: "memoryRestart",
                    class: "btn btn-outline-danger",
                    r#type: "button",
                    onclick: restart,
                    "Restart"
                }
            }
        }
    }
}
