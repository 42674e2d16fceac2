use std::time::Duration;

use arcade_core::effects::{CONFETTI_COUNT, CONFETTI_LIFETIME_MS, ConfettiPiece, confetti_burst};
use arcade_core::screen::Screen;
use dioxus::prelude::*;

use super::ScreenHeader;

fn piece_style(piece: &ConfettiPiece) -> String {
    format!(
        concat!(
            "left:{:.2}vw;--hue:{};--drift:{:.1}px;--fall:{:.1}vh;--rot:{:.1}deg;",
            "animation-duration:{}ms;"
        ),
        piece.left_vw,
        piece.hue,
        piece.drift_px,
        piece.fall_vh,
        piece.rotation_deg,
        piece.duration_ms
    )
}

#[component]
pub fn FinalView() -> Element {
    let mut burst = use_signal(|| 0_u64);
    let mut pieces = use_signal(Vec::<ConfettiPiece>::new);

    let celebrate = move |_| {
        let id = burst() + 1;
        burst.set(id);
        pieces.set(confetti_burst(&mut rand::rng(), CONFETTI_COUNT));
        spawn(async move {
            tokio::time::sleep(Duration::from_millis(CONFETTI_LIFETIME_MS)).await;
            // A newer burst owns the layer now.
            if burst() == id {
                pieces.set(Vec::new());
            }
        });
    };

    let layer = pieces
        .read()
        .iter()
        .enumerate()
        .map(|(idx, piece)| {
            let style = piece_style(piece);
            rsx! {
                div { key: "{idx}", class: "confetti", style: "{style}" }
            }
        })
        .collect::<Vec<_>>();

    rsx! {
        div { class: "page final-page",
            ScreenHeader { screen: Screen::Final }
            p { class: "final-message",
                "Happy Valentine's Day! Every game was just an excuse to say I love you. 💘"
            }
            div { class: "button-row",
                button {
                    id: "finalConfetti",
                    class: "btn btn-danger",
                    r#type: "button",
                    onclick: celebrate,
                    "Celebrate 🎉"
                }
            }
            div { class: "confetti-layer", "aria-hidden": "true", {layer.into_iter()} }
        }
    }
}
