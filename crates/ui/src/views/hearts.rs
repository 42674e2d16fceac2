use std::time::Duration;

use arcade_core::effects::{HEART_POOL_SIZE, HEART_SPAWN_INTERVAL_MS, HeartSprite};
use dioxus::prelude::*;

fn fresh_pool() -> Vec<HeartSprite> {
    let mut rng = rand::rng();
    (0..HEART_POOL_SIZE)
        .map(|_| HeartSprite::random(&mut rng))
        .collect()
}

fn heart_style(heart: &HeartSprite) -> String {
    format!(
        "left:{:.2}vw;font-size:{:.0}px;opacity:{:.2};animation-duration:{:.1}s;",
        heart.left_vw, heart.font_px, heart.opacity, heart.duration_s
    )
}

/// Floating hearts behind every screen. One sprite is replaced per tick so
/// the pool never grows.
#[component]
pub fn HeartsBackground() -> Element {
    let mut hearts = use_signal(fresh_pool);
    let mut slot = use_signal(|| 0_usize);

    use_future(move || async move {
        loop {
            tokio::time::sleep(Duration::from_millis(HEART_SPAWN_INTERVAL_MS)).await;
            let idx = slot();
            let sprite = HeartSprite::random(&mut rand::rng());
            if let Some(heart) = hearts.write().get_mut(idx) {
                *heart = sprite;
            }
            slot.set((idx + 1) % HEART_POOL_SIZE);
        }
    });

    rsx! {
        div { class: "hearts-bg", "aria-hidden": "true",
            for (idx, heart) in hearts.read().iter().enumerate() {
                span {
                    key: "{idx}",
                    class: "heart",
                    style: heart_style(heart),
                    "{heart.glyph}"
                }
            }
        }
    }
}
