use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use arcade_core::ArcadeContent;
use arcade_core::games::HIDDEN_NOTE_TEXT;
use arcade_core::model::CardId;
use arcade_core::screen::Screen;
use arcade_core::time::fixed_now;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use services::{ArcadeService, ArcadeSession, Clock};
use storage::repository::Storage;

use super::memory::flip;
use super::test_harness::{mount_view, setup_view_harness, test_arcade};
use crate::context::{AppContext, build_app_context, use_arcade_state};
use crate::vm::ArcadeVm;

async fn complete_everything(arcade: &ArcadeService, session: &mut ArcadeSession) {
    for _ in 0..3 {
        arcade.reveal_note(session).await.expect("reveal");
        arcade.next_note(session).await.expect("next");
    }
    for _ in 0..3 {
        arcade.submit_guess(session).await.expect("guess");
    }
    match_every_pair(arcade, session).await;
}

async fn match_every_pair(arcade: &ArcadeService, session: &mut ArcadeSession) {
    let mut pairs: HashMap<_, Vec<CardId>> = HashMap::new();
    for card in session.memory().game().expect("board").cards() {
        pairs.entry(card.match_id()).or_default().push(card.id());
    }
    for ids in pairs.values() {
        arcade.flip_card(session, ids[0]).await.expect("flip");
        arcade.flip_card(session, ids[1]).await.expect("flip");
    }
}

#[tokio::test(flavor = "current_thread")]
async fn home_hides_final_button_until_all_complete() {
    let harness = setup_view_harness(Screen::Home).await;
    let html = harness.render();

    assert!(html.contains("badgeNotes"), "missing notes badge in {html}");
    assert!(html.contains("Not yet"), "missing pending status in {html}");
    assert!(!html.contains("finalBtn"), "final button leaked into {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn home_shows_final_button_once_everything_is_done() {
    let arcade = test_arcade(ArcadeContent::builtin());
    let mut session = arcade.start_session().await;
    complete_everything(&arcade, &mut session).await;
    assert!(session.all_complete());

    let harness = mount_view(Screen::Home, arcade, session);
    let html = harness.render();
    assert!(html.contains("finalBtn"), "missing final button in {html}");
    assert!(html.contains("badge text-bg-success"), "missing done badge in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn notes_view_starts_with_placeholder() {
    let harness = setup_view_harness(Screen::Notes).await;
    let html = harness.render();

    assert!(html.contains(HIDDEN_NOTE_TEXT), "missing placeholder in {html}");
    assert!(html.contains("revealNoteBtn"), "missing reveal button in {html}");
    assert!(html.contains("notesBack"), "missing back button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn notes_view_shows_revealed_note() {
    let arcade = test_arcade(ArcadeContent::builtin());
    let mut session = arcade.start_session().await;
    arcade.reveal_note(&mut session).await.expect("reveal");
    let expected = arcade.content().notes[0].clone();

    let harness = mount_view(Screen::Notes, arcade, session);
    let html = harness.render();
    assert!(html.contains(&expected), "missing note text in {html}");
    assert!(html.contains("Revealed: 1"), "missing counter in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn memory_view_renders_sixteen_face_down_tiles() {
    let harness = setup_view_harness(Screen::Memory).await;
    let html = harness.render();

    assert_eq!(html.matches("card-tile face-down").count(), 16, "{html}");
    assert!(html.contains("Pairs found: 0 / 8"), "missing counter in {html}");
    assert!(!html.contains("memoryWin"), "win shown early in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn memory_view_without_pairs_shows_placeholder() {
    let arcade = test_arcade(ArcadeContent::builtin().with_photo_pairs(Vec::new()));
    let session = arcade.start_session().await;

    let harness = mount_view(Screen::Memory, arcade, session);
    let html = harness.render();
    assert!(html.contains("No photo pairs yet"), "missing placeholder in {html}");
    assert!(!html.contains("card-tile"), "tiles rendered in {html}");
    assert!(html.contains("memoryRestart"), "missing restart in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn memory_view_shows_win_once_every_pair_matches() {
    let arcade = test_arcade(ArcadeContent::builtin());
    let mut session = arcade.start_session().await;
    match_every_pair(&arcade, &mut session).await;

    let harness = mount_view(Screen::Memory, arcade, session);
    let html = harness.render();
    assert!(html.contains("memoryWin"), "missing win alert in {html}");
    assert!(html.contains("Pairs found: 8 / 8"), "missing counter in {html}");
    assert_eq!(html.matches("card-tile matched").count(), 16, "{html}");
}

#[derive(Props, Clone)]
struct LeaveMidDelayProps {
    ctx: AppContext,
    card: CardId,
    leave_after: Duration,
}

impl PartialEq for LeaveMidDelayProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

/// Mounts a memory child that flips `card`, then unmounts it after `leave_after`.
#[component]
fn LeaveMidDelayRoot(props: LeaveMidDelayProps) -> Element {
    use_context_provider(|| props.ctx.clone());
    use_arcade_state(&props.ctx);
    let mut mounted = use_signal(|| true);
    let leave_after = props.leave_after;
    use_future(move || async move {
        tokio::time::sleep(leave_after).await;
        mounted.set(false);
    });

    rsx! {
        if mounted() {
            FlipOnMount { card: props.card }
        }
    }
}

#[component]
fn FlipOnMount(card: CardId) -> Element {
    let ctx = use_context::<AppContext>();
    let vm = use_context::<Signal<ArcadeVm>>();
    use_hook(move || flip(ctx, vm, card));
    rsx! { div { class: "memory-page" } }
}

async fn drive_for(dom: &mut VirtualDom, total: Duration) {
    let deadline = tokio::time::Instant::now() + total;
    while tokio::time::Instant::now() < deadline {
        let _ = tokio::time::timeout(Duration::from_millis(10), dom.wait_for_work()).await;
        dom.render_immediate(&mut NoOpMutations);
    }
}

#[tokio::test(flavor = "current_thread")]
async fn mismatch_unlocks_even_after_leaving_memory_screen() {
    let storage = Storage::in_memory();
    let arcade = Arc::new(
        ArcadeService::new(
            Clock::fixed(fixed_now()),
            ArcadeContent::builtin(),
            Arc::clone(&storage.session),
        )
        .with_flip_back_delay(Duration::from_millis(100)),
    );
    let mut session = arcade.start_session().await;
    let (first, second) = {
        let cards = session.memory().game().expect("board").cards();
        let first = &cards[0];
        let other = cards
            .iter()
            .find(|card| card.match_id() != first.match_id())
            .expect("card from another pair");
        (first.id(), other.id())
    };
    arcade.flip_card(&mut session, first).await.expect("flip");

    let ctx = build_app_context(arcade, session);
    let mut dom = VirtualDom::new_with_props(
        LeaveMidDelayRoot,
        LeaveMidDelayProps {
            ctx: ctx.clone(),
            card: second,
            leave_after: Duration::from_millis(20),
        },
    );
    dom.rebuild_in_place();
    drive_for(&mut dom, Duration::from_millis(400)).await;

    let session = ctx.session();
    let session = session.lock().await;
    let game = session.memory().game().expect("board");
    assert!(!game.is_locked(), "board stuck locked after leaving memory screen");
    assert!(game.flipped().is_empty(), "flipped: {:?}", game.flipped());
    assert_eq!(game.match_count(), 0);
}

#[tokio::test(flavor = "current_thread")]
async fn guess_view_shows_latest_response() {
    let arcade = test_arcade(ArcadeContent::builtin());
    let mut session = arcade.start_session().await;
    arcade.submit_guess(&mut session).await.expect("guess");
    arcade.submit_guess(&mut session).await.expect("guess");
    let expected = arcade.content().guess_responses[1].clone();

    let harness = mount_view(Screen::Guess, arcade, session);
    let html = harness.render();
    assert!(html.contains(&expected), "missing response in {html}");
    assert!(html.contains("Guesses: 2"), "missing count in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn final_view_renders_confetti_button() {
    let harness = setup_view_harness(Screen::Final).await;
    let html = harness.render();

    assert!(html.contains("finalConfetti"), "missing confetti button in {html}");
    assert!(html.contains("finalScreen"), "missing screen id in {html}");
    assert!(!html.contains("class=\"confetti\""), "confetti before click in {html}");
}
