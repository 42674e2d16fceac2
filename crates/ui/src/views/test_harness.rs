use std::sync::Arc;

use arcade_core::ArcadeContent;
use arcade_core::screen::{Screen, ScreenRouter};
use arcade_core::time::fixed_now;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use services::{ArcadeService, ArcadeSession, Clock};
use storage::repository::Storage;

use crate::context::{AppContext, build_app_context, use_arcade_state};
use crate::routes::ScreenSwitch;

#[derive(Props, Clone)]
struct ViewHarnessProps {
    ctx: AppContext,
    screen: Screen,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewHarnessRoot(props: ViewHarnessProps) -> Element {
    use_context_provider(|| props.ctx.clone());
    use_arcade_state(&props.ctx);
    // Replaces the home router provided above.
    use_context_provider(|| {
        let mut router = ScreenRouter::default();
        router.show(props.screen);
        Signal::new(router)
    });
    rsx! { ScreenSwitch {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn test_arcade(content: ArcadeContent) -> Arc<ArcadeService> {
    let storage = Storage::in_memory();
    Arc::new(ArcadeService::new(
        Clock::fixed(fixed_now()),
        content,
        Arc::clone(&storage.session),
    ))
}

pub async fn setup_view_harness(screen: Screen) -> ViewHarness {
    let arcade = test_arcade(ArcadeContent::builtin());
    let session = arcade.start_session().await;
    mount_view(screen, arcade, session)
}

/// Mount `screen` over a session the caller already drove through the service.
pub fn mount_view(
    screen: Screen,
    arcade: Arc<ArcadeService>,
    session: ArcadeSession,
) -> ViewHarness {
    let ctx = build_app_context(arcade, session);
    let mut harness = ViewHarness {
        dom: VirtualDom::new_with_props(ViewHarnessRoot, ViewHarnessProps { ctx, screen }),
    };
    harness.rebuild();
    harness
}
