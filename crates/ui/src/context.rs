use std::sync::Arc;

use arcade_core::screen::ScreenRouter;
use dioxus::prelude::*;
use services::{ArcadeService, ArcadeSession};
use tokio::sync::Mutex;

use crate::vm::ArcadeVm;

/// Shared handles every view needs.
///
/// The session sits behind an async mutex so a handler can hold it across
/// the progress write; views render from the `ArcadeVm` signal instead.
#[derive(Clone)]
pub struct AppContext {
    arcade: Arc<ArcadeService>,
    session: Arc<Mutex<ArcadeSession>>,
    initial: ArcadeVm,
}

impl AppContext {
    #[must_use]
    pub fn new(arcade: Arc<ArcadeService>, session: ArcadeSession) -> Self {
        let initial = ArcadeVm::capture(&arcade, &session);
        Self {
            arcade,
            session: Arc::new(Mutex::new(session)),
            initial,
        }
    }

    #[must_use]
    pub fn arcade(&self) -> Arc<ArcadeService> {
        Arc::clone(&self.arcade)
    }

    #[must_use]
    pub fn session(&self) -> Arc<Mutex<ArcadeSession>> {
        Arc::clone(&self.session)
    }

    #[must_use]
    pub fn initial_vm(&self) -> ArcadeVm {
        self.initial.clone()
    }
}

/// Build an `AppContext` from the arcade service and this sitting's session.
#[must_use]
pub fn build_app_context(arcade: Arc<ArcadeService>, session: ArcadeSession) -> AppContext {
    AppContext::new(arcade, session)
}

/// Provide the snapshot and router signals below the component that calls this.
pub fn use_arcade_state(ctx: &AppContext) {
    let initial = ctx.initial_vm();
    use_context_provider(move || Signal::new(initial));
    use_context_provider(|| Signal::new(ScreenRouter::default()));
}

/// Run `op` against the locked session, then publish a fresh snapshot.
pub async fn apply<F, Fut>(ctx: &AppContext, mut vm: Signal<ArcadeVm>, op: F)
where
    F: FnOnce(Arc<ArcadeService>, tokio::sync::OwnedMutexGuard<ArcadeSession>) -> Fut,
    Fut: std::future::Future<Output = tokio::sync::OwnedMutexGuard<ArcadeSession>>,
{
    let guard = ctx.session().lock_owned().await;
    let guard = op(ctx.arcade(), guard).await;
    vm.set(ArcadeVm::capture(&ctx.arcade, &guard));
}
