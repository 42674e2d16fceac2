#![forbid(unsafe_code)]

pub mod app_services;
pub mod arcade_service;
pub mod error;
pub mod flip_back;
pub mod progress_store;
pub mod session;

pub use arcade_core::Clock;

pub use app_services::AppServices;
pub use arcade_service::{ArcadeService, DEFAULT_FLIP_BACK_DELAY, FlipResult};
pub use error::{AppServicesError, ArcadeError};
pub use flip_back::ScheduledFlipBack;
pub use progress_store::{ProgressStore, STORAGE_KEY};
pub use session::{ArcadeSession, MemoryBoard};
