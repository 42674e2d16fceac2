mod arcade_vm;

pub use arcade_vm::{ArcadeVm, BadgeVm, GuessVm, MemoryVm, NotesVm, TileVm};
