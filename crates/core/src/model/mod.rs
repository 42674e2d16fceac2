mod card;
mod ids;
mod progress;

pub use card::{Card, CardSide, PhotoPair};
pub use ids::{CardId, MatchId, RoundId};
pub use progress::{Completion, GuessProgress, MiniGame, NotesProgress, ProgressState};
