mod guess;
mod memory;
mod notes;

pub use guess::{GUESSES_TO_COMPLETE, GuessCounter, GuessReply, response_index};
pub use memory::{FlipBack, FlipOutcome, IgnoreReason, MemoryGame};
pub use notes::{HIDDEN_NOTE_TEXT, NOTES_TO_COMPLETE, NotesCycler, note_text};
