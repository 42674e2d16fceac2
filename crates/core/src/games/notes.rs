use crate::model::NotesProgress;

/// Reveals needed before the Love Notes game counts as complete.
pub const NOTES_TO_COMPLETE: u32 = 3;

/// Text shown while the current note is hidden.
pub const HIDDEN_NOTE_TEXT: &str = "Tap “Reveal” to get a love note…";

/// Text to display for the given notes state.
#[must_use]
pub fn note_text<'a>(notes: &'a [String], state: &NotesProgress) -> &'a str {
    if !state.is_revealed || notes.is_empty() {
        return HIDDEN_NOTE_TEXT;
    }
    &notes[state.index % notes.len()]
}

/// Reveal/hide toggle over a cyclic list of notes.
pub struct NotesCycler<'a> {
    notes: &'a [String],
    state: &'a mut NotesProgress,
    completed: &'a mut bool,
}

impl<'a> NotesCycler<'a> {
    pub fn new(notes: &'a [String], state: &'a mut NotesProgress, completed: &'a mut bool) -> Self {
        Self {
            notes,
            state,
            completed,
        }
    }

    /// Show the current note. Returns `false` when it was already showing.
    pub fn reveal(&mut self) -> bool {
        if self.state.is_revealed {
            return false;
        }

        self.state.is_revealed = true;
        self.state.revealed_count = self.state.revealed_count.saturating_add(1);
        if self.state.revealed_count >= NOTES_TO_COMPLETE {
            *self.completed = true;
        }
        true
    }

    /// Move to the next note and hide it until the next reveal.
    pub fn advance(&mut self) {
        self.state.index = if self.notes.is_empty() {
            0
        } else {
            (self.state.index + 1) % self.notes.len()
        };
        self.state.is_revealed = false;
    }

    pub fn reset(&mut self) {
        *self.state = NotesProgress::default();
        *self.completed = false;
    }

    #[must_use]
    pub fn text(&self) -> &str {
        note_text(self.notes, self.state)
    }

    #[must_use]
    pub fn can_reveal(&self) -> bool {
        !self.state.is_revealed
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        *self.completed
    }
}
