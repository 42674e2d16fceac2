use crate::model::GuessProgress;

/// Submissions needed before the guessing game counts as complete.
pub const GUESSES_TO_COMPLETE: u32 = 3;

/// Response index for the `count`-th submission, clamped to the last entry.
#[must_use]
pub fn response_index(count: u32, len: usize) -> Option<usize> {
    if count == 0 || len == 0 {
        return None;
    }
    let nth = usize::try_from(count - 1).unwrap_or(usize::MAX);
    Some(nth.min(len - 1))
}

/// What a single submission produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessReply {
    pub count: u32,
    pub response: Option<usize>,
    pub completed: bool,
}

/// Counter that answers every guess with the next canned line.
pub struct GuessCounter<'a> {
    responses: &'a [String],
    state: &'a mut GuessProgress,
    completed: &'a mut bool,
}

impl<'a> GuessCounter<'a> {
    pub fn new(
        responses: &'a [String],
        state: &'a mut GuessProgress,
        completed: &'a mut bool,
    ) -> Self {
        Self {
            responses,
            state,
            completed,
        }
    }

    pub fn submit(&mut self) -> GuessReply {
        self.state.count = self.state.count.saturating_add(1);
        self.state.response = response_index(self.state.count, self.responses.len());
        if self.state.count >= GUESSES_TO_COMPLETE {
            *self.completed = true;
        }

        GuessReply {
            count: self.state.count,
            response: self.state.response,
            completed: *self.completed,
        }
    }

    pub fn reset(&mut self) {
        *self.state = GuessProgress::default();
        *self.completed = false;
    }

    #[must_use]
    pub fn response_text(&self) -> Option<&str> {
        self.state
            .response
            .and_then(|idx| self.responses.get(idx))
            .map(String::as_str)
    }
}
