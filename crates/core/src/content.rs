//! Compiled-in content for the arcade.

use crate::model::PhotoPair;

const NOTES: [&str; 10] = [
    "All my best memories are with you.",
    "Every day with you makes me feel like the luckiest person alive.",
    "You make me happier than I thought possible.",
    "You make ordinary moments feel special.",
    "I love your laugh, your personality, and your sense of humor.",
    "Thank you for being the person I always want to tell things to first.",
    "You were my greatest choice I ever made.",
    "You are the sexiest thing on the face of the Earth.",
    "My favorite place is next to you.",
    "You are the sweetest thing there ever was.",
];

// (label, photo a, photo b)
const PHOTO_PAIRS: [(&str, &str, &str); 8] = [
    ("Example", "assets/1_1.jpeg", "assets/1_2.jpeg"),
    ("Example2", "assets/2_1.jpeg", "assets/2_2.jpeg"),
    ("Example", "assets/3_1.jpeg", "assets/3_2.jpeg"),
    ("Example", "assets/4_1.jpeg", "assets/4_2.jpeg"),
    ("Example", "assets/5_1.jpeg", "assets/5_2.jpeg"),
    ("Example", "assets/6_1.jpeg", "assets/6_2.jpeg"),
    ("Example", "assets/7_1.jpeg", "assets/7_2.jpeg"),
    ("Example", "assets/8_1.jpeg", "assets/8_2.jpeg"),
];

const TOO_SMALL_LINES: [&str; 7] = [
    "Too small girly girl.",
    "Too small girly girl.",
    "Astronomically too small.",
    "Adorable guess but try bigger.",
    "Still not big enough.",
    "Nope. Still too small.",
    "Just because you're so cute you can pass. Still too small though. ❤️",
];

/// Notes, photo pairs and guess responses the mini-games draw from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArcadeContent {
    pub notes: Vec<String>,
    pub photo_pairs: Vec<PhotoPair>,
    pub guess_responses: Vec<String>,
}

impl ArcadeContent {
    /// The content shipped with the app.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            notes: NOTES.iter().map(|s| (*s).to_owned()).collect(),
            photo_pairs: PHOTO_PAIRS
                .iter()
                .map(|(label, a, b)| PhotoPair::new(*label, *a, *b))
                .collect(),
            guess_responses: TOO_SMALL_LINES.iter().map(|s| (*s).to_owned()).collect(),
        }
    }

    #[must_use]
    pub fn with_photo_pairs(mut self, pairs: Vec<PhotoPair>) -> Self {
        self.photo_pairs = pairs;
        self
    }
}

impl Default for ArcadeContent {
    fn default() -> Self {
        Self::builtin()
    }
}
