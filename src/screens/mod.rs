mod flashcard;
mod header;
mod quiz;

pub use flashcard::{counter_text, CardCounter, FlashcardCard};
pub use header::{format_time, Header};
pub use quiz::{ControlButtons, QuizScreen, SECONDS_PER_CARD};
