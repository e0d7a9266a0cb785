use thiserror::Error;

use super::Card;

/// This is the core error type for the library. Every malformed input
/// ends up here rather than as a wrong hand or a panic.
/// It uses `thiserror` to provide readable error messages.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum PokerError {
    #[error("Unable to parse value from {0:?}")]
    UnexpectedValueChar(char),
    #[error("Unable to parse suit from {0:?}")]
    UnexpectedSuitChar(char),
    #[error("Error reading characters while parsing")]
    TooFewChars,
    #[error("Extra un-used characters found after parsing")]
    UnparsedCharsRemaining,
    #[error("Card {0} is used more than once")]
    DuplicateCard(Card),
    #[error("Can't rank a hand with no cards in it")]
    EmptyHand,
    #[error("Hero must hold exactly 2 cards, got {0}")]
    InvalidHeroSize(usize),
    #[error("Board must have between 3 and 5 cards, got {0}")]
    InvalidBoardSize(usize),
    #[error("Villain must hold exactly 2 cards, got {0}")]
    InvalidVillainSize(usize),
    #[error("No card left in the deck matches the request")]
    NoCardsAvailable,
}
