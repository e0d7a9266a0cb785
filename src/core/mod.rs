//! This is the core module. It exports the non-holdem
//! related code: cards, decks, and 5 card hand ranking.

/// card.rs has value and suit.
mod card;
/// Re-export Card, Value, and Suit
pub use self::card::{Card, Suit, Value};

/// Bit set of cards.
mod card_bit_set;
/// Export the set and its iterator.
pub use self::card_bit_set::{CardBitSet, CardBitSetIter};

/// We want to be able to iterate over five card hands.
mod card_iter;
/// Make that functionality public.
pub use self::card_iter::CardIter;

/// Deck is the normal 52 card deck.
mod deck;
/// Export `Deck`
pub use self::deck::Deck;

/// Errors for everything that can go wrong with input.
mod error;
pub use self::error::PokerError;

/// Runs of five values.
mod straight;
pub use self::straight::{Straight, find_straight};

/// The evaluated best hand and the order between hands.
mod hand;
pub use self::hand::{Hand, compare};

/// Hand ranking code.
mod rank;
/// Export the trait and the results.
pub use self::rank::{Category, Rankable, UnknownCategory, evaluate};
