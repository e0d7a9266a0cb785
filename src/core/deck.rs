use rand::Rng;

use super::{Card, CardBitSet, CardBitSetIter};

/// Deck struct that can tell quickly if a card is in the deck.
///
/// Decks are cheap values. Every evaluation builds its own, so
/// there is never any shared deck state.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deck(CardBitSet);

impl Deck {
    /// Create the default 52 card deck
    ///
    /// ```
    /// use holdem_outs::core::Deck;
    ///
    /// assert_eq!(52, Deck::new().len());
    /// ```
    pub fn new() -> Self {
        Self(CardBitSet::default())
    }

    /// The full deck minus every card that's already been seen.
    ///
    /// ```
    /// use holdem_outs::core::{Card, Deck};
    ///
    /// let seen = Card::parse_many("9♠8♠7♠6♦2♣").unwrap();
    /// let deck = Deck::without(&seen);
    /// assert_eq!(47, deck.len());
    /// assert!(!deck.contains(&seen[0]));
    /// ```
    pub fn without<'a, I>(seen: I) -> Self
    where
        I: IntoIterator<Item = &'a Card>,
    {
        let seen: CardBitSet = seen.into_iter().collect();
        Self(!seen)
    }

    /// Given a card, is it in the current deck?
    pub fn contains(&self, c: &Card) -> bool {
        self.0.contains(*c)
    }

    /// Given a card remove it from the deck if it is present.
    pub fn remove(&mut self, c: &Card) -> bool {
        let contains = self.contains(c);
        self.0.remove(*c);
        contains
    }

    /// How many cards are there in the deck.
    pub fn len(&self) -> usize {
        self.0.count()
    }

    /// Have all of the cards been dealt from this deck?
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate the cards left, in deck order.
    pub fn iter(&self) -> CardBitSetIter {
        self.0.into_iter()
    }

    /// Deal a random card matching `pred` and take it out of the deck.
    pub fn deal_matching<R, P>(&mut self, rng: &mut R, pred: P) -> Option<Card>
    where
        R: Rng,
        P: Fn(&Card) -> bool,
    {
        let pool: CardBitSet = self.iter().filter(|c| pred(c)).collect();
        let card = pool.sample_one(rng)?;
        self.0.remove(card);
        Some(card)
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

/// Turn a deck into an iterator
impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = CardBitSetIter;

    /// Consume this deck and create a new iterator.
    fn into_iter(self) -> CardBitSetIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::core::{Suit, Value};

    #[test]
    fn test_contains_in() {
        let d = Deck::new();
        assert!(d.contains(&Card::new(Value::Eight, Suit::Heart)));
    }

    #[test]
    fn test_remove() {
        let mut d = Deck::new();
        let c = Card::new(Value::Ace, Suit::Heart);
        assert!(d.contains(&c));
        assert!(d.remove(&c));
        assert!(!d.contains(&c));
        assert!(!d.remove(&c));
    }

    #[test]
    fn test_without_keeps_deck_order() {
        let seen = Card::parse_many("2♠ A♣").unwrap();
        let cards: Vec<Card> = Deck::without(&seen).into_iter().collect();
        assert_eq!(50, cards.len());
        assert_eq!(Card::new(Value::Two, Suit::Heart), cards[0]);
        assert_eq!(Card::new(Value::Ace, Suit::Diamond), cards[49]);
    }

    #[test]
    fn test_deal_matching() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut d = Deck::new();
        for _ in 0..13 {
            let card = d.deal_matching(&mut rng, |c| c.suit == Suit::Heart).unwrap();
            assert_eq!(Suit::Heart, card.suit);
            assert!(!d.contains(&card));
        }
        assert_eq!(39, d.len());
        assert!(d.deal_matching(&mut rng, |c| c.suit == Suit::Heart).is_none());
    }
}
