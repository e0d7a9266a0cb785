use crate::core::{Card, CardBitSet, Hand, PokerError, evaluate};

use super::{OutsConfig, Outs, classify, outs};

/// A validated hold'em situation: hero's hole cards, the board, and
/// optionally a known villain hand.
///
/// Building a `Spot` is where all input checking happens. Once one
/// exists every card count is right and no card is used twice, so the
/// outs code never has to check again.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawSpot", into = "RawSpot"))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spot {
    hero: [Card; 2],
    board: Vec<Card>,
    villain: Option<[Card; 2]>,
}

impl Spot {
    /// Check and build a spot.
    ///
    /// # Examples
    ///
    /// ```
    /// use holdem_outs::core::{Card, PokerError};
    /// use holdem_outs::holdem::Spot;
    ///
    /// let hero = Card::parse_many("9♠8♠").unwrap();
    /// let board = Card::parse_many("7♠6♦2♣").unwrap();
    /// assert!(Spot::new(&hero, &board, None).is_ok());
    ///
    /// let bad_board = Card::parse_many("7♠9♠2♣").unwrap();
    /// assert!(matches!(
    ///     Spot::new(&hero, &bad_board, None),
    ///     Err(PokerError::DuplicateCard(_))
    /// ));
    /// ```
    pub fn new(hero: &[Card], board: &[Card], villain: Option<&[Card]>) -> Result<Self, PokerError> {
        let hero = <[Card; 2]>::try_from(hero).map_err(|_| PokerError::InvalidHeroSize(hero.len()))?;
        if !(3..=5).contains(&board.len()) {
            return Err(PokerError::InvalidBoardSize(board.len()));
        }
        let villain = villain
            .map(|v| <[Card; 2]>::try_from(v).map_err(|_| PokerError::InvalidVillainSize(v.len())))
            .transpose()?;

        let mut seen = CardBitSet::new();
        let all = hero.iter().chain(board).chain(villain.iter().flatten());
        for card in all {
            if !seen.insert(*card) {
                return Err(PokerError::DuplicateCard(*card));
            }
        }

        Ok(Self {
            hero,
            board: board.to_vec(),
            villain,
        })
    }

    /// Parse all three parts from card tokens, e.g. `"9♠8♠"`, `"7s6d2c"`.
    pub fn parse(hero: &str, board: &str, villain: Option<&str>) -> Result<Self, PokerError> {
        let villain = villain.map(Card::parse_many).transpose()?;
        Self::new(
            &Card::parse_many(hero)?,
            &Card::parse_many(board)?,
            villain.as_deref(),
        )
    }

    pub fn hero(&self) -> &[Card] {
        &self.hero
    }

    pub fn board(&self) -> &[Card] {
        &self.board
    }

    pub fn villain(&self) -> Option<&[Card]> {
        self.villain.as_ref().map(|v| &v[..])
    }

    /// Every card that can't come off the deck.
    pub fn dead_cards(&self) -> CardBitSet {
        let mut dead = self
            .hero
            .iter()
            .chain(&self.board)
            .fold(CardBitSet::new(), |set, c| set | *c);
        if let Some(villain) = &self.villain {
            dead |= villain.iter().collect::<CardBitSet>();
        }
        dead
    }

    /// Hero's hole cards with the board plus any extra cards.
    pub(crate) fn hero_with(&self, extra: &[Card]) -> Vec<Card> {
        let mut cards = self.hero.to_vec();
        cards.extend_from_slice(&self.board);
        cards.extend_from_slice(extra);
        cards
    }

    /// Hero's best hand right now.
    pub fn hero_hand(&self) -> Result<Hand, PokerError> {
        evaluate(&self.hero_with(&[]))
    }

    /// Cards that improve hero's hand, in deck order.
    ///
    /// A known villain's hole cards are dead, so they are never returned
    /// even when they would improve hero.
    pub fn effective_outs(&self, config: &OutsConfig) -> Result<Vec<Card>, PokerError> {
        outs::enumerate(self, config)
    }

    /// Split the effective outs into safe and dangerous cards.
    pub fn classify(&self, config: &OutsConfig) -> Result<Outs, PokerError> {
        classify::classify_spot(self, config)
    }
}

/// Plain form of a spot used for (de)serializing. Validation runs
/// through `Spot::new` on the way in.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RawSpot {
    hero: Vec<Card>,
    board: Vec<Card>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    villain: Option<Vec<Card>>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawSpot> for Spot {
    type Error = PokerError;

    fn try_from(raw: RawSpot) -> Result<Self, Self::Error> {
        Spot::new(&raw.hero, &raw.board, raw.villain.as_deref())
    }
}

#[cfg(feature = "serde")]
impl From<Spot> for RawSpot {
    fn from(spot: Spot) -> Self {
        RawSpot {
            hero: spot.hero.to_vec(),
            villain: spot.villain.map(|v| v.to_vec()),
            board: spot.board,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Category, Suit, Value};

    fn cards(s: &str) -> Vec<Card> {
        Card::parse_many(s).unwrap()
    }

    #[test]
    fn test_valid_spot() {
        let spot = Spot::parse("9♠8♠", "7♠6♦2♣", Some("AhAd")).unwrap();
        assert_eq!(cards("9♠8♠"), spot.hero());
        assert_eq!(3, spot.board().len());
        assert_eq!(Some(&cards("A♥A♦")[..]), spot.villain());
        assert_eq!(7, spot.dead_cards().count());
    }

    #[test]
    fn test_dead_cards() {
        let spot = Spot::parse("9♠8♠", "7♠6♦2♣", None).unwrap();
        let dead = spot.dead_cards();
        assert_eq!(5, dead.count());
        assert!(dead.contains(Card::new(Value::Two, Suit::Club)));
        assert!(!dead.contains(Card::new(Value::Ace, Suit::Heart)));

        let spot = Spot::parse("9♠8♠", "7♠6♦2♣", Some("A♥K♥")).unwrap();
        let dead = spot.dead_cards();
        assert!(dead.contains(Card::new(Value::Ace, Suit::Heart)));
        assert!(dead.contains(Card::new(Value::Nine, Suit::Spade)));
        assert!(!dead.contains(Card::new(Value::Ace, Suit::Spade)));
    }

    #[test]
    fn test_hero_size() {
        assert_eq!(
            Err(PokerError::InvalidHeroSize(1)),
            Spot::new(&cards("9♠"), &cards("7♠6♦2♣"), None)
        );
        assert_eq!(
            Err(PokerError::InvalidHeroSize(3)),
            Spot::new(&cards("9♠8♠T♠"), &cards("7♠6♦2♣"), None)
        );
    }

    #[test]
    fn test_board_size() {
        assert_eq!(
            Err(PokerError::InvalidBoardSize(2)),
            Spot::new(&cards("9♠8♠"), &cards("7♠6♦"), None)
        );
        assert_eq!(
            Err(PokerError::InvalidBoardSize(6)),
            Spot::new(&cards("9♠8♠"), &cards("7♠6♦2♣3♣4♣5♣"), None)
        );
        assert!(Spot::new(&cards("9♠8♠"), &cards("7♠6♦2♣3♣4♣"), None).is_ok());
    }

    #[test]
    fn test_villain_size() {
        assert_eq!(
            Err(PokerError::InvalidVillainSize(1)),
            Spot::new(&cards("9♠8♠"), &cards("7♠6♦2♣"), Some(&cards("A♥")))
        );
    }

    #[test]
    fn test_duplicates_across_parts() {
        assert_eq!(
            Err(PokerError::DuplicateCard(Card::new(Value::Ace, Suit::Heart))),
            Spot::parse("9♠8♠", "7♠6♦A♥", Some("A♥K♥"))
        );
    }

    #[test]
    fn test_hero_hand() {
        let spot = Spot::parse("9♠8♠", "7♠6♦2♣", None).unwrap();
        let hand = spot.hero_hand().unwrap();
        assert_eq!(Category::HighCard, hand.category());
        assert_eq!(Value::Nine, hand.primary());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_validates() {
        let spot: Spot =
            serde_json::from_str(r#"{"hero":["9♠","8♠"],"board":["7s","6d","2c"]}"#).unwrap();
        assert_eq!(None, spot.villain());
        let json = serde_json::to_string(&spot).unwrap();
        assert_eq!(r#"{"hero":["9♠","8♠"],"board":["7♠","6♦","2♣"]}"#, json);

        let bad = serde_json::from_str::<Spot>(r#"{"hero":["9♠"],"board":["7s","6d","2c"]}"#);
        assert!(bad.is_err());
    }
}
