use std::cmp::Ordering;

use tracing::{Level, event};

use crate::core::{Card, Category, Deck, Hand, PokerError, Value, compare, evaluate};

use super::{ImprovementRule, OutsConfig, Spot};

/// Hand strength without the kickers: category, then primary, then
/// secondary. Two hands that only differ in kickers have the same score.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Score {
    pub category: Category,
    pub primary: Value,
    pub secondary: Option<Value>,
}

impl Score {
    /// Single number encoding of the score, bigger is better.
    ///
    /// ```
    /// use holdem_outs::core::{Category, Value};
    /// use holdem_outs::holdem::Score;
    ///
    /// let score = Score {
    ///     category: Category::FullHouse,
    ///     primary: Value::King,
    ///     secondary: Some(Value::Seven),
    /// };
    /// assert_eq!(6 * 10_000 + 11 * 100 + 5, score.value());
    /// ```
    pub fn value(&self) -> u32 {
        u32::from(self.category.strength()) * 10_000
            + u32::from(self.primary.index()) * 100
            + u32::from(self.secondary.map_or(0, Value::index))
    }

    /// How far this score is above `before`. Negative if it went down.
    pub fn gain_over(&self, before: &Score) -> i64 {
        i64::from(self.value()) - i64::from(before.value())
    }
}

impl From<&Hand> for Score {
    fn from(hand: &Hand) -> Self {
        Self {
            category: hand.category(),
            primary: hand.primary(),
            secondary: hand.secondary(),
        }
    }
}

impl PartialOrd for Score {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Score {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value().cmp(&other.value())
    }
}

/// Did `after` improve on `before` under the given rule?
pub(crate) fn improves(rule: ImprovementRule, before: &Hand, after: &Hand) -> bool {
    match rule {
        ImprovementRule::KickerIgnoring => Score::from(after) > Score::from(before),
        ImprovementRule::FullComparison => compare(after, before).is_gt(),
    }
}

/// Run every unseen card out as the next board card and keep those that
/// improve hero's hand.
pub(crate) fn enumerate(spot: &Spot, config: &OutsConfig) -> Result<Vec<Card>, PokerError> {
    // Only turn and river cards are modeled; a full board has no outs.
    if spot.board().len() >= 5 {
        return Ok(vec![]);
    }

    let current = spot.hero_hand()?;
    let mut outs = Vec::new();
    for card in Deck::without(spot.hero().iter().chain(spot.board())) {
        if spot.villain().is_some_and(|v| v.contains(&card)) {
            continue;
        }
        let after = evaluate(&spot.hero_with(&[card]))?;
        if improves(config.improvement, &current, &after) {
            outs.push(card);
        }
    }

    event!(
        Level::DEBUG,
        hand = %current,
        board_len = spot.board().len(),
        outs = outs.len(),
        "Enumerated effective outs"
    );
    Ok(outs)
}

/// Every card that improves hero's hand category, primary, or secondary
/// if it comes next. Kicker only improvements don't count. The result is
/// in deck order, deuces first.
///
/// # Examples
///
/// ```
/// use holdem_outs::core::Card;
/// use holdem_outs::holdem::effective_outs;
///
/// let hero = Card::parse_many("9♠8♠").unwrap();
/// let board = Card::parse_many("7♠6♦2♣").unwrap();
/// let outs = effective_outs(&hero, &board).unwrap();
/// assert!(outs.contains(&"5♥".parse().unwrap()));
/// assert!(outs.contains(&"T♣".parse().unwrap()));
/// ```
pub fn effective_outs(hero: &[Card], board: &[Card]) -> Result<Vec<Card>, PokerError> {
    Spot::new(hero, board, None)?.effective_outs(&OutsConfig::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Rankable;

    fn cards(s: &str) -> Vec<Card> {
        Card::parse_many(s).unwrap()
    }

    fn score(s: &str) -> Score {
        Score::from(&cards(s).evaluate().unwrap())
    }

    #[test]
    fn test_score_ignores_kickers() {
        assert_eq!(score("K♠K♦7♥4♣2♠"), score("K♥K♣Q♥7♣4♠"));
        assert!(score("K♠K♦7♥4♣2♠") > score("Q♥Q♣A♥7♣4♠"));
        assert!(score("2♠2♦3♣4♥6♠") > score("A♠K♦Q♣J♥9♠"));
    }

    #[test]
    fn test_score_gain() {
        let before = score("9♠8♠7♠6♦2♣");
        let after = score("9♠8♠7♠6♦2♣T♥");
        assert!(after.gain_over(&before) > 0);
        assert_eq!(-after.gain_over(&before), before.gain_over(&after));
    }

    #[test_log::test]
    fn test_open_ended_draw() {
        let outs = effective_outs(&cards("9♠8♠"), &cards("7♠6♦2♣")).unwrap();
        let straights: Vec<Card> = cards("5♠5♥5♦5♣T♠T♥T♦T♣");
        for card in &straights {
            assert!(outs.contains(card), "missing {card}");
            let hand = cards(&format!("9♠8♠7♠6♦2♣{card}")).evaluate().unwrap();
            assert_eq!(Category::Straight, hand.category());
        }
        // Straights, pairs for any of the five other values, and the
        // overcards that lift the high card.
        assert_eq!(39, outs.len());
        assert!(!outs.contains(&"3♥".parse().unwrap()));
        assert!(!outs.contains(&"4♥".parse().unwrap()));
    }

    #[test]
    fn test_deck_order_and_deterministic() {
        let first = effective_outs(&cards("9♠8♠"), &cards("7♠6♦2♣")).unwrap();
        let second = effective_outs(&cards("9♠8♠"), &cards("7♠6♦2♣")).unwrap();
        assert_eq!(first, second);
        assert!(first.windows(2).all(|w| u8::from(w[0]) < u8::from(w[1])));
        assert_eq!("2♠", first[0].to_string());
    }

    #[test]
    fn test_kicker_only_is_not_an_out() {
        let hero = cards("K♠K♦");
        let board = cards("7♥4♣2♠");
        let queen: Card = "Q♣".parse().unwrap();

        let outs = effective_outs(&hero, &board).unwrap();
        assert!(!outs.contains(&queen));
        // A king still makes trips.
        assert!(outs.contains(&"K♥".parse().unwrap()));

        let spot = Spot::new(&hero, &board, None).unwrap();
        let config = OutsConfig::default().with_improvement(ImprovementRule::FullComparison);
        let with_kickers = spot.effective_outs(&config).unwrap();
        assert!(with_kickers.contains(&queen));
        assert!(with_kickers.len() > outs.len());
    }

    #[test]
    fn test_turn_board() {
        // Four card board, the river completes the flush.
        let outs = effective_outs(&cards("A♥K♥"), &cards("2♥7♥9♣J♠")).unwrap();
        for card in cards("3♥4♥5♥6♥8♥T♥Q♥") {
            assert!(outs.contains(&card));
        }
    }

    #[test]
    fn test_full_board_has_no_outs() {
        let outs = effective_outs(&cards("A♥K♥"), &cards("2♥7♥9♣J♠3♦")).unwrap();
        assert!(outs.is_empty());
    }

    #[test]
    fn test_villain_cards_never_come() {
        let spot = Spot::parse("9♠8♠", "7♠6♦2♣", Some("5♥5♦")).unwrap();
        let outs = spot.effective_outs(&OutsConfig::default()).unwrap();
        assert!(!outs.contains(&"5♥".parse().unwrap()));
        assert!(outs.contains(&"5♠".parse().unwrap()));
        assert_eq!(37, outs.len());
    }

    #[test]
    fn test_bad_input() {
        assert_eq!(
            Err(PokerError::InvalidHeroSize(1)),
            effective_outs(&cards("9♠"), &cards("7♠6♦2♣"))
        );
    }
}
