use std::cmp::Ordering;
use std::fmt;

use super::{Card, Category, Value};

/// The best 5 card hand found in a set of cards.
///
/// Ranking only ever looks at the category, the primary and secondary
/// values, and the kickers. `cards` is there so a caller can show which
/// cards made the hand.
///
/// `Eq` and `Ord` follow `compare`, so two hands are equal when they
/// tie, whatever their suits are.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone)]
pub struct Hand {
    category: Category,
    primary: Value,
    secondary: Option<Value>,
    kickers: Vec<Value>,
    cards: Vec<Card>,
}

impl Hand {
    pub(crate) fn new(
        category: Category,
        primary: Value,
        secondary: Option<Value>,
        kickers: Vec<Value>,
        cards: Vec<Card>,
    ) -> Self {
        Self {
            category,
            primary,
            secondary,
            kickers,
            cards,
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// The value the hand is named by: the pair, the trips, the top of
    /// the straight (five for the wheel), the top of the flush.
    pub fn primary(&self) -> Value {
        self.primary
    }

    /// The lower pair of two pair or the pair of a full house.
    pub fn secondary(&self) -> Option<Value> {
        self.secondary
    }

    /// Remaining tie breakers, most significant first.
    pub fn kickers(&self) -> &[Value] {
        &self.kickers
    }

    /// The cards that make up the hand, in the order the category
    /// reads them.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn is_royal(&self) -> bool {
        self.category == Category::StraightFlush && self.primary == Value::Ace
    }

    /// Human readable name for the hand, e.g. `Full House, Ks full of 7s`.
    pub fn label(&self) -> String {
        let p = self.primary;
        let s = self.secondary.unwrap_or(Value::Two);
        match self.category {
            Category::StraightFlush if self.is_royal() => "Royal Flush".to_string(),
            Category::StraightFlush => format!("Straight Flush, {p} high"),
            Category::FourOfAKind => format!("Four of a Kind, {p}s"),
            Category::FullHouse => format!("Full House, {p}s full of {s}s"),
            Category::Flush => format!("Flush, {p} high"),
            Category::Straight => format!("Straight, {p} high"),
            Category::ThreeOfAKind => format!("Three of a Kind, {p}s"),
            Category::TwoPair => format!("Two Pair, {p}s and {s}s"),
            Category::OnePair => format!("Pair of {p}s"),
            Category::HighCard => format!("High Card, {p}"),
        }
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Missing tie breakers count as a deuce.
fn tie_index(v: Option<&Value>) -> u8 {
    v.map_or(0, |v| v.index())
}

/// Total order over hands.
///
/// Category first, then primary, then secondary, then kickers one by
/// one. A missing secondary or kicker counts as 0 (a deuce).
///
/// ```
/// use std::cmp::Ordering;
/// use holdem_outs::core::{Card, compare, evaluate};
///
/// let kings_full = evaluate(&Card::parse_many("K♠K♦K♣7♥7♣").unwrap()).unwrap();
/// let kings_full_of_deuces = evaluate(&Card::parse_many("K♠K♦K♣2♥2♣").unwrap()).unwrap();
/// assert_eq!(Ordering::Greater, compare(&kings_full, &kings_full_of_deuces));
/// ```
pub fn compare(a: &Hand, b: &Hand) -> Ordering {
    a.category
        .cmp(&b.category)
        .then_with(|| a.primary.cmp(&b.primary))
        .then_with(|| tie_index(a.secondary.as_ref()).cmp(&tie_index(b.secondary.as_ref())))
        .then_with(|| {
            let len = a.kickers.len().max(b.kickers.len());
            (0..len)
                .map(|i| tie_index(a.kickers.get(i)).cmp(&tie_index(b.kickers.get(i))))
                .find(|o| o.is_ne())
                .unwrap_or(Ordering::Equal)
        })
}

impl PartialEq for Hand {
    fn eq(&self, other: &Self) -> bool {
        compare(self, other).is_eq()
    }
}

impl Eq for Hand {}

impl PartialOrd for Hand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Hand {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(self, other)
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::core::{Deck, Rankable};

    fn hand(s: &str) -> Hand {
        Card::parse_many(s).unwrap().evaluate().unwrap()
    }

    /// Deterministic sample of 7 card hands.
    fn sample_hands(n: usize) -> Vec<Hand> {
        let mut rng = StdRng::seed_from_u64(1977);
        (0..n)
            .map(|_| {
                let mut deck = Deck::new();
                let cards: Vec<Card> = (0..7)
                    .filter_map(|_| deck.deal_matching(&mut rng, |_| true))
                    .collect();
                cards.evaluate().unwrap()
            })
            .collect()
    }

    #[test]
    fn test_category_dominates() {
        // Worst possible pair beats the best high card.
        assert!(hand("2♠2♦3♣4♥5♠") > hand("A♠K♦Q♣J♥9♠"));
        assert!(hand("2♠3♦4♣5♥A♠") > hand("A♠A♦A♣K♥Q♠"));
    }

    #[test]
    fn test_full_house_secondary() {
        let kings_over_sevens = hand("K♠K♦K♣7♥7♣");
        let kings_over_deuces = hand("K♠K♦K♣2♥2♣");
        assert_eq!(Ordering::Greater, compare(&kings_over_sevens, &kings_over_deuces));
        assert_eq!(kings_over_sevens.primary(), kings_over_deuces.primary());
        assert!(kings_over_sevens.kickers().is_empty());
    }

    #[test]
    fn test_kickers_break_ties() {
        assert!(hand("A♠A♦K♣7♥4♣") > hand("A♥A♣Q♣J♥T♣"));
        assert!(hand("A♠K♦9♣7♥4♣") > hand("A♥K♣9♦7♣3♣"));
    }

    #[test]
    fn test_suits_tie() {
        let a = hand("A♠K♠Q♦J♣9♥");
        let b = hand("A♦K♦Q♣J♥9♠");
        assert_eq!(Ordering::Equal, compare(&a, &b));
        assert_eq!(a, b);
    }

    #[test]
    fn test_missing_kicker_counts_as_zero() {
        // Four cards only, the pair has two kickers against three.
        let short = hand("9♠9♦A♣K♥");
        let long = hand("9♥9♣A♦K♠2♣");
        assert_eq!(Ordering::Equal, compare(&short, &long));
        let longer = hand("9♥9♣A♦K♠3♣");
        assert_eq!(Ordering::Less, compare(&short, &longer));
    }

    #[test]
    fn test_wheel_is_lowest_straight() {
        assert!(hand("A♠2♦3♣4♥5♠") < hand("2♠3♦4♣5♥6♠"));
        assert!(hand("A♠2♦3♣4♥5♠") > hand("A♠A♦A♣K♥Q♠"));
    }

    #[test]
    fn test_antisymmetry() {
        let hands = sample_hands(60);
        for a in &hands {
            for b in &hands {
                assert_eq!(compare(a, b), compare(b, a).reverse());
            }
        }
    }

    #[test]
    fn test_transitivity() {
        let hands = sample_hands(40);
        for a in &hands {
            for b in &hands {
                for c in &hands {
                    if compare(a, b).is_gt() && compare(b, c).is_gt() {
                        assert!(compare(a, c).is_gt());
                    }
                    if compare(a, b).is_eq() && compare(b, c).is_eq() {
                        assert!(compare(a, c).is_eq());
                    }
                }
            }
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!("Royal Flush", hand("T♣J♣Q♣K♣A♣").label());
        assert_eq!("Straight Flush, 9 high", hand("5♥6♥7♥8♥9♥").label());
        assert_eq!("Four of a Kind, Ks", hand("K♥K♣K♦K♠2♥").label());
        assert_eq!("Full House, Ks full of 7s", hand("K♠K♦K♣7♥7♣").label());
        assert_eq!("Flush, A high", hand("A♦8♦9♦T♦5♦").label());
        assert_eq!("Straight, 5 high", hand("A♠2♦3♣4♥5♠").label());
        assert_eq!("Three of a Kind, 7s", hand("7♠7♦7♣A♥2♣").label());
        assert_eq!("Two Pair, As and 8s", hand("A♠A♦8♣8♥2♣").label());
        assert_eq!("Pair of Ts", hand("T♠T♦8♣4♥2♣").label());
        assert_eq!("High Card, A", hand("A♠J♦8♣4♥2♣").label());
        assert_eq!("Pair of Ts", hand("T♠T♦8♣4♥2♣").to_string());
    }
}
