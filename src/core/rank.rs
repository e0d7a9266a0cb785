use std::fmt;
use std::str::FromStr;

use super::{Card, Hand, PokerError, Suit, Value, find_straight};

/// All the different possible hand categories, weakest first.
///
/// The derived ordering is the category hierarchy used by
/// `compare`; it never changes.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum Category {
    /// The lowest rank.
    /// No matches
    #[cfg_attr(feature = "serde", serde(rename = "high"))]
    HighCard,
    /// One Card matches another.
    #[cfg_attr(feature = "serde", serde(rename = "pair"))]
    OnePair,
    /// Two different pair of matching cards.
    #[cfg_attr(feature = "serde", serde(rename = "twopair"))]
    TwoPair,
    /// Three of the same value.
    #[cfg_attr(feature = "serde", serde(rename = "trio"))]
    ThreeOfAKind,
    /// Five cards in a sequence
    #[cfg_attr(feature = "serde", serde(rename = "straight"))]
    Straight,
    /// Five cards of the same suit
    #[cfg_attr(feature = "serde", serde(rename = "flush"))]
    Flush,
    /// Three of one value and two of another value
    #[cfg_attr(feature = "serde", serde(rename = "full"))]
    FullHouse,
    /// Four of the same value.
    #[cfg_attr(feature = "serde", serde(rename = "quads"))]
    FourOfAKind,
    /// Five cards in a sequence all of the same suit.
    #[cfg_attr(feature = "serde", serde(rename = "straight-flush"))]
    StraightFlush,
}

const CATEGORIES: [Category; 9] = [
    Category::HighCard,
    Category::OnePair,
    Category::TwoPair,
    Category::ThreeOfAKind,
    Category::Straight,
    Category::Flush,
    Category::FullHouse,
    Category::FourOfAKind,
    Category::StraightFlush,
];

impl Category {
    /// Every category, weakest first.
    pub const fn categories() -> [Self; 9] {
        CATEGORIES
    }

    /// Position in the hierarchy, 0 for high card up to 8.
    pub fn strength(self) -> u8 {
        self as u8
    }

    /// Short name used by the trainer.
    pub fn name(self) -> &'static str {
        match self {
            Self::HighCard => "high",
            Self::OnePair => "pair",
            Self::TwoPair => "twopair",
            Self::ThreeOfAKind => "trio",
            Self::Straight => "straight",
            Self::Flush => "flush",
            Self::FullHouse => "full",
            Self::FourOfAKind => "quads",
            Self::StraightFlush => "straight-flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown hand category {0:?}")]
pub struct UnknownCategory(String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CATEGORIES
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Can this turn into a hand? Implemented for card slices, so
/// `Vec<Card>` and arrays of cards get it too.
pub trait Rankable {
    /// Find the best 5 card hand. This doesn't do any caching so it's left
    /// up to the user to understand that duplicate work will be done if
    /// this is called more than once.
    fn evaluate(&self) -> Result<Hand, PokerError>;
}

impl Rankable for [Card] {
    fn evaluate(&self) -> Result<Hand, PokerError> {
        evaluate(self)
    }
}

/// Find the best 5 card hand out of any number of cards.
///
/// Categories are checked strongest first and the first match wins.
/// Fewer than 5 cards is fine, the hand is just built from whatever is
/// there. Duplicate cards are not checked for here.
///
/// # Examples
///
/// ```
/// use holdem_outs::core::{Card, Category, Value, evaluate};
///
/// let cards = Card::parse_many("9♠8♠7♠6♦2♣T♥").unwrap();
/// let hand = evaluate(&cards).unwrap();
/// assert_eq!(Category::Straight, hand.category());
/// assert_eq!(Value::Ten, hand.primary());
/// ```
pub fn evaluate(cards: &[Card]) -> Result<Hand, PokerError> {
    if cards.is_empty() {
        return Err(PokerError::EmptyHand);
    }

    let suited = split_suits(cards);
    let hand = rank_straight_flush(&suited)
        .or_else(|| rank_flush(&suited))
        .or_else(|| rank_straight(cards))
        .unwrap_or_else(|| rank_groups(cards));
    Ok(hand)
}

/// Cards bucketed by suit, input order kept inside each bucket.
fn split_suits(cards: &[Card]) -> [Vec<Card>; 4] {
    let mut suited: [Vec<Card>; 4] = Default::default();
    for c in cards {
        suited[c.suit as usize].push(*c);
    }
    suited
}

/// Sorted copy, highest value first. The sort is stable.
fn by_value_desc(cards: &[Card]) -> Vec<Card> {
    let mut sorted = cards.to_vec();
    sorted.sort_by(|a, b| b.value.cmp(&a.value));
    sorted
}

/// First card in `pool` for each value of the run.
fn pick_run(run: [Value; 5], pool: &[Card]) -> Vec<Card> {
    let mut left = pool.to_vec();
    let mut picked = Vec::with_capacity(5);
    for v in run {
        if let Some(pos) = left.iter().position(|c| c.value == v) {
            picked.push(left.remove(pos));
        }
    }
    picked
}

fn rank_straight_flush(suited: &[Vec<Card>; 4]) -> Option<Hand> {
    Suit::suits().into_iter().find_map(|s| {
        let pool = &suited[s as usize];
        if pool.len() < 5 {
            return None;
        }
        let values: Vec<Value> = pool.iter().map(|c| c.value).collect();
        let straight = find_straight(&values)?;
        Some(Hand::new(
            Category::StraightFlush,
            straight.high(),
            None,
            vec![],
            pick_run(straight.values(), pool),
        ))
    })
}

fn rank_flush(suited: &[Vec<Card>; 4]) -> Option<Hand> {
    let pool = Suit::suits()
        .into_iter()
        .map(|s| &suited[s as usize])
        .find(|pool| pool.len() >= 5)?;
    let mut top = by_value_desc(pool);
    top.truncate(5);
    Some(Hand::new(
        Category::Flush,
        top[0].value,
        None,
        top[1..].iter().map(|c| c.value).collect(),
        top,
    ))
}

fn rank_straight(cards: &[Card]) -> Option<Hand> {
    let values: Vec<Value> = cards.iter().map(|c| c.value).collect();
    let straight = find_straight(&values)?;
    Some(Hand::new(
        Category::Straight,
        straight.high(),
        None,
        vec![],
        pick_run(straight.values(), cards),
    ))
}

/// Cards of one value.
struct Group {
    value: Value,
    cards: Vec<Card>,
}

/// Bucket by value, biggest group first then highest value first.
fn group_values(cards: &[Card]) -> Vec<Group> {
    let mut groups: Vec<Group> = Vec::with_capacity(cards.len());
    for c in cards {
        match groups.iter_mut().find(|g| g.value == c.value) {
            Some(g) => g.cards.push(*c),
            None => groups.push(Group {
                value: c.value,
                cards: vec![*c],
            }),
        }
    }
    groups.sort_by(|a, b| {
        b.cards
            .len()
            .cmp(&a.cards.len())
            .then_with(|| b.value.cmp(&a.value))
    });
    groups
}

/// The `n` highest cards that aren't in `used`.
fn kickers(cards: &[Card], used: &[Card], n: usize) -> Vec<Card> {
    let mut rest = by_value_desc(cards);
    rest.retain(|c| !used.contains(c));
    rest.truncate(n);
    rest
}

fn made_hand(
    category: Category,
    primary: Value,
    secondary: Option<Value>,
    mut made: Vec<Card>,
    kick: Vec<Card>,
) -> Hand {
    let kick_values = kick.iter().map(|c| c.value).collect();
    made.extend(kick);
    Hand::new(category, primary, secondary, kick_values, made)
}

/// Quads, full house, trips, two pair, pair, and finally high card.
fn rank_groups(cards: &[Card]) -> Hand {
    let groups = group_values(cards);
    let first = &groups[0];
    let second = groups.get(1);

    match first.cards.len() {
        n if n >= 4 => {
            let quads: Vec<Card> = first.cards[..4].to_vec();
            let kick = kickers(cards, &quads, 1);
            made_hand(Category::FourOfAKind, first.value, None, quads, kick)
        }
        3 => {
            let trips = first.cards.clone();
            // The best pair can come from another set of trips.
            let pair = groups[1..]
                .iter()
                .filter(|g| g.cards.len() >= 2)
                .max_by_key(|g| g.value);
            match pair {
                Some(pair) => {
                    let mut made = trips;
                    made.extend_from_slice(&pair.cards[..2]);
                    made_hand(Category::FullHouse, first.value, Some(pair.value), made, vec![])
                }
                None => {
                    let kick = kickers(cards, &trips, 2);
                    made_hand(Category::ThreeOfAKind, first.value, None, trips, kick)
                }
            }
        }
        2 => match second.filter(|g| g.cards.len() == 2) {
            Some(low) => {
                // Groups are already value ordered when the sizes tie.
                let mut pairs = first.cards.clone();
                pairs.extend_from_slice(&low.cards);
                let kick = kickers(cards, &pairs, 1);
                made_hand(Category::TwoPair, first.value, Some(low.value), pairs, kick)
            }
            None => {
                let pair = first.cards.clone();
                let kick = kickers(cards, &pair, 3);
                made_hand(Category::OnePair, first.value, None, pair, kick)
            }
        },
        _ => {
            let mut top = by_value_desc(cards);
            top.truncate(5);
            let high = top.remove(0);
            made_hand(Category::HighCard, high.value, None, vec![high], top)
        }
    }
}
