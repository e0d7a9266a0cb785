use std::fmt;
use std::str::FromStr;

use super::{CardBitSet, PokerError};

/// Card rank or value.
/// This is basically the face value - 2, which is also the
/// rank index used for every tie break in a `Hand`.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum Value {
    /// 2
    Two = 0,
    /// 3
    Three = 1,
    /// 4
    Four = 2,
    /// 5
    Five = 3,
    /// 6
    Six = 4,
    /// 7
    Seven = 5,
    /// 8
    Eight = 6,
    /// 9
    Nine = 7,
    /// T
    Ten = 8,
    /// J
    Jack = 9,
    /// Q
    Queen = 10,
    /// K
    King = 11,
    /// A
    Ace = 12,
}

/// Constant of all the values.
/// This is what `Value::values()` returns
const VALUES: [Value; 13] = [
    Value::Two,
    Value::Three,
    Value::Four,
    Value::Five,
    Value::Six,
    Value::Seven,
    Value::Eight,
    Value::Nine,
    Value::Ten,
    Value::Jack,
    Value::Queen,
    Value::King,
    Value::Ace,
];

impl Value {
    /// Take a rank index and convert it to a value.
    /// Anything past the ace saturates to `Value::Ace`.
    ///
    /// ```
    /// use holdem_outs::core::Value;
    ///
    /// assert_eq!(Value::Two, Value::from_u8(0));
    /// assert_eq!(Value::Ace, Value::from_u8(12));
    /// ```
    pub fn from_u8(v: u8) -> Self {
        VALUES[usize::from(v.min(12))]
    }

    /// Get all of the `Value`'s that are possible, deuce first.
    pub const fn values() -> [Self; 13] {
        VALUES
    }

    /// The rank index, 0 for a deuce up to 12 for an ace.
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Parse a rank character. Both `T` and `t` are accepted.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'A' => Some(Self::Ace),
            'K' => Some(Self::King),
            'Q' => Some(Self::Queen),
            'J' => Some(Self::Jack),
            'T' => Some(Self::Ten),
            '9' => Some(Self::Nine),
            '8' => Some(Self::Eight),
            '7' => Some(Self::Seven),
            '6' => Some(Self::Six),
            '5' => Some(Self::Five),
            '4' => Some(Self::Four),
            '3' => Some(Self::Three),
            '2' => Some(Self::Two),
            _ => None,
        }
    }

    /// The canonical rank character.
    pub fn to_char(self) -> char {
        match self {
            Self::Ace => 'A',
            Self::King => 'K',
            Self::Queen => 'Q',
            Self::Jack => 'J',
            Self::Ten => 'T',
            Self::Nine => '9',
            Self::Eight => '8',
            Self::Seven => '7',
            Self::Six => '6',
            Self::Five => '5',
            Self::Four => '4',
            Self::Three => '3',
            Self::Two => '2',
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Enum for the four different suits.
/// While this has support for ordering it's not
/// sensical. The sorting is only there to give a stable deck order,
/// which follows the order the glyphs are usually listed in.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum Suit {
    /// Spades
    Spade = 0,
    /// Hearts
    Heart = 1,
    /// Diamonds
    Diamond = 2,
    /// Clubs
    Club = 3,
}

/// All of the `Suit`'s. This is what `Suit::suits()` returns.
const SUITS: [Suit; 4] = [Suit::Spade, Suit::Heart, Suit::Diamond, Suit::Club];

impl Suit {
    /// Provide all the Suit's that there are.
    pub const fn suits() -> [Self; 4] {
        SUITS
    }

    pub fn from_u8(s: u8) -> Self {
        SUITS[usize::from(s & 3)]
    }

    /// Parse either the suit glyph or the usual ascii letter.
    pub fn from_char(s: char) -> Option<Self> {
        match s {
            '\u{2660}' | 's' | 'S' => Some(Self::Spade),
            '\u{2665}' | 'h' | 'H' => Some(Self::Heart),
            '\u{2666}' | 'd' | 'D' => Some(Self::Diamond),
            '\u{2663}' | 'c' | 'C' => Some(Self::Club),
            _ => None,
        }
    }

    /// The suit glyph used in card tokens.
    pub fn to_glyph(self) -> char {
        match self {
            Self::Spade => '\u{2660}',
            Self::Heart => '\u{2665}',
            Self::Diamond => '\u{2666}',
            Self::Club => '\u{2663}',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_glyph())
    }
}

/// The main struct of this library.
/// This is a carrier for Suit and Value combined.
///
/// Equality is by both value and suit. Ranking code only ever
/// looks at the value.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct Card {
    /// The face value of this card.
    pub value: Value,
    /// The suit of this card.
    pub suit: Suit,
}

impl Card {
    pub const fn new(value: Value, suit: Suit) -> Self {
        Self { value, suit }
    }

    /// Parse a run of card tokens such as `"9♠8♠ 7s,6d"`.
    ///
    /// Whitespace and commas between tokens are skipped. The same card
    /// showing up twice is an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use holdem_outs::core::{Card, Suit, Value};
    ///
    /// let cards = Card::parse_many("A♠ Td").unwrap();
    /// assert_eq!(vec![
    ///     Card::new(Value::Ace, Suit::Spade),
    ///     Card::new(Value::Ten, Suit::Diamond),
    /// ], cards);
    ///
    /// assert!(Card::parse_many("AsAs").is_err());
    /// ```
    pub fn parse_many(cards_str: &str) -> Result<Vec<Self>, PokerError> {
        let mut chars = cards_str
            .chars()
            .filter(|c| !c.is_ascii_whitespace() && *c != ',');
        let mut seen = CardBitSet::new();
        let mut cards = Vec::new();

        while let Some(vc) = chars.next() {
            let sc = chars.next().ok_or(PokerError::TooFewChars)?;
            let card = Self::from_chars(vc, sc)?;
            if !seen.insert(card) {
                return Err(PokerError::DuplicateCard(card));
            }
            cards.push(card);
        }
        Ok(cards)
    }

    fn from_chars(vc: char, sc: char) -> Result<Self, PokerError> {
        let value = Value::from_char(vc).ok_or(PokerError::UnexpectedValueChar(vc))?;
        let suit = Suit::from_char(sc).ok_or(PokerError::UnexpectedSuitChar(sc))?;
        Ok(Self { value, suit })
    }
}

/// Cards are indexed value major, suit minor. So iterating
/// the indices in order walks the deck `2♠ 2♥ 2♦ 2♣ 3♠ ...`
impl From<Card> for u8 {
    fn from(card: Card) -> Self {
        card.value as u8 * 4 + card.suit as u8
    }
}

impl From<u8> for Card {
    fn from(idx: u8) -> Self {
        Self {
            value: Value::from_u8(idx / 4),
            suit: Suit::from_u8(idx % 4),
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value.to_char(), self.suit.to_glyph())
    }
}

impl FromStr for Card {
    type Err = PokerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let vc = chars.next().ok_or(PokerError::TooFewChars)?;
        let sc = chars.next().ok_or(PokerError::TooFewChars)?;
        if chars.next().is_some() {
            return Err(PokerError::UnparsedCharsRemaining);
        }
        Self::from_chars(vc, sc)
    }
}

impl TryFrom<&str> for Card {
    type Error = PokerError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Card {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Card {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let token = String::deserialize(deserializer)?;
        token.parse().map_err(serde::de::Error::custom)
    }
}
