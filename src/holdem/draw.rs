use std::fmt;
use std::str::FromStr;

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{Level, event};

use crate::core::{Card, Deck, PokerError, Suit, Value, find_straight};

use super::Spot;

/// The classic drawing hands a trainer asks about.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawKind {
    /// Open ended straight draw, 8 outs.
    Oesd,
    /// Inside straight draw, 4 outs.
    Gutshot,
    /// Four to a flush, 9 outs.
    Flush,
    OesdFlush,
    GutshotFlush,
}

const DRAW_KINDS: [DrawKind; 5] = [
    DrawKind::Oesd,
    DrawKind::Gutshot,
    DrawKind::Flush,
    DrawKind::OesdFlush,
    DrawKind::GutshotFlush,
];

impl DrawKind {
    pub const fn kinds() -> [Self; 5] {
        DRAW_KINDS
    }

    /// Guess the draw from how many outs there are.
    ///
    /// ```
    /// use holdem_outs::holdem::DrawKind;
    ///
    /// assert_eq!(Some(DrawKind::Flush), DrawKind::from_out_count(9));
    /// assert_eq!(Some(DrawKind::OesdFlush), DrawKind::from_out_count(15));
    /// assert_eq!(None, DrawKind::from_out_count(5));
    /// ```
    pub fn from_out_count(n: usize) -> Option<Self> {
        match n {
            n if n >= 13 => Some(DrawKind::OesdFlush),
            12 => Some(DrawKind::GutshotFlush),
            9 => Some(DrawKind::Flush),
            8 => Some(DrawKind::Oesd),
            4 => Some(DrawKind::Gutshot),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DrawKind::Oesd => "oesd",
            DrawKind::Gutshot => "gutshot",
            DrawKind::Flush => "flush",
            DrawKind::OesdFlush => "oesd-flush",
            DrawKind::GutshotFlush => "gutshot-flush",
        }
    }

    fn has_flush(&self) -> bool {
        matches!(
            self,
            DrawKind::Flush | DrawKind::OesdFlush | DrawKind::GutshotFlush
        )
    }

    fn has_gutshot(&self) -> bool {
        matches!(self, DrawKind::Gutshot | DrawKind::GutshotFlush)
    }
}

impl fmt::Display for DrawKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown draw kind {0:?}")]
pub struct UnknownDrawKind(String);

impl FromStr for DrawKind {
    type Err = UnknownDrawKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        DRAW_KINDS
            .into_iter()
            .find(|k| k.name() == lower)
            .ok_or_else(|| UnknownDrawKind(s.to_string()))
    }
}

/// Four straight values in dealing order (two for hero, two for the
/// board) and the value window the last board card has to stay out of.
struct StraightLayout {
    values: [Value; 4],
    low: u8,
    high: u8,
    // The ace plays below a deuce.
    no_ace: bool,
}

impl StraightLayout {
    fn new<R: Rng>(gutshot: bool, rng: &mut R) -> Self {
        let v = |i: u8| Value::from_u8(i);
        if gutshot {
            // l, l+1, _, l+3, l+4 with hero holding the ends.
            let l = rng.random_range(0..=8);
            Self {
                values: [v(l), v(l + 4), v(l + 1), v(l + 3)],
                low: l.saturating_sub(1),
                high: l + 5,
                no_ace: l == 0,
            }
        } else {
            // Deuce up to seven as the low card.
            let r = rng.random_range(0..=5);
            Self {
                values: [v(r), v(r + 1), v(r + 2), v(r + 3)],
                low: r.saturating_sub(1),
                high: r + 4,
                no_ace: r == 0,
            }
        }
    }

    fn unrelated(&self, value: Value) -> bool {
        !(self.low..=self.high).contains(&value.index()) && !(self.no_ace && value == Value::Ace)
    }
}

/// Deals cards one at a time and remembers them.
struct Dealer {
    deck: Deck,
    dealt: Vec<Card>,
}

impl Dealer {
    fn new() -> Self {
        Self {
            deck: Deck::new(),
            dealt: Vec::with_capacity(5),
        }
    }

    fn deal<R, P>(&mut self, rng: &mut R, pred: P) -> Result<(), PokerError>
    where
        R: Rng,
        P: Fn(&Card) -> bool,
    {
        let card = self
            .deck
            .deal_matching(rng, pred)
            .ok_or(PokerError::NoCardsAvailable)?;
        self.dealt.push(card);
        Ok(())
    }

    fn suit_counts(&self) -> [usize; 4] {
        let mut counts = [0; 4];
        for c in &self.dealt {
            counts[c.suit as usize] += 1;
        }
        counts
    }
}

impl Spot {
    /// Deal a random flop spot where hero has the given draw.
    ///
    /// Straight draws keep every suit to two cards or fewer so there is no
    /// flush draw hiding in them. The combo draws put hero's suit on
    /// exactly two board cards.
    ///
    /// # Examples
    ///
    /// ```
    /// use holdem_outs::holdem::{DrawKind, Spot};
    /// use rand::{SeedableRng, rngs::StdRng};
    ///
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let spot = Spot::random_draw(DrawKind::Oesd, &mut rng).unwrap();
    /// assert_eq!(3, spot.board().len());
    /// ```
    pub fn random_draw<R: Rng>(kind: DrawKind, rng: &mut R) -> Result<Self, PokerError> {
        let mut dealer = Dealer::new();
        let suit = Suit::from_u8(rng.random_range(0..4));

        if kind == DrawKind::Flush {
            for _ in 0..4 {
                dealer.deal(rng, |c| c.suit == suit)?;
            }
            // The off suit card shouldn't turn the four into a made straight.
            let values: Vec<Value> = dealer.dealt.iter().map(|c| c.value).collect();
            dealer.deal(rng, |c| {
                let mut with = values.clone();
                with.push(c.value);
                c.suit != suit && find_straight(&with).is_none()
            })?;
        } else {
            let layout = StraightLayout::new(kind.has_gutshot(), rng);
            // Which of the three board cards is off hero's suit.
            let off_suit = rng.random_range(2..5);
            for i in 0..5 {
                let counts = dealer.suit_counts();
                dealer.deal(rng, |c| {
                    let value_ok = match layout.values.get(i) {
                        Some(v) => c.value == *v,
                        None => layout.unrelated(c.value),
                    };
                    let suit_ok = if kind.has_flush() {
                        (i == off_suit) != (c.suit == suit)
                    } else {
                        counts[c.suit as usize] < 2
                    };
                    value_ok && suit_ok
                })?;
            }
        }

        let (hero, board) = dealer.dealt.split_at_mut(2);
        board.shuffle(rng);
        event!(Level::DEBUG, %kind, ?hero, ?board, "Dealt draw");
        Spot::new(hero, board, None)
    }
}
