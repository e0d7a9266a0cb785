use tracing::{Level, event, trace_span};

use crate::core::{Card, Category, Hand, PokerError, compare, evaluate};

use super::{DangerRule, DrawKind, OutsConfig, Score, Spot};

/// Effective outs split into the ones that really help hero and the ones
/// that may improve someone else just as much.
///
/// Both lists are in deck order and never share a card.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outs {
    /// Outs that leave hero ahead.
    pub positive: Vec<Card>,
    /// Outs after which the board or villain beats hero.
    pub negative: Vec<Card>,
}

impl Outs {
    /// Total number of outs, safe or not.
    pub fn len(&self) -> usize {
        self.positive.len() + self.negative.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positive.is_empty() && self.negative.is_empty()
    }

    /// Every out, the positive ones first.
    pub fn all(&self) -> impl Iterator<Item = &Card> {
        self.positive.iter().chain(&self.negative)
    }

    pub fn contains(&self, card: &Card) -> bool {
        self.positive.contains(card) || self.negative.contains(card)
    }

    /// The kind of draw these outs look like, going by the count.
    pub fn draw_kind(&self) -> Option<DrawKind> {
        DrawKind::from_out_count(self.len())
    }
}

/// Does the card only pair a board card that hero doesn't hold? That
/// kind of pair isn't hero's improvement.
fn pairs_board_only(spot: &Spot, card: &Card, after: &Hand) -> bool {
    after.category() == Category::OnePair
        && !spot.hero().iter().any(|c| c.value == card.value)
        && spot.board().iter().any(|c| c.value == card.value)
}

/// Is `card` dangerous for hero once it's on the board?
fn is_dangerous(
    spot: &Spot,
    config: &OutsConfig,
    card: Card,
    hero_after: &Hand,
    hero_gain: i64,
) -> Result<bool, PokerError> {
    let mut board = spot.board().to_vec();
    board.push(card);

    match spot.villain() {
        Some(villain) => {
            let mut villain_cards = villain.to_vec();
            villain_cards.extend_from_slice(spot.board());
            let villain_before = evaluate(&villain_cards)?;
            villain_cards.push(card);
            let villain_after = evaluate(&villain_cards)?;

            Ok(match config.danger {
                DangerRule::FinalHandBeats => compare(&villain_after, hero_after).is_gt(),
                DangerRule::VillainGain => {
                    let villain_gain =
                        Score::from(&villain_after).gain_over(&Score::from(&villain_before));
                    villain_gain >= hero_gain
                }
            })
        }
        // Nobody can play the board alone until it has 5 cards.
        None if board.len() < 5 => Ok(false),
        None => {
            let board_hand = evaluate(&board)?;
            Ok(compare(&board_hand, hero_after).is_gt())
        }
    }
}

pub(crate) fn classify_spot(spot: &Spot, config: &OutsConfig) -> Result<Outs, PokerError> {
    let span = trace_span!("classify", board_len = spot.board().len());
    let _enter = span.enter();

    let current = spot.hero_hand()?;
    let current_score = Score::from(&current);
    let mut outs = Outs::default();

    for card in spot.effective_outs(config)? {
        let after = evaluate(&spot.hero_with(&[card]))?;
        // High card improvements are never real outs.
        if after.category() < Category::OnePair {
            continue;
        }
        let gain = Score::from(&after).gain_over(&current_score);
        if gain <= 0 {
            continue;
        }
        if pairs_board_only(spot, &card, &after) {
            event!(Level::TRACE, %card, "Skipping board pair");
            continue;
        }

        let dangerous = is_dangerous(spot, config, card, &after, gain)?;
        event!(Level::TRACE, %card, hand = %after, dangerous, "Classified out");
        if dangerous {
            outs.negative.push(card);
        } else {
            outs.positive.push(card);
        }
    }

    event!(
        Level::DEBUG,
        hand = %current,
        positive = outs.positive.len(),
        negative = outs.negative.len(),
        "Classified outs"
    );
    Ok(outs)
}

/// Split hero's outs into positive and negative ones.
///
/// Only made hands (a pair or better) that raise hero's kicker-free score
/// count, and a card that merely pairs the board is skipped. With a
/// villain hand an out is negative when villain ends up strictly ahead.
/// Without one the completed board is checked against hero, but since
/// hero always plays from a superset of the board this can only tie,
/// and a tie is safe.
///
/// # Examples
///
/// ```
/// use holdem_outs::core::Card;
/// use holdem_outs::holdem::classify;
///
/// let hero = Card::parse_many("9♠8♠").unwrap();
/// let board = Card::parse_many("7♠6♦2♣").unwrap();
/// let outs = classify(&hero, &board, None).unwrap();
/// assert!(outs.negative.is_empty());
/// assert!(outs.positive.contains(&"T♥".parse().unwrap()));
/// ```
pub fn classify(hero: &[Card], board: &[Card], villain: Option<&[Card]>) -> Result<Outs, PokerError> {
    Spot::new(hero, board, villain)?.classify(&OutsConfig::default())
}
