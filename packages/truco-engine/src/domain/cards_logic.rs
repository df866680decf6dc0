//! Card game logic: truco ranking, envido and flor scoring

use std::cmp::Ordering;

use super::cards_types::{Card, Suit};

/// Bonus added to a same-suit envido pair and to every flor.
pub const SAME_SUIT_BONUS: u8 = 20;

/// Strength of a card in a face-off. Higher beats lower; equal strengths tie.
///
/// The four special cards (espada 1, basto 1, espada 7, oro 7) sit above the
/// rest, which rank 3 > 2 > 1 > 12 > 11 > 10 > 7 > 6 > 5 > 4 regardless of suit.
pub fn truco_rank(card: Card) -> u8 {
    match (card.suit, card.number) {
        (Suit::Espada, 1) => 14,
        (Suit::Basto, 1) => 13,
        (Suit::Espada, 7) => 12,
        (Suit::Oro, 7) => 11,
        (_, 3) => 10,
        (_, 2) => 9,
        (_, 1) => 8,
        (_, 12) => 7,
        (_, 11) => 6,
        (_, 10) => 5,
        (_, 7) => 4,
        (_, 6) => 3,
        (_, 5) => 2,
        _ => 1,
    }
}

/// Compare two cards by truco strength: `Greater` when `a` beats `b`.
pub fn compare_truco_score(a: Card, b: Card) -> Ordering {
    truco_rank(a).cmp(&truco_rank(b))
}

/// True for the four cards that rank above every ordinary card.
pub fn is_special(card: Card) -> bool {
    truco_rank(card) > truco_rank(Card {
        suit: Suit::Oro,
        number: 3,
    })
}

/// The cards that make up the envido score of `cards`.
///
/// The best same-suit pair when one exists, otherwise the single best card.
/// Empty only when `cards` is empty.
pub fn envido_cards(cards: &[Card]) -> Vec<Card> {
    let mut best: Option<(u8, Vec<Card>)> = None;

    for suit in Suit::ALL {
        let mut same: Vec<Card> = cards.iter().copied().filter(|c| c.suit == suit).collect();
        if same.len() < 2 {
            continue;
        }
        same.sort_by(|a, b| b.envido_value().cmp(&a.envido_value()));
        let pair = vec![same[0], same[1]];
        let score = SAME_SUIT_BONUS + same[0].envido_value() + same[1].envido_value();
        if best.as_ref().map_or(true, |(s, _)| score > *s) {
            best = Some((score, pair));
        }
    }

    if let Some((_, pair)) = best {
        return pair;
    }

    cards
        .iter()
        .copied()
        .max_by_key(|c| c.envido_value())
        .into_iter()
        .collect()
}

/// Envido score of a hand, counting every card whether revealed or not.
///
/// Same-suit pair: the best pair's values + 20. Otherwise the best single
/// card's value. Always within 0..=33 for a three-card hand.
pub fn envido_score(cards: &[Card]) -> u8 {
    let chosen = envido_cards(cards);
    let sum: u8 = chosen.iter().map(|c| c.envido_value()).sum();
    if chosen.len() == 2 {
        SAME_SUIT_BONUS + sum
    } else {
        sum
    }
}

/// A hand "has flor" when it holds three cards of the same suit.
pub fn has_flor(cards: &[Card]) -> bool {
    match cards.split_first() {
        Some((first, rest)) => cards.len() == 3 && rest.iter().all(|c| c.suit == first.suit),
        None => false,
    }
}

/// Flor score: 20 + the value of all three cards, or `None` without flor.
pub fn flor_score(cards: &[Card]) -> Option<u8> {
    if !has_flor(cards) {
        return None;
    }
    Some(SAME_SUIT_BONUS + cards.iter().map(|c| c.envido_value()).sum::<u8>())
}
