// Proptest generators for domain types.
// Hands are drawn from one shuffled deck, so generated cards never repeat.

use proptest::prelude::*;

use crate::domain::betting::{EnvidoStep, FlorStep, TrucoStep};
use crate::domain::dealing::{full_deck, Deal};
use crate::domain::{Card, PlayerId, Suit};

pub fn suit() -> impl Strategy<Value = Suit> {
    prop_oneof![
        Just(Suit::Oro),
        Just(Suit::Copa),
        Just(Suit::Espada),
        Just(Suit::Basto),
    ]
}

/// Any card of the 40-card deck.
pub fn card() -> impl Strategy<Value = Card> {
    proptest::sample::select(full_deck())
}

/// `count` distinct cards.
pub fn unique_cards(count: usize) -> impl Strategy<Value = Vec<Card>> {
    Just(full_deck())
        .prop_shuffle()
        .prop_map(move |deck| deck.into_iter().take(count).collect())
}

pub fn hand() -> impl Strategy<Value = Vec<Card>> {
    unique_cards(3)
}

/// Two hands of three cards sharing no card.
pub fn deal() -> impl Strategy<Value = Deal> {
    unique_cards(6).prop_map(|cards| [cards[..3].to_vec(), cards[3..].to_vec()])
}

pub fn player_id() -> impl Strategy<Value = PlayerId> {
    0u8..=1u8
}

pub fn envido_step() -> impl Strategy<Value = EnvidoStep> {
    proptest::sample::select(vec![
        EnvidoStep::Envido,
        EnvidoStep::RealEnvido,
        EnvidoStep::FaltaEnvido,
        EnvidoStep::Quiero,
        EnvidoStep::NoQuiero,
        EnvidoStep::SonBuenas,
        EnvidoStep::SonMejores,
    ])
}

pub fn flor_step() -> impl Strategy<Value = FlorStep> {
    proptest::sample::select(vec![
        FlorStep::Flor,
        FlorStep::Contraflor,
        FlorStep::ContraflorAlResto,
        FlorStep::ConFlorMeAchico,
        FlorStep::ConFlorQuiero,
        FlorStep::FlorScore,
    ])
}

pub fn truco_step() -> impl Strategy<Value = TrucoStep> {
    proptest::sample::select(vec![
        TrucoStep::Truco,
        TrucoStep::QuieroRetruco,
        TrucoStep::QuieroValeCuatro,
        TrucoStep::Quiero,
        TrucoStep::NoQuiero,
    ])
}
