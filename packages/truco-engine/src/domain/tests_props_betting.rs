//! Property tests for betting sequences and the card reveal sequence.

use proptest::prelude::*;

use crate::domain::betting::{
    BettingSequence, EnvidoSequence, FlorSequence, StepTable, TrucoSequence,
};
use crate::domain::card_reveal::{CardRevealSequence, FaceOffResult};
use crate::domain::rules::opponent_of;
use crate::domain::test_gens;
use crate::domain::test_prelude;

/// Feed `steps` through `add_step`, checking the table after every accepted one.
fn feed<S: StepTable>(seq: &mut BettingSequence<S>, steps: &[S]) -> Result<(), TestCaseError> {
    for (i, step) in steps.iter().enumerate() {
        let expected = seq.can_add_step(*step);
        let before = seq.clone();
        let added = seq.add_step(*step, (i % 2) as u8);
        prop_assert_eq!(added, expected);
        if added {
            prop_assert!(S::table().contains_key(&seq.step_names()), "'{}' not in table", seq);
        } else {
            prop_assert_eq!(&*seq, &before);
        }
    }
    Ok(())
}

/// Cost previews never mutate and always agree with themselves.
fn hint_is_stable<S: StepTable>(seq: &BettingSequence<S>) -> Result<(), TestCaseError> {
    let before = seq.clone();
    let first = seq.cost(30, 7, 3, true);
    let second = seq.cost(30, 7, 3, true);
    prop_assert_eq!(first, second);
    prop_assert_eq!(seq, &before);
    if !seq.is_finished() {
        prop_assert!(seq.cost(30, 7, 3, false).is_err());
    }
    Ok(())
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    #[test]
    fn prop_envido_add_step_stays_in_table(
        steps in proptest::collection::vec(test_gens::envido_step(), 0..8),
    ) {
        let mut seq = EnvidoSequence::new();
        feed(&mut seq, &steps)?;
        hint_is_stable(&seq)?;
    }

    #[test]
    fn prop_flor_add_step_stays_in_table(
        steps in proptest::collection::vec(test_gens::flor_step(), 0..8),
    ) {
        let mut seq = FlorSequence::new();
        feed(&mut seq, &steps)?;
        hint_is_stable(&seq)?;
    }

    #[test]
    fn prop_truco_add_step_stays_in_table(
        steps in proptest::collection::vec(test_gens::truco_step(), 0..10),
    ) {
        let mut seq = TrucoSequence::new();
        feed(&mut seq, &steps)?;
        hint_is_stable(&seq)?;
        if seq.is_finished() {
            let cost = seq.cost(30, 0, 0, false);
            prop_assert!(matches!(cost, Ok(1..=4)), "unexpected cost {:?}", cost);
        }
    }

    /// Property: reveals alternate as dictated and the sequence finishes
    /// exactly when one player leads on face-offs or all three are played.
    #[test]
    fn prop_card_reveal_termination(
        deal in test_gens::deal(),
        mano in test_gens::player_id(),
        order in proptest::collection::vec(0usize..3, 6),
    ) {
        let probe = deal[0][0];
        let mut hands = deal;
        let mut seq = CardRevealSequence::new(mano);
        let mut i = 0;
        while let Some(player) = seq.next_player() {
            prop_assert!(!seq.add_step(probe, opponent_of(player)));
            let hand = &mut hands[player as usize];
            let card = hand.remove(order[i] % hand.len());
            prop_assert!(seq.add_step(card, player));
            i += 1;
        }
        prop_assert!(seq.len() <= 6);

        let done = seq.face_offs().len();
        let (w0, w1) = (seq.wins(0), seq.wins(1));
        let espada_cut = seq.len() == 3;
        prop_assert!(seq.is_finished());
        prop_assert!(espada_cut || done == 3 || (done >= 2 && w0 != w1));
        let winner = seq.winner();
        prop_assert!(winner.is_some());
        if !espada_cut && w0 != w1 {
            prop_assert_eq!(winner, Some(if w0 > w1 { 0 } else { 1 }));
        }
        if seq.face_offs().iter().all(|r| *r == FaceOffResult::Tie) {
            prop_assert_eq!(winner, Some(mano));
        }
    }
}
