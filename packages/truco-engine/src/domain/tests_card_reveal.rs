use crate::domain::card_reveal::{CardRevealSequence, FaceOffResult};
use crate::domain::test_state_helpers::card;

/// Reveal `(player, token)` pairs in order, asserting each is accepted.
fn play(mano: u8, reveals: &[(u8, &str)]) -> CardRevealSequence {
    let mut seq = CardRevealSequence::new(mano);
    for (player, token) in reveals {
        assert!(
            seq.add_step(card(token), *player),
            "player {player} could not reveal {token} after {} steps",
            seq.len()
        );
    }
    seq
}

#[test]
fn mano_opens_and_opponent_answers() {
    let mut seq = CardRevealSequence::new(1);
    assert_eq!(seq.next_player(), Some(1));
    assert!(!seq.add_step(card("3O"), 0));
    assert!(seq.add_step(card("3O"), 1));
    assert_eq!(seq.next_player(), Some(0));
    assert!(seq.face_offs().is_empty());
}

#[test]
fn face_off_winner_leads_next() {
    let seq = play(0, &[(0, "4C"), (1, "5B")]);
    assert_eq!(seq.face_offs(), &[FaceOffResult::Won(1)]);
    assert_eq!(seq.next_player(), Some(1));
}

#[test]
fn tie_returns_lead_to_mano() {
    let seq = play(1, &[(1, "3O"), (0, "3C")]);
    assert_eq!(seq.face_offs(), &[FaceOffResult::Tie]);
    assert_eq!(seq.next_player(), Some(1));
}

#[test]
fn split_face_offs_go_to_third_led_by_second_winner() {
    let seq = play(0, &[(0, "4C"), (1, "5B"), (1, "6O"), (0, "1E")]);
    assert_eq!(seq.face_offs(), &[FaceOffResult::Won(1), FaceOffResult::Won(0)]);
    assert!(!seq.is_finished());
    assert_eq!(seq.next_player(), Some(0));
    assert_eq!(seq.winner(), None);
}

#[test]
fn two_wins_finish_the_round() {
    let seq = play(0, &[(0, "3C"), (1, "4B"), (0, "2O"), (1, "5B")]);
    assert!(seq.is_finished());
    assert_eq!(seq.winner(), Some(0));
    assert_eq!(seq.next_player(), None);
}

#[test]
fn win_then_tie_finishes_for_the_winner() {
    let seq = play(0, &[(0, "3C"), (1, "4B"), (0, "2O"), (1, "2B")]);
    assert_eq!(seq.face_offs(), &[FaceOffResult::Won(0), FaceOffResult::Tie]);
    assert!(seq.is_finished());
    assert_eq!(seq.winner(), Some(0));
}

#[test]
fn tie_then_win_finishes_for_the_winner() {
    let seq = play(0, &[(0, "3C"), (1, "3B"), (0, "4O"), (1, "2B")]);
    assert_eq!(seq.face_offs(), &[FaceOffResult::Tie, FaceOffResult::Won(1)]);
    assert!(seq.is_finished());
    assert_eq!(seq.winner(), Some(1));
}

#[test]
fn two_ties_go_to_third_led_by_mano() {
    let seq = play(1, &[(1, "3C"), (0, "3B"), (1, "2O"), (0, "2B")]);
    assert!(!seq.is_finished());
    assert_eq!(seq.next_player(), Some(1));
}

#[test]
fn triple_tie_goes_to_mano() {
    let seq = play(
        1,
        &[(1, "3C"), (0, "3B"), (1, "2O"), (0, "2B"), (1, "12E"), (0, "12B")],
    );
    assert!(seq.is_finished());
    assert_eq!(seq.winner(), Some(1));
}

#[test]
fn split_then_tie_goes_to_first_winner() {
    let seq = play(
        0,
        &[(0, "4C"), (1, "5B"), (1, "6O"), (0, "1E"), (0, "2C"), (1, "2E")],
    );
    assert_eq!(seq.face_offs().last(), Some(&FaceOffResult::Tie));
    assert_eq!(seq.winner(), Some(1));
}

#[test]
fn espada_one_leading_second_face_off_ends_round() {
    let seq = play(0, &[(0, "3C"), (1, "4B"), (0, "1E")]);
    assert!(seq.is_finished());
    assert_eq!(seq.winner(), Some(0));
    assert_eq!(seq.next_player(), None);
}

#[test]
fn espada_one_after_a_tie_is_played_out() {
    let seq = play(0, &[(0, "3C"), (1, "3B"), (0, "1E")]);
    assert!(!seq.is_finished());
    assert_eq!(seq.next_player(), Some(1));
}

#[test]
fn win_counts() {
    let seq = play(0, &[(0, "4C"), (1, "5B"), (1, "6O"), (0, "1E")]);
    assert_eq!(seq.wins(0), 1);
    assert_eq!(seq.wins(1), 1);
}
