use crate::domain::actions::{
    Action, ConfirmRoundFinished, RevealCard, RevealEnvidoScore, SayEnvido, SayEnvidoNoQuiero,
    SayEnvidoQuiero, SayFaltaEnvido, SayRealEnvido, SaySonBuenas, SaySonMejores, SayTruco,
};
use crate::domain::betting::EnvidoStep;
use crate::domain::test_state_helpers::{act, can, card, game_with_deal, possible_names};

// p0 scores 30 (7O 3O), p1 scores 28 (5C 3C).
const P0: [&str; 3] = ["7O", "3O", "12E"];
const P1: [&str; 3] = ["5C", "3C", "4B"];

#[test]
fn accepted_envido_pays_two_to_higher_score() {
    let mut g = game_with_deal(&P0, &P1);
    act(&mut g, SayEnvido { player_id: 0 });
    assert_eq!(g.turn_player_id, 1);

    // Client-supplied score is replaced by the real one.
    act(&mut g, SayEnvidoQuiero { player_id: 1, score: 33 });
    let logged = &g.rounds_log[0].actions[1].action;
    assert_eq!(
        logged,
        &Action::SayEnvidoQuiero(SayEnvidoQuiero { player_id: 1, score: 28 })
    );
    assert_eq!(g.turn_player_id, 0);

    assert!(!can(&g, SaySonBuenas { player_id: 0 }));
    assert!(!can(&g, SaySonBuenas { player_id: 1 }));
    act(&mut g, SaySonMejores::new(0));

    assert_eq!(g.score(0), 2);
    assert_eq!(g.score(1), 0);
    assert_eq!(g.round.result.envido_winner, Some(0));
    assert_eq!(g.round.result.envido_points, 2);
    assert!(g.round.envido.is_finished());
    assert_eq!(g.turn_player_id, 0);
}

#[test]
fn loser_answers_son_buenas() {
    // Swapped hands: the accepter holds the better envido.
    let mut g = game_with_deal(&P1, &P0);
    act(&mut g, SayEnvido { player_id: 0 });
    act(&mut g, SayEnvidoQuiero::new(1));
    assert!(!can(&g, SaySonMejores::new(0)));
    act(&mut g, SaySonBuenas { player_id: 0 });
    assert_eq!(g.score(1), 2);
    assert_eq!(g.round.envido.last_step(), Some(EnvidoStep::SonBuenas));
}

#[test]
fn mano_wins_envido_ties() {
    let mut g = game_with_deal(&["7O", "3O", "12E"], &["7C", "3C", "4B"]);
    act(&mut g, SayEnvido { player_id: 0 });
    act(&mut g, SayEnvidoQuiero::new(1));
    assert!(can(&g, SaySonMejores::new(0)));
    assert!(!can(&g, SaySonBuenas { player_id: 0 }));
}

#[test]
fn declined_envido_pays_the_raiser() {
    let mut g = game_with_deal(&P0, &P1);
    act(&mut g, SayRealEnvido { player_id: 0 });
    act(&mut g, SayEnvidoNoQuiero::new(1));
    assert_eq!(g.score(0), 1);
    assert_eq!(
        g.rounds_log[0].actions[1].action,
        Action::SayEnvidoNoQuiero(SayEnvidoNoQuiero { player_id: 1, cost: 1 })
    );
    assert_eq!(g.turn_player_id, 0);
}

#[test]
fn full_escalation_declined_pays_seven() {
    let mut g = game_with_deal(&P0, &P1);
    act(&mut g, SayEnvido { player_id: 0 });
    act(&mut g, SayEnvido { player_id: 1 });
    act(&mut g, SayRealEnvido { player_id: 0 });
    act(&mut g, SayFaltaEnvido { player_id: 1 });
    assert!(!can(&g, SayFaltaEnvido { player_id: 0 }));
    act(&mut g, SayEnvidoNoQuiero::new(0));
    assert_eq!(g.score(1), 7);
}

#[test]
fn falta_envido_in_malas_wins_the_game() {
    let mut g = game_with_deal(&P0, &P1);
    act(&mut g, SayFaltaEnvido { player_id: 0 });
    act(&mut g, SayEnvidoQuiero::new(1));
    act(&mut g, SaySonMejores::new(0));
    assert!(g.is_ended);
    assert_eq!(g.winner, Some(0));
    assert_eq!(g.score(0), 30);
    assert!(g.possible_actions_for(0).is_empty());
    assert!(g.possible_actions_for(1).is_empty());
}

#[test]
fn envido_needs_an_unrevealed_hand() {
    let mut g = game_with_deal(&P0, &P1);
    act(&mut g, RevealCard { player_id: 0, card: card("12E") });
    assert!(can(&g, SayEnvido { player_id: 1 }));
    act(&mut g, RevealCard { player_id: 1, card: card("4B") });
    assert!(!can(&g, SayEnvido { player_id: 0 }));
    assert!(!possible_names(&g, 0).contains(&"say_envido"));
}

#[test]
fn envido_goes_before_a_pending_truco() {
    let mut g = game_with_deal(&P0, &P1);
    act(&mut g, SayTruco { player_id: 0 });
    assert!(can(&g, SayEnvido { player_id: 1 }));
    act(&mut g, SayEnvido { player_id: 1 });
    assert!(!possible_names(&g, 0).contains(&"say_truco_quiero"));
    act(&mut g, SayEnvidoNoQuiero::new(0));
    assert_eq!(g.score(1), 1);
    // Back to answering the truco.
    assert_eq!(g.expected_turn(), 1);
    assert!(possible_names(&g, 1).contains(&"say_truco_quiero"));
}

#[test]
fn envido_winner_must_show_cards_before_confirming() {
    let mut g = game_with_deal(&P0, &P1);
    act(&mut g, SayEnvido { player_id: 0 });
    act(&mut g, SayEnvidoQuiero::new(1));
    act(&mut g, SaySonMejores::new(0));

    act(&mut g, RevealCard { player_id: 0, card: card("12E") });
    act(&mut g, RevealCard { player_id: 1, card: card("4B") });
    act(&mut g, RevealCard { player_id: 0, card: card("7O") });
    act(&mut g, RevealCard { player_id: 1, card: card("5C") });
    assert!(g.round.is_finished);
    assert_eq!(g.score(0), 3);

    assert_eq!(g.envido_reveal_owed(), Some(0));
    assert_eq!(possible_names(&g, 0), vec!["reveal_envido_score"]);
    assert!(possible_names(&g, 1).is_empty());
    assert!(!can(&g, ConfirmRoundFinished { player_id: 1 }));

    act(&mut g, RevealEnvidoScore { player_id: 0 });
    assert_eq!(g.player(0).hand.revealed_envido_score(), 30);
    assert_eq!(g.envido_reveal_owed(), None);
    assert_eq!(possible_names(&g, 1), vec!["confirm_round_finished"]);
}

#[test]
fn no_reveal_owed_when_cards_already_prove_score() {
    let mut g = game_with_deal(&P0, &P1);
    act(&mut g, SayEnvido { player_id: 0 });
    act(&mut g, SayEnvidoQuiero::new(1));
    act(&mut g, SaySonMejores::new(0));
    act(&mut g, RevealCard { player_id: 0, card: card("7O") });
    act(&mut g, RevealCard { player_id: 1, card: card("4B") });
    act(&mut g, RevealCard { player_id: 0, card: card("3O") });
    act(&mut g, RevealCard { player_id: 1, card: card("5C") });
    assert!(g.round.is_finished);
    assert_eq!(g.envido_reveal_owed(), None);
    assert!(can(&g, ConfirmRoundFinished { player_id: 0 }));
}
