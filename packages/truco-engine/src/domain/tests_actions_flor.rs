use crate::domain::actions::{
    ConfirmRoundFinished, RevealCard, RevealFlorScore, SayConFlorMeAchico, SayConFlorQuiero,
    SayContraflor, SayContraflorAlResto, SayEnvido, SayFlor, SayFlorScore, SayMeVoyAlMazo,
    SayTruco,
};
use crate::domain::test_state_helpers::{
    act, can, card, game_with_deal, game_with_flor, possible_names,
};

const FLOR_26: [&str; 3] = ["1C", "2C", "3C"];
const FLOR_36: [&str; 3] = ["4E", "5E", "7E"];
const PLAIN: [&str; 3] = ["4O", "5B", "6B"];

#[test]
fn flor_holder_must_sing_first() {
    let g = game_with_flor(&FLOR_26, &PLAIN);
    assert_eq!(possible_names(&g, 0), vec!["say_flor"]);
    assert!(!can(&g, SayMeVoyAlMazo { player_id: 0 }));
    assert!(!can(&g, SayEnvido { player_id: 0 }));
    assert!(!can(&g, SayTruco { player_id: 0 }));
    assert!(!can(&g, RevealCard { player_id: 0, card: card("1C") }));
}

#[test]
fn flor_is_ignored_when_disabled() {
    let g = game_with_deal(&FLOR_26, &PLAIN);
    assert!(!can(&g, SayFlor { player_id: 0 }));
    assert!(can(&g, SayEnvido { player_id: 0 }));
}

#[test]
fn unanswered_flor_scores_three() {
    let mut g = game_with_flor(&FLOR_26, &PLAIN);
    act(&mut g, SayFlor { player_id: 0 });
    assert_eq!(g.score(0), 3);
    assert_eq!(g.round.result.flor_winner, Some(0));
    assert!(!g.round.flor.is_pending());
    assert_eq!(g.turn_player_id, 0);
    assert!(can(&g, RevealCard { player_id: 0, card: card("1C") }));
    // Envido is gone for the rest of the round.
    act(&mut g, RevealCard { player_id: 0, card: card("1C") });
    assert!(!can(&g, SayEnvido { player_id: 1 }));
}

#[test]
fn flor_voids_a_pending_envido() {
    let mut g = game_with_flor(&PLAIN, &FLOR_26);
    act(&mut g, SayEnvido { player_id: 0 });
    assert_eq!(possible_names(&g, 1), vec!["say_flor"]);
    act(&mut g, SayFlor { player_id: 1 });
    assert!(!g.round.envido.is_pending());
    assert!(g.round.envido.is_awarded());
    assert_eq!(g.round.result.envido_winner, None);
    assert_eq!(g.score(0), 0);
    assert_eq!(g.score(1), 3);
    assert_eq!(g.turn_player_id, 0);
}

#[test]
fn contraflor_accepted_goes_to_higher_flor() {
    let mut g = game_with_flor(&FLOR_26, &FLOR_36);
    act(&mut g, SayFlor { player_id: 0 });
    assert!(g.round.flor.is_pending());
    assert_eq!(g.turn_player_id, 1);

    act(&mut g, SayContraflor { player_id: 1 });
    act(&mut g, SayConFlorQuiero::new(0));
    assert!(can(&g, SayFlorScore::new(1)));
    act(&mut g, SayFlorScore::new(1));

    assert_eq!(g.round.result.flor_winner, Some(1));
    assert_eq!(g.score(1), 6);
    assert_eq!(g.score(0), 0);
    assert_eq!(g.expected_turn(), 0);
}

#[test]
fn contraflor_al_resto_accepted_is_falta() {
    let mut g = game_with_flor(&FLOR_36, &FLOR_26);
    act(&mut g, SayFlor { player_id: 0 });
    act(&mut g, SayContraflorAlResto { player_id: 1 });
    act(&mut g, SayConFlorQuiero::new(0));
    act(&mut g, SayFlorScore::new(1));
    assert!(g.is_ended);
    assert_eq!(g.winner, Some(0));
}

#[test]
fn achico_pays_the_last_raiser() {
    let mut g = game_with_flor(&FLOR_26, &FLOR_36);
    act(&mut g, SayFlor { player_id: 0 });
    act(&mut g, SayConFlorMeAchico { player_id: 1 });
    assert_eq!(g.score(0), 4);

    let mut g = game_with_flor(&FLOR_26, &FLOR_36);
    act(&mut g, SayFlor { player_id: 0 });
    act(&mut g, SayContraflor { player_id: 1 });
    act(&mut g, SayContraflorAlResto { player_id: 0 });
    act(&mut g, SayConFlorMeAchico { player_id: 1 });
    assert_eq!(g.score(0), 6);
}

#[test]
fn mazo_blocked_while_flor_pending() {
    let mut g = game_with_flor(&FLOR_26, &FLOR_36);
    act(&mut g, SayFlor { player_id: 0 });
    assert!(!can(&g, SayMeVoyAlMazo { player_id: 1 }));
}

#[test]
fn mazo_refused_while_opponent_owes_flor() {
    let mut g = game_with_flor(&["4E", "5O", "6B"], &["7C", "6C", "5C"]);
    assert!(!can(&g, SayMeVoyAlMazo { player_id: 0 }));
    assert!(!possible_names(&g, 0).contains(&"say_me_voy_al_mazo"));

    act(&mut g, RevealCard { player_id: 0, card: card("4E") });
    assert_eq!(possible_names(&g, 1), vec!["say_flor"]);
    act(&mut g, SayFlor { player_id: 1 });
    assert_eq!(g.score(1), 3);

    // Once sung, leaving pays only the truco; no envido point against a flor.
    act(&mut g, SayMeVoyAlMazo { player_id: 1 });
    assert!(g.round.is_finished);
    assert_eq!(g.score(0), 1);
    assert_eq!(g.score(1), 3);
    assert_eq!(g.round.result.envido_winner, None);
    assert_eq!(g.round.result.envido_points, 0);
    assert_eq!(g.round.result.flor_winner, Some(1));
}

#[test]
fn flor_winner_reveals_hand_at_round_end() {
    let mut g = game_with_flor(&FLOR_26, &PLAIN);
    act(&mut g, SayFlor { player_id: 0 });
    act(&mut g, RevealCard { player_id: 0, card: card("3C") });
    act(&mut g, SayMeVoyAlMazo { player_id: 1 });
    assert!(g.round.is_finished);

    assert_eq!(g.flor_reveal_owed(), Some(0));
    assert!(!can(&g, ConfirmRoundFinished { player_id: 0 }));
    assert_eq!(possible_names(&g, 0), vec!["reveal_flor_score"]);

    act(&mut g, RevealFlorScore { player_id: 0 });
    assert!(g.player(0).hand.unrevealed.is_empty());
    assert_eq!(possible_names(&g, 0), vec!["confirm_round_finished"]);
}
