//! Property tests for open-set scoring and join idempotence.
//!
//! Increase cases locally with: PROPTEST_CASES=800 cargo test

use std::collections::BTreeSet;
use std::env;

use proptest::prelude::*;

use crate::domain::{GameSession, GamePhase, SessionRules, GUESS_AWARD};

fn proptest_config() -> ProptestConfig {
    let cases = env::var("PROPTEST_CASES")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(32);

    ProptestConfig {
        cases,
        ..ProptestConfig::default()
    }
}

/// A distinct word list plus a shuffled guess script: (player slot, word index),
/// where every word appears at least once and some appear repeatedly.
fn scenario() -> impl Strategy<Value = (Vec<String>, usize, Vec<(usize, usize)>)> {
    (
        prop::collection::btree_set("[a-z]{3,8}", 1..8),
        1usize..4,
    )
        .prop_flat_map(|(set, players)| {
            let words: Vec<String> = set.into_iter().collect();
            let n = words.len();
            let covering: Vec<usize> = (0..n).collect();
            let extras = prop::collection::vec(0..n, 0..6);
            (Just(words), Just(players), Just(covering), extras)
        })
        .prop_flat_map(|(words, players, covering, extras)| {
            let mut order = covering;
            order.extend(extras);
            let len = order.len();
            (
                Just(words),
                Just(players),
                Just(order).prop_shuffle(),
                prop::collection::vec(0..players, len),
            )
        })
        .prop_map(|(words, players, order, slots)| {
            let script = slots.into_iter().zip(order).collect();
            (words, players, script)
        })
}

proptest! {
    #![proptest_config(proptest_config())]

    #[test]
    fn open_set_completes_once_with_full_score((words, players, script) in scenario()) {
        let mut game = GameSession::new("prop", SessionRules::default());
        for w in &words {
            game.add_word(w).unwrap();
        }
        let names: Vec<String> = (0..players).map(|i| format!("p{i}")).collect();
        for n in &names {
            game.add_player(n).unwrap();
        }
        game.start().unwrap();

        let mut completions = 0;
        for (slot, word_idx) in script {
            if game.phase() == GamePhase::Completed {
                break;
            }
            let out = game.submit_guess(&names[slot], &words[word_idx]).unwrap();
            prop_assert!(out.correct);
            if out.completed {
                completions += 1;
            }
        }

        prop_assert_eq!(completions, 1);
        prop_assert_eq!(game.phase(), GamePhase::Completed);
        let snap = game.snapshot();
        prop_assert_eq!(snap.total_score(), GUESS_AWARD * words.len() as u32);
        let distinct: BTreeSet<_> = snap.guessed_words.iter().map(|g| g.word.clone()).collect();
        prop_assert_eq!(distinct.len(), snap.guessed_words.len());
    }

    #[test]
    fn repeated_joins_create_one_player(name in "[A-Za-z]{1,12}", times in 1usize..6) {
        let mut game = GameSession::new("prop", SessionRules::default());
        let first = game.add_player(&name).unwrap();
        for _ in 1..times {
            let again = game.add_player(&name).unwrap();
            prop_assert_eq!(again.id, first.id);
        }
        prop_assert_eq!(game.players().len(), 1);
    }

    #[test]
    fn repeat_guess_never_changes_score(word in "[a-z]{3,8}", repeats in 1usize..5) {
        let mut game = GameSession::new("prop", SessionRules::default());
        game.add_word(&word).unwrap();
        game.add_word("zzzzzzzzzz").unwrap();
        game.add_player("a").unwrap();
        game.add_player("b").unwrap();
        game.start().unwrap();
        game.submit_guess("a", &word).unwrap();

        for _ in 0..repeats {
            let out = game.submit_guess("b", &word).unwrap();
            prop_assert!(out.correct);
            prop_assert_eq!(out.awarded, 0);
            prop_assert_eq!(game.guessed_words().len(), 1);
            prop_assert_eq!(game.snapshot().total_score(), GUESS_AWARD);
            prop_assert_eq!(&game.last_played().unwrap().display_name, "b");
        }
    }
}
