use crate::domain::policy::{GuessMode, GuessPolicy, OpenSetGuessPolicy, SequentialGuessPolicy, Verdict};
use crate::domain::session::GuessedWord;

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|w| w.to_string()).collect()
}

fn guessed(list: &[&str]) -> Vec<GuessedWord> {
    list.iter()
        .map(|w| GuessedWord {
            word: w.to_string(),
            guesser: "p".to_string(),
        })
        .collect()
}

#[test]
fn open_set_hits_any_unguessed_word() {
    let w = words(&["apple", "banana", "cherry"]);
    let p = OpenSetGuessPolicy;
    assert_eq!(p.judge(&w, &[], "cherry"), Verdict::Hit { index: 2 });
    assert_eq!(p.judge(&w, &guessed(&["apple"]), "banana"), Verdict::Hit { index: 1 });
}

#[test]
fn open_set_repeat_and_miss() {
    let w = words(&["apple", "banana"]);
    let p = OpenSetGuessPolicy;
    assert_eq!(p.judge(&w, &guessed(&["banana"]), "BANANA"), Verdict::Repeat);
    assert_eq!(p.judge(&w, &[], "kiwi"), Verdict::Miss);
}

#[test]
fn sequential_hits_only_next_index() {
    let w = words(&["one", "two"]);
    let p = SequentialGuessPolicy;
    assert_eq!(p.judge(&w, &[], "one"), Verdict::Hit { index: 0 });
    assert_eq!(p.judge(&w, &[], "two"), Verdict::Miss);
    assert_eq!(p.judge(&w, &guessed(&["one"]), "two"), Verdict::Hit { index: 1 });
    assert_eq!(p.judge(&w, &guessed(&["one"]), "one"), Verdict::Repeat);
}

#[test]
fn completion_requires_every_word() {
    let w = words(&["one", "two"]);
    for mode in [GuessMode::OpenSet, GuessMode::Sequential] {
        let p = mode.policy();
        assert!(!p.is_complete(&w, &guessed(&["one"])));
        assert!(p.is_complete(&w, &guessed(&["one", "two"])));
        assert!(!p.is_complete(&[], &[]));
    }
}

#[test]
fn verdict_correctness() {
    assert!(!Verdict::Miss.is_correct());
    assert!(Verdict::Repeat.is_correct());
    assert!(Verdict::Hit { index: 0 }.is_correct());
}

#[test]
fn guess_mode_parses_config_spellings() {
    assert_eq!("open_set".parse::<GuessMode>(), Ok(GuessMode::OpenSet));
    assert_eq!("Open-Set".parse::<GuessMode>(), Ok(GuessMode::OpenSet));
    assert_eq!("sequential".parse::<GuessMode>(), Ok(GuessMode::Sequential));
    assert!("random".parse::<GuessMode>().is_err());
    assert_eq!(GuessMode::Sequential.to_string(), "sequential");
}
