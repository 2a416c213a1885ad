use crate::domain::{GameSession, GamePhase, GuessMode, SessionRules};
use crate::errors::domain::{DomainError, NotFoundKind, PreconditionKind};

fn waiting_game(words: &[&str], players: &[&str]) -> GameSession {
    let mut game = GameSession::new("g1", SessionRules::default());
    for w in words {
        game.add_word(w).unwrap();
    }
    for p in players {
        game.add_player(p).unwrap();
    }
    game
}

fn started_game(words: &[&str], players: &[&str]) -> GameSession {
    let mut game = waiting_game(words, players);
    game.start().unwrap();
    game
}

#[test]
fn new_session_is_waiting_and_empty() {
    let game = GameSession::new("abc", SessionRules::default());
    assert_eq!(game.id(), "abc");
    assert_eq!(game.phase(), GamePhase::Waiting);
    assert!(game.players().is_empty());
    assert!(game.words().is_empty());
    assert!(game.last_played().is_none());
}

#[test]
fn add_player_is_idempotent_by_name() {
    let mut game = GameSession::new("g", SessionRules::default());
    let first = game.add_player("alice").unwrap();
    let again = game.add_player("alice").unwrap();
    let padded = game.add_player("  alice ").unwrap();

    assert_eq!(first.id, again.id);
    assert_eq!(first.id, padded.id);
    assert_eq!(game.players().len(), 1);
    assert_eq!(first.score, 0);
}

#[test]
fn players_keep_insertion_order() {
    let game = waiting_game(&["x"], &["carol", "alice", "bob"]);
    let names: Vec<_> = game.players().iter().map(|p| p.display_name.as_str()).collect();
    assert_eq!(names, ["carol", "alice", "bob"]);
}

#[test]
fn empty_inputs_are_invalid_arguments() {
    let mut game = GameSession::new("g", SessionRules::default());
    assert!(matches!(game.add_player("   "), Err(DomainError::InvalidArgument(_))));
    assert!(matches!(game.add_word(""), Err(DomainError::InvalidArgument(_))));
    assert!(matches!(game.set_title(" "), Err(DomainError::InvalidArgument(_))));
    assert!(game.players().is_empty());
    assert!(game.words().is_empty());
}

#[test]
fn duplicate_words_are_not_appended() {
    let mut game = GameSession::new("g", SessionRules::default());
    assert!(game.add_word("apple").unwrap());
    assert!(!game.add_word("Apple").unwrap());
    assert_eq!(game.words(), ["apple"]);
}

#[test]
fn start_requires_players() {
    let mut game = waiting_game(&["apple"], &[]);
    assert_eq!(
        game.start(),
        Err(DomainError::PreconditionFailed(PreconditionKind::NoPlayers))
    );
    assert_eq!(game.phase(), GamePhase::Waiting);
}

#[test]
fn start_requires_words() {
    let mut game = waiting_game(&[], &["alice"]);
    assert_eq!(
        game.start(),
        Err(DomainError::PreconditionFailed(PreconditionKind::NoWords))
    );
    assert_eq!(game.phase(), GamePhase::Waiting);
}

#[test]
fn setup_operations_fail_after_start() {
    let mut game = started_game(&["apple"], &["alice"]);
    assert_eq!(game.phase(), GamePhase::InProgress);

    assert!(matches!(game.add_word("pear"), Err(DomainError::InvalidState(_))));
    assert!(matches!(game.add_player("bob"), Err(DomainError::InvalidState(_))));
    assert!(matches!(game.set_title("New"), Err(DomainError::InvalidState(_))));
    assert!(matches!(game.start(), Err(DomainError::InvalidState(_))));
    assert_eq!(game.words(), ["apple"]);
    assert_eq!(game.players().len(), 1);
}

#[test]
fn late_join_admits_new_players_with_zero_score() {
    let mut game = GameSession::new("g", SessionRules::new(GuessMode::OpenSet, true));
    game.add_word("apple").unwrap();
    game.add_player("alice").unwrap();
    game.start().unwrap();

    let bob = game.add_player("bob").unwrap();
    assert_eq!(bob.score, 0);
    assert_eq!(game.players().len(), 2);

    game.submit_guess("alice", "apple").unwrap();
    assert_eq!(game.phase(), GamePhase::Completed);
    assert!(matches!(game.add_player("carol"), Err(DomainError::InvalidState(_))));
}

#[test]
fn guess_before_start_is_rejected() {
    let mut game = waiting_game(&["apple"], &["alice"]);
    let err = game.submit_guess("alice", "apple").unwrap_err();
    assert!(matches!(err, DomainError::InvalidState(_)));
    assert!(game.last_played().is_none());
}

#[test]
fn open_set_scenario_from_two_players() {
    let mut game = started_game(&["apple", "banana"], &["A", "B"]);
    let a = game.find_player("A").unwrap().id.to_string();
    let b = game.find_player("B").unwrap().id.to_string();

    let out = game.submit_guess(&a, "banana").unwrap();
    assert!(out.correct);
    assert_eq!(out.awarded, 10);
    assert_eq!(out.player.score, 10);
    assert_eq!(game.guessed_words().len(), 1);
    assert_eq!(game.guessed_words()[0].word, "banana");
    assert_eq!(game.guessed_words()[0].guesser, "A");

    let out = game.submit_guess(&b, "banana").unwrap();
    assert!(out.correct);
    assert_eq!(out.awarded, 0);
    assert_eq!(game.find_player("B").unwrap().score, 0);
    assert_eq!(game.guessed_words().len(), 1);
    let last = game.last_played().unwrap();
    assert_eq!(last.display_name, "B");
    assert!(last.correct);

    let out = game.submit_guess(&a, "apple").unwrap();
    assert!(out.completed);
    assert_eq!(game.find_player("A").unwrap().score, 20);
    let words: Vec<_> = game.guessed_words().iter().map(|g| g.word.as_str()).collect();
    assert_eq!(words, ["banana", "apple"]);
    assert_eq!(game.phase(), GamePhase::Completed);
}

#[test]
fn wrong_guess_records_last_played_without_scoring() {
    let mut game = started_game(&["apple"], &["alice"]);
    let out = game.submit_guess("alice", "cherry").unwrap();

    assert!(!out.correct);
    assert_eq!(out.awarded, 0);
    assert_eq!(game.phase(), GamePhase::InProgress);
    assert!(game.guessed_words().is_empty());
    let last = game.last_played().unwrap();
    assert_eq!(last.guessed_word, "cherry");
    assert!(!last.correct);
}

#[test]
fn unknown_player_leaves_last_played_untouched() {
    let mut game = started_game(&["apple", "pear"], &["alice"]);
    game.submit_guess("alice", "nope").unwrap();
    let before = game.last_played().cloned();

    let err = game.submit_guess("mallory", "apple").unwrap_err();
    assert!(matches!(err, DomainError::NotFound(NotFoundKind::Player, _)));
    assert_eq!(game.last_played().cloned(), before);
    assert!(game.guessed_words().is_empty());
}

#[test]
fn guess_after_completion_is_rejected() {
    let mut game = started_game(&["apple"], &["alice"]);
    game.submit_guess("alice", "apple").unwrap();
    assert_eq!(game.phase(), GamePhase::Completed);

    let err = game.submit_guess("alice", "apple").unwrap_err();
    assert!(matches!(err, DomainError::InvalidState(_)));
}

#[test]
fn guesses_match_case_insensitively_and_store_list_word() {
    let mut game = started_game(&["Apple", "pear"], &["alice"]);
    let out = game.submit_guess("alice", "  aPPLE ").unwrap();
    assert!(out.correct);
    assert_eq!(game.guessed_words()[0].word, "Apple");
    assert_eq!(game.last_played().unwrap().guessed_word, "aPPLE");
}

#[test]
fn empty_guess_is_invalid_argument() {
    let mut game = started_game(&["apple"], &["alice"]);
    assert!(matches!(
        game.submit_guess("alice", "  "),
        Err(DomainError::InvalidArgument(_))
    ));
    assert!(matches!(
        game.submit_guess("", "apple"),
        Err(DomainError::InvalidArgument(_))
    ));
    assert!(game.last_played().is_none());
}

#[test]
fn sequential_mode_only_counts_next_word() {
    let mut game = GameSession::new("g", SessionRules::new(GuessMode::Sequential, false));
    for w in ["one", "two", "three"] {
        game.add_word(w).unwrap();
    }
    game.add_player("alice").unwrap();
    game.start().unwrap();

    let out = game.submit_guess("alice", "two").unwrap();
    assert!(!out.correct);
    assert_eq!(out.player.score, 0);

    assert!(game.submit_guess("alice", "one").unwrap().correct);
    // Repeat of a guessed word is correct but free.
    let repeat = game.submit_guess("alice", "one").unwrap();
    assert!(repeat.correct);
    assert_eq!(repeat.awarded, 0);

    assert!(game.submit_guess("alice", "two").unwrap().correct);
    let last = game.submit_guess("alice", "three").unwrap();
    assert!(last.completed);
    assert_eq!(last.player.score, 30);
    assert_eq!(game.phase(), GamePhase::Completed);
}

#[test]
fn snapshot_reflects_session() {
    let mut game = waiting_game(&["apple"], &["alice"]);
    game.set_title("Fruits").unwrap();
    game.start().unwrap();
    game.submit_guess("alice", "apple").unwrap();

    let snap = game.snapshot();
    assert_eq!(snap.game_id, "g1");
    assert_eq!(snap.game_title, "Fruits");
    assert_eq!(snap.current_state, GamePhase::Completed);
    assert_eq!(snap.total_score(), 10);
    assert_eq!(snap.player("alice").unwrap().score, 10);

    let json = serde_json::to_value(&snap).unwrap();
    assert_eq!(json["currentState"], "GAME_COMPLETED");
    assert_eq!(json["guessMode"], "open_set");
    assert_eq!(json["gameTitle"], "Fruits");
    assert_eq!(json["guessedWords"][0]["guesser"], "alice");
    assert_eq!(json["lastPlayed"]["correct"], true);
    assert!(json["players"][0]["displayName"].is_string());
}

#[test]
fn summary_falls_back_to_untitled() {
    let game = GameSession::new("g", SessionRules::default());
    assert_eq!(game.summary().title, "Untitled Game");
}
