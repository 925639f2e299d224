// tests/game_roster_tests.rs
//
// Состав стола: вместимость, уникальность имён, удаление, заглушка first_deal.

use blackjack_table::domain::{TableConfig, MAX_PLAYERS};
use blackjack_table::engine::{Game, GameError};
use blackjack_table::infra::SequentialIdSource;

fn test_game() -> Game<SequentialIdSource> {
    Game::with_config(TableConfig::default(), SequentialIdSource::new()).unwrap()
}

#[test]
fn new_game_has_one_deck_no_players_empty_dealer() {
    let game = Game::new();

    assert_eq!(game.player_count(), 0);
    assert_eq!(game.players().count(), 0);
    assert!(game.dealer().hand().is_empty());
    assert_eq!(game.decks().len(), 1);
    assert_eq!(game.decks()[0].len(), 52);
    assert_eq!(game.config(), &TableConfig::default());
}

/// Сценарий: jon садится, повтор jon → NameExists, bob не найден, jon уходит.
#[test]
fn join_duplicate_missing_leave_scenario() {
    let mut game = Game::new();

    let jon_id = game.add_player("jon").expect("first join succeeds");
    assert_eq!(game.player_count(), 1);

    assert_eq!(
        game.add_player("jon"),
        Err(GameError::NameExists("jon".to_string()))
    );
    assert_eq!(game.player_count(), 1);
    assert_eq!(game.player("jon").unwrap().id(), jon_id, "entry must be unchanged");

    assert_eq!(
        game.remove_player("bob").unwrap_err(),
        GameError::NoPlayer("bob".to_string())
    );
    assert_eq!(game.player_count(), 1);

    let removed = game.remove_player("jon").expect("jon is seated");
    assert_eq!(removed.name(), "jon");
    assert_eq!(removed.id(), jon_id);
    assert_eq!(game.player_count(), 0);
    assert!(!game.has_player("jon"));
}

/// Семь игроков садятся, восьмой получает TableFull.
#[test]
fn eighth_player_gets_table_full() {
    let mut game = test_game();

    for i in 1..=7 {
        game.add_player(&format!("player-{i}"))
            .unwrap_or_else(|e| panic!("seat {i} should be free: {e}"));
    }
    assert_eq!(game.player_count(), 7);

    assert_eq!(
        game.add_player("eighth"),
        Err(GameError::TableFull {
            capacity: MAX_PLAYERS
        })
    );
    assert_eq!(game.player_count(), 7);
    assert!(!game.has_player("eighth"));
}

/// На полном столе TableFull проверяется раньше NameExists.
#[test]
fn full_table_reports_table_full_even_for_taken_name() {
    let mut game = test_game();
    for i in 0..7 {
        game.add_player(&format!("p{i}")).unwrap();
    }

    assert!(matches!(
        game.add_player("p0"),
        Err(GameError::TableFull { .. })
    ));
}

#[test]
fn seat_frees_up_after_remove() {
    let mut game = test_game();
    for i in 0..7 {
        game.add_player(&format!("p{i}")).unwrap();
    }
    game.remove_player("p3").unwrap();

    assert!(game.add_player("late").is_ok());
    assert_eq!(game.player_count(), 7);
}

#[test]
fn removed_name_can_rejoin_with_new_id() {
    let mut game = test_game();
    let first = game.add_player("jon").unwrap();
    game.remove_player("jon").unwrap();

    assert_eq!(
        game.remove_player("jon"),
        Err(GameError::NoPlayer("jon".to_string()))
    );

    let second = game.add_player("jon").unwrap();
    assert_ne!(first, second);
}

#[test]
fn uuid_ids_are_unique_per_player() {
    let mut game = Game::new();
    let a = game.add_player("a").unwrap();
    let b = game.add_player("b").unwrap();
    assert_ne!(a, b);
}

#[test]
fn smaller_table_capacity_is_respected() {
    let config = TableConfig {
        max_players: 2,
        deck_count: 1,
    };
    let mut game = Game::with_config(config, SequentialIdSource::new()).unwrap();

    game.add_player("a").unwrap();
    game.add_player("b").unwrap();
    assert_eq!(
        game.add_player("c"),
        Err(GameError::TableFull { capacity: 2 })
    );
}

#[test]
fn invalid_config_is_rejected() {
    let config = TableConfig {
        max_players: 7,
        deck_count: 0,
    };
    assert!(Game::with_config(config, SequentialIdSource::new()).is_err());
}

#[test]
fn reset_hands_on_empty_and_populated_tables() {
    let mut game = Game::new();
    game.reset_hands();
    assert!(game.dealer().hand().is_empty());

    game.add_player("jon").unwrap();
    game.add_player("ann").unwrap();
    game.reset_hands();

    assert_eq!(game.player_count(), 2);
    assert!(game.players().all(|p| p.hand().is_empty()));
}

#[test]
fn first_deal_always_succeeds() {
    let mut game = Game::new();
    assert_eq!(game.first_deal(), Ok(()));

    game.add_player("jon").unwrap();
    assert_eq!(game.first_deal(), Ok(()));
    assert!(game.player("jon").unwrap().hand().is_empty());
    assert_eq!(game.decks()[0].len(), 52);
}

#[test]
fn error_messages_are_human_readable() {
    let full = GameError::TableFull { capacity: 7 }.to_string();
    assert!(full.contains('7'));

    let taken = GameError::NameExists("jon".into()).to_string();
    assert!(taken.contains("jon"));

    let missing = GameError::NoPlayer("bob".into()).to_string();
    assert!(missing.contains("bob"));
}
