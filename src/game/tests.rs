use super::*;
use crate::board::STARTING_FEN;
use crate::zobrist::default_hasher;

fn play(game: &mut Game, moves: &[&str]) -> GameState {
    let mut state = game.state();
    for notation in moves {
        let mv = game
            .find_move(notation)
            .unwrap_or_else(|| panic!("{notation} is not legal in {}", game.fen()));
        state = game.make_move(&mv).unwrap();
    }
    state
}

#[test]
fn test_new_game() {
    let game = Game::new();
    assert_eq!(game.state(), GameState::Active);
    assert_eq!(game.side_to_move(), Color::White);
    assert_eq!(game.legal_moves().unwrap().len(), 20);
    assert_eq!(game.fen(), STARTING_FEN);
    assert_eq!(game.repetition_count(), 1);
}

#[test]
fn test_fen_round_trip() {
    let fens = [
        STARTING_FEN,
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        "rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3",
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8",
    ];
    for fen in fens {
        assert_eq!(Game::from_fen(fen).unwrap().fen(), fen);
    }
}

#[test]
fn test_clocks_advance() {
    let mut game = Game::new();
    play(&mut game, &["e2e4"]);
    assert_eq!(game.halfmove_clock(), 0);
    assert_eq!(game.fullmove_number(), 1);
    assert_eq!(game.board().en_passant_fen(), "e3");

    play(&mut game, &["e7e5", "g1f3"]);
    assert_eq!(game.halfmove_clock(), 1);
    assert_eq!(game.fullmove_number(), 2);
    assert_eq!(game.side_to_move(), Color::Black);

    play(&mut game, &["b8c6", "f3e5"]);
    assert_eq!(game.halfmove_clock(), 0, "capture resets the clock");
}

#[test]
fn test_hash_tracks_position() {
    let mut game = Game::new();
    play(&mut game, &["d2d4", "d7d5"]);
    assert_eq!(game.hash(), default_hasher().hash(&game));
    let rebuilt = Game::from_fen(&game.fen()).unwrap();
    assert_eq!(rebuilt.hash(), game.hash());
}

#[test]
fn test_fools_mate() {
    let mut game = Game::new();
    let state = play(&mut game, &["f2f3", "e7e5", "g2g4", "d8h4"]);
    assert_eq!(state, GameState::BlackWins);
    assert_eq!(game.state().winner(), Some(Color::Black));
    assert!(game.is_in_check());
}

#[test]
fn test_back_rank_mate() {
    let mut game = Game::from_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1").unwrap();
    assert_eq!(play(&mut game, &["a1a8"]), GameState::WhiteWins);
}

#[test]
fn test_checkmate_from_fen() {
    let game = Game::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3").unwrap();
    assert_eq!(game.state(), GameState::BlackWins);
}

#[test]
fn test_stalemate() {
    let mut game = Game::from_fen("7k/5Q2/8/6K1/8/8/8/8 w - - 0 1").unwrap();
    assert_eq!(play(&mut game, &["g5g6"]), GameState::Stalemate);
    assert!(!game.is_in_check());
    assert_eq!(game.draw_reason(), None);
}

#[test]
fn test_stalemate_from_fen() {
    let game = Game::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
    assert_eq!(game.state(), GameState::Stalemate);
}

#[test]
fn test_finished_game_rejects_requests() {
    let mut game = Game::new();
    play(&mut game, &["f2f3", "e7e5", "g2g4", "d8h4"]);
    let expected = GameError::NotActive {
        state: GameState::BlackWins,
    };
    assert_eq!(game.legal_moves(), Err(expected.clone()));
    assert_eq!(game.legal_moves_from("e1".parse().unwrap()), Err(expected.clone()));
    assert_eq!(game.find_move("e1f2"), None);

    let other = Game::new();
    let mv = other.find_move("e2e4").unwrap();
    assert_eq!(game.make_move(&mv), Err(expected));
}

#[test]
fn test_moves_from_wrong_square() {
    let game = Game::new();
    let e7: Square = "e7".parse().unwrap();
    let e4: Square = "e4".parse().unwrap();
    assert_eq!(
        game.legal_moves_from(e7),
        Err(GameError::NotSideToMove { square: e7 })
    );
    assert_eq!(
        game.legal_moves_from(e4),
        Err(GameError::NotSideToMove { square: e4 })
    );
    assert_eq!(game.legal_moves_from("g1".parse().unwrap()).unwrap().len(), 2);
}

#[test]
fn test_move_for_wrong_side_rejected() {
    let mut game = Game::new();
    let white_move = game.find_move("e2e4").unwrap();
    play(&mut game, &["d2d4"]);
    assert_eq!(
        game.make_move(&white_move),
        Err(GameError::NotSideToMove {
            square: "e2".parse().unwrap()
        })
    );
}

#[test]
fn test_move_from_another_game_rejected() {
    let mut other = Game::new();
    play(&mut other, &["e2e4", "e7e5"]);
    let queen_sortie = other.find_move("d1h5").unwrap();

    let mut game = Game::new();
    assert_eq!(
        game.make_move(&queen_sortie),
        Err(GameError::IllegalMove { mv: queen_sortie })
    );
    assert_eq!(game.fen(), STARTING_FEN);
    assert!(game.state().is_active());
}

#[test]
fn test_stale_castling_rejected() {
    let open = Game::from_fen("4k3/8/8/8/8/8/8/R3K2R w KQ - 0 1").unwrap();
    let castle = open.find_move("e1g1").unwrap();

    let mut blocked = Game::from_fen("4k3/8/8/8/8/8/8/R3KB1R w KQ - 0 1").unwrap();
    assert_eq!(blocked.make_move(&castle), Err(GameError::IllegalMove { mv: castle }));
    assert_eq!(blocked.fen(), "4k3/8/8/8/8/8/8/R3KB1R w KQ - 0 1");
    assert_eq!(blocked.board().material(Color::White).count(PieceKind::Bishop), 1);
}

#[test]
fn test_fullmove_number_saturates() {
    let mut game = Game::from_fen("4k3/8/8/8/8/8/8/R3K3 b - - 0 4294967295").unwrap();
    assert_eq!(play(&mut game, &["e8d8"]), GameState::Active);
    assert_eq!(game.fullmove_number(), u32::MAX);
    assert_eq!(game.side_to_move(), Color::White);
}

#[test]
fn test_drawing_move_still_passes_the_turn() {
    let mut game = Game::from_fen("4k3/8/8/8/8/8/8/4K2R w - - 99 60").unwrap();
    assert_eq!(play(&mut game, &["h1h2"]), GameState::Draw);
    assert_eq!(game.side_to_move(), Color::Black);
    assert_eq!(game.fen(), "4k3/8/8/8/8/8/7R/4K3 b - - 100 60");
}

#[test]
fn test_fifty_move_rule() {
    let mut game = Game::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 98 60").unwrap();
    assert_eq!(play(&mut game, &["a1a2"]), GameState::Active);
    assert_eq!(play(&mut game, &["e8d8"]), GameState::Draw);
    assert_eq!(game.draw_reason(), Some(DrawReason::FiftyMoveRule));
    assert_eq!(game.halfmove_clock(), FIFTY_MOVE_LIMIT);
}

#[test]
fn test_fifty_move_rule_from_fen() {
    let game = Game::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 100 80").unwrap();
    assert_eq!(game.state(), GameState::Draw);
    assert_eq!(game.draw_reason(), Some(DrawReason::FiftyMoveRule));
}

#[test]
fn test_insufficient_material_after_capture() {
    let mut game = Game::from_fen("4k3/8/8/8/8/8/3p4/4K3 w - - 0 1").unwrap();
    assert_eq!(play(&mut game, &["e1d2"]), GameState::Draw);
    assert_eq!(game.draw_reason(), Some(DrawReason::InsufficientMaterial));
}

#[test]
fn test_king_and_minor_vs_king_is_dead() {
    for fen in ["4k3/8/8/8/8/8/8/4KB2 w - - 0 1", "4k3/8/8/8/8/8/8/4KN2 b - - 0 1"] {
        let game = Game::from_fen(fen).unwrap();
        assert_eq!(game.draw_reason(), Some(DrawReason::InsufficientMaterial));
    }
}

#[test]
fn test_one_side_insufficient_keeps_playing() {
    let game = Game::from_fen("4k3/8/8/8/8/8/8/4K2R b - - 0 1").unwrap();
    assert_eq!(game.state(), GameState::Active);
}

#[test]
fn test_threefold_repetition() {
    let mut game = Game::new();
    let shuffle = ["g1f3", "g8f6", "f3g1", "f6g8"];
    assert_eq!(play(&mut game, &shuffle), GameState::Active);
    assert_eq!(game.repetition_count(), 2);
    assert_eq!(play(&mut game, &shuffle[..3]), GameState::Active);
    assert_eq!(play(&mut game, &shuffle[3..]), GameState::Draw);
    assert_eq!(game.draw_reason(), Some(DrawReason::ThreefoldRepetition));
    assert_eq!(game.repetition_count(), REPETITION_LIMIT);
}

#[test]
fn test_repetition_respects_side_to_move() {
    let white = Game::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 0 1").unwrap();
    let black = Game::from_fen("4k3/8/8/8/8/8/8/R3K3 b - - 0 1").unwrap();
    assert_ne!(white.hash(), black.hash());

    let mut game = white.clone();
    play(&mut game, &["a1a2", "e8d8", "a2a1"]);
    assert_eq!(game.repetition_count(), 1);
    play(&mut game, &["d8e8"]);
    assert_eq!(game.repetition_count(), 2);
    assert_eq!(game.hash(), white.hash());
}

#[test]
fn test_clone_is_independent() {
    let game = Game::new();
    let mut copy = game.clone();
    play(&mut copy, &["e2e4"]);
    assert_eq!(game.fen(), STARTING_FEN);
    assert_ne!(copy.fen(), game.fen());
}

#[test]
fn test_perft_matches_board() {
    let game = Game::new();
    assert_eq!(game.perft(1), 20);
    assert_eq!(game.perft(2), 400);
}

#[test]
fn test_invalid_fen_is_error() {
    assert!(Game::from_fen("not a fen").is_err());
    assert!("8/8/8/8/8/8/8/8 w - -".parse::<Game>().is_ok());
}
