use super::*;

fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

fn play_all(engine: &mut RulesEngine, moves: &[(&str, &str)]) {
    for (from, to) in moves {
        engine.play(sq(from), sq(to), Piece::Queen).unwrap();
    }
}

#[test]
fn test_start_position() {
    let engine = RulesEngine::new();
    assert_eq!(engine.position(), &Position::start());
    assert_eq!(engine.position().as_str(), START_FEN);
    assert_eq!(engine.side_to_move(), Color::White);
    assert!(engine.history().is_empty());
    assert_eq!(engine.status(), GameStatus::Ongoing);
}

#[test]
fn test_double_push_record() {
    let mut engine = RulesEngine::new();
    let record = engine.play(sq("e2"), sq("e4"), Piece::Queen).unwrap();

    assert_eq!(record.from, sq("e2"));
    assert_eq!(record.to, sq("e4"));
    assert_eq!(record.piece, Piece::Pawn);
    assert_eq!(record.color, Color::White);
    assert_eq!(record.kind, MoveKind::DoublePush);
    assert!(!record.is_capture());
    assert_eq!(record.to_string(), "e2 → e4");
    assert_eq!(engine.side_to_move(), Color::Black);
    assert_eq!(engine.history().len(), 1);
}

#[test]
fn test_illegal_move_rejected() {
    let mut engine = RulesEngine::new();
    let err = engine.play(sq("e2"), sq("e5"), Piece::Queen).unwrap_err();

    assert_eq!(err, EngineError::IllegalMove { from: sq("e2"), to: sq("e5") });
    assert_eq!(engine.position(), &Position::start());
    assert!(engine.history().is_empty());
}

#[test]
fn test_wrong_side_rejected() {
    let mut engine = RulesEngine::new();
    assert!(engine.play(sq("e7"), sq("e5"), Piece::Queen).is_err());
    assert!(engine.play(sq("e4"), sq("e5"), Piece::Queen).is_err());
}

#[test]
fn test_capture_recorded() {
    let mut engine = RulesEngine::new();
    play_all(&mut engine, &[("e2", "e4"), ("d7", "d5")]);
    let record = engine.play(sq("e4"), sq("d5"), Piece::Queen).unwrap();

    assert_eq!(record.captured, Some(Piece::Pawn));
    assert_eq!(record.kind, MoveKind::Normal);
}

#[test]
fn test_en_passant() {
    let mut engine = RulesEngine::new();
    play_all(&mut engine, &[("e2", "e4"), ("a7", "a6"), ("e4", "e5"), ("d7", "d5")]);
    let record = engine.play(sq("e5"), sq("d6"), Piece::Queen).unwrap();

    assert_eq!(record.kind, MoveKind::EnPassant);
    assert_eq!(record.captured, Some(Piece::Pawn));
    let board = engine.board();
    assert_eq!(board.piece_on(sq("d5")), None);
}

#[test]
fn test_castling_by_king_step() {
    let mut engine = RulesEngine::new();
    play_all(
        &mut engine,
        &[("e2", "e4"), ("e7", "e5"), ("g1", "f3"), ("b8", "c6"), ("f1", "c4"), ("g8", "f6")],
    );
    let record = engine.play(sq("e1"), sq("g1"), Piece::Queen).unwrap();

    assert_eq!(record.kind, MoveKind::CastleKingside);
    assert_eq!(record.from, sq("e1"));
    assert_eq!(record.to, sq("g1"));
    assert_eq!(record.captured, None);

    let board = engine.board();
    assert_eq!(board.piece_on(sq("g1")), Some(Piece::King));
    assert_eq!(board.piece_on(sq("f1")), Some(Piece::Rook));
}

#[test]
fn test_king_onto_rook_is_not_castling_input() {
    let mut engine = RulesEngine::new();
    play_all(
        &mut engine,
        &[("e2", "e4"), ("e7", "e5"), ("g1", "f3"), ("b8", "c6"), ("f1", "c4"), ("g8", "f6")],
    );
    assert!(engine.play(sq("e1"), sq("h1"), Piece::Queen).is_err());
}

#[test]
fn test_promotion_uses_requested_piece() {
    let engine = RulesEngine::new();
    let mv = engine.find_move(sq("a7"), sq("a8"), Piece::Queen);
    assert!(mv.is_none());

    let mut engine = RulesEngine::from_fen("8/P6k/8/8/8/8/8/K7 w - - 0 1").unwrap();
    let record = engine.play(sq("a7"), sq("a8"), Piece::Knight).unwrap();
    assert_eq!(record.promotion, Some(Piece::Knight));
    assert_eq!(engine.board().piece_on(sq("a8")), Some(Piece::Knight));
}

#[test]
fn test_replay_matches_live() {
    let mut live = RulesEngine::new();
    play_all(&mut live, &[("e2", "e4"), ("c7", "c5"), ("g1", "f3")]);

    let mut scratch = RulesEngine::new();
    for record in live.history() {
        scratch.replay(record).unwrap();
    }
    assert_eq!(scratch.position(), live.position());
    assert_eq!(scratch.history(), live.history());
}

#[test]
fn test_replay_out_of_order_fails() {
    let mut live = RulesEngine::new();
    play_all(&mut live, &[("e2", "e4"), ("e7", "e5")]);

    let mut scratch = RulesEngine::new();
    assert!(scratch.replay(&live.history()[1]).is_err());
    assert_eq!(scratch.position(), &Position::start());
}

#[test]
fn test_checkmate_ends_game() {
    let mut engine = RulesEngine::new();
    play_all(&mut engine, &[("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")]);

    assert_eq!(engine.status(), GameStatus::Won);
    assert_eq!(engine.play(sq("a2"), sq("a3"), Piece::Queen), Err(EngineError::GameOver));
}

#[test]
fn test_threefold_repetition_is_only_a_claim() {
    let mut engine = RulesEngine::new();
    let shuffle = [("g1", "f3"), ("g8", "f6"), ("f3", "g1"), ("f6", "g8")];
    play_all(&mut engine, &shuffle);
    assert_eq!(engine.draw_claim(), None);
    play_all(&mut engine, &shuffle);

    assert_eq!(engine.draw_claim(), Some(DrawClaim::Repetition));
    assert_eq!(engine.status(), GameStatus::Ongoing);
    assert!(engine.play(sq("e2"), sq("e4"), Piece::Queen).is_ok());
    assert_eq!(engine.draw_claim(), None);
}

#[test]
fn test_fifty_move_rule_is_only_a_claim() {
    let mut engine = RulesEngine::from_fen("4k3/8/8/8/8/8/8/4K2R w - - 100 80").unwrap();

    assert_eq!(engine.draw_claim(), Some(DrawClaim::FiftyMoves));
    assert_eq!(engine.status(), GameStatus::Ongoing);
    assert!(engine.play(sq("h1"), sq("h2"), Piece::Queen).is_ok());
}

#[test]
fn test_stalemate_ends_game() {
    let mut engine = RulesEngine::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();

    assert_eq!(engine.status(), GameStatus::Drawn);
    assert_eq!(engine.play(sq("h8"), sq("g8"), Piece::Queen), Err(EngineError::GameOver));
}

#[test]
fn test_from_fen_rejects_garbage() {
    assert_eq!(
        RulesEngine::from_fen("garbage").unwrap_err(),
        EngineError::InvalidPosition { fen: "garbage".to_string() }
    );
}

#[test]
fn test_reset() {
    let mut engine = RulesEngine::new();
    play_all(&mut engine, &[("d2", "d4")]);
    engine.reset();
    assert_eq!(engine.position(), &Position::start());
    assert!(engine.history().is_empty());
}

#[test]
fn test_position_round_trips_to_board() {
    let board = Position::start().to_board().unwrap();
    assert_eq!(board.to_string(), START_FEN);
    assert!(Position("not a fen".to_string()).to_board().is_err());
}
