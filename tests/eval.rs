use tictac::search::eval::{available_positions, has_won, status, terminal_score, GameStatus, WINNING_LINES};
use tictac::{Board, Player};

fn b(s: &str) -> Board { s.parse().expect("valid board") }

#[test]
fn empty_board_is_in_progress_with_all_cells_free() {
    let board = Board::new();
    assert_eq!(status(&board), GameStatus::InProgress);
    assert_eq!(available_positions(&board), (0..9).collect::<Vec<_>>());
}

#[test]
fn every_winning_line_is_detected() {
    for line in WINNING_LINES {
        for player in [Player::Ai, Player::Human] {
            let mut board = Board::new();
            for &i in &line { board.mark(i, player); }
            assert!(has_won(&board, player), "line {:?} not detected for {}", line, player);
            assert!(!has_won(&board, player.opponent()));
            assert_eq!(status(&board), GameStatus::Won(player));
        }
    }
}

#[test]
fn full_board_without_line_is_tie() {
    let board = b("XOX/XOO/OXX");
    assert_eq!(status(&board), GameStatus::Tie);
    assert!(available_positions(&board).is_empty());
    assert_eq!(terminal_score(GameStatus::Tie), Some(0));
}

#[test]
fn win_on_full_board_beats_tie() {
    let board = b("XXX/OOX/XOO");
    assert_eq!(status(&board), GameStatus::Won(Player::Ai));
}

#[test]
fn available_positions_are_ascending() {
    let board = b("X_O/_X_/O__");
    assert_eq!(available_positions(&board), vec![1, 3, 5, 7, 8]);
}

#[test]
fn terminal_scores_from_ai_perspective() {
    assert_eq!(terminal_score(GameStatus::Won(Player::Ai)), Some(10));
    assert_eq!(terminal_score(GameStatus::Won(Player::Human)), Some(-10));
    assert_eq!(terminal_score(GameStatus::InProgress), None);
}

#[test]
fn status_tokens() {
    assert_eq!(GameStatus::Won(Player::Ai).as_str(), "ai_won");
    assert_eq!(GameStatus::Won(Player::Human).as_str(), "human_won");
    assert_eq!(GameStatus::Tie.as_str(), "tie");
    assert_eq!(GameStatus::InProgress.as_str(), "in_progress");
    assert_eq!(GameStatus::Won(Player::Human).winner(), Some(Player::Human));
    assert!(!GameStatus::InProgress.is_terminal());
}
