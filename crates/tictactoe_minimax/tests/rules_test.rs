//! Tests for the tic-tac-toe rules engine.

use strum::IntoEnumIterator;
use tictactoe_minimax::{
    Action, Board, Cell, GameStatus, InvalidAction, Player, apply_action, current_player, initial,
    is_terminal, legal_actions, status, utility, winner,
};

#[test]
fn test_initial_board_is_empty() {
    let board = initial();
    assert!(board.cells().all(|cell| cell == Cell::Empty));
    assert_eq!(board, Board::new());
    for player in Player::iter() {
        assert_eq!(board.count(player), 0);
    }
}

#[test]
fn test_turns_alternate_from_x() {
    let mut board = initial();
    let mut expected = Player::X;
    for action in [(1, 1), (0, 0), (2, 2), (0, 2), (0, 1), (2, 1), (1, 0), (1, 2), (2, 0)] {
        assert_eq!(current_player(&board), expected);
        board = apply_action(&board, action.into()).unwrap();
        assert_eq!(
            board.cell(action.0, action.1),
            Cell::Occupied(expected),
            "{action:?} should carry the mover's mark"
        );
        expected = expected.opponent();
    }
}

#[test]
fn test_legal_actions_shrink() {
    let board = initial();
    let actions = legal_actions(&board);
    assert_eq!(actions.len(), 9);
    assert_eq!(actions[0], Action::new(0, 0));
    assert_eq!(actions[8], Action::new(2, 2));

    let board = apply_action(&board, Action::new(1, 1)).unwrap();
    let actions = legal_actions(&board);
    assert_eq!(actions.len(), 8);
    assert!(!actions.contains(&Action::new(1, 1)));
}

#[test]
fn test_apply_leaves_input_untouched() {
    let before = initial();
    let after = apply_action(&before, Action::new(0, 0)).unwrap();
    assert_eq!(before, Board::new());
    assert_ne!(before, after);
}

#[test]
fn test_apply_out_of_bounds() {
    let board = initial();
    assert_eq!(
        apply_action(&board, Action::new(3, 0)),
        Err(InvalidAction::OutOfBounds(Action::new(3, 0)))
    );
    assert_eq!(
        apply_action(&board, Action::new(0, 7)),
        Err(InvalidAction::OutOfBounds(Action::new(0, 7)))
    );
}

#[test]
fn test_apply_occupied() {
    let board = apply_action(&initial(), Action::new(2, 1)).unwrap();
    let err = apply_action(&board, Action::new(2, 1)).unwrap_err();
    assert_eq!(err, InvalidAction::Occupied(Action::new(2, 1)));
    assert_eq!(err.action(), Action::new(2, 1));
    assert_eq!(err.to_string(), "Cell (2, 1) is already occupied");
}

#[test]
fn test_full_board_without_winner() {
    let board: Board = "XOX/OXO/OXO".parse().unwrap();
    assert_eq!(winner(&board), None);
    assert!(is_terminal(&board));
    assert_eq!(utility(&board), 0);
    assert_eq!(status(&board), GameStatus::Draw);
    assert!(legal_actions(&board).is_empty());
}

#[test]
fn test_win_is_terminal_before_board_fills() {
    let board: Board = "XXX/OO./...".parse().unwrap();
    assert_eq!(winner(&board), Some(Player::X));
    assert!(is_terminal(&board));
    assert_eq!(utility(&board), 1);
    assert_eq!(status(&board), GameStatus::Won(Player::X));

    let board: Board = "XX./OOO/X..".parse().unwrap();
    assert_eq!(winner(&board), Some(Player::O));
    assert!(is_terminal(&board));
    assert_eq!(utility(&board), -1);
}

#[test]
fn test_open_board_is_not_terminal() {
    let board: Board = "XO./.X./...".parse().unwrap();
    assert!(!is_terminal(&board));
    assert_eq!(status(&board), GameStatus::InProgress);
    assert_eq!(current_player(&board), Player::O);
}

#[test]
fn test_terminal_matches_winner_or_full() {
    // Walk every reachable board and check the terminal definition on each.
    fn walk(board: Board, seen: &mut usize) {
        *seen += 1;
        let full = board.cells().all(|cell| cell != Cell::Empty);
        assert_eq!(is_terminal(&board), winner(&board).is_some() || full);
        if is_terminal(&board) {
            let expected = match winner(&board) {
                Some(Player::X) => 1,
                Some(Player::O) => -1,
                None => 0,
            };
            assert_eq!(utility(&board), expected);
            return;
        }
        for action in legal_actions(&board) {
            walk(apply_action(&board, action).unwrap(), seen);
        }
    }

    let mut seen = 0;
    walk(initial(), &mut seen);
    assert_eq!(seen, 549_946);
}

#[test]
fn test_board_serializes() {
    let board = apply_action(&initial(), Action::new(0, 0)).unwrap();
    let json = serde_json::to_string(&board).unwrap();
    let back: Board = serde_json::from_str(&json).unwrap();
    assert_eq!(board, back);
}

#[test]
#[should_panic(expected = "off the board")]
fn test_cell_query_out_of_range_panics() {
    initial().cell(0, 3);
}
