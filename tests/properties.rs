//! Property tests for board evaluation and the history controller.
//!
//! 1. A complete line is always reported, first line in row/column/diagonal order.
//! 2. Full boards with no complete line are draws.
//! 3. Moves onto taken cells or decided boards are refused.
//! 4. Any command sequence keeps the history pointer in range and every
//!    recorded board one legal ply away from its predecessor.
//! 5. Toggling the sort order twice leaves the move list untouched.

use proptest::prelude::*;
use tic_tac_toe_history::{evaluate, Board, Cell, CellIndex, Game, Outcome, Player, LINES};

// ── Helpers ─────────────────────────────────────────────────────────────

fn cell_strategy() -> impl Strategy<Value = Cell> {
    prop_oneof![
        Just(Cell::Empty),
        Just(Cell::Taken(Player::X)),
        Just(Cell::Taken(Player::O)),
    ]
}

fn board_strategy() -> impl Strategy<Value = Board> {
    prop::array::uniform9(cell_strategy()).prop_map(Board::from_cells)
}

fn full_board_strategy() -> impl Strategy<Value = Board> {
    prop::array::uniform9(prop_oneof![
        Just(Cell::Taken(Player::X)),
        Just(Cell::Taken(Player::O)),
    ])
    .prop_map(Board::from_cells)
}

#[derive(Debug, Clone)]
enum Command {
    Play(usize),
    Jump(usize),
    Toggle,
}

fn command_strategy() -> impl Strategy<Value = Command> {
    prop_oneof![
        4 => (0usize..9).prop_map(Command::Play),
        2 => (0usize..12).prop_map(Command::Jump),
        1 => Just(Command::Toggle),
    ]
}

fn run(game: &mut Game, command: &Command) {
    match *command {
        Command::Play(cell) => {
            game.play(CellIndex::new(cell).unwrap());
        }
        Command::Jump(target) => {
            let len = game.history().len();
            assert_eq!(game.jump_to(target).is_ok(), target < len);
        }
        Command::Toggle => game.toggle_sort_order(),
    }
}

fn first_complete_line(board: &Board) -> Option<(Player, [usize; 3])> {
    let cells = board.cells();
    LINES.iter().find_map(|&[a, b, c]| match cells[a] {
        Cell::Taken(player) if cells[a] == cells[b] && cells[b] == cells[c] => {
            Some((player, [a, b, c]))
        }
        _ => None,
    })
}

// ── Properties ──────────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig {
        max_global_rejects: 65536,
        ..ProptestConfig::default()
    })]

    #[test]
    fn complete_line_is_reported(board in board_strategy()) {
        match first_complete_line(&board) {
            Some((player, line)) => {
                prop_assert_eq!(evaluate(&board), Outcome::Win { player, line });
            }
            None if board.is_full() => {
                prop_assert_eq!(evaluate(&board), Outcome::Draw);
            }
            None => {
                prop_assert_eq!(evaluate(&board), Outcome::InProgress);
            }
        }
    }

    #[test]
    fn full_board_without_line_is_draw(board in full_board_strategy()) {
        prop_assume!(first_complete_line(&board).is_none());
        prop_assert_eq!(evaluate(&board), Outcome::Draw);
    }

    #[test]
    fn refused_moves_leave_board_alone(board in board_strategy(), cell in 0usize..9) {
        let index = CellIndex::new(cell).unwrap();
        let before = board;
        let result = board.apply_move(index, Player::X);
        if board.outcome().is_terminal() || board.cell(index) != Cell::Empty {
            prop_assert!(result.is_err());
        } else {
            let next = result.unwrap();
            prop_assert_eq!(next.cell(index), Cell::Taken(Player::X));
            let changed = (0..9).filter(|&i| next.cells()[i] != board.cells()[i]).count();
            prop_assert_eq!(changed, 1);
        }
        prop_assert_eq!(board, before);
    }

    #[test]
    fn history_stays_consistent(commands in prop::collection::vec(command_strategy(), 0..40)) {
        let mut game = Game::new();
        for command in &commands {
            run(&mut game, command);

            let history = game.history();
            prop_assert!(game.current_move() < history.len());
            prop_assert_eq!(history[0].board(), &Board::new());
            prop_assert_eq!(history[0].last_move(), None);

            for (ply, pair) in history.windows(2).enumerate() {
                let (previous, entry) = (&pair[0], &pair[1]);
                let cell = entry.last_move().unwrap();
                let mover = Player::for_move(ply);
                prop_assert_eq!(previous.board().apply_move(cell, mover), Ok(*entry.board()));
                prop_assert!(entry.board().is_balanced());
            }
        }
    }

    #[test]
    fn sort_toggle_is_an_involution(commands in prop::collection::vec(command_strategy(), 0..30)) {
        let mut game = Game::new();
        for command in &commands {
            run(&mut game, command);
        }
        let before = game.describe_moves();
        let current = game.current_move();

        game.toggle_sort_order();
        let flipped = game.describe_moves();
        let mut reversed = flipped.clone();
        reversed.reverse();
        prop_assert_eq!(&reversed, &before);

        game.toggle_sort_order();
        prop_assert_eq!(game.describe_moves(), before);
        prop_assert_eq!(game.current_move(), current);
    }
}
