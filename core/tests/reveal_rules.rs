use std::collections::{BTreeSet, VecDeque};

use sapper_core::*;

fn session(size: Coord2, mines: &[Coord2]) -> GameSession {
    GameSession::new(Board::from_mine_coords(size, mines).unwrap())
}

fn revealed(board: &Board) -> BTreeSet<Coord2> {
    board.positions().filter(|&pos| board.is_revealed(pos)).collect()
}

/// Zero region containing `start` plus the cells bordering it, computed without the engine.
fn expected_region(board: &Board, start: Coord2) -> BTreeSet<Coord2> {
    let mut region = BTreeSet::from([start]);
    let mut queue = VecDeque::from([start]);
    while let Some(pos) = queue.pop_front() {
        if board.count_adjacent_mines(pos) != 0 {
            continue;
        }
        for neighbor in board.iter_neighbors(pos) {
            if region.insert(neighbor) {
                queue.push_back(neighbor);
            }
        }
    }
    region
}

#[test]
fn single_safe_cell_wins_immediately() {
    let mut game = GameSession::new(Board::random(GameConfig::new(1, 1, 0).unwrap(), 3).unwrap());

    assert_eq!(game.apply_move((0, 0)), MoveOutcome::Continue);
    assert!(game.is_won());
    assert_eq!(game.state(), SessionState::Won);
}

#[test]
fn diagonal_mine_stops_cascade() {
    let mut game = session((3, 3), &[(1, 1)]);

    assert_eq!(game.board().count_adjacent_mines((0, 0)), 1);
    assert_eq!(game.apply_move((0, 0)), MoveOutcome::Continue);
    assert_eq!(revealed(game.board()), BTreeSet::from([(0, 0)]));
    assert!(!game.is_won());
}

#[test]
fn empty_board_clears_from_center() {
    let mut game = session((3, 3), &[]);

    assert_eq!(game.apply_move((1, 1)), MoveOutcome::Continue);
    assert_eq!(game.board().revealed_count(), 9);
    assert!(game.is_won());
}

#[test]
fn mine_hit_leaves_safe_count_alone() {
    let mut game = session((4, 4), &[(3, 0), (0, 3)]);
    let before = game.unrevealed_safe_count();

    assert_eq!(game.apply_move((0, 3)), MoveOutcome::HitMine);
    assert_eq!(game.unrevealed_safe_count(), before);
    assert_eq!(game.state(), SessionState::Lost);
    assert_eq!(game.triggered_mine(), Some((0, 3)));
}

#[test]
fn generated_boards_have_exact_and_stable_mine_sets() {
    for seed in 0..20 {
        let config = GameConfig::new(12, 7, 30).unwrap();
        let mut board = Board::random(config, seed).unwrap();
        let mines: BTreeSet<_> = board.mine_positions().collect();
        assert_eq!(mines.len(), 30);

        let all: Vec<_> = board.positions().collect();
        for pos in all {
            board.reveal(pos);
        }
        assert_eq!(board.mine_positions().collect::<BTreeSet<_>>(), mines);
    }
}

#[test]
fn adjacent_count_matches_brute_force() {
    let board = Board::random(GameConfig::new(10, 6, 20).unwrap(), 11).unwrap();
    for (x, y) in board.positions() {
        let mut expected = 0;
        for dy in -1i16..=1 {
            for dx in -1i16..=1 {
                let (nx, ny) = (i16::from(x) + dx, i16::from(y) + dy);
                if (dx, dy) == (0, 0) || nx < 0 || ny < 0 || nx >= 10 || ny >= 6 {
                    continue;
                }
                if board.is_mine((nx as Coord, ny as Coord)) {
                    expected += 1;
                }
            }
        }
        assert_eq!(board.count_adjacent_mines((x, y)), expected, "at {:?}", (x, y));
    }
}

#[test]
fn validate_move_is_idempotent() {
    let game = session((5, 5), &[(2, 2)]);
    for pos in game.board().positions() {
        assert_eq!(game.validate_move(pos), game.validate_move(pos));
    }
    assert_eq!(game.validate_move((9, 9)), game.validate_move((9, 9)));
}

#[test]
fn cascade_reveals_maximal_region_and_no_mines() {
    for seed in 0..30 {
        let board = Board::random(GameConfig::new(16, 16, 25).unwrap(), seed).unwrap();
        let Some(start) = board
            .positions()
            .find(|&pos| !board.is_mine(pos) && board.count_adjacent_mines(pos) == 0)
        else {
            continue;
        };
        let expected = expected_region(&board, start);

        let mut game = GameSession::new(board);
        assert_eq!(game.apply_move(start), MoveOutcome::Continue);

        let opened = revealed(game.board());
        assert_eq!(opened, expected, "seed {seed}");
        assert!(opened.iter().all(|&pos| !game.board().is_mine(pos)));
        assert_eq!(
            usize::from(game.unrevealed_safe_count()),
            usize::from(game.board().safe_cell_count()) - opened.len()
        );
    }
}

#[test]
fn large_boards_terminate() {
    let mut open = session((50, 50), &[]);
    assert_eq!(open.apply_move((25, 25)), MoveOutcome::Continue);
    assert_eq!(open.board().revealed_count(), 2500);
    assert!(open.is_won());

    let mut widest = session((Coord::MAX, Coord::MAX), &[]);
    assert_eq!(widest.apply_move((0, 0)), MoveOutcome::Continue);
    assert!(widest.is_won());

    let config = GameConfig::new(50, 50, 2499).unwrap();
    let board = Board::random(config, 5).unwrap();
    let safe = board.positions().find(|&pos| !board.is_mine(pos)).unwrap();
    let mut packed = GameSession::new(board);
    assert_eq!(packed.apply_move(safe), MoveOutcome::Continue);
    assert_eq!(packed.board().revealed_count(), 1);
    assert!(packed.is_won());
}

#[test]
fn win_only_after_last_safe_cell() {
    let mines = [(0, 0), (4, 4)];
    let mut game = session((5, 5), &mines);
    let safe: Vec<_> = game
        .board()
        .positions()
        .filter(|pos| !mines.contains(pos))
        .collect();

    for pos in safe {
        // already opened by an earlier cascade
        if !game.validate_move(pos) {
            continue;
        }
        assert!(!game.is_won());
        assert_eq!(game.apply_move(pos), MoveOutcome::Continue);
    }
    assert!(game.is_won());
    assert_eq!(game.unrevealed_safe_count(), 0);
    assert_eq!(game.snapshot(Visibility::Player).hidden_count(), 2);
}

#[test]
fn end_of_game_snapshot_shows_every_mine() {
    let mut game = session((3, 3), &[(0, 0), (2, 2)]);
    game.apply_move((0, 0));

    let player = game.snapshot(Visibility::Player);
    assert_eq!(player.cell_at((0, 0)), CellView::Mine);
    assert_eq!(player.cell_at((2, 2)), CellView::Hidden);

    let everything = game.snapshot(Visibility::Everything);
    assert_eq!(everything.cell_at((2, 2)), CellView::Mine);
    assert_eq!(everything.cell_at((1, 1)), CellView::Clear(2));
    assert_eq!(everything.cell_at((2, 0)), CellView::Clear(0));
}
