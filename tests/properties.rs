//! Properties of boards and solves checked over seeded random boards.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use slider_solver::utils::board_from_rows;
use slider_solver::{Board, Solver};
use std::collections::{HashSet, VecDeque};

/// Shortest distance to the goal by exhaustive breadth-first search.
fn bfs_distance(start: &Board) -> Option<usize> {
    let mut seen = HashSet::new();
    let mut queue = VecDeque::new();
    seen.insert(start.clone());
    queue.push_back((start.clone(), 0));

    while let Some((board, depth)) = queue.pop_front() {
        if board.is_goal() {
            return Some(depth);
        }
        for next in board.neighbors() {
            if seen.insert(next.clone()) {
                queue.push_back((next, depth + 1));
            }
        }
    }
    None
}

/// Solvability by counting inversions, independent of the twin search.
fn solvable_by_inversions(board: &Board) -> bool {
    let tiles: Vec<u32> = board.tiles().iter().copied().filter(|&t| t != 0).collect();
    let inversions: usize = tiles
        .iter()
        .enumerate()
        .map(|(i, &a)| tiles[i + 1..].iter().filter(|&&b| b < a).count())
        .sum();

    let n = board.dimension();
    if n % 2 == 1 {
        inversions % 2 == 0
    } else {
        // Blank row counted from the bottom, starting at 1.
        let blank_row_from_bottom = n - board.blank_index() / n;
        (inversions + blank_row_from_bottom) % 2 == 1
    }
}

#[test]
fn heuristics_are_zero_exactly_at_goal() {
    for seed in 0..50 {
        let board = Board::scrambled_with_seed(3, seed as usize % 6, seed).unwrap();
        assert_eq!(board.is_goal(), board.hamming() == 0);
        assert_eq!(board.is_goal(), board.manhattan() == 0);
    }
}

#[test]
fn neighbors_differ_by_one_blank_slide() {
    for seed in 0..30 {
        let board = Board::new_random_with_seed(4, seed).unwrap();
        let neighbors = board.neighbors();
        assert!((2..=4).contains(&neighbors.len()));

        let n = board.dimension();
        let blank = board.blank_index();
        for neighbor in &neighbors {
            let changed: Vec<usize> = (0..n * n)
                .filter(|&i| board.tiles()[i] != neighbor.tiles()[i])
                .collect();
            assert_eq!(changed.len(), 2);
            assert!(changed.contains(&blank));

            let other = if changed[0] == blank { changed[1] } else { changed[0] };
            let (br, bc) = (blank / n, blank % n);
            let (or, oc) = (other / n, other % n);
            assert_eq!(br.abs_diff(or) + bc.abs_diff(oc), 1);

            assert!(neighbor.neighbors().contains(&board));
        }
    }
}

#[test]
fn grid_round_trip_preserves_board() {
    for seed in 0..20 {
        let board = Board::new_random_with_seed(2 + seed as usize % 4, seed).unwrap();
        assert_eq!(Board::from_grid(&board.to_grid()).unwrap(), board);
    }
}

#[test]
fn twin_flips_solvability() {
    for seed in 0..10 {
        let board = Board::scrambled_with_seed(3, 10, seed).unwrap();
        assert!(Solver::new(board.clone()).is_solvable());
        assert!(!Solver::new(board.twin()).is_solvable());
        assert_ne!(solvable_by_inversions(&board), solvable_by_inversions(&board.twin()));
    }
}

#[test]
fn twin_verdict_matches_inversion_parity_on_2x2() {
    let mut rng = SmallRng::seed_from_u64(42);
    for _ in 0..30 {
        let board = Board::new_random_with_seed(2, rng.gen()).unwrap();
        let solver = Solver::new(board.clone());
        assert_eq!(solver.is_solvable(), solvable_by_inversions(&board));
        assert_eq!(solver.is_solvable(), bfs_distance(&board).is_some());
    }
}

#[test]
fn moves_match_breadth_first_distance() {
    for seed in 0..15 {
        let board = Board::scrambled_with_seed(3, 12, seed).unwrap();
        let expected = bfs_distance(&board).unwrap();

        let solver = Solver::new(board.clone());
        assert_eq!(solver.moves(), expected as i32);

        let path = solver.solution().unwrap();
        assert_eq!(path.len(), expected + 1);
        assert_eq!(path[0], board);
        assert!(path[expected].is_goal());
        for step in path.windows(2) {
            assert!(step[0].neighbors().contains(&step[1]));
        }
    }
}

#[test]
fn solves_scrambled_4x4() {
    let board = Board::scrambled_with_seed(4, 14, 2024).unwrap();
    let solver = Solver::new(board);
    assert!(solver.is_solvable());
    assert!(solver.moves() <= 14);
    assert_eq!(solver.moves() % 2, 14 % 2);
}

#[test]
fn textual_rows_solve_to_expected_move_counts() {
    let cases: [(&[&str], i32); 4] = [
        (&["1 2 3", "4 5 6", "7 8 0"], 0),
        (&["1 2 3", "4 5 6", "7 0 8"], 1),
        (&["0 1 3", "4 2 5", "7 8 6"], 4),
        (&["2 1", "3 0"], -1),
    ];

    for (rows, expected) in cases {
        let board = board_from_rows(rows).unwrap();
        let solver = Solver::new(board.clone());
        assert_eq!(solver.moves(), expected, "rows {:?}", rows);
        match solver.solution() {
            Some(path) => {
                assert_eq!(path.len() as i32, expected + 1);
                assert_eq!(path[0], board);
            }
            None => assert_eq!(expected, -1),
        }
    }
}
