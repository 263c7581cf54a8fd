//! A* search over `Board` states.
//!
//! `Solver` runs the input board and its twin through one priority queue and
//! reports which of the two reaches the goal.
use crate::board::Board;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::rc::Rc;

/// Counters describing the work done by one solve.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes popped from the queue and expanded (goal node excluded).
    pub expanded: u64,
    /// Nodes pushed onto the queue, both roots included.
    pub enqueued: u64,
}

/// One state of the search: a board, how it was reached, and its cached scores.
#[derive(Debug)]
struct SearchNode {
    board: Board,
    predecessor: Option<Rc<SearchNode>>,
    moves: u32,
    manhattan: u32,
    hamming: u32,
}

impl SearchNode {
    fn new(board: Board, predecessor: Option<Rc<SearchNode>>, moves: u32) -> Rc<Self> {
        let manhattan = board.manhattan();
        let hamming = board.hamming();
        Rc::new(SearchNode {
            board,
            predecessor,
            moves,
            manhattan,
            hamming,
        })
    }

    /// Follows predecessor links back to the node this lineage started from.
    fn root(self: &Rc<Self>) -> &Rc<Self> {
        let mut current = self;
        while let Some(previous) = &current.predecessor {
            current = previous;
        }
        current
    }
}

/// Queue entry ordered by `(manhattan + moves, manhattan, hamming, insertion order)`.
///
/// The insertion sequence number only breaks exact ties, so equal-priority
/// nodes come out first-in first-out.
#[derive(Debug)]
struct QueueEntry {
    key: (u32, u32, u32, u64),
    node: Rc<SearchNode>,
}

impl QueueEntry {
    fn new(node: Rc<SearchNode>, sequence: u64) -> Self {
        let key = (node.manhattan + node.moves, node.manhattan, node.hamming, sequence);
        QueueEntry { key, node }
    }
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for QueueEntry {}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

/// Min-priority frontier shared by the real and twin lineages of one solve.
struct Frontier {
    heap: BinaryHeap<Reverse<QueueEntry>>,
    next_sequence: u64,
}

impl Frontier {
    fn new() -> Self {
        Frontier {
            heap: BinaryHeap::new(),
            next_sequence: 0,
        }
    }

    fn push(&mut self, node: Rc<SearchNode>) {
        self.heap.push(Reverse(QueueEntry::new(node, self.next_sequence)));
        self.next_sequence += 1;
    }

    fn pop(&mut self) -> Option<Rc<SearchNode>> {
        self.heap.pop().map(|Reverse(entry)| entry.node)
    }

    fn pushed(&self) -> u64 {
        self.next_sequence
    }
}

/// A* solver for the sliding-tile puzzle.
///
/// The whole search runs inside `Solver::new`. The initial board and its twin
/// are searched together from one queue; since exactly one of them is
/// solvable, whichever lineage reaches the goal first decides the verdict.
///
/// # Examples
/// ```
/// use slider_solver::board::Board;
/// use slider_solver::solver::Solver;
///
/// let board = Board::from_grid(&[vec![0, 1, 3], vec![4, 2, 5], vec![7, 8, 6]]).unwrap();
/// let solver = Solver::new(board.clone());
/// assert!(solver.is_solvable());
/// assert_eq!(solver.moves(), 4);
///
/// let path = solver.solution().unwrap();
/// assert_eq!(path.len(), 5);
/// assert_eq!(path[0], board);
/// assert!(path[4].is_goal());
///
/// let stuck = Board::from_grid(&[vec![1, 2, 3], vec![4, 5, 6], vec![8, 7, 0]]).unwrap();
/// let solver = Solver::new(stuck);
/// assert!(!solver.is_solvable());
/// assert_eq!(solver.moves(), -1);
/// assert!(solver.solution().is_none());
/// ```
#[derive(Debug)]
pub struct Solver {
    solution: Option<Rc<SearchNode>>,
    stats: SearchStats,
}

impl Solver {
    /// Searches for a shortest solution of `initial`.
    ///
    /// Returns once the search has either found the goal from `initial` or
    /// proven, via the twin lineage, that `initial` is unsolvable.
    pub fn new(initial: Board) -> Self {
        let twin = initial.twin();
        let real_root = SearchNode::new(initial, None, 0);
        let twin_root = SearchNode::new(twin, None, 0);

        if real_root.board.is_goal() {
            return Solver {
                solution: Some(real_root),
                stats: SearchStats::default(),
            };
        }

        let mut frontier = Frontier::new();
        frontier.push(Rc::clone(&real_root));
        frontier.push(twin_root);

        let mut expanded = 0;
        let mut goal = None;
        while let Some(node) = frontier.pop() {
            if node.board.is_goal() {
                goal = Some(node);
                break;
            }
            expanded += 1;
            Self::expand(&mut frontier, &node);
        }

        // Only the lineage rooted at the input board yields a solution.
        let solution = goal.filter(|node| Rc::ptr_eq(node.root(), &real_root));

        Solver {
            solution,
            stats: SearchStats {
                expanded,
                enqueued: frontier.pushed(),
            },
        }
    }

    /// Pushes every neighbor of `node` except the board it was reached from.
    fn expand(frontier: &mut Frontier, node: &Rc<SearchNode>) {
        let came_from = node.predecessor.as_ref().map(|p| &p.board);
        for neighbor in node.board.neighbors() {
            if came_from == Some(&neighbor) {
                continue;
            }
            frontier.push(SearchNode::new(neighbor, Some(Rc::clone(node)), node.moves + 1));
        }
    }

    /// Is the initial board solvable?
    pub fn is_solvable(&self) -> bool {
        self.solution.is_some()
    }

    /// Minimum number of moves to solve the initial board, or `-1` if it is unsolvable.
    pub fn moves(&self) -> i32 {
        match &self.solution {
            Some(node) => (node.moves + node.manhattan) as i32,
            None => -1,
        }
    }

    /// The boards of a shortest solution, from the initial board to the goal
    /// inclusive, or `None` if the initial board is unsolvable.
    pub fn solution(&self) -> Option<Vec<Board>> {
        let mut current = self.solution.as_ref();
        let mut path = Vec::new();
        while let Some(node) = current {
            path.push(node.board.clone());
            current = node.predecessor.as_ref();
        }

        if path.is_empty() {
            return None;
        }
        path.reverse();
        Some(path)
    }

    /// Work counters of the search that produced this verdict.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }
}
