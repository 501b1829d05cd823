use super::*;
use grid::*;

/// Low-level enumerator which changes an external adjacency matrix in place.
///
/// The free cells (off the diagonal, and above it for undirected graphs) are
/// read as the digits of a binary counter, the last cell being the least
/// significant one. Every call moves the matrix to the next value of the
/// counter, so all `2^cells` graphs are visited once, starting from the empty
/// graph.
#[derive(Debug, Clone)]
pub(crate) struct GraphEnumeratorState {
    cells: Vec<(usize, usize)>,
    graph_type: GraphType,
    started: bool,
    finished: bool,
}

impl GraphEnumeratorState {
    pub(crate) fn new(player_count: usize, graph_type: GraphType) -> Self {
        let mut cells = Vec::new();
        for i in 0..player_count {
            for j in 0..player_count {
                if i == j || (graph_type == GraphType::Undirected && j < i) {
                    continue;
                }
                cells.push((i, j));
            }
        }
        Self {
            cells,
            graph_type,
            started: false,
            finished: false,
        }
    }

    fn set(&self, grid: &mut Grid<bool>, (i, j): (usize, usize), v: bool) {
        grid[(i, j)] = v;
        if self.graph_type == GraphType::Undirected {
            grid[(j, i)] = v;
        }
    }

    pub(crate) fn next_graph(&mut self, grid: &mut Grid<bool>) -> bool {
        if self.finished {
            return false;
        }
        if !self.started {
            self.started = true;
            return true;
        }
        for pos in (0..self.cells.len()).rev() {
            let cell = self.cells[pos];
            if grid[cell] {
                self.set(grid, cell, false);
            } else {
                self.set(grid, cell, true);
                return true;
            }
        }
        self.finished = true;
        false
    }
}

/// Iterator over every friend graph on a fixed set of players.
pub struct FriendGraphEnumerator {
    players: Vec<Player>,
    grid: Grid<bool>,
    state: GraphEnumeratorState,
}

impl FriendGraphEnumerator {
    pub(crate) fn new(players: Vec<Player>, graph_type: GraphType) -> Self {
        let n = players.len();
        let grid = Grid::new(n, n);
        let state = GraphEnumeratorState::new(n, graph_type);
        Self { players, grid, state }
    }
}

impl Iterator for FriendGraphEnumerator {
    type Item = FriendGraph;

    fn next(&mut self) -> Option<Self::Item> {
        if self.state.next_graph(&mut self.grid) {
            Some(FriendGraph::from_grid_unchecked(&self.players, &self.grid))
        } else {
            None
        }
    }
}
