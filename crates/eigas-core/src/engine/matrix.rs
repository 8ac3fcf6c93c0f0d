use super::result::AlignmentResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Step {
    Diagonal,
    Top,
    Left,
}

/// One cell of the DP matrix. `prev` is the flat index of the predecessor cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct AlignmentNode {
    pub prev: Option<usize>,
    pub score: f64,
    pub index1: Option<usize>,
    pub index2: Option<usize>,
    pub gaps: usize,
}

impl AlignmentNode {
    /// A cell without predecessor: the origin, or a local restart.
    pub const ROOT: Self = Self {
        prev: None,
        score: 0.0,
        index1: None,
        index2: None,
        gaps: 0,
    };
}

/// The cells visited by a backtrack, in forward order, plus the cell it stopped at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Trace {
    pub cells: Vec<usize>,
    pub boundary: usize,
}

/// Row-major `(rows x cols)` arena of [`AlignmentNode`]s.
///
/// Row `i` corresponds to having consumed `i` residues of the first fingerprint, column `j`
/// to `j` residues of the second.
#[derive(Debug, Clone)]
pub(crate) struct DpMatrix {
    rows: usize,
    cols: usize,
    nodes: Vec<AlignmentNode>,
}

impl DpMatrix {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            nodes: vec![AlignmentNode::ROOT; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn index(&self, i: usize, j: usize) -> usize {
        i * self.cols + j
    }

    #[inline]
    pub fn at(&self, i: usize, j: usize) -> &AlignmentNode {
        &self.nodes[self.index(i, j)]
    }

    #[inline]
    pub fn node(&self, cell: usize) -> &AlignmentNode {
        &self.nodes[cell]
    }

    #[inline]
    pub fn set(&mut self, i: usize, j: usize, node: AlignmentNode) {
        let cell = self.index(i, j);
        self.nodes[cell] = node;
    }

    /// Builds the node reached from `(i, j)`'s predecessor along `step`.
    ///
    /// Gap steps add one to the inherited gap count.
    pub fn step(&self, i: usize, j: usize, step: Step, score: f64) -> AlignmentNode {
        let (pi, pj) = match step {
            Step::Diagonal => (i - 1, j - 1),
            Step::Top => (i - 1, j),
            Step::Left => (i, j - 1),
        };
        let prev = self.at(pi, pj);
        AlignmentNode {
            prev: Some(self.index(pi, pj)),
            score,
            index1: (step != Step::Left).then(|| i - 1),
            index2: (step != Step::Top).then(|| j - 1),
            gaps: prev.gaps + usize::from(step != Step::Diagonal),
        }
    }

    /// Follows predecessors from `end` until a root cell or a cell for which `stop` holds.
    pub fn trace(&self, end: usize, mut stop: impl FnMut(usize) -> bool) -> Trace {
        let mut cells = Vec::new();
        let mut cell = end;
        while let Some(prev) = self.nodes[cell].prev {
            if stop(cell) {
                break;
            }
            cells.push(cell);
            cell = prev;
        }
        cells.reverse();
        Trace {
            cells,
            boundary: cell,
        }
    }

    pub fn to_result(&self, trace: &Trace, score: f64) -> AlignmentResult {
        let (path1, path2) = trace
            .cells
            .iter()
            .map(|&cell| (self.nodes[cell].index1, self.nodes[cell].index2))
            .unzip();
        AlignmentResult {
            score,
            path1,
            path2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_nodes_record_consumed_indices() {
        let matrix = DpMatrix::new(3, 3);
        let diag = matrix.step(2, 1, Step::Diagonal, 1.0);
        assert_eq!(diag.prev, Some(matrix.index(1, 0)));
        assert_eq!((diag.index1, diag.index2), (Some(1), Some(0)));
        assert_eq!(diag.gaps, 0);

        let top = matrix.step(2, 1, Step::Top, 1.0);
        assert_eq!(top.prev, Some(matrix.index(1, 1)));
        assert_eq!((top.index1, top.index2), (Some(1), None));
        assert_eq!(top.gaps, 1);

        let left = matrix.step(2, 1, Step::Left, 1.0);
        assert_eq!(left.prev, Some(matrix.index(2, 0)));
        assert_eq!((left.index1, left.index2), (None, Some(0)));
        assert_eq!(left.gaps, 1);
    }

    #[test]
    fn gap_counts_accumulate_along_a_path() {
        let mut matrix = DpMatrix::new(3, 3);
        let first = matrix.step(1, 0, Step::Top, 1.0);
        matrix.set(1, 0, first);
        let second = matrix.step(2, 0, Step::Top, 2.0);
        assert_eq!(second.gaps, 2);
    }

    #[test]
    fn trace_stops_at_root_and_returns_forward_order() {
        let mut matrix = DpMatrix::new(3, 3);
        let a = matrix.step(1, 1, Step::Diagonal, 2.0);
        matrix.set(1, 1, a);
        let b = matrix.step(2, 2, Step::Diagonal, 4.0);
        matrix.set(2, 2, b);

        let trace = matrix.trace(matrix.index(2, 2), |_| false);
        assert_eq!(trace.cells, vec![matrix.index(1, 1), matrix.index(2, 2)]);
        assert_eq!(trace.boundary, matrix.index(0, 0));

        let result = matrix.to_result(&trace, 4.0);
        assert_eq!(result.path1, vec![Some(0), Some(1)]);
        assert_eq!(result.path2, vec![Some(0), Some(1)]);
    }

    #[test]
    fn trace_honours_stop_predicate() {
        let mut matrix = DpMatrix::new(3, 3);
        let a = matrix.step(1, 1, Step::Diagonal, 2.0);
        matrix.set(1, 1, a);
        let b = matrix.step(2, 2, Step::Diagonal, 4.0);
        matrix.set(2, 2, b);

        let claimed = matrix.index(1, 1);
        let trace = matrix.trace(matrix.index(2, 2), |cell| cell == claimed);
        assert_eq!(trace.cells, vec![matrix.index(2, 2)]);
        assert_eq!(trace.boundary, claimed);
        assert_eq!(matrix.node(trace.boundary).score, 2.0);
    }
}
