/// A single alignment between two fingerprints.
///
/// `path1[k]` and `path2[k]` form column `k` of the alignment. A `None` on one side is a gap
/// against the residue on the other side; the two entries are never both `None`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AlignmentResult {
    pub score: f64,
    pub path1: Vec<Option<usize>>,
    pub path2: Vec<Option<usize>>,
}

impl AlignmentResult {
    /// Number of alignment columns.
    pub fn len(&self) -> usize {
        self.path1.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path1.is_empty()
    }

    pub fn columns(&self) -> impl Iterator<Item = (Option<usize>, Option<usize>)> + '_ {
        self.path1.iter().copied().zip(self.path2.iter().copied())
    }

    /// Columns in which both sides consume a residue.
    pub fn aligned_count(&self) -> usize {
        super::metrics::aligned_count(&self.path1, &self.path2)
    }

    pub fn gap_count(&self) -> usize {
        self.len() - self.aligned_count()
    }

    /// First and last residue of the first fingerprint covered by this alignment.
    pub fn span1(&self) -> Option<(usize, usize)> {
        span(&self.path1)
    }

    /// First and last residue of the second fingerprint covered by this alignment.
    pub fn span2(&self) -> Option<(usize, usize)> {
        span(&self.path2)
    }
}

fn span(path: &[Option<usize>]) -> Option<(usize, usize)> {
    let first = path.iter().find_map(|&index| index)?;
    let last = path.iter().rev().find_map(|&index| index)?;
    Some((first, last))
}

/// Disjoint local alignment segments, best score first.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LocalAlignmentSet {
    segments: Vec<AlignmentResult>,
}

impl LocalAlignmentSet {
    pub(crate) fn new(mut segments: Vec<AlignmentResult>) -> Self {
        segments.sort_by(|a, b| b.score.total_cmp(&a.score));
        Self { segments }
    }

    pub fn best(&self) -> Option<&AlignmentResult> {
        self.segments.first()
    }

    pub fn segments(&self) -> &[AlignmentResult] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AlignmentResult> {
        self.segments.iter()
    }

    pub fn into_vec(self) -> Vec<AlignmentResult> {
        self.segments
    }
}

impl<'a> IntoIterator for &'a LocalAlignmentSet {
    type Item = &'a AlignmentResult;
    type IntoIter = std::slice::Iter<'a, AlignmentResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}
