pub mod align;
pub mod batch;
pub mod fingerprint;

/// Renders an alignment path entry, `-` for a gap.
pub(crate) fn format_index(index: Option<usize>) -> String {
    index.map_or_else(|| "-".to_string(), |i| i.to_string())
}

/// Renders a residue span as `first-last`, `-` when the path holds only gaps.
pub(crate) fn format_span(span: Option<(usize, usize)>) -> String {
    span.map_or_else(|| "-".to_string(), |(first, last)| format!("{first}-{last}"))
}
