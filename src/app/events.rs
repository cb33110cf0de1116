use std::ops::Range;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    ToggleRow(usize),
    /// Rows the list laid out this frame; everything else is recycled.
    RowsMaterialized(Range<usize>),
}
