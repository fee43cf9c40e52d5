/// One row of the summary view. `position` is derived, 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    pub position: usize,
    pub name: String,
    pub check_in: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SummarySnapshot {
    pub present: usize,
    pub class_strength: Option<usize>,
    pub absent: Option<usize>,
}
