use std::collections::HashMap;
use std::ops::Range;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExpansionState {
    #[default]
    Collapsed,
    Expanded,
}

impl ExpansionState {
    pub fn toggled(self) -> Self {
        match self {
            Self::Collapsed => Self::Expanded,
            Self::Expanded => Self::Collapsed,
        }
    }

    pub fn is_expanded(self) -> bool {
        self == Self::Expanded
    }
}

/// Expansion flag per catalog index. Rows without an entry are collapsed.
#[derive(Debug, Clone, Default)]
pub struct RowStates {
    states: HashMap<usize, ExpansionState>,
}

impl RowStates {
    pub fn get(&self, index: usize) -> ExpansionState {
        self.states.get(&index).copied().unwrap_or_default()
    }

    pub fn toggle(&mut self, index: usize) -> ExpansionState {
        let state = self.states.entry(index).or_default();
        *state = state.toggled();
        *state
    }

    /// Drops state for rows outside `materialized`.
    pub fn retain(&mut self, materialized: &Range<usize>) {
        self.states.retain(|index, _| materialized.contains(index));
    }

    pub fn materialized(&self) -> usize {
        self.states.len()
    }
}
