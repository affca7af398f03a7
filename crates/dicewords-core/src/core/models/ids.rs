use slotmap::new_key_type;
use std::fmt;

new_key_type! {
    pub struct VariableId;
}

/// Identifies a die by its position in the caller's input order.
///
/// Sorting a [`DieSet`](super::dice::DieSet) for the search never changes a die's id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DieId(pub usize);

impl DieId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for DieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
