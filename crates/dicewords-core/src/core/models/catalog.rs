use super::candidate::CandidateWord;
use super::ids::VariableId;
use slotmap::SlotMap;
use std::collections::HashMap;

/// One binary decision variable per unique candidate word.
///
/// Registration is idempotent: registering a candidate that is structurally equal to one seen
/// before returns the existing variable. Iteration follows registration order.
#[derive(Debug, Default, Clone)]
pub struct VariableCatalog {
    variables: SlotMap<VariableId, CandidateWord>,
    index: HashMap<CandidateWord, VariableId>,
}

impl VariableCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, candidate: CandidateWord) -> VariableId {
        if let Some(&id) = self.index.get(&candidate) {
            return id;
        }
        let id = self.variables.insert(candidate.clone());
        self.index.insert(candidate, id);
        id
    }

    pub fn id_of(&self, candidate: &CandidateWord) -> Option<VariableId> {
        self.index.get(candidate).copied()
    }

    pub fn candidate(&self, id: VariableId) -> Option<&CandidateWord> {
        self.variables.get(id)
    }

    pub fn variable_name(&self, id: VariableId) -> Option<String> {
        self.candidate(id).map(CandidateWord::variable_name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (VariableId, &CandidateWord)> {
        self.variables.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = VariableId> + '_ {
        self.variables.keys()
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}

impl FromIterator<CandidateWord> for VariableCatalog {
    fn from_iter<T: IntoIterator<Item = CandidateWord>>(iter: T) -> Self {
        let mut catalog = Self::new();
        for candidate in iter {
            catalog.register(candidate);
        }
        catalog
    }
}
