use super::dice::FaceSlot;
use super::ids::DieId;

/// A dictionary word paired with the dice that spell it.
///
/// `dice()[i]` is the die supplying the `i`-th letter of `text()`. Die ids within one
/// candidate are pairwise distinct. Equality and hashing are structural over both fields,
/// which is what makes two searches that reach the same word on the same dice collapse into
/// a single decision variable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CandidateWord {
    text: String,
    dice: Vec<DieId>,
}

impl CandidateWord {
    pub(crate) fn new(text: String, dice: Vec<DieId>) -> Self {
        debug_assert_eq!(text.chars().count(), dice.len());
        Self { text, dice }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn dice(&self) -> &[DieId] {
        &self.dice
    }

    /// Number of letters (and dice) in the word.
    pub fn len(&self) -> usize {
        self.dice.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dice.is_empty()
    }

    /// The face slot consumed at each position, in word order.
    pub fn slots(&self) -> impl Iterator<Item = FaceSlot> + '_ {
        self.text
            .chars()
            .zip(self.dice.iter().copied())
            .map(|(letter, die)| FaceSlot::new(letter, die))
    }

    /// Number of positions linearly adjacent to `position` inside this word.
    ///
    /// Adjacent positions are counted, not distinct neighbouring letters, so a repeated
    /// neighbouring letter counts twice.
    pub fn degree_at(&self, position: usize) -> u32 {
        let len = self.len();
        if position >= len || len < 2 {
            0
        } else if position == 0 || position == len - 1 {
            1
        } else {
            2
        }
    }

    /// Solver-facing variable name, `x_<text>_<die>.<die>...`.
    pub fn variable_name(&self) -> String {
        let dice: Vec<String> = self.dice.iter().map(ToString::to_string).collect();
        format!("x_{}_{}", self.text, dice.join("."))
    }
}
