use super::ids::DieId;
use std::cmp::Ordering;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum DieSetError {
    #[error("A die set must contain at least one die")]
    NoDice,

    #[error("Die {die} has no faces")]
    EmptyDie { die: DieId },

    #[error("Die {die} has an invalid face {face:?}; every face must be a single letter")]
    InvalidFace { die: DieId, face: String },
}

/// A single face of a single die: the atomic unit consumed by the word search.
///
/// Ordering compares the letter first, so a sorted run of slots spells an anagram key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FaceSlot {
    pub letter: char,
    pub die: DieId,
}

impl FaceSlot {
    pub fn new(letter: char, die: DieId) -> Self {
        Self { letter, die }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Die {
    id: DieId,
    faces: Vec<char>,
}

impl Die {
    pub fn id(&self) -> DieId {
        self.id
    }

    /// Faces in ascending order, repeats included.
    pub fn faces(&self) -> &[char] {
        &self.faces
    }

    /// Faces in ascending order with repeats collapsed.
    pub fn distinct_faces(&self) -> Vec<char> {
        let mut faces = self.faces.clone();
        faces.dedup();
        faces
    }

    pub fn slots(&self) -> impl Iterator<Item = FaceSlot> + '_ {
        self.faces.iter().map(move |&letter| FaceSlot::new(letter, self.id))
    }
}

/// The immutable input of a model build.
///
/// Dice are kept sorted ascending by their sorted face lists (so the die with the smallest
/// face comes first), and each die's faces are sorted ascending. Every die has at least one
/// face and every face is a single lowercase letter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DieSet {
    dice: Vec<Die>,
    positions: Vec<usize>,
}

impl DieSet {
    /// Validates and sorts the given dice. Die ids are assigned from the input order.
    pub fn new<D, F>(dice: D) -> Result<Self, DieSetError>
    where
        D: IntoIterator,
        D::Item: IntoIterator<Item = F>,
        F: AsRef<str>,
    {
        let mut parsed = Vec::new();
        for (index, raw_faces) in dice.into_iter().enumerate() {
            let id = DieId(index);
            let mut faces = raw_faces
                .into_iter()
                .map(|face| parse_face(id, face.as_ref()))
                .collect::<Result<Vec<_>, _>>()?;
            if faces.is_empty() {
                return Err(DieSetError::EmptyDie { die: id });
            }
            faces.sort_unstable();
            parsed.push(Die { id, faces });
        }

        if parsed.is_empty() {
            return Err(DieSetError::NoDice);
        }

        parsed.sort_by(compare_dice);
        let mut positions = vec![0; parsed.len()];
        for (position, die) in parsed.iter().enumerate() {
            positions[die.id.index()] = position;
        }

        Ok(Self {
            dice: parsed,
            positions,
        })
    }

    /// Builds a die set from one string per die, each character being a face.
    pub fn from_letters<D, S>(dice: D) -> Result<Self, DieSetError>
    where
        D: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let dice: Vec<Vec<String>> = dice
            .into_iter()
            .map(|die| die.as_ref().chars().map(String::from).collect())
            .collect();
        Self::new(dice)
    }

    /// Dice in search order.
    pub fn dice(&self) -> &[Die] {
        &self.dice
    }

    pub fn die(&self, id: DieId) -> Option<&Die> {
        self.positions
            .get(id.index())
            .map(|&position| &self.dice[position])
    }

    pub fn len(&self) -> usize {
        self.dice.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dice.is_empty()
    }

    /// Every face of every die, in search order. Repeated faces yield repeated slots.
    pub fn face_slots(&self) -> impl Iterator<Item = FaceSlot> + '_ {
        self.dice.iter().flat_map(Die::slots)
    }

    pub fn total_faces(&self) -> usize {
        self.dice.iter().map(|die| die.faces.len()).sum()
    }
}

fn parse_face(die: DieId, raw: &str) -> Result<char, DieSetError> {
    let normalized = raw.trim().to_lowercase();
    let mut chars = normalized.chars();
    match (chars.next(), chars.next()) {
        (Some(letter), None) if letter.is_alphabetic() => Ok(letter),
        _ => Err(DieSetError::InvalidFace {
            die,
            face: raw.to_string(),
        }),
    }
}

fn compare_dice(a: &Die, b: &Die) -> Ordering {
    a.faces.cmp(&b.faces).then(a.id.cmp(&b.id))
}
