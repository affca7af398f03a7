use crate::core::models::candidate::CandidateWord;
use crate::core::models::dice::FaceSlot;
use crate::core::models::ids::DieId;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum AlignmentError {
    #[error("Word '{word}' has {word_len} letters but {slot_count} face slots were supplied")]
    LengthMismatch {
        word: String,
        word_len: usize,
        slot_count: usize,
    },

    #[error(
        "Word '{word}' needs letter '{expected}' at position {position} but the aligned slot supplies '{found}'"
    )]
    LetterMismatch {
        word: String,
        position: usize,
        expected: char,
        found: char,
    },
}

/// Assigns to each position of `word` the die that supplies its letter.
///
/// Letters of the word are ordered by `(letter, position)` and the slots by letter, keeping
/// the slots' original order among equal letters; the two sequences are then paired up
/// positionally. When several dice supply the same repeated letter, they are handed to the
/// occurrences of that letter left to right in slot order. Any such hand-out spells the word,
/// but the choice of which die lands on which occurrence is arbitrary.
pub fn align(word: &str, slots: &[FaceSlot]) -> Result<CandidateWord, AlignmentError> {
    let mut letters: Vec<(char, usize)> = word
        .chars()
        .enumerate()
        .map(|(position, letter)| (letter, position))
        .collect();

    if letters.len() != slots.len() {
        return Err(AlignmentError::LengthMismatch {
            word: word.to_string(),
            word_len: letters.len(),
            slot_count: slots.len(),
        });
    }

    letters.sort_unstable();
    let mut ordered = slots.to_vec();
    ordered.sort_by_key(|slot| slot.letter);

    let mut dice = vec![DieId(0); letters.len()];
    for (&(expected, position), slot) in letters.iter().zip(&ordered) {
        if expected != slot.letter {
            return Err(AlignmentError::LetterMismatch {
                word: word.to_string(),
                position,
                expected,
                found: slot.letter,
            });
        }
        dice[position] = slot.die;
    }

    Ok(CandidateWord::new(word.to_string(), dice))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slots(spec: &[(char, usize)]) -> Vec<FaceSlot> {
        spec.iter()
            .map(|&(letter, die)| FaceSlot::new(letter, DieId(die)))
            .collect()
    }

    fn dice(candidate: &CandidateWord) -> Vec<usize> {
        candidate.dice().iter().map(|d| d.index()).collect()
    }

    #[test]
    fn each_position_gets_the_die_supplying_its_letter() {
        let candidate = align("cab", &slots(&[('a', 3), ('b', 1), ('c', 0)])).unwrap();

        assert_eq!(candidate.text(), "cab");
        assert_eq!(dice(&candidate), vec![0, 3, 1]);
    }

    #[test]
    fn repeated_letters_are_handed_out_in_slot_order() {
        let candidate = align("abba", &slots(&[('a', 5), ('a', 2), ('b', 7), ('b', 1)])).unwrap();
        assert_eq!(dice(&candidate), vec![5, 7, 1, 2]);
    }

    #[test]
    fn aligned_dice_spell_the_word() {
        let supplied = slots(&[('e', 0), ('l', 4), ('p', 2), ('y', 1)]);
        let candidate = align("yelp", &supplied).unwrap();

        for (letter, die) in candidate.text().chars().zip(candidate.dice()) {
            let slot = supplied.iter().find(|s| s.die == *die).unwrap();
            assert_eq!(slot.letter, letter);
        }
    }

    #[test]
    fn length_mismatch_is_reported() {
        let err = align("cab", &slots(&[('a', 0), ('b', 1)])).unwrap_err();
        assert_eq!(
            err,
            AlignmentError::LengthMismatch {
                word: "cab".to_string(),
                word_len: 3,
                slot_count: 2,
            }
        );
    }

    #[test]
    fn letter_mismatch_is_reported() {
        let err = align("cab", &slots(&[('a', 0), ('b', 1), ('d', 2)])).unwrap_err();
        assert!(matches!(
            err,
            AlignmentError::LetterMismatch {
                expected: 'c',
                found: 'd',
                ..
            }
        ));
    }
}
