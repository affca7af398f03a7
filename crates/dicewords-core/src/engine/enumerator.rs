use super::alignment::align;
use super::config::EnumerationConfig;
use super::error::EngineError;
use super::progress::{Progress, ProgressReporter};
use crate::core::lexicon::index::AnagramIndex;
use crate::core::models::candidate::CandidateWord;
use crate::core::models::dice::{DieSet, FaceSlot};
use itertools::Itertools;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument, trace, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Position of one remaining die in the search: which die, and which of its distinct faces
/// is currently its smallest available one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cursor {
    die: usize,
    offset: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnumerationStats {
    /// Number of top-level search branches, one per distinct starting face.
    pub branches: usize,
    pub lookups: usize,
    pub hits: usize,
    /// Matched words that could not be aligned to their face slots.
    pub dropped: usize,
    /// Unique candidates after deduplication.
    pub candidates: usize,
}

#[derive(Debug, Clone)]
pub struct Enumeration {
    /// Unique candidates in ascending `(text, dice)` order.
    pub candidates: Vec<CandidateWord>,
    pub stats: EnumerationStats,
}

#[derive(Debug, Default)]
struct Harvest {
    candidates: Vec<CandidateWord>,
    lookups: usize,
    hits: usize,
    dropped: usize,
}

impl Harvest {
    fn absorb(&mut self, other: Harvest) {
        self.candidates.extend(other.candidates);
        self.lookups += other.lookups;
        self.hits += other.hits;
        self.dropped += other.dropped;
    }
}

struct Branch {
    slot: FaceSlot,
    remaining: Vec<Cursor>,
}

#[derive(Debug, Clone, Copy)]
struct Deadline {
    at: Instant,
    budget: Duration,
}

struct SearchSpace<'a, I: ?Sized> {
    /// Distinct faces of every die, in die-set order.
    faces: Vec<Vec<FaceSlot>>,
    index: &'a I,
    max_len: usize,
    deadline: Option<Deadline>,
    /// Set by the first branch that runs out of time so the others stop at their next node.
    expired: AtomicBool,
}

impl<'a, I> SearchSpace<'a, I>
where
    I: AnagramIndex + ?Sized,
{
    fn new(dice: &DieSet, index: &'a I, max_len: usize, deadline: Option<Deadline>) -> Self {
        let faces = dice
            .dice()
            .iter()
            .map(|die| {
                die.distinct_faces()
                    .into_iter()
                    .map(|letter| FaceSlot::new(letter, die.id()))
                    .collect()
            })
            .collect();
        Self {
            faces,
            index,
            max_len,
            deadline,
            expired: AtomicBool::new(false),
        }
    }

    fn all_dice(&self) -> Vec<Cursor> {
        (0..self.faces.len())
            .map(|die| Cursor { die, offset: 0 })
            .collect()
    }

    fn slot_at(&self, cursor: Cursor) -> FaceSlot {
        self.faces[cursor.die][cursor.offset]
    }

    /// Splits the search over `remaining` into its independent branches.
    ///
    /// Each step takes the smallest current face among the remaining dice, branches on it with
    /// that die removed, then moves the die on to its next distinct face (or drops it once its
    /// faces are exhausted). Every branch therefore starts from a face no smaller than the
    /// faces already in the prefix, which keeps the prefix sorted by letter.
    fn branches(&self, mut remaining: Vec<Cursor>) -> Vec<Branch> {
        let mut branches = Vec::new();
        while let Some(position) = (0..remaining.len())
            .min_by_key(|&i| (self.slot_at(remaining[i]).letter, remaining[i].die))
        {
            let cursor = remaining[position];
            let mut rest = remaining.clone();
            rest.remove(position);
            branches.push(Branch {
                slot: self.slot_at(cursor),
                remaining: rest,
            });

            if cursor.offset + 1 < self.faces[cursor.die].len() {
                remaining[position].offset += 1;
            } else {
                remaining.swap_remove(position);
            }
        }
        branches
    }

    /// Looks up `prefix` and then searches every extension of it.
    ///
    /// The deadline is checked at every node, so a search that runs out of time unwinds
    /// without finishing the subtree it is in.
    fn explore(
        &self,
        prefix: &[FaceSlot],
        remaining: Vec<Cursor>,
    ) -> Result<Harvest, EngineError> {
        self.check_deadline()?;
        let mut harvest = self.probe(prefix);
        if prefix.len() >= self.max_len {
            return Ok(harvest);
        }

        for branch in self.branches(remaining) {
            let mut extended = Vec::with_capacity(prefix.len() + 1);
            extended.extend_from_slice(prefix);
            extended.push(branch.slot);
            harvest.absorb(self.explore(&extended, branch.remaining)?);
        }
        Ok(harvest)
    }

    fn check_deadline(&self) -> Result<(), EngineError> {
        let Some(deadline) = self.deadline else {
            return Ok(());
        };
        if self.expired.load(Ordering::Relaxed) || Instant::now() >= deadline.at {
            self.expired.store(true, Ordering::Relaxed);
            return Err(EngineError::TimedOut {
                budget: deadline.budget,
            });
        }
        Ok(())
    }

    fn probe(&self, prefix: &[FaceSlot]) -> Harvest {
        let key: String = prefix.iter().map(|slot| slot.letter).collect();
        let mut harvest = Harvest {
            lookups: 1,
            ..Harvest::default()
        };

        let Some(words) = self.index.lookup(&key) else {
            return harvest;
        };
        harvest.hits = 1;
        trace!(key = %key, matches = words.len(), "Anagram key hit.");

        for word in words {
            match align(word, prefix) {
                Ok(candidate) => harvest.candidates.push(candidate),
                Err(e) => {
                    warn!("Dropping match for key '{}': {}", key, e);
                    harvest.dropped += 1;
                }
            }
        }
        harvest
    }
}

/// Finds every dictionary word that can be spelled by choosing at most one face per die.
///
/// The search is a depth-first backtracking over face choices; each anagram key reachable
/// from the dice is looked up once per distinct choice of face slots. Top-level branches are
/// independent and run in parallel when the `parallel` feature is enabled. The time budget,
/// if any, is checked at every node of the search; exceeding it discards everything found so
/// far and returns [`EngineError::TimedOut`].
#[instrument(skip_all, name = "word_enumeration")]
pub fn enumerate<I>(
    dice: &DieSet,
    index: &I,
    config: &EnumerationConfig,
    reporter: &ProgressReporter,
) -> Result<Enumeration, EngineError>
where
    I: AnagramIndex + Sync + ?Sized,
{
    let started = Instant::now();
    let deadline = config.time_budget.map(|budget| Deadline {
        at: started + budget,
        budget,
    });
    let max_len = config.max_word_length.unwrap_or(usize::MAX);
    let space = SearchSpace::new(dice, index, max_len, deadline);
    let branches = space.branches(space.all_dice());

    info!(
        dice = dice.len(),
        faces = dice.total_faces(),
        branches = branches.len(),
        "Starting word enumeration."
    );
    reporter.report(Progress::BranchesStart {
        total: branches.len() as u64,
    });

    #[cfg(not(feature = "parallel"))]
    let iterator = branches.iter();

    #[cfg(feature = "parallel")]
    let iterator = branches.par_iter();

    let results: Vec<Result<Harvest, EngineError>> = iterator
        .map(|branch| {
            let harvest = space.explore(&[branch.slot], branch.remaining.clone())?;
            reporter.report(Progress::BranchFinished {
                candidates: harvest.candidates.len(),
            });
            Ok(harvest)
        })
        .collect();

    reporter.report(Progress::BranchesFinish);

    let mut total = Harvest::default();
    for result in results {
        total.absorb(result?);
    }

    let raw = total.candidates.len();
    let candidates: Vec<CandidateWord> = total.candidates.into_iter().sorted().dedup().collect();
    if raw != candidates.len() {
        debug!(
            duplicates = raw - candidates.len(),
            "Collapsed duplicate candidates."
        );
    }

    let stats = EnumerationStats {
        branches: branches.len(),
        lookups: total.lookups,
        hits: total.hits,
        dropped: total.dropped,
        candidates: candidates.len(),
    };
    info!(
        candidates = stats.candidates,
        lookups = stats.lookups,
        hits = stats.hits,
        dropped = stats.dropped,
        elapsed = ?started.elapsed(),
        "Word enumeration finished."
    );

    Ok(Enumeration { candidates, stats })
}
