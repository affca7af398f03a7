use dicewords::engine::progress::{Progress, ProgressCallback};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

const SPINNER_TICK: Duration = Duration::from_millis(80);

/// Terminal progress for a model build.
///
/// Every phase shows a spinner labelled with the phase name. During the word search the
/// spinner becomes a bar over the top-level search branches, with a running count of the
/// dictionary matches found so far.
#[derive(Clone)]
pub struct CliProgressHandler {
    bar: ProgressBar,
    matches: Arc<AtomicUsize>,
}

impl CliProgressHandler {
    pub fn new() -> Self {
        let bar = ProgressBar::with_draw_target(None, ProgressDrawTarget::stderr());
        bar.finish_and_clear();
        Self {
            bar,
            matches: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn get_callback(&self) -> ProgressCallback<'static> {
        let handler = self.clone();
        Box::new(move |progress| handler.handle(progress))
    }

    fn handle(&self, progress: Progress) {
        let bar = &self.bar;
        match progress {
            Progress::PhaseStart { name } => {
                bar.reset();
                bar.set_style(style("{spinner:.green} {prefix}"));
                bar.set_prefix(name);
                bar.set_message("");
                bar.enable_steady_tick(SPINNER_TICK);
            }
            Progress::BranchesStart { total } => {
                self.matches.store(0, Ordering::Relaxed);
                bar.disable_steady_tick();
                bar.reset();
                bar.set_style(
                    style("{prefix} [{bar:40.cyan/blue}] {pos}/{len} branches, {msg} ({elapsed})")
                        .progress_chars("##-"),
                );
                bar.set_length(total);
                bar.set_message(matches_message(0));
            }
            Progress::BranchFinished { candidates } => {
                let found = self.matches.fetch_add(candidates, Ordering::Relaxed) + candidates;
                bar.set_message(matches_message(found));
                bar.inc(1);
            }
            // Concurrent branches may have published their counts out of order.
            Progress::BranchesFinish => {
                bar.set_message(matches_message(self.matches.load(Ordering::Relaxed)));
            }
            Progress::PhaseFinish => {
                bar.disable_steady_tick();
                bar.set_style(style("✓ {prefix} {msg}"));
                bar.finish();
            }
        }
    }
}

impl Default for CliProgressHandler {
    fn default() -> Self {
        Self::new()
    }
}

fn style(template: &str) -> ProgressStyle {
    ProgressStyle::with_template(template).unwrap_or_else(|_| ProgressStyle::default_spinner())
}

fn matches_message(found: usize) -> String {
    format!("{} found", found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn search_bar_counts_branches_and_matches() {
        let handler = CliProgressHandler::new();
        let callback = handler.get_callback();

        callback(Progress::PhaseStart {
            name: "Word Enumeration",
        });
        assert_eq!(handler.bar.prefix(), "Word Enumeration");
        assert!(!handler.bar.is_finished());

        callback(Progress::BranchesStart { total: 3 });
        for candidates in [2, 0, 5] {
            callback(Progress::BranchFinished { candidates });
        }
        assert_eq!(handler.bar.length(), Some(3));
        assert_eq!(handler.bar.position(), 3);
        assert_eq!(handler.bar.message(), "7 found");

        callback(Progress::BranchesFinish);
        callback(Progress::PhaseFinish);
        assert!(handler.bar.is_finished());
        assert_eq!(handler.bar.message(), "7 found");
        assert_eq!(handler.bar.prefix(), "Word Enumeration");
    }

    #[test]
    fn each_search_counts_from_zero() {
        let handler = CliProgressHandler::new();
        let callback = handler.get_callback();

        callback(Progress::BranchesStart { total: 1 });
        callback(Progress::BranchFinished { candidates: 4 });
        callback(Progress::BranchesStart { total: 2 });

        assert_eq!(handler.bar.position(), 0);
        assert_eq!(handler.bar.length(), Some(2));
        assert_eq!(handler.bar.message(), "0 found");
    }

    #[test]
    fn later_phases_clear_the_match_count() {
        let handler = CliProgressHandler::new();
        let callback = handler.get_callback();

        callback(Progress::BranchesStart { total: 1 });
        callback(Progress::BranchFinished { candidates: 4 });
        callback(Progress::PhaseStart {
            name: "Model Construction",
        });

        assert_eq!(handler.bar.prefix(), "Model Construction");
        assert_eq!(handler.bar.message(), "");
    }

    #[test]
    fn branches_finishing_on_several_threads_are_all_counted() {
        let handler = CliProgressHandler::new();
        let callback = handler.get_callback();
        callback(Progress::BranchesStart { total: 20 });

        thread::scope(|scope| {
            for _ in 0..4 {
                let callback = &callback;
                scope.spawn(move || {
                    for _ in 0..5 {
                        callback(Progress::BranchFinished { candidates: 1 });
                    }
                });
            }
        });
        callback(Progress::BranchesFinish);

        assert_eq!(handler.bar.position(), 20);
        assert_eq!(handler.bar.message(), "20 found");
    }
}
