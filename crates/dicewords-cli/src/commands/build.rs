use crate::cli::BuildArgs;
use crate::config::{self, DiceSource};
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use dicewords::{
    core::io::{dice as dice_file, lp::LpFile, traits::ModelWriter},
    core::lexicon::dictionary::AnagramDictionary,
    core::models::{dice::DieSet, samples},
    core::scoring::points_for_length,
    engine::progress::ProgressReporter,
    workflows::{self, build::ModelBuild},
};
use std::fmt::Write as _;
use tracing::{info, warn};

pub fn run(args: BuildArgs) -> Result<()> {
    info!("Merging configuration from defaults, file and CLI arguments...");
    let app = config::build_config(&args)?;

    let dice = load_dice(&app.dice)?;
    info!(
        dice = dice.len(),
        faces = dice.total_faces(),
        "Die set loaded."
    );

    info!("Loading lexicon from {:?}", &app.lexicon_path);
    let lexicon =
        AnagramDictionary::load(&app.lexicon_path).map_err(|e| CliError::FileParsing {
            path: app.lexicon_path.clone(),
            source: e.into(),
        })?;

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    println!("Enumerating words over {} dice...", dice.len());
    let result = workflows::build::run(&dice, &lexicon, &app.core_config, &reporter)?;

    if result.variables().is_empty() {
        warn!("No candidate words were found; the written model has no variables.");
    }
    if app.list_candidates {
        print!("{}", render_candidates(&result));
    }

    info!("Writing LP model to {:?}", &app.output_path);
    LpFile::write_to_path(&result.program, &app.output_path).map_err(|e| {
        CliError::FileParsing {
            path: app.output_path.clone(),
            source: e.into(),
        }
    })?;

    println!(
        "✓ Model with {} variables and {} capacity constraints ({} sense) written to: {}",
        result.program.variables.len(),
        result.program.constraints.len(),
        result.program.objective.sense,
        app.output_path.display()
    );
    Ok(())
}

fn load_dice(source: &DiceSource) -> Result<DieSet> {
    match source {
        DiceSource::File(path) => {
            info!("Reading dice from {:?}", path);
            dice_file::read_from_path(path).map_err(|e| CliError::FileParsing {
                path: path.clone(),
                source: e.into(),
            })
        }
        DiceSource::Sample(name) => {
            info!("Using sample die set '{}'.", name);
            let letters = samples::by_name(name)
                .ok_or_else(|| CliError::Argument(format!("Unknown sample die set '{}'", name)))?;
            DieSet::from_letters(letters.iter().copied())
                .map_err(|e| CliError::Core(e.into()))
        }
    }
}

fn render_candidates(result: &ModelBuild) -> String {
    let mut out = String::new();
    for candidate in result.candidates() {
        let dice: Vec<String> = candidate.dice().iter().map(ToString::to_string).collect();
        let _ = writeln!(
            out,
            "{:<16} dice [{}]  {} pt",
            candidate.text(),
            dice.join(", "),
            points_for_length(candidate.len())
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{DiceSourceArgs, ObjectiveSenseFlags};
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    fn args(dir: &Path, dice: DiceSourceArgs) -> BuildArgs {
        BuildArgs {
            dice,
            lexicon: dir.join("words.txt"),
            output: dir.join("model.lp"),
            config: None,
            max_word_length: None,
            time_budget: None,
            objective_sense: ObjectiveSenseFlags {
                maximize: false,
                minimize: false,
            },
            face_capacity: None,
            list: false,
            set_values: vec![],
        }
    }

    fn sample(name: &'static str) -> DiceSourceArgs {
        DiceSourceArgs {
            dice: None,
            sample: Some(name),
        }
    }

    #[test]
    fn sample_dice_build_writes_an_lp_model() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("words.txt"), "cab\nbag\nzebra\n").unwrap();

        run(args(dir.path(), sample("small"))).unwrap();

        let lp = fs::read_to_string(dir.path().join("model.lp")).unwrap();
        assert!(lp.starts_with("\\ dicewords model: 4 variables, 12 capacity constraints\n"));
        assert!(lp.contains("x_cab_0.2.1"));
        assert!(lp.contains("x_bag_1.3.2"));
        assert!(!lp.contains("zebra"));
        assert!(lp.ends_with("End\n"));
    }

    #[test]
    fn dice_can_come_from_a_csv_file() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("words.txt"), "cab\n").unwrap();
        let dice_path = dir.path().join("dice.csv");
        fs::write(&dice_path, "c\nb\na\n").unwrap();
        let source = DiceSourceArgs {
            dice: Some(dice_path),
            sample: None,
        };

        run(args(dir.path(), source)).unwrap();

        let lp = fs::read_to_string(dir.path().join("model.lp")).unwrap();
        assert!(lp.contains(" x_cab_0.2.1\n"));
    }

    #[test]
    fn invalid_dice_file_is_reported_with_its_path() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("words.txt"), "cab\n").unwrap();
        let dice_path = dir.path().join("dice.csv");
        fs::write(&dice_path, "a,b\n7,c\n").unwrap();
        let source = DiceSourceArgs {
            dice: Some(dice_path),
            sample: None,
        };

        let err = run(args(dir.path(), source)).unwrap_err();
        assert!(matches!(err, CliError::FileParsing { ref path, .. } if path.ends_with("dice.csv")));
    }

    #[test]
    fn missing_lexicon_is_a_file_error() {
        let dir = tempdir().unwrap();
        let err = run(args(dir.path(), sample("small"))).unwrap_err();
        assert!(matches!(err, CliError::FileParsing { .. }));
    }

    #[test]
    fn candidate_listing_shows_dice_and_points() {
        let dice = DieSet::from_letters(samples::SMALL.iter().copied()).unwrap();
        let lexicon = AnagramDictionary::from_words(["cab"]);
        let result = workflows::build::run(
            &dice,
            &lexicon,
            &Default::default(),
            &ProgressReporter::new(),
        )
        .unwrap();

        let listing = render_candidates(&result);
        let lines: Vec<&str> = listing.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("cab"));
        assert!(lines[0].ends_with("dice [0, 2, 1]  1 pt"));
    }

    #[test]
    fn unknown_sample_name_is_an_argument_error() {
        let err = load_dice(&DiceSource::Sample("gigantic")).unwrap_err();
        assert!(matches!(err, CliError::Argument(_)));
    }
}
