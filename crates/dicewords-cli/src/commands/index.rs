use crate::cli::IndexArgs;
use crate::error::{CliError, Result};
use dicewords::core::lexicon::dictionary::AnagramDictionary;
use tracing::{info, warn};

pub fn run(args: IndexArgs) -> Result<()> {
    info!("Reading word list from {:?}", &args.corpus);
    let dictionary =
        AnagramDictionary::load_word_list(&args.corpus).map_err(|e| CliError::FileParsing {
            path: args.corpus.clone(),
            source: e.into(),
        })?;

    if dictionary.is_empty() {
        warn!("The word list contained no usable words; writing an empty dictionary.");
    }

    info!("Writing anagram dictionary to {:?}", &args.output);
    dictionary
        .save_json(&args.output)
        .map_err(|e| CliError::FileParsing {
            path: args.output.clone(),
            source: e.into(),
        })?;

    println!(
        "✓ Indexed {} words under {} anagram keys: {}",
        dictionary.word_count(),
        dictionary.len(),
        args.output.display()
    );
    Ok(())
}
