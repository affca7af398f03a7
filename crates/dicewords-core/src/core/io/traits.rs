use crate::core::models::program::IntegerProgram;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Defines the interface for exporting a built model to a solver input format.
///
/// Implementors handle format-specific serialization; the path-based helper is shared.
pub trait ModelWriter {
    /// The error type for write operations.
    type Error: Error + From<io::Error>;

    /// Writes the program to a writer.
    ///
    /// # Errors
    ///
    /// Returns an error if the program cannot be expressed in the format or the writer fails.
    fn write_to(program: &IntegerProgram, writer: &mut impl Write) -> Result<(), Self::Error>;

    /// Writes the program to a file, creating or truncating it.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or writing fails.
    fn write_to_path(program: &IntegerProgram, path: impl AsRef<Path>) -> Result<(), Self::Error> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_to(program, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}
