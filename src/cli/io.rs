use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use crate::cli::global::GlobalArgs;

/// Reads a file, or stdin when no file is given, enforcing `--max-size`.
pub fn read_input(
    file: Option<&Path>,
    global: &GlobalArgs,
) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    let Some(file_path) = file else {
        let mut buffer = Vec::new();
        io::stdin().read_to_end(&mut buffer)?;

        // Check stdin size after reading
        if global.max_size > 0 && buffer.len() > global.max_size {
            return Err(format!(
                "Input size ({} bytes) exceeds maximum ({} bytes). Use a file with --force for large inputs.",
                buffer.len(),
                global.max_size
            )
            .into());
        }
        return Ok(buffer);
    };

    if global.max_size > 0 {
        let file_size = clamp_len(fs::metadata(file_path)?.len());

        if file_size > global.max_size {
            if !global.force {
                return Err(format!(
                    "File size ({} bytes) exceeds limit ({} bytes). Use --force to process anyway.",
                    file_size, global.max_size
                )
                .into());
            }
            tracing::warn!(
                file_size,
                limit = global.max_size,
                "processing file above --max-size"
            );
        }
    }

    Ok(fs::read(file_path)?)
}

/// File lengths that do not fit `usize` count as over any limit.
fn clamp_len(len: u64) -> usize {
    usize::try_from(len).unwrap_or(usize::MAX)
}

/// Writes to a file, or stdout when no file is given.
pub fn write_output(output: Option<&Path>, bytes: &[u8]) -> Result<(), Box<dyn std::error::Error>> {
    match output {
        Some(path) => fs::write(path, bytes)?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(bytes)?;
            stdout.flush()?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_len_never_shrinks() {
        assert_eq!(clamp_len(0), 0);
        assert_eq!(clamp_len(4096), 4096);
        assert_eq!(clamp_len(u64::MAX), usize::MAX);
    }
}
