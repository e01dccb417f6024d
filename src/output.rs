use std::fmt::Display;
use std::fmt::Formatter;
use std::path::Path;
use std::path::PathBuf;

use tracing::debug;
use tracing::info;
use tracing::instrument;

use crate::error::Error;
use crate::error::Result;
use crate::generator::Batch;

pub const STANDARD_FILE: &str = "gym_influencer_sfw.txt";
pub const EXTENDED_FILE: &str = "gym_influencer_nsfw.txt";
pub const COMBINED_FILE: &str = "gym_influencer_all.txt";

/// Write the standard, extended and combined sets into `dir`, creating it if needed.
///
/// Lines are joined by `\n` without a trailing newline. The files are independent, so a
/// failure part way through leaves the earlier ones in place.
#[instrument(skip(batch))]
pub fn write(dir: &Path, batch: &Batch) -> Result<Summary> {
    std::fs::create_dir_all(dir).map_err(|source| Error::CreateDir {
        path: dir.to_owned(),
        source,
    })?;

    let standard = dir.join(STANDARD_FILE);
    let extended = dir.join(EXTENDED_FILE);
    let combined = dir.join(COMBINED_FILE);
    write_lines(&standard, batch.standard.iter().map(String::as_str))?;
    write_lines(&extended, batch.extended.iter().map(String::as_str))?;
    write_lines(&combined, batch.combined())?;
    info!("wrote output files");

    Ok(Summary {
        standard: batch.standard.len(),
        extended: batch.extended.len(),
        files: [standard, extended, combined],
    })
}

fn write_lines<'a>(path: &Path, lines: impl Iterator<Item = &'a str>) -> Result<()> {
    let contents = lines.collect::<Vec<_>>().join("\n");
    debug!(path = %path.display(), bytes = contents.len(), "writing");
    std::fs::write(path, contents).map_err(|source| Error::WriteFile {
        path: path.to_owned(),
        source,
    })
}

#[derive(Debug)]
pub struct Summary {
    standard: usize,
    extended: usize,
    files: [PathBuf; 3],
}

impl Display for Summary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Generated {} standard prompts", self.standard)?;
        writeln!(f, "Generated {} extended prompts", self.extended)?;
        writeln!(f, "Total: {} prompts", self.standard + self.extended)?;
        writeln!(f)?;
        writeln!(f, "Files created:")?;
        for file in &self.files {
            writeln!(f, "- {}", file.display())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch() -> Batch {
        Batch {
            standard: vec!["a".into(), "b".into()],
            extended: vec!["c".into()],
        }
    }

    #[test]
    fn writes_three_files() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("nested").join("prompts");
        write(&out, &batch()).unwrap();

        let read = |name: &str| std::fs::read_to_string(out.join(name)).unwrap();
        assert_eq!(read(STANDARD_FILE), "a\nb");
        assert_eq!(read(EXTENDED_FILE), "c");
        assert_eq!(read(COMBINED_FILE), "a\nb\nc");
    }

    #[test]
    fn empty_batch_gives_empty_files() {
        let dir = tempfile::tempdir().unwrap();
        let summary = write(dir.path(), &Batch::default()).unwrap();
        for name in [STANDARD_FILE, EXTENDED_FILE, COMBINED_FILE] {
            let contents = std::fs::read_to_string(dir.path().join(name)).unwrap();
            assert!(contents.is_empty(), "{name} should be empty");
        }
        assert!(summary.to_string().contains("Total: 0 prompts"));
    }

    #[test]
    fn write_error_is_debuggable() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, "").unwrap();
        let result = write(&blocker, &batch());
        assert!(format!("{result:?}").contains("CreateDir"));
        let summary = write(dir.path(), &batch()).unwrap();
        assert!(format!("{summary:?}").contains("standard: 2"));
    }

    #[test]
    fn summary_lists_counts_and_files() {
        let dir = tempfile::tempdir().unwrap();
        let summary = write(dir.path(), &batch()).unwrap().to_string();
        assert!(summary.contains("Generated 2 standard prompts"));
        assert!(summary.contains("Generated 1 extended prompts"));
        assert!(summary.contains("Total: 3 prompts"));
        for name in [STANDARD_FILE, EXTENDED_FILE, COMBINED_FILE] {
            assert!(summary.contains(name));
        }
    }

    #[test]
    fn directory_blocked_by_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("prompts");
        std::fs::write(&blocker, "").unwrap();
        let error = write(&blocker, &batch()).unwrap_err();
        match error {
            Error::CreateDir { path, .. } => assert_eq!(path, blocker),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn file_blocked_by_directory_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join(EXTENDED_FILE)).unwrap();
        let error = write(dir.path(), &batch()).unwrap_err();
        assert!(!error.is_configuration());
        match error {
            Error::WriteFile { path, .. } => assert_eq!(path, dir.path().join(EXTENDED_FILE)),
            other => panic!("unexpected error: {other}"),
        }
        // written before the failure
        assert!(dir.path().join(STANDARD_FILE).is_file());
    }
}
