use crate::utils::error::Result;

/// Where generated wordlists end up.
pub trait WordlistStore {
    /// Replaces the file content with one line per entry.
    fn write_lines(&self, path: &str, lines: &[String]) -> Result<String>;

    /// Adds the entries after the existing content, creating the file if needed.
    fn append_lines(&self, path: &str, lines: &[String]) -> Result<String>;
}

/// Supplies answers to interactive prompts, one line at a time.
///
/// `Ok(None)` means the input is exhausted.
pub trait InputProvider {
    fn next_line(&mut self) -> Result<Option<String>>;
}

impl<F> InputProvider for F
where
    F: FnMut() -> Result<Option<String>>,
{
    fn next_line(&mut self) -> Result<Option<String>> {
        self()
    }
}
