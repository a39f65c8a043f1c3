//! The interactive username/password wordlist flow.
//!
//! All terminal interaction goes through an [`InputProvider`] and a writer,
//! so the whole session can run against scripted answers.

use crate::core::passwords::generate_passwords;
use crate::core::usernames::generate_usernames;
use crate::domain::ports::{InputProvider, WordlistStore};
use crate::utils::error::Result;
use std::io::Write;

pub const USERNAMES_FILE: &str = "usernames.txt";
pub const PASSWORDS_FILE: &str = "passwords.txt";

/// Passwords listed on screen before the rest is summarised.
const PASSWORD_PREVIEW: usize = 20;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionReport {
    pub usernames: Vec<String>,
    pub passwords: Vec<String>,
    pub usernames_path: Option<String>,
    pub passwords_path: Option<String>,
    pub appended: bool,
}

pub struct WordlistSession<I, S, W>
where
    I: InputProvider,
    S: WordlistStore,
    W: Write,
{
    input: I,
    storage: S,
    out: W,
}

/// Only the first character counts; leading blanks make the answer a no.
fn is_yes(answer: &str) -> bool {
    answer.to_lowercase().starts_with('y')
}

fn split_list(line: &str) -> Vec<String> {
    line.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

impl<I, S, W> WordlistSession<I, S, W>
where
    I: InputProvider,
    S: WordlistStore,
    W: Write,
{
    pub fn new(input: I, storage: S, out: W) -> Self {
        Self {
            input,
            storage,
            out,
        }
    }

    /// Writes the prompt and reads one answer; exhausted input reads as empty.
    fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.out, "{}", prompt)?;
        self.out.flush()?;
        let line = self.input.next_line()?.unwrap_or_default();
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    pub fn run(&mut self) -> Result<SessionReport> {
        let mut report = SessionReport::default();
        writeln!(self.out, "=== Username & Password List Generator ===")?;
        writeln!(self.out)?;

        let answer = self.ask("Generate username list? (y/n): ")?;
        if is_yes(&answer) {
            self.username_step(&mut report)?;
            writeln!(self.out)?;
            writeln!(self.out, "{}", "=".repeat(50))?;
        }

        self.password_step(&mut report)?;
        Ok(report)
    }

    fn username_step(&mut self, report: &mut SessionReport) -> Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "1. USERNAME GENERATION")?;
        writeln!(self.out, "Enter full names (comma-separated):")?;
        let names = split_list(&self.ask("> ")?);
        if names.is_empty() {
            tracing::info!("No names entered, skipping username list");
            return Ok(());
        }

        let usernames: Vec<String> = generate_usernames(&names).into_iter().collect();
        writeln!(self.out)?;
        writeln!(self.out, "Generated {} usernames:", usernames.len())?;
        for username in &usernames {
            writeln!(self.out, "  {}", username)?;
        }

        let path = self.storage.write_lines(USERNAMES_FILE, &usernames)?;
        writeln!(self.out)?;
        writeln!(self.out, "Saved to {}", USERNAMES_FILE)?;

        report.usernames = usernames;
        report.usernames_path = Some(path);
        Ok(())
    }

    fn password_step(&mut self, report: &mut SessionReport) -> Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "2. PASSWORD GENERATION")?;
        writeln!(self.out, "Enter keywords (comma-separated):")?;
        let keywords = split_list(&self.ask("> ")?);
        if keywords.is_empty() {
            tracing::info!("No keywords entered, skipping password list");
            return Ok(());
        }

        let passwords: Vec<String> = generate_passwords(&keywords).into_iter().collect();
        writeln!(self.out)?;
        writeln!(self.out, "Generated {} passwords:", passwords.len())?;
        for password in passwords.iter().take(PASSWORD_PREVIEW) {
            writeln!(self.out, "  {}", password)?;
        }
        if passwords.len() > PASSWORD_PREVIEW {
            writeln!(
                self.out,
                "  ... and {} more",
                passwords.len() - PASSWORD_PREVIEW
            )?;
        }

        writeln!(self.out)?;
        let append = is_yes(&self.ask("Append to existing wordlist? (y/n): ")?);
        if append {
            let target = self.ask("Enter file path: ")?.trim().to_string();
            match self.storage.append_lines(&target, &passwords) {
                Ok(path) => {
                    writeln!(
                        self.out,
                        "Appended {} passwords to {}",
                        passwords.len(),
                        target
                    )?;
                    report.passwords_path = Some(path);
                    report.appended = true;
                }
                Err(e) => {
                    tracing::warn!("Append to '{}' failed: {}", target, e);
                    writeln!(self.out, "Error appending to file: {}", e)?;
                    writeln!(self.out, "Creating new file instead...")?;
                    report.passwords_path = Some(self.save_passwords(&passwords)?);
                }
            }
        } else {
            report.passwords_path = Some(self.save_passwords(&passwords)?);
        }

        report.passwords = passwords;
        Ok(())
    }

    fn save_passwords(&mut self, passwords: &[String]) -> Result<String> {
        let path = self.storage.write_lines(PASSWORDS_FILE, passwords)?;
        writeln!(self.out, "Saved to {}", PASSWORDS_FILE)?;
        Ok(path)
    }
}
