use crate::domain::ports::WordlistStore;
use crate::utils::error::{ForgeError, Result};
use std::fs::{self, OpenOptions};
use std::io::{BufWriter, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

/// Files on local disk. Relative paths resolve against `base_path`,
/// absolute paths are used unchanged.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn resolve(&self, path: &str) -> PathBuf {
        Path::new(&self.base_path).join(path)
    }
}

fn write_all_lines<W: Write>(writer: &mut W, lines: &[String]) -> std::io::Result<()> {
    for line in lines {
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
    }
    writer.flush()
}

/// True when the file has content that does not end with a newline.
fn needs_leading_newline(file: &mut fs::File) -> std::io::Result<bool> {
    let len = file.metadata()?.len();
    if len == 0 {
        return Ok(false);
    }
    file.seek(SeekFrom::End(-1))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)?;
    Ok(last[0] != b'\n')
}

impl WordlistStore for LocalStorage {
    fn write_lines(&self, path: &str, lines: &[String]) -> Result<String> {
        let full_path = self.resolve(path);
        let shown_path = full_path.display().to_string();

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).map_err(|e| ForgeError::output(&shown_path, e))?;
        }

        let file = fs::File::create(&full_path).map_err(|e| ForgeError::output(&shown_path, e))?;
        let mut writer = BufWriter::new(file);
        write_all_lines(&mut writer, lines).map_err(|e| ForgeError::output(&shown_path, e))?;

        tracing::info!("Wrote {} lines to {}", lines.len(), shown_path);
        Ok(shown_path)
    }

    fn append_lines(&self, path: &str, lines: &[String]) -> Result<String> {
        let full_path = self.resolve(path);
        let shown_path = full_path.display().to_string();

        let mut file = OpenOptions::new()
            .read(true)
            .append(true)
            .create(true)
            .open(&full_path)
            .map_err(|e| ForgeError::output(&shown_path, e))?;

        let separate = needs_leading_newline(&mut file).map_err(|e| ForgeError::output(&shown_path, e))?;
        let mut writer = BufWriter::new(file);
        if separate {
            writer
                .write_all(b"\n")
                .map_err(|e| ForgeError::output(&shown_path, e))?;
        }
        write_all_lines(&mut writer, lines).map_err(|e| ForgeError::output(&shown_path, e))?;

        tracing::info!("Appended {} lines to {}", lines.len(), shown_path);
        Ok(shown_path)
    }
}
