use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::errors::GenerationError;

/// Replace the file at `path` with `data`.
///
/// The bytes go to a `<name>.tmp` sibling first, which is then renamed over
/// `path`. A failed write removes the sibling, so readers only ever see the
/// previous file or the complete new one.
pub fn write_bytes_atomic(path: &Path, data: &[u8]) -> Result<(), GenerationError> {
    let dir = parent_dir(path);
    if let Some(dir) = dir {
        fs::create_dir_all(dir)?;
    }

    let staging = staging_path(path)?;
    if let Err(err) = stage_and_swap(&staging, path, data) {
        discard_staging(&staging);
        return Err(err.into());
    }

    if let Some(dir) = dir {
        sync_dir(dir)?;
    }
    Ok(())
}

fn stage_and_swap(staging: &Path, path: &Path, data: &[u8]) -> io::Result<()> {
    let mut file = File::create(staging)?;
    file.write_all(data)?;
    file.sync_all()?;
    drop(file);
    fs::rename(staging, path)
}

fn discard_staging(staging: &Path) {
    match fs::remove_file(staging) {
        Ok(()) => {}
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => debug!(path = %staging.display(), error = %err, "staging file left behind"),
    }
}

fn parent_dir(path: &Path) -> Option<&Path> {
    path.parent().filter(|dir| !dir.as_os_str().is_empty())
}

fn staging_path(path: &Path) -> Result<PathBuf, GenerationError> {
    let name = path
        .file_name()
        .ok_or_else(|| GenerationError::InvalidPath(path.display().to_string()))?;
    let mut staged = name.to_os_string();
    staged.push(".tmp");
    Ok(path.with_file_name(staged))
}

#[cfg(unix)]
fn sync_dir(dir: &Path) -> io::Result<()> {
    File::open(dir)?.sync_all()
}

#[cfg(not(unix))]
fn sync_dir(_dir: &Path) -> io::Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(label: &str) -> PathBuf {
        let dir = std::env::temp_dir()
            .join(format!("dtogen_atomic_{label}_{}", uuid::Uuid::new_v4()));
        fs::create_dir_all(&dir).expect("create scratch dir");
        dir
    }

    #[test]
    fn replaces_existing_file_without_leftovers() {
        let dir = scratch_dir("replace");
        let path = dir.join("nested/UserDTO.model.ts");

        write_bytes_atomic(&path, b"first").expect("first write");
        write_bytes_atomic(&path, b"second").expect("second write");

        assert_eq!(fs::read(&path).expect("read file"), b"second");
        assert!(!dir.join("nested/UserDTO.model.ts.tmp").exists());
    }

    #[test]
    fn failed_rename_removes_staging_file() {
        let dir = scratch_dir("failed_rename");
        let path = dir.join("UserDTO.model.ts");
        fs::create_dir_all(&path).expect("occupy target with a directory");

        let result = write_bytes_atomic(&path, b"export class UserDTO {}\n");

        assert!(matches!(result, Err(GenerationError::Io(_))));
        assert!(path.is_dir());
        assert!(!dir.join("UserDTO.model.ts.tmp").exists());
    }

    #[test]
    fn rejects_path_without_file_name() {
        let result = write_bytes_atomic(Path::new("/"), b"");
        assert!(matches!(result, Err(GenerationError::InvalidPath(_))));
    }
}
