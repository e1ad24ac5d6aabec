use crate::error::fs::{
    CreateDirAllError, EnsureDirExistsError, ReadFileError, RemoveFileError, WriteFileError,
};
use std::path::Path;

pub fn create_dir_all(path: &Path) -> Result<(), CreateDirAllError> {
    std::fs::create_dir_all(path).map_err(|source| CreateDirAllError {
        path: path.to_path_buf(),
        source,
    })
}

pub fn ensure_dir_exists(path: &Path) -> Result<(), EnsureDirExistsError> {
    if !path.exists() {
        Ok(create_dir_all(path)?)
    } else if !path.is_dir() {
        Err(EnsureDirExistsError::NotADirectory(path.to_path_buf()))
    } else {
        Ok(())
    }
}

pub fn read(path: &Path) -> Result<Vec<u8>, ReadFileError> {
    std::fs::read(path).map_err(|source| ReadFileError {
        path: path.to_path_buf(),
        source,
    })
}

/// Removes a file. A file that is already gone is not an error.
pub fn remove_file_if_exists(path: &Path) -> Result<(), RemoveFileError> {
    match std::fs::remove_file(path) {
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
        result => result.map_err(|source| RemoveFileError {
            path: path.to_path_buf(),
            source,
        }),
    }
}

pub fn write<P: AsRef<Path>, C: AsRef<[u8]>>(path: P, contents: C) -> Result<(), WriteFileError> {
    std::fs::write(path.as_ref(), contents).map_err(|source| WriteFileError {
        path: path.as_ref().to_path_buf(),
        source,
    })
}
