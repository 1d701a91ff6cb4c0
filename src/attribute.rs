use std::{
    fs::File,
    io::{self, Read},
    path::{Path, PathBuf},
};

#[derive(thiserror::Error, Debug)]
pub enum AttributeError {
    #[error("unable to open file {}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error while reading the file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Reads at most `limit` bytes of `battery_path/file_name`.
///
/// The separator is only inserted when `battery_path` doesn't already end
/// with one. Hitting end of file before `limit` is not an error, sysfs
/// attributes are usually shorter than the buffer we give them.
pub fn read_attribute(
    battery_path: &Path,
    file_name: &str,
    limit: u64,
) -> Result<String, AttributeError> {
    let path = battery_path.join(file_name);

    let file = match File::open(&path) {
        Ok(file) => file,
        Err(source) => return Err(AttributeError::Open { path, source }),
    };

    let mut contents = Vec::new();
    if let Err(source) = file.take(limit).read_to_end(&mut contents) {
        return Err(AttributeError::Read { path, source });
    }

    tracing::debug!(path = %path.display(), bytes = contents.len(), "read attribute");

    Ok(String::from_utf8_lossy(&contents).into_owned())
}
