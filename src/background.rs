use base64::{Engine, engine::general_purpose::STANDARD};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The image shown behind the calendar
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) enum Background {
    #[default]
    Default,
    Custom {
        name: String,
        /// `data:` URI holding the whole image
        data_uri: String,
        size: u64,
    },
}

impl Background {
    /// Read an image file into a `data:` URI
    pub(crate) fn load(path: &Path) -> Result<Background, BackgroundError> {
        let mime = mime_type(path).ok_or_else(|| BackgroundError::Unsupported(path.to_owned()))?;
        let bytes = fs::read(path).map_err(|source| BackgroundError::Read {
            path: path.to_owned(),
            source,
        })?;
        let name = path.file_name().map_or_else(
            || path.display().to_string(),
            |s| s.to_string_lossy().into_owned(),
        );
        let size = u64::try_from(bytes.len()).unwrap_or(u64::MAX);
        Ok(Background::Custom {
            name,
            data_uri: format!("data:{mime};base64,{}", STANDARD.encode(&bytes)),
            size,
        })
    }

    pub(crate) fn data_uri(&self) -> Option<&str> {
        match self {
            Background::Default => None,
            Background::Custom { data_uri, .. } => Some(data_uri),
        }
    }
}

impl fmt::Display for Background {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Background::Default => write!(f, "기본"),
            Background::Custom { name, size, .. } => {
                write!(f, "{name} ({})", HumanSize(*size))
            }
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct HumanSize(u64);

impl fmt::Display for HumanSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const KIB: u64 = 1024;
        const MIB: u64 = KIB * 1024;
        match self.0 {
            n if n >= MIB => write!(f, "{}.{} MiB", n / MIB, (n % MIB) * 10 / MIB),
            n if n >= KIB => write!(f, "{}.{} KiB", n / KIB, (n % KIB) * 10 / KIB),
            n => write!(f, "{n} B"),
        }
    }
}

fn mime_type(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "bmp" => Some("image/bmp"),
        "svg" => Some("image/svg+xml"),
        _ => None,
    }
}

#[derive(Debug, Error)]
pub(crate) enum BackgroundError {
    #[error("{} is not a supported image file", .0.display())]
    Unsupported(PathBuf),
    #[error("failed to read {}", path.display())]
    Read { path: PathBuf, source: io::Error },
}
