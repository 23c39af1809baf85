use std::path::PathBuf;

/// Errors raised while converting an annotation set.
#[derive(thiserror::Error, Debug)]
pub enum ConvertError {
    #[error("Input directory does not exist: {}", .0.display())]
    InputDirNotFound(PathBuf),

    #[error("IO Error ({}): {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("XML Parse Error ({}): {source}", path.display())]
    Xml {
        path: PathBuf,
        #[source]
        source: quick_xml::DeError,
    },

    #[error("Invalid image size {width}x{height} in {}", path.display())]
    ZeroDimension {
        path: PathBuf,
        width: u32,
        height: u32,
    },

    #[error("Glob Pattern Error: {0}")]
    Glob(#[from] glob::PatternError),
}

impl ConvertError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
