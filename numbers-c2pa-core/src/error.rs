use thiserror::Error;

#[derive(Error, Debug)]
pub enum NumbersC2paError {
    /// The tool ran, but the asset carries no C2PA manifest.
    #[error("No claim found in asset")]
    NoClaimFound,

    /// Any other non-zero exit of the tool. `stderr` is kept verbatim.
    #[error("c2patool failed: {stderr}")]
    Tool { stderr: String },

    #[error("Failed to start c2patool ({program}): {source}")]
    ToolSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported MIME type: {0}")]
    UnsupportedMimeType(String),

    #[error("Invalid asset hash: {0}")]
    InvalidAssetHash(String),

    #[error("Thumbnail fetch failed: {0}")]
    ThumbnailFetch(String),

    #[error("Invalid signing credential: {0}")]
    Credential(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("OpenSSL error: {0}")]
    OpenSsl(#[from] openssl::error::ErrorStack),

    #[cfg(feature = "thumbnail")]
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),
}

impl NumbersC2paError {
    /// Raw stderr of a failed tool run, if this error came from one.
    pub fn stderr(&self) -> Option<&str> {
        match self {
            Self::Tool { stderr } => Some(stderr),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, NumbersC2paError>;
