use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, EtlError>;

/// Stage failures. Each one aborts the current run.
#[derive(Debug, Error)]
pub enum EtlError {
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Connection error for {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Error during extraction: {0}")]
    Extract(String),

    #[error("Error saving data to {}: {source}", path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: PersistCause,
    },
}

#[derive(Debug, Error)]
pub enum PersistCause {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}

impl EtlError {
    pub fn persist(path: impl Into<PathBuf>, source: impl Into<PersistCause>) -> Self {
        EtlError::Persist {
            path: path.into(),
            source: source.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder_error() -> reqwest::Error {
        reqwest::blocking::Client::new()
            .get("not a url")
            .build()
            .unwrap_err()
    }

    #[test]
    fn client_error_has_own_message() {
        let msg = EtlError::Client(builder_error()).to_string();
        assert!(msg.starts_with("Failed to build HTTP client: "), "{msg}");
    }

    #[test]
    fn fetch_error_names_url() {
        let err = EtlError::Fetch {
            url: "https://cse.sds.bracu.ac.bd/faculty_list".into(),
            source: builder_error(),
        };
        assert!(err
            .to_string()
            .starts_with("Connection error for https://cse.sds.bracu.ac.bd/faculty_list: "));
    }
}
