use thiserror::Error;

#[derive(Debug, Error)]
pub enum OemError {
    #[error("upstream request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("malformed OEM document: {0}")]
    Xml(#[from] quick_xml::DeError),
}
