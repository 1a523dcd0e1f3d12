use thiserror::Error;

#[derive(Error, Debug)]
pub enum WikiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Wikipedia API error ({status}): {body}")]
    Api { status: u16, body: String },

    #[error("Wikipedia API returned an error: {code}: {info}")]
    Query { code: String, info: String },

    #[error("Unexpected response: {0}")]
    Decode(String),
}
