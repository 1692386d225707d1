use thiserror::Error;

#[derive(Error, Debug)]
pub enum RofiWebError {
    #[error("Selection not found in list '{list}': {name}")]
    SelectionNotFound { list: String, name: String },

    #[error("Malformed selection payload: {0}")]
    Payload(#[source] serde_json::Error),

    #[error("Malformed selection payload: {0} is not valid UTF-8")]
    PayloadNotUnicode(&'static str),

    #[error("Failed to launch {program}: {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, RofiWebError>;
