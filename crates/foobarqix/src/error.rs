#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid rule '{0}': expected KEY=LABEL with a positive integer key")]
    InvalidRule(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Mapping(#[from] foobarqix_core::MappingError),
}
