use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while building a model or configuring a generator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("a prefix needs at least one word")]
    EmptyPrefix,

    #[error("prefix length must be at least 1")]
    ZeroPrefixLength,

    #[error("line width must be at least 1")]
    ZeroLineWidth,

    #[error(
        "source has {words} words, but prefix length {prefix_len} needs at least {}",
        .prefix_len + 1
    )]
    SourceTooShort { words: usize, prefix_len: usize },

    #[error("expected a prefix of {expected} words, got {found}")]
    PrefixLength { expected: usize, found: usize },

    #[error("the successor table has not been fed any words")]
    EmptyTable,
}
