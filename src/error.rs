//! Errors surfaced by component construction and message rendering

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The component's configuration was rejected
    #[error(transparent)]
    Config(#[from] frontkit_config::ConfigError),

    /// A message could not be rendered
    #[error(transparent)]
    I18n(#[from] frontkit_i18n::I18nError),
}

pub type Result<T> = std::result::Result<T, Error>;
