pub type CloudResult<T> = Result<T, CloudError>;

#[derive(thiserror::Error, Debug)]
pub enum CloudError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("corpus error: {0}")]
    Corpus(String),

    #[error("mask error: {0}")]
    Mask(String),

    #[error("font error: {0}")]
    Font(String),

    #[error("render error: {0}")]
    Render(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CloudError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn corpus(msg: impl Into<String>) -> Self {
        Self::Corpus(msg.into())
    }

    pub fn mask(msg: impl Into<String>) -> Self {
        Self::Mask(msg.into())
    }

    pub fn font(msg: impl Into<String>) -> Self {
        Self::Font(msg.into())
    }

    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}
