use thiserror::Error;

pub type Result<T> = std::result::Result<T, CadenceError>;

#[derive(Error, Debug)]
pub enum CadenceError {
    #[error("Repository unavailable: {0}")]
    RepositoryUnavailable(String),
    #[error("Insufficient history: {rows} aggregated update(s), at least 2 are needed for a prediction")]
    InsufficientHistory { rows: usize },
    #[error("Unknown region: {0}")]
    UnknownRegion(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Cache error: {0}")]
    Cache(#[from] rusqlite::Error),
    #[error("Cache schema error: {0}")]
    CacheSchema(String),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Object find error: {0}")]
    ObjectFind(#[from] Box<gix::object::find::existing::Error>),
    #[error("Commit error: {0}")]
    Commit(#[from] Box<gix::object::commit::Error>),
    #[error("Reference find error: {0}")]
    RefFind(#[from] Box<gix::reference::find::existing::Error>),
    #[error("Head peel error: {0}")]
    HeadPeel(#[from] Box<gix::head::peel::to_commit::Error>),
    #[error("Object find with conversion error: {0}")]
    ObjectFindConv(#[from] Box<gix::object::find::existing::with_conversion::Error>),
    #[error("Object decode error: {0}")]
    ObjectDecode(#[from] Box<gix::objs::decode::Error>),
}

// Manual From implementations for unboxed to boxed conversions
impl From<gix::object::find::existing::Error> for CadenceError {
    fn from(err: gix::object::find::existing::Error) -> Self {
        CadenceError::ObjectFind(Box::new(err))
    }
}

impl From<gix::object::commit::Error> for CadenceError {
    fn from(err: gix::object::commit::Error) -> Self {
        CadenceError::Commit(Box::new(err))
    }
}

impl From<gix::reference::find::existing::Error> for CadenceError {
    fn from(err: gix::reference::find::existing::Error) -> Self {
        CadenceError::RefFind(Box::new(err))
    }
}

impl From<gix::head::peel::to_commit::Error> for CadenceError {
    fn from(err: gix::head::peel::to_commit::Error) -> Self {
        CadenceError::HeadPeel(Box::new(err))
    }
}

impl From<gix::object::find::existing::with_conversion::Error> for CadenceError {
    fn from(err: gix::object::find::existing::with_conversion::Error) -> Self {
        CadenceError::ObjectFindConv(Box::new(err))
    }
}

impl From<gix::objs::decode::Error> for CadenceError {
    fn from(err: gix::objs::decode::Error) -> Self {
        CadenceError::ObjectDecode(Box::new(err))
    }
}
