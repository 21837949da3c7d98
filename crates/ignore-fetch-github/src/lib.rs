pub mod error;
pub mod getter;
pub mod tree;

pub use error::{GetError, GetErrorKind, ListError, TreeError};
pub use getter::{
    DEFAULT_BRANCH, DEFAULT_OWNER, DEFAULT_REPOSITORY, DEFAULT_SUFFIX, Getter, GetterConfig,
    default_max_requests,
};
