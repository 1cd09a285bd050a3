// Core domain logic - models, sorting, pagination, and the fetch seam
pub mod date;
pub mod error;
pub mod models;
pub mod page;
pub mod sort;
pub mod source;

pub use error::Error;
pub use models::{License, Repository};
pub use page::{Pager, PAGE_SIZES};
pub use sort::{SortKey, SortOrder, SortState};
pub use source::{GithubSource, RepoSource};

/// Result type alias because typing Result<T, Error> everywhere is tedious
pub type Result<T> = std::result::Result<T, Error>;
