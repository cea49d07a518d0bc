pub mod column;
pub mod query;
pub mod tag;
pub mod user;
pub mod util;
pub mod value;

pub use column::{Column, ColumnType, SharedColumns};
pub use tag::{SharedTags, Tag};
pub use user::{User, UserInfo};
