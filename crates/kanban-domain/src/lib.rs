pub mod board;
pub mod card;
pub mod column;
pub mod editable;
pub mod sprint;
pub mod sprint_log;
pub mod tag;
pub mod task_list_view;

pub use board::{Board, BoardId, SortField, SortOrder};
pub use card::{Card, CardId, CardPriority, CardStatus};
pub use column::{Column, ColumnId};
pub use editable::{BoardSettingsDto, CardMetadataDto};
pub use sprint::{Sprint, SprintId, SprintStatus};
pub use sprint_log::SprintLog;
pub use tag::{Tag, TagId};
pub use task_list_view::TaskListView;
