pub mod card_commands;
pub mod board_commands;
pub mod column_commands;
pub mod sprint_commands;

pub use card_commands::*;
pub use board_commands::*;
pub use column_commands::*;
pub use sprint_commands::*;
