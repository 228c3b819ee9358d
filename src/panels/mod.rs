mod board_panel;
mod control_panel;

pub use board_panel::board_panel;
pub use control_panel::control_panel;
