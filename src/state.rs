/// Whether the primary pointer button is held over the board.
///
/// ```text
///             pointer-down over a cell
///   ┌──────┐ ──────────────────────────► ┌──────────┐
///   │ Idle │                             │ Painting │
///   └──────┘ ◄────────────────────────── └──────────┘
///              pointer-up anywhere
/// ```
///
/// A pointer-down while already `Painting` stays in `Painting`; a pointer-up
/// while `Idle` stays `Idle`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum PointerState {
    #[default]
    Idle,
    Painting,
}

impl PointerState {
    pub fn press(&mut self) -> PointerState {
        std::mem::replace(self, PointerState::Painting)
    }

    pub fn release(&mut self) -> PointerState {
        std::mem::replace(self, PointerState::Idle)
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, PointerState::Idle)
    }

    pub fn is_painting(&self) -> bool {
        matches!(self, PointerState::Painting)
    }
}
