use egui::Pos2;

/// An in-progress stroke. Exists only between pointer-down and pointer-up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeSession {
    last_point: Pos2,
}

impl StrokeSession {
    pub fn new(start: Pos2) -> Self {
        Self { last_point: start }
    }

    pub fn last_point(&self) -> Pos2 {
        self.last_point
    }

    /// Moves the session to `point`, returning where the segment starts
    pub fn advance(&mut self, point: Pos2) -> Pos2 {
        std::mem::replace(&mut self.last_point, point)
    }
}
