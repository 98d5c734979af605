// Drag session state: pointer-down on the child until pointer-up anywhere.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct DragSession {
    pub active: bool,
    pub last_x: f64,
    pub last_y: f64,
}

impl DragSession {
    pub fn begin(&mut self, x: f64, y: f64) {
        self.active = true;
        self.last_x = x;
        self.last_y = y;
    }

    /// Delta since the previous pointer position, recording the new one.
    /// `None` while idle.
    pub fn advance(&mut self, x: f64, y: f64) -> Option<(f64, f64)> {
        if !self.active {
            return None;
        }
        let dx = x - self.last_x;
        let dy = y - self.last_y;
        self.last_x = x;
        self.last_y = y;
        Some((dx, dy))
    }

    pub fn end(&mut self) {
        self.active = false;
    }
}
