use itertools::iproduct;

/// A board coordinate. `x` is the column, `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The Moore neighbourhood, which may include coordinates off the board.
    pub fn neighbors(self) -> impl Iterator<Item = Position> {
        iproduct!(-1..=1, -1..=1)
            .filter(|&(dy, dx)| !(dx == 0 && dy == 0))
            .map(move |(dy, dx)| Position::new(self.x + dx, self.y + dy))
    }
}
