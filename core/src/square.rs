use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

pub const SIDE_SCAN_ORDER: [Side; 4] = [Side::Top, Side::Right, Side::Bottom, Side::Left];

impl Side {
    pub fn name(self) -> &'static str {
        match self {
            Side::Top => "top",
            Side::Right => "right",
            Side::Bottom => "bottom",
            Side::Left => "left",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PuzzleSquare {
    top: String,
    right: String,
    bottom: String,
    left: String,
}

impl PuzzleSquare {
    pub fn new(
        top: impl Into<String>,
        right: impl Into<String>,
        bottom: impl Into<String>,
        left: impl Into<String>,
    ) -> Result<Self, SquareError> {
        let square = Self {
            top: top.into(),
            right: right.into(),
            bottom: bottom.into(),
            left: left.into(),
        };
        for side in SIDE_SCAN_ORDER {
            if square.side(side).is_empty() {
                return Err(SquareError::EmptySide { side });
            }
        }
        Ok(square)
    }

    pub fn side(&self, side: Side) -> &str {
        match side {
            Side::Top => &self.top,
            Side::Right => &self.right,
            Side::Bottom => &self.bottom,
            Side::Left => &self.left,
        }
    }

    pub fn side_len(&self, side: Side) -> usize {
        self.side(side).chars().count()
    }

    pub fn letters(&self, side: Side) -> impl Iterator<Item = char> + '_ {
        self.side(side).chars()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SquareError {
    EmptySide { side: Side },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::EmptySide { side } => {
                write!(f, "{side} side of the square has no letters")
            }
        }
    }
}

impl std::error::Error for SquareError {}

#[derive(Clone, Debug, PartialEq)]
pub struct PuzzleData {
    pub square: PuzzleSquare,
    pub nyt_solution: Vec<String>,
    pub lotta_solution: Vec<String>,
}

impl PuzzleData {
    pub fn solution(&self, choice: SolutionChoice) -> &[String] {
        match choice {
            SolutionChoice::Lotta => &self.lotta_solution,
            SolutionChoice::Nyt => &self.nyt_solution,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SolutionChoice {
    #[default]
    Lotta,
    Nyt,
}

impl SolutionChoice {
    pub fn toggled(self) -> Self {
        match self {
            SolutionChoice::Lotta => SolutionChoice::Nyt,
            SolutionChoice::Nyt => SolutionChoice::Lotta,
        }
    }
}
