use crate::square::{PuzzleSquare, Side, SIDE_SCAN_ORDER};

pub const BOARD_PADDING: f32 = 45.0;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BoardLayout {
    top: Vec<Point>,
    right: Vec<Point>,
    bottom: Vec<Point>,
    left: Vec<Point>,
}

impl BoardLayout {
    pub fn slot(&self, side: Side, index: usize) -> Option<Point> {
        self.side_slots(side).get(index).copied()
    }

    pub fn side_slots(&self, side: Side) -> &[Point] {
        match side {
            Side::Top => &self.top,
            Side::Right => &self.right,
            Side::Bottom => &self.bottom,
            Side::Left => &self.left,
        }
    }
}

fn spread(extent: f32, padding: f32, count: usize, index: usize) -> f32 {
    let step = extent / count as f32;
    padding + step * index as f32 + step / 2.0
}

pub fn compute_board_layout(
    square: &PuzzleSquare,
    width: f32,
    height: f32,
    padding: f32,
) -> BoardLayout {
    let usable_w = width - 2.0 * padding;
    let usable_h = height - 2.0 * padding;
    let mut layout = BoardLayout::default();
    for side in SIDE_SCAN_ORDER {
        let count = square.side_len(side);
        let slots = (0..count)
            .map(|index| match side {
                Side::Top => Point {
                    x: spread(usable_w, padding, count, index),
                    y: padding,
                },
                Side::Bottom => Point {
                    x: spread(usable_w, padding, count, index),
                    y: usable_h + padding,
                },
                Side::Right => Point {
                    x: usable_w + padding,
                    y: spread(usable_h, padding, count, index),
                },
                Side::Left => Point {
                    x: padding,
                    y: spread(usable_h, padding, count, index),
                },
            })
            .collect();
        match side {
            Side::Top => layout.top = slots,
            Side::Right => layout.right = slots,
            Side::Bottom => layout.bottom = slots,
            Side::Left => layout.left = slots,
        }
    }
    layout
}
