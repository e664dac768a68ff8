use crate::layout::{BoardLayout, Point};
use crate::square::{PuzzleSquare, Side, SIDE_SCAN_ORDER};

pub const WORD_COLORS: [&str; 5] = ["#faa6a4", "#64C9CF", "#9D65C9", "#5CDB95", "#FFD166"];

pub fn word_color(word_index: usize) -> &'static str {
    WORD_COLORS[word_index % WORD_COLORS.len()]
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConnectionSegment {
    pub from: Point,
    pub to: Point,
    pub color: &'static str,
}

pub fn find_letter_slot(square: &PuzzleSquare, letter: char) -> Option<(Side, usize)> {
    for side in SIDE_SCAN_ORDER {
        if let Some(index) = square
            .letters(side)
            .position(|ch| ch.eq_ignore_ascii_case(&letter))
        {
            return Some((side, index));
        }
    }
    None
}

pub fn resolve_letter(square: &PuzzleSquare, layout: &BoardLayout, letter: char) -> Option<Point> {
    let (side, index) = find_letter_slot(square, letter)?;
    layout.slot(side, index)
}

pub fn derive_connections(
    square: &PuzzleSquare,
    layout: &BoardLayout,
    words: &[String],
) -> Vec<ConnectionSegment> {
    let mut segments = Vec::new();
    for (word_index, word) in words.iter().enumerate() {
        let color = word_color(word_index);
        let letters: Vec<char> = word.chars().collect();
        for pair in letters.windows(2) {
            let from = resolve_letter(square, layout, pair[0]);
            let to = resolve_letter(square, layout, pair[1]);
            let (Some(from), Some(to)) = (from, to) else {
                continue;
            };
            segments.push(ConnectionSegment { from, to, color });
        }
    }
    segments
}

pub fn highlight_color(words: &[String], letter: char) -> Option<&'static str> {
    words
        .iter()
        .position(|word| {
            word.chars()
                .next()
                .is_some_and(|first| first.eq_ignore_ascii_case(&letter))
        })
        .map(word_color)
}
