pub mod layout;
pub mod loader;
pub mod overlay;
pub mod protocol;
pub mod square;

pub use layout::{compute_board_layout, BoardLayout, Point, BOARD_PADDING};
pub use loader::{
    FetchOutcome, LoadPolicy, LoadState, LoadStep, LOADING_MESSAGE, MAX_ATTEMPTS, RETRY_DELAY_MS,
    TIMEOUT_MESSAGE,
};
pub use overlay::{
    derive_connections, find_letter_slot, highlight_color, resolve_letter, word_color,
    ConnectionSegment, WORD_COLORS,
};
pub use protocol::{classify_response, PuzzleResponse, SquareResponse};
pub use square::{PuzzleData, PuzzleSquare, Side, SolutionChoice, SquareError, SIDE_SCAN_ORDER};
