use serde::Deserialize;

use crate::loader::FetchOutcome;
use crate::square::{PuzzleData, PuzzleSquare};

pub const STATUS_LOADING: &str = "loading";

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct PuzzleResponse {
    pub square: Option<SquareResponse>,
    pub nyt_solution: Option<Vec<String>>,
    pub lotta_solution: Option<Vec<String>>,
    pub error: Option<String>,
    pub status: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct SquareResponse {
    pub top: String,
    pub right: String,
    pub bottom: String,
    pub left: String,
}

pub fn classify_response(response: PuzzleResponse) -> FetchOutcome {
    if response.error.is_some() {
        return FetchOutcome::NotReady;
    }
    if response
        .status
        .as_deref()
        .is_some_and(|status| status.eq_ignore_ascii_case(STATUS_LOADING))
    {
        return FetchOutcome::NotReady;
    }
    let Some(square) = response.square else {
        return FetchOutcome::NotReady;
    };
    let (Some(nyt_solution), Some(lotta_solution)) =
        (response.nyt_solution, response.lotta_solution)
    else {
        return FetchOutcome::NotReady;
    };
    let Ok(square) = PuzzleSquare::new(square.top, square.right, square.bottom, square.left) else {
        return FetchOutcome::NotReady;
    };
    FetchOutcome::Valid(PuzzleData {
        square,
        nyt_solution,
        lotta_solution,
    })
}
