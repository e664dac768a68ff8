use std::rc::Rc;

use yew::prelude::*;

use lottawords_core::{
    compute_board_layout, derive_connections, highlight_color, word_color, BoardLayout, LoadState,
    PuzzleData, Side, SolutionChoice, BOARD_PADDING, SIDE_SCAN_ORDER,
};

use crate::config;
use crate::fetch::PuzzleLoader;

const DEFAULT_TILE_COLOR: &str = "#FF5A57";
const TOP_TILE_OFFSET: f32 = 25.0;
const TILE_OFFSET: f32 = 20.0;

#[function_component(PuzzleDisplay)]
pub(crate) fn puzzle_display() -> Html {
    let load_state = use_state(LoadState::start);
    let loader = use_mut_ref(|| None::<PuzzleLoader>);
    let container_ref = use_node_ref();
    let container_size = use_state(|| None::<(f32, f32)>);
    let choice = use_state(SolutionChoice::default);

    {
        let load_state = load_state.clone();
        let loader = loader.clone();
        use_effect_with((), move |_| {
            let handle = PuzzleLoader::new(
                config::puzzle_url(),
                Rc::new(move |state| load_state.set(state)),
            );
            handle.start();
            *loader.borrow_mut() = Some(handle);
            move || {
                if let Some(handle) = loader.borrow_mut().take() {
                    handle.shutdown();
                }
            }
        });
    }

    {
        let container_ref = container_ref.clone();
        let container_size = container_size.clone();
        use_effect_with((*load_state).clone(), move |state| {
            if !matches!(state, LoadState::Ready(_)) {
                return;
            }
            let Some(element) = container_ref.cast::<web_sys::Element>() else {
                return;
            };
            let rect = element.get_bounding_client_rect();
            container_size.set(Some((rect.width() as f32, rect.height() as f32)));
        });
    }

    match &*load_state {
        LoadState::Loading { message, .. } => html! {
            <div class="puzzle-status">{ message.clone() }</div>
        },
        LoadState::Failed { reason } => {
            let onreload = {
                let loader = loader.clone();
                Callback::from(move |_: MouseEvent| {
                    if let Some(handle) = loader.borrow().as_ref() {
                        handle.start();
                    }
                })
            };
            html! {
                <div class="puzzle-status">
                    <p>{ format!("Error: {reason}") }</p>
                    <button class="reload-button" onclick={onreload}>{ "Try again" }</button>
                </div>
            }
        }
        LoadState::Ready(data) => {
            let selected = *choice;
            let onswap = {
                let choice = choice.clone();
                Callback::from(move |_: MouseEvent| choice.set(selected.toggled()))
            };
            let swap_title = match selected {
                SolutionChoice::Nyt => "Show LottaWords Solution",
                SolutionChoice::Lotta => "Show NYT Solution",
            };
            let board = match *container_size {
                Some((width, height)) if width > 0.0 && height > 0.0 => {
                    let layout = compute_board_layout(&data.square, width, height, BOARD_PADDING);
                    html! {
                        <>
                            { render_overlay(data, &layout, selected, width, height) }
                            { render_tiles(data, &layout, selected) }
                        </>
                    }
                }
                _ => Html::default(),
            };
            html! {
                <div class="puzzle-box">
                    <div class="puzzle-title-row">
                        <h2>{ "Today's Puzzle" }</h2>
                        <button class="toggle-button" onclick={onswap} title={swap_title}>
                            { swap_icon() }
                        </button>
                    </div>
                    <div class="board-container" ref={container_ref.clone()}>
                        { board }
                    </div>
                    <div class="solutions-container">
                        { solution_panel("LottaWords Solution", &data.lotta_solution) }
                        { solution_panel("NYT Solution", &data.nyt_solution) }
                    </div>
                </div>
            }
        }
    }
}

fn render_overlay(
    data: &PuzzleData,
    layout: &BoardLayout,
    choice: SolutionChoice,
    width: f32,
    height: f32,
) -> Html {
    let segments = derive_connections(&data.square, layout, data.solution(choice));
    let paths: Html = segments
        .iter()
        .enumerate()
        .map(|(index, segment)| {
            let d = format!(
                "M {} {} L {} {}",
                segment.from.x, segment.from.y, segment.to.x, segment.to.y
            );
            html! {
                <path
                    key={index.to_string()}
                    class="connection-path"
                    d={d}
                    stroke={segment.color}
                    stroke-width="2"
                    stroke-opacity="0.6"
                    fill="none"
                />
            }
        })
        .collect();
    html! {
        <svg class="connections-overlay">
            <rect
                class="board-outline"
                x={BOARD_PADDING.to_string()}
                y={BOARD_PADDING.to_string()}
                width={(width - 2.0 * BOARD_PADDING).to_string()}
                height={(height - 2.0 * BOARD_PADDING).to_string()}
            />
            { paths }
        </svg>
    }
}

fn render_tiles(data: &PuzzleData, layout: &BoardLayout, choice: SolutionChoice) -> Html {
    let selected = data.solution(choice);
    let mut tiles = Vec::new();
    for side in SIDE_SCAN_ORDER {
        let offset = if side == Side::Top {
            TOP_TILE_OFFSET
        } else {
            TILE_OFFSET
        };
        for (index, letter) in data.square.letters(side).enumerate() {
            let Some(slot) = layout.slot(side, index) else {
                continue;
            };
            let position = format!("top: {}px; left: {}px;", slot.y - offset, slot.x - offset);
            let tile_style = match highlight_color(selected, letter) {
                Some(color) => format!("background-color: {color}; box-shadow: 0 0 10px {color};"),
                None => format!("background-color: {DEFAULT_TILE_COLOR};"),
            };
            tiles.push(html! {
                <div
                    key={format!("{side}-{index}")}
                    class="letter-slot"
                    style={position}
                >
                    <div class="letter-tile" style={tile_style}>{ letter.to_string() }</div>
                </div>
            });
        }
    }
    tiles.into_iter().collect()
}

fn solution_panel(title: &str, words: &[String]) -> Html {
    let items: Html = words
        .iter()
        .enumerate()
        .map(|(index, word)| {
            let mut chars = word.chars();
            let lead = chars.next().map(String::from).unwrap_or_default();
            let rest: String = chars.collect();
            html! {
                <li key={index.to_string()}>
                    <span class="word-lead" style={format!("color: {};", word_color(index))}>
                        { lead }
                    </span>
                    { rest }
                </li>
            }
        })
        .collect();
    html! {
        <section class="solution-section">
            <h3>{ title }</h3>
            <ul class="solution-list">{ items }</ul>
        </section>
    }
}

fn swap_icon() -> Html {
    html! {
        <svg
            width="24"
            height="24"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
        >
            <path d="M7 16l-4-4 4-4" />
            <path d="M17 8l4 4-4 4" />
            <path d="M3 12h18" />
        </svg>
    }
}
