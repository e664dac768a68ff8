use yew::prelude::*;

mod config;
mod fetch;
mod view;

use crate::view::PuzzleDisplay;

#[function_component(App)]
fn app() -> Html {
    html! {
        <div class="app-shell">
            <Navbar />
            <main class="app-main">
                <PuzzleDisplay />
            </main>
            <Footer />
        </div>
    }
}

#[function_component(Navbar)]
fn navbar() -> Html {
    html! {
        <nav class="navbar">
            <div class="navbar-logo">{ "LottaWords" }</div>
            <div class="navbar-links">
                <a
                    href="https://www.nytimes.com/puzzles/letter-boxed"
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    { "NYT Letter Boxed" }
                </a>
                <a
                    href="https://github.com/bauRoccella/LottaWords"
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    { "GitHub Repo" }
                </a>
                <a
                    href="https://www.linkedin.com/in/bautistaroccella/"
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    { "LinkedIn" }
                </a>
            </div>
        </nav>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    let year = js_sys::Date::new_0().get_full_year();
    html! {
        <footer class="footer">
            <p>
                { "Created by " }
                <a
                    href="https://github.com/bauRoccella"
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    { "Bautista Roccella" }
                </a>
                { format!(" \u{a9} {year}") }
            </p>
        </footer>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
