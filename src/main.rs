use dioxus::prelude::*;

mod components;
mod config;
mod error;
mod gallery;
mod player;
mod portfolio;
mod utils;

use components::AppView;

const APP_CSS: Asset = asset!("/assets/styling/app.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Meta { name: "theme-color", content: "#a38449" }
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1" }
        document::Title { "Showroom" }

        document::Stylesheet { href: APP_CSS }

        Router::<AppView> {}
    }
}
