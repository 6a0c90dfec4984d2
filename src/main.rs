mod achievements;
mod app;
mod config;
mod contact;
mod content;
mod konami;
mod magnetic;
mod metrics;
mod navbar;
mod particles;
mod scroll_spy;
mod sections;
mod theme;
mod voice;

fn main() {
    dioxus::launch(app::App);
}
