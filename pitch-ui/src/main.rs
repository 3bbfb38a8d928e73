mod app;
mod bridge;
mod console;
mod pages;
mod route;

fn main() {
    console::init();
    leptos::mount_to_body(app::App);
}
