mod app;
mod language;
mod persisted;
mod scroll_pager;
mod squares;
mod sw_register;

use gloo::console;

use crate::app::App;

fn main() {
    console::log!("thanks for visiting");
    sw_register::register_on_load();
    yew::Renderer::<App>::new().render();
}
