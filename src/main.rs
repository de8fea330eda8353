mod components;
mod formations;
mod geometry;
mod heatmap;
mod model;
mod util;

use components::app::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
