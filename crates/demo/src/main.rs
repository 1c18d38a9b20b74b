use dioxus::prelude::*;

mod showcase;

use showcase::Showcase;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(any(feature = "web", feature = "desktop", feature = "mobile"))]
    dioxus::launch(App);

    // Without a platform feature there is nothing to attach to, so render
    // one frame to stdout instead. Useful for eyeballing the markup.
    #[cfg(not(any(feature = "web", feature = "desktop", feature = "mobile")))]
    {
        let mut dom = VirtualDom::new(App);
        dom.rebuild_in_place();
        println!("{}", dioxus_ssr::render(&dom));
    }
}

#[component]
fn App() -> Element {
    use_hook(|| tracing::info!("shimmer showcase started"));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Showcase {}
    }
}
