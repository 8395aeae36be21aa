// The Deep Mirror landing page (Leptos 0.8, client-side rendered)
// Developed by The Deep Mirror Team (c)2026

mod client;
mod content;
mod sections;

use leptos::prelude::*;
use sections::*;

fn main() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    wasm_logger::init(wasm_logger::Config::new(level));
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    view! {
        <StructuredData />
        <Nav />
        <main>
            <Hero />
            <Features />
            <Faq />
        </main>
        <Footer />
    }
}
