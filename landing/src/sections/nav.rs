use crate::content::{NAV_LINKS, SITE_NAME};
use leptos::prelude::*;

#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <header class="site-header">
            <nav class="nav">
                <div class="nav-inner">
                    <a href="/" class="nav-brand">
                        <span class="nav-title">{SITE_NAME}</span>
                    </a>
                    <div class="nav-links">
                        {NAV_LINKS
                            .iter()
                            .map(|&(href, label)| view! { <a href=href class="nav-link">{label}</a> })
                            .collect_view()}
                    </div>
                </div>
            </nav>
        </header>
    }
}
