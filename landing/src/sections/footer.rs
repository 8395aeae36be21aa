use crate::content::{COPYRIGHT_YEAR, NAV_LINKS, SITE_NAME};
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let copyright = format!("© {} {}. All rights reserved.", COPYRIGHT_YEAR, SITE_NAME);
    view! {
        <footer class="footer">
            <div class="container footer-inner">
                <p class="footer-copyright">{copyright}</p>
                <div class="footer-links">
                    <a href="/" class="footer-link">"Home"</a>
                    {NAV_LINKS
                        .iter()
                        .map(|&(href, label)| view! { <a href=href class="footer-link">{label}</a> })
                        .collect_view()}
                </div>
            </div>
        </footer>
    }
}
