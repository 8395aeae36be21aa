use crate::content::{SITE_NAME, VALUE_PROPS};
use leptos::prelude::*;

#[component]
pub fn Features() -> impl IntoView {
    let title = format!("Why {}?", SITE_NAME);
    view! {
        <section aria-label="Features" id="features" class="features">
            <div class="container">
                <h2 class="section-title">{title}</h2>
                <div class="features-grid">
                    {VALUE_PROPS
                        .iter()
                        .map(|prop| view! {
                            <ValueCard title=prop.title description=prop.description />
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ValueCard(title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <section aria-label=title class="feature-card">
            <h3 class="feature-title">{title}</h3>
            <p class="feature-description">{description}</p>
        </section>
    }
}
