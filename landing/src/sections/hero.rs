use super::SignupForm;
use crate::content::{HERO_DESCRIPTION, HERO_TITLE};
use leptos::prelude::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section aria-label="Hero" class="hero">
            <div class="container hero-content">
                <h1 class="hero-title">{HERO_TITLE}</h1>
                <p class="hero-description">{HERO_DESCRIPTION}</p>
                <SignupForm />
            </div>
        </section>
    }
}
