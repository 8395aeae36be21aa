use crate::content::FAQS;
use leptos::prelude::*;

/// Visible FAQ. The same entries feed the `FAQPage` structured data.
#[component]
pub fn Faq() -> impl IntoView {
    view! {
        <section aria-label="Frequently Asked Questions" id="faq" class="faq">
            <div class="container container-narrow">
                <h2 class="section-title">"Frequently Asked Questions"</h2>
                <div class="faq-list">
                    {FAQS
                        .iter()
                        .map(|faq| view! {
                            <div class="faq-item">
                                <h3 class="faq-question">{faq.question}</h3>
                                <p class="faq-answer">{faq.answer}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
