// schema.org JSON-LD tags for search engines
// Developed by The Deep Mirror Team (c)2026

use crate::content::{FAQS, SITE_NAME, SITE_URL};
use leptos::prelude::*;
use serde::Serialize;

const SCHEMA_CONTEXT: &str = "https://schema.org";

#[derive(Debug, Serialize)]
struct Document {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(flatten)]
    entity: Entity,
}

#[derive(Debug, Serialize)]
#[serde(tag = "@type")]
enum Entity {
    Organization {
        name: &'static str,
        url: &'static str,
    },
    WebSite {
        name: &'static str,
        url: &'static str,
    },
    #[serde(rename = "FAQPage")]
    FaqPage {
        #[serde(rename = "mainEntity")]
        main_entity: Vec<Question>,
    },
}

#[derive(Debug, Serialize)]
#[serde(tag = "@type")]
struct Question {
    name: &'static str,
    #[serde(rename = "acceptedAnswer")]
    accepted_answer: Answer,
}

#[derive(Debug, Serialize)]
#[serde(tag = "@type")]
struct Answer {
    text: &'static str,
}

fn documents() -> [Document; 3] {
    let faq = FAQS
        .iter()
        .map(|faq| Question {
            name: faq.question,
            accepted_answer: Answer { text: faq.answer },
        })
        .collect();

    [
        Entity::Organization {
            name: SITE_NAME,
            url: SITE_URL,
        },
        Entity::WebSite {
            name: SITE_NAME,
            url: SITE_URL,
        },
        Entity::FaqPage { main_entity: faq },
    ]
    .map(|entity| Document {
        context: SCHEMA_CONTEXT,
        entity,
    })
}

/// Serialize every document, ready to drop inside a `<script>` element.
fn render_documents() -> Result<Vec<String>, serde_json::Error> {
    documents()
        .iter()
        .map(|doc| serde_json::to_string(doc).map(|json| escape_script(&json)))
        .collect()
}

/// Keep the payload from closing its own `<script>` tag.
fn escape_script(json: &str) -> String {
    json.replace("</", "<\\/")
}

#[component]
pub fn StructuredData() -> impl IntoView {
    let payloads = render_documents().unwrap_or_else(|err| {
        tracing::error!(error = %err, "failed to serialize structured data");
        Vec::new()
    });

    payloads
        .into_iter()
        .map(|json| view! { <script type="application/ld+json" inner_html=json></script> })
        .collect_view()
}
