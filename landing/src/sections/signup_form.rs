// Email capture form
// Developed by The Deep Mirror Team (c)2026

use crate::client::FetchSignupClient;
use deep_mirror_signup::{FormView, SignupAttempt, SignupClient, SignupConfig, settle};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// The early-access form in the hero.
///
/// Each rendered instance owns its own [`SignupAttempt`]; nothing is shared
/// between instances or kept past the page visit.
#[component]
pub fn SignupForm(#[prop(optional)] config: Option<SignupConfig>) -> impl IntoView {
    let attempt = RwSignal::new(SignupAttempt::new());
    let form = Memo::new(move |_| attempt.with(SignupAttempt::view));
    let client = StoredValue::new(FetchSignupClient::new(config.unwrap_or_default()));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        // state flips to loading here, before anything goes on the wire
        let Some(request) = attempt.try_update(SignupAttempt::begin).flatten() else {
            return;
        };
        let client = client.get_value();
        spawn_local(async move {
            let response = client.signup(&request).await;
            attempt.update(|a| a.resolve(settle(response)));
        });
    };

    view! {
        <div class="signup">
            <Show
                when=move || !form.with(|f| f.show_confirmation)
                fallback=|| view! {
                    <div class="signup-confirmation">
                        <p>{FormView::CONFIRMATION}</p>
                    </div>
                }
            >
                <form class="signup-form" on:submit=on_submit>
                    <input
                        type="email"
                        required
                        class="signup-input"
                        placeholder="Enter your email"
                        prop:value=move || form.with(|f| f.input_value.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            attempt.update(|a| a.set_email(value));
                        }
                    />
                    <button
                        type="submit"
                        class="btn btn-primary"
                        disabled=move || form.with(|f| f.submit_disabled)
                    >
                        {move || form.with(|f| f.submit_label)}
                    </button>
                </form>
            </Show>
            {move || {
                form.with(|f| f.error_text.clone())
                    .map(|msg| view! { <p class="signup-error" role="alert">{msg}</p> })
            }}
        </div>
    }
}
