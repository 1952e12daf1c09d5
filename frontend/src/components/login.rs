//! Login / registration form.

use leptos::*;

use crate::services::{submit_credentials, ServiceClient};
use crate::state::SessionState;

#[component]
pub fn LoginView(session: RwSignal<SessionState>) -> impl IntoView {
    let mode = move || session.with(SessionState::mode);
    let in_flight = move || session.with(SessionState::in_flight);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        spawn_local(async move {
            let client = ServiceClient::from_config();
            submit_credentials(&client, &session).await;
        });
    };

    view! {
        <div class="login-wrapper">
            <div class="login-container">
                <div class="login-visual">
                    <h1>"AI Sentiment Analysis"</h1>
                </div>

                <div class="login-form-container">
                    <div class="login-header">
                        <h2>{move || mode().heading()}</h2>
                        <p>{move || mode().subtitle()}</p>
                    </div>

                    <Show when=move || session.with(|s| s.error().is_some())>
                        <div class="error-message">
                            {move || session.with(|s| s.error().unwrap_or_default().to_string())}
                        </div>
                    </Show>

                    <Show when=move || session.with(|s| s.notice().is_some())>
                        <div class="notice-message">
                            {move || session.with(|s| s.notice().unwrap_or_default().to_string())}
                        </div>
                    </Show>

                    <form on:submit=on_submit>
                        <div class="form-group">
                            <input
                                type="text"
                                id="username"
                                required
                                prop:value=move || session.with(|s| s.username().to_string())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    session.update(|s| s.set_username(value));
                                }
                            />
                            <label for="username">"Username"</label>
                        </div>

                        <div class="form-group">
                            <input
                                type="password"
                                id="password"
                                required
                                prop:value=move || session.with(|s| s.password().to_string())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    session.update(|s| s.set_password(value));
                                }
                            />
                            <label for="password">"Password"</label>
                        </div>

                        <button type="submit" class="login-button" disabled=in_flight>
                            {move || if in_flight() { "Please wait..." } else { mode().submit_label() }}
                        </button>
                    </form>

                    <div class="login-footer">
                        <p>
                            {move || mode().switch_prompt().0}
                            " "
                            <span class="mode-switch" on:click=move |_| session.update(SessionState::toggle_mode)>
                                {move || mode().switch_prompt().1}
                            </span>
                        </p>
                    </div>
                </div>
            </div>
        </div>
    }
}
