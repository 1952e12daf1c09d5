use leptos::*;
use crate::state::SessionState;

#[component]
pub fn Header(session: RwSignal<SessionState>) -> impl IntoView {
    // Credential is dropped here; the shell swaps back to the login view
    let on_logout = move |_| {
        log::info!("👋 Logging out");
        session.update(SessionState::logout);
    };

    view! {
        <nav class="dashboard-nav">
            <h1>"Sentiment Analysis Dashboard"</h1>
            <button class="logout-button" on:click=on_logout>
                "Logout"
                <span class="button-effect"></span>
            </button>
        </nav>
    }
}
