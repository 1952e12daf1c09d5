//! Scroll progress bar and scroll-to-top button.

use leptos::*;
use web_sys::{ScrollBehavior, ScrollToOptions};

use crate::reveal::{scroll_progress, shows_scroll_top};

/// `(scroll offset, document height, viewport height)`.
fn page_geometry() -> Option<(f64, f64, f64)> {
    let window = web_sys::window()?;
    let offset = window.scroll_y().ok()?;
    let viewport = window.inner_height().ok()?.as_f64()?;
    let height = window.document()?.document_element()?.scroll_height() as f64;
    Some((offset, height, viewport))
}

#[component]
pub fn ScrollChrome() -> impl IntoView {
    let (progress, set_progress) = create_signal(0.0_f64);
    let (show_top, set_show_top) = create_signal(false);

    let listener = window_event_listener(ev::scroll, move |_| {
        if let Some((offset, height, viewport)) = page_geometry() {
            set_progress.set(scroll_progress(offset, height, viewport));
            set_show_top.set(shows_scroll_top(offset));
        }
    });
    on_cleanup(move || listener.remove());

    let scroll_to_top = move |_| {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        gloo_utils::window().scroll_to_with_scroll_to_options(&options);
    };

    view! {
        <div class="scroll-progress" style=move || format!("transform: scaleX({})", progress.get())></div>
        <div
            class=move || if show_top.get() { "scroll-top visible" } else { "scroll-top" }
            on:click=scroll_to_top
        >
            "↑"
        </div>
    }
}
