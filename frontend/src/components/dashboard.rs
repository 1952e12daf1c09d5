//! Authenticated view: upload, error, results.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::*;

use crate::components::{Header, ResultsSection, ScrollChrome, UploadSection};
use crate::config::REVEAL_SELECTOR;
use crate::presenter::present;
use crate::reveal::ScrollReveal;
use crate::state::{SessionState, UploadState};

#[component]
pub fn Dashboard(session: RwSignal<SessionState>) -> impl IntoView {
    // Dropped with this view, so a late upload result lands nowhere.
    let upload = create_rw_signal(UploadState::default());
    let credential = Signal::derive(move || session.with(|s| s.credential().cloned()));
    let presentation = create_memo(move |_| upload.with(|u| present(u.results())));
    let error = move || upload.with(|u| u.error().map(str::to_string));
    let revision = create_memo(move |_| upload.with(UploadState::revision));

    // Rescan revealable elements whenever an upload resolves, so the error
    // message is picked up as well as the results
    let reveal = Rc::new(RefCell::new(None::<ScrollReveal>));
    let active = Rc::clone(&reveal);
    create_effect(move |_| {
        let _ = revision.get();
        let slot = Rc::clone(&active);
        request_animation_frame(move || {
            let mut slot = slot.borrow_mut();
            // Release the previous observer before starting a new one
            slot.take();
            *slot = ScrollReveal::start(REVEAL_SELECTOR);
        });
    });
    on_cleanup(move || {
        reveal.borrow_mut().take();
    });

    view! {
        <div class="dashboard-wrapper">
            <ScrollChrome/>
            <Header session=session/>

            <div class="dashboard-content">
                <UploadSection upload=upload credential=credential/>

                {move || error().map(|message| view! {
                    <div class="error-message scroll-animate fade-up">{message}</div>
                })}

                <ResultsSection presentation=presentation/>
            </div>
        </div>
    }
}
