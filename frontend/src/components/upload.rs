//! CSV upload component with drag & drop support.
//!
//! The picker only offers `.csv` files; drops are forwarded as-is and the
//! service decides what it accepts. Only the first dropped file is used.

use leptos::*;
use web_sys::{File, HtmlInputElement};

use crate::config::CSV_ACCEPT;
use crate::services::{upload_file, ServiceClient};
use crate::state::UploadState;
use crate::types::{Credential, UploadRequest};

#[component]
pub fn UploadSection(
    upload: RwSignal<UploadState>,
    /// Current credential; read once when an upload is issued.
    credential: Signal<Option<Credential>>,
) -> impl IntoView {
    let start_upload = move |file: File| {
        let request = UploadRequest {
            file_name: file.name(),
            file,
            credential: credential.get_untracked(),
        };
        spawn_local(async move {
            let client = ServiceClient::from_config();
            upload_file(&client, &upload, request).await;
        });
    };

    // Picker selection
    let on_file_change = move |ev: ev::Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            start_upload(file);
        }
        // Allow picking the same file again
        input.set_value("");
    };

    let on_drag = move |ev: ev::DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        let active = upload.with_untracked(UploadState::drag_active);
        match ev.type_().as_str() {
            "dragenter" | "dragover" if !active => upload.update(UploadState::begin_drag),
            "dragleave" if active => upload.update(UploadState::end_drag),
            _ => {}
        }
    };

    let on_drop = move |ev: ev::DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        upload.update(UploadState::end_drag);
        let first = ev
            .data_transfer()
            .and_then(|transfer| transfer.files())
            .and_then(|files| files.get(0));
        if let Some(file) = first {
            start_upload(file);
        }
    };

    let zone_class = move || {
        if upload.with(UploadState::drag_active) {
            "drop-zone drag-active"
        } else {
            "drop-zone"
        }
    };

    view! {
        <div
            class="upload-section scroll-animate fade-up"
            on:dragenter=on_drag
            on:dragleave=on_drag
            on:dragover=on_drag
            on:drop=on_drop
        >
            <input
                type="file"
                accept=CSV_ACCEPT
                class="file-input"
                id="file-input"
                on:change=on_file_change
            />
            <label for="file-input" class=zone_class>
                <div class="upload-icon"></div>
                <p>"Drag & Drop your CSV file here or click to browse"</p>
                <Show when=move || upload.with(UploadState::is_uploading)>
                    <div class="loader"></div>
                    <p class="upload-hint">
                        {move || upload.with(|u| format!("Analyzing {}...", u.file_name().unwrap_or("file")))}
                    </p>
                </Show>
            </label>
        </div>
    }
}
