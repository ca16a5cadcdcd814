//! Upload screen: drop zone, key entry and result card.
//!
//! Handles file selection from the dialog or a drop, then hands the form to
//! [`UploadWorkflow`].

use leptos::ev::{DragEvent, SubmitEvent};
use leptos::*;
use leptos_meta::Title;
use web_sys::{File, FileList, HtmlInputElement};

use crate::components::{upload_panel, ResultPanel};
use crate::config::{ApiConfig, CREDENTIAL_FIELD, FILE_FIELD};
use crate::services::{FormFields, HttpApi};
use crate::types::{Origin, SubmissionOutcome};
use crate::workflow::{DragPhase, FileIntake, UploadForm, UploadWorkflow};

#[component]
pub fn UploadPage() -> impl IntoView {
    let intake = create_rw_signal(FileIntake::<File>::new());
    let (outcome, set_outcome) = create_signal(SubmissionOutcome::Empty);
    let workflow = UploadWorkflow::new(HttpApi::new(ApiConfig::default()));
    let file_input = create_node_ref::<html::Input>();
    let key_input = create_node_ref::<html::Input>();

    let origin = Origin::current().unwrap_or_else(|e| {
        log::warn!("Could not read page origin, links stay relative: {}", e);
        Origin::default()
    });
    let panel = Signal::derive(move || upload_panel(&outcome.get(), &origin));

    // Clicking anywhere on the zone opens the file dialog
    let open_dialog = move |_| {
        if let Some(input) = file_input.get() {
            input.click();
        }
    };

    let on_file_change = move |ev: ev::Event| {
        let input: HtmlInputElement = event_target(&ev);
        intake.update(|intake| {
            intake.select_via_browser(files_of(input.files()));
        });
    };

    let on_drag = move |phase: DragPhase| {
        move |ev: DragEvent| {
            ev.prevent_default();
            ev.stop_propagation();
            intake.with_untracked(|intake| intake.drag(phase));
        }
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        let Some(dropped) = ev.data_transfer().and_then(|transfer| transfer.files()) else {
            return;
        };
        let mut changed = false;
        intake.update(|intake| {
            changed = intake.select_via_drop(files_of(Some(dropped.clone())));
        });
        // Keep the native input in step so picking the previous file again
        // still fires `change`.
        if changed {
            if let Some(input) = file_input.get() {
                input.set_files(Some(&dropped));
            }
        }
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        ev.stop_propagation();

        let key = key_input.get().map(|input| input.value()).unwrap_or_default();
        let form = UploadForm {
            file: intake.with_untracked(|intake| intake.selected().cloned()),
            fields: FormFields::new().with(CREDENTIAL_FIELD, key),
        };

        let workflow = workflow.clone();
        spawn_local(async move {
            workflow.submit(&set_outcome, form).await;
        });
    };

    view! {
        <Title text="Upload"/>
        <div class="upload-container">
            <div class="card">
                <div class="header-container">
                    <h1>"Upload"</h1>
                </div>
                <form on:submit=on_submit>
                    <div
                        class="file-upload-wrapper"
                        on:click=open_dialog
                        on:drop=on_drop
                        on:dragenter=on_drag(DragPhase::Enter)
                        on:dragover=on_drag(DragPhase::Over)
                        on:dragleave=on_drag(DragPhase::Leave)
                    >
                        <label>
                            {move || intake.with(|intake| intake.label())}
                        </label>
                        <input
                            type="file"
                            name=FILE_FIELD
                            class="file-upload"
                            node_ref=file_input
                            on:change=on_file_change
                        />
                    </div>
                    <div class="form-footer-wrapper">
                        <input
                            type="text"
                            name=CREDENTIAL_FIELD
                            id=CREDENTIAL_FIELD
                            class="key-entry"
                            placeholder="API Key"
                            node_ref=key_input
                        />
                        <button class="submit-button">"Submit"</button>
                    </div>
                </form>
            </div>
            <ResultPanel panel=panel/>
        </div>
    }
}

/// Files of a `FileList` in order. `None` (no list at all) yields nothing.
fn files_of(list: Option<FileList>) -> Vec<File> {
    list.map(|list| (0..list.length()).filter_map(|i| list.get(i)).collect())
        .unwrap_or_default()
}
