//! Registration screen.

use leptos::ev::SubmitEvent;
use leptos::*;
use leptos_meta::Title;

use crate::components::{registration_panel, ResultPanel};
use crate::config::ApiConfig;
use crate::services::HttpApi;
use crate::types::RegistrationOutcome;
use crate::workflow::{RegistrationForm, RegistrationWorkflow};

#[component]
pub fn RegisterPage() -> impl IntoView {
    let (outcome, set_outcome) = create_signal(RegistrationOutcome::Empty);
    let workflow = RegistrationWorkflow::new(HttpApi::new(ApiConfig::default()));
    let username_input = create_node_ref::<html::Input>();
    let invite_input = create_node_ref::<html::Input>();

    let panel = Signal::derive(move || registration_panel(&outcome.get()));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let value_of = |input: NodeRef<html::Input>| {
            input.get().map(|input| input.value()).unwrap_or_default()
        };
        let form = RegistrationForm {
            username: value_of(username_input),
            invite_key: value_of(invite_input),
        };

        let workflow = workflow.clone();
        spawn_local(async move {
            workflow.submit(&set_outcome, form).await;
        });
    };

    view! {
        <Title text="Register"/>
        <div class="register-container">
            <div class="card">
                <h1>"Register"</h1>
                <form on:submit=on_submit>
                    <input
                        type="text"
                        placeholder="Username"
                        id="username"
                        class="text-input"
                        node_ref=username_input
                    />
                    <input
                        type="text"
                        placeholder="Invite Key"
                        id="key"
                        class="text-input"
                        node_ref=invite_input
                    />
                    <button type="submit" class="submit-button">
                        "Submit"
                    </button>
                </form>
            </div>
            <ResultPanel panel=panel/>
        </div>
    }
}
