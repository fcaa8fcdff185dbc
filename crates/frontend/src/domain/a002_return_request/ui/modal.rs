use crate::shared::modal::Modal;
use leptos::prelude::*;
use thaw::*;

/// Dialog collecting the reason (and, for anonymous buyers, the purchase email)
#[component]
pub fn ReturnRequestModal(
    /// Show the email field (no session token)
    anonymous: bool,
    reason: RwSignal<String>,
    email: RwSignal<String>,
    /// Validation or backend error to show inline
    #[prop(into)]
    error: Signal<Option<String>>,
    #[prop(into)]
    submitting: Signal<bool>,
    on_submit: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let handle_cancel = move |_| {
        reason.set(String::new());
        email.set(String::new());
        on_close.run(());
    };

    view! {
        <Modal title="Reason for Return".to_string() on_close=on_close>
            <div class="return-request">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                {anonymous.then(|| view! {
                    <div class="form__group">
                        <Label>"Email"</Label>
                        <Input
                            value=email
                            input_type=InputType::Email
                            placeholder="Enter the email address used for your order"
                            disabled=Signal::derive(move || submitting.get())
                        />
                    </div>
                })}

                <div class="form__group">
                    <Label>"Reason"</Label>
                    <Textarea
                        value=reason
                        placeholder="Write your reason here..."
                        attr:rows=4
                        disabled=Signal::derive(move || submitting.get())
                    />
                </div>

                <div class="form__actions">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=handle_cancel
                        disabled=Signal::derive(move || submitting.get())
                    >
                        "Cancel"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| on_submit.run(())
                        disabled=Signal::derive(move || submitting.get())
                    >
                        {move || if submitting.get() { "Sending..." } else { "Submit" }}
                    </Button>
                </div>
            </div>
        </Modal>
    }
}
