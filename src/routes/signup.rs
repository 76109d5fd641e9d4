//! Signup screen. The confirmation field is re-validated whenever either
//! password changes and is never sent to the API. A successful signup signs
//! the user in and lands on the home screen.

use crate::{
    components::{
        AlreadySignedInPanel, AppShell, Button, ButtonVariant, Card, Spinner, TextField,
    },
    features::auth::{
        client::HttpTransport,
        feedback::FormFeedback,
        flow,
        forms::{FormField, SignupForm},
        state::use_auth,
    },
    routes::paths,
};
use leptos::{ev::SubmitEvent, prelude::*};
use leptos_router::{components::A, hooks::use_navigate};

const FIELDS: [FormField; 4] = [
    FormField::Name,
    FormField::Email,
    FormField::Password,
    FormField::ConfirmPassword,
];

/// Renders the signup form, or the signed-in panel for returning users.
#[component]
pub fn SignUpPage() -> impl IntoView {
    let auth = use_auth();
    let signed_in_on_arrival = RwSignal::new(auth.is_authenticated.get_untracked());

    view! {
        <AppShell>
            <Card title="Sign Up" description="Create a new account to access the Tweeter app.">
                <Show
                    when=move || signed_in_on_arrival.get()
                    fallback=|| view! { <SignupCard /> }
                >
                    <AlreadySignedInPanel visible=signed_in_on_arrival />
                </Show>
            </Card>
        </AppShell>
    }
}

#[component]
fn SignupCard() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm_password, set_confirm_password) = signal(String::new());
    let read_form = move || {
        SignupForm::new(
            name.get(),
            email.get(),
            password.get(),
            confirm_password.get(),
        )
    };
    let feedback = FormFeedback::new(Memo::new(move |_| read_form().validate()));

    let signup_action = Action::new_local(move |form: &SignupForm| {
        let form = form.clone();
        let store = auth.store();
        async move { flow::submit_signup(&HttpTransport, &store, &form).await }
    });

    Effect::new(move |_| {
        if let Some(result) = signup_action.value().get() {
            match result {
                Ok(next) => navigate(next, Default::default()),
                Err(errors) => feedback.show_submitted(errors),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        event.stop_propagation();
        if !feedback.begin_submit(&FIELDS) {
            return;
        }
        signup_action.dispatch(untrack(read_form));
    };

    view! {
        <form class="space-y-4" on:submit=on_submit novalidate>
            <TextField
                field=FormField::Name
                label="Name"
                placeholder="John Doe"
                autocomplete="name"
                error=feedback.error(FormField::Name)
                on_input=move |value: String| {
                    set_name.set(value);
                    feedback.edited(FormField::Name);
                }
            />
            <TextField
                field=FormField::Email
                label="Email"
                input_type="email"
                placeholder="m@example.com"
                autocomplete="email"
                error=feedback.error(FormField::Email)
                on_input=move |value: String| {
                    set_email.set(value);
                    feedback.edited(FormField::Email);
                }
            />
            <TextField
                field=FormField::Password
                label="Password"
                input_type="password"
                placeholder="••••••••"
                autocomplete="new-password"
                error=feedback.error(FormField::Password)
                on_input=move |value: String| {
                    set_password.set(value);
                    feedback.edited(FormField::Password);
                }
            />
            <TextField
                field=FormField::ConfirmPassword
                label="Confirm Password"
                input_type="password"
                placeholder="••••••••"
                autocomplete="new-password"
                error=feedback.error(FormField::ConfirmPassword)
                on_input=move |value: String| {
                    set_confirm_password.set(value);
                    feedback.edited(FormField::ConfirmPassword);
                }
            />
            <div class="flex flex-col gap-5 pt-2">
                <Button button_type="submit" disabled=signup_action.pending()>
                    "Sign up"
                </Button>
                <A href=paths::LOGIN {..} class=ButtonVariant::Secondary.class()>
                    "Sign in"
                </A>
            </div>
            {move || {
                signup_action
                    .pending()
                    .get()
                    .then_some(view! { <Spinner label="Creating account" /> })
            }}
        </form>
    }
}
