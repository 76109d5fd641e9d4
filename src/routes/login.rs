//! Login screen. Fields validate on change; a valid form is submitted through
//! the login flow, which stores the session before this screen navigates home.

use crate::{
    components::{
        AlreadySignedInPanel, AppShell, Button, ButtonVariant, Card, Spinner, TextField,
    },
    features::auth::{
        client::HttpTransport,
        feedback::FormFeedback,
        flow,
        forms::{FormField, LoginForm},
        state::use_auth,
    },
    routes::paths,
};
use leptos::{ev::SubmitEvent, prelude::*};
use leptos_router::{components::A, hooks::use_navigate};

const FIELDS: [FormField; 2] = [FormField::Email, FormField::Password];

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let signed_in_on_arrival = RwSignal::new(auth.is_authenticated.get_untracked());

    view! {
        <AppShell>
            <Card title="Login" description="Enter your credentials to access the Tweeter app.">
                <Show
                    when=move || signed_in_on_arrival.get()
                    fallback=|| view! { <LoginCard /> }
                >
                    <AlreadySignedInPanel visible=signed_in_on_arrival />
                </Show>
            </Card>
        </AppShell>
    }
}

#[component]
fn LoginCard() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let feedback = FormFeedback::new(Memo::new(move |_| {
        LoginForm::new(email.get(), password.get()).validate()
    }));

    let login_action = Action::new_local(move |form: &LoginForm| {
        let form = form.clone();
        let store = auth.store();
        async move { flow::submit_login(&HttpTransport, &store, &form).await }
    });

    Effect::new(move |_| {
        if let Some(result) = login_action.value().get() {
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
        login_action.dispatch(LoginForm::new(
            email.get_untracked(),
            password.get_untracked(),
        ));
    };

    view! {
        <form class="space-y-4" on:submit=on_submit novalidate>
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
                autocomplete="current-password"
                error=feedback.error(FormField::Password)
                on_input=move |value: String| {
                    set_password.set(value);
                    feedback.edited(FormField::Password);
                }
            />
            <div class="flex flex-col gap-5 pt-2">
                <Button button_type="submit" disabled=login_action.pending()>
                    "Sign in"
                </Button>
                <A href=paths::SIGNUP {..} class=ButtonVariant::Secondary.class()>
                    "Sign up"
                </A>
            </div>
            {move || {
                login_action
                    .pending()
                    .get()
                    .then_some(view! { <Spinner label="Signing in" /> })
            }}
        </form>
    }
}
