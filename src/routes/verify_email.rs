//! Email verification notice shown after signup links. Verification itself is
//! handled by the API through the emailed link; this screen only explains the
//! next step.

use crate::{
    components::{Alert, AppShell, ButtonVariant, Card},
    routes::paths,
};
use leptos::prelude::*;
use leptos_router::components::A;

const VERIFY_NOTICE: &str =
    "We sent a verification link to your inbox. Follow it to activate your account.";

#[component]
pub fn VerifyEmailPage() -> impl IntoView {
    view! {
        <AppShell>
            <Card title="Verify your email" description="One more step before you can sign in.">
                <div class="space-y-6">
                    <Alert message=VERIFY_NOTICE.to_string() />
                    <A href=paths::LOGIN {..} class=ButtonVariant::Primary.class()>
                        "Back to sign in"
                    </A>
                </div>
            </Card>
        </AppShell>
    }
}
