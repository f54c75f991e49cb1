//! Sign-in, registration, and password-reset screens.
//!
//! These render the forms only; credential handling belongs to the API
//! client.

use leptos::prelude::*;

use crate::routing::paths;

#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <div class="auth-page auth-page--login">
            <h1>"Log in"</h1>
            <form class="auth-page__form">
                <label class="auth-page__label">
                    "Email" <input class="auth-page__input" type="email" name="email" autocomplete="email"/>
                </label>
                <label class="auth-page__label">
                    "Password"
                    <input class="auth-page__input" type="password" name="password" autocomplete="current-password"/>
                </label>
                <button class="btn btn--primary" type="submit">
                    "Log in"
                </button>
            </form>
            <p class="auth-page__links">
                <a href=paths::RESET>"Forgot password?"</a>
                " · "
                <a href=paths::REGISTER>"Create account"</a>
            </p>
        </div>
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    view! {
        <div class="auth-page auth-page--register">
            <h1>"Create account"</h1>
            <form class="auth-page__form">
                <label class="auth-page__label">
                    "First name" <input class="auth-page__input" type="text" name="firstName"/>
                </label>
                <label class="auth-page__label">
                    "Last name" <input class="auth-page__input" type="text" name="lastName"/>
                </label>
                <label class="auth-page__label">
                    "Email" <input class="auth-page__input" type="email" name="email" autocomplete="email"/>
                </label>
                <label class="auth-page__label">
                    "Phone number" <input class="auth-page__input" type="tel" name="phoneNumber"/>
                </label>
                <label class="auth-page__label">
                    "Password"
                    <input class="auth-page__input" type="password" name="password" autocomplete="new-password"/>
                </label>
                <button class="btn btn--primary" type="submit">
                    "Sign up"
                </button>
            </form>
            <p class="auth-page__links">
                "Already have an account? " <a href=paths::LOGIN>"Log in"</a>
            </p>
        </div>
    }
}

/// Request a reset link by email.
#[component]
pub fn PasswordResetPage() -> impl IntoView {
    view! {
        <div class="auth-page auth-page--request-reset">
            <h1>"Reset password"</h1>
            <p>"Enter your email and we will send you a reset link."</p>
            <form class="auth-page__form">
                <label class="auth-page__label">
                    "Email" <input class="auth-page__input" type="email" name="email" autocomplete="email"/>
                </label>
                <button class="btn btn--primary" type="submit">
                    "Send reset link"
                </button>
            </form>
            <p class="auth-page__links">
                <a href=paths::LOGIN>"Back to log in"</a>
            </p>
        </div>
    }
}

/// Choose a new password using the `token` from the reset link.
#[component]
pub fn PasswordResetFormPage(token: String) -> impl IntoView {
    view! {
        <div class="auth-page auth-page--new-password">
            <h1>"Choose a new password"</h1>
            <form class="auth-page__form">
                <input type="hidden" name="token" value=token/>
                <label class="auth-page__label">
                    "New password"
                    <input class="auth-page__input" type="password" name="password" autocomplete="new-password"/>
                </label>
                <label class="auth-page__label">
                    "Confirm password"
                    <input class="auth-page__input" type="password" name="confirmPassword" autocomplete="new-password"/>
                </label>
                <button class="btn btn--primary" type="submit">
                    "Reset password"
                </button>
            </form>
        </div>
    }
}
