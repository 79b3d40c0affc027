use crate::components::Header;
use leptos::prelude::*;
use leptos_darkmode::Darkmode;
use leptos_meta::{Html, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    provide_meta_context();
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <Title formatter=|text| format!("{} - Lusso", text) text="Home" />
            </head>

            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    let darkmode = Darkmode::init();
    let theme = {
        let darkmode = darkmode.clone();
        move || if darkmode.is_dark() { "dark" } else { "light" }
    };

    view! {
        <Html class:dark={
            let darkmode = darkmode.clone();
            move || darkmode.is_dark()
        } attr:data-theme=theme />
        <Router>
            <Header>
                <a href="/" class="font-medium hover:underline">"Collections"</a>
                <a href="/" class="font-medium hover:underline">"Atelier"</a>
                <ThemeToggle />
            </Header>
            <Routes fallback=|| "Page not found".into_view()>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

#[component]
fn ThemeToggle() -> impl IntoView {
    let mut darkmode = use_context::<Darkmode>();
    let label = {
        let darkmode = darkmode.clone();
        move || {
            if darkmode.as_ref().is_some_and(|v| v.is_dark()) {
                "Light"
            } else {
                "Dark"
            }
        }
    };

    view! {
        <button
            class="rounded-full px-3 py-1 text-sm border border-white/40"
            on:click=move |_| {
                if let Some(darkmode) = darkmode.as_mut() {
                    let dark = !darkmode.is_dark();
                    tracing::debug!(dark, "theme toggled");
                    darkmode.set(dark);
                }
            }
        >
            {label}
        </button>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Title text="Home" />
        <main class="min-h-screen pt-40 px-8 bg-gradient-to-br from-amber-100 via-rose-200 to-sky-300 dark:from-stone-900 dark:via-slate-900 dark:to-indigo-950">
            <section class="max-w-3xl mx-auto space-y-6 text-stone-800 dark:text-stone-100">
                <h2 class="text-4xl font-semibold">"Crafted in glass"</h2>
                <p class="text-lg">
                    "Move the pointer across the header to steer its highlight."
                </p>
            </section>
        </main>
    }
}
