mod about;
mod contact;
mod dom;
mod footer;
mod header;
mod hero;
mod hooks;
mod projects;
mod scroll_top;
mod skills;

use leptos::{either::Either, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::{portfolio, Portfolio};

use about::About;
use contact::Contact;
use footer::Footer;
use header::Header;
use hero::Hero;
use hooks::{ScrollContext, ThemeContext};
use projects::Projects;
use scroll_top::ScrollToTop;
use skills::Skills;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light dark" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let theme = ThemeContext::new();
    provide_context(theme);
    provide_context(ScrollContext::new());

    let current = theme.theme();
    Effect::new(move |_| dom::apply_root_theme(current.get()));

    // reads nothing reactive, so it runs once after hydration
    #[cfg(feature = "hydrate")]
    Effect::new(move |_| {
        theme.restore(Box::new(dom::BrowserStorage), dom::system_prefers_dark());
    });

    let content = match portfolio() {
        Ok(p) => Either::Left(view! { <Page portfolio=p /> }),
        Err(e) => {
            log::error!("{e}");
            Either::Right(view! { <ContentError /> })
        }
    };

    view! {
        <Router>
            <div class="min-h-screen transition-colors duration-300 bg-gray-50 dark:bg-gray-900 text-gray-800 dark:text-gray-200">
                {content}
            </div>
        </Router>
    }
}

#[component]
fn Page(portfolio: &'static Portfolio) -> impl IntoView {
    let profile = &portfolio.profile;
    view! {
        <Title text=format!("{} - {}", profile.name, profile.title) />
        <Meta name="description" content=format!("{}, {}", profile.name, profile.title) />
        <Header profile />
        <main>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=move || view! { <HomePage portfolio /> } />
            </Routes>
        </main>
        <Footer profile />
        <ScrollToTop />
    }
}

/// The portfolio sections, top to bottom.
#[component]
fn HomePage(portfolio: &'static Portfolio) -> impl IntoView {
    let profile = &portfolio.profile;
    let education = portfolio.education.as_slice();
    let projects = portfolio.projects.as_slice();
    view! {
        <Hero profile />
        <About profile education />
        <Skills portfolio />
        <Projects projects />
        <Contact profile />
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <section class="min-h-screen flex flex-col items-center justify-center">
            <h1 class="text-3xl font-bold mb-4">"Page not found"</h1>
            <a href="/" class="text-blue-600 dark:text-blue-400 hover:underline">
                "Back to the portfolio"
            </a>
        </section>
    }
}

#[component]
fn ContentError() -> impl IntoView {
    view! {
        <section class="min-h-screen flex items-center justify-center">
            <p class="text-red-500">"This portfolio couldn't be loaded. Please try again later."</p>
        </section>
    }
}
