//! Landing page for АгроДанные КЗ.
//!
//! SYSTEM CONTEXT
//! ==============
//! The entry page shows the product name, a subtitle, the version label and
//! two links. `/login` is handled by the auth frontend and `/api/v1/docs` by
//! the API service; neither lives in this crate. The page takes no input and
//! renders the same markup every time.

use leptos::prelude::*;

pub const TITLE: &str = "🌾 АгроДанные КЗ";

/// Static entry page. The docs link opens a new tab with no opener reference
/// and no referrer.
#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <main class="landing">
            <div class="landing__body">
                <h1 class="landing__title">"🌾 АгроДанные КЗ"</h1>
                <p class="landing__subtitle">"Система управления фермерским хозяйством"</p>
                <p class="landing__version">"Версия 2.0 - Modern Full-Stack"</p>
                <div class="landing__nav">
                    <a href="/login" class="button button--primary">"Войти"</a>
                    <a
                        href="/api/v1/docs"
                        class="button button--outline"
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        "API Docs"
                    </a>
                </div>
            </div>
        </main>
    }
}

/// Server-rendered markup of [`LandingPage`].
#[must_use]
pub fn render() -> String {
    view! { <LandingPage/> }.to_html()
}

const STYLESHEET: &str = "\
body{margin:0;font-family:ui-monospace,SFMono-Regular,Menlo,monospace;background:#fafaf9;color:#1c1917}\
.landing{display:flex;min-height:100vh;flex-direction:column;align-items:center;justify-content:center;padding:6rem;box-sizing:border-box}\
.landing__body{max-width:64rem;width:100%;font-size:.875rem}\
.landing__title{font-size:2.25rem;font-weight:700;text-align:center;margin:0 0 2rem}\
.landing__subtitle{font-size:1.25rem;text-align:center;margin:0 0 1rem}\
.landing__version{text-align:center;color:#78716c;margin:0}\
.landing__nav{margin-top:2rem;display:flex;justify-content:center;gap:1rem}\
.button{padding:.5rem 1rem;border-radius:.375rem;text-decoration:none}\
.button--primary{background:#15803d;color:#fff}\
.button--primary:hover{background:#166534}\
.button--outline{border:1px solid #d6d3d1;color:inherit}\
.button--outline:hover{background:#f5f5f4}";

/// Complete HTML document wrapping [`render`].
#[must_use]
pub fn document() -> String {
    format!(
        "<!DOCTYPE html>\
         <html lang=\"ru\">\
         <head>\
         <meta charset=\"utf-8\">\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
         <title>{TITLE}</title>\
         <style>{STYLESHEET}</style>\
         </head>\
         <body>{body}</body>\
         </html>",
        body = render(),
    )
}

#[cfg(test)]
#[path = "landing_test.rs"]
mod tests;
