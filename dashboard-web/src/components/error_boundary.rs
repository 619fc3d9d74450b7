//! Application Error Boundary
//!
//! Two layers catch failures that would otherwise leave a blank page:
//!
//! - [`AppErrorBoundary`] wraps the routed UI; any `Err` rendered below it
//!   replaces the whole UI with the fallback screen.
//! - [`install_panic_hook`] covers panics. A panic aborts the wasm instance,
//!   so the hook writes a static copy of the fallback screen straight into
//!   the document before the module dies.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

const TITLE: &str = "Oops! Something went wrong";
const APOLOGY: &str = "We're sorry for the inconvenience. An unexpected error has occurred. \
    Please try refreshing the page or contact support if the problem persists.";

fn reload_page() {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().reload() {
            log::error!("reload failed: {:?}", e);
        }
    }
}

fn go_home() {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().set_href("/") {
            log::error!("navigation failed: {:?}", e);
        }
    }
}

#[component]
pub fn AppErrorBoundary(children: Children) -> impl IntoView {
    view! {
        <ErrorBoundary fallback=|errors| {
            errors.with(|errors| {
                for (_, error) in errors.iter() {
                    log::error!("error boundary caught: {}", error);
                }
            });
            let details = move || {
                errors.with(|errors| {
                    errors
                        .iter()
                        .map(|(_, error)| error.to_string())
                        .collect::<Vec<_>>()
                        .join("\n")
                })
            };
            view! { <ErrorFallback details=Signal::derive(details)/> }
        }>
            {children()}
        </ErrorBoundary>
    }
}

#[component]
fn ErrorFallback(details: Signal<String>) -> impl IntoView {
    view! {
        <div class="error-screen">
            <div class="error-icon">"!"</div>
            <h1 class="error-title">{TITLE}</h1>
            <p class="error-text">{APOLOGY}</p>

            {cfg!(debug_assertions).then(|| view! {
                <div class="alert alert-error error-details">
                    <strong>"Error Details (Development Mode):"</strong>
                    <pre>{move || details.get()}</pre>
                </div>
            })}

            <div class="error-actions">
                <button class="btn btn-large" on:click=|_| reload_page()>"Refresh Page"</button>
                <button class="btn btn-outlined btn-large" on:click=|_| go_home()>"Go to Home"</button>
            </div>
        </div>
    }
}

/// Static HTML of the fallback screen for the panic path, where the reactive
/// runtime can no longer be trusted.
pub fn crash_screen_html(details: Option<&str>) -> String {
    let details = details
        .filter(|_| cfg!(debug_assertions))
        .map(|d| {
            format!(
                "<div class=\"alert alert-error error-details\"><strong>Error Details (Development Mode):</strong><pre>{}</pre></div>",
                escape_html(d)
            )
        })
        .unwrap_or_default();

    format!(
        "<div class=\"error-screen\">\
         <div class=\"error-icon\">!</div>\
         <h1 class=\"error-title\">{TITLE}</h1>\
         <p class=\"error-text\">{APOLOGY}</p>\
         {details}\
         <div class=\"error-actions\">\
         <button class=\"btn btn-large\" onclick=\"window.location.reload()\">Refresh Page</button>\
         <button class=\"btn btn-outlined btn-large\" onclick=\"window.location.href='/'\">Go to Home</button>\
         </div></div>"
    )
}

fn escape_html(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Log panics to the console and paint the static fallback screen.
pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        console_error_panic_hook::hook(info);

        let message = info.to_string();
        if let Some(body) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
        {
            body.set_inner_html(&crash_screen_html(Some(&message)));
        } else {
            web_sys::console::error_1(&JsValue::from_str("no document body for crash screen"));
        }
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crash_screen_has_actions() {
        let html = crash_screen_html(None);
        assert!(html.contains(TITLE));
        assert!(html.contains("Refresh Page"));
        assert!(html.contains("Go to Home"));
        assert!(!html.contains("Error Details"));
    }

    #[test]
    fn test_crash_details_are_escaped() {
        let html = crash_screen_html(Some("<script>alert(1)</script>"));
        assert!(!html.contains("<script>"));
        if cfg!(debug_assertions) {
            assert!(html.contains("&lt;script&gt;"));
        }
    }
}
