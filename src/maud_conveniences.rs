use maud::{Markup, PreEscaped, Render, html};
use reqwest::Url;
use std::time::Duration;

pub const INPUT_CLASSES: &str = "shadow appearance-none border rounded w-full py-2 px-3 leading-tight focus:outline-none focus:shadow-outline bg-gray-700 border-gray-600";

pub fn render_table<const N: usize>(titles: [&'static str; N], items: Vec<[Markup; N]>) -> Markup {
    html! {
        div class="overflow-x-auto" {
            table class="min-w-full bg-gray-800 rounded shadow-md" {
                thead class="bg-gray-700" {
                    tr {
                        @for title in titles {
                            th class="py-2 px-4 text-left font-semibold text-gray-300" {(title)}
                        }
                    }
                }
                tbody {
                    @for row in items {
                        tr {
                            @for col in row {
                                td class="py-2 px-4 border-b border-gray-600 text-gray-200" {(col)}
                            }
                        }
                    }
                }
            }
        }
    }
}

pub fn render_nav() -> Markup {
    const LINKS: [(&str, &str, &str); 3] = [
        ("/", "📊", "Dashboard"),
        ("/add", "➕", "Register Student"),
        ("/manage", "📝", "Student Records"),
    ];

    html! {
        nav class="w-64 shrink-0 bg-gray-800 h-screen flex flex-col p-4" {
            div class="flex flex-row items-center space-x-3 mb-6" {
                div class="bg-blue-600 rounded-full h-10 w-10 flex items-center justify-center font-bold" {"SM"}
                h2 class="text-lg font-semibold" {"Student Portal"}
            }
            p class="text-xs uppercase text-gray-400 mb-2" {"Main Menu"}
            ul class="flex flex-col space-y-2 flex-grow" {
                @for (href, icon, text) in LINKS {
                    li {
                        a href=(href) class="flex flex-row space-x-2 rounded px-2 py-1 hover:bg-gray-700" {
                            span {(icon)}
                            span {(text)}
                        }
                    }
                }
            }
            div class="text-xs text-gray-500" {
                p {"Version " (env!("CARGO_PKG_VERSION"))}
            }
        }
    }
}

pub fn title(s: impl Render) -> Markup {
    html! {
        h1 class="text-2xl font-semibold mb-4" {(s)}
    }
}

pub fn subtitle(s: impl Render) -> Markup {
    html! {
        h2 class="text-xl font-semibold mb-2" {(s)}
    }
}

pub fn page_header(heading: &str, link_to: &str, link_text: &str, primary: bool) -> Markup {
    let link_class = if primary {
        "bg-blue-600 hover:bg-blue-800 font-bold py-2 px-4 rounded"
    } else {
        "bg-slate-600 hover:bg-slate-800 font-bold py-2 px-4 rounded"
    };

    html! {
        header class="flex flex-row items-center justify-between mb-6" {
            (title(heading))
            a href=(link_to) class=(link_class) {(link_text)}
        }
    }
}

pub fn form_element(id: &'static str, label: &'static str, element: Markup) -> Markup {
    html! {
        div class="mb-4" {
            label for=(id) class="block text-sm font-bold mb-2 text-gray-300" {(label)}
            (element)
        }
    }
}

pub fn simple_form_element(
    id: &'static str,
    label: &'static str,
    required: bool,
    ty: Option<&'static str>,
    value: &str,
    placeholder: Option<&'static str>,
) -> Markup {
    form_element(
        id,
        label,
        html! {
            input required[required] type=(ty.unwrap_or("text")) id=(id) name=(id) value=(value) placeholder=[placeholder] class=(INPUT_CLASSES);
        },
    )
}

pub fn form_submit_button(text: &str, in_flight_text: &str) -> Markup {
    html! {
        button type="submit" class="bg-blue-500 hover:bg-blue-700 font-bold py-2 px-4 rounded focus:outline-none focus:shadow-outline" {
            span class="[.htmx-request_&]:hidden" {(text)}
            span class="htmx-indicator" {(in_flight_text)}
        }
    }
}

pub fn loading(text: &str) -> Markup {
    html! {
        div class="flex flex-col items-center justify-center py-8 space-y-2" {
            div class="animate-spin rounded-full h-8 w-8 border-b-2 border-blue-400" {}
            p class="text-gray-300" {(text)}
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

/// The transient notification shown after a create, update or delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub text: &'static str,
}

impl Banner {
    pub const fn success(text: &'static str) -> Self {
        Self {
            kind: BannerKind::Success,
            text,
        }
    }

    pub const fn error(text: &'static str) -> Self {
        Self {
            kind: BannerKind::Error,
            text,
        }
    }
}

impl Render for Banner {
    fn render(&self) -> Markup {
        let (classes, icon, kind) = match self.kind {
            BannerKind::Success => (
                "bg-green-100 border border-green-400 text-green-700 px-4 py-3 rounded relative mb-4 flex flex-row space-x-2",
                "✅",
                "success",
            ),
            BannerKind::Error => (
                "bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded relative mb-4 flex flex-row space-x-2",
                "❌",
                "error",
            ),
        };

        html! {
            div role="alert" class=(classes) data-banner=(kind) {
                span {(icon)}
                span {(self.text)}
            }
        }
    }
}

/// Sends the browser to `to` once `delay` has passed. Swapped in by htmx, which runs the
/// script as part of the swap.
pub fn delayed_redirect(to: &str, delay: Duration) -> Markup {
    html! {
        script {
            (PreEscaped(format!("setTimeout(() => window.location.assign({to:?}), {});", delay.as_millis())))
        }
    }
}

///percent-encodes an opaque identifier for use as a single path segment, the same way
///[`crate::config::BackendConfig::students_url`] does for the backend
pub fn path_segment(id: &str) -> String {
    let mut url = Url::parse("http://roster.invalid/").expect("constant URL is valid");
    //an http URL always has path segments
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.clear().push(id);
    }
    url.path().trim_start_matches('/').to_string()
}
