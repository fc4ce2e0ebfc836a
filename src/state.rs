use crate::{
    backend::BackendClient,
    config::RuntimeConfiguration,
    data::directory::StudentDirectory,
    error::RosterResult,
    maud_conveniences::render_nav,
};
use maud::{DOCTYPE, Markup, html};

#[derive(Clone, Debug)]
pub struct RosterState {
    backend: BackendClient,
    config: RuntimeConfiguration,
    directory: StudentDirectory,
}

impl RosterState {
    pub fn new(config: RuntimeConfiguration) -> RosterResult<Self> {
        let backend = BackendClient::new(config.backend_config())?;

        Ok(Self {
            backend,
            config,
            directory: StudentDirectory::default(),
        })
    }

    #[allow(clippy::unused_self)] //in case self is ever needed :), and to allow direct html! usage
    pub fn render(&self, markup: Markup) -> Markup {
        let nav = render_nav();

        html! {
            (DOCTYPE)
            html {
                head {
                    meta charset="UTF-8" {}
                    meta name="viewport" content="width=device-width, initial-scale=1.0" {}
                    script src="https://unpkg.com/htmx.org@2.0.4" integrity="sha384-HGfztofotfshcF7+8n44JQL2oJmowVChPTg48S+jvZoztPfvwD79OC/LTtG6dMp+" crossorigin="anonymous" {}
                    script src="https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4" {}
                    title { "Student Portal" }
                }
                body class="bg-gray-900 h-screen flex flex-row text-white" {
                    (nav)
                    main class="flex-grow overflow-y-auto p-8" {
                        (markup)
                    }
                }
            }
        }
    }

    pub const fn backend(&self) -> &BackendClient {
        &self.backend
    }

    pub const fn config(&self) -> &RuntimeConfiguration {
        &self.config
    }

    pub const fn directory(&self) -> &StudentDirectory {
        &self.directory
    }
}
