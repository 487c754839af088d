use log::*;

use yew::{html, Callback, Component, ComponentLink, Html, Properties, ShouldRender};

use roster_commons::config::Config;

use crate::ctrl::ContactManager;
use crate::views::*;

pub enum AppMessage {
    ApplicationError(String),
}

#[derive(Clone, Properties)]
pub struct AppProps {
    pub config: Config,
}

pub struct AppContainer {
    on_error: Callback<String>,
    contacts: ContactManager,
}

impl Component for AppContainer {
    type Message = AppMessage;
    type Properties = AppProps;

    fn create(props: Self::Properties, link: ComponentLink<Self>) -> Self {
        info!("Initialising app...");

        let on_error: Callback<String> = link.callback(AppMessage::ApplicationError);
        let contacts = ContactManager::new(&props.config);

        AppContainer { on_error, contacts }
    }

    fn update(&mut self, msg: Self::Message) -> ShouldRender {
        match msg {
            AppMessage::ApplicationError(message) => {
                error!("{}", message);
                false
            }
        }
    }

    fn change(&mut self, _: Self::Properties) -> ShouldRender {
        // don't render
        false
    }

    fn view(&self) -> Html {
        html! {
        <div>
            <contacts::ContactsView
             on_error=self.on_error.clone()
             contacts=self.contacts.clone()
              />
        </div>
        }
    }
}
