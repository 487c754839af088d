use log::*;

use yew::prelude::*;
use yew::services::fetch::FetchTask;
use yew::{html, Component, ComponentLink, Html, InputData, Properties, ShouldRender};

use roster_commons::model::{Contact, Gender};

use crate::ctrl::{ContactManager, ControllerError};
use crate::resource::ResourceError;

pub enum ContactsMsg {
    Loaded(Result<Vec<Contact>, ResourceError>),
    UpdateName(String),
    UpdateMapmaker(String),
    UpdatePhone(String),
    UpdateEmail(String),
    SelectGender(Gender),
    Add,
}

#[derive(Clone, Properties)]
pub struct ContactsProps {
    pub on_error: Callback<String>,
    pub contacts: ContactManager,
}

/// Contact list with the form to add to it
pub struct ContactsView {
    link: ComponentLink<Self>,
    on_error: Callback<String>,
    contacts: ContactManager,
    fetch_task: Option<FetchTask>,
}

impl ContactsView {
    fn report<T>(&self, result: Result<T, ControllerError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(error) => {
                self.on_error.emit(format!("Failed to access contacts {}", error));
                None
            }
        }
    }
}

impl Component for ContactsView {
    type Message = ContactsMsg;
    type Properties = ContactsProps;

    fn create(props: Self::Properties, link: ComponentLink<Self>) -> Self {
        let fetch_task = match props.contacts.fetch_contacts(link.callback(ContactsMsg::Loaded)) {
            Ok(task) => Some(task),
            Err(error) => {
                props.on_error.emit(format!("Failed to request contacts {}", error));
                None
            }
        };

        ContactsView {
            link,
            on_error: props.on_error,
            contacts: props.contacts,
            fetch_task,
        }
    }

    fn update(&mut self, msg: Self::Message) -> ShouldRender {
        let result = match msg {
            ContactsMsg::Loaded(result) => {
                self.fetch_task = None;
                // fetch failures are logged by the controller
                return self.report(self.contacts.load(result)).unwrap_or(false);
            }
            ContactsMsg::UpdateName(value) => self.contacts.set_name(value),
            ContactsMsg::UpdateMapmaker(value) => self.contacts.set_mapmaker(value),
            ContactsMsg::UpdatePhone(value) => self.contacts.set_phone(value),
            ContactsMsg::UpdateEmail(value) => self.contacts.set_email(value),
            ContactsMsg::SelectGender(gender) => self.contacts.select_gender(gender),
            ContactsMsg::Add => self.contacts.add_contacto().map(|added| {
                debug!("New contact {:?}", added);
            }),
        };

        self.report(result).is_some()
    }

    fn change(&mut self, _: Self::Properties) -> ShouldRender {
        // don't render
        false
    }

    fn view(&self) -> Html {
        let contacts = self.report(self.contacts.contacts()).unwrap_or_default();
        let form = match self.report(self.contacts.form()) {
            Some(form) => form,
            None => return html! {},
        };

        let is_men = form.gender == Gender::Men;
        let is_women = form.gender == Gender::Women;

        html! {
        <div class="view_layout">
            <div class="box contact_form">
                <input placeholder="Name" value=&form.input.name
                    oninput=self.link.callback(|e: InputData| ContactsMsg::UpdateName(e.value)) />
                <input placeholder="Address" value=&form.input.mapmaker
                    oninput=self.link.callback(|e: InputData| ContactsMsg::UpdateMapmaker(e.value)) />
                <input placeholder="Phone" value=&form.input.phone
                    oninput=self.link.callback(|e: InputData| ContactsMsg::UpdatePhone(e.value)) />
                <input placeholder="Email" value=&form.input.email
                    oninput=self.link.callback(|e: InputData| ContactsMsg::UpdateEmail(e.value)) />
                <label>
                    <input type="radio" name="gender" checked=is_men
                        onclick=self.link.callback(|_| ContactsMsg::SelectGender(Gender::Men)) />
                    {"Male"}
                </label>
                <label>
                    <input type="radio" name="gender" checked=is_women
                        onclick=self.link.callback(|_| ContactsMsg::SelectGender(Gender::Women)) />
                    {"Female"}
                </label>
                <button type="button" onclick=self.link.callback(|_| ContactsMsg::Add)>{"Add"}</button>
            </div>

            <div class="box contacts">
                {for contacts.iter().map(view_contact)}
            </div>
        </div>
        }
    }
}

fn view_contact(contact: &Contact) -> Html {
    html! {
    <div class="box contact">
        <img class="avatar" src=&contact.imagen alt=&contact.name />
        <div class="contact_details">
            <h4>{&contact.name}</h4>
            <p class="mapmarker">{&contact.mapmarker}</p>
            <p class="earphone">{&contact.earphone}</p>
            <p class="comments">{&contact.comments}</p>
        </div>
    </div>
    }
}
