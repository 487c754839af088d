use failure::Fail;

use log::*;

use crate::config::AvatarConfig;
use crate::model::{Contact, ContactForm, Gender};
use crate::ContactBook;


/// Contact list bound to the contact form
#[derive(Clone, Debug)]
pub struct ContactController {
    avatar: AvatarConfig,
    book: ContactBook,
    form: ContactForm,
}

impl ContactController {
    pub fn new(avatar: AvatarConfig) -> Self {
        let form = ContactForm::new(avatar.index);

        ContactController {
            avatar,
            book: ContactBook::new(),
            form,
        }
    }

    pub fn contacts(&self) -> &[Contact] {
        self.book.contacts()
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    /// Apply the resolved contact fetch. Returns true if the list changed.
    pub fn load<E: Fail>(&mut self, result: Result<Vec<Contact>, E>) -> bool {
        match result {
            Ok(contacts) => {
                info!("Loaded {} contacts", contacts.len());
                self.book.seed(contacts);
                true
            }
            Err(error) => {
                error!("Failed to load contacts: {}", error);
                false
            }
        }
    }

    pub fn set_name(&mut self, name: String) {
        self.form.input.name = name;
    }

    pub fn set_mapmaker(&mut self, mapmaker: String) {
        self.form.input.mapmaker = mapmaker;
    }

    pub fn set_phone(&mut self, phone: String) {
        self.form.input.phone = phone;
    }

    pub fn set_email(&mut self, email: String) {
        self.form.input.email = email;
    }

    pub fn select_gender(&mut self, gender: Gender) {
        self.form.gender = gender;
    }

    /// Append the contact described by the form and clear the form
    pub fn add_contacto(&mut self) -> Contact {
        debug!("Adding {:?} as {}", self.form.input, self.form.gender);

        let input = &self.form.input;
        let contact = Contact {
            id: 0,
            imagen: self.avatar.portrait_url(self.form.gender, self.form.img),
            name: input.name.clone(),
            mapmarker: input.mapmaker.clone(),
            earphone: input.phone.clone(),
            comments: input.email.clone(),
        };

        let added = self.book.append(contact).clone();
        info!("Added contact {} '{}'", added.id, added.name);

        self.form.reset();

        added
    }
}
