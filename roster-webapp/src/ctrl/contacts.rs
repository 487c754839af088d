use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use yew::services::fetch::FetchTask;
use yew::Callback;

use roster_commons::config::Config;
use roster_commons::ctrl::ContactController;
use roster_commons::model::{Contact, ContactForm, Gender};

use crate::ctrl::ControllerError;
use crate::resource::{ContactResource, ResourceError};

/// Shareable handle on the contact list and its form
#[derive(Clone)]
pub struct ContactManager {
    resource: ContactResource,
    inner: Arc<RwLock<ContactController>>,
}

impl PartialEq for ContactManager {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl ContactManager {
    pub fn new(config: &Config) -> ContactManager {
        ContactManager {
            resource: ContactResource::new(config.resource_path.clone()),
            inner: Arc::new(RwLock::new(ContactController::new(config.avatar.clone()))),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<ContactController>, ControllerError> {
        self.inner.read().map_err(|_| ControllerError::InvalidState {
            message: "Locking failed".to_string(),
        })
    }

    fn write(&self) -> Result<RwLockWriteGuard<ContactController>, ControllerError> {
        self.inner.write().map_err(|_| ControllerError::InvalidState {
            message: "Locking failed".to_string(),
        })
    }

    /// Start fetching the static contact list, see `ContactResource::get_contacts`
    pub fn fetch_contacts(
        &self,
        callback: Callback<Result<Vec<Contact>, ResourceError>>,
    ) -> Result<FetchTask, ControllerError> {
        self.resource.get_contacts(callback).map_err(|cause| ControllerError::ResourceAccess {
            message: "Failed to request contacts".to_string(),
            cause,
        })
    }

    pub fn load(&self, result: Result<Vec<Contact>, ResourceError>) -> Result<bool, ControllerError> {
        Ok(self.write()?.load(result))
    }

    pub fn contacts(&self) -> Result<Vec<Contact>, ControllerError> {
        Ok(self.read()?.contacts().to_vec())
    }

    pub fn form(&self) -> Result<ContactForm, ControllerError> {
        Ok(self.read()?.form().clone())
    }

    pub fn set_name(&self, value: String) -> Result<(), ControllerError> {
        self.write()?.set_name(value);
        Ok(())
    }

    pub fn set_mapmaker(&self, value: String) -> Result<(), ControllerError> {
        self.write()?.set_mapmaker(value);
        Ok(())
    }

    pub fn set_phone(&self, value: String) -> Result<(), ControllerError> {
        self.write()?.set_phone(value);
        Ok(())
    }

    pub fn set_email(&self, value: String) -> Result<(), ControllerError> {
        self.write()?.set_email(value);
        Ok(())
    }

    pub fn select_gender(&self, gender: Gender) -> Result<(), ControllerError> {
        self.write()?.select_gender(gender);
        Ok(())
    }

    pub fn add_contacto(&self) -> Result<Contact, ControllerError> {
        Ok(self.write()?.add_contacto())
    }
}
