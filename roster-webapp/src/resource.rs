use failure::Fail;

use log::*;

use yew::format::{Nothing, Text};
use yew::services::fetch::{FetchService, FetchTask, Request, Response};
use yew::Callback;

use roster_commons::model::{decode_contacts, Contact, SerialisationError};

#[derive(Debug, Fail)]
pub enum ResourceError {
    #[fail(display = "Error message: {}", message)]
    Message { message: String },
    #[fail(display = "Invalid request: {}", message)]
    InvalidRequest { message: String },
    #[fail(display = "Request failed: {}", message)]
    RequestFailed { message: String },
    #[fail(display = "Unexpected status {} for {}", status, url)]
    UnexpectedStatus { url: String, status: u16 },
    #[fail(display = "Serialisation failed")]
    FailedSerialisation {
        #[fail(cause)]
        cause: SerialisationError,
    },
}

fn create_resource_url(path: &str) -> Result<String, ResourceError> {
    let location = web_sys::window()
        .ok_or_else(|| ResourceError::Message { message: "No window available".to_string() })?
        .location();

    let origin = location.origin().map_err(|e| ResourceError::Message {
        message: e.as_string().unwrap_or_else(|| "Unable to access location".to_string()),
    })?;

    Ok(join_url(&origin, path))
}

fn join_url(origin: &str, path: &str) -> String {
    format!("{}/{}", origin.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// Turn a finished fetch into the contact list it carries
fn handle_response(url: &str, response: Response<Text>) -> Result<Vec<Contact>, ResourceError> {
    let (meta, body) = response.into_parts();

    if !meta.status.is_success() {
        return Err(ResourceError::UnexpectedStatus {
            url: url.to_string(),
            status: meta.status.as_u16(),
        });
    }

    let raw = body.map_err(|e| ResourceError::RequestFailed { message: e.to_string() })?;

    decode_contacts(&raw).map_err(|cause| ResourceError::FailedSerialisation { cause })
}

/// The static contacts document
#[derive(Clone, Debug, PartialEq)]
pub struct ContactResource {
    path: String,
}

impl ContactResource {
    pub fn new(path: String) -> ContactResource {
        ContactResource { path }
    }

    /// Issue the GET request. The returned task has to be kept alive until
    /// `callback` fired, dropping it cancels the request.
    pub fn get_contacts(
        &self,
        callback: Callback<Result<Vec<Contact>, ResourceError>>,
    ) -> Result<FetchTask, ResourceError> {
        let url = create_resource_url(&self.path)?;
        debug!("Fetching contacts from {}", url);

        let request = Request::get(url.as_str())
            .body(Nothing)
            .map_err(|e| ResourceError::InvalidRequest { message: e.to_string() })?;

        let on_response = Callback::from(move |response: Response<Text>| {
            callback.emit(handle_response(&url, response));
        });

        FetchService::fetch(request, on_response)
            .map_err(|e| ResourceError::RequestFailed { message: e.to_string() })
    }
}
