use failure::Fail;

use crate::resource::ResourceError;

#[derive(Debug, Fail)]
pub enum ControllerError {
    #[fail(display = "Invalid controller state: {}", message)]
    InvalidState { message: String },
    #[fail(display = "Resource access failed: {}", message)]
    ResourceAccess {
        message: String,
        #[fail(cause)]
        cause: ResourceError,
    },
}
