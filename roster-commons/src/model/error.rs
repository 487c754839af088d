use failure::Fail;

#[derive(Debug, Fail)]
pub enum SerialisationError {
    #[fail(display = "Decoding failed: {}", message)]
    Decoding {
        message: String,
        #[fail(cause)]
        cause: serde_json::Error,
    },
}
