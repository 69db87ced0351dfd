use log::error;
use rocket::Request;
use rocket::http::Status;
use rocket::response::Responder;
use thiserror::Error;
use tinynotes::storage::errors::StorageError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(
        self,
        request: &'r Request<'_>,
    ) -> rocket::response::Result<'static> {
        let status = match &self {
            ApiError::Storage(StorageError::NotFound) => Status::NotFound,
            ApiError::Storage(StorageError::TooBig) => Status::PayloadTooLarge,
            ApiError::Storage(e) => {
                error!("storage failure while serving {}: {}", request.uri(), e);
                Status::InternalServerError
            },
        };
        status.respond_to(request)
    }
}
