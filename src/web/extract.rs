//! Request extractors for the catalog pages.

use axum::{
    Form,
    extract::{FromRequest, Request, rejection::FormRejection},
};

use crate::error::AppError;

/// `Form<T>` whose rejection is an [`AppError`], so a body that cannot be
/// read renders the HTML error page like any other failure.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlForm<T>(pub T);

impl<T, S> FromRequest<S> for HtmlForm<T>
where
    Form<T>: FromRequest<S, Rejection = FormRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(value) = Form::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}
