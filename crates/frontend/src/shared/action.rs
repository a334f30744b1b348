use std::future::Future;
use std::pin::Pin;

/// Future returned by caller-supplied async actions (submit, delete).
pub type ActionFuture<T> = Pin<Box<dyn Future<Output = T>>>;

/// Box an async block as an [`ActionFuture`].
pub fn action<T, F>(fut: F) -> ActionFuture<T>
where
    F: Future<Output = T> + 'static,
{
    Box::pin(fut)
}
