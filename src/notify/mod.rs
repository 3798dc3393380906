//! Message rendering and delivery.

mod message;
mod twilio;

pub use message::render_alert;
pub use twilio::TwilioNotifier;

use serde::Serialize;
use std::future::Future;
use std::pin::Pin;

use crate::core::AlertError;

/// The provider's receipt for an accepted message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Delivery {
    /// Provider-side message id.
    pub sid: String,
    /// Delivery status as reported at send time (e.g. `queued`).
    pub status: String,
}

/// Something that can deliver a rendered alert.
///
/// Implemented by [`TwilioNotifier`]; tests substitute their own sinks.
pub trait Notifier: Send + Sync {
    /// Sends one message.
    ///
    /// # Returns
    /// A `Future` resolving to the provider's [`Delivery`] receipt, or
    /// [`AlertError::Delivery`] if the provider rejected the message.
    fn send<'a>(
        &'a self,
        body: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Delivery, AlertError>> + Send + 'a>>;
}
