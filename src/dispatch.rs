//! Maps an incoming intent name to its handler. Only three intents exist,
//! anything else is fatal for the turn and surfaces as a generic failure to
//! the end user.

use crate::dining::handle_dining;
use crate::events::{DialogEvent, DialogResponse, FulfillmentState, Message};
use crate::queue::ReservationSink;
use crate::responses::close;
use crate::session::SessionAttributes;
use crate::vars::{INTENT_DINING, INTENT_GREETING, INTENT_THANKS, MSG_THANKS, MSG_WELCOME};

use anyhow::Result;
use log::debug;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("Intent with name {0} not supported")]
    UnsupportedIntent(String),
}

pub async fn dispatch(event: &DialogEvent, sink: &dyn ReservationSink) -> Result<DialogResponse> {
    debug!(
        "dispatch userId={}, intentName={}",
        event.user_id, event.current_intent.name
    );

    match event.current_intent.name.as_str() {
        INTENT_DINING => handle_dining(event, sink).await,
        INTENT_THANKS => Ok(fixed_close(event, MSG_THANKS)),
        INTENT_GREETING => Ok(fixed_close(event, MSG_WELCOME)),
        other => Err(HandlerError::UnsupportedIntent(other.to_string()).into()),
    }
}

fn fixed_close(event: &DialogEvent, text: &str) -> DialogResponse {
    let session = SessionAttributes::from_event(event.session_attributes.clone());
    close(session, FulfillmentState::Fulfilled, Message::plain(text))
}
