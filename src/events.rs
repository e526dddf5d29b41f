//! Wire types for the conversational platform. All of the JSON the platform
//! sends per turn, and all of the JSON it expects back, is decoded and encoded
//! here; the rest of the service only sees the typed forms.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Named slot values of an intent, a slot may be unset.
pub type Slots = HashMap<String, Option<String>>;

/// The per-turn event the platform hands to the service.
#[derive(Clone, Debug, Deserialize)]
pub struct DialogEvent {
    pub bot: BotInfo,
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "invocationSource")]
    pub invocation_source: InvocationSource,
    #[serde(rename = "sessionAttributes", default)]
    pub session_attributes: Option<HashMap<String, String>>,
    #[serde(rename = "currentIntent")]
    pub current_intent: CurrentIntent,
}

#[derive(Clone, Debug, Deserialize)]
pub struct BotInfo {
    pub name: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct CurrentIntent {
    pub name: String,
    #[serde(default)]
    pub slots: Slots,
    #[serde(rename = "confirmationStatus", default)]
    pub confirmation_status: ConfirmationStatus,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub enum InvocationSource {
    DialogCodeHook,
    FulfillmentCodeHook,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub enum ConfirmationStatus {
    None,
    Confirmed,
    Denied,
}

impl Default for ConfirmationStatus {
    fn default() -> Self {
        ConfirmationStatus::None
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum FulfillmentState {
    Fulfilled,
    Failed,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Message {
    #[serde(rename = "contentType")]
    pub content_type: String,
    pub content: String,
}

impl Message {
    pub fn plain<S: Into<String>>(content: S) -> Self {
        Self {
            content_type: "PlainText".to_string(),
            content: content.into(),
        }
    }
}

/// What the platform should do next with the conversation.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum DialogAction {
    ElicitSlot {
        #[serde(rename = "intentName")]
        intent_name: String,
        slots: Slots,
        #[serde(rename = "slotToElicit")]
        slot_to_elicit: String,
        message: Message,
    },
    ConfirmIntent {
        #[serde(rename = "intentName")]
        intent_name: String,
        slots: Slots,
        message: Message,
    },
    Delegate {
        slots: Slots,
    },
    Close {
        #[serde(rename = "fulfillmentState")]
        fulfillment_state: FulfillmentState,
        message: Message,
    },
}

/// One turn's answer: a directive plus the session attributes echoed back for
/// the platform to persist.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DialogResponse {
    #[serde(rename = "sessionAttributes")]
    pub session_attributes: HashMap<String, String>,
    #[serde(rename = "dialogAction")]
    pub dialog_action: DialogAction,
}
