//! Builders for the four directives the platform understands. All of them are
//! plain constructors, the session attributes are echoed back exactly as the
//! caller left them.

use crate::events::{DialogAction, DialogResponse, FulfillmentState, Message, Slots};
use crate::session::SessionAttributes;

/// Re-prompt for exactly one named slot, keeping every other value as given.
pub fn elicit_slot(
    session: SessionAttributes,
    intent_name: &str,
    slots: Slots,
    slot_to_elicit: &str,
    message: Message,
) -> DialogResponse {
    DialogResponse {
        session_attributes: session.into_inner(),
        dialog_action: DialogAction::ElicitSlot {
            intent_name: intent_name.to_string(),
            slots,
            slot_to_elicit: slot_to_elicit.to_string(),
            message,
        },
    }
}

/// Ask for a yes/no confirmation of the intent with a specific slot snapshot.
pub fn confirm_intent(
    session: SessionAttributes,
    intent_name: &str,
    slots: Slots,
    message: Message,
) -> DialogResponse {
    DialogResponse {
        session_attributes: session.into_inner(),
        dialog_action: DialogAction::ConfirmIntent {
            intent_name: intent_name.to_string(),
            slots,
            message,
        },
    }
}

/// Hand the turn back to the platform's own next-slot and confirmation logic.
pub fn delegate(session: SessionAttributes, slots: Slots) -> DialogResponse {
    DialogResponse {
        session_attributes: session.into_inner(),
        dialog_action: DialogAction::Delegate { slots },
    }
}

/// Terminate the dialog with a final state and message.
pub fn close(
    session: SessionAttributes,
    fulfillment_state: FulfillmentState,
    message: Message,
) -> DialogResponse {
    DialogResponse {
        session_attributes: session.into_inner(),
        dialog_action: DialogAction::Close {
            fulfillment_state,
            message,
        },
    }
}
