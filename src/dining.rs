//! The dining-reservation dialog. One call per turn: the platform sends the
//! current slot values plus confirmation status, this decides the next
//! directive and rewrites the session attributes as cross-turn memory.
//!
//! The state is implicit, keyed by invocation source, confirmation status,
//! the auto-populate context and how far slot filling has come.

use crate::events::{
    ConfirmationStatus, DialogEvent, DialogResponse, FulfillmentState, InvocationSource, Message,
    Slots,
};
use crate::queue::ReservationSink;
use crate::responses::{close, confirm_intent, delegate, elicit_slot};
use crate::session::{ConfirmationContext, DiningReservation, PriorReservation, SessionAttributes};
use crate::validate::{add_days, validate_dining};
use crate::vars::{
    KEY_CURRENT_RESERVATION, MSG_ASK_LOCATION, MSG_ASK_PHONE, MSG_ASK_RESERVATION_CITY,
    MSG_RESERVATION_PLACED, SLOT_LOCATION, SLOT_PHONE,
};

use anyhow::Result;
use log::{debug, warn};

pub async fn handle_dining(event: &DialogEvent, sink: &dyn ReservationSink) -> Result<DialogResponse> {
    let intent_name = &event.current_intent.name;
    let mut session = SessionAttributes::from_event(event.session_attributes.clone());
    let reservation = DiningReservation::from_slots(&event.current_intent.slots);

    if event.invocation_source == InvocationSource::FulfillmentCodeHook {
        return fulfill(reservation, session, sink).await;
    }

    // Track the in-progress reservation for subsequent turns.
    session.set_current_reservation(&reservation);

    // Re-elicit any slot that does not pass validation, this cuts the turn
    // short before any confirmation handling.
    if let Some(violation) = validate_dining(&reservation) {
        debug!("Slot {} rejected, re-eliciting", violation.slot);
        let mut slots = reservation.to_slots();
        slots.insert(violation.slot.to_string(), None);
        return Ok(elicit_slot(
            session,
            intent_name,
            slots,
            violation.slot,
            violation.message,
        ));
    }

    let context = session.confirmation_context();

    match event.current_intent.confirmation_status {
        ConfirmationStatus::Denied => {
            // The flag and the snapshot must not leak into later turns.
            session.clear_confirmation_context();
            session.remove(KEY_CURRENT_RESERVATION);

            if context == Some(ConfirmationContext::AutoPopulate) {
                // The user turned the suggestion down, start over from scratch.
                return Ok(elicit_slot(
                    session,
                    intent_name,
                    DiningReservation::default().to_slots(),
                    SLOT_LOCATION,
                    Message::plain(MSG_ASK_RESERVATION_CITY),
                ));
            }

            Ok(delegate(session, reservation.to_slots()))
        }

        ConfirmationStatus::None => {
            // Nothing filled yet, or an auto-populate round is still waiting
            // for an answer: see whether a prior stay can seed a suggestion.
            if reservation.is_empty() || context == Some(ConfirmationContext::AutoPopulate) {
                if let Some(prior) = session.last_confirmed()? {
                    if prior.is_hotel() {
                        match cross_sell(&prior) {
                            Some((slots, message)) => {
                                session
                                    .set_confirmation_context(ConfirmationContext::AutoPopulate);
                                return Ok(confirm_intent(session, intent_name, slots, message));
                            }
                            None => {
                                warn!("Prior hotel reservation is missing check-in data, skipping auto-populate");
                            }
                        }
                    }
                }
            }

            // Otherwise the platform's own rules decide what to elicit next.
            Ok(delegate(session, reservation.to_slots()))
        }

        ConfirmationStatus::Confirmed => {
            session.clear_confirmation_context();

            if context == Some(ConfirmationContext::AutoPopulate) {
                // A confirmed suggestion still leaves gaps the prior stay
                // could not fill.
                if reservation.phone.is_none() {
                    return Ok(elicit_slot(
                        session,
                        intent_name,
                        reservation.to_slots(),
                        SLOT_PHONE,
                        Message::plain(MSG_ASK_PHONE),
                    ));
                }
                if reservation.location.is_none() {
                    return Ok(elicit_slot(
                        session,
                        intent_name,
                        reservation.to_slots(),
                        SLOT_LOCATION,
                        Message::plain(MSG_ASK_LOCATION),
                    ));
                }
            }

            Ok(delegate(session, reservation.to_slots()))
        }
    }
}

/// Suggestion slots derived from a prior hotel stay: location carried over,
/// the date range computed from check-in plus night count. None when the
/// prior record does not carry what the computation needs.
fn cross_sell(prior: &PriorReservation) -> Option<(Slots, Message)> {
    let location = prior.location.as_deref()?;
    let check_in = prior.check_in_date.as_deref()?;
    let nights = prior.nights.as_deref()?;
    let night_count: i64 = nights.parse().ok()?;
    let return_date = add_days(check_in, night_count)?;

    let mut slots = Slots::new();
    slots.insert("PickUpCity".to_string(), Some(location.to_string()));
    slots.insert("PickUpDate".to_string(), Some(check_in.to_string()));
    slots.insert("ReturnDate".to_string(), Some(return_date));
    slots.insert("CarType".to_string(), None);
    slots.insert("DriverAge".to_string(), None);

    let message = Message::plain(format!(
        "Is this car rental for your {} night stay in {} on {}?",
        nights, location, check_in
    ));

    Some((slots, message))
}

/// Terminal phase of the turn: the reservation goes out to the queue and the
/// dialog closes.
async fn fulfill(
    reservation: DiningReservation,
    mut session: SessionAttributes,
    sink: &dyn ReservationSink,
) -> Result<DialogResponse> {
    sink.submit(&reservation).await?;
    debug!("Reservation placed: {:?}", reservation);

    session.record_confirmed(&reservation);
    Ok(close(
        session,
        FulfillmentState::Fulfilled,
        Message::plain(MSG_RESERVATION_PLACED),
    ))
}
