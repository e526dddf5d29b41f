//! Typed access to the platform's per-conversation session store. The store
//! itself is a flat string map carried by the platform between turns; nested
//! records travel inside it as JSON text, so they are decoded here on the way
//! in and encoded again on the way out.

use std::collections::HashMap;

use crate::events::Slots;
use crate::vars::{
    KEY_CONFIRMATION_CONTEXT, KEY_CURRENT_RESERVATION, KEY_LAST_CONFIRMED, SLOT_CUISINE,
    SLOT_DINING_TIME, SLOT_LOCATION, SLOT_NUM_PEOPLE, SLOT_PHONE,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Session value for '{key}' is not valid JSON: {source}")]
    BadPayload {
        key: &'static str,
        source: serde_json::Error,
    },
}

/// The five domain fields of a dining reservation, each unset until the user
/// fills it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DiningReservation {
    pub location: Option<String>,
    pub cuisine: Option<String>,
    pub dining_time: Option<String>,
    pub number_of_people: Option<String>,
    pub phone: Option<String>,
}

impl DiningReservation {
    pub fn from_slots(slots: &Slots) -> Self {
        let get = |name: &str| slots.get(name).cloned().flatten();
        Self {
            location: get(SLOT_LOCATION),
            cuisine: get(SLOT_CUISINE),
            dining_time: get(SLOT_DINING_TIME),
            number_of_people: get(SLOT_NUM_PEOPLE),
            phone: get(SLOT_PHONE),
        }
    }

    pub fn to_slots(&self) -> Slots {
        let mut slots = Slots::new();
        slots.insert(SLOT_LOCATION.to_string(), self.location.clone());
        slots.insert(SLOT_CUISINE.to_string(), self.cuisine.clone());
        slots.insert(SLOT_DINING_TIME.to_string(), self.dining_time.clone());
        slots.insert(SLOT_NUM_PEOPLE.to_string(), self.number_of_people.clone());
        slots.insert(SLOT_PHONE.to_string(), self.phone.clone());
        slots
    }

    pub fn is_empty(&self) -> bool {
        self.location.is_none()
            && self.cuisine.is_none()
            && self.dining_time.is_none()
            && self.number_of_people.is_none()
            && self.phone.is_none()
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).expect("Reservation is always serializable")
    }
}

/// The most recently completed reservation of any supported type. Loosely
/// shaped on purpose, prior records come from other bots of the platform.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PriorReservation {
    pub reservation_type: Option<String>,
    pub location: Option<String>,
    pub check_in_date: Option<String>,
    pub nights: Option<String>,
}

impl PriorReservation {
    pub fn is_hotel(&self) -> bool {
        self.reservation_type.as_deref() == Some("Hotel")
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfirmationContext {
    AutoPopulate,
}

impl ConfirmationContext {
    fn as_str(&self) -> &'static str {
        match self {
            ConfirmationContext::AutoPopulate => "AutoPopulate",
        }
    }

    fn from_str(text: &str) -> Option<Self> {
        match text {
            "AutoPopulate" => Some(ConfirmationContext::AutoPopulate),
            _ => None,
        }
    }
}

/// Per-conversation attributes. Owned and persisted by the platform, this
/// service only reads and rewrites them each turn. An absent input map is
/// normalized to an empty one before any logic runs.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionAttributes {
    inner: HashMap<String, String>,
}

impl SessionAttributes {
    pub fn from_event(map: Option<HashMap<String, String>>) -> Self {
        Self {
            inner: map.unwrap_or_default(),
        }
    }

    pub fn into_inner(self) -> HashMap<String, String> {
        self.inner
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.inner.get(key).map(String::as_str)
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.inner.remove(key)
    }

    /// Snapshot of the turn's slot values, kept for cross-turn memory.
    pub fn set_current_reservation(&mut self, reservation: &DiningReservation) {
        self.inner
            .insert(KEY_CURRENT_RESERVATION.to_string(), reservation.to_json());
    }

    /// Moves the reservation into the confirmed spot and drops the in-progress
    /// snapshot, done once fulfillment went through.
    pub fn record_confirmed(&mut self, reservation: &DiningReservation) {
        self.inner.remove(KEY_CURRENT_RESERVATION);
        self.inner
            .insert(KEY_LAST_CONFIRMED.to_string(), reservation.to_json());
    }

    pub fn last_confirmed(&self) -> Result<Option<PriorReservation>, SessionError> {
        match self.inner.get(KEY_LAST_CONFIRMED) {
            Some(raw) => serde_json::from_str(raw)
                .map(Some)
                .map_err(|source| SessionError::BadPayload {
                    key: KEY_LAST_CONFIRMED,
                    source,
                }),
            None => Ok(None),
        }
    }

    pub fn confirmation_context(&self) -> Option<ConfirmationContext> {
        self.inner
            .get(KEY_CONFIRMATION_CONTEXT)
            .and_then(|c| ConfirmationContext::from_str(c))
    }

    pub fn set_confirmation_context(&mut self, context: ConfirmationContext) {
        self.inner.insert(
            KEY_CONFIRMATION_CONTEXT.to_string(),
            context.as_str().to_string(),
        );
    }

    pub fn clear_confirmation_context(&mut self) {
        self.inner.remove(KEY_CONFIRMATION_CONTEXT);
    }
}
