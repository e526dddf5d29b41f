use std::path::PathBuf;

use lazy_static::lazy_static;

lazy_static! {
    static ref ORG_PATH: PathBuf = std::env::current_dir().expect("Couldn't get current_dir").canonicalize().expect("Failed to canonicalize current_dir");
}

pub fn main_conf_path() -> PathBuf {
    ORG_PATH.join("conf.yaml")
}

// Intents known to the bot, everything else is rejected
pub const INTENT_DINING: &str = "DiningSuggestionsIntent";
pub const INTENT_THANKS: &str = "ThankYouIntent";
pub const INTENT_GREETING: &str = "GreetingIntent";

// Slot names of the dining reservation
pub const SLOT_LOCATION: &str = "Location";
pub const SLOT_CUISINE: &str = "Cuisine";
pub const SLOT_DINING_TIME: &str = "DiningTime";
pub const SLOT_NUM_PEOPLE: &str = "NumberOfPeople";
pub const SLOT_PHONE: &str = "Phone";

// Session attribute keys, owned by the platform's session store
pub const KEY_CURRENT_RESERVATION: &str = "currentReservation";
pub const KEY_LAST_CONFIRMED: &str = "lastConfirmedReservation";
pub const KEY_CONFIRMATION_CONTEXT: &str = "confirmationContext";

// Topics
pub const EVENT_TOPIC: &str = "dinebot/dialog_event";
pub const RESPONSE_TOPIC: &str = "dinebot/dialog_response";

// Fixed dialog texts
pub const MSG_WELCOME: &str = "Welcome, How may I help you !.";
pub const MSG_THANKS: &str = "Thanks, It was really nice talking to you !.";
pub const MSG_RESERVATION_PLACED: &str = "Thanks, I have placed your reservation.";
pub const MSG_ASK_RESERVATION_CITY: &str = "Where would you like to make your reservation?";
pub const MSG_ASK_PHONE: &str = "Please specify your Phone Number?";
pub const MSG_ASK_LOCATION: &str = "What location ?";
pub const MSG_GENERIC_FAILURE: &str = "Sorry, something went wrong while handling your request.";

// Other
pub const DEF_QUEUE_TOPIC: &str = "dinebot/dining_queue";
pub const DEF_QUEUE_DELAY_SECS: u16 = 5;
pub const DEF_TIMEZONE: &str = "America/New_York";
