mod config;
mod dining;
mod dispatch;
mod events;
mod queue;
mod responses;
mod session;
mod validate;
mod vars;


// This crate
use crate::config::get_conf;
use crate::dispatch::dispatch;
use crate::events::{DialogEvent, FulfillmentState, Message};
use crate::queue::{make_mqtt_conn, MqttQueue};
use crate::responses::close;
use crate::session::SessionAttributes;
use crate::vars::{EVENT_TOPIC, MSG_GENERIC_FAILURE, RESPONSE_TOPIC};

// Other crates
use anyhow::Result;
use log::{debug, error, info};
use rumqttc::{Event, Packet, QoS};

fn init_log() {
    // Use Debug log level for debug compilations
    let log_level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    simplelog::TermLogger::init(
        log_level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
    .expect("Log init failed");
}

// Main loop: one dialog event in, one directive out, forever.
async fn event_loop() -> Result<()> {
    let conf = get_conf();
    debug!("{:?}", conf);

    let (client, mut eloop) = make_mqtt_conn(&conf.mqtt)?;
    client.subscribe(EVENT_TOPIC, QoS::AtMostOnce).await?;
    let sink = MqttQueue::new(client.clone(), &conf);
    info!("Listening for dialog events on {}", EVENT_TOPIC);

    loop {
        let notification = eloop.poll().await?;
        if let Event::Incoming(Packet::Publish(pub_msg)) = notification {
            if pub_msg.topic != EVENT_TOPIC {
                continue;
            }

            let event: DialogEvent = match serde_json::from_slice(&pub_msg.payload) {
                Ok(event) => event,
                Err(e) => {
                    error!("Discarding malformed dialog event: {}", e);
                    continue;
                }
            };
            debug!("event.bot.name={}", event.bot.name);

            let response = match dispatch(&event, &sink).await {
                Ok(response) => response,
                Err(e) => {
                    // Fatal for the turn only: the user gets the platform's
                    // generic failure and the loop keeps serving.
                    error!("Turn failed: {}", e);
                    close(
                        SessionAttributes::from_event(event.session_attributes.clone()),
                        FulfillmentState::Failed,
                        Message::plain(MSG_GENERIC_FAILURE),
                    )
                }
            };

            let payload = serde_json::to_vec(&response)?;
            client
                .publish(RESPONSE_TOPIC, QoS::AtMostOnce, false, payload)
                .await?;
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    ctrlc::set_handler(move || {
        std::process::exit(0);
    })
    .expect("Error setting Ctrl-C handler");

    init_log();
    event_loop().await
}
