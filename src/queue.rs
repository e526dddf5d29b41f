//! The queue collaborator. Completed reservations leave the service through
//! the [`ReservationSink`] seam; the MQTT implementation publishes one JSON
//! envelope per reservation and only waits for send acknowledgment, the
//! processing result is someone else's problem.

use std::time::Duration;

use crate::config::{Config, ConnectionConf};
use crate::session::DiningReservation;

use anyhow::Result;
use async_trait::async_trait;
use log::info;
use rumqttc::{AsyncClient, EventLoop, MqttOptions, QoS};
use serde::Serialize;
use url::Url;

#[async_trait]
pub trait ReservationSink {
    async fn submit(&self, reservation: &DiningReservation) -> Result<()>;
}

/// What downstream consumers read off the queue. `delay_seconds` is the
/// visibility delay they are asked to honor, `timezone` is the reference zone
/// for interpreting `DiningTime`.
#[derive(Serialize)]
struct QueueEnvelope<'a> {
    #[serde(rename = "delaySeconds")]
    delay_seconds: u16,
    timezone: &'a str,
    attributes: &'a DiningReservation,
}

pub struct MqttQueue {
    client: AsyncClient,
    topic: String,
    delay_secs: u16,
    timezone: String,
}

impl MqttQueue {
    pub fn new(client: AsyncClient, conf: &Config) -> Self {
        Self {
            client,
            topic: conf.queue_topic.clone(),
            delay_secs: conf.queue_delay_secs,
            timezone: conf.timezone.clone(),
        }
    }
}

#[async_trait]
impl ReservationSink for MqttQueue {
    async fn submit(&self, reservation: &DiningReservation) -> Result<()> {
        let envelope = QueueEnvelope {
            delay_seconds: self.delay_secs,
            timezone: &self.timezone,
            attributes: reservation,
        };
        let payload = serde_json::to_vec(&envelope)?;
        self.client
            .publish(&self.topic, QoS::AtLeastOnce, false, payload)
            .await?;
        info!(
            "Queued reservation for {}",
            reservation.location.as_deref().unwrap_or("<no location>")
        );
        Ok(())
    }
}

pub fn make_mqtt_conn(conf: &ConnectionConf) -> Result<(AsyncClient, EventLoop)> {
    let url = Url::parse(
        &format!("http://{}", conf.url_str), // Let's add some protocol
    )?;
    let host = url
        .host_str()
        .ok_or_else(|| anyhow::anyhow!("Broker url '{}' has no host", conf.url_str))?;
    let port: u16 = url.port().unwrap_or(1883);

    // Init MQTT
    let mut mqttoptions = MqttOptions::new(&conf.name, host, port);
    mqttoptions.set_keep_alive(Duration::from_secs(5));
    if let Some((user, pass)) = &conf.user_pass {
        mqttoptions.set_credentials(user, pass);
    }

    Ok(AsyncClient::new(mqttoptions, 10))
}
