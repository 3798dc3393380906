use serde::{Deserialize, Serialize};
use std::future::Future;
use std::pin::Pin;

use crate::core::{AlertClient, AlertError, Config, net};
use crate::notify::{Delivery, Notifier};

#[derive(Serialize)]
struct MessageForm<'a> {
    #[serde(rename = "Body")]
    body: &'a str,
    #[serde(rename = "From")]
    from: &'a str,
    #[serde(rename = "To")]
    to: &'a str,
}

#[derive(Deserialize)]
struct MessageResource {
    sid: String,
    status: Option<String>,
}

#[derive(Deserialize)]
struct ErrorResource {
    code: Option<i64>,
    message: Option<String>,
}

/// Sends SMS through the Twilio Messages API.
#[derive(Clone)]
pub struct TwilioNotifier {
    client: AlertClient,
    account_sid: String,
    auth_token: String,
    from: String,
    to: String,
}

impl TwilioNotifier {
    pub fn new(
        client: &AlertClient,
        account_sid: impl Into<String>,
        auth_token: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        Self {
            client: client.clone(),
            account_sid: account_sid.into(),
            auth_token: auth_token.into(),
            from: from.into(),
            to: to.into(),
        }
    }

    /// Takes account, token and both identities from the run config.
    pub fn from_config(client: &AlertClient, cfg: &Config) -> Self {
        Self::new(
            client,
            &cfg.twilio_account_sid,
            &cfg.twilio_auth_token,
            &cfg.twilio_from,
            &cfg.twilio_to,
        )
    }

    #[tracing::instrument(skip(self, body), err, fields(to = %mask_number(&self.to), len = body.len()))]
    async fn post_message(&self, body: &str) -> Result<Delivery, AlertError> {
        let url = self.client.base_messaging().join(&format!(
            "2010-04-01/Accounts/{}/Messages.json",
            self.account_sid
        ))?;

        let form = MessageForm {
            body,
            from: &self.from,
            to: &self.to,
        };

        let resp = self
            .client
            .http()
            .post(url)
            .basic_auth(&self.account_sid, Some(&self.auth_token))
            .form(&form)
            .send()
            .await?;

        let status = resp.status();
        let text = net::get_text(resp, "twilio_message", &self.account_sid, "json").await?;

        if !status.is_success() {
            let (code, message) = match serde_json::from_str::<ErrorResource>(&text) {
                Ok(err) => (err.code, err.message.unwrap_or(text)),
                Err(_) => (None, text),
            };
            return Err(AlertError::Delivery {
                status: status.as_u16(),
                code,
                message,
            });
        }

        let msg: MessageResource = serde_json::from_str(&text)
            .map_err(|e| AlertError::DataShape(format!("twilio response: {e}")))?;

        tracing::info!(sid = %msg.sid, status = msg.status.as_deref().unwrap_or("unknown"), "message accepted");
        Ok(Delivery {
            sid: msg.sid,
            status: msg.status.unwrap_or_else(|| "unknown".into()),
        })
    }
}

impl Notifier for TwilioNotifier {
    fn send<'a>(
        &'a self,
        body: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Delivery, AlertError>> + Send + 'a>> {
        Box::pin(self.post_message(body))
    }
}

/// Keeps the last four characters of a phone number, e.g. `********2222`.
fn mask_number(number: &str) -> String {
    let keep = number.chars().count().saturating_sub(4);
    number
        .chars()
        .enumerate()
        .map(|(i, c)| if i < keep { '*' } else { c })
        .collect()
}
