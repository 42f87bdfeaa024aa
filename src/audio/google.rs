//! Speech from the public Google Translate TTS endpoint, returned as mp3 bytes.

use super::SpeechSynthesizer;
use crate::error::AudioError;
use reqwest::blocking::Client;
use std::time::Duration;

const TTS_URL: &str = "https://translate.google.com/translate_tts";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub struct GoogleTts {
    client: Client,
    url: String,
}

impl GoogleTts {
    pub fn new() -> Result<Self, AudioError> {
        Self::with_url(TTS_URL)
    }

    pub fn with_url(url: &str) -> Result<Self, AudioError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            url: url.to_string(),
        })
    }
}

impl SpeechSynthesizer for GoogleTts {
    fn synthesize(&self, text: &str, language_tag: &str) -> Result<Vec<u8>, AudioError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(AudioError::EmptyText);
        }

        log::debug!("Requesting speech for '{}' ({})", text, language_tag);
        let response = self
            .client
            .get(&self.url)
            .query(&[
                ("ie", "UTF-8"),
                ("client", "tw-ob"),
                ("tl", language_tag),
                ("q", text),
            ])
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(AudioError::Http(status.as_u16()));
        }

        Ok(response.bytes()?.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::TcpListener;

    #[test]
    fn test_empty_text_never_hits_network() {
        let tts = GoogleTts::with_url("http://127.0.0.1/unused").unwrap();
        let result = tts.synthesize("  ", "id");
        assert!(matches!(result, Err(AudioError::EmptyText)));
    }

    #[test]
    fn test_unreachable_service_is_an_error() {
        // bind then drop to get a local port nothing is listening on
        let port = {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let url = format!("http://127.0.0.1:{}/translate_tts", port);
        let tts = GoogleTts::with_url(&url).unwrap();
        let result = tts.synthesize("Hekal", "id");
        assert!(matches!(result, Err(AudioError::Network(_))));
    }
}
