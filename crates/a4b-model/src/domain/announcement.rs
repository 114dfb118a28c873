//! Announcement content model shapes.
//!
//! An announcement carries up to one text, SSML, and audio variant per
//! locale; devices play whichever variant they support.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::enums::Locale;
use crate::fmt::WireBody;

/// Content of an announcement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Content {
    /// Plain-text variants, one per locale
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_list: Option<Vec<Text>>,
    /// SSML variants, one per locale
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssml_list: Option<Vec<Ssml>>,
    /// Audio variants, one per locale
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_list: Option<Vec<Audio>>,
}

impl Content {
    /// Create empty content.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one plain-text variant, allocating the backing list on first
    /// use.
    #[must_use]
    pub fn with_text(mut self, text: Text) -> Self {
        self.text_list.get_or_insert_with(Vec::new).push(text);
        self
    }

    /// Append one SSML variant.
    #[must_use]
    pub fn with_ssml(mut self, ssml: Ssml) -> Self {
        self.ssml_list.get_or_insert_with(Vec::new).push(ssml);
        self
    }

    /// Append one audio variant.
    #[must_use]
    pub fn with_audio(mut self, audio: Audio) -> Self {
        self.audio_list.get_or_insert_with(Vec::new).push(audio);
        self
    }
}

impl fmt::Display for Content {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.list("TextList", &self.text_list)?;
        w.list("SsmlList", &self.ssml_list)?;
        w.list("AudioList", &self.audio_list)?;
        w.end()
    }
}

/// A plain-text announcement variant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Text {
    /// Locale of the text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<Locale>,
    /// The text to speak
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Text {
    /// Create a text variant with both parts set.
    #[must_use]
    pub fn new(locale: Locale, value: impl Into<String>) -> Self {
        Self {
            locale: Some(locale),
            value: Some(value.into()),
        }
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("Locale", &self.locale)?;
        w.field("Value", &self.value)?;
        w.end()
    }
}

/// An SSML announcement variant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Ssml {
    /// Locale of the markup
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<Locale>,
    /// The SSML document to render
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Ssml {
    /// Create an SSML variant with both parts set.
    #[must_use]
    pub fn new(locale: Locale, value: impl Into<String>) -> Self {
        Self {
            locale: Some(locale),
            value: Some(value.into()),
        }
    }
}

impl fmt::Display for Ssml {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("Locale", &self.locale)?;
        w.field("Value", &self.value)?;
        w.end()
    }
}

/// An audio announcement variant.
///
/// The service accepts single-channel MP3 at 24 kbps or higher, fetched
/// from an HTTPS location.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Audio {
    /// Locale of the audio
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<Locale>,
    /// HTTPS location of the audio file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl Audio {
    /// Create an audio variant with both parts set.
    #[must_use]
    pub fn new(locale: Locale, location: impl Into<String>) -> Self {
        Self {
            locale: Some(locale),
            location: Some(location.into()),
        }
    }
}

impl fmt::Display for Audio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = WireBody::begin(f)?;
        w.field("Locale", &self.locale)?;
        w.field("Location", &self.location)?;
        w.end()
    }
}
