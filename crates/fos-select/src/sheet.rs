//! Stylesheet registration options
//!
//! Validated parameters passed to the engine when a stylesheet is added.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::SelectError;

/// CSS language level a stylesheet is parsed at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CssLevel {
    Level1,
    Level2,
    Level21,
    #[default]
    Level3,
}

impl CssLevel {
    pub fn parse(s: &str) -> crate::Result<Self> {
        match s {
            "1" => Ok(Self::Level1),
            "2" => Ok(Self::Level2),
            "2.1" => Ok(Self::Level21),
            "3" => Ok(Self::Level3),
            other => Err(SelectError::InvalidArgument(format!(
                "invalid CSS level {:?}; accepted values are \"1\", \"2\", \"2.1\" and \"3\"",
                other
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Level1 => "1",
            Self::Level2 => "2",
            Self::Level21 => "2.1",
            Self::Level3 => "3",
        }
    }
}

/// Where a stylesheet comes from, for cascade ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Origin {
    UserAgent,
    User,
    #[default]
    Author,
}

impl Origin {
    pub fn parse(s: &str) -> crate::Result<Self> {
        match s {
            "ua" | "UA" | "user agent" | "user-agent" => Ok(Self::UserAgent),
            "user" => Ok(Self::User),
            "author" => Ok(Self::Author),
            other => Err(SelectError::InvalidArgument(format!(
                "invalid stylesheet origin {:?}",
                other
            ))),
        }
    }
}

/// Media type a stylesheet applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MediaType {
    All,
    Tv,
    Tty,
    Aural,
    Print,
    Screen,
    Speech,
    Braille,
    Embossed,
    Handheld,
    Projection,
}

impl MediaType {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "all" => Some(Self::All),
            "tv" => Some(Self::Tv),
            "tty" => Some(Self::Tty),
            "aural" => Some(Self::Aural),
            "print" => Some(Self::Print),
            "screen" => Some(Self::Screen),
            "speech" => Some(Self::Speech),
            "braille" => Some(Self::Braille),
            "embossed" => Some(Self::Embossed),
            "handheld" => Some(Self::Handheld),
            "projection" => Some(Self::Projection),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Tv => "tv",
            Self::Tty => "tty",
            Self::Aural => "aural",
            Self::Print => "print",
            Self::Screen => "screen",
            Self::Speech => "speech",
            Self::Braille => "braille",
            Self::Embossed => "embossed",
            Self::Handheld => "handheld",
            Self::Projection => "projection",
        }
    }
}

/// Non-empty set of media types
///
/// Serialized in its comma-separated text form, so deserializing goes
/// through [`MediaList::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MediaList(Vec<MediaType>);

impl MediaList {
    pub fn single(media: MediaType) -> Self {
        Self(vec![media])
    }

    /// Parse a comma-separated list such as `"screen,print"`.
    ///
    /// Whitespace is not allowed anywhere in the list.
    pub fn parse(s: &str) -> crate::Result<Self> {
        let mut media = Vec::new();
        for token in s.split(',') {
            let parsed = MediaType::parse(token).ok_or_else(|| {
                SelectError::InvalidArgument(format!("invalid media type {:?} in {:?}", token, s))
            })?;
            if !media.contains(&parsed) {
                media.push(parsed);
            }
        }
        Ok(Self(media))
    }

    /// Whether a query for `target` media is covered by this list
    pub fn applies_to(&self, target: MediaType) -> bool {
        self.0
            .iter()
            .any(|m| *m == MediaType::All || *m == target || target == MediaType::All)
    }

    pub fn iter(&self) -> impl Iterator<Item = MediaType> + '_ {
        self.0.iter().copied()
    }
}

impl Default for MediaList {
    fn default() -> Self {
        Self::single(MediaType::All)
    }
}

impl TryFrom<String> for MediaList {
    type Error = SelectError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<MediaList> for String {
    fn from(media: MediaList) -> Self {
        media.to_string()
    }
}

impl fmt::Display for MediaList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, media) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            f.write_str(media.as_str())?;
        }
        Ok(())
    }
}

/// Options for adding a stylesheet
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetOptions {
    pub level: CssLevel,
    pub origin: Origin,
    pub media: MediaList,
    /// Base URL for relative references; empty if none
    pub url: String,
}

impl SheetOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_level(mut self, level: CssLevel) -> Self {
        self.level = level;
        self
    }

    pub fn with_origin(mut self, origin: Origin) -> Self {
        self.origin = origin;
        self
    }

    pub fn with_media(mut self, media: MediaList) -> Self {
        self.media = media;
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Build options from their textual forms; `None` keeps the default
    pub fn from_strings(
        level: Option<&str>,
        origin: Option<&str>,
        media: Option<&str>,
        url: Option<&str>,
    ) -> crate::Result<Self> {
        let mut options = Self::default();
        if let Some(level) = level {
            options.level = CssLevel::parse(level)?;
        }
        if let Some(origin) = origin {
            options.origin = Origin::parse(origin)?;
        }
        if let Some(media) = media {
            options.media = MediaList::parse(media)?;
        }
        if let Some(url) = url {
            options.url = url.to_string();
        }
        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = SheetOptions::default();
        assert_eq!(options.level, CssLevel::Level3);
        assert_eq!(options.origin, Origin::Author);
        assert_eq!(options.media, MediaList::single(MediaType::All));
        assert!(options.url.is_empty());
    }

    #[test]
    fn test_level_parse() {
        assert_eq!(CssLevel::parse("2.1").unwrap(), CssLevel::Level21);
        assert!(matches!(CssLevel::parse("4"), Err(SelectError::InvalidArgument(_))));
    }

    #[test]
    fn test_origin_aliases() {
        for alias in ["ua", "UA", "user agent", "user-agent"] {
            assert_eq!(Origin::parse(alias).unwrap(), Origin::UserAgent);
        }
        assert_eq!(Origin::parse("user").unwrap(), Origin::User);
        assert!(Origin::parse("Author").is_err());
    }

    #[test]
    fn test_media_list() {
        let media = MediaList::parse("screen,print").unwrap();
        assert_eq!(media.to_string(), "screen,print");
        assert!(media.applies_to(MediaType::Print));
        assert!(!media.applies_to(MediaType::Speech));
        assert!(MediaList::default().applies_to(MediaType::Tv));
    }

    #[test]
    fn test_media_list_rejects_whitespace_and_empty() {
        assert!(MediaList::parse("screen, print").is_err());
        assert!(MediaList::parse("").is_err());
        assert!(MediaList::parse("screen,,print").is_err());
    }

    #[test]
    fn test_media_list_deserialize_validates() {
        use serde::de::IntoDeserializer;
        use serde::de::value::{Error, StringDeserializer};

        let de = |s: &str| -> StringDeserializer<Error> { s.to_string().into_deserializer() };

        let media = MediaList::deserialize(de("print,screen")).unwrap();
        assert_eq!(media, MediaList::parse("print,screen").unwrap());
        assert!(MediaList::deserialize(de("")).is_err());
        assert!(MediaList::deserialize(de("screen, print")).is_err());
        assert!(MediaList::deserialize(de("hologram")).is_err());
        assert_eq!(String::from(media), "print,screen");
    }

    #[test]
    fn test_from_strings() {
        let options =
            SheetOptions::from_strings(Some("2"), Some("user"), Some("screen"), Some("http://a/")).unwrap();
        assert_eq!(options.level, CssLevel::Level2);
        assert_eq!(options.origin, Origin::User);
        assert_eq!(options.media.to_string(), "screen");
        assert_eq!(options.url, "http://a/");

        assert!(SheetOptions::from_strings(Some("9"), None, None, None).is_err());
    }
}
