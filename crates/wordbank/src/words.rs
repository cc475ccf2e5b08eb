use serde::Deserialize;

/// A word ready to be played, with whatever metadata the upstream supplied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordWithDetails {
    pub word: String,
    pub audio_url: Option<String>,
    pub definition: Option<String>,
    pub example_sentence: Option<String>,
}

impl WordWithDetails {
    /// A word is playable only when it carries a non-empty pronunciation link.
    pub fn has_audio(&self) -> bool {
        self.audio_url
            .as_deref()
            .is_some_and(|audio| !audio.is_empty())
    }
}

#[derive(Debug, Deserialize)]
pub struct DictionaryEntry {
    pub word: String,
    #[serde(default)]
    pub phonetics: Vec<Phonetic>,
    #[serde(default)]
    pub meanings: Vec<Meaning>,
}

#[derive(Debug, Deserialize)]
pub struct Phonetic {
    #[serde(default)]
    pub audio: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Meaning {
    #[serde(default)]
    pub definitions: Vec<Definition>,
}

#[derive(Debug, Deserialize)]
pub struct Definition {
    pub definition: String,
    #[serde(default)]
    pub example: Option<String>,
}

/// Envelope returned by the leveled catalog.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogResponse {
    pub min_level: u32,
    pub max_level: u32,
    pub count: usize,
    pub words: Vec<RawCatalogItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCatalogItem {
    pub word: String,
    pub level: u32,
    #[serde(default)]
    pub audio_url: Option<String>,
    #[serde(default)]
    pub definition: Option<String>,
    #[serde(default)]
    pub example: Option<String>,
}

impl From<RawCatalogItem> for WordWithDetails {
    fn from(item: RawCatalogItem) -> Self {
        Self {
            word: item.word,
            audio_url: item.audio_url,
            definition: item.definition,
            example_sentence: item.example,
        }
    }
}
