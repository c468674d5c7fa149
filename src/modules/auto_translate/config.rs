/// Settings for automatic translation
///
/// Read from the `Translation:Auto` configuration section. Flat keys follow
/// the host's configuration conventions: `:` separated sections, list
/// entries by index (`Translation:Auto:ExcludeSets:0`), and `__` accepted in
/// place of `:` for environment variables.
use crate::modules::content::EventKind;
use crate::modules::translation::domain::{ProviderKey, SetId};
use crate::shared::errors::{AppError, AppResult};
use serde::Deserialize;
use std::collections::BTreeMap;
use uuid::Uuid;

/// Key of the built-in machine translation provider, used when no provider is configured
pub const DEFAULT_PROVIDER_KEY: ProviderKey =
    ProviderKey::from_uuid(Uuid::from_u128(0xF9CD9683_5F0A_4407_9E5D_BD7295FEFEB1));

const SECTION: &str = "translation:auto:";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct AutoTranslateSettings {
    pub on_save: bool,
    pub on_publish: bool,
    pub provider: ProviderKey,
    pub exclude_sets: Vec<SetId>,
    /// Culture display names never auto-translated to
    pub exclude_cultures: Vec<String>,
}

impl Default for AutoTranslateSettings {
    fn default() -> Self {
        Self {
            on_save: false,
            on_publish: false,
            provider: DEFAULT_PROVIDER_KEY,
            exclude_sets: Vec::new(),
            exclude_cultures: Vec::new(),
        }
    }
}

#[derive(Deserialize, Default)]
struct ConfigRoot {
    #[serde(rename = "Translation", default)]
    translation: TranslationSection,
}

#[derive(Deserialize, Default)]
struct TranslationSection {
    #[serde(rename = "Auto", default)]
    auto: AutoTranslateSettings,
}

impl AutoTranslateSettings {
    /// Whether the pipeline runs for this kind of event
    pub fn is_enabled_for(&self, kind: EventKind) -> bool {
        match kind {
            EventKind::Saved => self.on_save,
            EventKind::Published => self.on_publish,
        }
    }

    /// Read settings from a JSON configuration document
    pub fn from_json(json: &str) -> AppResult<Self> {
        let root: ConfigRoot = serde_json::from_str(json)?;
        Ok(root.translation.auto)
    }

    /// Read settings from the process environment, loading `.env` first
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_key_values(std::env::vars())
    }

    /// Read settings from flat configuration keys
    ///
    /// Keys outside the `Translation:Auto` section are ignored.
    pub fn from_key_values<I, K, V>(pairs: I) -> AppResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut settings = Self::default();
        let mut exclude_sets = BTreeMap::new();
        let mut exclude_cultures = BTreeMap::new();

        for (key, value) in pairs {
            let key = key.as_ref().replace("__", ":").to_ascii_lowercase();
            let Some(name) = key.strip_prefix(SECTION) else {
                continue;
            };
            let value = value.as_ref().trim();

            match name.split_once(':') {
                None => match name {
                    "onsave" => settings.on_save = parse_bool(value)?,
                    "onpublish" => settings.on_publish = parse_bool(value)?,
                    "provider" => settings.provider = value.parse()?,
                    "excludesets" => {
                        for (index, id) in split_list(value).enumerate() {
                            exclude_sets.insert(index, SetId(id.parse()?));
                        }
                    }
                    "excludecultures" => {
                        for (index, culture) in split_list(value).enumerate() {
                            exclude_cultures.insert(index, culture.to_string());
                        }
                    }
                    _ => {}
                },
                Some(("excludesets", index)) => {
                    exclude_sets.insert(parse_index(index)?, SetId(value.parse()?));
                }
                Some(("excludecultures", index)) => {
                    exclude_cultures.insert(parse_index(index)?, value.to_string());
                }
                Some(_) => {}
            }
        }

        settings.exclude_sets = exclude_sets.into_values().collect();
        settings.exclude_cultures = exclude_cultures.into_values().collect();

        Ok(settings)
    }
}

fn parse_bool(value: &str) -> AppResult<bool> {
    Ok(value.to_ascii_lowercase().parse::<bool>()?)
}

fn parse_index(index: &str) -> AppResult<usize> {
    index
        .parse()
        .map_err(|_| AppError::ConfigurationError(format!("Invalid list index '{}'", index)))
}

fn split_list(value: &str) -> impl Iterator<Item = &str> {
    value.split(',').map(str::trim).filter(|item| !item.is_empty())
}
