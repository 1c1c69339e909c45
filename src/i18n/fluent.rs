// SPDX-License-Identifier: MPL-2.0
use crate::config::Config;
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, None, &Config::default())
    }
}

impl I18n {
    /// Builds the localization table from the embedded `.ftl` resources,
    /// or from `i18n_dir` when a custom build overrides them on disk.
    pub fn new(cli_lang: Option<String>, i18n_dir: Option<String>, config: &Config) -> Self {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        let sources = collect_sources(i18n_dir.as_deref());
        for (locale_str, content) in sources {
            if let Ok(locale) = locale_str.parse::<LanguageIdentifier>() {
                if let Ok(res) = FluentResource::try_new(content) {
                    let mut bundle = FluentBundle::new(vec![locale.clone()]);
                    // Iced text widgets do not need Unicode isolation marks
                    // around placeables, and they would leak into labels.
                    bundle.set_use_isolating(false);
                    if bundle.add_resource(res).is_ok() {
                        bundles.insert(locale.clone(), bundle);
                        available_locales.push(locale);
                    }
                }
            }
        }

        let default_locale: LanguageIdentifier = "en-US".parse().unwrap();
        let current_locale =
            resolve_locale(cli_lang, config, &available_locales).unwrap_or(default_locale);

        Self {
            bundles,
            available_locales,
            current_locale,
        }
    }

    pub fn set_locale(&mut self, locale: LanguageIdentifier) {
        if self.bundles.contains_key(&locale) {
            self.current_locale = locale;
        }
    }

    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    pub fn tr(&self, key: &str) -> String {
        self.format(key, None)
    }

    /// Translation with Fluent arguments, used for plural-sensitive
    /// strings like the folder/video counters.
    pub fn tr_with(&self, key: &str, args: &FluentArgs) -> String {
        self.format(key, Some(args))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs>) -> String {
        if let Some(bundle) = self.bundles.get(&self.current_locale) {
            if let Some(msg) = bundle.get_message(key) {
                if let Some(pattern) = msg.value() {
                    let mut errors = vec![];
                    let value = bundle.format_pattern(pattern, args, &mut errors);
                    if errors.is_empty() {
                        return value.to_string();
                    }
                }
            }
        }
        format!("MISSING: {}", key)
    }
}

/// Gathers `.ftl` sources, preferring an on-disk directory override and
/// falling back to the embedded assets.
fn collect_sources(i18n_dir: Option<&str>) -> Vec<(String, String)> {
    if let Some(dir) = i18n_dir {
        if let Ok(read_dir) = std::fs::read_dir(dir) {
            let mut sources = Vec::new();
            for entry in read_dir.flatten() {
                let path = entry.path();
                let Some(stem) = path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .and_then(|n| n.strip_suffix(".ftl"))
                else {
                    continue;
                };
                if let Ok(content) = std::fs::read_to_string(&path) {
                    sources.push((stem.to_string(), content));
                }
            }
            if !sources.is_empty() {
                return sources;
            }
        }
    }

    Asset::iter()
        .filter_map(|file| {
            let filename = file.as_ref();
            let locale = filename.strip_suffix(".ftl")?.to_string();
            let content = Asset::get(filename)?;
            Some((
                locale,
                String::from_utf8_lossy(content.data.as_ref()).to_string(),
            ))
        })
        .collect()
}

fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    // 1. Check CLI args
    if let Some(lang_str) = cli_lang {
        if let Ok(lang) = lang_str.parse::<LanguageIdentifier>() {
            if available.contains(&lang) {
                return Some(lang);
            }
        }
    }

    // 2. Check config file
    if let Some(lang_str) = &config.language {
        if let Ok(lang) = lang_str.parse::<LanguageIdentifier>() {
            if available.contains(&lang) {
                return Some(lang);
            }
        }
    }

    // 3. Check OS locale
    if let Some(os_locale_str) = sys_locale::get_locale() {
        if let Ok(os_lang) = os_locale_str.parse::<LanguageIdentifier>() {
            if available.contains(&os_lang) {
                return Some(os_lang);
            }
        }
    }

    None
}
