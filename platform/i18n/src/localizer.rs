use std::sync::Arc;

use tracing::{debug, warn};

use crate::{Catalog, DEFAULT_LANGUAGE, interpolate};

/// External value naming the active language (a locale attribute, an env
/// var, a settings entry). Read once at startup, written on every switch.
pub trait LanguageSignal {
    fn read(&self) -> Option<String>;
    fn write(&mut self, lang: &str);
}

/// Signal held in memory.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StaticSignal(Option<String>);

impl StaticSignal {
    pub fn new(lang: impl Into<String>) -> Self {
        Self(Some(lang.into()))
    }

    pub fn unset() -> Self {
        Self(None)
    }

    pub fn value(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl LanguageSignal for StaticSignal {
    fn read(&self) -> Option<String> {
        self.0.clone()
    }

    fn write(&mut self, lang: &str) {
        self.0 = Some(lang.to_string());
    }
}

/// Outcome of choosing a language.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LanguageSelection {
    Applied { active: String },
    /// The requested language has no table; `active` was kept or defaulted.
    Unsupported {
        requested: Option<String>,
        active: String,
    },
}

impl LanguageSelection {
    pub fn active(&self) -> &str {
        match self {
            Self::Applied { active } | Self::Unsupported { active, .. } => active,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Unsupported { .. })
    }
}

/// Translation context: a shared catalog plus this context's current language.
#[derive(Debug, Clone)]
pub struct Localizer<S = StaticSignal> {
    catalog: Arc<Catalog>,
    current: String,
    signal: S,
    startup: LanguageSelection,
}

impl<S: LanguageSignal> Localizer<S> {
    /// Reads `signal` once to pick the starting language, defaulting to `en`.
    pub fn new(catalog: Arc<Catalog>, signal: S) -> Self {
        let requested = signal.read().filter(|lang| !lang.trim().is_empty());
        let startup = match requested {
            Some(lang) if catalog.supports(lang.trim()) => LanguageSelection::Applied {
                active: lang.trim().to_string(),
            },
            requested => {
                warn!(
                    requested = requested.as_deref().unwrap_or("<unset>"),
                    fallback = DEFAULT_LANGUAGE,
                    "translations for requested language not found; falling back"
                );
                LanguageSelection::Unsupported {
                    requested,
                    active: DEFAULT_LANGUAGE.to_string(),
                }
            }
        };
        Self {
            catalog,
            current: startup.active().to_string(),
            signal,
            startup,
        }
    }

    /// How the starting language was chosen.
    pub fn startup(&self) -> &LanguageSelection {
        &self.startup
    }

    pub fn current_language(&self) -> &str {
        &self.current
    }

    pub fn supported_languages(&self) -> Vec<&str> {
        self.catalog.languages()
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn signal(&self) -> &S {
        &self.signal
    }

    /// Resolve `key` in the current language and substitute `{{name}}`
    /// placeholders. Missing or empty entries resolve to `key` itself.
    pub fn translate(&self, key: &str, params: &[(&str, &str)]) -> String {
        let template = self
            .catalog
            .table(&self.current)
            .and_then(|table| table.get(key))
            .filter(|template| !template.is_empty())
            .unwrap_or(key);
        interpolate(template, params)
    }

    /// Shorthand for [`Localizer::translate`] without parameters.
    pub fn t(&self, key: &str) -> String {
        self.translate(key, &[])
    }

    /// Switch languages. Unknown codes leave the current language untouched.
    /// Strings produced earlier are not updated; callers re-translate.
    pub fn set_language(&mut self, lang: &str) -> LanguageSelection {
        if self.catalog.supports(lang) {
            self.current = lang.to_string();
            self.signal.write(lang);
            debug!(lang, "language changed");
            LanguageSelection::Applied {
                active: self.current.clone(),
            }
        } else {
            warn!(requested = lang, active = %self.current, "attempted to set unsupported language");
            LanguageSelection::Unsupported {
                requested: Some(lang.to_string()),
                active: self.current.clone(),
            }
        }
    }
}
