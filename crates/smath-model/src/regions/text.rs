/// One language's text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    pub lang: String,
    pub text: String,
}

impl Paragraph {
    pub fn new(lang: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            lang: lang.into(),
            text: text.into(),
        }
    }
}

/// Plain text, optionally in several languages.
///
/// SMath shows the paragraph matching the UI language, falling back to the
/// first one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextRegion {
    pub paragraphs: Vec<Paragraph>,
    pub bold: bool,
}

impl TextRegion {
    /// English text.
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_lang("eng", text)
    }

    pub fn with_lang(lang: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            paragraphs: vec![Paragraph::new(lang, text)],
            bold: false,
        }
    }

    /// `(lang, text)` pairs, kept in the given order.
    pub fn multilingual<I, L, T>(texts: I) -> Self
    where
        I: IntoIterator<Item = (L, T)>,
        L: Into<String>,
        T: Into<String>,
    {
        Self {
            paragraphs: texts
                .into_iter()
                .map(|(lang, text)| Paragraph::new(lang, text))
                .collect(),
            bold: false,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Adds a translation, replacing any existing paragraph for `lang`.
    pub fn set_text(&mut self, lang: impl Into<String>, text: impl Into<String>) {
        let lang = lang.into();
        let text = text.into();
        match self.paragraphs.iter_mut().find(|p| p.lang == lang) {
            Some(existing) => existing.text = text,
            None => self.paragraphs.push(Paragraph { lang, text }),
        }
    }
}
