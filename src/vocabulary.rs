use std::collections::BTreeMap;
use std::fmt::Display;
use std::fmt::Formatter;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;
use tracing::instrument;

use crate::error::Error;
use crate::error::Result;

mod builtin;

/// A named slot that a template fills with one word drawn from its list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Pose,
    Location,
    Outfit,
    Lighting,
    PhysiqueDetail,
    SkinDetail,
    Camera,
    ExplicitDescriptor,
}

impl Category {
    /// Categories used by every template.
    pub const BASE: [Category; 7] = [
        Category::Pose,
        Category::Location,
        Category::Outfit,
        Category::Lighting,
        Category::PhysiqueDetail,
        Category::SkinDetail,
        Category::Camera,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Category::Pose => "pose",
            Category::Location => "location",
            Category::Outfit => "outfit",
            Category::Lighting => "lighting",
            Category::PhysiqueDetail => "physique_detail",
            Category::SkinDetail => "skin_detail",
            Category::Camera => "camera",
            Category::ExplicitDescriptor => "explicit_descriptor",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Word lists keyed by category.
///
/// Lists may be empty or absent while the vocabulary is being assembled; [`Vocabulary::validate`]
/// checks the categories a run actually needs before anything is drawn from them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Vocabulary {
    words: BTreeMap<Category, Vec<String>>,
}

impl Vocabulary {
    /// The lists the generator ships with.
    pub fn builtin() -> Self {
        builtin::LISTS
            .iter()
            .map(|(category, words)| (*category, words.iter().map(ToString::to_string)))
            .collect()
    }

    /// Read a JSON object of `category -> [word, ...]` from `path`.
    #[instrument]
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| Error::ReadVocabulary {
            path: path.to_owned(),
            source,
        })?;
        let vocabulary: Self =
            serde_json::from_str(&text).map_err(|source| Error::ParseVocabulary {
                path: path.to_owned(),
                source,
            })?;
        debug!(categories = vocabulary.words.len(), "loaded vocabulary");
        Ok(vocabulary)
    }

    /// Replace the lists of every category present in `other`, keeping the rest.
    #[must_use]
    pub fn overlay(mut self, other: Vocabulary) -> Self {
        self.words.extend(other.words);
        self
    }

    /// Replace a single category's list.
    #[cfg(test)]
    #[must_use]
    pub fn with<I, S>(mut self, category: Category, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.words
            .insert(category, words.into_iter().map(Into::into).collect());
        self
    }

    /// The list for `category`; empty if the category is absent.
    pub fn get(&self, category: Category) -> &[String] {
        self.words
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Check that no category is empty and every category in `required` is present.
    pub fn validate(&self, required: impl IntoIterator<Item = Category>) -> Result<()> {
        if let Some((&category, _)) = self.words.iter().find(|(_, words)| words.is_empty()) {
            return Err(Error::EmptyCategory(category));
        }
        for category in required {
            if !self.words.contains_key(&category) {
                return Err(Error::MissingCategory(category));
            }
        }
        Ok(())
    }
}

impl<I, S> FromIterator<(Category, I)> for Vocabulary
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (Category, I)>>(iter: T) -> Self {
        let words = iter
            .into_iter()
            .map(|(category, words)| (category, words.into_iter().map(Into::into).collect()))
            .collect();
        Self { words }
    }
}
