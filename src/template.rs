use rand::Rng;
use rand::seq::IndexedRandom;

use crate::error::Error;
use crate::error::Result;
use crate::vocabulary::Category;
use crate::vocabulary::Vocabulary;

const PREFIX: &str = "ultra-realistic Instagram fitness model";
const SEPARATOR: &str = ", ";

/// A sentence pattern: a fixed prefix, one slot per category, a fixed suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    Standard,
    /// The standard slots plus an explicit descriptor after the physique detail.
    Extended,
}

impl Template {
    pub fn slots(self) -> &'static [Category] {
        match self {
            Template::Standard => &[
                Category::Pose,
                Category::Location,
                Category::Outfit,
                Category::PhysiqueDetail,
                Category::Lighting,
                Category::Camera,
                Category::SkinDetail,
            ],
            Template::Extended => &[
                Category::Pose,
                Category::Location,
                Category::Outfit,
                Category::PhysiqueDetail,
                Category::ExplicitDescriptor,
                Category::Lighting,
                Category::Camera,
                Category::SkinDetail,
            ],
        }
    }

    pub fn suffix(self) -> &'static str {
        match self {
            Template::Standard => "8k uhd, detailed hands and face",
            Template::Extended => "8k uhd, detailed anatomy",
        }
    }

    /// Fill the slots with `words`, given in slot order.
    pub fn render<S: AsRef<str>>(self, words: &[S]) -> String {
        debug_assert_eq!(words.len(), self.slots().len());
        let mut line = String::from(PREFIX);
        for word in words {
            line.push_str(SEPARATOR);
            line.push_str(word.as_ref());
        }
        line.push_str(SEPARATOR);
        line.push_str(self.suffix());
        line
    }

    /// Draw one word per slot, uniformly and with replacement, and render the line.
    ///
    /// Fails with [`Error::EmptyCategory`] if a slot has nothing to draw from.
    pub fn rand(self, rng: &mut impl Rng, vocabulary: &Vocabulary) -> Result<String> {
        let words = self
            .slots()
            .iter()
            .map(|&category| {
                vocabulary
                    .get(category)
                    .choose(&mut *rng)
                    .map(String::as_str)
                    .ok_or(Error::EmptyCategory(category))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(self.render(&words))
    }

    /// Split a rendered line back into its slot words, if it has this template's shape.
    #[cfg(test)]
    pub fn parse(self, line: &str) -> Option<Vec<&str>> {
        let body = line
            .strip_prefix(PREFIX)?
            .strip_prefix(SEPARATOR)?
            .strip_suffix(self.suffix())?
            .strip_suffix(SEPARATOR)?;
        let words: Vec<&str> = body.split(SEPARATOR).collect();
        (words.len() == self.slots().len()).then_some(words)
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn standard_render_matches_fixed_layout() {
        let line = Template::Standard.render(&[
            "squat pose",
            "home gym",
            "gym outfit",
            "toned arms",
            "natural lighting",
            "iPhone candid",
            "glowing skin",
        ]);
        assert_eq!(
            line,
            "ultra-realistic Instagram fitness model, squat pose, home gym, gym outfit, \
             toned arms, natural lighting, iPhone candid, glowing skin, \
             8k uhd, detailed hands and face"
        );
    }

    #[test]
    fn extended_puts_descriptor_after_physique() {
        let slots = Template::Extended.slots();
        let physique = slots
            .iter()
            .position(|&c| c == Category::PhysiqueDetail)
            .unwrap();
        assert_eq!(slots[physique + 1], Category::ExplicitDescriptor);
        assert_eq!(slots[physique + 2], Category::Lighting);
    }

    #[test]
    fn rand_draws_from_slot_lists() {
        let vocabulary = Vocabulary::builtin();
        let mut rng = StdRng::seed_from_u64(7);
        for template in [Template::Standard, Template::Extended] {
            for _ in 0..200 {
                let line = template.rand(&mut rng, &vocabulary).unwrap();
                assert!(line.ends_with(template.suffix()));
                let words = template.parse(&line).unwrap();
                for (word, &category) in words.iter().zip(template.slots()) {
                    assert!(
                        vocabulary.get(category).iter().any(|w| w == word),
                        "{word:?} is not a {category}"
                    );
                }
            }
        }
    }

    #[test]
    fn parse_rejects_other_template() {
        let vocabulary = Vocabulary::builtin();
        let mut rng = StdRng::seed_from_u64(1);
        let line = Template::Standard.rand(&mut rng, &vocabulary).unwrap();
        assert!(Template::Extended.parse(&line).is_none());
    }

    #[test]
    fn rand_reports_empty_slot_instead_of_panicking() {
        let vocabulary = Vocabulary::builtin().with(Category::Camera, Vec::<String>::new());
        let mut rng = StdRng::seed_from_u64(1);
        let error = Template::Standard.rand(&mut rng, &vocabulary).unwrap_err();
        assert!(matches!(error, Error::EmptyCategory(Category::Camera)));

        let error = Template::Extended
            .rand(&mut rng, &Vocabulary::default())
            .unwrap_err();
        assert!(matches!(error, Error::EmptyCategory(Category::Pose)));
    }
}
