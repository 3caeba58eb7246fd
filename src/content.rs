//! Static copy of the page.
//!
//! The built-in [`PaperContent::default`] is the published text; a config file may
//! override any part of it.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "serde")]
use crate::error::SiteError;

/// Every section falls back to its published text, so an override only needs the
/// fields it changes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PaperContent {
    pub meta: Meta,
    pub hero: Hero,
    pub introduction: Introduction,
    pub methodology: Methodology,
    pub innovation: Innovation,
    pub results: Results,
    pub leaderboard: Leaderboard,
    pub impact: Impact,
    pub team: Team,
    pub authors: Vec<Author>,
    pub footer_note: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Meta {
    pub title: String,
    pub subtitle: String,
    pub venue: String,
    pub date: String,
    pub paper_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Hero {
    pub title: String,
    pub subtitle: String,
    pub description: String,
}

/// Heading plus two paragraphs; the shape of the introduction, methodology and
/// innovation sections.
macro_rules! prose_section {
    ($name:ident, $heading:expr, $first:expr, $second:expr $(,)?) => {
        #[derive(Debug, Clone, PartialEq, Eq)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        #[cfg_attr(feature = "serde", serde(default))]
        pub struct $name {
            pub heading: String,
            pub first: String,
            pub second: String,
        }

        impl Default for $name {
            fn default() -> Self {
                Self {
                    heading: s($heading),
                    first: s($first),
                    second: s($second),
                }
            }
        }
    };
}

prose_section!(
    Introduction,
    "The Challenge",
    "The CheckThat! Lab aims to support human fact-checkers by verifying social media text. Task 2 focuses on extracting the main claim from a post in succinct, neutral language suitable for manual verification.",
    "We identify unique challenges such as missing multi-modal content (images), sarcasm, and the risk of 'hallucinations', where models invent plausible but incorrect details not present in the source text.",
);

prose_section!(
    Methodology,
    "Hybrid Methodology",
    "We explored the design space across three categories: Fine-tuning approaches (Flan-T5, DeepSeek), Prompting strategies (Few-shot, Chain-of-Thought), and 'Frustratingly Easy' baselines.",
    "Our fine-tuning approach (visualized right) adapts the weights of smaller models like FLAN-T5 (783M parameters) to mimic the specific extraction patterns of the training data, contrasting with the frozen weights of prompted giant models.",
);

prose_section!(
    Innovation,
    "Key Innovation",
    "We discovered a critical disconnect between automated metrics and human utility. While fine-tuned Flan-T5 achieved the highest METEOR score (0.56), it often produced overly literal extractions.",
    "Conversely, prompting larger models with 'Self-Refinement' loops yielded lower automated scores but generated claims that better captured the underlying intent and nuance of sarcastic posts.",
);

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Results {
    pub heading: String,
    pub description: String,
    pub chart_description: String,
    pub baseline_label: String,
    pub proposed_label: String,
    pub metric_name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Award {
    #[default]
    Trophy,
    Medal,
}

impl Award {
    pub fn icon(self) -> &'static str {
        match self {
            Award::Trophy => "🏆",
            Award::Medal => "🏅",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Achievement {
    pub rank: String,
    pub entity: String,
    pub detail: String,
    pub award: Award,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Leaderboard {
    pub heading: String,
    pub description: String,
    pub achievements: Vec<Achievement>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Impact {
    pub heading: String,
    pub first: String,
    pub second: String,
    pub quote: String,
    pub quote_attribution: String,
    pub scene_caption: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Team {
    pub institution: String,
    pub program: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Author {
    pub name: String,
    pub role: String,
    /// Staggered fade-in delay for the author card, in milliseconds.
    pub delay_ms: u32,
}

fn s(text: &str) -> String {
    text.to_string()
}

impl Default for Meta {
    fn default() -> Self {
        Self {
            title: s("UNH at CheckThat! 2025"),
            subtitle: s("Fine-tuning Vs Prompting in Claim Extraction"),
            venue: s("CLEF 2025 Working Notes"),
            date: s("September 2025"),
            paper_url: s("https://ceur-ws.org/Vol-4038/paper_103.pdf"),
        }
    }
}

impl Default for Hero {
    fn default() -> Self {
        Self {
            title: s("Claim Extraction"),
            subtitle: s("Fine-tuning Small Models vs. Prompting Giants"),
            description: s("An empirical study exploring the trade-offs between fine-tuning FLAN-T5 and prompting Large Language Models (LLMs) like LLaMA and Grok for automated fact-checking support."),
        }
    }
}

impl Default for Results {
    fn default() -> Self {
        Self {
            heading: s("Experimental Results"),
            description: s("We evaluated methods using METEOR scores on the validation set. Fine-tuning smaller models outperformed zero-shot prompting of massive models on this metric, setting a high benchmark despite qualitative limitations."),
            chart_description: s("Fine-tuning the smaller FLAN-T5 model yielded significantly higher METEOR scores than the baseline, though test set generalization proved more challenging."),
            baseline_label: s("Baseline (Regurgitation)"),
            proposed_label: s("Fine-tuned Flan-T5"),
            metric_name: s("METEOR Score"),
        }
    }
}

impl Default for Leaderboard {
    fn default() -> Self {
        Self {
            heading: s("Global Leaderboard Standing"),
            description: s("Our approaches demonstrated competitive performance on the official CLEF 2025 CheckThat! Task 2 leaderboard, securing top-tier positions against international research teams."),
            achievements: vec![
                Achievement {
                    rank: s("9th"),
                    entity: s("UNH Team (Main)"),
                    detail: s("Achieved with Fine-tuned FLAN-T5, focusing on METEOR score optimization."),
                    award: Award::Trophy,
                },
                Achievement {
                    rank: s("12th"),
                    entity: s("Nikhil Kadapala"),
                    detail: s("Individual submission using 'Claimify' Self-Refinement. Outperformed competitors by focusing on nuance over raw overlap."),
                    award: Award::Medal,
                },
            ],
        }
    }
}

impl Default for Impact {
    fn default() -> Self {
        Self {
            heading: s("Broader Impact"),
            first: s("This work highlights the limitations of current automated evaluation metrics for abstractive tasks. High overlap scores do not always correlate with useful, verifiable claims."),
            second: s("The study demonstrates that while massive LLMs are capable reasoners, smaller, task-specific models can still dominate on structural extraction tasks when resources are constrained."),
            quote: s("Most of our methods converged on a METEOR score of approximately 0.27. The differences between methods only became apparent through manual inspection."),
            quote_attribution: s("Wilder et al., 2025"),
            scene_caption: s("Conceptual visualization of claim extraction"),
        }
    }
}

impl Default for Team {
    fn default() -> Self {
        Self {
            institution: s("University of New Hampshire"),
            program: s("CS881 Graduate Course & CRA UR2PhD Program"),
        }
    }
}

impl Default for PaperContent {
    fn default() -> Self {
        Self {
            meta: Meta::default(),
            hero: Hero::default(),
            introduction: Introduction::default(),
            methodology: Methodology::default(),
            innovation: Innovation::default(),
            results: Results::default(),
            leaderboard: Leaderboard::default(),
            impact: Impact::default(),
            team: Team::default(),
            authors: default_authors(),
            footer_note: s("Based on research published in CLEF 2025 Working Notes."),
        }
    }
}

fn default_authors() -> Vec<Author> {
    let author = |name: &str, role: &str, delay_ms| Author {
        name: s(name),
        role: s(role),
        delay_ms,
    };
    vec![
        author("Joe Wilder", "Primary Author", 0),
        author("Nikhil Kadapala", "Contributor", 100),
        author("Benji Xu", "Contributor", 200),
        author("Laura Dietz", "Supervisor", 300),
    ]
}


#[cfg(feature = "serde")]
impl PaperContent {
    pub fn to_json(&self, pretty: bool) -> Result<String, SiteError> {
        let text = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_copy_matches_the_paper() {
        let c = PaperContent::default();
        assert_eq!(c.meta.title, "UNH at CheckThat! 2025");
        assert_eq!(c.leaderboard.achievements.len(), 2);
        assert_eq!(c.leaderboard.achievements[0].rank, "9th");
        assert_eq!(c.leaderboard.achievements[1].award, Award::Medal);
        let names: Vec<_> = c.authors.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["Joe Wilder", "Nikhil Kadapala", "Benji Xu", "Laura Dietz"]);
        assert!(c.authors.windows(2).all(|w| w[0].delay_ms < w[1].delay_ms));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn partial_override_keeps_other_fields() {
        let json = r#"{ "hero": { "title": "Claims" }, "authors": [] }"#;
        let c: PaperContent = serde_json::from_str(json).expect("valid json");
        let published = PaperContent::default();
        assert_eq!(c.hero.title, "Claims");
        assert_eq!(c.hero.subtitle, published.hero.subtitle);
        assert_eq!(c.hero.description, published.hero.description);
        assert!(c.authors.is_empty());
        assert_eq!(c.meta, published.meta);
        assert_eq!(c.footer_note, published.footer_note);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn section_override_keeps_its_own_published_text() {
        let json = r#"{
            "methodology": { "heading": "Approach" },
            "leaderboard": { "description": "Top ten." },
            "impact": { "quote": "Inspect by hand." }
        }"#;
        let c: PaperContent = serde_json::from_str(json).expect("valid json");
        let published = PaperContent::default();

        assert_eq!(c.methodology.heading, "Approach");
        assert_eq!(c.methodology.first, published.methodology.first);
        assert_ne!(c.methodology.first, published.introduction.first);
        assert_eq!(c.introduction, published.introduction);
        assert_eq!(c.leaderboard.achievements, published.leaderboard.achievements);
        assert_eq!(c.impact.quote_attribution, "Wilder et al., 2025");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn json_export_round_trips() {
        let c = PaperContent::default();
        let text = c.to_json(true).expect("encodes");
        assert!(text.contains("\"award\": \"trophy\""));
        let back: PaperContent = serde_json::from_str(&text).expect("decodes");
        assert_eq!(back, c);
    }
}
