//! Part-of-speech tagging
//!
//! Words are tagged with the Penn Treebank tag set. Tagging happens on single
//! words without sentence context, so ambiguous words always get the same tag.
//!
//! The bundled [`RuleTagger`] looks a word up in a closed-class lexicon first,
//! then tries an ordered list of suffix patterns (first match wins) and falls
//! back to `NN`.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

/// Tags of the Penn Treebank Project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PennTag {
    Cc,
    Cd,
    Dt,
    Ex,
    Fw,
    In,
    Jj,
    Jjr,
    Jjs,
    Ls,
    Md,
    Nn,
    Nns,
    Nnp,
    Nnps,
    Pdt,
    Pos,
    Prp,
    PrpS,
    Rb,
    Rbr,
    Rbs,
    Rp,
    Sym,
    To,
    Uh,
    Vb,
    Vbd,
    Vbg,
    Vbn,
    Vbp,
    Vbz,
    Wdt,
    Wp,
    WpS,
    Wrb,
}

impl PennTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            PennTag::Cc => "CC",
            PennTag::Cd => "CD",
            PennTag::Dt => "DT",
            PennTag::Ex => "EX",
            PennTag::Fw => "FW",
            PennTag::In => "IN",
            PennTag::Jj => "JJ",
            PennTag::Jjr => "JJR",
            PennTag::Jjs => "JJS",
            PennTag::Ls => "LS",
            PennTag::Md => "MD",
            PennTag::Nn => "NN",
            PennTag::Nns => "NNS",
            PennTag::Nnp => "NNP",
            PennTag::Nnps => "NNPS",
            PennTag::Pdt => "PDT",
            PennTag::Pos => "POS",
            PennTag::Prp => "PRP",
            PennTag::PrpS => "PRP$",
            PennTag::Rb => "RB",
            PennTag::Rbr => "RBR",
            PennTag::Rbs => "RBS",
            PennTag::Rp => "RP",
            PennTag::Sym => "SYM",
            PennTag::To => "TO",
            PennTag::Uh => "UH",
            PennTag::Vb => "VB",
            PennTag::Vbd => "VBD",
            PennTag::Vbg => "VBG",
            PennTag::Vbn => "VBN",
            PennTag::Vbp => "VBP",
            PennTag::Vbz => "VBZ",
            PennTag::Wdt => "WDT",
            PennTag::Wp => "WP",
            PennTag::WpS => "WP$",
            PennTag::Wrb => "WRB",
        }
    }

    /// Human-readable word class
    pub fn description(&self) -> &'static str {
        match self {
            PennTag::Cc => "Coordinating conjunction",
            PennTag::Cd => "Cardinal number",
            PennTag::Dt => "Determiner",
            PennTag::Ex => "Existential there",
            PennTag::Fw => "Foreign word",
            PennTag::In => "Preposition or subordinating conjunction",
            PennTag::Jj => "Adjective",
            PennTag::Jjr => "Adjective, comparative",
            PennTag::Jjs => "Adjective, superlative",
            PennTag::Ls => "List item marker",
            PennTag::Md => "Modal",
            PennTag::Nn => "Noun, singular or mass",
            PennTag::Nns => "Noun, plural",
            PennTag::Nnp => "Proper noun, singular",
            PennTag::Nnps => "Proper noun, plural",
            PennTag::Pdt => "Predeterminer",
            PennTag::Pos => "Possessive ending",
            PennTag::Prp => "Personal pronoun",
            PennTag::PrpS => "Possessive pronoun",
            PennTag::Rb => "Adverb",
            PennTag::Rbr => "Adverb, comparative",
            PennTag::Rbs => "Adverb, superlative",
            PennTag::Rp => "Particle",
            PennTag::Sym => "Symbol",
            PennTag::To => "to",
            PennTag::Uh => "Interjection",
            PennTag::Vb => "Verb, base form",
            PennTag::Vbd => "Verb, past tense",
            PennTag::Vbg => "Verb, gerund or present participle",
            PennTag::Vbn => "Verb, past participle",
            PennTag::Vbp => "Verb, non-3rd person singular present",
            PennTag::Vbz => "Verb, 3rd person singular present",
            PennTag::Wdt => "Wh-determiner",
            PennTag::Wp => "Wh-pronoun",
            PennTag::WpS => "Possessive wh-pronoun",
            PennTag::Wrb => "Wh-adverb",
        }
    }
}

impl fmt::Display for PennTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for PennTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Maps a single word to a part-of-speech tag
pub trait Tagger {
    fn tag(&self, word: &str) -> PennTag;
}

static LEXICON: Lazy<HashMap<&'static str, PennTag>> = Lazy::new(|| {
    let groups: &[(PennTag, &[&str])] = &[
        (PennTag::Cc, &["and", "but", "or", "nor", "yet", "either", "neither", "plus"]),
        (
            PennTag::Cd,
            &[
                "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
                "ten", "eleven", "twelve", "twenty", "thirty", "forty", "fifty", "hundred",
                "thousand", "million", "billion",
            ],
        ),
        (
            PennTag::Dt,
            &[
                "the", "a", "an", "this", "that", "these", "those", "every", "each", "some",
                "any", "no", "another", "all", "both",
            ],
        ),
        (PennTag::Ex, &["there"]),
        (
            PennTag::In,
            &[
                "of", "in", "for", "with", "on", "at", "by", "from", "into", "about", "against",
                "between", "through", "during", "before", "after", "above", "below", "under",
                "over", "since", "until", "while", "because", "if", "although", "though",
                "unless", "whether", "upon", "within", "without", "among", "across", "behind",
                "beyond", "near", "toward", "towards", "like", "than", "as", "per", "via",
                "despite", "throughout", "beneath", "beside", "besides", "onto", "around",
            ],
        ),
        (PennTag::Jjr, &["more", "less", "better", "worse", "greater", "fewer"]),
        (PennTag::Jjs, &["most", "least", "best", "worst"]),
        (
            PennTag::Md,
            &["can", "could", "may", "might", "must", "shall", "should", "will", "would", "ought"],
        ),
        (PennTag::Pdt, &["such", "half", "quite"]),
        (
            PennTag::Prp,
            &[
                "i", "me", "you", "he", "him", "she", "her", "it", "we", "us", "they", "them",
                "myself", "yourself", "himself", "herself", "itself", "ourselves", "yourselves",
                "themselves", "mine", "yours", "hers", "ours", "theirs",
            ],
        ),
        (PennTag::PrpS, &["my", "your", "his", "its", "our", "their"]),
        (
            PennTag::Rb,
            &[
                "not", "very", "too", "also", "just", "never", "always", "often", "here", "now",
                "then", "again", "still", "already", "soon", "rather", "almost", "perhaps",
                "even", "ever", "once", "only", "so", "thus", "indeed", "away", "back", "down",
                "yesterday", "today", "tomorrow", "together", "else", "however",
            ],
        ),
        (PennTag::Rp, &["up", "off", "out"]),
        (PennTag::To, &["to"]),
        (
            PennTag::Uh,
            &["oh", "ah", "alas", "yes", "hello", "hey", "oops", "wow", "hmm", "hush", "amen"],
        ),
        (
            PennTag::Vb,
            &[
                "be", "go", "get", "make", "take", "see", "come", "know", "think", "say", "give",
                "find", "tell",
            ],
        ),
        (
            PennTag::Vbd,
            &[
                "was", "were", "had", "did", "said", "went", "came", "saw", "made", "took",
                "got", "knew", "thought", "told", "gave", "found", "felt", "became", "began",
                "left", "stood", "heard", "sat", "ran", "held", "brought", "wrote", "spoke",
                "kept", "met", "fell", "lay", "rose", "grew", "drew", "threw", "sang", "swam",
            ],
        ),
        (PennTag::Vbg, &["being", "having", "doing"]),
        (
            PennTag::Vbn,
            &[
                "been", "done", "gone", "seen", "known", "taken", "given", "written", "spoken",
                "born", "fallen", "risen", "grown", "drawn", "thrown", "sung", "swum", "broken",
            ],
        ),
        (PennTag::Vbp, &["are", "am", "have", "do"]),
        (PennTag::Vbz, &["is", "has", "does", "says", "goes"]),
        (PennTag::Wdt, &["which", "whatever", "whichever"]),
        (PennTag::Wp, &["who", "whom", "what", "whoever", "whomever"]),
        (PennTag::WpS, &["whose"]),
        (PennTag::Wrb, &["when", "where", "why", "how", "whenever", "wherever"]),
    ];

    let mut lexicon = HashMap::new();
    for (tag, words) in groups {
        for word in *words {
            lexicon.insert(*word, *tag);
        }
    }
    lexicon
});

/// A compiled suffix pattern and the tag it maps to
struct PatternEntry {
    regex: Regex,
    tag: PennTag,
}

/// Ordered suffix patterns; first match wins
static SUFFIX_PATTERNS: Lazy<Vec<PatternEntry>> = Lazy::new(|| {
    let raw: &[(&str, PennTag)] = &[
        (r"^.{2,}ing$", PennTag::Vbg),
        (r"^.{2,}ed$", PennTag::Vbd),
        (r"^.{2,}ly$", PennTag::Rb),
        (r"^.{2,}est$", PennTag::Jjs),
        (r"^.{2,}(ous|ful|ive|able|ible|ical|ish|less|ary|ic)$", PennTag::Jj),
        (
            r"^.{2,}(tion|sion|ness|ment|ity|ism|ance|ence|ship|hood|dom|ist|er|or)$",
            PennTag::Nn,
        ),
        (r"^.{2,}(tions|sions|nesses|ments|ities|isms|ships|ists|ers|ors)$", PennTag::Nns),
        (r"^.{2,}(ize|ise|ify)$", PennTag::Vb),
        (r"^.{2,}(izes|ises|ifies)$", PennTag::Vbz),
        (r"^.+[^su]s$", PennTag::Nns),
    ];

    raw.iter()
        .map(|(pattern, tag)| PatternEntry {
            regex: Regex::new(pattern)
                .unwrap_or_else(|e| panic!("Failed to compile regex '{}': {}", pattern, e)),
            tag: *tag,
        })
        .collect()
});

/// Lexicon and suffix-rule tagger
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleTagger;

impl RuleTagger {
    pub fn new() -> Self {
        Self
    }
}

impl Tagger for RuleTagger {
    fn tag(&self, word: &str) -> PennTag {
        if let Some(tag) = LEXICON.get(word) {
            return *tag;
        }
        SUFFIX_PATTERNS
            .iter()
            .find(|entry| entry.regex.is_match(word))
            .map(|entry| entry.tag)
            .unwrap_or(PennTag::Nn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const ALL_TAGS: [PennTag; 36] = [
        PennTag::Cc,
        PennTag::Cd,
        PennTag::Dt,
        PennTag::Ex,
        PennTag::Fw,
        PennTag::In,
        PennTag::Jj,
        PennTag::Jjr,
        PennTag::Jjs,
        PennTag::Ls,
        PennTag::Md,
        PennTag::Nn,
        PennTag::Nns,
        PennTag::Nnp,
        PennTag::Nnps,
        PennTag::Pdt,
        PennTag::Pos,
        PennTag::Prp,
        PennTag::PrpS,
        PennTag::Rb,
        PennTag::Rbr,
        PennTag::Rbs,
        PennTag::Rp,
        PennTag::Sym,
        PennTag::To,
        PennTag::Uh,
        PennTag::Vb,
        PennTag::Vbd,
        PennTag::Vbg,
        PennTag::Vbn,
        PennTag::Vbp,
        PennTag::Vbz,
        PennTag::Wdt,
        PennTag::Wp,
        PennTag::WpS,
        PennTag::Wrb,
    ];

    #[test]
    fn test_tag_strings_are_distinct() {
        let tags: HashSet<&str> = ALL_TAGS.iter().map(PennTag::as_str).collect();
        assert_eq!(tags.len(), 36);
        assert!(tags.contains("PRP$"));

        let classes: HashSet<&str> = ALL_TAGS.iter().map(PennTag::description).collect();
        assert_eq!(classes.len(), 36);
    }

    #[test]
    fn test_descriptions() {
        assert_eq!(PennTag::Nn.description(), "Noun, singular or mass");
        assert_eq!(PennTag::To.description(), "to");
        assert_eq!(PennTag::WpS.to_string(), "WP$");
    }

    #[test]
    fn test_serialize_as_tag() {
        assert_eq!(serde_json::to_string(&PennTag::PrpS).unwrap(), "\"PRP$\"");
    }

    #[test]
    fn test_lexicon_words() {
        let tagger = RuleTagger::new();
        assert_eq!(tagger.tag("the"), PennTag::Dt);
        assert_eq!(tagger.tag("and"), PennTag::Cc);
        assert_eq!(tagger.tag("could"), PennTag::Md);
        assert_eq!(tagger.tag("whose"), PennTag::WpS);
        assert_eq!(tagger.tag("to"), PennTag::To);
        assert_eq!(tagger.tag("was"), PennTag::Vbd);
    }

    #[test]
    fn test_suffix_rules() {
        let tagger = RuleTagger::new();
        assert_eq!(tagger.tag("running"), PennTag::Vbg);
        assert_eq!(tagger.tag("walked"), PennTag::Vbd);
        assert_eq!(tagger.tag("quickly"), PennTag::Rb);
        assert_eq!(tagger.tag("famous"), PennTag::Jj);
        assert_eq!(tagger.tag("happiness"), PennTag::Nn);
        assert_eq!(tagger.tag("sailors"), PennTag::Nns);
        assert_eq!(tagger.tag("whales"), PennTag::Nns);
        assert_eq!(tagger.tag("realize"), PennTag::Vb);
    }

    #[test]
    fn test_fallback_is_noun() {
        let tagger = RuleTagger::new();
        assert_eq!(tagger.tag("whale"), PennTag::Nn);
        assert_eq!(tagger.tag("glass"), PennTag::Nn);
        assert_eq!(tagger.tag("sea"), PennTag::Nn);
    }
}
