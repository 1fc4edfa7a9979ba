//! Title classifier
//!
//! Maps a free-text job title to a function category and a seniority level.
//! Both are decided by walking an ordered rule list and stopping at the first
//! rule that matches. Categories overlap lexically ("people operations",
//! "product support"), so the order of the lists is part of the behavior and
//! each rule carries its own exclusion guard.

use crate::domain::category::{FunctionCategory, SeniorityLevel};

/// A keyword tested against the lower-cased title
#[derive(Debug, Clone, Copy)]
enum Keyword {
    /// Plain substring: `engineer` matches "engineering"
    Fragment(&'static str),
    /// Phrase bounded by non-alphanumeric characters: `cto` does not match
    /// "director"
    Word(&'static str),
}

use Keyword::{Fragment as F, Word as W};

impl Keyword {
    fn matches(&self, title: &str) -> bool {
        match *self {
            Keyword::Fragment(fragment) => title.contains(fragment),
            Keyword::Word(word) => contains_word(title, word),
        }
    }
}

fn contains_word(title: &str, word: &str) -> bool {
    title.match_indices(word).any(|(start, _)| {
        let before = title[..start].chars().next_back();
        let after = title[start + word.len()..].chars().next();
        !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
    })
}

/// One entry of an ordered rule list
struct Rule<T> {
    keywords: &'static [Keyword],
    /// When any of these is present the rule is skipped, even if a keyword
    /// matched
    unless: &'static [Keyword],
    outcome: T,
}

impl<T: Copy> Rule<T> {
    fn apply(&self, title: &str) -> Option<T> {
        let hit = self.keywords.iter().any(|keyword| keyword.matches(title));
        let vetoed = self.unless.iter().any(|keyword| keyword.matches(title));
        (hit && !vetoed).then_some(self.outcome)
    }
}

fn first_match<T: Copy>(rules: &[Rule<T>], title: &str) -> Option<T> {
    rules.iter().find_map(|rule| rule.apply(title))
}

const FUNCTION_RULES: &[Rule<FunctionCategory>] = &[
    Rule {
        keywords: &[
            F("engineer"),
            F("developer"),
            F("software"),
            W("sre"),
            F("devops"),
            F("architect"),
            F("infrastructure"),
            F("backend"),
            F("frontend"),
            F("fullstack"),
            F("full stack"),
            F("mobile"),
            W("ios"),
            F("android"),
            W("qa"),
            W("sdet"),
            F("technical program"),
        ],
        unless: &[
            F("support engineer"),
            F("solutions engineer"),
            F("sales engineer"),
            F("solutions architect"),
            W("it engineer"),
        ],
        outcome: FunctionCategory::Engineering,
    },
    Rule {
        keywords: &[
            F("account executive"),
            F("sales"),
            F("business development"),
            W("bdr"),
            W("sdr"),
            F("account manager"),
            F("account director"),
            F("partnership manager"),
            F("revenue"),
            F("commercial"),
            F("go-to-market"),
        ],
        unless: &[],
        outcome: FunctionCategory::Sales,
    },
    Rule {
        keywords: &[
            F("marketing"),
            F("demand gen"),
            F("lead generation"),
            F("content"),
            W("seo"),
            F("brand"),
            F("campaigns"),
            F("communications"),
        ],
        unless: &[],
        outcome: FunctionCategory::Marketing,
    },
    Rule {
        keywords: &[
            F("product manager"),
            F("product lead"),
            F("product owner"),
            W("pm"),
            F("product strategy"),
            F("product director"),
            F("product management"),
            F("head of product"),
            F("director of product"),
            F("vp of product"),
            F("vp, product"),
            F("vice president of product"),
            F("chief product officer"),
            F("product analyst"),
        ],
        unless: &[F("support"), F("operations")],
        outcome: FunctionCategory::Product,
    },
    Rule {
        keywords: &[
            F("designer"),
            F("design"),
            W("ux"),
            W("ui"),
            F("creative"),
            F("visual"),
            F("illustrat"),
        ],
        unless: &[],
        outcome: FunctionCategory::Design,
    },
    Rule {
        keywords: &[
            F("data scientist"),
            F("data analyst"),
            F("analytics"),
            F("machine learning"),
            F("ai researcher"),
            F("data science"),
            F("business intelligence"),
        ],
        unless: &[],
        outcome: FunctionCategory::DataAnalytics,
    },
    Rule {
        keywords: &[
            F("recruiter"),
            F("recruiting"),
            F("talent"),
            F("people"),
            W("hr"),
            F("human resources"),
            F("total rewards"),
        ],
        unless: &[],
        outcome: FunctionCategory::PeopleTalent,
    },
    Rule {
        keywords: &[
            W("it support"),
            W("it engineer"),
            W("it manager"),
            W("it specialist"),
            F("systems admin"),
            F("helpdesk"),
            F("help desk"),
            F("desktop support"),
        ],
        unless: &[],
        outcome: FunctionCategory::It,
    },
    Rule {
        keywords: &[
            F("customer success"),
            F("customer experience"),
            F("customer support"),
            F("technical support"),
            F("solutions engineer"),
            F("support engineer"),
            F("implementation"),
            F("onboarding"),
            F("support"),
        ],
        unless: &[],
        outcome: FunctionCategory::CustomerSuccess,
    },
    Rule {
        keywords: &[
            F("professional services"),
            F("consulting"),
            F("consultant"),
            F("solutions architect"),
        ],
        unless: &[],
        outcome: FunctionCategory::ProfessionalServices,
    },
    Rule {
        keywords: &[
            F("operations"),
            W("ops"),
            F("office manager"),
            F("program manager"),
            F("project manager"),
            F("chief of staff"),
            F("supply chain"),
            F("logistics"),
        ],
        unless: &[],
        outcome: FunctionCategory::Operations,
    },
    Rule {
        keywords: &[
            F("finance"),
            F("accounting"),
            F("accountant"),
            F("controller"),
            W("cfo"),
            F("financial"),
            W("tax"),
            F("audit"),
            F("corporate development"),
        ],
        unless: &[],
        outcome: FunctionCategory::Finance,
    },
    Rule {
        keywords: &[
            F("legal"),
            F("counsel"),
            F("attorney"),
            F("compliance"),
            F("regulatory"),
            F("privacy"),
            F("contracts"),
        ],
        unless: &[],
        outcome: FunctionCategory::LegalCompliance,
    },
    Rule {
        keywords: &[
            F("strategy"),
            F("strategic"),
            F("partnerships"),
            F("corp dev"),
        ],
        unless: &[],
        outcome: FunctionCategory::StrategyBizDev,
    },
];

const LEVEL_RULES: &[Rule<SeniorityLevel>] = &[
    Rule {
        keywords: &[
            W("vp"),
            W("svp"),
            W("evp"),
            F("vice president"),
            F("president"),
            F("head of"),
            F("chief"),
            W("ceo"),
            W("cto"),
            W("cfo"),
            W("coo"),
            W("cmo"),
            W("cro"),
        ],
        unless: &[],
        outcome: SeniorityLevel::Executive,
    },
    Rule {
        keywords: &[F("director")],
        unless: &[],
        outcome: SeniorityLevel::DirectorLead,
    },
    Rule {
        keywords: &[F("lead")],
        unless: &[F("lead generation")],
        outcome: SeniorityLevel::DirectorLead,
    },
    Rule {
        keywords: &[F("senior"), W("sr"), F("staff"), F("principal")],
        unless: &[],
        outcome: SeniorityLevel::Senior,
    },
    Rule {
        keywords: &[
            F("junior"),
            W("jr"),
            F("associate"),
            F("entry"),
            W("intern"),
            F("new grad"),
        ],
        unless: &[],
        outcome: SeniorityLevel::Junior,
    },
];

/// Classify a title into a function category and a seniority level
///
/// Empty titles yield `(Unknown, Mid-Level)`.
pub fn classify_title(title: &str) -> (FunctionCategory, SeniorityLevel) {
    let title = title.trim().to_lowercase();
    if title.is_empty() {
        return (FunctionCategory::Unknown, SeniorityLevel::default());
    }

    (function_of(&title), level_of(&title))
}

/// Function category of a title; `Unknown` when no rule matches
pub fn classify_function(title: &str) -> FunctionCategory {
    function_of(&title.trim().to_lowercase())
}

/// Seniority of a title; `Mid-Level` when no rule matches
pub fn classify_level(title: &str) -> SeniorityLevel {
    level_of(&title.trim().to_lowercase())
}

fn function_of(lowered: &str) -> FunctionCategory {
    first_match(FUNCTION_RULES, lowered).unwrap_or(FunctionCategory::Unknown)
}

fn level_of(lowered: &str) -> SeniorityLevel {
    first_match(LEVEL_RULES, lowered).unwrap_or_default()
}
