//! Fixed word lists for the booster and negation tables.

/// Empirically derived mean intensity increase for a booster word.
pub const B_INCR: f64 = 0.293;
/// Empirically derived mean intensity decrease for a dampener word.
pub const B_DECR: f64 = -0.293;

pub const NEGATE: &[&str] = &[
    "aint", "arent", "cannot", "cant", "couldnt", "darent", "didnt", "doesnt",
    "ain't", "aren't", "can't", "couldn't", "daren't", "didn't", "doesn't",
    "dont", "hadnt", "hasnt", "havent", "mightnt", "mustnt", "neither",
    "don't", "hadn't", "hasn't", "haven't", "isn't", "isnt", "mightn't", "mustn't",
    "neednt", "needn't", "never", "none", "nope", "nor", "not", "nothing", "nowhere",
    "oughtnt", "shant", "shouldnt", "uhuh", "wasnt", "werent",
    "oughtn't", "shan't", "shouldn't", "uh-uh", "wasn't", "weren't",
    "without", "wont", "wouldnt", "won't", "wouldn't", "rarely", "seldom", "despite",
];

pub const BOOSTER_INCREMENTS: &[&str] = &[
    "absolutely", "amazingly", "awfully", "completely", "considerably",
    "decidedly", "deeply", "effing", "enormously",
    "entirely", "especially", "exceptionally", "extremely",
    "fabulously", "flipping", "flippin",
    "fricking", "frickin", "frigging", "friggin", "fully", "fucking",
    "greatly", "hella", "highly", "hugely", "incredibly",
    "intensely", "majorly", "more", "most", "particularly",
    "purely", "quite", "really", "remarkably",
    "so", "substantially",
    "thoroughly", "totally", "tremendously",
    "uber", "unbelievably", "unusually", "utterly",
    "very",
];

pub const BOOSTER_DECREMENTS: &[&str] = &[
    "almost", "barely", "hardly", "just enough",
    "kind of", "kinda", "kindof", "kind-of",
    "less", "little", "marginally", "occasionally", "partly",
    "scarcely", "slightly", "somewhat",
    "sort of", "sorta", "sortof", "sort-of",
];

/// Words that keep a negation word from negating ("don't know", "can't feel").
pub const NEGATION_EXCEPTIONS: &[&str] = &["know", "take", "feel", "like", "want", "wanna"];
