use sift_core::Token;

/// Common English words that carry little signal for ranking.
///
/// Sorted in byte order so membership is a binary search.
const STOP_WORDS: &[&str] = &[
    "a", "above", "add", "after", "again", "air", "almost", "along", "also", "always", "america",
    "an", "and", "animal", "another", "answer", "any", "are", "around", "as", "ask", "at", "away",
    "back", "be", "because", "been", "before", "began", "begin", "below", "between", "big", "book",
    "both", "boy", "but", "by", "call", "came", "car", "carry", "change", "children", "city",
    "close", "come", "country", "cut", "day", "did", "different", "does", "don't", "down", "each",
    "earth", "eat", "end", "enough", "even", "every", "example", "eye", "face", "family", "far",
    "father", "feet", "few", "find", "first", "follow", "food", "for", "form", "found", "four",
    "from", "get", "girl", "give", "good", "got", "great", "group", "grow", "had", "hand", "hard",
    "has", "have", "he", "head", "hear", "help", "her", "here", "high", "him", "home", "house",
    "idea", "if", "important", "in", "indian", "into", "is", "it", "it's", "its", "just", "keep",
    "kind", "know", "land", "large", "last", "later", "learn", "leave", "left", "let", "letter",
    "life", "light", "like", "line", "list", "little", "live", "long", "made", "make", "man",
    "many", "may", "me", "mean", "men", "might", "mile", "miss", "more", "most", "mother",
    "mountain", "move", "much", "must", "name", "near", "need", "never", "new", "next", "night",
    "now", "of", "off", "often", "oil", "old", "on", "once", "only", "open", "our", "out", "over",
    "own", "page", "paper", "part", "picture", "place", "plant", "play", "point", "put", "read",
    "really", "right", "river", "run", "said", "same", "saw", "say", "school", "sea", "second",
    "seem", "sentence", "set", "should", "show", "side", "sit", "small", "so", "some", "something",
    "sometimes", "song", "soon", "sound", "spell", "start", "state", "still", "stop", "story",
    "study", "such", "take", "talk", "tell", "than", "that", "the", "their", "them", "then",
    "these", "they", "thing", "think", "this", "those", "thought", "three", "through", "time", "to",
    "together", "too", "took", "tree", "try", "turn", "two", "under", "until", "up", "us", "very",
    "walk", "want", "was", "watch", "well", "went", "were", "what", "where", "which", "while",
    "white", "who", "why", "will", "with", "without", "words", "work", "world", "would", "year",
    "young",
];

/// Removes stop words from a token stream.
///
/// Backed by a fixed built-in English list; membership is the only
/// criterion, so the filter does not depend on the corpus.
#[derive(Debug, Clone, Copy)]
pub struct StopWordFilter {
    words: &'static [&'static str],
}

impl StopWordFilter {
    pub fn new() -> Self {
        Self { words: STOP_WORDS }
    }

    pub fn is_stop_word(&self, token: &str) -> bool {
        self.words.binary_search(&token).is_ok()
    }

    /// Drop stop words, keeping the remaining tokens in order.
    pub fn filter(&self, tokens: Vec<Token>) -> Vec<Token> {
        tokens
            .into_iter()
            .filter(|t| !self.is_stop_word(t))
            .collect()
    }
}

impl Default for StopWordFilter {
    fn default() -> Self {
        Self::new()
    }
}
