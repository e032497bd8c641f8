//! Tokenization for cuisine descriptions
//!
//! Tokens are runs of two or more word characters (alphanumeric or `_`),
//! lowercased. Stop words are removed before n-grams are formed, so
//! "french and seafood" yields the bigram "french seafood".

use ahash::AHashSet;
use std::sync::OnceLock;

/// Common English stop words excluded from the vocabulary
pub const ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "about", "above", "across", "after", "afterwards", "again", "against", "all", "almost",
    "alone", "along", "already", "also", "although", "always", "am", "among", "amongst",
    "amoungst", "amount", "an", "and", "another", "any", "anyhow", "anyone", "anything", "anyway",
    "anywhere", "are", "around", "as", "at", "back", "be", "became", "because", "become",
    "becomes", "becoming", "been", "before", "beforehand", "behind", "being", "below", "beside",
    "besides", "between", "beyond", "bill", "both", "bottom", "but", "by", "call", "can",
    "cannot", "cant", "co", "con", "could", "couldnt", "cry", "de", "describe", "detail", "do",
    "done", "down", "due", "during", "each", "eg", "eight", "either", "eleven", "else",
    "elsewhere", "empty", "enough", "etc", "even", "ever", "every", "everyone", "everything",
    "everywhere", "except", "few", "fifteen", "fifty", "fill", "find", "fire", "first", "five",
    "for", "former", "formerly", "forty", "found", "four", "from", "front", "full", "further",
    "get", "give", "go", "had", "has", "hasnt", "have", "he", "hence", "her", "here", "hereafter",
    "hereby", "herein", "hereupon", "hers", "herself", "him", "himself", "his", "how", "however",
    "hundred", "i", "ie", "if", "in", "inc", "indeed", "interest", "into", "is", "it", "its",
    "itself", "keep", "last", "latter", "latterly", "least", "less", "ltd", "made", "many", "may",
    "me", "meanwhile", "might", "mill", "mine", "more", "moreover", "most", "mostly", "move",
    "much", "must", "my", "myself", "name", "namely", "neither", "never", "nevertheless", "next",
    "nine", "no", "nobody", "none", "noone", "nor", "not", "nothing", "now", "nowhere", "of",
    "off", "often", "on", "once", "one", "only", "onto", "or", "other", "others", "otherwise",
    "our", "ours", "ourselves", "out", "over", "own", "part", "per", "perhaps", "please", "put",
    "rather", "re", "same", "see", "seem", "seemed", "seeming", "seems", "serious", "several",
    "she", "should", "show", "side", "since", "sincere", "six", "sixty", "so", "some", "somehow",
    "someone", "something", "sometime", "sometimes", "somewhere", "still", "such", "system",
    "take", "ten", "than", "that", "the", "their", "them", "themselves", "then", "thence",
    "there", "thereafter", "thereby", "therefore", "therein", "thereupon", "these", "they",
    "thick", "thin", "third", "this", "those", "though", "three", "through", "throughout",
    "thru", "thus", "to", "together", "too", "top", "toward", "towards", "twelve", "twenty",
    "two", "un", "under", "until", "up", "upon", "us", "very", "via", "was", "we", "well", "were",
    "what", "whatever", "when", "whence", "whenever", "where", "whereafter", "whereas", "whereby",
    "wherein", "whereupon", "wherever", "whether", "which", "while", "whither", "who", "whoever",
    "whole", "whom", "whose", "why", "will", "with", "within", "without", "would", "yet", "you",
    "your", "yours", "yourself", "yourselves",
];

fn stop_words() -> &'static AHashSet<&'static str> {
    static STOP_WORDS: OnceLock<AHashSet<&'static str>> = OnceLock::new();
    STOP_WORDS.get_or_init(|| ENGLISH_STOP_WORDS.iter().copied().collect())
}

#[inline]
pub fn is_stop_word(token: &str) -> bool {
    stop_words().contains(token)
}

/// Split text into lowercase word tokens of at least two characters
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|s| s.chars().count() > 1)
        .map(str::to_string)
        .collect()
}

/// Produce all n-grams with `min_n <= n <= max_n`, unigrams first.
///
/// When `remove_stop_words` is set, stop words are dropped before n-grams are
/// joined with a single space.
pub fn ngrams(text: &str, min_n: usize, max_n: usize, remove_stop_words: bool) -> Vec<String> {
    let mut tokens = tokenize(text);
    if remove_stop_words {
        tokens.retain(|t| !is_stop_word(t));
    }

    let min_n = min_n.max(1);
    let mut terms = Vec::new();
    for n in min_n..=max_n {
        if n > tokens.len() {
            break;
        }
        if n == 1 {
            terms.extend(tokens.iter().cloned());
        } else {
            terms.extend(tokens.windows(n).map(|w| w.join(" ")));
        }
    }
    terms
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_drops_punctuation_and_single_chars() {
        assert_eq!(tokenize("French, Seafood"), vec!["french", "seafood"]);
        assert_eq!(tokenize("a la carte / modern_cuisine"), vec!["la", "carte", "modern_cuisine"]);
        assert!(tokenize("  ,, ").is_empty());
    }

    #[test]
    fn test_ngrams_skip_stop_words() {
        let terms = ngrams("french and seafood", 1, 2, true);
        assert_eq!(terms, vec!["french", "seafood", "french seafood"]);

        let terms = ngrams("french and seafood", 1, 2, false);
        assert_eq!(
            terms,
            vec!["french", "and", "seafood", "french and", "and seafood"]
        );
    }

    #[test]
    fn test_ngrams_on_degenerate_text() {
        assert!(ngrams("", 1, 2, true).is_empty());
        assert!(ngrams("the and of", 1, 2, true).is_empty());
        assert_eq!(ngrams("unknown", 1, 2, true), vec!["unknown"]);
    }

    #[test]
    fn test_stop_word_lookup() {
        assert!(is_stop_word("the"));
        assert!(is_stop_word("yourselves"));
        assert!(!is_stop_word("seafood"));
    }
}
