use std::collections::HashSet;

/// English stopword list applied to the "without stopwords" variant.
///
/// Matches the common wordcloud stopword set: high-frequency function words
/// plus contractions with their apostrophes stripped (tokenization keeps
/// alphabetic runs only, so "don't" arrives as "don" and "t").
pub static STOPWORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "also", "am", "an", "and", "any",
    "are", "aren", "as", "at", "be", "because", "been", "before", "being", "below", "between",
    "both", "but", "by", "can", "cannot", "com", "could", "couldn", "did", "didn", "do", "does",
    "doesn", "doing", "don", "down", "during", "each", "else", "ever", "few", "for", "from",
    "further", "get", "had", "hadn", "has", "hasn", "have", "haven", "having", "he", "hence",
    "her", "here", "hers", "herself", "him", "himself", "his", "how", "however", "http", "i",
    "if", "in", "into", "is", "isn", "it", "its", "itself", "just", "like", "me", "more", "most",
    "mustn", "my", "myself", "no", "nor", "not", "of", "off", "on", "once", "only", "or", "other",
    "otherwise", "ought", "our", "ours", "ourselves", "out", "over", "own", "same", "shall",
    "shan", "she", "should", "shouldn", "since", "so", "some", "such", "than", "that", "the",
    "their", "theirs", "them", "themselves", "then", "there", "therefore", "these", "they",
    "this", "those", "through", "to", "too", "under", "until", "up", "very", "was", "wasn", "we",
    "were", "weren", "what", "when", "where", "which", "while", "who", "whom", "why", "with",
    "won", "would", "wouldn", "www", "you", "your", "yours", "yourself", "yourselves",
];

/// Domain filter terms the original pipeline always excludes (email headers
/// and similar boilerplate), applied to both variants.
pub static FILTER_TERMS: &[&str] = &[
    "from",
    "sent",
    "to",
    "subject",
    "attachments",
    "call",
    "re",
    "fw",
    "no",
    "pm",
    "co",
    "wrote",
    "message",
    "forwarded",
    "date",
    "recipients",
];

/// Build the exclusion set for one variant: filter terms, optional stopwords,
/// and any extra caller-supplied terms, all lowercased.
pub fn exclusion_set(with_stopwords: bool, extra: &[String]) -> HashSet<String> {
    let mut set: HashSet<String> = FILTER_TERMS.iter().map(|s| s.to_string()).collect();
    if with_stopwords {
        set.extend(STOPWORDS.iter().map(|s| s.to_string()));
    }
    set.extend(extra.iter().map(|s| s.to_lowercase()));
    set
}
