// src/rerank/matcher.rs
//! Sector matching: does an article belong to a sector?
//!
//! Rule: lowercase every topic and keyword; an article matches when, for some
//! (topic, keyword) pair, either string contains the other. So topic
//! "Renewable Energy Policy" matches keyword "Energy", and topic "Oil" matches
//! keyword "Oil and Gas". Short keywords over-match (substrings of unrelated
//! words); that breadth is kept on purpose until precision is re-evaluated
//! against real dashboards.
//!
//! Blank topics/keywords never match: "" is a substring of everything.

use crate::article::Article;

/// Keywords lowercased once, reused across many articles.
#[derive(Debug, Clone)]
pub struct KeywordMatcher {
    keywords: Vec<String>,
}

impl KeywordMatcher {
    pub fn new<S: AsRef<str>>(keywords: &[S]) -> Self {
        let keywords = keywords
            .iter()
            .map(|k| k.as_ref().to_lowercase())
            .filter(|k| !k.trim().is_empty())
            .collect();
        Self { keywords }
    }

    /// Bidirectional containment against a single topic.
    pub fn matches_topic(&self, topic: &str) -> bool {
        if topic.trim().is_empty() {
            return false;
        }
        let topic = topic.to_lowercase();
        self.keywords
            .iter()
            .any(|kw| topic.contains(kw.as_str()) || kw.contains(topic.as_str()))
    }

    pub fn matches(&self, article: &Article) -> bool {
        article.topics.iter().any(|t| self.matches_topic(t))
    }

    /// Stable filter: keeps input order.
    pub fn filter<'a>(&self, articles: &'a [Article]) -> Vec<&'a Article> {
        articles.iter().filter(|a| self.matches(a)).collect()
    }
}

/// One-off check of a single article against a sector's keywords.
pub fn matches<S: AsRef<str>>(article: &Article, sector_keywords: &[S]) -> bool {
    KeywordMatcher::new(sector_keywords).matches(article)
}

/// Articles that belong to the sector, in their original order.
pub fn filter_by_sector<'a, S: AsRef<str>>(
    articles: &'a [Article],
    sector_keywords: &[S],
) -> Vec<&'a Article> {
    KeywordMatcher::new(sector_keywords).filter(articles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::article::SentimentLabel;
    use chrono::Utc;

    fn art(id: &str, topics: &[&str]) -> Article {
        Article::new(id, topics.iter().copied(), SentimentLabel::Neutral, 0.0, Utc::now())
    }

    #[test]
    fn topic_containing_keyword_matches() {
        assert!(matches(&art("a", &["Renewable Energy Policy"]), &["Energy"]));
    }

    #[test]
    fn keyword_containing_topic_matches() {
        assert!(matches(&art("a", &["oil"]), &["Oil and Gas"]));
    }

    #[test]
    fn case_is_ignored_both_ways() {
        assert!(matches(&art("a", &["HEALTHCARE reform"]), &["healthcare"]));
        assert!(matches(&art("a", &["healthcare"]), &["HealthCare"]));
    }

    #[test]
    fn unrelated_topic_does_not_match() {
        assert!(!matches(&art("a", &["Tourism"]), &["Energy", "Oil"]));
    }

    #[test]
    fn short_keyword_overmatches_substrings() {
        // "gas" inside "Las Vegas" is an accepted false positive.
        assert!(matches(&art("a", &["Las Vegas casinos"]), &["Gas"]));
    }

    #[test]
    fn empty_topics_and_blank_strings_never_match() {
        assert!(!matches(&art("a", &[]), &["Energy"]));
        assert!(!matches(&art("a", &["", "  "]), &["Energy"]));
        assert!(!matches(&art("a", &["Energy"]), &[""]));
    }

    #[test]
    fn filter_is_stable() {
        let v = vec![
            art("1", &["Energy"]),
            art("2", &["Tourism"]),
            art("3", &["Solar energy"]),
            art("4", &["Power grid", "energy storage"]),
        ];
        let out = filter_by_sector(&v, &["energy"]);
        let ids: Vec<&str> = out.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3", "4"]);
    }
}
