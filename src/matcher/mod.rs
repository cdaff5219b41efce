//! Skill extraction from free text
//!
//! Text is lower-cased, split on whitespace, and each token is stripped of
//! surrounding punctuation. Phrases of consecutive tokens are then looked up in
//! the snapshot's node index, longest phrase first. Matching is whole-phrase
//! string equality, never substring or prefix, so "cloud" can't match "c" and
//! "c++" can't fall back to "c".

pub mod skill_set;

pub use skill_set::SkillSet;

use crate::graph::GraphSnapshot;
use tracing::trace;

/// Characters stripped from both ends of a token.
///
/// `.`, `+` and `#` are deliberately absent: they carry meaning in ids like
/// ".net", "c++" and "c#".
const EDGE_PUNCTUATION: &[char] = &[
    ',', ';', ':', '!', '?', '(', ')', '[', ']', '{', '}', '"', '\'', '/', '\\',
];

fn is_edge_punctuation(c: char) -> bool {
    EDGE_PUNCTUATION.contains(&c)
}

/// Strip one raw whitespace-delimited token.
///
/// Surrounding punctuation goes first, then a single sentence-ending period,
/// then any punctuation that period was hiding ("(c++)." -> "c++").
/// A leading `.` is never removed.
pub fn strip_token(raw: &str) -> &str {
    let token = raw.trim_matches(is_edge_punctuation);
    match token.strip_suffix('.') {
        Some("") => "",
        Some(rest) => rest.trim_end_matches(is_edge_punctuation),
        None => token,
    }
}

/// Lower-case `text` and split it into stripped, non-empty tokens
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(strip_token)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Extract the skills of `snapshot` mentioned in `text`.
///
/// Greedy longest-match-first: at each position the longest phrase (up to the
/// longest skill id's token count) that names a skill wins and the cursor jumps
/// past it; a position with no match is skipped, not re-tried inside another phrase.
/// Results are canonical node ids in order of first appearance.
pub fn match_skills(text: &str, snapshot: &GraphSnapshot) -> SkillSet {
    let mut skills = SkillSet::new();

    let max_len = snapshot.max_phrase_len();
    if max_len == 0 || text.trim().is_empty() {
        return skills;
    }

    let tokens = tokenize(text);
    let mut phrase = String::new();
    let mut i = 0;

    while i < tokens.len() {
        let longest = max_len.min(tokens.len() - i);
        let mut consumed = 1;

        for len in (1..=longest).rev() {
            phrase.clear();
            for (k, token) in tokens[i..i + len].iter().enumerate() {
                if k > 0 {
                    phrase.push(' ');
                }
                phrase.push_str(token);
            }

            if let Some(node) = snapshot.node_by_phrase(&phrase) {
                trace!("Matched '{}' at token {}", node.id, i);
                skills.insert(&node.id);
                consumed = len;
                break;
            }
        }

        i += consumed;
    }

    skills
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::SkillNode;

    fn snapshot(ids: &[&str]) -> GraphSnapshot {
        GraphSnapshot::build(ids.iter().map(|id| SkillNode::new(*id)).collect(), vec![]).unwrap()
    }

    fn matched(text: &str, snap: &GraphSnapshot) -> Vec<String> {
        match_skills(text, snap).to_vec()
    }

    #[test]
    fn test_strip_token() {
        assert_eq!(strip_token("c++,"), "c++");
        assert_eq!(strip_token("c#."), "c#");
        assert_eq!(strip_token(".net"), ".net");
        assert_eq!(strip_token("(.net)"), ".net");
        assert_eq!(strip_token("(c++)."), "c++");
        assert_eq!(strip_token("node.js."), "node.js");
        assert_eq!(strip_token("\"python\""), "python");
        assert_eq!(strip_token("ci/cd"), "ci/cd");
        assert_eq!(strip_token("."), "");
        assert_eq!(strip_token("(),"), "");
    }

    #[test]
    fn test_tokenize_drops_punctuation_only_tokens() {
        assert_eq!(tokenize("I know  Python , and (C++)."), vec!["i", "know", "python", "and", "c++"]);
        assert!(tokenize("   \n\t ").is_empty());
    }

    #[test]
    fn test_empty_input() {
        let snap = snapshot(&["C", "Python"]);
        assert!(match_skills("", &snap).is_empty());
        assert!(match_skills("   \n", &snap).is_empty());
    }

    #[test]
    fn test_empty_graph_matches_nothing() {
        assert!(match_skills("python rust go", &GraphSnapshot::empty()).is_empty());
    }

    #[test]
    fn test_simple_skills() {
        let snap = snapshot(&["Python", "Java"]);
        assert_eq!(matched("I know Python and Java.", &snap), vec!["Python", "Java"]);
    }

    #[test]
    fn test_symbol_skills() {
        let snap = snapshot(&["C++", "C", ".NET", "C#"]);
        assert_eq!(
            matched("I am an expert in C++ and .NET development, plus C#.", &snap),
            vec!["C++", ".NET", "C#"]
        );
    }

    #[test]
    fn test_c_is_not_a_substring_match() {
        let snap = snapshot(&["C", "C++"]);
        assert_eq!(matched("I like Cloud Computing and C programming.", &snap), vec!["C"]);
        assert!(matched("Visual Basic is old.", &snap).is_empty());
        assert!(matched("Cloud Computing", &snap).is_empty());
    }

    #[test]
    fn test_longest_match_wins() {
        let snap = snapshot(&["Machine", "Machine Learning", "Learning"]);
        assert_eq!(matched("Applied machine learning daily", &snap), vec!["Machine Learning"]);
        assert_eq!(matched("machine shop", &snap), vec!["Machine"]);
    }

    #[test]
    fn test_unmatched_token_is_skipped_not_retried() {
        // "deep" starts no skill, so "learning" is tried on its own at the next position.
        let snap = snapshot(&["Learning", "Machine Learning"]);
        assert_eq!(matched("deep learning", &snap), vec!["Learning"]);
    }

    #[test]
    fn test_phrase_across_punctuation_and_case() {
        let snap = snapshot(&["Machine Learning", "SQL"]);
        assert_eq!(
            matched("MACHINE   Learning, SQL!", &snap),
            vec!["Machine Learning", "SQL"]
        );
    }

    #[test]
    fn test_duplicates_collapse() {
        let snap = snapshot(&["Rust"]);
        assert_eq!(matched("rust Rust RUST.", &snap), vec!["Rust"]);
    }
}
