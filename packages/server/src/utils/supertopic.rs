use std::collections::HashMap;
use std::sync::LazyLock;

/// Category assigned to tags with no entry in [`SUPERTOPICS`].
pub const DEFAULT_SUPERTOPIC: &str = "Uncategorized";

/// Fine-grained tag to coarse category. Keys are lowercase.
const SUPERTOPICS: &[(&str, &str)] = &[
    // Algorithms
    ("implementation", "Algorithms"),
    ("dp", "Algorithms"),
    ("dynamic programming", "Algorithms"),
    ("greedy", "Algorithms"),
    ("brute force", "Algorithms"),
    ("constructive algorithms", "Algorithms"),
    ("binary search", "Algorithms"),
    ("ternary search", "Algorithms"),
    ("sortings", "Algorithms"),
    ("two pointers", "Algorithms"),
    ("divide and conquer", "Algorithms"),
    ("meet-in-the-middle", "Algorithms"),
    ("expression parsing", "Algorithms"),
    ("schedules", "Algorithms"),
    ("interactive", "Algorithms"),
    ("algorithms", "Algorithms"),
    // Graphs
    ("graphs", "Graphs"),
    ("dfs and similar", "Graphs"),
    ("trees", "Graphs"),
    ("shortest paths", "Graphs"),
    ("dsu", "Graphs"),
    ("flows", "Graphs"),
    ("graph matchings", "Graphs"),
    ("2-sat", "Graphs"),
    ("graph", "Graphs"),
    // Data structures
    ("data structures", "Data Structures"),
    ("segment tree", "Data Structures"),
    ("fenwick tree", "Data Structures"),
    ("sqrt decomposition", "Data Structures"),
    ("bitmasks", "Data Structures"),
    // Strings
    ("strings", "Strings"),
    ("string suffix structures", "Strings"),
    ("hashing", "Strings"),
    // Mathematics
    ("math", "Mathematics"),
    ("number theory", "Mathematics"),
    ("combinatorics", "Mathematics"),
    ("probabilities", "Mathematics"),
    ("geometry", "Mathematics"),
    ("matrices", "Mathematics"),
    ("fft", "Mathematics"),
    ("games", "Mathematics"),
    ("chinese remainder theorem", "Mathematics"),
    // Contests
    ("codeforces", "Contests"),
    ("contest", "Contests"),
    ("round", "Contests"),
    ("div1", "Contests"),
    ("div2", "Contests"),
    ("div3", "Contests"),
    ("div4", "Contests"),
    ("educational round", "Contests"),
    ("editorial", "Contests"),
    ("announcement", "Contests"),
    ("icpc", "Contests"),
    ("ioi", "Contests"),
    ("*special", "Contests"),
    // Programming languages
    ("c++", "Programming Languages"),
    ("python", "Programming Languages"),
    ("java", "Programming Languages"),
    ("rust", "Programming Languages"),
    ("kotlin", "Programming Languages"),
    // Community
    ("help", "Community"),
    ("question", "Community"),
    ("discussion", "Community"),
    ("tutorial", "Community"),
    ("training", "Community"),
    ("career", "Community"),
    ("interview", "Community"),
];

static LOOKUP: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| SUPERTOPICS.iter().copied().collect());

/// Coarse category for `tag`, or [`DEFAULT_SUPERTOPIC`] when unmapped.
///
/// Matching ignores case and surrounding whitespace.
pub fn supertopic(tag: &str) -> &'static str {
    let key = tag.trim().to_lowercase();
    LOOKUP.get(key.as_str()).copied().unwrap_or(DEFAULT_SUPERTOPIC)
}
