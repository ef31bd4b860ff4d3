//! # Multi-Token Merge Table

use crate::{errors::WVResult, segmentation::WordSplitter};

/// A single merge target: a fragment run, and the token it collapses into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeTarget {
    /// The adjacent fragments to match, in order.
    pub fragments: Vec<String>,

    /// The joined token.
    pub joined: String,
}

impl MergeTarget {
    /// Build a target whose joined token is the concatenation of its fragments.
    pub fn from_fragments<I, S>(fragments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fragments: Vec<String> = fragments.into_iter().map(Into::into).collect();
        let joined = fragments.concat();
        Self { fragments, joined }
    }

    /// Does this target match the head of `fragments`?
    fn matches<S: AsRef<str>>(
        &self,
        fragments: &[S],
        fold_case: bool,
    ) -> bool {
        self.fragments.len() <= fragments.len()
            && self
                .fragments
                .iter()
                .zip(fragments)
                .all(|(a, b)| fragment_eq(a, b.as_ref(), fold_case))
    }
}

fn fragment_eq(
    a: &str,
    b: &str,
    fold_case: bool,
) -> bool {
    if fold_case {
        a.chars()
            .flat_map(char::to_lowercase)
            .eq(b.chars().flat_map(char::to_lowercase))
    } else {
        a == b
    }
}

/// A single item of a merge pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Merged<'a> {
    /// A configured run, collapsed into its joined token.
    Joined(&'a str),

    /// An input fragment no target matched.
    Fragment(&'a str),
}

impl<'a> Merged<'a> {
    /// The underlying text.
    pub fn as_str(&self) -> &'a str {
        match *self {
            Merged::Joined(s) | Merged::Fragment(s) => s,
        }
    }
}

/// Iterator over the merge pass of a fragment slice.
///
/// See [`MergeTable::merge_iter`].
#[derive(Debug)]
pub struct MergeIter<'a, S> {
    table: &'a MergeTable,
    fragments: &'a [S],
    idx: usize,
}

impl<'a, S: AsRef<str>> Iterator for MergeIter<'a, S> {
    type Item = Merged<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let table = self.table;
        let fragments = self.fragments;

        let rest = &fragments[self.idx.min(fragments.len())..];
        let head = rest.first()?;
        Some(match table.match_at(rest) {
            Some((len, joined)) => {
                self.idx += len;
                Merged::Joined(joined)
            }
            None => {
                self.idx += 1;
                Merged::Fragment(head.as_ref())
            }
        })
    }
}

/// A set of [`MergeTarget`]s.
///
/// Merging scans left to right; at each position the longest matching
/// target wins, and its run is replaced by the joined token.
/// Matches never overlap.
///
/// With `fold_case` set, fragments match targets case-insensitively;
/// a match still yields the target's joined token as configured.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeTable {
    /// Targets, longest first.
    targets: Vec<MergeTarget>,

    fold_case: bool,
}

impl MergeTable {
    /// Build a table from explicit targets.
    ///
    /// Empty targets are dropped.
    pub fn from_targets<I>(targets: I) -> Self
    where
        I: IntoIterator<Item = MergeTarget>,
    {
        let mut targets: Vec<MergeTarget> = targets
            .into_iter()
            .filter(|t| !t.fragments.is_empty())
            .fold(Vec::new(), |mut acc: Vec<MergeTarget>, t| {
                if !acc.iter().any(|seen| seen.fragments == t.fragments) {
                    acc.push(t);
                }
                acc
            });
        // stable: equal-length targets keep their given order.
        targets.sort_by(|a, b| b.fragments.len().cmp(&a.fragments.len()));
        Self {
            targets,
            fold_case: false,
        }
    }

    /// Sets case-insensitive fragment matching.
    pub fn with_fold_case(
        self,
        fold_case: bool,
    ) -> Self {
        Self { fold_case, ..self }
    }

    /// Is fragment matching case-insensitive?
    pub fn fold_case(&self) -> bool {
        self.fold_case
    }

    /// Build a table which re-assembles each literal from the fragments
    /// `splitter` produces for it.
    ///
    /// Literals the splitter cannot see at all (empty or all-whitespace)
    /// can never be produced by segmentation, and are skipped.
    pub fn from_literals<I, S>(
        splitter: &dyn WordSplitter,
        literals: I,
    ) -> WVResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut targets = Vec::new();
        for literal in literals {
            let literal = literal.as_ref();
            let fragments = splitter.split_words(literal)?;
            if fragments.is_empty() {
                log::warn!("special literal {literal:?} has no word fragments; it will never merge");
                continue;
            }
            if fragments.concat() != literal {
                log::warn!(
                    "special literal {literal:?} splits into {fragments:?}, which drops characters; \
                     it will never merge"
                );
                continue;
            }
            targets.push(MergeTarget {
                fragments: fragments.into_iter().map(str::to_string).collect(),
                joined: literal.to_string(),
            });
        }
        Ok(Self::from_targets(targets))
    }

    /// The targets, longest first.
    pub fn targets(&self) -> &[MergeTarget] {
        &self.targets
    }

    /// Get the number of targets.
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Find the longest target matching the head of `fragments`.
    ///
    /// ## Returns
    /// `Some((run_length, joined))` on a match.
    pub fn match_at<S: AsRef<str>>(
        &self,
        fragments: &[S],
    ) -> Option<(usize, &str)> {
        self.targets
            .iter()
            .find(|t| t.matches(fragments, self.fold_case))
            .map(|t| (t.fragments.len(), t.joined.as_str()))
    }

    /// Run the merge pass over `fragments`.
    ///
    /// Scans left to right, yielding a [`Merged::Joined`] for every
    /// configured run, and a [`Merged::Fragment`] for everything else.
    pub fn merge_iter<'a, S: AsRef<str>>(
        &'a self,
        fragments: &'a [S],
    ) -> MergeIter<'a, S> {
        MergeIter {
            table: self,
            fragments,
            idx: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segmentation::{RegexWordSplitter, WhitespaceWordSplitter};

    fn merge(
        table: &MergeTable,
        fragments: &[&str],
    ) -> Vec<String> {
        table
            .merge_iter(fragments)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    fn special_table() -> MergeTable {
        MergeTable::from_literals(
            &RegexWordSplitter::default(),
            ["<BOS>", "<EOS>", "<UNK>", "<PAD>"],
        )
        .unwrap()
    }

    #[test]
    fn test_from_literals() {
        let table = special_table();
        assert_eq!(table.len(), 4);
        assert_eq!(
            table.targets()[0],
            MergeTarget::from_fragments(["<", "BOS", ">"])
        );
    }

    #[test]
    fn test_merge() {
        let table = special_table();
        assert_eq!(
            merge(&table, &["<", "BOS", ">", "hi", "<", "EOS", ">"]),
            vec!["<BOS>", "hi", "<EOS>"]
        );
        assert_eq!(
            table
                .merge_iter(&["x", "<", "PAD", ">"])
                .collect::<Vec<_>>(),
            vec![Merged::Fragment("x"), Merged::Joined("<PAD>")]
        );
        assert_eq!(table.merge_iter::<&str>(&[]).next(), None);
    }

    #[test]
    fn test_partial_runs_are_left_alone() {
        let table = special_table();
        assert_eq!(
            merge(&table, &["<", "BOS", "x", "<", "unk", ">", "<"]),
            vec!["<", "BOS", "x", "<", "unk", ">", "<"]
        );
    }

    #[test]
    fn test_greedy_non_overlapping() {
        let table = MergeTable::from_targets([
            MergeTarget::from_fragments(["a", "b"]),
            MergeTarget::from_fragments(["b", "c"]),
            MergeTarget::from_fragments(["a", "b", "c"]),
        ]);

        // longest match at a position wins.
        assert_eq!(merge(&table, &["a", "b", "c"]), vec!["abc"]);
        // left-to-right, no overlap.
        assert_eq!(merge(&table, &["a", "b", "b", "c"]), vec!["ab", "bc"]);
        assert_eq!(merge(&table, &["x", "b", "c", "a"]), vec!["x", "bc", "a"]);
    }

    #[test]
    fn test_fold_case() {
        let exact = special_table();
        assert!(!exact.fold_case());
        assert_eq!(exact.match_at(&["<", "unk", ">"]), None);

        let folded = special_table().with_fold_case(true);
        assert_eq!(folded.match_at(&["<", "unk", ">"]), Some((3, "<UNK>")));
        assert_eq!(folded.match_at(&["<", "Unk", ">"]), Some((3, "<UNK>")));
        assert_eq!(
            merge(&folded, &["a", "<", "pad", ">", "<", "unknown", ">"]),
            vec!["a", "<PAD>", "<", "unknown", ">"]
        );
    }

    #[test]
    fn test_single_fragment_literal() {
        let table = MergeTable::from_literals(&WhitespaceWordSplitter, ["<PAD>"]).unwrap();
        assert_eq!(table.match_at(&["<PAD>", "x"]), Some((1, "<PAD>")));
        assert_eq!(table.match_at(&["x"]), None);
    }

    #[test]
    fn test_unsplittable_literals_skipped() {
        let table =
            MergeTable::from_literals(&RegexWordSplitter::default(), ["", "   ", "a b"]).unwrap();
        assert!(table.is_empty());
    }
}
