//! Pure aggregation over a fetched repository list.

use crate::models::{RankedLanguage, Repository};

/// Languages shown in the breakdown.
pub const LANGUAGE_LIMIT: usize = 8;

/// Repositories shown in the top-starred list.
pub const TOP_REPOSITORY_LIMIT: usize = 6;

/// Sum of star counts over the whole list; empty input yields 0.
pub fn total_stars(repos: &[Repository]) -> u64 {
    repos.iter().map(|r| u64::from(r.stargazers_count)).sum()
}

/// Rank languages by how many repositories use them, most frequent first,
/// truncated to `limit`.
///
/// Repositories without a detected language are skipped. Ties keep
/// first-encountered order, so the ranking is deterministic for a given
/// input order. Colors are resolved through the injected lookup, which must
/// be total over language names.
pub fn rank_languages<F>(repos: &[Repository], color: F, limit: usize) -> Vec<RankedLanguage>
where
    F: Fn(&str) -> &'static str,
{
    // Order-preserving tally; the input is at most one page of repositories,
    // so a linear scan per entry is fine.
    let mut tally: Vec<(String, u32)> = Vec::new();
    for repo in repos {
        let Some(language) = repo.language.as_deref().filter(|l| !l.is_empty()) else {
            continue;
        };
        match tally.iter_mut().find(|(name, _)| name == language) {
            Some((_, count)) => *count += 1,
            None => tally.push((language.to_string(), 1)),
        }
    }

    // sort_by is stable: equal counts stay in first-encounter order.
    tally.sort_by(|a, b| b.1.cmp(&a.1));
    tally.truncate(limit);

    tally
        .into_iter()
        .map(|(name, count)| RankedLanguage {
            color: color(&name),
            name,
            count,
        })
        .collect()
}

/// The `limit` most starred repositories, descending, with ties keeping the
/// original order. Sorts a copy; the caller's slice is left untouched.
pub fn top_repositories(repos: &[Repository], limit: usize) -> Vec<Repository> {
    let mut ranked = repos.to_vec();
    ranked.sort_by(|a, b| b.stargazers_count.cmp(&a.stargazers_count));
    ranked.truncate(limit);
    ranked
}
