use std::collections::HashSet;

use crate::types::{Equality, Token};

/// Keep the first occurrence of each token under `equality`.
pub fn dedup(tokens: Vec<Token>, equality: Equality) -> Vec<Token> {
    let keep: Vec<bool> = {
        let mut seen = HashSet::with_capacity(tokens.len());
        tokens.iter().map(|t| seen.insert(equality.key(t))).collect()
    };

    tokens
        .into_iter()
        .zip(keep)
        .filter_map(|(token, keep)| keep.then_some(token))
        .collect()
}

/// Existing tokens in place, then incoming tokens not already present.
///
/// Existing tokens are never compared with each other, so a field holding
/// `0` and `"0"` keeps both even under [`Equality::Loose`].
pub fn union(existing: Vec<Token>, incoming: Vec<Token>, equality: Equality) -> Vec<Token> {
    let keep: Vec<bool> = {
        let mut seen: HashSet<_> = existing.iter().map(|t| equality.key(t)).collect();
        incoming.iter().map(|t| seen.insert(equality.key(t))).collect()
    };

    let mut combined = existing;
    combined.extend(
        incoming
            .into_iter()
            .zip(keep)
            .filter_map(|(token, keep)| keep.then_some(token)),
    );
    combined
}

/// Incoming tokens first, then existing tokens that do not match any of them.
///
/// The incoming block is expected to be strictly deduplicated already and is
/// kept as given.
pub fn prepend(existing: Vec<Token>, incoming: Vec<Token>, equality: Equality) -> Vec<Token> {
    let remaining: Vec<Token> = {
        let front: HashSet<_> = incoming.iter().map(|t| equality.key(t)).collect();
        existing
            .into_iter()
            .filter(|t| !front.contains(&equality.key(t)))
            .collect()
    };

    let mut combined = incoming;
    combined.extend(remaining);
    combined
}
