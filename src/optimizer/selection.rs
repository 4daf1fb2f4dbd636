use super::Build;
use std::cmp::Ordering;
use std::collections::HashSet;

#[inline(always)]
fn rank(objective: &[f32], a: usize, b: usize) -> Ordering {
    objective[b]
        .total_cmp(&objective[a])
        .then_with(|| a.cmp(&b))
}

/// Indices of the `k` highest objectives among rows with `keep[i]` set, best
/// first. Uses a partial selection so only the kept slice is ever sorted.
/// Equal objectives keep ascending row order.
pub fn top_k(objective: &[f32], keep: &[bool], k: usize) -> Vec<usize> {
    debug_assert_eq!(objective.len(), keep.len());
    let mut idx: Vec<usize> = (0..objective.len()).filter(|&i| keep[i]).collect();

    let k = k.min(idx.len());
    if k == 0 {
        return Vec::new();
    }

    if k < idx.len() {
        idx.select_nth_unstable_by(k - 1, |&a, &b| rank(objective, a, b));
        idx.truncate(k);
    }
    idx.sort_unstable_by(|&a, &b| rank(objective, a, b));
    idx
}

/// Global merge: stable sort by objective (descending), drop repeated part
/// tuples keeping the first, cut to `top_n`.
pub fn merge_candidates(mut candidates: Vec<Build>, top_n: usize) -> Vec<Build> {
    candidates.sort_by(|a, b| b.objective.total_cmp(&a.objective));

    let mut seen = HashSet::new();
    let mut out = Vec::with_capacity(top_n.min(candidates.len()));
    for build in candidates {
        if out.len() >= top_n {
            break;
        }
        if seen.insert(build.identity_key()) {
            out.push(build);
        }
    }
    out
}
