use std::cmp::{max, min};
use std::mem;

use ahash::AHashMap;
use smallvec::{smallvec, SmallVec};

const VEC_SIZE: usize = 16;
pub type FastVec<T> = SmallVec<[T; VEC_SIZE]>;

/// Selects the edit distance function used to verify lookup candidates.
///
/// Optimal string alignment is the default: for the usual dictionary bounds
/// (`max_dictionary_edit_distance <= 2`) it agrees with the unrestricted
/// variant on all candidates that survive the delete-index prefilter, and it
/// runs on a rolling three-row matrix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DistanceAlgorithm {
    /// Restricted Damerau-Levenshtein: a transposed pair takes no further edits.
    #[default]
    Osa,
    /// True Damerau-Levenshtein with unrestricted adjacent transpositions.
    DamerauLevenshtein,
}

/// Damerau-Levenshtein edit distance, like Levenshtein but allows for adjacent transpositions.
/// Optimal string alignment version (OSA): each substring can only be edited once.
/// E.g., "CA" to "ABC" has an edit distance of 2 for Damerau-Levenshtein, but a distance of 3 when using the optimal string alignment algorithm.
/// Returns the edit distance, >= 0 representing the number of edits required to transform one string to the other,
/// or -1 if the distance is greater than the specified max_distance.
/// https://en.wikipedia.org/wiki/Damerau%E2%80%93Levenshtein_distance#Optimal_string_alignment_distance
pub fn damerau_levenshtein_osa(a: &str, b: &str, max_distance: usize) -> i64 {
    let a_len = a.chars().count();
    let b_len = b.chars().count();

    //the edit distance can't be less than the difference of the lengths of the strings
    if a_len.abs_diff(b_len) > max_distance {
        return -1;
    }

    // 0..=b_len behaves like 0..b_len.saturating_add(1) which could be a different size
    // this leads to significantly worse code gen when swapping the vectors below
    let mut prev_two_distances: FastVec<usize> = (0..b_len + 1).collect();
    let mut prev_distances: FastVec<usize> = (0..b_len + 1).collect();
    let mut curr_distances: FastVec<usize> = smallvec![0; b_len + 1];

    let mut prev_a_char = char::MAX;
    let mut prev_b_char = char::MAX;

    for (i, a_char) in a.chars().enumerate() {
        curr_distances[0] = i + 1;

        for (j, b_char) in b.chars().enumerate() {
            let cost = usize::from(a_char != b_char);
            curr_distances[j + 1] = min(
                curr_distances[j] + 1,
                min(prev_distances[j + 1] + 1, prev_distances[j] + cost),
            );
            if i > 0 && j > 0 && a_char != b_char && a_char == prev_b_char && b_char == prev_a_char
            {
                curr_distances[j + 1] = min(curr_distances[j + 1], prev_two_distances[j - 1] + 1);
            }

            prev_b_char = b_char;
        }

        // row minima never decrease, so once the whole row is over the bound
        // the remaining rows cannot get back under it
        if curr_distances.iter().min().copied().unwrap_or(0) > max_distance {
            return -1;
        }

        mem::swap(&mut prev_two_distances, &mut prev_distances);
        mem::swap(&mut prev_distances, &mut curr_distances);
        prev_a_char = a_char;
    }

    if prev_distances[b_len] <= max_distance {
        prev_distances[b_len] as i64
    } else {
        -1
    }
}

/// True Damerau-Levenshtein edit distance: insertions, deletions,
/// substitutions and unrestricted adjacent transpositions.
/// Same contract as [`damerau_levenshtein_osa`]: the distance if it is within
/// `max_distance`, -1 otherwise.
/// https://en.wikipedia.org/wiki/Damerau%E2%80%93Levenshtein_distance#Distance_with_adjacent_transpositions
pub fn damerau_levenshtein(a: &str, b: &str, max_distance: usize) -> i64 {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let a_len = a_chars.len();
    let b_len = b_chars.len();

    if a_len.abs_diff(b_len) > max_distance {
        return -1;
    }
    if a_len == 0 || b_len == 0 {
        let distance = max(a_len, b_len);
        return if distance <= max_distance {
            distance as i64
        } else {
            -1
        };
    }

    // full matrix with a sentinel row and column in front of the usual
    // border; transpositions may reach arbitrarily far back, so the rolling
    // three-row trick of the OSA variant does not apply
    let inf = a_len + b_len;
    let width = b_len + 2;
    let mut matrix = vec![inf; (a_len + 2) * width];
    for i in 0..=a_len {
        matrix[(i + 1) * width + 1] = i;
    }
    for j in 0..=b_len {
        matrix[width + j + 1] = j;
    }

    // row of the last occurrence of each character of `a` seen so far
    let mut last_row: AHashMap<char, usize> = AHashMap::new();

    for i in 1..=a_len {
        let a_char = a_chars[i - 1];
        // column of the last match within the current row
        let mut last_match_col = 0;
        let mut row_min = i;

        for j in 1..=b_len {
            let b_char = b_chars[j - 1];
            let last_match_row = last_row.get(&b_char).copied().unwrap_or(0);
            let cost = usize::from(a_char != b_char);

            let substitution = matrix[i * width + j] + cost;
            let insertion = matrix[(i + 1) * width + j] + 1;
            let deletion = matrix[i * width + j + 1] + 1;
            let transposition = matrix[last_match_row * width + last_match_col]
                + (i - last_match_row - 1)
                + 1
                + (j - last_match_col - 1);

            let value = min(min(substitution, insertion), min(deletion, transposition));
            matrix[(i + 1) * width + j + 1] = value;
            row_min = min(row_min, value);

            if cost == 0 {
                last_match_col = j;
            }
        }

        if row_min > max_distance {
            return -1;
        }

        last_row.insert(a_char, i);
    }

    let distance = matrix[(a_len + 1) * width + b_len + 1];
    if distance <= max_distance {
        distance as i64
    } else {
        -1
    }
}
