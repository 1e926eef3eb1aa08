// Spelling correction & fuzzy search with the Symmetric Delete algorithm and
// a pluggable suggestion ranker.
//
// The Symmetric Delete algorithm reduces the complexity of edit candidate generation and
// dictionary lookup for a given Damerau-Levenshtein distance. Opposite to other approaches
// only deletes are required, no transposes + replaces + inserts. Transposes + replaces +
// inserts of the input term are transformed into deletes of the dictionary term.
// Replaces and inserts are expensive and language dependent: e.g. Chinese has
// 70,000 Unicode Han characters!
//
// Every non-empty suggestion list passes through a single ranking choke point before it is
// returned. By default it applies the (distance ascending, count descending) order; a
// caller-supplied ranker replaces that order entirely.

use std::cmp::{self, min};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use ahash::{AHashMap, AHashSet};
use regex::Regex;
use tracing::{debug, warn};

use crate::edit_distance::{damerau_levenshtein, damerau_levenshtein_osa, DistanceAlgorithm};
use crate::error::Error;
use crate::helpers::{
    at, len, parse_words, remove, slice, suffix, transfer_case, unicode_normalization_form_kc,
};
use crate::suggestion::{Composition, Suggestion, Verbosity};

#[cfg(not(all(feature = "gxhash", target_feature = "aes", target_feature = "sse2")))]
use ahash::RandomState;
#[cfg(not(all(feature = "gxhash", target_feature = "aes", target_feature = "sse2")))]
use std::sync::LazyLock;

#[cfg(not(all(feature = "gxhash", target_feature = "aes", target_feature = "sse2")))]
static HASHER_64: LazyLock<RandomState> =
    LazyLock::new(|| RandomState::with_seeds(808259318, 750368348, 84901999, 789810389));

// stable hash, faster, but not available on all platforms
// https://github.com/ogxd/gxhash
#[inline]
#[cfg(all(feature = "gxhash", target_feature = "aes", target_feature = "sse2"))]
pub(crate) fn hash64(term_bytes: &[u8]) -> u64 {
    gxhash::gxhash64(term_bytes, 1234)
}

// unstable hash, slower, but available on all platforms
// https://github.com/tkaitchuck/aHash
#[inline]
#[cfg(not(all(feature = "gxhash", target_feature = "aes", target_feature = "sse2")))]
pub(crate) fn hash64(term_bytes: &[u8]) -> u64 {
    HASHER_64.hash_one(term_bytes)
}

/// A suggestion ranker: receives the looked-up phrase, a non-empty suggestion
/// list and the verbosity of the call, and returns the list to hand back to
/// the caller. It may reorder, filter or rebuild the suggestions; the engine
/// does not re-validate the returned list.
pub type Ranker = Box<dyn Fn(&str, Vec<Suggestion>, Verbosity) -> Vec<Suggestion> + Send + Sync>;

// estimated word occurrence probability P = 10 / (N * 10^word_length)
// and thus an estimated count C = 10 / 10^word_length, following Peter Norvig,
// Natural Language Corpus Data, page 224, http://norvig.com/ngrams/ch14.pdf
fn unknown_word_count(term_length: usize) -> usize {
    (10f64 / 10usize.saturating_pow(term_length as u32) as f64) as usize
}

/// SymSpell spell checker and corrector with a pluggable suggestion ranker.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SymSpell {
    // Maximum edit distance for dictionary precalculation.
    max_dictionary_edit_distance: i64,
    // The length of word prefixes, from which deletes are generated. (5..7).
    prefix_length: i64,
    // The minimum frequency count for dictionary words to be considered valid for spelling correction.
    count_threshold: usize,
    // Number of all words in the corpus used to generate the frequency dictionary.
    // Used to calculate the word occurrence probability p from word counts c: p = c / N.
    // N equals the sum of all counts c in the dictionary only if the dictionary is complete,
    // but not if the dictionary is truncated or filtered.
    corpus_word_count: usize,
    // Maximum dictionary term length.
    max_dictionary_term_length: i64,
    // Edit distance function used to verify lookup candidates.
    distance_algorithm: DistanceAlgorithm,
    // Dictionary that contains a mapping of lists of suggested correction words to the hashes
    // of the original words and the deletes derived from them. Collisions of hashes are tolerated,
    // because suggestions are ultimately verified via an edit distance function.
    deletes: AHashMap<u64, Vec<Box<str>>>,
    // Dictionary of unique correct spelling words, and the frequency count for each word.
    words: AHashMap<Box<str>, usize>,
    // Words whose accumulated count has not yet reached count_threshold. They are not part of
    // the dictionary proper and not indexed; once the accumulated count crosses the threshold
    // the word is promoted.
    below_threshold_words: AHashMap<Box<str>, usize>,
    // Bigrams optionally used for improved correction quality in lookup_compound.
    bigrams: AHashMap<Box<str>, usize>,
    // Minimum bigram count in the bigram dictionary.
    bigram_min_count: usize,
    // Optional hook replacing the default suggestion order. Process-local, never persisted.
    #[cfg_attr(feature = "serde", serde(skip))]
    ranker: Option<Ranker>,
}

impl Default for SymSpell {
    fn default() -> Self {
        Self::new(2, 7, 1)
    }
}

impl SymSpell {
    /// Creates a new SymSpell instance.
    pub fn new(
        max_dictionary_edit_distance: i64,
        prefix_length: i64,
        count_threshold: usize,
    ) -> Self {
        Self {
            max_dictionary_edit_distance, //2
            prefix_length,                //7
            count_threshold,              //1
            corpus_word_count: 1_024_908_267_229,
            max_dictionary_term_length: 0,
            distance_algorithm: DistanceAlgorithm::default(),
            deletes: AHashMap::new(),
            words: AHashMap::new(),
            below_threshold_words: AHashMap::new(),
            bigrams: AHashMap::new(),
            bigram_min_count: usize::MAX,
            ranker: None,
        }
    }

    /// Attach a ranker at construction time.
    ///
    /// ```
    /// use symrank::SymSpell;
    ///
    /// let symspell = SymSpell::default()
    ///     .with_ranker(Box::new(|_phrase, mut suggestions, _verbosity| {
    ///         suggestions.sort_by(|a, b| a.term.cmp(&b.term));
    ///         suggestions
    ///     }));
    /// ```
    pub fn with_ranker(mut self, ranker: Ranker) -> Self {
        self.ranker = Some(ranker);
        self
    }

    /// Install `ranker` as the suggestion ranker. It replaces the default
    /// (distance ascending, count descending) order on every non-empty
    /// suggestion list produced by [`lookup`](Self::lookup),
    /// [`lookup_compound`](Self::lookup_compound) and the per-part lookups of
    /// [`word_segmentation`](Self::word_segmentation). It is never called with
    /// an empty list, and it should be deterministic and side-effect-free:
    /// whatever it returns is handed back (or composed further) unchecked,
    /// including an empty list meaning "drop all suggestions".
    pub fn set_ranker(&mut self, ranker: Ranker) {
        self.ranker = Some(ranker);
    }

    /// Remove the current ranker; the default order applies again.
    pub fn clear_ranker(&mut self) {
        self.ranker = None;
    }

    /// Select the edit distance function used to verify candidates.
    pub fn set_distance_algorithm(&mut self, distance_algorithm: DistanceAlgorithm) {
        self.distance_algorithm = distance_algorithm;
    }

    /// Get the number of entries in the dictionary.
    pub fn get_dictionary_size(&self) -> usize {
        self.words.len()
    }

    /// Length in chars of the longest dictionary word.
    pub fn max_length(&self) -> i64 {
        self.max_dictionary_term_length
    }

    /// Load multiple dictionary entries from a file of word/frequency count pairs.
    /// Malformed lines are skipped with a warning.
    ///
    /// # Arguments
    ///
    /// * `corpus` - The path+filename of the file.
    /// * `term_index` - The column position of the word.
    /// * `count_index` - The column position of the frequency count.
    /// * `separator` - Separator between word and frequency
    pub fn load_dictionary(
        &mut self,
        corpus: impl AsRef<Path>,
        term_index: usize,
        count_index: usize,
        separator: &str,
    ) -> Result<(), Error> {
        let file = File::open(corpus.as_ref())?;
        let reader = BufReader::new(file);

        let mut entries = 0usize;
        for line in reader.lines() {
            if self.load_dictionary_line(&line?, term_index, count_index, separator) {
                entries += 1;
            }
        }
        debug!(
            entries,
            path = %corpus.as_ref().display(),
            "frequency dictionary loaded"
        );
        Ok(())
    }

    /// Load single dictionary entry from word/frequency count pair.
    /// Returns whether the line could be parsed.
    ///
    /// # Arguments
    ///
    /// * `line` - word/frequency pair.
    /// * `term_index` - The column position of the word.
    /// * `count_index` - The column position of the frequency count.
    /// * `separator` - Separator between word and frequency
    pub fn load_dictionary_line(
        &mut self,
        line: &str,
        term_index: usize,
        count_index: usize,
        separator: &str,
    ) -> bool {
        let line_parts: Vec<&str> = line.split(separator).collect();
        if line_parts.len() <= cmp::max(term_index, count_index) {
            warn!(line = %line, "skipping malformed dictionary line");
            return false;
        }

        let count = match line_parts[count_index].parse::<usize>() {
            Ok(count) => count,
            Err(_) => {
                warn!(line = %line, "skipping dictionary line with unparsable count");
                return false;
            }
        };
        self.create_dictionary_entry(line_parts[term_index], count);
        true
    }

    /// Load multiple bigram entries from a file of bigram/frequency count pairs.
    /// Only used in lookup_compound for improved compound splitting/merging/correction quality.
    ///
    /// # Arguments
    ///
    /// * `corpus` - The path+filename of the file.
    /// * `term_index` - The column position of the word.
    /// * `count_index` - The column position of the frequency count.
    /// * `separator` - Separator between word and frequency
    pub fn load_bigram_dictionary(
        &mut self,
        corpus: impl AsRef<Path>,
        term_index: usize,
        count_index: usize,
        separator: &str,
    ) -> Result<(), Error> {
        let file = File::open(corpus.as_ref())?;
        let reader = BufReader::new(file);

        let mut entries = 0usize;
        for line in reader.lines() {
            if self.load_bigram_dictionary_line(&line?, term_index, count_index, separator) {
                entries += 1;
            }
        }
        debug!(
            entries,
            path = %corpus.as_ref().display(),
            "bigram dictionary loaded"
        );
        Ok(())
    }

    /// Load single dictionary entry from bigram/frequency count pair.
    /// Returns whether the line could be parsed.
    ///
    /// # Arguments
    ///
    /// * `line` - bigram/frequency pair.
    /// * `term_index` - The column position of the word.
    /// * `count_index` - The column position of the frequency count.
    /// * `separator` - Separator between word and frequency
    pub fn load_bigram_dictionary_line(
        &mut self,
        line: &str,
        term_index: usize,
        count_index: usize,
        separator: &str,
    ) -> bool {
        let line_parts: Vec<&str> = line.split(separator).collect();
        // with a space separator the bigram itself spans two columns
        let required = if separator == " " { 3 } else { 2 };
        if line_parts.len() < required {
            warn!(line = %line, "skipping malformed bigram line");
            return false;
        }

        let key = if separator == " " {
            [line_parts[term_index], line_parts[term_index + 1]].join(" ")
        } else {
            line_parts[term_index].to_string()
        };
        let count = match line_parts[count_index].parse::<usize>() {
            Ok(count) => count,
            Err(_) => {
                warn!(line = %line, "skipping bigram line with unparsable count");
                return false;
            }
        };

        self.bigrams.insert(key.into_boxed_str(), count);
        if count < self.bigram_min_count {
            self.bigram_min_count = count;
        }
        true
    }

    /// Build the frequency dictionary from a plain text file: every word
    /// occurrence counts as one.
    pub fn create_dictionary(&mut self, corpus: impl AsRef<Path>) -> Result<(), Error> {
        let file = File::open(corpus.as_ref())?;
        let reader = BufReader::new(file);

        for line in reader.lines() {
            for word in parse_words(&line?) {
                self.create_dictionary_entry(word, 1);
            }
        }
        debug!(
            words = self.words.len(),
            path = %corpus.as_ref().display(),
            "dictionary created from text corpus"
        );
        Ok(())
    }

    /// Create or update an entry in the dictionary.
    ///
    /// For every new word all deletes with an edit distance of
    /// 1..max_dictionary_edit_distance are created and added to the delete
    /// index; every delete entry has a suggestions list pointing to the
    /// original term(s) it was created from. The dictionary may be dynamically
    /// updated (word frequency and new words) at any time.
    ///
    /// The term is normalized (trimmed, lowercased) before insertion. Counts
    /// of repeated insertions add up, saturating at `usize::MAX`. While a
    /// term's accumulated count is below `count_threshold` it is staged
    /// outside the dictionary and not indexed.
    ///
    /// Returns true if the word was added as a new correctly spelled word,
    /// false if it was staged below the threshold or updated an existing word.
    pub fn create_dictionary_entry(&mut self, key: impl AsRef<str>, count: usize) -> bool {
        let key = key.as_ref().trim().to_lowercase();
        if key.is_empty() {
            return false;
        }
        let mut count = count;

        // a word staged below the threshold accumulates counts until it qualifies
        if self.count_threshold > 1 {
            if let Some(&below_count) = self.below_threshold_words.get(key.as_str()) {
                count = below_count.saturating_add(count);
                if count >= self.count_threshold {
                    self.below_threshold_words.remove(key.as_str());
                } else {
                    self.below_threshold_words
                        .insert(key.into_boxed_str(), count);
                    return false;
                }
            }
        }

        if let Some(&previous_count) = self.words.get(key.as_str()) {
            self.words
                .insert(key.into_boxed_str(), previous_count.saturating_add(count));
            return false;
        }

        if count < self.count_threshold {
            self.below_threshold_words
                .insert(key.into_boxed_str(), count);
            return false;
        }

        let key_len = len(&key);
        if key_len as i64 > self.max_dictionary_term_length {
            self.max_dictionary_term_length = key_len as i64;
        }

        for delete in self.edits_prefix(&key) {
            self.deletes
                .entry(hash64(delete.as_bytes()))
                .or_default()
                .push(key.clone().into_boxed_str());
        }
        self.words.insert(key.into_boxed_str(), count);

        true
    }

    /// Remove a word from the dictionary and prune it from the delete index.
    /// Returns false if the word was not present.
    pub fn delete_dictionary_entry(&mut self, key: impl AsRef<str>) -> bool {
        let key = key.as_ref().trim().to_lowercase();
        if self.words.remove(key.as_str()).is_none() {
            debug!(term = %key, "delete of unknown dictionary entry ignored");
            return false;
        }

        // the longest word may just have left
        if len(&key) as i64 == self.max_dictionary_term_length {
            self.max_dictionary_term_length = self
                .words
                .keys()
                .map(|term| len(term) as i64)
                .max()
                .unwrap_or(0);
        }

        for delete in self.edits_prefix(&key) {
            let delete_hash = hash64(delete.as_bytes());
            if let Some(bucket) = self.deletes.get_mut(&delete_hash) {
                bucket.retain(|term| term.as_ref() != key);
                if bucket.is_empty() {
                    self.deletes.remove(&delete_hash);
                }
            }
        }
        true
    }

    /// Find suggested spellings for a given input word.
    ///
    /// # Arguments
    ///
    /// * `input` - The word being spell checked.
    /// * `verbosity` - The value controlling the quantity/closeness of the returned suggestions.
    /// * `max_edit_distance` - The maximum edit distance between input and suggested words;
    ///   defaults to `max_dictionary_edit_distance` and must not exceed it.
    /// * `include_unknown` - Append the input itself (with distance `max_edit_distance + 1`
    ///   and count 0) when no suggestion is found.
    /// * `ignore_token` - Inputs matching this pattern are exempt from correction and returned
    ///   verbatim (distance 0, count 1).
    /// * `transfer_casing` - Look up the lowercased input and transfer its letter case onto
    ///   the returned suggestions.
    ///
    /// # Examples
    ///
    /// ```
    /// use symrank::{SymSpell, Verbosity};
    ///
    /// let mut symspell = SymSpell::default();
    /// symspell.create_dictionary_entry("house", 231_310_420);
    /// let suggestions = symspell
    ///     .lookup("hous", Verbosity::Top, None, false, None, false)
    ///     .unwrap();
    /// assert_eq!("house", suggestions[0].term);
    /// ```
    pub fn lookup(
        &self,
        input: &str,
        verbosity: Verbosity,
        max_edit_distance: Option<i64>,
        include_unknown: bool,
        ignore_token: Option<&Regex>,
        transfer_casing: bool,
    ) -> Result<Vec<Suggestion>, Error> {
        let max_edit_distance = max_edit_distance.unwrap_or(self.max_dictionary_edit_distance);
        if max_edit_distance > self.max_dictionary_edit_distance {
            return Err(Error::DistanceTooLarge);
        }

        let original_input = input;
        let lowered;
        let input = if transfer_casing {
            lowered = input.to_lowercase();
            lowered.as_str()
        } else {
            input
        };

        let mut suggestions = self.lookup_inner(input, verbosity, max_edit_distance, ignore_token);

        if include_unknown && suggestions.is_empty() {
            suggestions.push(Suggestion::new(input, max_edit_distance + 1, 0));
        }

        let mut suggestions = self.rank(input, suggestions, verbosity);

        if transfer_casing {
            for suggestion in &mut suggestions {
                suggestion.term = transfer_case(original_input, &suggestion.term);
            }
        }

        Ok(suggestions)
    }

    // Candidate enumeration and verification. Every terminating branch of the
    // public lookup funnels the returned list through the ranking choke point.
    fn lookup_inner(
        &self,
        input: &str,
        verbosity: Verbosity,
        max_edit_distance: i64,
        ignore_token: Option<&Regex>,
    ) -> Vec<Suggestion> {
        let mut suggestions: Vec<Suggestion> = Vec::new();

        if input.is_empty() {
            return suggestions;
        }

        let input_len = len(input) as i64;
        // early termination - word is too big to possibly match any words
        if input_len - max_edit_distance > self.max_dictionary_term_length {
            return suggestions;
        }

        if let Some(token) = ignore_token {
            if token.is_match(input) {
                suggestions.push(Suggestion::new(input, 0, 1));
                // the token is exempt from correction, unless caller wants all matches
                if verbosity != Verbosity::All {
                    return suggestions;
                }
            }
        }

        if let Some(&suggestion_count) = self.words.get(input) {
            suggestions.push(Suggestion::new(input, 0, suggestion_count));
            // early termination - return exact match, unless caller wants all matches
            if verbosity != Verbosity::All {
                return suggestions;
            }
        }

        //early termination, if we only want to check if the word is in the dictionary or get its frequency, e.g. for word segmentation
        if max_edit_distance == 0 {
            return suggestions;
        }

        let mut considered_deletes: AHashSet<String> = AHashSet::new();
        let mut considered_suggestions: AHashSet<String> = AHashSet::new();
        // the input itself was already handled above
        considered_suggestions.insert(input.to_string());

        let mut max_edit_distance2 = max_edit_distance;
        let mut candidate_pointer = 0;
        let mut candidates: Vec<String> = Vec::new();

        let mut input_prefix_len = input_len;
        if input_prefix_len > self.prefix_length {
            input_prefix_len = self.prefix_length;
            candidates.push(slice(input, 0, input_prefix_len as usize));
        } else {
            candidates.push(input.to_string());
        }

        while candidate_pointer < candidates.len() {
            let candidate = candidates[candidate_pointer].clone();
            candidate_pointer += 1;
            let candidate_len = len(&candidate) as i64;
            let length_diff = input_prefix_len - candidate_len;

            //if the candidate distance is already higher than the suggestion distance, there are no better suggestions to be expected
            if length_diff > max_edit_distance2 {
                // skip to next candidate if Verbosity::All, look no further if Top or Closest
                // (candidates are ordered by delete distance, so none are closer than the current one)
                if verbosity == Verbosity::All {
                    continue;
                }
                break;
            }

            //read candidate entry from the delete index
            if let Some(dict_suggestions) = self.deletes.get(&hash64(candidate.as_bytes())) {
                //iterate through suggestions (to other correct dictionary items) of the delete item and add them to the suggestion list
                for suggestion in dict_suggestions {
                    let suggestion_len = len(suggestion) as i64;

                    if suggestion.as_ref() == input {
                        continue;
                    }

                    if (suggestion_len - input_len).abs() > max_edit_distance2
                        || suggestion_len < candidate_len
                        || (suggestion_len == candidate_len
                            && suggestion.as_ref() != candidate.as_str())
                    {
                        continue;
                    }

                    let sugg_prefix_len = min(suggestion_len, self.prefix_length);
                    if sugg_prefix_len > input_prefix_len
                        && sugg_prefix_len - candidate_len > max_edit_distance2
                    {
                        continue;
                    }

                    //We allow simultaneous edits (deletes) of max_edit_distance on both the dictionary and the input term.
                    //For replaces and adjacent transposes the resulting edit distance stays <= max_edit_distance.
                    //For inserts and deletes the resulting edit distance might exceed max_edit_distance.
                    //To prevent suggestions of a higher edit distance we need to calculate the resulting edit
                    //distance when there are simultaneous edits on both sides.
                    //Example: (bank==bnak and bank==bink, but bank!=kanb and bank!=xban and bank!=baxn for maxEditDistance=1)
                    //Two deletes on each side of a pair make them all equal, but the first two pairs have edit distance=1, the others edit distance=2.
                    let distance;
                    if candidate_len == 0 {
                        //suggestions which have no common chars with the input (input_len<=max_edit_distance && suggestion_len<=max_edit_distance)
                        distance = cmp::max(input_len, suggestion_len);
                        if distance > max_edit_distance2
                            || considered_suggestions.contains(suggestion.as_ref())
                        {
                            continue;
                        }
                        considered_suggestions.insert(suggestion.to_string());
                    } else if suggestion_len == 1 {
                        distance = if !input.contains(&slice(suggestion, 0, 1)) {
                            input_len
                        } else {
                            input_len - 1
                        };
                        if distance > max_edit_distance2
                            || considered_suggestions.contains(suggestion.as_ref())
                        {
                            continue;
                        }
                        considered_suggestions.insert(suggestion.to_string());
                    // number of edits in the prefix == max edit distance AND no identical suffix:
                    // then edit distance > max_edit_distance and there is no need for a distance calculation
                    // (input_len >= prefix_length) && (suggestion_len >= prefix_length)
                    } else if self.has_different_suffix(
                        max_edit_distance,
                        input,
                        input_len,
                        candidate_len,
                        suggestion,
                        suggestion_len,
                    ) {
                        continue;
                    } else {
                        // delete_in_suggestion_prefix is somewhat expensive and only pays off when verbosity is Top or Closest
                        if verbosity != Verbosity::All
                            && !self.delete_in_suggestion_prefix(
                                &candidate,
                                candidate_len,
                                suggestion,
                                suggestion_len,
                            )
                        {
                            continue;
                        }

                        if considered_suggestions.contains(suggestion.as_ref()) {
                            continue;
                        }
                        considered_suggestions.insert(suggestion.to_string());

                        distance =
                            self.distance_compare(input, suggestion, max_edit_distance2 as usize);
                        if distance < 0 {
                            continue;
                        }
                    }

                    //do not process higher distances than those already found, if verbosity<All
                    //(note: max_edit_distance2 will always equal max_edit_distance when Verbosity::All)
                    if distance <= max_edit_distance2 {
                        let suggestion_count = self.words[suggestion.as_ref()];
                        let item = Suggestion::new(suggestion.as_ref(), distance, suggestion_count);

                        if !suggestions.is_empty() {
                            match verbosity {
                                Verbosity::Closest => {
                                    //we will calculate the distance only to the smallest found distance so far
                                    if distance < max_edit_distance2 {
                                        suggestions.clear();
                                    }
                                }
                                Verbosity::Top => {
                                    if distance < max_edit_distance2
                                        || suggestion_count > suggestions[0].count
                                    {
                                        max_edit_distance2 = distance;
                                        suggestions[0] = item;
                                    }
                                    continue;
                                }
                                Verbosity::All => (),
                            }
                        }

                        if verbosity != Verbosity::All {
                            max_edit_distance2 = distance;
                        }
                        suggestions.push(item);
                    }
                }
            }

            //derive edits (deletes) from the candidate and add them to the candidates list,
            //recursively until the maximum edit distance has been reached
            if length_diff < max_edit_distance && candidate_len <= self.prefix_length {
                //do not create edits with an edit distance smaller than suggestions already found
                if verbosity != Verbosity::All && length_diff >= max_edit_distance2 {
                    continue;
                }

                for i in 0..candidate_len {
                    let delete = remove(&candidate, i as usize);
                    if !considered_deletes.contains(&delete) {
                        considered_deletes.insert(delete.clone());
                        candidates.push(delete);
                    }
                }
            }
        }

        suggestions
    }

    // The single choke point between candidate verification and the caller:
    // a custom ranker replaces the default order entirely, and is never
    // invoked on an empty list.
    fn rank(
        &self,
        phrase: &str,
        mut suggestions: Vec<Suggestion>,
        verbosity: Verbosity,
    ) -> Vec<Suggestion> {
        if suggestions.is_empty() {
            return suggestions;
        }
        if let Some(ranker) = &self.ranker {
            return ranker(phrase, suggestions, verbosity);
        }
        //sort by ascending edit distance, then by descending word frequency
        if suggestions.len() > 1 {
            suggestions.sort();
        }
        suggestions
    }

    /// Find suggested spellings for a multi-word input string (supports word splitting/merging).
    /// Returns a single [`Suggestion`] covering the whole input.
    ///
    /// lookup_compound supports compound aware automatic spelling correction of multi-word input strings with three cases:
    /// 1. mistakenly inserted space into a correct word led to two incorrect terms
    /// 2. mistakenly omitted space between two correct words led to one incorrect combined term
    /// 3. multiple independent input terms with/without spelling errors
    ///
    /// # Arguments
    ///
    /// * `input` - The sentence being spell checked.
    /// * `max_edit_distance` - The maximum edit distance between input and suggested words.
    ///
    /// # Examples
    ///
    /// ```
    /// use symrank::SymSpell;
    ///
    /// let mut symspell = SymSpell::default();
    /// for (term, count) in [("where", 123_456), ("is", 456_542), ("the", 1_156_408), ("love", 83_123)] {
    ///     symspell.create_dictionary_entry(term, count);
    /// }
    /// let suggestions = symspell.lookup_compound("whereis th elove", 2).unwrap();
    /// assert_eq!("where is the love", suggestions[0].term);
    /// ```
    pub fn lookup_compound(
        &self,
        input: &str,
        max_edit_distance: i64,
    ) -> Result<Vec<Suggestion>, Error> {
        if max_edit_distance > self.max_dictionary_edit_distance {
            return Err(Error::DistanceTooLarge);
        }

        //parse input string into single terms
        let term_list = parse_words(input);

        let mut suggestions: Vec<Suggestion>; //suggestions for a single term
        let mut suggestion_parts: Vec<Suggestion> = Vec::new(); //1 line with separate parts

        //translate every term to its best suggestion, otherwise it remains unchanged
        let mut last_combi = false;

        for (i, term) in term_list.iter().enumerate() {
            suggestions = self.lookup(
                term,
                Verbosity::Top,
                Some(max_edit_distance),
                false,
                None,
                false,
            )?;

            //combi check, always before split
            if i > 0 && !last_combi {
                let mut suggestions_combi = self.lookup(
                    &[term_list[i - 1].as_str(), term.as_str()].concat(),
                    Verbosity::Top,
                    Some(max_edit_distance),
                    false,
                    None,
                    false,
                )?;

                if !suggestions_combi.is_empty() {
                    let best1 = suggestion_parts[suggestion_parts.len() - 1].clone();
                    let best2 = if !suggestions.is_empty() {
                        suggestions[0].clone()
                    } else {
                        //unknown word, with estimated edit distance and count
                        Suggestion::new(
                            term.as_str(),
                            max_edit_distance + 1,
                            unknown_word_count(len(term)),
                        )
                    };

                    //distance1 = edit distance between the two split terms and their best corrections,
                    //as comparative value for the combination
                    let distance1 = best1.distance + best2.distance;
                    if distance1 >= 0
                        && (suggestions_combi[0].distance + 1 < distance1
                            || (suggestions_combi[0].distance + 1 == distance1
                                && suggestions_combi[0].count
                                    > (best1.count as f64 / self.corpus_word_count as f64
                                        * best2.count as f64)
                                        as usize))
                    {
                        suggestions_combi[0].distance += 1;
                        let last = suggestion_parts.len() - 1;
                        suggestion_parts[last] = suggestions_combi[0].clone();
                        last_combi = true;
                        continue;
                    }
                }
            }
            last_combi = false;

            //always split terms without suggestion / never split terms with suggestion ed=0 / never split single char terms
            if !suggestions.is_empty() && (suggestions[0].distance == 0 || len(term) == 1) {
                //choose best suggestion
                suggestion_parts.push(suggestions[0].clone());
            } else {
                //if no perfect suggestion, split the word into pairs
                let mut suggestion_split_best = if !suggestions.is_empty() {
                    //add original term
                    suggestions[0].clone()
                } else {
                    Suggestion::empty()
                };

                let term_length = len(term);
                if term_length > 1 {
                    for j in 1..term_length {
                        let part1 = slice(term, 0, j);
                        let part2 = slice(term, j, term_length);

                        let suggestions1 = self.lookup(
                            &part1,
                            Verbosity::Top,
                            Some(max_edit_distance),
                            false,
                            None,
                            false,
                        )?;
                        if suggestions1.is_empty() {
                            continue;
                        }
                        let suggestions2 = self.lookup(
                            &part2,
                            Verbosity::Top,
                            Some(max_edit_distance),
                            false,
                            None,
                            false,
                        )?;
                        if suggestions2.is_empty() {
                            continue;
                        }

                        //select best suggestion for the split pair
                        let mut suggestion_split = Suggestion::empty();
                        suggestion_split.term =
                            [suggestions1[0].term.as_str(), suggestions2[0].term.as_str()]
                                .join(" ");

                        let mut distance2 = self.distance_compare(
                            term,
                            &suggestion_split.term,
                            max_edit_distance as usize,
                        );
                        if distance2 < 0 {
                            distance2 = max_edit_distance + 1;
                        }

                        if !suggestion_split_best.term.is_empty() {
                            if distance2 > suggestion_split_best.distance {
                                continue;
                            }
                            if distance2 < suggestion_split_best.distance {
                                suggestion_split_best = Suggestion::empty();
                            }
                        }

                        let bigram_count = match self.bigrams.get(suggestion_split.term.as_str()) {
                            //if the bigram exists in the bigram dictionary
                            Some(&bigram_frequency) => {
                                //increase count, if the split corrections are part of or identical to the input
                                //single term correction exists
                                if !suggestions.is_empty() {
                                    let best_si = &suggestions[0];
                                    //alternatively remove the single term from suggestion_split, but then other splittings could win
                                    if suggestion_split.term == *term {
                                        //make count bigger than count of single term correction
                                        cmp::max(bigram_frequency, best_si.count + 2)
                                    } else if suggestions1[0].term == best_si.term
                                        || suggestions2[0].term == best_si.term
                                    {
                                        //make count bigger than count of single term correction
                                        cmp::max(bigram_frequency, best_si.count + 1)
                                    } else {
                                        bigram_frequency
                                    }
                                // no single term correction exists
                                } else if suggestion_split.term == *term {
                                    cmp::max(
                                        bigram_frequency,
                                        cmp::max(suggestions1[0].count, suggestions2[0].count) + 2,
                                    )
                                } else {
                                    bigram_frequency
                                }
                            }
                            None => {
                                //The Naive Bayes probability of the word combination is the product of the two
                                //word probabilities: P(AB) = P(A) * P(B).
                                //Use it to estimate the frequency count of the combination when no bigram is
                                //in the dictionary, which then ranks/selects the best splitting variant.
                                min(
                                    self.bigram_min_count,
                                    (suggestions1[0].count as f64 / self.corpus_word_count as f64
                                        * suggestions2[0].count as f64)
                                        as usize,
                                )
                            }
                        };

                        suggestion_split.distance = distance2;
                        suggestion_split.count = bigram_count;

                        if suggestion_split_best.term.is_empty()
                            || suggestion_split.count > suggestion_split_best.count
                        {
                            suggestion_split_best = suggestion_split;
                        }
                    }

                    if !suggestion_split_best.term.is_empty() {
                        //select best suggestion for the split pair
                        suggestion_parts.push(suggestion_split_best);
                    } else {
                        suggestion_parts.push(Suggestion::new(
                            term.as_str(),
                            max_edit_distance + 1,
                            unknown_word_count(term_length),
                        ));
                    }
                } else {
                    suggestion_parts.push(Suggestion::new(
                        term.as_str(),
                        max_edit_distance + 1,
                        unknown_word_count(term_length),
                    ));
                }
            }
        }

        let mut joined = String::new();
        let mut count = self.corpus_word_count as f64;
        for part in &suggestion_parts {
            joined.push_str(&part.term);
            joined.push(' ');
            count *= part.count as f64 / self.corpus_word_count as f64;
        }

        let term = joined.trim_end().to_string();
        //parse_words lowercased the parts, so compare against the lowercased input
        let distance = self.distance_compare(&input.to_lowercase(), &term, i32::MAX as usize);
        let suggestion = Suggestion::new(term, distance, count as usize);

        Ok(self.rank(input, vec![suggestion], Verbosity::Top))
    }

    /// word_segmentation divides a string into words by inserting missing spaces at the appropriate positions.
    /// word_segmentation works on text with any case, which is retained in the output.
    /// word_segmentation works on noisy text with spelling mistakes, which are corrected in the
    /// returned [`Composition::corrected_string`]; [`Composition::segmented_string`] keeps the
    /// original spelling.
    /// Existing spaces are allowed and considered for optimum segmentation.
    ///
    /// word_segmentation uses an approach *without* recursion:
    /// https://seekstorm.com/blog/fast-word-segmentation-noisy-text/
    /// While each string of length n can be segmented into 2^n−1 possible compositions
    /// https://en.wikipedia.org/wiki/Composition_(combinatorics)
    /// word_segmentation has a linear runtime O(n) to find the optimum composition.
    ///
    /// # Arguments
    ///
    /// * `input` - The string being segmented.
    /// * `max_edit_distance` - The maximum edit distance between a part and its correction;
    ///   defaults to `max_dictionary_edit_distance`.
    /// * `max_segmentation_word_length` - The maximum word length considered; defaults to the
    ///   longest word in the dictionary.
    /// * `ignore_token` - Parts matching this pattern are exempt from correction.
    ///
    /// # Examples
    ///
    /// ```
    /// use symrank::SymSpell;
    ///
    /// let mut symspell = SymSpell::default();
    /// for term in ["it", "was"] {
    ///     symspell.create_dictionary_entry(term, 100);
    /// }
    /// let result = symspell.word_segmentation("itwas", Some(0), None, None).unwrap();
    /// assert_eq!("it was", result.segmented_string);
    /// ```
    pub fn word_segmentation(
        &self,
        input: &str,
        max_edit_distance: Option<i64>,
        max_segmentation_word_length: Option<usize>,
        ignore_token: Option<&Regex>,
    ) -> Result<Composition, Error> {
        let max_edit_distance = max_edit_distance.unwrap_or(self.max_dictionary_edit_distance);
        if max_edit_distance > self.max_dictionary_edit_distance {
            return Err(Error::DistanceTooLarge);
        }

        // Normalize ligatures: "scientiﬁc" "ﬁelds" "ﬁnal"
        let input = unicode_normalization_form_kc(input).replace('\u{002D}', ""); // Remove U+002D (hyphen-minus)

        let asize = len(&input);
        let max_segmentation_word_length =
            max_segmentation_word_length.unwrap_or(self.max_dictionary_term_length as usize);

        //the circular window only needs one slot per possible part end position
        let array_size = min(max_segmentation_word_length, asize);
        if array_size == 0 {
            return Ok(Composition::empty());
        }

        let mut compositions: Vec<Composition> = vec![Composition::empty(); array_size];
        //slot of the predecessor composition, one column behind
        let mut ci = array_size - 1;

        //outer loop (column): all possible part start positions
        for j in 0..asize {
            //inner loop (row): all possible part lengths (from start position):
            //a part can't be bigger than the longest word in the dictionary (other than a long unknown word)
            let imax = min(asize - j, max_segmentation_word_length);
            for i in 1..=imax {
                //get top spelling correction/ed for the part
                let mut part = slice(&input, j, j + i);

                let mut sep_len: i64 = 0;
                let mut top_ed: i64 = 0;

                if part.chars().next().is_some_and(char::is_whitespace) {
                    //remove space for the distance calculation
                    part = remove(&part, 0);
                } else {
                    //add ed+1: space did not exist, had to be inserted
                    sep_len = 1;
                }

                //remove spaces from the part, add the number of removed spaces to top_ed
                top_ed += part.len() as i64;
                part = part.replace(' ', "");
                top_ed -= part.len() as i64;

                //the part is looked up lowercased; the letter case of the input is retained in the output
                let results = self.lookup(
                    &part.to_lowercase(),
                    Verbosity::Top,
                    Some(max_edit_distance),
                    false,
                    ignore_token,
                    false,
                )?;

                let top_result;
                let top_prob_log;
                if let Some(best) = results.first() {
                    top_result = if best.distance > 0 {
                        //retain/preserve letter case during correction
                        top_ed += best.distance;
                        transfer_case(&part, &best.term)
                    } else {
                        part.clone()
                    };

                    //Naive Bayes: we assume the word probabilities of two words to be independent, so the
                    //probability of a word combination is the product of the word probabilities.
                    //Instead of computing the product of probabilities we compute the sum of the logarithms:
                    //the probabilities of words are around 10^-10 and the product of many such small numbers
                    //would underflow the floating point range.
                    //log(ab) = log(a) + log(b)
                    top_prob_log = (best.count as f64 / self.corpus_word_count as f64).log10();
                } else {
                    top_result = part.clone();
                    //default, if the word is not found: otherwise a long input text would win as one
                    //long unknown word (with ed=edmax+1), although many spaces should be inserted
                    top_ed += len(&part) as i64;
                    top_prob_log = (10.0
                        / (self.corpus_word_count as f64 * 10.0f64.powf(len(&part) as f64)))
                    .log10();
                }

                let di = (i + ci) % array_size;

                // set values in first loop
                if j == 0 {
                    compositions[di] = Composition {
                        segmented_string: part.clone(),
                        corrected_string: top_result,
                        distance_sum: top_ed,
                        prob_log_sum: top_prob_log,
                    };
                } else if i == max_segmentation_word_length
                    //replace values if better prob_log_sum, if same edit distance OR one space difference
                    || (((compositions[ci].distance_sum + top_ed == compositions[di].distance_sum)
                        || (compositions[ci].distance_sum + sep_len + top_ed
                            == compositions[di].distance_sum))
                        && (compositions[di].prob_log_sum
                            < compositions[ci].prob_log_sum + top_prob_log))
                    //replace values if smaller edit distance
                    || (compositions[ci].distance_sum + sep_len + top_ed
                        < compositions[di].distance_sum)
                {
                    //keep punctuation or apostrophe adjacent to the previous word
                    if (part.len() == 1
                        && part
                            .chars()
                            .next()
                            .is_some_and(|ch| ch.is_ascii_punctuation()))
                        || (part.len() == 3 && part.starts_with('’'))
                    {
                        compositions[di] = Composition {
                            segmented_string: [
                                compositions[ci].segmented_string.as_str(),
                                part.as_str(),
                            ]
                            .concat(),
                            corrected_string: [
                                compositions[ci].corrected_string.as_str(),
                                top_result.as_str(),
                            ]
                            .concat(),
                            distance_sum: compositions[ci].distance_sum + top_ed,
                            prob_log_sum: compositions[ci].prob_log_sum + top_prob_log,
                        };
                    } else {
                        compositions[di] = Composition {
                            segmented_string: [
                                compositions[ci].segmented_string.as_str(),
                                part.as_str(),
                            ]
                            .join(" "),
                            corrected_string: [
                                compositions[ci].corrected_string.as_str(),
                                top_result.as_str(),
                            ]
                            .join(" "),
                            distance_sum: compositions[ci].distance_sum + sep_len + top_ed,
                            prob_log_sum: compositions[ci].prob_log_sum + top_prob_log,
                        };
                    }
                }
            }
            ci = (ci + 1) % array_size;
        }

        Ok(compositions[ci].clone())
    }

    fn distance_compare(&self, a: &str, b: &str, max_distance: usize) -> i64 {
        match self.distance_algorithm {
            DistanceAlgorithm::Osa => damerau_levenshtein_osa(a, b, max_distance),
            DistanceAlgorithm::DamerauLevenshtein => damerau_levenshtein(a, b, max_distance),
        }
    }

    // Check whether all delete chars are present in the suggestion prefix in correct order,
    // otherwise this is just a hash collision
    fn delete_in_suggestion_prefix(
        &self,
        delete: &str,
        delete_len: i64,
        suggestion: &str,
        suggestion_len: i64,
    ) -> bool {
        if delete_len == 0 {
            return true;
        }
        let suggestion_len = min(self.prefix_length, suggestion_len);

        let mut j = 0;
        for i in 0..delete_len {
            let del_char = at(delete, i as isize);
            while j < suggestion_len && del_char != at(suggestion, j as isize) {
                j += 1;
            }

            if j == suggestion_len {
                return false;
            }
        }
        true
    }

    fn edits_prefix(&self, key: &str) -> AHashSet<String> {
        let mut hash_set = AHashSet::new();

        let key_len = len(key) as i64;

        if key_len <= self.max_dictionary_edit_distance {
            hash_set.insert("".to_string());
        }

        if key_len > self.prefix_length {
            let shortened_key = slice(key, 0, self.prefix_length as usize);
            hash_set.insert(shortened_key.clone());
            self.edits(&shortened_key, 0, &mut hash_set);
        } else {
            hash_set.insert(key.to_string());
            self.edits(key, 0, &mut hash_set);
        };

        hash_set
    }

    // inexpensive and language independent: only deletes, no transposes + replaces + inserts
    // replaces and inserts are expensive and language dependent (Chinese has 70,000 Unicode Han characters)
    fn edits(&self, word: &str, edit_distance: i64, delete_words: &mut AHashSet<String>) {
        let edit_distance = edit_distance + 1;
        let word_len = len(word);

        if word_len > 1 {
            for i in 0..word_len {
                let delete = remove(word, i);

                if !delete_words.contains(&delete) {
                    delete_words.insert(delete.clone());

                    if edit_distance < self.max_dictionary_edit_distance {
                        self.edits(&delete, edit_distance, delete_words);
                    }
                }
            }
        }
    }

    fn has_different_suffix(
        &self,
        max_edit_distance: i64,
        input: &str,
        input_len: i64,
        candidate_len: i64,
        suggestion: &str,
        suggestion_len: i64,
    ) -> bool {
        // handles the short circuit of the min_suffix_len assignment when the
        // first boolean expression evaluates to false
        let min_suffix_len = if self.prefix_length - max_edit_distance == candidate_len {
            min(input_len, suggestion_len) - self.prefix_length
        } else {
            0
        };

        (self.prefix_length - max_edit_distance == candidate_len)
            && (((min_suffix_len - self.prefix_length) > 1)
                && (suffix(input, (input_len + 1 - min_suffix_len) as usize)
                    != suffix(suggestion, (suggestion_len + 1 - min_suffix_len) as usize)))
            || ((min_suffix_len > 0)
                && (at(input, (input_len - min_suffix_len) as isize)
                    != at(suggestion, (suggestion_len - min_suffix_len) as isize))
                && ((at(input, (input_len - min_suffix_len - 1) as isize)
                    != at(suggestion, (suggestion_len - min_suffix_len) as isize))
                    || (at(input, (input_len - min_suffix_len) as isize)
                        != at(suggestion, (suggestion_len - min_suffix_len - 1) as isize))))
    }
}
