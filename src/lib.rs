/*!

Spelling correction & fuzzy search based on the Symmetric Delete spelling correction
algorithm, with a pluggable suggestion ranker.

#### Single word spelling correction

```rust
use symrank::{SymSpell, Verbosity};

let max_edit_distance_dictionary = 2; //maximum edit distance per dictionary precalculation
let mut symspell: SymSpell = SymSpell::new(max_edit_distance_dictionary, 7, 1);

// frequency dictionary: term + frequency count
symspell.create_dictionary_entry("house", 231_310_420);
symspell.create_dictionary_entry("hour", 93_141_101);

//lookup suggestions for single-word input strings
let input_term = "hous";
let suggestion_verbosity = Verbosity::Closest; //Top, Closest, All
let max_edit_distance_lookup = 1; //max edit distance per lookup (<= max_edit_distance_dictionary)
let suggestions = symspell
    .lookup(input_term, suggestion_verbosity, Some(max_edit_distance_lookup), false, None, false)
    .unwrap();
//display suggestions, edit distance and term frequency
println!("{:?}", suggestions);
```

#### Custom suggestion ranking

A ranker replaces the default (distance ascending, count descending) order on every
non-empty suggestion list. It may also filter or rebuild the suggestions.

```rust
use symrank::{SymSpell, Verbosity};

let mut symspell = SymSpell::default().with_ranker(Box::new(|_phrase, suggestions, _verbosity| {
    //keep only purely alphabetic suggestions
    suggestions
        .into_iter()
        .filter(|suggestion| suggestion.term.chars().all(char::is_alphabetic))
        .collect()
}));
symspell.create_dictionary_entry("hello", 10);
symspell.create_dictionary_entry("hello1", 5);

let suggestions = symspell
    .lookup("hello", Verbosity::All, Some(1), false, None, false)
    .unwrap();
assert_eq!(1, suggestions.len());
```

#### Compound aware multi-word spelling correction

```rust
use symrank::SymSpell;

let mut symspell = SymSpell::default();
for (term, count) in [
    ("where", 123_456_999),
    ("is", 456_542_970),
    ("the", 1_156_408_990),
    ("love", 83_123_336),
] {
    symspell.create_dictionary_entry(term, count);
}

//lookup suggestions for multi-word input strings (supports compound splitting & merging)
let compound_suggestions = symspell.lookup_compound("whereis th elove", 2).unwrap();
assert_eq!("where is the love", compound_suggestions[0].term);
```

#### Word segmentation of noisy text

```rust
use symrank::SymSpell;

let mut symspell = SymSpell::default();
for (term, count) in [("the", 23_135_851_162), ("quick", 157_036_180), ("brown", 76_657_348), ("fox", 30_134_880)] {
    symspell.create_dictionary_entry(term, count);
}

//word segmentation and correction for multi-word input strings with/without spaces
let result = symspell.word_segmentation("thequickbrownfox", Some(0), None, None).unwrap();
assert_eq!("the quick brown fox", result.segmented_string);
```

*/

#[doc = include_str!("../README.md")]
#[cfg(doctest)]
pub struct ReadmeDoctests;

mod edit_distance;
mod error;
mod helpers;
mod suggestion;
mod symspell;
mod test;

pub use edit_distance::{damerau_levenshtein, damerau_levenshtein_osa, DistanceAlgorithm};
pub use error::Error;
pub use helpers::{parse_words, transfer_case, unicode_normalization_form_kc};
pub use suggestion::{Composition, Suggestion, Verbosity};
pub use symspell::{Ranker, SymSpell};
