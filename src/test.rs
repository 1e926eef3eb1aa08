#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
    use std::sync::Arc;

    use regex::Regex;

    use crate::{
        damerau_levenshtein, damerau_levenshtein_osa, transfer_case,
        unicode_normalization_form_kc, DistanceAlgorithm, Error, SymSpell, Verbosity,
    };

    fn entries(symspell: &mut SymSpell, entries: &[(&str, usize)]) {
        for (term, count) in entries {
            symspell.create_dictionary_entry(*term, *count);
        }
    }

    fn terms(suggestions: &[crate::Suggestion]) -> Vec<&str> {
        suggestions.iter().map(|s| s.term.as_str()).collect()
    }

    #[test]
    fn test_osa_distance() {
        assert_eq!(0, damerau_levenshtein_osa("", "", 0));
        assert_eq!(3, damerau_levenshtein_osa("", "abc", 3));
        assert_eq!(0, damerau_levenshtein_osa("steam", "steam", 2));
        assert_eq!(3, damerau_levenshtein_osa("kitten", "sitting", 3));
        // adjacent transposition is a single edit
        assert_eq!(1, damerau_levenshtein_osa("bnak", "bank", 2));
        // a transposed pair can not be edited again: CA -> AC -> ABC is not allowed
        assert_eq!(3, damerau_levenshtein_osa("ca", "abc", 3));

        // bound behaviour
        assert_eq!(-1, damerau_levenshtein_osa("xyz", "abc", 1));
        assert_eq!(-1, damerau_levenshtein_osa("a", "abcde", 2));
        assert_eq!(-1, damerau_levenshtein_osa("kitten", "sitting", 2));
    }

    #[test]
    fn test_damerau_levenshtein_distance() {
        assert_eq!(0, damerau_levenshtein("", "", 0));
        assert_eq!(3, damerau_levenshtein("", "abc", 3));
        assert_eq!(1, damerau_levenshtein("ba", "ab", 1));
        assert_eq!(3, damerau_levenshtein("kitten", "sitting", 3));
        // the transposed pair may be edited further: CA -> AC -> ABC
        assert_eq!(2, damerau_levenshtein("ca", "abc", 3));

        // bound behaviour
        assert_eq!(-1, damerau_levenshtein("xyz", "abc", 1));
        assert_eq!(-1, damerau_levenshtein("a", "abcde", 2));
    }

    #[test]
    fn test_suggestion_default_order() {
        let mut suggestions = vec![
            crate::Suggestion::new("abx", 1, 1),
            crate::Suggestion::new("axc", 1, 2),
            crate::Suggestion::new("xbc", 1, 3),
            crate::Suggestion::new("exact", 0, 1),
        ];
        suggestions.sort();
        // distance ascending, then count descending
        assert_eq!(vec!["exact", "xbc", "axc", "abx"], terms(&suggestions));
    }

    #[test]
    fn test_create_dictionary_entry_accumulates_counts() {
        let mut symspell = SymSpell::default();
        assert!(symspell.create_dictionary_entry("steam", 10));
        assert!(!symspell.create_dictionary_entry("steam", 5));

        let results = symspell
            .lookup("steam", Verbosity::Top, Some(0), false, None, false)
            .unwrap();
        assert_eq!(15, results[0].count);
    }

    #[test]
    fn test_additional_counts_should_not_overflow() {
        let mut symspell = SymSpell::default();
        symspell.create_dictionary_entry("word", usize::MAX - 10);
        symspell.create_dictionary_entry("word", usize::MAX - 10);

        let results = symspell
            .lookup("word", Verbosity::Top, Some(0), false, None, false)
            .unwrap();
        assert_eq!(usize::MAX, results[0].count);
    }

    #[test]
    fn test_entries_are_normalized() {
        let mut symspell = SymSpell::default();
        symspell.create_dictionary_entry("  Steam ", 4);

        let results = symspell
            .lookup("steam", Verbosity::Top, Some(0), false, None, false)
            .unwrap();
        assert_eq!("steam", results[0].term);
        assert_eq!(4, results[0].count);
    }

    #[test]
    fn test_below_threshold_words_are_staged() {
        let mut symspell = SymSpell::new(2, 7, 10);
        assert!(!symspell.create_dictionary_entry("pawn", 1));

        // not a dictionary word yet
        let results = symspell
            .lookup("pawn", Verbosity::Top, Some(0), false, None, false)
            .unwrap();
        assert!(results.is_empty());

        // accumulated count reaches the threshold, the word is promoted
        assert!(symspell.create_dictionary_entry("pawn", 9));
        let results = symspell
            .lookup("pawn", Verbosity::Top, Some(0), false, None, false)
            .unwrap();
        assert_eq!(1, results.len());
        assert_eq!(10, results[0].count);
    }

    #[test]
    fn test_should_not_return_low_count_word_that_is_also_a_delete_word() {
        let mut symspell = SymSpell::new(2, 7, 10);
        symspell.create_dictionary_entry("flame", 20);
        symspell.create_dictionary_entry("flam", 1);

        let results = symspell
            .lookup("flam", Verbosity::Top, Some(0), false, None, false)
            .unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_verbosity_should_control_lookup_results() {
        let mut symspell = SymSpell::default();
        entries(&mut symspell, &[("steam", 1), ("steams", 2), ("steem", 3)]);

        for (verbosity, num_results) in [
            (Verbosity::Top, 1),
            (Verbosity::Closest, 2),
            (Verbosity::All, 3),
        ] {
            let results = symspell
                .lookup("steems", verbosity, Some(2), false, None, false)
                .unwrap();
            assert_eq!(num_results, results.len());
        }
    }

    #[test]
    fn test_top_returns_most_frequent() {
        let mut symspell = SymSpell::default();
        entries(&mut symspell, &[("steama", 4), ("steamb", 6), ("steamc", 2)]);

        let results = symspell
            .lookup("stream", Verbosity::Top, Some(2), false, None, false)
            .unwrap();
        assert_eq!(1, results.len());
        assert_eq!("steamb", results[0].term);
        assert_eq!(6, results[0].count);
    }

    #[test]
    fn test_should_find_exact_match() {
        let mut symspell = SymSpell::default();
        entries(&mut symspell, &[("steama", 4), ("steamb", 6), ("steamc", 2)]);

        let results = symspell
            .lookup("streama", Verbosity::Top, Some(2), false, None, false)
            .unwrap();
        assert_eq!(1, results.len());
        assert_eq!("steama", results[0].term);
    }

    #[test]
    fn test_words_with_shared_prefix_should_retain_counts() {
        let mut symspell = SymSpell::new(1, 7, 1);
        symspell.create_dictionary_entry("pipe", 5);
        symspell.create_dictionary_entry("pips", 10);

        let results = symspell
            .lookup("pipe", Verbosity::All, Some(1), false, None, false)
            .unwrap();
        assert_eq!(vec!["pipe", "pips"], terms(&results));
        assert_eq!(5, results[0].count);
        assert_eq!(10, results[1].count);

        let results = symspell
            .lookup("pips", Verbosity::All, Some(1), false, None, false)
            .unwrap();
        assert_eq!(vec!["pips", "pipe"], terms(&results));

        // both at distance 1: the more frequent word first
        let results = symspell
            .lookup("pip", Verbosity::All, Some(1), false, None, false)
            .unwrap();
        assert_eq!(vec!["pips", "pipe"], terms(&results));
    }

    #[test]
    fn test_all_returns_everything_within_bound() {
        let mut symspell = SymSpell::default();
        entries(&mut symspell, &[("hello", 10), ("help", 5), ("heap", 2)]);

        let results = symspell
            .lookup("helo", Verbosity::All, Some(2), false, None, false)
            .unwrap();
        assert_eq!(vec!["hello", "help", "heap"], terms(&results));
        assert_eq!(1, results[0].distance);
        assert_eq!(1, results[1].distance);
        assert_eq!(2, results[2].distance);
    }

    #[test]
    fn test_max_edit_distance_too_large() {
        let mut symspell = SymSpell::default();
        symspell.create_dictionary_entry("flame", 20);

        let result = symspell.lookup("flam", Verbosity::Top, Some(3), false, None, false);
        assert!(matches!(result, Err(Error::DistanceTooLarge)));
        assert!(matches!(
            symspell.lookup_compound("flam out", 3),
            Err(Error::DistanceTooLarge)
        ));
        assert!(matches!(
            symspell.word_segmentation("flamout", Some(3), None, None),
            Err(Error::DistanceTooLarge)
        ));
    }

    #[test]
    fn test_include_unknown() {
        let mut symspell = SymSpell::new(2, 7, 10);
        symspell.create_dictionary_entry("flame", 20);
        symspell.create_dictionary_entry("flam", 1);

        let results = symspell
            .lookup("flam", Verbosity::Top, Some(0), true, None, false)
            .unwrap();
        assert_eq!(1, results.len());
        assert_eq!("flam", results[0].term);
        assert_eq!(1, results[0].distance);
        assert_eq!(0, results[0].count);
    }

    #[test]
    fn test_ignore_token_avoids_exact_match_early_exit() {
        let mut symspell = SymSpell::new(2, 7, 10);
        symspell.create_dictionary_entry("flame", 20);
        let pattern = Regex::new(r"\d{2}\w*\b").unwrap();

        let results = symspell
            .lookup("24th", Verbosity::All, Some(2), false, Some(&pattern), false)
            .unwrap();
        assert_eq!(1, results.len());
        assert_eq!("24th", results[0].term);
        assert_eq!(0, results[0].distance);
        assert_eq!(1, results[0].count);
    }

    #[test]
    fn test_transfer_casing_on_lookup() {
        for (typo, correction) in [
            ("Stream", "Steam"),
            ("STREAM", "STEAM"),
            ("stream", "steam"),
        ] {
            let mut symspell = SymSpell::default();
            symspell.create_dictionary_entry("steam", 4);
            let results = symspell
                .lookup(typo, Verbosity::Top, Some(2), false, None, true)
                .unwrap();
            assert_eq!(correction, results[0].term);
        }

        let mut symspell = SymSpell::default();
        symspell.create_dictionary_entry("i", 4);
        let results = symspell
            .lookup("I", Verbosity::Top, Some(2), false, None, true)
            .unwrap();
        assert_eq!("I", results[0].term);
    }

    #[test]
    fn test_empty_input() {
        let mut symspell = SymSpell::default();
        symspell.create_dictionary_entry("ab", 5);

        let results = symspell
            .lookup("", Verbosity::Top, Some(2), false, None, false)
            .unwrap();
        assert!(results.is_empty());

        let results = symspell
            .lookup("", Verbosity::Top, Some(2), true, None, false)
            .unwrap();
        assert_eq!(1, results.len());
        assert_eq!("", results[0].term);
        assert_eq!(3, results[0].distance);
    }

    #[test]
    fn test_custom_ranker_changes_order() {
        let mut symspell_default = SymSpell::default();
        entries(&mut symspell_default, &[("xbc", 3), ("axc", 2), ("abx", 1)]);
        let default_results = symspell_default
            .lookup("abc", Verbosity::All, Some(1), false, None, false)
            .unwrap();
        assert_eq!(vec!["xbc", "axc", "abx"], terms(&default_results));

        let mut symspell_ranked =
            SymSpell::default().with_ranker(Box::new(|_phrase, mut suggestions, _verbosity| {
                suggestions.sort_by(|a, b| a.term.cmp(&b.term));
                suggestions
            }));
        entries(&mut symspell_ranked, &[("xbc", 3), ("axc", 2), ("abx", 1)]);
        let ranked_results = symspell_ranked
            .lookup("abc", Verbosity::All, Some(1), false, None, false)
            .unwrap();
        assert_eq!(vec!["abx", "axc", "xbc"], terms(&ranked_results));

        // detaching the ranker restores the default order
        symspell_ranked.clear_ranker();
        let results = symspell_ranked
            .lookup("abc", Verbosity::All, Some(1), false, None, false)
            .unwrap();
        assert_eq!(vec!["xbc", "axc", "abx"], terms(&results));
    }

    #[test]
    fn test_ranker_applied_for_closest() {
        let mut symspell = SymSpell::default();
        entries(&mut symspell, &[("steama", 4), ("steamb", 6), ("steamc", 2)]);
        symspell.set_ranker(Box::new(|_phrase, mut suggestions, verbosity| {
            assert_eq!(Verbosity::Closest, verbosity);
            assert!(suggestions.len() > 1);
            suggestions.sort_by(|a, b| a.term.cmp(&b.term));
            suggestions
        }));

        let results = symspell
            .lookup("stream", Verbosity::Closest, Some(2), false, None, false)
            .unwrap();
        let result_terms = terms(&results);
        let mut sorted_terms = result_terms.clone();
        sorted_terms.sort();
        assert_eq!(sorted_terms, result_terms);
    }

    #[test]
    fn test_ranker_can_filter_suggestions() {
        let mut symspell =
            SymSpell::default().with_ranker(Box::new(|_phrase, suggestions, _verbosity| {
                suggestions
                    .into_iter()
                    .filter(|s| s.term.chars().all(char::is_alphabetic))
                    .collect()
            }));
        entries(&mut symspell, &[("hello", 10), ("hello1", 5), ("hello2", 1)]);

        let results = symspell
            .lookup("hello", Verbosity::All, Some(1), false, None, false)
            .unwrap();
        assert_eq!(vec!["hello"], terms(&results));
    }

    #[test]
    fn test_ranker_called_for_top_exact_match() {
        let called = Arc::new(AtomicBool::new(false));
        let called_in_ranker = Arc::clone(&called);

        let mut symspell =
            SymSpell::default().with_ranker(Box::new(move |_phrase, suggestions, verbosity| {
                called_in_ranker.store(true, Ordering::SeqCst);
                assert_eq!(Verbosity::Top, verbosity);
                assert_eq!(1, suggestions.len());
                assert_eq!("hello", suggestions[0].term);
                suggestions
            }));
        symspell.create_dictionary_entry("hello", 5);

        let results = symspell
            .lookup("hello", Verbosity::Top, Some(0), false, None, false)
            .unwrap();
        assert!(called.load(Ordering::SeqCst));
        assert_eq!(1, results.len());
        assert_eq!("hello", results[0].term);
    }

    #[test]
    fn test_ranker_called_for_ignore_token() {
        let called = Arc::new(AtomicBool::new(false));
        let called_in_ranker = Arc::clone(&called);

        let mut symspell =
            SymSpell::default().with_ranker(Box::new(move |_phrase, suggestions, _verbosity| {
                called_in_ranker.store(true, Ordering::SeqCst);
                assert_eq!(1, suggestions.len());
                assert_eq!("24th", suggestions[0].term);
                suggestions
            }));
        // keep the longest-term bound large enough that the too-long early
        // termination does not trigger before the ignore-token branch
        symspell.create_dictionary_entry("officeon", 1);

        let pattern = Regex::new(r"\d{2}\w*\b").unwrap();
        let results = symspell
            .lookup("24th", Verbosity::Top, Some(2), false, Some(&pattern), false)
            .unwrap();
        assert!(called.load(Ordering::SeqCst));
        assert_eq!(1, results.len());
        assert_eq!("24th", results[0].term);
    }

    #[test]
    fn test_ranker_called_for_include_unknown() {
        let distance_seen = Arc::new(AtomicI64::new(-1));
        let distance_in_ranker = Arc::clone(&distance_seen);

        let symspell =
            SymSpell::default().with_ranker(Box::new(move |_phrase, suggestions, _verbosity| {
                assert_eq!(1, suggestions.len());
                assert_eq!("zzzz", suggestions[0].term);
                assert_eq!(0, suggestions[0].count);
                distance_in_ranker.store(suggestions[0].distance, Ordering::SeqCst);
                suggestions
            }));

        let results = symspell
            .lookup("zzzz", Verbosity::Top, Some(2), true, None, false)
            .unwrap();
        // distance of the synthetic unknown is max_edit_distance + 1
        assert_eq!(3, distance_seen.load(Ordering::SeqCst));
        assert_eq!(1, results.len());
        assert_eq!("zzzz", results[0].term);
    }

    #[test]
    fn test_ranker_never_called_on_empty() {
        let called = Arc::new(AtomicBool::new(false));
        let called_in_ranker = Arc::clone(&called);

        let symspell =
            SymSpell::default().with_ranker(Box::new(move |_phrase, suggestions, _verbosity| {
                called_in_ranker.store(true, Ordering::SeqCst);
                suggestions
            }));

        let results = symspell
            .lookup("zzzz", Verbosity::Top, Some(2), false, None, false)
            .unwrap();
        assert!(results.is_empty());
        assert!(!called.load(Ordering::SeqCst));
    }

    #[test]
    fn test_delete_dictionary_entry() {
        let mut symspell = SymSpell::default();
        symspell.create_dictionary_entry("stream", 10);
        symspell.create_dictionary_entry("steam", 5);
        assert_eq!(6, symspell.max_length());

        assert!(symspell.delete_dictionary_entry("stream"));
        assert!(!symspell.delete_dictionary_entry("stream"));
        assert_eq!(5, symspell.max_length());
        assert_eq!(1, symspell.get_dictionary_size());

        // the deleted word is gone from the delete index as well
        let results = symspell
            .lookup("sream", Verbosity::Top, Some(2), false, None, false)
            .unwrap();
        assert_eq!(1, results.len());
        assert_eq!("steam", results[0].term);
    }

    #[test]
    fn test_distance_algorithm_selection() {
        // ca -> abc needs an edit inside the transposed pair, which only the
        // unrestricted Damerau-Levenshtein variant allows within distance 2
        let mut symspell = SymSpell::default();
        symspell.create_dictionary_entry("abc", 10);

        let results = symspell
            .lookup("ca", Verbosity::Top, Some(2), false, None, false)
            .unwrap();
        assert!(results.is_empty());

        symspell.set_distance_algorithm(DistanceAlgorithm::DamerauLevenshtein);
        let results = symspell
            .lookup("ca", Verbosity::Top, Some(2), false, None, false)
            .unwrap();
        assert_eq!(1, results.len());
        assert_eq!("abc", results[0].term);
        assert_eq!(2, results[0].distance);
    }

    #[test]
    fn test_load_dictionary_line() {
        let mut symspell = SymSpell::default();
        assert!(symspell.load_dictionary_line("the 23135851162", 0, 1, " "));
        assert!(!symspell.load_dictionary_line("the", 0, 1, " "));
        assert!(!symspell.load_dictionary_line("the abc", 0, 1, " "));

        let results = symspell
            .lookup("the", Verbosity::Top, Some(0), false, None, false)
            .unwrap();
        assert_eq!(23135851162, results[0].count);
    }

    #[test]
    fn test_lookup_compound() {
        let mut symspell = SymSpell::default();
        entries(
            &mut symspell,
            &[
                ("where", 123_456_999),
                ("is", 456_542_970),
                ("the", 1_156_408_990),
                ("love", 83_123_336),
            ],
        );

        let results = symspell.lookup_compound("whereis th elove", 2).unwrap();
        assert_eq!(1, results.len());
        assert_eq!("where is the love", results[0].term);
        assert_eq!(2, results[0].distance);
    }

    #[test]
    fn test_lookup_compound_long_phrase() {
        let mut symspell = SymSpell::default();
        entries(
            &mut symspell,
            &[
                ("where", 123_456_999),
                ("is", 456_542_970),
                ("the", 1_156_408_990),
                ("love", 83_123_336),
                ("he", 144_374_545),
                ("had", 138_421_617),
                ("dated", 3_567_606),
                ("for", 923_270_811),
                ("much", 126_876_356),
                ("of", 1_314_485_431),
                ("past", 31_327_150),
                ("who", 141_399_626),
                ("couldn't", 6_345_731),
                ("read", 60_286_771),
                ("in", 1_003_463_183),
                ("sixth", 4_962_838),
                ("grade", 12_966_172),
            ],
        );

        let typo = "whereis th elove hehad dated forImuch of thepast who couqdn'tread in sixtgrade";
        let correction =
            "where is the love he had dated for much of the past who couldn't read in sixth grade";
        let results = symspell.lookup_compound(typo, 2).unwrap();
        assert_eq!(1, results.len());
        assert_eq!(correction, results[0].term);
        assert_eq!(9, results[0].distance);
    }

    #[test]
    fn test_lookup_compound_is_a_single_trimmed_suggestion() {
        let mut symspell = SymSpell::default();
        symspell.create_dictionary_entry("ab", 5);

        let results = symspell.lookup_compound("  qwerasdf zxcvzxcv ", 2).unwrap();
        assert_eq!(1, results.len());
        // unknown terms remain unchanged, joined by single spaces
        assert_eq!("qwerasdf zxcvzxcv", results[0].term);
    }

    #[test]
    fn test_lookup_compound_goes_through_ranker() {
        let symspell =
            SymSpell::default().with_ranker(Box::new(|_phrase, mut suggestions, verbosity| {
                assert_eq!(Verbosity::Top, verbosity);
                for suggestion in &mut suggestions {
                    suggestion.term = suggestion.term.to_uppercase();
                }
                suggestions
            }));

        let results = symspell.lookup_compound("qwer zxcv", 2).unwrap();
        assert_eq!(1, results.len());
        assert_eq!("QWER ZXCV", results[0].term);
    }

    #[test]
    fn test_word_segmentation() {
        let mut symspell = SymSpell::default();
        entries(
            &mut symspell,
            &[
                ("the", 23_135_851_162),
                ("quick", 157_036_180),
                ("brown", 76_657_348),
                ("fox", 30_134_880),
                ("jumps", 4_903_540),
                ("over", 593_086_170),
                ("lazy", 12_779_349),
                ("dog", 146_559_324),
            ],
        );

        let typo = "thequickbrownfoxjumpsoverthelazydog";
        let correction = "the quick brown fox jumps over the lazy dog";
        let result = symspell
            .word_segmentation(typo, Some(0), None, None)
            .unwrap();
        assert_eq!(correction, result.segmented_string);
        assert_eq!(correction, result.corrected_string);
        // one inserted space per word boundary
        assert_eq!(8, result.distance_sum);

        // works with upper case and preserves case
        let typo = "THEQUICKBROWNFOXJUMPSOVERTHELAZYDOG";
        let correction = "THE QUICK BROWN FOX JUMPS OVER THE LAZY DOG";
        let result = symspell
            .word_segmentation(typo, Some(0), None, None)
            .unwrap();
        assert_eq!(correction, result.segmented_string);
    }

    #[test]
    fn test_word_segmentation_corrects_spelling() {
        let mut symspell = SymSpell::default();
        entries(
            &mut symspell,
            &[
                ("the", 23_135_851_162),
                ("quick", 157_036_180),
                ("brown", 76_657_348),
                ("fox", 30_134_880),
            ],
        );

        // the segmented string keeps the typo, the corrected string fixes it
        let result = symspell
            .word_segmentation("thequickbrwnfox", Some(1), None, None)
            .unwrap();
        assert_eq!("the quick brwn fox", result.segmented_string);
        assert_eq!("the quick brown fox", result.corrected_string);

        // spell correct and preserve case for the corrected term: THF -> THE
        let result = symspell
            .word_segmentation("THFQUICKBROWNFOX", Some(1), None, None)
            .unwrap();
        assert_eq!("THF QUICK BROWN FOX", result.segmented_string);
        assert_eq!("THE QUICK BROWN FOX", result.corrected_string);
    }

    #[test]
    fn test_word_segmentation_keeps_punctuation_adjacent() {
        let mut symspell = SymSpell::default();
        entries(
            &mut symspell,
            &[
                ("i", 3_086_225_277),
                ("drank", 3_249_815),
                ("the", 23_135_851_162),
                ("glasses", 3_811_065),
                ("contents", 9_249_707),
                ("which", 810_514_085),
                ("tasted", 1_635_282),
                ("of", 1_314_485_431),
                ("elderberries", 13_387),
            ],
        );

        let typo = "Idranktheglasses’contents,whichtastedofelderberries";
        let correction = "I drank the glasses’ contents, which tasted of elderberries";
        let result = symspell
            .word_segmentation(typo, Some(0), None, None)
            .unwrap();
        assert_eq!(correction, result.segmented_string);
    }

    #[test]
    fn test_chinese_word_segmentation() {
        let mut symspell = SymSpell::default();
        entries(
            &mut symspell,
            &[("部分", 23_456), ("居民", 12_345), ("生活", 34_567), ("水平", 9_876)],
        );

        let result = symspell
            .word_segmentation("部分居民生活水平", Some(0), None, None)
            .unwrap();
        assert_eq!("部分 居民 生活 水平", result.segmented_string);
    }

    #[test]
    fn test_word_segmentation_empty_input() {
        let symspell = SymSpell::default();
        let result = symspell.word_segmentation("", None, None, None).unwrap();
        assert_eq!("", result.segmented_string);
        assert_eq!(0, result.distance_sum);
    }

    #[test]
    fn test_normalization() {
        let typo = "scientiﬁc";
        let correction = "scientific";
        let result = unicode_normalization_form_kc(typo);
        assert_eq!(correction, result);
    }

    #[test]
    fn test_transfer_case() {
        // transfer case with UTF8 characters, with shorter source
        let source = "LEG MOZE OZNACZAC LAKE W POBLIZU RZEKI";
        let target = "Łęg może oznaczać łąkę w pobliżu rzeki (łąka łęgowa)";
        let correction = "ŁĘG MOŻE OZNACZAĆ ŁĄKĘ W POBLIŻU RZEKI (ŁĄKA ŁĘGOWA)";
        let result = transfer_case(source, target);
        assert_eq!(correction, result);

        // transfer case with UTF8 characters, with equal lengths
        let source = "LEG MOZE OZNACZAC LAKE W POBLIZU RZEKI (ŁĄKA ŁĘGOWA)";
        let target = "Łęg może oznaczać łąkę w pobliżu rzeki (łąka łęgowa)";
        let correction = "ŁĘG MOŻE OZNACZAĆ ŁĄKĘ W POBLIŻU RZEKI (ŁĄKA ŁĘGOWA)";
        let result = transfer_case(source, target);
        assert_eq!(correction, result);
    }
}
