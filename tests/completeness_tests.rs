//! Exhaustive correctness checks for the pigeonhole index
//!
//! Every lookup is compared against a brute-force scan of the whole reference set,
//! so these tests catch both missed matches (completeness) and wrong distances or
//! tie handling (soundness).

use std::collections::BTreeSet;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use barcode_solver::matching::distance::levenshtein;
use barcode_solver::{Alphabet, BarcodeMatch, BarcodeSet, BarcodeSetConfig};

fn random_barcode(rng: &mut StdRng, symbols: &[u8], len: usize) -> String {
    (0..len)
        .map(|_| char::from(symbols[rng.random_range(0..symbols.len())]))
        .collect()
}

fn random_references(
    rng: &mut StdRng,
    symbols: &[u8],
    count: usize,
    lengths: std::ops::RangeInclusive<usize>,
) -> Vec<String> {
    let mut seen = BTreeSet::new();
    let mut refs = Vec::new();
    while refs.len() < count {
        let len = rng.random_range(lengths.clone());
        let barcode = random_barcode(rng, symbols, len);
        if seen.insert(barcode.clone()) {
            refs.push(barcode);
        }
    }
    refs
}

/// Every reference at the minimum distance from `query`, if within `max_dist`
fn brute_force(refs: &[String], query: &str, max_dist: usize) -> Vec<BarcodeMatch> {
    let scored: Vec<(usize, &String)> = refs
        .iter()
        .map(|r| (levenshtein(query.as_bytes(), r.as_bytes()), r))
        .filter(|(d, _)| *d <= max_dist)
        .collect();
    let Some(min) = scored.iter().map(|(d, _)| *d).min() else {
        return Vec::new();
    };
    let mut matches: Vec<BarcodeMatch> = scored
        .into_iter()
        .filter(|(d, _)| *d == min)
        .map(|(d, r)| BarcodeMatch::new(r.as_str(), query, d))
        .collect();
    matches.sort();
    matches
}

/// All strings exactly one edit away from `s`
fn single_edits(s: &str, symbols: &[u8]) -> BTreeSet<String> {
    let bytes = s.as_bytes();
    let mut out = BTreeSet::new();
    for i in 0..=bytes.len() {
        for &c in symbols {
            let mut inserted = bytes.to_vec();
            inserted.insert(i, c);
            out.insert(String::from_utf8(inserted).unwrap());
        }
        if i < bytes.len() {
            let mut deleted = bytes.to_vec();
            deleted.remove(i);
            out.insert(String::from_utf8(deleted).unwrap());
            for &c in symbols {
                let mut substituted = bytes.to_vec();
                substituted[i] = c;
                out.insert(String::from_utf8(substituted).unwrap());
            }
        }
    }
    out
}

/// All strings within `depth` edits of `s`
fn neighbourhood(s: &str, symbols: &[u8], depth: usize) -> BTreeSet<String> {
    let mut all = BTreeSet::from([s.to_string()]);
    let mut frontier = all.clone();
    for _ in 0..depth {
        let mut next = BTreeSet::new();
        for q in &frontier {
            for e in single_edits(q, symbols) {
                if all.insert(e.clone()) {
                    next.insert(e);
                }
            }
        }
        frontier = next;
    }
    all
}

fn assert_matches_brute_force(set: &BarcodeSet, refs: &[String], queries: &BTreeSet<String>) {
    for query in queries {
        let expected = brute_force(refs, query, set.max_dist());
        let actual = set.lookup(query).unwrap();
        assert_eq!(
            actual,
            expected,
            "query {query} (max_dist {}, segments {})",
            set.max_dist(),
            set.segments()
        );
    }
}

#[test]
fn test_every_reference_finds_itself() {
    let mut rng = StdRng::seed_from_u64(7);
    let refs = random_references(&mut rng, b"ACGT", 500, 16..=16);

    for max_dist in 0..=3 {
        let set = BarcodeSet::create(refs.clone(), max_dist).unwrap();
        for r in &refs {
            assert_eq!(
                set.lookup(r).unwrap(),
                vec![BarcodeMatch::new(r.as_str(), r.as_str(), 0)]
            );
        }
    }
}

#[test]
fn test_exhaustive_binary_alphabet() {
    // Every string up to length 9 over {A, C}, against short binary references
    let symbols = b"AC";
    let mut rng = StdRng::seed_from_u64(11);
    let refs = random_references(&mut rng, symbols, 12, 4..=7);

    let mut queries = BTreeSet::from([String::new()]);
    let mut frontier = queries.clone();
    for _ in 0..9 {
        let mut next = BTreeSet::new();
        for q in &frontier {
            for &c in symbols {
                next.insert(format!("{q}{}", char::from(c)));
            }
        }
        queries.extend(next.iter().cloned());
        frontier = next;
    }

    let alphabet = Alphabet::new(symbols).unwrap();
    for max_dist in 0..=3 {
        for segments in 1..=max_dist + 1 {
            let config = BarcodeSetConfig::new(max_dist)
                .with_segments(segments)
                .with_alphabet(alphabet.clone());
            let set = BarcodeSet::with_config(refs.clone(), config).unwrap();
            assert_matches_brute_force(&set, &refs, &queries);
        }
    }
}

#[test]
fn test_neighbourhoods_within_budget() {
    let symbols = b"ACGT";
    let mut rng = StdRng::seed_from_u64(23);
    let refs = random_references(&mut rng, symbols, 30, 8..=8);

    for max_dist in 1..=2 {
        for segments in 1..=max_dist + 1 {
            let config = BarcodeSetConfig::new(max_dist).with_segments(segments);
            let set = BarcodeSet::with_config(refs.clone(), config).unwrap();
            for r in refs.iter().take(6) {
                let queries = neighbourhood(r, symbols, max_dist);
                assert_matches_brute_force(&set, &refs, &queries);
            }
        }
    }
}

#[test]
fn test_every_single_edit_is_corrected() {
    let symbols = b"ACGT";
    let mut rng = StdRng::seed_from_u64(31);
    let refs = random_references(&mut rng, symbols, 200, 12..=12);
    let set = BarcodeSet::create(refs.clone(), 1).unwrap();

    for r in &refs {
        for q in single_edits(r, symbols) {
            if q == *r {
                continue;
            }
            let matches = set.lookup(&q).unwrap();
            assert!(
                matches.iter().any(|m| m.reference == *r && m.distance == 1)
                    || matches.iter().any(|m| m.distance == 0),
                "{r} not recovered from {q}: {matches:?}"
            );
        }
    }
}

#[test]
fn test_random_perturbations_long_barcodes() {
    let symbols = b"ACGT";
    let mut rng = StdRng::seed_from_u64(47);
    let refs = random_references(&mut rng, symbols, 1000, 16..=16);

    for max_dist in 1..=3 {
        let set = BarcodeSet::create(refs.clone(), max_dist).unwrap();
        let mut queries = BTreeSet::new();
        for _ in 0..300 {
            let mut q = refs[rng.random_range(0..refs.len())].clone();
            for _ in 0..rng.random_range(0..=max_dist + 1) {
                let edits: Vec<String> = single_edits(&q, symbols).into_iter().collect();
                q = edits[rng.random_range(0..edits.len())].clone();
            }
            queries.insert(q);
        }
        assert_matches_brute_force(&set, &refs, &queries);
    }
}

#[test]
fn test_mixed_reference_lengths() {
    let symbols = b"ACGT";
    let mut rng = StdRng::seed_from_u64(59);
    let refs: Vec<String> = (5..=9)
        .flat_map(|len| random_references(&mut rng, symbols, 12, len..=len))
        .collect();

    for max_dist in 1..=2 {
        let set = BarcodeSet::create(refs.clone(), max_dist).unwrap();
        assert_eq!(set.lengths(), vec![5, 6, 7, 8, 9]);
        for r in refs.iter().take(10) {
            let queries = neighbourhood(r, symbols, max_dist);
            assert_matches_brute_force(&set, &refs, &queries);
        }
    }
}

#[test]
fn test_results_never_exceed_max_dist() {
    let symbols = b"ACGT";
    let mut rng = StdRng::seed_from_u64(61);
    let refs = random_references(&mut rng, symbols, 300, 10..=10);
    let set = BarcodeSet::create(refs.clone(), 2).unwrap();

    for _ in 0..2000 {
        let len = rng.random_range(6..=14);
        let q = random_barcode(&mut rng, symbols, len);
        for m in set.lookup(&q).unwrap() {
            assert!(m.distance <= 2);
            assert_eq!(
                levenshtein(m.query.as_bytes(), m.reference.as_bytes()),
                m.distance
            );
        }
    }
}

#[test]
fn test_perturbation_beyond_budget_is_rejected() {
    let mut rng = StdRng::seed_from_u64(67);
    let refs = random_references(&mut rng, b"ACGT", 200, 12..=12);
    let max_dist = 2;
    let set = BarcodeSet::create(refs.clone(), max_dist).unwrap();

    // Replace symbols with N, which no reference contains; each one is a
    // mandatory edit against every reference.
    let mut query = refs[0].clone().into_bytes();
    for (step, i) in (0..query.len()).step_by(2).enumerate() {
        query[i] = b'N';
        let q = String::from_utf8(query.clone()).unwrap();
        let matches = set.lookup(&q).unwrap();
        assert_eq!(matches, brute_force(&refs, &q, max_dist));
        if step + 1 > max_dist {
            assert!(matches.is_empty(), "{q} should be out of range");
        }
    }
}

#[test]
fn test_distance_is_symmetric() {
    let mut rng = StdRng::seed_from_u64(71);
    for _ in 0..500 {
        let a_len = rng.random_range(0..=12);
        let b_len = rng.random_range(0..=12);
        let a = random_barcode(&mut rng, b"ACGTN", a_len);
        let b = random_barcode(&mut rng, b"ACGTN", b_len);
        assert_eq!(
            levenshtein(a.as_bytes(), b.as_bytes()),
            levenshtein(b.as_bytes(), a.as_bytes())
        );
    }
}

#[test]
fn test_rebuild_is_deterministic() {
    let symbols = b"ACGT";
    let mut rng = StdRng::seed_from_u64(73);
    let refs = random_references(&mut rng, symbols, 400, 10..=10);
    let mut shuffled = refs.clone();
    shuffled.shuffle(&mut rng);

    let first = BarcodeSet::create(refs.clone(), 2).unwrap();
    let again = BarcodeSet::create(refs.clone(), 2).unwrap();
    let reordered = BarcodeSet::create(shuffled, 2).unwrap();

    assert_eq!(first.stats(), again.stats());
    assert_eq!(first.stats(), reordered.stats());

    for _ in 0..500 {
        let base = &refs[rng.random_range(0..refs.len())];
        let edits: Vec<String> = single_edits(base, symbols).into_iter().collect();
        let q = &edits[rng.random_range(0..edits.len())];
        let expected = first.lookup(q).unwrap();
        assert_eq!(again.lookup(q).unwrap(), expected);
        assert_eq!(reordered.lookup(q).unwrap(), expected);
    }
}

#[test]
fn test_substring_readme_scenario() {
    let set = BarcodeSet::create(["AGTGTGGCTTGCGGAC"], 1).unwrap();
    let matches = set
        .lookup_substrings("GTGAGAGTGTGGCTTGCGGAGCATAGA")
        .unwrap();

    assert!(matches.len() > 1, "expected several windows: {matches:?}");
    assert!(matches.iter().all(|m| m.reference == "AGTGTGGCTTGCGGAC"));
    assert!(matches.iter().all(|m| m.distance == 1));
    assert!(matches.contains(&BarcodeMatch::new(
        "AGTGTGGCTTGCGGAC",
        "AGTGTGGCTTGCGGAG",
        1
    )));
    assert!(matches.contains(&BarcodeMatch::new(
        "AGTGTGGCTTGCGGAC",
        "AGTGTGGCTTGCGGA",
        1
    )));
}

#[test]
fn test_substrings_with_junk_flanks() {
    let symbols = b"ACGT";
    let mut rng = StdRng::seed_from_u64(79);
    let refs = random_references(&mut rng, symbols, 300, 16..=16);
    let set = BarcodeSet::create(refs.clone(), 1).unwrap();

    for r in refs.iter().take(50) {
        let edits: Vec<String> = single_edits(r, symbols).into_iter().collect();
        let perturbed = &edits[rng.random_range(0..edits.len())];
        let left = random_barcode(&mut rng, symbols, 5);
        let right = random_barcode(&mut rng, symbols, 7);
        let read = format!("{left}{perturbed}{right}");

        let matches = set.lookup_substrings(&read).unwrap();
        assert!(!matches.is_empty(), "nothing found in {read}");
        let best = matches[0].distance;
        assert!(best <= 1);
        // the window holding the perturbed barcode is always within one edit of r
        if best == 1 || perturbed == r {
            assert!(
                matches.iter().any(|m| m.reference == *r),
                "{r} missing from {matches:?}"
            );
        }
        for m in &matches {
            assert!(read.contains(&m.query));
            assert_eq!(
                levenshtein(m.query.as_bytes(), m.reference.as_bytes()),
                m.distance
            );
        }
    }
}
