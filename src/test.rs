use hashbrown::HashSet;

use crate::{normalize, polyominoes, Enumeration, Polyomino, Shape, Signature, Symmetry};

/// Number of free polyominoes with 1 to 8 squares.
const FREE_POLYOMINOES: [usize; 8] = [1, 1, 2, 5, 12, 35, 108, 369];

fn shape(text: &str) -> Shape {
    text.parse().unwrap()
}

#[test]
pub fn known_counts() {
    let counts: Vec<_> = Enumeration::new(8).unwrap().map(|l| l.len()).collect();

    assert_eq!(counts, FREE_POLYOMINOES);
}

#[test]
pub fn single_size_matches_levels() {
    for (idx, expected) in FREE_POLYOMINOES.iter().enumerate().take(6) {
        assert_eq!(polyominoes(idx + 1).unwrap().len(), *expected);
    }
}

#[test]
pub fn monomino() {
    let all = polyominoes(1).unwrap();

    assert_eq!(all.len(), 1);
    assert_eq!(all[0].representation().signature().to_string(), "[[0,0]]");
}

#[test]
pub fn domino() {
    let all = polyominoes(2).unwrap();

    assert_eq!(all.len(), 1);

    let repr = all[0].representation().signature();
    let horizontal: Signature = "[[0,0],[1,0]]".parse().unwrap();
    let vertical: Signature = "[[0,0],[0,1]]".parse().unwrap();
    assert!(repr == horizontal || repr == vertical);

    assert!(all[0].is_represented_by(&shape("[[0,0],[1,0]]")));
    assert!(all[0].is_represented_by(&shape("[[0,0],[0,1]]")));
}

#[test]
pub fn free_tetrominoes() {
    let all = polyominoes(4).unwrap();

    #[rustfmt::skip]
    let named = [
        ("I", "[[0,0],[1,0],[2,0],[3,0]]"),
        ("O", "[[0,0],[1,0],[0,1],[1,1]]"),
        ("T", "[[0,0],[1,0],[2,0],[1,1]]"),
        ("S", "[[0,0],[1,0],[1,1],[2,1]]"),
        ("L", "[[0,0],[1,0],[2,0],[2,1]]"),
    ];

    assert_eq!(all.len(), named.len());

    for (name, text) in named {
        let s = shape(text);
        let matches = all.iter().filter(|p| p.is_represented_by(&s)).count();
        assert_eq!(matches, 1, "{name} should be found exactly once");
    }

    // Z and J are mirror images of S and L.
    for mirrored in ["[[0,1],[1,1],[1,0],[2,0]]", "[[0,0],[1,0],[2,0],[0,1]]"] {
        let s = shape(mirrored);
        assert!(all.iter().any(|p| p.is_represented_by(&s)), "{mirrored}");
    }
}

#[test]
pub fn results_are_pairwise_distinct() {
    for n in 1..=6 {
        let all = polyominoes(n).unwrap();

        for (i, a) in all.iter().enumerate() {
            for (j, b) in all.iter().enumerate() {
                if i != j {
                    assert!(
                        !a.is_represented_by(&b.representation()),
                        "N = {n}: {a} and {b} are the same polyomino"
                    );
                }
            }
        }

        let unique: HashSet<_> = all.iter().collect();
        assert_eq!(unique.len(), all.len());
    }
}

#[test]
pub fn results_are_valid_polyominoes() {
    for n in 1..=7 {
        for p in polyominoes(n).unwrap() {
            let repr = p.representation();

            assert_eq!(repr.len(), n);
            assert_eq!(p.size(), n);
            assert!(repr.is_connected(), "{p} is not connected");
            assert!((1..=8).contains(&p.symmetry_count()));
            assert_eq!(8 % p.symmetry_count(), 0);
        }
    }
}

#[test]
pub fn closed_under_symmetry() {
    for p in polyominoes(6).unwrap() {
        let repr = p.representation();

        for symmetry in Symmetry::ALL {
            let image = repr.transform(symmetry);
            assert!(p.is_represented_by(&image));
            assert!(p.is_represented_by(&image.translate(-17, 4).unwrap()));
            assert_eq!(Polyomino::new(&image), p);
        }
    }
}

#[test]
pub fn normalize_is_idempotent() {
    for p in polyominoes(5).unwrap() {
        for orientation in p.representation().translate(3, -9).unwrap().all_orientations() {
            let once = normalize(orientation.squares());
            let again = normalize(once.to_string().parse::<Signature>().unwrap().squares());

            assert_eq!(once, again);
        }
    }
}

#[test]
pub fn first_found_order_is_stable() {
    let first: Vec<_> = polyominoes(6).unwrap();
    let second: Vec<_> = polyominoes(6).unwrap();

    assert_eq!(first, second);
}
