use dsa::search::{binary_search, linear_search};

quickcheck::quickcheck! {
    fn binary_search_agrees_with_contains(xs: Vec<i8>, probes: Vec<i8>) -> bool {
        let mut xs = xs;
        xs.sort_unstable();

        probes
            .iter()
            .all(|p| binary_search(&xs, p) == xs.contains(p))
    }

    fn binary_search_finds_every_member(xs: Vec<i8>) -> bool {
        let mut xs = xs;
        xs.sort_unstable();

        xs.iter().all(|x| binary_search(&xs, x))
    }

    fn linear_search_agrees_with_contains(xs: Vec<i8>, probes: Vec<i8>) -> bool {
        probes
            .iter()
            .all(|p| linear_search(&xs, p) == xs.contains(p))
    }
}
