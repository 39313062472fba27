use dsa::sort::{bubble_sort, quick_sort};

quickcheck::quickcheck! {
    fn quick_sort_agrees_with_std(xs: Vec<i8>) -> bool {
        let mut sorted = xs.clone();
        quick_sort(&mut sorted);

        let mut expected = xs;
        expected.sort_unstable();
        sorted == expected
    }

    fn bubble_sort_agrees_with_std(xs: Vec<i8>) -> bool {
        let mut sorted = xs.clone();
        bubble_sort(&mut sorted);

        let mut expected = xs;
        expected.sort_unstable();
        sorted == expected
    }

    fn sorting_twice_changes_nothing(xs: Vec<i8>) -> bool {
        let mut once = xs;
        quick_sort(&mut once);

        let mut twice = once.clone();
        quick_sort(&mut twice);
        twice == once
    }
}
