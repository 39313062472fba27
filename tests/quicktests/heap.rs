use dsa::heap::Heap;

quickcheck::quickcheck! {
    fn min_heap_drains_ascending(xs: Vec<i8>) -> bool {
        let mut heap = Heap::min();
        for x in &xs {
            heap.push(*x);
        }

        let mut drained = Vec::with_capacity(xs.len());
        while let Some(x) = heap.pop() {
            drained.push(x);
        }

        let mut expected = xs;
        expected.sort_unstable();
        drained == expected
    }

    fn max_heap_drains_descending(xs: Vec<i8>) -> bool {
        let mut heap = Heap::max();
        for x in &xs {
            heap.push(*x);
        }

        let mut drained = Vec::with_capacity(xs.len());
        while let Some(x) = heap.pop() {
            drained.push(x);
        }

        let mut expected = xs;
        expected.sort_unstable_by(|a, b| b.cmp(a));
        drained == expected
    }

    /// The root is always the smallest element still in the heap, even with
    /// pushes and pops interleaved.
    fn min_heap_peek_tracks_the_minimum(xs: Vec<i8>, pops: usize) -> bool {
        let mut heap = Heap::min();
        let mut model = Vec::new();

        for x in &xs {
            heap.push(*x);
            model.push(*x);

            assert_eq!(heap.peek(), model.iter().min());
        }

        for _ in 0..pops % (xs.len() + 1) {
            let popped = heap.pop().unwrap();
            let pos = model.iter().position(|x| *x == popped).unwrap();
            model.swap_remove(pos);

            assert_eq!(heap.peek(), model.iter().min());
        }

        heap.len() == model.len()
    }
}
