use dsa::list::DoublyLinkedList;
use dsa::queue::Queue;
use dsa::stack::Stack;

quickcheck::quickcheck! {
    fn stack_pops_in_reverse_push_order(xs: Vec<i8>) -> bool {
        let mut stack = Stack::new();
        for x in &xs {
            stack.push(*x);
        }

        let mut popped = Vec::with_capacity(xs.len());
        while let Some(x) = stack.pop() {
            popped.push(x);
        }
        popped.reverse();

        popped == xs && stack.is_empty()
    }

    fn queue_dequeues_in_enqueue_order(xs: Vec<i8>) -> bool {
        let mut queue = Queue::new();
        for x in &xs {
            queue.enqueue(*x);
        }

        let mut dequeued = Vec::with_capacity(xs.len());
        while let Some(x) = queue.dequeue() {
            dequeued.push(x);
        }

        dequeued == xs && queue.is_empty()
    }

    /// Draining a queue and refilling it must behave like a fresh queue.
    /// Exercises the internal back pointer reset on the last dequeue.
    fn queue_survives_draining_and_refilling(xs: Vec<i8>, ys: Vec<i8>) -> bool {
        let mut queue = Queue::new();
        for x in &xs {
            queue.enqueue(*x);
        }
        while queue.dequeue().is_some() {}

        for y in &ys {
            queue.enqueue(*y);
        }

        let mut dequeued = Vec::with_capacity(ys.len());
        while let Some(y) = queue.dequeue() {
            dequeued.push(y);
        }

        dequeued == ys
    }

    fn list_matches_a_vec_under_random_insert_at(values: Vec<(i8, usize)>) -> bool {
        let mut list = DoublyLinkedList::new();
        let mut model = Vec::new();

        for (value, index) in values {
            let index = index % (model.len() + 1);
            list.insert_at(value, index).unwrap();
            model.insert(index, value);
        }

        list.len() == model.len() && list.iter().eq(model.iter())
    }

    fn list_matches_a_vec_under_random_remove_at(xs: Vec<i8>, indices: Vec<usize>) -> bool {
        let mut list = DoublyLinkedList::new();
        let mut model = Vec::new();
        for x in xs {
            list.append(x);
            model.push(x);
        }

        for index in indices {
            if model.is_empty() {
                break;
            }
            let index = index % model.len();
            assert_eq!(list.remove_at(index), Ok(model.remove(index)));
        }

        list.iter().eq(model.iter())
    }

    fn list_get_agrees_with_indexing(xs: Vec<i8>) -> bool {
        let mut list = DoublyLinkedList::new();
        for x in &xs {
            list.append(*x);
        }

        (0..xs.len()).all(|i| list.get(i) == Ok(&xs[i])) && list.get(xs.len()).is_err()
    }
}
