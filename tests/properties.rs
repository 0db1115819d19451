use proptest::prelude::*;
use simple_vec::SimpleVec;

fn arb_items() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(any::<i32>(), 0..64)
}

proptest! {
    #[test]
    fn sized_and_filled(n in 0usize..200, value in any::<i16>()) {
        let v = SimpleVec::<i16>::with_len(n);
        prop_assert_eq!(v.len(), n);
        prop_assert_eq!(v.capacity(), n);
        prop_assert!(v.iter().all(|x| *x == 0));

        let v = SimpleVec::from_elem(value, n);
        prop_assert_eq!(v.len(), n);
        prop_assert_eq!(v.capacity(), n);
        prop_assert!(v.iter().all(|x| *x == value));
    }

    #[test]
    fn copy_is_independent(items in arb_items(), extra in 0usize..16, poke in any::<i32>()) {
        let mut a = SimpleVec::from(&items[..]);
        a.reserve(items.len() + extra);

        let mut b = a.clone();
        prop_assert_eq!(b.capacity(), a.len());
        b.push(poke);
        if let Some(first) = b.first_mut() {
            *first = first.wrapping_add(1);
        }
        prop_assert_eq!(a.as_slice(), &items[..]);
    }

    #[test]
    fn take_empties_source(items in arb_items()) {
        let mut a = SimpleVec::from(&items[..]);
        let b = a.take();
        prop_assert_eq!(a.len(), 0);
        prop_assert_eq!(a.capacity(), 0);
        prop_assert_eq!(b.as_slice(), &items[..]);
    }

    #[test]
    fn pushes_reallocate_logarithmically(k in 1usize..5000) {
        let mut v = SimpleVec::new();
        let mut reallocations = 0u32;
        let mut cap = v.capacity();
        for i in 0..k {
            v.push(i);
            if v.capacity() != cap {
                reallocations += 1;
                cap = v.capacity();
            }
        }
        prop_assert_eq!(reallocations, usize::BITS - (k - 1).leading_zeros() + 1);
        prop_assert!(v.capacity() < 2 * k);
    }

    #[test]
    fn insert_then_at(items in arb_items(), pos in any::<prop::sample::Index>(), value in any::<i32>()) {
        let mut v = SimpleVec::from(&items[..]);
        let index = pos.index(items.len() + 1);
        v.insert(index, value);

        prop_assert_eq!(v.len(), items.len() + 1);
        prop_assert_eq!(v.at(index), Ok(&value));
        prop_assert_eq!(&v[..index], &items[..index]);
        prop_assert_eq!(&v[index + 1..], &items[index..]);
    }

    #[test]
    fn erase_shifts_left(items in prop::collection::vec(any::<i32>(), 1..64), pos in any::<prop::sample::Index>()) {
        let mut v = SimpleVec::from(&items[..]);
        let index = pos.index(items.len());
        v.erase(index);

        let mut expected = items.clone();
        expected.remove(index);
        prop_assert_eq!(v.as_slice(), &expected[..]);
    }

    #[test]
    fn at_fails_past_len(items in arb_items(), past in 0usize..32) {
        let v = SimpleVec::from(&items[..]);
        prop_assert!(v.at(items.len() + past).is_err());
    }

    #[test]
    fn resize_keeps_prefix(items in arb_items(), new_len in 0usize..128) {
        let mut v = SimpleVec::from(&items[..]);
        v.resize(new_len);

        let kept = items.len().min(new_len);
        prop_assert_eq!(v.len(), new_len);
        prop_assert_eq!(&v[..kept], &items[..kept]);
        prop_assert!(v[kept..].iter().all(|x| *x == 0));
    }

    #[test]
    fn reserve_is_exact_and_never_shrinks(items in arb_items(), request in 0usize..128) {
        let mut v = SimpleVec::from(&items[..]);
        let before = v.capacity();
        v.reserve(request);

        prop_assert_eq!(v.capacity(), before.max(request));
        prop_assert_eq!(v.as_slice(), &items[..]);
    }

    #[test]
    fn order_matches_slices(a in arb_items(), b in arb_items()) {
        let va = SimpleVec::from(&a[..]);
        let vb = SimpleVec::from(&b[..]);
        prop_assert_eq!(va.cmp(&vb), a.cmp(&b));
        prop_assert_eq!(va == vb, a == b);
    }
}
