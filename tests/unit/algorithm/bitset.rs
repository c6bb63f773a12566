//! Tests for the module option bitset

#[cfg(test)]
mod tests {
    use socketwfc::algorithm::bitset::OptionSet;

    // Tests construction and capacity bounds
    // Verified by ignoring the capacity check in insert
    #[test]
    fn test_construction_and_bounds() {
        let mut set = OptionSet::new(5);
        assert!(set.is_empty());
        assert_eq!(set.capacity(), 5);

        assert!(set.insert(4));
        assert!(!set.insert(5));
        assert!(set.contains(4));
        assert!(!set.contains(5));
        assert!(!set.contains(100));
        assert_eq!(set.count(), 1);

        let full = OptionSet::all(5);
        assert_eq!(full.count(), 5);
        assert_eq!(OptionSet::single(5, 2).to_vec(), vec![2]);
    }

    // Tests intersection and union
    // Verified by swapping the operators in intersect_with and union_with
    #[test]
    fn test_set_operations() {
        let mut a = OptionSet::from_indices(&[0, 1, 2], 6);
        let b = OptionSet::from_indices(&[1, 2, 5], 6);

        a.intersect_with(&b);
        assert_eq!(a.to_vec(), vec![1, 2]);

        a.union_with(&OptionSet::single(6, 4));
        assert_eq!(a.to_vec(), vec![1, 2, 4]);

        a.remove(1);
        a.remove(9);
        assert_eq!(a.to_vec(), vec![2, 4]);

        a.clear();
        assert!(a.is_empty());
        assert_eq!(a.capacity(), 6);
    }

    // Tests ordered iteration and positional lookup
    // Verified by iterating zero bits instead of one bits
    #[test]
    fn test_iteration_and_nth() {
        let set = OptionSet::from_indices(&[7, 3, 9, 3], 10);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![3, 7, 9]);
        assert_eq!(set.nth(0), Some(3));
        assert_eq!(set.nth(2), Some(9));
        assert_eq!(set.nth(3), None);
    }

    // Tests zero-capacity sets
    // Verified by allocating one bit for empty sets
    #[test]
    fn test_zero_capacity() {
        let set = OptionSet::all(0);
        assert!(set.is_empty());
        assert_eq!(set.count(), 0);
        assert_eq!(set.nth(0), None);
    }

    // Tests the display format
    // Verified by printing the capacity instead of the count
    #[test]
    fn test_display() {
        let set = OptionSet::from_indices(&[1, 3], 8);
        assert_eq!(set.to_string(), "OptionSet(2 modules: [1, 3])");
    }
}
