#[cfg(test)]
mod tests {
    use sparse_csr::graphs::IdMapBuilder;

    #[test]
    fn test_new_builder_is_empty() {
        let ids = IdMapBuilder::new();
        assert!(ids.is_empty());
        assert_eq!(ids.len(), 0);
        let ids = ids.build();
        assert!(ids.is_empty());
        assert_eq!(ids.to_internal(0), None);
        assert_eq!(ids.to_external(0), None);
    }

    #[test]
    fn test_ids_are_assigned_by_first_appearance() {
        let mut ids = IdMapBuilder::new();
        assert_eq!(ids.assign(1000), 0);
        assert_eq!(ids.assign(-5), 1);
        assert_eq!(ids.assign(1000), 0);
        assert_eq!(ids.assign(7), 2);
        assert_eq!(ids.assign(-5), 1);
        assert_eq!(ids.len(), 3);

        let ids = ids.build();
        assert_eq!(ids.externals(), &[1000, -5, 7]);
        assert_eq!(ids.to_internal(7), Some(2));
        assert_eq!(ids.to_internal(8), None);
    }

    #[test]
    fn test_maps_are_mutual_inverses() {
        let mut builder = IdMapBuilder::new();
        let externals = [i64::MAX, 0, i64::MIN, 42, 1 << 40, -1];
        for &external in externals.iter() {
            builder.assign(external);
        }
        let ids = builder.build();
        for &external in externals.iter() {
            let internal = ids.to_internal(external).unwrap();
            assert_eq!(ids.to_external(internal), Some(external));
        }
        for internal in 0..ids.len() {
            let external = ids.to_external(internal).unwrap();
            assert_eq!(ids.to_internal(external), Some(internal));
        }
    }

    #[test]
    fn test_to_external_out_of_range() {
        let mut builder = IdMapBuilder::new();
        builder.assign(3);
        let ids = builder.build();
        assert_eq!(ids.to_external(0), Some(3));
        assert_eq!(ids.to_external(1), None);
        assert_eq!(ids.to_external(usize::MAX), None);
    }
}
