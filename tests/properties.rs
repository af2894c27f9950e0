// SPDX-License-Identifier: AGPL-3.0-or-later
//! Property-based tests for contact list generation

use proptest::prelude::*;
use zeebe_contacts::{generate, ClusterSpec, ContactList, ValidationError};

fn namespace() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9-]{0,14}"
}

fn distinct_namespaces() -> impl Strategy<Value = (String, String)> {
    (namespace(), namespace()).prop_filter("namespaces must differ", |(a, b)| a != b)
}

fn valid_size() -> impl Strategy<Value = u32> {
    (2u32..64).prop_map(|half| half * 2)
}

proptest! {
    #[test]
    fn test_entry_count_matches_cluster_size(
        (namespace_a, namespace_b) in distinct_namespaces(),
        release in namespace(),
        size in valid_size()
    ) {
        let list = generate(&namespace_a, &namespace_b, &release, size).unwrap();
        prop_assert_eq!(list.split(',').count(), size as usize);
    }

    #[test]
    fn test_entries_alternate_regions_in_index_order(
        (namespace_a, namespace_b) in distinct_namespaces(),
        release in namespace(),
        size in valid_size()
    ) {
        let spec = ClusterSpec::new(namespace_a.clone(), namespace_b.clone(), release.clone(), size).unwrap();
        let list = ContactList::from_spec(&spec);

        for (position, point) in list.iter().enumerate() {
            let namespace = if position % 2 == 0 { &namespace_a } else { &namespace_b };
            let expected = format!(
                "{release}-zeebe-{}.{release}-zeebe.{namespace}.svc.cluster.local:26502",
                position / 2
            );
            prop_assert_eq!(point.to_string(), expected);
        }
    }

    #[test]
    fn test_no_leading_or_trailing_separator(
        (namespace_a, namespace_b) in distinct_namespaces(),
        release in namespace(),
        size in valid_size()
    ) {
        let list = generate(&namespace_a, &namespace_b, &release, size).unwrap();
        prop_assert!(!list.starts_with(','));
        prop_assert!(!list.ends_with(','));
        prop_assert!(!list.contains(",,"));
    }

    #[test]
    fn test_odd_sizes_rejected(
        (namespace_a, namespace_b) in distinct_namespaces(),
        half in 0u32..64
    ) {
        let size = half * 2 + 1;
        prop_assert_eq!(
            generate(&namespace_a, &namespace_b, "camunda", size),
            Err(ValidationError::OddClusterSize { size })
        );
    }

    #[test]
    fn test_same_namespace_rejected(
        shared in namespace(),
        size in valid_size()
    ) {
        let result = generate(&shared, &shared, "camunda", size);
        let is_duplicate = matches!(result, Err(ValidationError::DuplicateNamespace { .. }));
        prop_assert!(is_duplicate);
    }
}

#[test]
fn test_below_minimum_rejected() {
    for size in [0, 2] {
        assert!(matches!(
            generate("region0", "region1", "camunda", size),
            Err(ValidationError::ClusterTooSmall { minimum: 4, .. })
        ));
    }
}
