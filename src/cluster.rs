// SPDX-License-Identifier: AGPL-3.0-or-later
//! Cluster layout and contact list generation
//!
//! A dual-region cluster places half of its brokers in each region's
//! namespace. Brokers are StatefulSet pods, so broker `i` of a release is
//! always reachable at the same headless-service DNS name.

use std::fmt;

use crate::error::ValidationError;

/// Port every broker listens on for cluster-internal traffic
pub const ZEEBE_COMMAND_PORT: u16 = 26502;

/// Smallest cluster that may be split across two regions
pub const MIN_CLUSTER_SIZE: u32 = 4;

/// A validated dual-region cluster layout
///
/// Only [`ClusterSpec::new`] can build one, so holding a `ClusterSpec`
/// means the size is even, at least [`MIN_CLUSTER_SIZE`], and the two
/// namespaces differ.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterSpec {
    namespace_a: String,
    namespace_b: String,
    release: String,
    cluster_size: u32,
}

impl ClusterSpec {
    /// Validate the four inputs of a dual-region layout
    ///
    /// # Arguments
    ///
    /// * `namespace_a` - Namespace of the Camunda installation in region 0
    /// * `namespace_b` - Namespace of the Camunda installation in region 1
    /// * `release` - Helm release name shared by both installations
    /// * `cluster_size` - Total number of brokers across both regions
    pub fn new(
        namespace_a: impl Into<String>,
        namespace_b: impl Into<String>,
        release: impl Into<String>,
        cluster_size: u32,
    ) -> Result<Self, ValidationError> {
        let namespace_a = namespace_a.into();
        let namespace_b = namespace_b.into();
        let release = release.into();

        if namespace_a.is_empty() {
            return Err(ValidationError::EmptyField {
                field: "namespace for region 0",
            });
        }
        if namespace_b.is_empty() {
            return Err(ValidationError::EmptyField {
                field: "namespace for region 1",
            });
        }
        if release.is_empty() {
            return Err(ValidationError::EmptyField {
                field: "Helm release name",
            });
        }

        if cluster_size % 2 != 0 {
            return Err(ValidationError::OddClusterSize { size: cluster_size });
        }
        if cluster_size < MIN_CLUSTER_SIZE {
            return Err(ValidationError::ClusterTooSmall {
                size: cluster_size,
                minimum: MIN_CLUSTER_SIZE,
            });
        }

        if namespace_a == namespace_b {
            return Err(ValidationError::DuplicateNamespace {
                namespace: namespace_a,
            });
        }

        Ok(Self {
            namespace_a,
            namespace_b,
            release,
            cluster_size,
        })
    }

    pub fn namespace_a(&self) -> &str {
        &self.namespace_a
    }

    pub fn namespace_b(&self) -> &str {
        &self.namespace_b
    }

    pub fn release(&self) -> &str {
        &self.release
    }

    pub fn cluster_size(&self) -> u32 {
        self.cluster_size
    }

    /// Number of brokers hosted in each region
    pub fn brokers_per_region(&self) -> u32 {
        self.cluster_size / 2
    }
}

/// One broker address other brokers use to discover the cluster
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactPoint {
    pub host: String,
    pub port: u16,
}

impl ContactPoint {
    /// Address of broker `index` of `release` installed in `namespace`
    pub fn for_broker(release: &str, namespace: &str, index: u32) -> Self {
        Self {
            host: format!(
                "{release}-zeebe-{index}.{release}-zeebe.{namespace}.svc.cluster.local"
            ),
            port: ZEEBE_COMMAND_PORT,
        }
    }
}

impl fmt::Display for ContactPoint {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}:{}", self.host, self.port)
    }
}

/// Ordered contact points of a whole cluster
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactList {
    points: Vec<ContactPoint>,
}

impl ContactList {
    /// Interleave both regions: broker `i` of region 0, then broker `i` of
    /// region 1, for ascending `i`.
    pub fn from_spec(spec: &ClusterSpec) -> Self {
        let points = (0..spec.brokers_per_region())
            .flat_map(|index| {
                [
                    ContactPoint::for_broker(spec.release(), spec.namespace_a(), index),
                    ContactPoint::for_broker(spec.release(), spec.namespace_b(), index),
                ]
            })
            .collect();

        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ContactPoint> {
        self.points.iter()
    }

    pub fn as_slice(&self) -> &[ContactPoint] {
        &self.points
    }
}

impl fmt::Display for ContactList {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, point) in self.points.iter().enumerate() {
            if position > 0 {
                formatter.write_str(",")?;
            }
            write!(formatter, "{point}")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a ContactList {
    type Item = &'a ContactPoint;
    type IntoIter = std::slice::Iter<'a, ContactPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Validate a layout and render its contact list as a comma-separated string
///
/// Nothing is generated when validation fails.
pub fn generate(
    namespace_a: &str,
    namespace_b: &str,
    release: &str,
    cluster_size: u32,
) -> Result<String, ValidationError> {
    let spec = ClusterSpec::new(namespace_a, namespace_b, release, cluster_size)?;
    Ok(ContactList::from_spec(&spec).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_four_brokers() {
        let list = generate("region0", "region1", "camunda", 4).unwrap();
        assert_eq!(
            list,
            "camunda-zeebe-0.camunda-zeebe.region0.svc.cluster.local:26502,\
             camunda-zeebe-0.camunda-zeebe.region1.svc.cluster.local:26502,\
             camunda-zeebe-1.camunda-zeebe.region0.svc.cluster.local:26502,\
             camunda-zeebe-1.camunda-zeebe.region1.svc.cluster.local:26502"
        );
    }

    #[test]
    fn test_generate_starts_with_region_zero_broker_zero() {
        let list = generate("region0", "region1", "camunda", 4).unwrap();
        assert!(list.starts_with(
            "camunda-zeebe-0.camunda-zeebe.region0.svc.cluster.local:26502,\
             camunda-zeebe-0.camunda-zeebe.region1.svc.cluster.local:26502"
        ));
    }

    #[test]
    fn test_generate_eight_brokers_interleaves() {
        let spec = ClusterSpec::new("camunda-primary", "camunda-secondary", "camunda", 8).unwrap();
        let list = ContactList::from_spec(&spec);

        assert_eq!(list.len(), 8);
        for (position, point) in list.iter().enumerate() {
            let index = position / 2;
            let namespace = if position % 2 == 0 {
                "camunda-primary"
            } else {
                "camunda-secondary"
            };
            assert_eq!(
                point.host,
                format!("camunda-zeebe-{index}.camunda-zeebe.{namespace}.svc.cluster.local")
            );
            assert_eq!(point.port, ZEEBE_COMMAND_PORT);
        }
    }

    #[test]
    fn test_odd_cluster_size_rejected() {
        assert_eq!(
            generate("a", "b", "camunda", 5),
            Err(ValidationError::OddClusterSize { size: 5 })
        );
    }

    #[test]
    fn test_small_cluster_rejected() {
        assert_eq!(
            generate("a", "b", "camunda", 2),
            Err(ValidationError::ClusterTooSmall { size: 2, minimum: 4 })
        );
        assert!(matches!(
            generate("a", "b", "camunda", 0),
            Err(ValidationError::ClusterTooSmall { .. })
        ));
    }

    #[test]
    fn test_duplicate_namespace_rejected() {
        assert_eq!(
            generate("prod", "prod", "camunda", 6),
            Err(ValidationError::DuplicateNamespace {
                namespace: "prod".to_string()
            })
        );
    }

    #[test]
    fn test_empty_fields_rejected() {
        assert!(matches!(
            ClusterSpec::new("", "b", "camunda", 4),
            Err(ValidationError::EmptyField { .. })
        ));
        assert!(matches!(
            ClusterSpec::new("a", "", "camunda", 4),
            Err(ValidationError::EmptyField { .. })
        ));
        assert!(matches!(
            ClusterSpec::new("a", "b", "", 4),
            Err(ValidationError::EmptyField { .. })
        ));
    }

    #[test]
    fn test_brokers_per_region() {
        let spec = ClusterSpec::new("a", "b", "camunda", 10).unwrap();
        assert_eq!(spec.brokers_per_region(), 5);
        assert_eq!(spec.cluster_size(), 10);
        assert_eq!(spec.release(), "camunda");
    }

    #[test]
    fn test_contact_point_display() {
        let point = ContactPoint::for_broker("c8", "east", 3);
        assert_eq!(
            point.to_string(),
            "c8-zeebe-3.c8-zeebe.east.svc.cluster.local:26502"
        );
    }
}
