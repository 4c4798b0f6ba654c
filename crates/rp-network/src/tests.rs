//! Unit tests for rp-network.
//!
//! All tests use hand-built networks; no files are read.

#[cfg(test)]
mod helpers {
    use rp_core::{LocationId, NOT_DRIVABLE};
    use crate::{RoadNetwork, RoadNetworkBuilder};

    /// Four locations:
    ///
    ///   1:A  2:B(P)  3:C  4:D
    ///
    /// Roads (drive, walk): A–B (5,10), B–D (X,3), A–C (2,4), C–D (3,2)
    pub fn diamond() -> RoadNetwork {
        let mut b = RoadNetworkBuilder::new();
        b.add_location(LocationId(1), "A", false).unwrap();
        b.add_location(LocationId(2), "B", true).unwrap();
        b.add_location(LocationId(3), "C", false).unwrap();
        b.add_location(LocationId(4), "D", false).unwrap();

        b.add_road(LocationId(1), LocationId(2), 5, 10).unwrap();
        b.add_road(LocationId(2), LocationId(4), NOT_DRIVABLE, 3).unwrap();
        b.add_road(LocationId(1), LocationId(3), 2, 4).unwrap();
        b.add_road(LocationId(3), LocationId(4), 3, 2).unwrap();
        b.build()
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use rp_core::LocationId;
    use crate::{NetworkError, RoadNetworkBuilder};

    #[test]
    fn empty_build() {
        let net = RoadNetworkBuilder::new().build();
        assert_eq!(net.node_count(), 0);
        assert_eq!(net.road_count(), 0);
        assert!(net.is_empty());
    }

    #[test]
    fn add_road_stores_both_directions() {
        let net = super::helpers::diamond();
        assert_eq!(net.node_count(), 4);
        assert_eq!(net.road_count(), 8);
    }

    #[test]
    fn duplicate_id_rejected() {
        let mut b = RoadNetworkBuilder::new();
        b.add_location(LocationId(1), "A", false).unwrap();
        let err = b.add_location(LocationId(1), "Z", false).unwrap_err();
        assert_eq!(err, NetworkError::DuplicateId(LocationId(1)));
    }

    #[test]
    fn duplicate_code_rejected() {
        let mut b = RoadNetworkBuilder::new();
        b.add_location(LocationId(1), "A", false).unwrap();
        let err = b.add_location(LocationId(2), "A", false).unwrap_err();
        assert_eq!(err, NetworkError::DuplicateCode("A".into()));
        // The failed insert leaves no trace.
        assert_eq!(b.node_count(), 1);
    }

    #[test]
    fn road_to_unknown_location_rejected() {
        let mut b = RoadNetworkBuilder::new();
        b.add_location(LocationId(1), "A", false).unwrap();
        let err = b.add_road(LocationId(1), LocationId(9), 1, 1).unwrap_err();
        assert_eq!(err, NetworkError::LocationNotFound(LocationId(9)));
        assert_eq!(b.road_count(), 0);
    }

    #[test]
    fn sentinel_walking_time_rejected() {
        let mut b = RoadNetworkBuilder::new();
        b.add_location(LocationId(1), "A", false).unwrap();
        b.add_location(LocationId(2), "B", false).unwrap();
        let err = b
            .add_road(LocationId(1), LocationId(2), 1, rp_core::NOT_DRIVABLE)
            .unwrap_err();
        assert!(matches!(err, NetworkError::InvalidWalkingTime { .. }));
    }

    #[test]
    fn builder_code_lookup() {
        let mut b = RoadNetworkBuilder::new();
        b.add_location(LocationId(7), "SEVEN", false).unwrap();
        assert_eq!(b.find_by_code("SEVEN").unwrap(), LocationId(7));
        assert!(b.find_by_code("EIGHT").is_err());
    }
}

// ── Lookup ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod lookup {
    use rp_core::LocationId;
    use crate::NetworkError;

    #[test]
    fn network_prints_for_diagnostics() {
        let net = super::helpers::diamond();
        let text = format!("{net:?}");
        assert!(text.starts_with("RoadNetwork"));
        assert!(text.contains("code: \"B\""));
    }

    #[test]
    fn find_by_id_and_code_agree() {
        let net = super::helpers::diamond();
        let by_id = net.find_by_id(LocationId(2)).unwrap();
        let by_code = net.find_by_code("B").unwrap();
        assert_eq!(by_id, by_code);
        assert!(by_id.has_parking);
    }

    #[test]
    fn not_found_is_explicit() {
        let net = super::helpers::diamond();
        assert_eq!(
            net.find_by_id(LocationId(99)).unwrap_err(),
            NetworkError::LocationNotFound(LocationId(99))
        );
        assert_eq!(
            net.find_by_code("nope").unwrap_err(),
            NetworkError::CodeNotFound("nope".into())
        );
    }

    #[test]
    fn parking_locations_filtered() {
        let net = super::helpers::diamond();
        let ids: Vec<_> = net.parking_locations().map(|l| l.id).collect();
        assert_eq!(ids, [LocationId(2)]);
    }

    #[test]
    fn slots_follow_insertion_order() {
        let net = super::helpers::diamond();
        let ids: Vec<_> = net.locations().map(|l| l.id.0).collect();
        assert_eq!(ids, [1, 2, 3, 4]);
        for loc in net.locations() {
            assert_eq!(net.location(loc.idx), loc);
        }
    }
}

// ── Adjacency ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod adjacency {
    use rp_core::{LocationId, TravelMode};

    #[test]
    fn out_roads_keep_insertion_order() {
        let net = super::helpers::diamond();
        let a = net.slot_of(LocationId(1)).unwrap();
        // A gained A→B first, then A→C.
        let targets: Vec<_> = net
            .out_roads(a)
            .map(|r| net.location(net.road(r).to).id.0)
            .collect();
        assert_eq!(targets, [2, 3]);

        let d = net.slot_of(LocationId(4)).unwrap();
        let targets: Vec<_> = net
            .out_roads(d)
            .map(|r| net.location(net.road(r).to).id.0)
            .collect();
        assert_eq!(targets, [2, 3]);
    }

    #[test]
    fn every_out_road_originates_at_its_node() {
        let net = super::helpers::diamond();
        for loc in net.locations() {
            assert_eq!(net.out_roads(loc.idx).count(), 2);
            for r in net.out_roads(loc.idx) {
                assert_eq!(net.road(r).from, loc.idx);
            }
        }
    }

    #[test]
    fn symmetric_costs() {
        let net = super::helpers::diamond();
        for loc in net.locations() {
            for r in net.out_roads(loc.idx) {
                let road = net.road(r);
                let back = net
                    .out_roads(road.to)
                    .map(|b| net.road(b))
                    .find(|b| b.to == road.from)
                    .expect("reverse road exists");
                assert_eq!(road.driving, back.driving);
                assert_eq!(road.walking, back.walking);
            }
        }
    }

    #[test]
    fn not_drivable_road_has_no_driving_cost() {
        let net = super::helpers::diamond();
        let b = net.slot_of(LocationId(2)).unwrap();
        let d = net.slot_of(LocationId(4)).unwrap();
        let road = net
            .out_roads(b)
            .map(|r| net.road(r))
            .find(|r| r.to == d)
            .unwrap();
        assert_eq!(road.cost(TravelMode::Driving), None);
        assert_eq!(road.cost(TravelMode::Walking), Some(3));
    }
}
