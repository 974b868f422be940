//! Unit tests for sr-graph.
//!
//! All tests drive `ingest()` with hand-written event streams — no XML, no
//! files.

#[cfg(test)]
mod helpers {
    use crate::FeedEvent;

    /// Three nodes on the equator, one degree of longitude apart.
    pub fn equator_nodes() -> Vec<FeedEvent> {
        vec![
            FeedEvent::NodeDeclared { id: 1, lat: 0.0, lon: 0.0 },
            FeedEvent::NodeDeclared { id: 2, lat: 0.0, lon: 1.0 },
            FeedEvent::NodeDeclared { id: 3, lat: 0.0, lon: 2.0 },
        ]
    }

    /// Bracketed way events: refs then tags, in the given order.
    pub fn way(id: i64, nodes: &[i64], tags: &[(&str, &str)]) -> Vec<FeedEvent> {
        let mut events = vec![FeedEvent::WayStarted { id }];
        events.extend(nodes.iter().map(|&node| FeedEvent::WayNodeRef { node }));
        events.extend(tags.iter().map(|(k, v)| FeedEvent::tag(k, v)));
        events.push(FeedEvent::WayEnded);
        events
    }
}

#[cfg(test)]
mod ingestion {
    use sr_core::WayId;

    use super::helpers::{equator_nodes, way};
    use crate::{DEFAULT_NAME, FeedEvent, GraphError, ingest};

    #[test]
    fn single_way_built() {
        let mut events = equator_nodes();
        events.extend(way(100, &[1, 2, 3], &[("name", "Dover - Calais"), ("route", "ferry")]));

        let graph = ingest(events).unwrap();
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.live_way_count(), 1);

        let (_, w) = graph.live_ways().next().unwrap();
        assert_eq!(w.source_id, 100);
        assert_eq!(w.name, "Dover - Calais");
        assert_eq!(w.nodes.len(), 3);
        // Two one-degree equator hops ≈ 2 × 111.3 km.
        assert!((w.length_m - 222_639.0).abs() < 1_000.0, "got {}", w.length_m);
    }

    #[test]
    fn incidences_registered_per_traversal() {
        let mut events = equator_nodes();
        events.extend(way(100, &[1, 2, 3], &[]));
        events.extend(way(101, &[3, 2], &[]));

        let graph = ingest(events).unwrap();
        let mid = graph.resolve_node(2).unwrap();
        assert_eq!(graph.node(mid).incident, vec![WayId(0), WayId(1)]);
    }

    #[test]
    fn loop_way_appears_once_per_visit() {
        let mut events = equator_nodes();
        events.extend(way(100, &[1, 2, 3, 1], &[]));

        let graph = ingest(events).unwrap();
        let start = graph.resolve_node(1).unwrap();
        assert_eq!(graph.node(start).incident, vec![WayId(0), WayId(0)]);
    }

    #[test]
    fn meta_records_base_date() {
        let mut events = vec![FeedEvent::Meta { base_date: "2012-09-01T12:00:00Z".into() }];
        events.extend(equator_nodes());
        let graph = ingest(events).unwrap();
        assert_eq!(graph.base_date.as_deref(), Some("2012-09-01T12:00:00Z"));
    }

    #[test]
    fn undeclared_node_fails_fast() {
        let events = way(100, &[7], &[]);
        let err = ingest(events).unwrap_err();
        assert_eq!(err, GraphError::UndeclaredNode { way: 100, node: 7 });
    }

    #[test]
    fn empty_way_rejected() {
        let mut events = equator_nodes();
        events.extend(way(100, &[], &[]));
        assert_eq!(ingest(events).unwrap_err(), GraphError::EmptyWay { way: 100 });
    }

    #[test]
    fn bracketing_violations_rejected() {
        let nested = vec![FeedEvent::WayStarted { id: 1 }, FeedEvent::WayStarted { id: 2 }];
        assert_eq!(
            ingest(nested).unwrap_err(),
            GraphError::NestedWay { first: 1, second: 2 }
        );

        let stray = vec![FeedEvent::WayEnded];
        assert!(matches!(ingest(stray).unwrap_err(), GraphError::OutsideWay(_)));

        let truncated = vec![FeedEvent::WayStarted { id: 9 }];
        assert_eq!(ingest(truncated).unwrap_err(), GraphError::TruncatedFeed { way: 9 });
    }

    #[test]
    fn default_name_when_untagged() {
        let mut events = equator_nodes();
        events.extend(way(100, &[1, 2], &[]));
        let graph = ingest(events).unwrap();
        assert_eq!(graph.live_ways().next().unwrap().1.name, DEFAULT_NAME);
    }
}

#[cfg(test)]
mod tag_rules {
    use sr_core::Access;

    use super::helpers::{equator_nodes, way};
    use crate::{GraphError, ingest};

    fn flags_of(tags: &[(&str, &str)]) -> sr_core::AccessFlags {
        let mut events = equator_nodes();
        events.extend(way(100, &[1, 2], tags));
        let graph = ingest(events).unwrap();
        graph.live_ways().next().unwrap().1.flags
    }

    fn name_of(tags: &[(&str, &str)]) -> String {
        let mut events = equator_nodes();
        events.extend(way(100, &[1, 2], tags));
        let graph = ingest(events).unwrap();
        graph.live_ways().next().unwrap().1.name.clone()
    }

    #[test]
    fn name_stripped_of_quotes_and_dashes() {
        assert_eq!(name_of(&[("name", "  \"Staten Island Ferry\"--")]), "Staten Island Ferry");
    }

    #[test]
    fn ref_appends_regardless_of_feed_order() {
        // The upstream contract used to require ref after name; buffering
        // makes both orders equivalent.
        assert_eq!(name_of(&[("name", "Actv"), ("ref", "14")]), "Actv #14");
        assert_eq!(name_of(&[("ref", "14"), ("name", "Actv")]), "Actv #14");
    }

    #[test]
    fn language_name_only_fills_placeholder() {
        assert_eq!(name_of(&[("name:fr", "Calais - Douvres")]), "Calais - Douvres");
        assert_eq!(
            name_of(&[("name:fr", "Calais - Douvres"), ("name", "Dover - Calais")]),
            "Dover - Calais"
        );
    }

    #[test]
    fn name_truncated_to_128_chars() {
        let long = "x".repeat(200);
        let name = name_of(&[("name", &long)]);
        assert_eq!(name.chars().count(), 128);
    }

    #[test]
    fn access_vocabulary() {
        assert_eq!(flags_of(&[("hgv", "yes")]).hgv, Access::Yes);
        assert_eq!(flags_of(&[("hgv", "designated")]).hgv, Access::Yes);
        assert_eq!(flags_of(&[("hgv", "no")]).hgv, Access::No);
        assert_eq!(flags_of(&[("hgv", "private")]).hgv, Access::No);
        assert_eq!(flags_of(&[("hgv", "delivery")]).hgv, Access::Unknown);
        // Numeric values count as an allowance.
        assert_eq!(flags_of(&[("foot", "50")]).foot, Access::Yes);
    }

    #[test]
    fn access_tags_map_to_distinct_flags() {
        let flags = flags_of(&[("motorcar", "yes"), ("motor_vehicle", "no"), ("foot", "yes")]);
        assert_eq!(flags.car, Access::Yes);
        assert_eq!(flags.vehicle, Access::No);
        assert_eq!(flags.foot, Access::Yes);
        assert_eq!(flags.hgv, Access::Unknown);
    }

    #[test]
    fn unknown_access_value_fails_fast() {
        let mut events = equator_nodes();
        events.extend(way(100, &[1, 2], &[("foot", "sometimes")]));
        assert_eq!(
            ingest(events).unwrap_err(),
            GraphError::UnknownAccessValue {
                way: 100,
                key: "foot".into(),
                value: "sometimes".into()
            }
        );
    }

    #[test]
    fn ferry_tourist_and_cruise() {
        assert_eq!(flags_of(&[("ferry", "tourist")]).tourist, Access::Yes);
        assert_eq!(flags_of(&[("ferry", "cruise")]).cruise, Access::Yes);
        // Prefix match covers spelling drift in the wild.
        assert_eq!(flags_of(&[("ferry", "cruiseship")]).cruise, Access::Yes);
    }

    #[test]
    fn ferry_road_class_implies_heavier_traffic() {
        let flags = flags_of(&[("ferry", "primary")]);
        assert_eq!(flags.hgv, Access::Yes);
        assert_eq!(flags.car, Access::Yes);
        assert_eq!(flags.foot, Access::Yes);
    }

    #[test]
    fn ferry_road_class_never_overrides_explicit_no() {
        let flags = flags_of(&[("hgv", "no"), ("ferry", "primary")]);
        assert_eq!(flags.hgv, Access::No, "explicit wins");
        assert_eq!(flags.car, Access::Yes);
    }

    #[test]
    fn ferry_light_class_implies_lighter_traffic() {
        let flags = flags_of(&[("ferry", "express_boat")]);
        assert_eq!(flags.hgv, Access::No);
        assert_eq!(flags.car, Access::No);
        assert_eq!(flags.foot, Access::Yes);

        let kept = flags_of(&[("motorcar", "yes"), ("ferry", "tertiary")]);
        assert_eq!(kept.car, Access::Yes, "explicit wins");
    }

    #[test]
    fn ferry_unrecognized_value_ignored() {
        assert!(flags_of(&[("ferry", "seasonal")]).all_unknown());
    }

    #[test]
    fn route_vocabulary_closed() {
        assert_eq!(flags_of(&[("route", "cruise")]).cruise, Access::Yes);
        assert!(flags_of(&[("route", "ferry")]).all_unknown());

        let mut events = equator_nodes();
        events.extend(way(100, &[1, 2], &[("route", "road")]));
        assert_eq!(
            ingest(events).unwrap_err(),
            GraphError::UnknownRouteType { way: 100, value: "road".into() }
        );
    }
}

#[cfg(test)]
mod graph_ops {
    use sr_core::WayId;

    use super::helpers::{equator_nodes, way};
    use crate::ingest;

    #[test]
    fn remove_way_strips_incidences() {
        let mut events = equator_nodes();
        events.extend(way(100, &[1, 2], &[]));
        events.extend(way(101, &[2, 3], &[]));
        let mut graph = ingest(events).unwrap();

        let removed = graph.remove_way(WayId(0)).unwrap();
        assert_eq!(removed.source_id, 100);
        assert_eq!(graph.live_way_count(), 1);
        assert_eq!(graph.way_slot_count(), 2, "removal tombstones, never shifts");
        assert!(graph.way(WayId(0)).is_none());

        let mid = graph.resolve_node(2).unwrap();
        assert_eq!(graph.node(mid).incident, vec![WayId(1)]);

        // Second removal of the same slot is a no-op.
        assert!(graph.remove_way(WayId(0)).is_none());
    }

    #[test]
    fn recompute_length_matches_path_sum() {
        let mut events = equator_nodes();
        events.extend(way(100, &[1, 2, 3], &[]));
        let mut graph = ingest(events).unwrap();

        // Shrink the way and recompute: length must re-sum, not scale.
        graph.way_mut(WayId(0)).unwrap().nodes.truncate(2);
        graph.recompute_length(WayId(0));

        let w = graph.way(WayId(0)).unwrap();
        let expected = graph.path_length_m(&w.nodes);
        assert!((w.length_m - expected).abs() < 1e-9);
        assert!((w.length_m - 111_319.0).abs() < 500.0);
    }

    #[test]
    fn live_ways_ascending_order() {
        let mut events = equator_nodes();
        for id in 0..4 {
            events.extend(way(200 + id, &[1, 2], &[]));
        }
        let mut graph = ingest(events).unwrap();
        graph.remove_way(WayId(2));

        let ids: Vec<WayId> = graph.live_ways().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![WayId(0), WayId(1), WayId(3)]);
    }
}
