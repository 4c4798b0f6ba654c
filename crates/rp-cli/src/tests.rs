//! Unit tests for the route-planner binary.

#[cfg(test)]
mod menu {
    use rp_planner::RequestKind;

    use crate::menu::Choice;

    #[test]
    fn numbered_choices() {
        assert_eq!(Choice::parse("1"), Some(Choice::Plan(RequestKind::Driving)));
        assert_eq!(Choice::parse("2"), Some(Choice::Plan(RequestKind::Restricted)));
        assert_eq!(Choice::parse(" 3\n"), Some(Choice::Plan(RequestKind::DrivingWalking)));
        assert_eq!(Choice::parse("4"), Some(Choice::Exit));
    }

    #[test]
    fn anything_else_is_invalid() {
        assert_eq!(Choice::parse(""), None);
        assert_eq!(Choice::parse("5"), None);
        assert_eq!(Choice::parse("one"), None);
    }
}

#[cfg(test)]
mod args {
    use clap::Parser;

    use crate::Args;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["route-planner"]).unwrap();
        assert_eq!(args.locations.to_str(), Some("Locations.csv"));
        assert_eq!(args.output.to_str(), Some("output.txt"));
        assert!(!args.once);

        let config = args.planner_config();
        assert_eq!(config.suggestion_limit, 2);
        assert!(config.block_driven_edges_for_walk);
    }

    #[test]
    fn flags_map_to_config() {
        let args = Args::try_parse_from([
            "route-planner",
            "--suggestions",
            "5",
            "--allow-walk-on-driven-roads",
            "--once",
        ])
        .unwrap();
        assert!(args.once);

        let config = args.planner_config();
        assert_eq!(config.suggestion_limit, 5);
        assert!(!config.block_driven_edges_for_walk);
    }

    #[test]
    fn bad_suggestion_count_rejected() {
        assert!(Args::try_parse_from(["route-planner", "--suggestions", "many"]).is_err());
    }
}

#[cfg(test)]
mod run {
    use std::io::Cursor;

    use rp_io::{detect_kind, load_network_readers};
    use rp_network::RoadNetwork;
    use rp_planner::{PlannerConfig, RequestKind, RoutePlanner};

    use crate::run_request;

    const LOCATIONS_CSV: &str = "\
Location,Id,Code,Parking
Alpha,1,A,0
Bravo,2,B,1
Charlie,3,C,0
Delta,4,D,0
";

    const DISTANCES_CSV: &str = "\
Location1,Location2,Driving,Walking
A,B,5,10
B,D,X,3
A,C,2,4
C,D,3,2
";

    fn sample() -> RoadNetwork {
        load_network_readers(Cursor::new(LOCATIONS_CSV), Cursor::new(DISTANCES_CSV)).unwrap()
    }

    #[test]
    fn one_shot_driving_walking() {
        let net = sample();
        let planner = RoutePlanner::new(&net, PlannerConfig::default());
        let text = "Mode:driving-walking\nSource:1\nDestination:4\nMaxWalkTime:5\n";

        let dir = tempfile::tempdir().expect("create temp dir");
        let output = dir.path().join("output.txt");
        run_request(&planner, text, detect_kind(text).unwrap(), &output).unwrap();

        let written = std::fs::read_to_string(&output).unwrap();
        assert!(written.contains("ParkingNode:2\n"));
        assert!(written.contains("TotalTime:8\n"));
    }

    #[test]
    fn unknown_source_fails_without_writing() {
        let net = sample();
        let planner = RoutePlanner::new(&net, PlannerConfig::default());

        let dir = tempfile::tempdir().expect("create temp dir");
        let output = dir.path().join("output.txt");
        let text = "Source:9\nDestination:4\n";
        let result = run_request(&planner, text, RequestKind::Driving, &output);

        assert!(result.is_err());
        assert!(!output.exists());
    }
}
