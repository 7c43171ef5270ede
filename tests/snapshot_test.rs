use ir_cursor_mapping::error::ParseSnapshotError;
use ir_cursor_mapping::snapshot::{Point, Snapshot};

fn snapshot(points: [(u16, u16); 4]) -> Snapshot {
    Snapshot::new(points.map(|(x, y)| Point::new(x, y)))
}

#[test]
fn test_sentinel_is_invalid() {
    assert!(!Snapshot::invalid().is_valid());
    assert!(!Snapshot::invalid_for(511).is_valid_for(511));
    assert!(Snapshot::invalid_for(511).is_valid());
}

#[test]
fn test_partial_sentinel_is_valid() {
    let s = snapshot([(1023, 1023), (1023, 1023), (1023, 1023), (1022, 1023)]);
    assert!(s.is_valid());
    assert!(snapshot([(0, 0); 4]).is_valid());
}

#[test]
fn test_encode() {
    let s = snapshot([(1, 2), (30, 40), (500, 600), (1023, 0)]);
    assert_eq!(s.to_string(), "[(1,2),(30,40),(500,600),(1023,0)]");
    assert_eq!(
        Snapshot::invalid().to_string(),
        "[(1023,1023),(1023,1023),(1023,1023),(1023,1023)]"
    );
}

#[test]
fn test_decode_round_trip() {
    for s in [
        snapshot([(1, 2), (30, 40), (500, 600), (1023, 0)]),
        snapshot([(100, 100), (1000, 100), (100, 900), (1000, 900)]),
        snapshot([(0, 0), (0, 0), (0, 0), (0, 0)]),
        Snapshot::invalid(),
    ] {
        let decoded: Snapshot = s.to_string().parse().unwrap();
        assert_eq!(decoded, s);
    }
}

#[test]
fn test_decode_tolerates_whitespace() {
    let decoded: Snapshot = "  [ (1, 2), (3,4) ,(5 ,6),( 7,8 ) ]\n".parse().unwrap();
    assert_eq!(decoded, snapshot([(1, 2), (3, 4), (5, 6), (7, 8)]));
}

#[test]
fn test_decode_rejects_malformed_input() {
    assert_eq!(
        "(1,2),(3,4),(5,6),(7,8)".parse::<Snapshot>(),
        Err(ParseSnapshotError::MissingBrackets)
    );
    assert_eq!("[]".parse::<Snapshot>(), Err(ParseSnapshotError::WrongPointCount(0)));
    assert_eq!(
        "[(1,2),(3,4),(5,6)]".parse::<Snapshot>(),
        Err(ParseSnapshotError::WrongPointCount(3))
    );
    assert_eq!(
        "[(1,2),(3,4),(5,6),(7,8),(9,10)]".parse::<Snapshot>(),
        Err(ParseSnapshotError::WrongPointCount(5))
    );
    assert!(matches!(
        "[(1,2)(3,4),(5,6),(7,8)]".parse::<Snapshot>(),
        Err(ParseSnapshotError::MalformedPoint(_))
    ));
    assert!(matches!(
        "[(1,2),(3,4),(5,6),(7,8]".parse::<Snapshot>(),
        Err(ParseSnapshotError::MalformedPoint(_))
    ));
    assert!(matches!(
        "[(1,2),(3,x),(5,6),(7,8)]".parse::<Snapshot>(),
        Err(ParseSnapshotError::InvalidCoordinate { .. })
    ));
    assert!(matches!(
        "[(1,2),(3,-4),(5,6),(7,8)]".parse::<Snapshot>(),
        Err(ParseSnapshotError::InvalidCoordinate { .. })
    ));
    assert!(matches!(
        "[(1,2),(3,70000),(5,6),(7,8)]".parse::<Snapshot>(),
        Err(ParseSnapshotError::InvalidCoordinate { .. })
    ));
}
