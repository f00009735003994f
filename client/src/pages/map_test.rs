use super::*;

#[test]
fn landmarks_legend_lists_every_point_once() {
    let lines = legend(MapLayout::Landmarks);
    assert_eq!(lines.len(), POINTS_OF_INTEREST.len());
    for poi in &POINTS_OF_INTEREST {
        assert_eq!(lines.iter().filter(|l| l.starts_with(poi.name)).count(), 1, "{}", poi.name);
    }
}

#[test]
fn legend_formats_coordinates_to_four_places() {
    assert_eq!(legend(MapLayout::Landmarks)[0], "Tower of London (51.5081, -0.0759)");
}

#[test]
fn greeting_has_no_legend() {
    assert!(legend(MapLayout::Greeting).is_empty());
}
