// Unit tests for medmatch

use medmatch::{
    distance_km, page, Coordinate, Facility, FacilityStatus, FilterCriteria, RankedResult,
    Ranker, ResultCache, SortKey,
};
use std::sync::Arc;

fn create_facility(id: &str, name: &str, lat: f64, lon: f64, rating: Option<f64>) -> Facility {
    Facility {
        id: id.to_string(),
        name: name.to_string(),
        address: format!("{} Healthcare Blvd", name),
        phone_number: None,
        coordinate: Some(Coordinate::new(lat, lon).unwrap()),
        status: FacilityStatus::Open,
        services: vec!["Emergency".to_string()],
        rating,
    }
}

fn create_ranker() -> Ranker {
    Ranker::new(Arc::new(ResultCache::new(1_000, 300)))
}

#[test]
fn test_distance_symmetry_across_sample_points() {
    let points = [
        Coordinate::new(0.0, 0.0).unwrap(),
        Coordinate::new(40.7128, -74.0060).unwrap(),
        Coordinate::new(-33.8688, 151.2093).unwrap(),
        Coordinate::new(90.0, 180.0).unwrap(),
        Coordinate::new(51.5074, -0.1278).unwrap(),
    ];

    for a in &points {
        for b in &points {
            let ab = distance_km(a, b).unwrap();
            let ba = distance_km(b, a).unwrap();
            assert!((ab - ba).abs() < 1e-6, "asymmetric: {} vs {}", ab, ba);
            assert!(ab >= 0.0);
        }
        assert_eq!(distance_km(a, a).unwrap(), 0.0);
    }
}

#[test]
fn test_equator_degree_scenario() {
    // Two facilities at (0,0) and (0,1), user at the origin: the second is
    // ~111.19 km away and sorts after the first.
    let ranker = create_ranker();
    let facilities = vec![
        create_facility("2", "Riverside Medical Center", 0.0, 1.0, None),
        create_facility("1", "City General Hospital", 0.0, 0.0, None),
    ];
    let user = Coordinate::new(0.0, 0.0).unwrap();

    let results = ranker
        .rank(&facilities, Some(&user), &FilterCriteria::default(), 1)
        .unwrap();

    assert_eq!(results[0].facility.id, "1");
    assert_eq!(results[1].facility.id, "2");
    let d = results[1].distance_km.unwrap();
    assert!((d - 111.19).abs() < 0.5, "expected ~111.19km, got {}", d);
}

#[test]
fn test_every_output_satisfies_active_filters() {
    let ranker = create_ranker();
    let user = Coordinate::new(0.0, 0.0).unwrap();

    let mut facilities: Vec<Facility> = (0..30)
        .map(|i| {
            create_facility(
                &i.to_string(),
                if i % 2 == 0 { "General Hospital" } else { "Medical Center" },
                (i as f64) * 0.05,
                0.0,
                Some(3.0 + (i % 5) as f64 * 0.4),
            )
        })
        .collect();
    for (i, facility) in facilities.iter_mut().enumerate() {
        if i % 3 == 0 {
            facility.status = FacilityStatus::Closed;
        }
        if i % 4 == 0 {
            facility.services = vec!["Cardiology".to_string()];
        }
    }

    let criteria = FilterCriteria {
        search: "general".to_string(),
        required_services: vec!["Cardiology".to_string()],
        open_only: true,
        sort_by: SortKey::Distance,
        radius_cap_km: Some(60.0),
    };

    let results = ranker.rank(&facilities, Some(&user), &criteria, 1).unwrap();
    for result in &results {
        assert!(result.distance_km.unwrap() <= 60.0);
        assert!(result.facility.name.to_lowercase().contains("general"));
        assert!(result.facility.services.contains(&"Cardiology".to_string()));
        assert!(result.facility.status.is_open());
    }

    // Deterministic ordering for identical inputs
    let again = ranker.rank(&facilities, Some(&user), &criteria, 1).unwrap();
    assert_eq!(results, again);
}

#[test]
fn test_rating_sort_is_descending() {
    let ranker = create_ranker();
    let user = Coordinate::new(0.0, 0.0).unwrap();
    let facilities = vec![
        create_facility("1", "Alpha Hospital", 0.0, 0.1, Some(4.2)),
        create_facility("2", "Beta Hospital", 0.0, 0.2, Some(4.9)),
        create_facility("3", "Gamma Hospital", 0.0, 0.3, Some(4.5)),
    ];
    let criteria = FilterCriteria {
        sort_by: SortKey::Rating,
        ..FilterCriteria::default()
    };

    let results = ranker.rank(&facilities, Some(&user), &criteria, 1).unwrap();
    let ratings: Vec<f64> = results
        .iter()
        .map(|r| r.facility.rating.unwrap())
        .collect();
    assert_eq!(ratings, vec![4.9, 4.5, 4.2]);
}

#[test]
fn test_pagination_reconstructs_without_gaps_or_duplicates() {
    let ranker = create_ranker();
    let user = Coordinate::new(0.0, 0.0).unwrap();
    let facilities: Vec<Facility> = (0..20)
        .map(|i| {
            create_facility(
                &i.to_string(),
                "Community Hospital",
                (i as f64) * 0.01,
                0.0,
                None,
            )
        })
        .collect();

    let ranked = ranker
        .rank(&facilities, Some(&user), &FilterCriteria::default(), 1)
        .unwrap();

    for page_size in [1usize, 3, 6, 7, 20, 25] {
        let mut reassembled: Vec<RankedResult> = Vec::new();
        let mut number = 1;
        loop {
            let window = page(&ranked, page_size, number).unwrap();
            if window.is_empty() {
                break;
            }
            assert!(window.len() <= page_size);
            reassembled.extend(window);
            number += 1;
        }
        assert_eq!(reassembled, ranked, "page_size {} broke the list", page_size);
    }
}
