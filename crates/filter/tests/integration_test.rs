//! Integration tests for the decade filter core.
//!
//! These tests run catalog-shaped records through the store and service
//! together, the way the CLI wires them.

use catalog::Movie;
use filter::{CatalogStore, FilterError, FilterService};
use std::collections::HashSet;

fn movie(title: &str, year: i32, cast: &[&str], genres: &[&str]) -> Movie {
    Movie {
        title: title.to_string(),
        year,
        cast: cast.iter().map(|s| s.to_string()).collect(),
        genres: genres.iter().map(|s| s.to_string()).collect(),
    }
}

fn create_test_catalog() -> Vec<Movie> {
    vec![
        movie(
            "The Matrix",
            1999,
            &["Keanu Reeves", "Laurence Fishburne"],
            &["Action", "Sci-Fi"],
        ),
        movie(
            "Gladiator",
            2000,
            &["Russell Crowe", "Joaquin Phoenix"],
            &["Action", "Drama"],
        ),
        movie("Up", 2009, &["Ed Asner"], &["Animation", "Adventure"]),
        movie(
            "Inception",
            2010,
            &["Leonardo DiCaprio", "Elliot Page"],
            &["Action", "Sci-Fi"],
        ),
    ]
}

fn create_test_service() -> FilterService {
    let store = CatalogStore::new(create_test_catalog()).unwrap();
    FilterService::new(Some(store)).unwrap()
}

#[test]
fn service_returns_only_movies_inside_the_decade() {
    let service = create_test_service();

    let matched = service.filter(2000).unwrap();

    let titles: HashSet<&str> = matched.iter().map(|m| m.title.as_str()).collect();
    assert_eq!(titles, HashSet::from(["Gladiator", "Up"]));
}

#[test]
fn unrepresented_decade_is_empty_not_an_error() {
    let service = create_test_service();

    let matched = service.filter(1950).unwrap();
    assert!(matched.is_empty());
}

#[test]
fn filtering_twice_yields_identical_sets() {
    let service = create_test_service();

    let first = service.filter(2000).unwrap();
    let second = service.filter(2000).unwrap();
    assert_eq!(first, second);
}

#[test]
fn records_survive_the_scan_intact() {
    let service = create_test_service();

    let matched = service.filter(1990).unwrap();

    let matrix = matched.iter().next().unwrap();
    assert_eq!(matrix.title, "The Matrix");
    assert_eq!(matrix.cast, vec!["Keanu Reeves", "Laurence Fishburne"]);
    assert_eq!(matrix.genres, vec!["Action", "Sci-Fi"]);
}

#[test]
fn pre_floor_decade_is_rejected_with_the_floor_reason() {
    let service = create_test_service();

    let err = service.filter(1890).unwrap_err();
    assert_eq!(
        err,
        FilterError::InvalidDecade {
            year: 1890,
            reason: filter::validator::BEFORE_FLOOR_ERA,
        }
    );
}

#[test]
fn mid_decade_value_is_rejected_with_the_boundary_reason() {
    let service = create_test_service();

    let err = service.filter(2005).unwrap_err();
    assert_eq!(
        err,
        FilterError::InvalidDecade {
            year: 2005,
            reason: filter::validator::NOT_A_DECADE_YEAR,
        }
    );
}

#[test]
fn construction_guards_fire_before_any_query() {
    assert_eq!(
        CatalogStore::new(Vec::new()).unwrap_err(),
        FilterError::EmptyCatalog
    );
    assert_eq!(
        FilterService::new(None).unwrap_err(),
        FilterError::MissingStore
    );
}

#[test]
fn caller_mutation_after_construction_changes_nothing() {
    let mut original = create_test_catalog();
    let store = CatalogStore::new(original.clone()).unwrap();
    let service = FilterService::new(Some(store)).unwrap();

    original.clear();

    assert_eq!(service.filter(2000).unwrap().len(), 2);
}
