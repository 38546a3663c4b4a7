//! Client-side filtering of fetched lists
//!
//! The remote API only serves full lists; searching is a case-insensitive
//! substring match over what was fetched.

use tripline_api::models::{Trip, User};

pub fn filter_trips_by_name(mut trips: Vec<Trip>, query: &str) -> Vec<Trip> {
    let query = query.to_lowercase();
    trips.retain(|trip| trip.trip_name.to_lowercase().contains(&query));
    trips
}

pub fn filter_trips_by_type(mut trips: Vec<Trip>, query: &str) -> Vec<Trip> {
    let query = query.to_lowercase();
    trips.retain(|trip| trip.trip_type.to_lowercase().contains(&query));
    trips
}

pub fn filter_users_by_name(mut users: Vec<User>, query: &str) -> Vec<User> {
    let query = query.to_lowercase();
    users.retain(|user| user.full_name.to_lowercase().contains(&query));
    users
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trips() -> Vec<Trip> {
        serde_json::from_str(
            r#"[
                {"TripID":1,"TripName":"Galilee Day Tour","TripType":"Nature","Description":"d"},
                {"TripID":2,"TripName":"Jerusalem Old City","TripType":"City","Description":"d"},
                {"TripID":3,"TripName":"Dead Sea Escape","TripType":"Nature","Description":"d"}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_name_filter_is_case_insensitive() {
        let found = filter_trips_by_name(trips(), "galilee");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].trip_id, 1);
    }

    #[test]
    fn test_type_filter_matches_substrings() {
        let found = filter_trips_by_type(trips(), "nat");
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn test_empty_query_keeps_everything() {
        assert_eq!(filter_trips_by_name(trips(), "").len(), 3);
    }
}
