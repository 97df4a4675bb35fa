//! Static stadium catalog and base-factor table.
//!
//! Plain configuration data loaded at startup. The tables are constant
//! tuples rather than serialized files so the binary is self-contained.

use std::collections::HashMap;

use crate::models::{BaseFactorSet, Stadium};

/// (name, city, state, team code, elevation ft, latitude, longitude)
const STADIUM_TABLE: &[(&str, &str, &str, &str, i32, f64, f64)] = &[
    ("Coors Field", "Denver", "CO", "COL", 5190, 39.7559, -104.9942),
    ("Great American Ball Park", "Cincinnati", "OH", "CIN", 490, 39.0975, -84.5061),
    ("Yankee Stadium", "Bronx", "NY", "NYY", 55, 40.8296, -73.9262),
    ("Fenway Park", "Boston", "MA", "BOS", 20, 42.3467, -71.0972),
    ("Camden Yards", "Baltimore", "MD", "BAL", 130, 39.2840, -76.6218),
    ("Rogers Centre", "Toronto", "ON", "TOR", 250, 43.6414, -79.3894),
    ("Minute Maid Park", "Houston", "TX", "HOU", 50, 29.7570, -95.3551),
    ("Angel Stadium", "Anaheim", "CA", "LAA", 160, 33.8003, -117.8827),
    ("Chase Field", "Phoenix", "AZ", "ARI", 1086, 33.4453, -112.0667),
    ("Wrigley Field", "Chicago", "IL", "CHC", 600, 41.9484, -87.6553),
    ("Truist Park", "Atlanta", "GA", "ATL", 1050, 33.8907, -84.4677),
    ("Citizens Bank Park", "Philadelphia", "PA", "PHI", 60, 39.9061, -75.1665),
    ("Globe Life Field", "Arlington", "TX", "TEX", 545, 32.7473, -97.0815),
    ("Busch Stadium", "St. Louis", "MO", "STL", 465, 38.6226, -90.1928),
    ("Guaranteed Rate Field", "Chicago", "IL", "CWS", 600, 41.8300, -87.6338),
    ("Target Field", "Minneapolis", "MN", "MIN", 815, 44.9817, -93.2777),
    ("Citi Field", "Queens", "NY", "NYM", 20, 40.7571, -73.8458),
    ("Progressive Field", "Cleveland", "OH", "CLE", 650, 41.4959, -81.6852),
    ("T-Mobile Park", "Seattle", "WA", "SEA", 15, 47.5914, -122.3325),
    ("Comerica Park", "Detroit", "MI", "DET", 585, 42.3390, -83.0485),
    ("Tropicana Field", "St. Petersburg", "FL", "TB", 45, 27.7682, -82.6534),
    ("Kauffman Stadium", "Kansas City", "MO", "KC", 750, 39.0517, -94.4803),
    ("Oracle Park", "San Francisco", "CA", "SF", 10, 37.7786, -122.3893),
    ("Petco Park", "San Diego", "CA", "SD", 20, 32.7073, -117.1566),
    ("Marlins Park", "Miami", "FL", "MIA", 10, 25.7781, -80.2197),
    ("Dodger Stadium", "Los Angeles", "CA", "LAD", 515, 34.0739, -118.2400),
    ("PNC Park", "Pittsburgh", "PA", "PIT", 730, 40.4469, -80.0057),
    ("American Family Field", "Milwaukee", "WI", "MIL", 635, 43.0280, -87.9712),
    ("Nationals Park", "Washington", "DC", "WSH", 25, 38.8730, -77.0074),
    ("Oakland Coliseum", "Oakland", "CA", "OAK", 50, 37.7516, -122.2005),
];

/// (team code, HR, 2B, 1B, R) percentage multipliers, 100 = league-neutral
const BASE_FACTOR_TABLE: &[(&str, f64, f64, f64, f64)] = &[
    ("COL", 125.5, 115.2, 106.8, 111.5),
    ("CIN", 112.4, 103.6, 100.2, 103.4),
    ("NYY", 110.3, 98.4, 99.1, 102.7),
    ("BOS", 109.5, 117.8, 102.3, 101.9),
    ("BAL", 108.9, 101.2, 99.6, 101.5),
    ("TOR", 108.2, 102.5, 100.8, 101.2),
    ("HOU", 107.6, 100.9, 99.4, 100.8),
    ("LAD", 104.0, 97.8, 98.2, 98.5),
    ("LAA", 102.3, 98.7, 99.8, 100.3),
    ("MIL", 102.0, 99.1, 99.4, 99.9),
    ("ARI", 101.9, 104.3, 101.1, 100.1),
    ("CHC", 101.5, 99.2, 100.6, 99.8),
    ("ATL", 101.2, 100.4, 99.9, 99.5),
    ("PHI", 100.8, 98.1, 99.2, 99.2),
    ("TEX", 100.5, 99.6, 100.1, 98.9),
    ("WSH", 100.3, 99.5, 99.8, 99.0),
    ("STL", 100.1, 99.8, 100.4, 98.6),
    ("CWS", 99.8, 96.7, 98.8, 98.3),
    ("MIN", 99.5, 101.7, 99.5, 98.0),
    ("NYM", 99.2, 97.3, 98.6, 97.7),
    ("CLE", 98.9, 100.1, 99.7, 97.4),
    ("SEA", 98.6, 95.4, 97.9, 97.1),
    ("DET", 98.3, 102.8, 100.3, 96.8),
    ("TB", 98.0, 97.6, 98.4, 96.5),
    ("KC", 97.7, 104.9, 101.6, 96.2),
    ("PIT", 95.0, 101.3, 100.7, 97.0),
    ("OAK", 92.5, 96.8, 98.5, 95.5),
    ("MIA", 91.9, 99.4, 99.0, 94.8),
    ("SF", 82.5, 98.9, 99.3, 89.4),
    ("SD", 82.2, 96.2, 98.1, 89.1),
];

/// The full stadium catalog in its fixed table order.
pub fn stadiums() -> Vec<Stadium> {
    STADIUM_TABLE
        .iter()
        .map(|&(name, city, state, team, elevation, lat, lon)| {
            Stadium::new(name, city, state, team, elevation, lat, lon)
        })
        .collect()
}

/// Base factor multipliers keyed by team code.
pub fn base_factors() -> HashMap<String, BaseFactorSet> {
    BASE_FACTOR_TABLE
        .iter()
        .map(|&(team, hr, doubles, singles, runs)| {
            (
                team.to_string(),
                BaseFactorSet::new(hr, doubles, singles, runs),
            )
        })
        .collect()
}

/// Look up a team's base factors, defaulting to the neutral set for
/// team codes with no table entry.
pub fn base_factors_for(table: &HashMap<String, BaseFactorSet>, team_code: &str) -> BaseFactorSet {
    table
        .get(team_code)
        .copied()
        .unwrap_or_else(BaseFactorSet::neutral)
}
