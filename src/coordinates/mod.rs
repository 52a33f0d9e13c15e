pub mod geodetic;
