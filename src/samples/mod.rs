pub mod bht_data;
pub mod bht_headers;
pub mod conductivities;
pub mod heat_flows;
pub mod intervals;
pub mod models;
pub mod temperatures;
