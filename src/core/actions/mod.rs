pub mod sample_region;
