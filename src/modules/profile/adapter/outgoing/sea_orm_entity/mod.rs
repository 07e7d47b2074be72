pub mod ads;
pub mod info;
pub mod job_matches;
