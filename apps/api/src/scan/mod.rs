// Resume scan: detailed, job-configurable scoring of one resume against one job,
// persisted through the store.

pub mod handlers;
