mod common;
mod desk;
mod metrics;
mod stages;
