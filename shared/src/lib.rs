//! Data models and in-memory stores shared by the portfolio frontend and
//! backend.

pub mod models;
pub mod seed;
pub mod store;

pub use models::{
    CaseStudy, ContentState, DashboardStats, Milestone, OngoingProject, Project, Review,
    SectionStatus,
};
pub use store::{Latency, Resource, ResourceStore, StoreError};
