//! HTTP API module for the workforce engine.
//!
//! This module provides the REST API endpoints for the employee
//! lifecycle, the KPI feedback store, and the aggregated workforce
//! metric views.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    AddMemberRequest, CreateMilestoneRequest, CreateTeamRequest, DeleteFeedbackRequest,
    FeedbackRequest, FlowQuery, HeadcountQuery, HireEmployeeRequest, PromoteRequest,
    RatingEntryRequest, RegisterActorRequest, SalaryAdjustmentRequest, UpdateFeedbackRequest,
    UpdateMilestoneRequest,
};
pub use response::ApiError;
pub use state::AppState;
