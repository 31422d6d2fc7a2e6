//! HTTP request handlers for the workforce engine API.
//!
//! This module contains the handler functions for all API endpoints:
//! actor registration, employee lifecycle, compensation events, teams,
//! feedback, milestones, and the aggregated KPI views.

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use chrono::{NaiveDate, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use crate::analytics::{
    employee_flow, headcount_flow, performance_distribution, team_performance, vital_metrics,
};
use crate::error::EngineError;
use crate::store::{FeedbackSubmission, MilestoneInput};

use super::request::{
    AddMemberRequest, CreateMilestoneRequest, CreateTeamRequest, DeleteFeedbackRequest,
    FeedbackRequest, FlowQuery, HeadcountQuery, HireEmployeeRequest, PromoteRequest,
    RegisterActorRequest, SalaryAdjustmentRequest, UpdateFeedbackRequest, UpdateMilestoneRequest,
};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Largest accepted `window_days` query value (100 years). Values beyond
/// this would overflow the date arithmetic behind the flow window.
const MAX_FLOW_WINDOW_DAYS: i64 = 36_500;
/// Largest accepted `months` query value (10 years). Bounds both the
/// series allocation and the calendar walk-back.
const MAX_HEADCOUNT_FLOW_MONTHS: u32 = 120;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/actors", post(register_actor_handler))
        .route("/employees", post(hire_employee_handler).get(list_employees_handler))
        .route("/employees/:id", get(get_employee_handler))
        .route("/employees/:id/terminate", post(terminate_employee_handler))
        .route("/employees/:id/promote", post(promote_handler))
        .route("/employees/:id/salary-adjustments", post(salary_adjustment_handler))
        .route(
            "/employees/:id/compensation-history",
            get(compensation_history_handler),
        )
        .route(
            "/employees/:id/feedback",
            post(give_feedback_handler).get(list_feedback_handler),
        )
        .route(
            "/feedback/:id",
            put(update_feedback_handler).delete(delete_feedback_handler),
        )
        .route("/teams", post(create_team_handler))
        .route("/teams/:id/members", post(add_member_handler))
        .route("/members/:id/remove", post(remove_member_handler))
        .route("/milestones", post(create_milestone_handler).get(list_milestones_handler))
        .route(
            "/milestones/:id",
            put(update_milestone_handler).delete(delete_milestone_handler),
        )
        .route("/kpis/vital-metrics", get(vital_metrics_handler))
        .route("/kpis/employee-flow", get(employee_flow_handler))
        .route(
            "/kpis/performance-distribution",
            get(performance_distribution_handler),
        )
        .route("/kpis/headcount-flow", get(headcount_flow_handler))
        .route("/kpis/performance-by-team", get(performance_by_team_handler))
        .with_state(state)
}

/// Converts a JSON extraction failure into a 400 response.
fn json_rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    (StatusCode::BAD_REQUEST, Json(error)).into_response()
}

fn engine_error_response(error: EngineError, correlation_id: Uuid) -> Response {
    warn!(correlation_id = %correlation_id, error = %error, "Request failed");
    ApiErrorResponse::from(error).into_response()
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

// =============================================================================
// Actors
// =============================================================================

/// Handler for POST /actors.
async fn register_actor_handler(
    State(state): State<AppState>,
    payload: Result<Json<RegisterActorRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(rejection, correlation_id),
    };

    match state.store().register_actor(request.name, request.role) {
        Ok(actor) => {
            info!(
                correlation_id = %correlation_id,
                actor_id = %actor.id,
                "Actor registered"
            );
            (StatusCode::CREATED, Json(actor)).into_response()
        }
        Err(err) => engine_error_response(err, correlation_id),
    }
}

// =============================================================================
// Employees
// =============================================================================

/// Handler for POST /employees.
async fn hire_employee_handler(
    State(state): State<AppState>,
    payload: Result<Json<HireEmployeeRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(rejection, correlation_id),
    };

    match state.store().hire_employee(request.into()) {
        Ok(employee) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %employee.id,
                "Employee hired"
            );
            (StatusCode::CREATED, Json(employee)).into_response()
        }
        Err(err) => engine_error_response(err, correlation_id),
    }
}

/// Handler for GET /employees.
async fn list_employees_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    match state.store().employees() {
        Ok(employees) => (StatusCode::OK, Json(employees)).into_response(),
        Err(err) => engine_error_response(err, correlation_id),
    }
}

/// Handler for GET /employees/:id.
async fn get_employee_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    match state.store().employee(id) {
        Ok(employee) => (StatusCode::OK, Json(employee)).into_response(),
        Err(err) => engine_error_response(err, correlation_id),
    }
}

/// Handler for POST /employees/:id/terminate.
///
/// Soft termination: the employee record stays in place with terminated
/// status and the exit date set, and all active memberships are closed.
async fn terminate_employee_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    match state.store().terminate_employee(id, today()) {
        Ok(employee) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %employee.id,
                "Employee terminated"
            );
            (StatusCode::OK, Json(employee)).into_response()
        }
        Err(err) => engine_error_response(err, correlation_id),
    }
}

// =============================================================================
// Compensation events
// =============================================================================

/// Handler for POST /employees/:id/promote.
async fn promote_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    payload: Result<Json<PromoteRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(rejection, correlation_id),
    };

    let effective_date = request.effective_date.unwrap_or_else(today);
    match state.store().promote(
        id,
        request.actor_id,
        request.new_role,
        request.new_compensation,
        request.reason,
        effective_date,
    ) {
        Ok(event) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %id,
                event_id = %event.id,
                new_role = %event.new_role,
                "Employee promoted"
            );
            (StatusCode::CREATED, Json(event)).into_response()
        }
        Err(err) => engine_error_response(err, correlation_id),
    }
}

/// Handler for POST /employees/:id/salary-adjustments.
async fn salary_adjustment_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    payload: Result<Json<SalaryAdjustmentRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(rejection, correlation_id),
    };

    let effective_date = request.effective_date.unwrap_or_else(today);
    match state.store().adjust_salary(
        id,
        request.actor_id,
        request.new_compensation,
        request.reason,
        effective_date,
    ) {
        Ok(event) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %id,
                event_id = %event.id,
                "Salary adjusted"
            );
            (StatusCode::CREATED, Json(event)).into_response()
        }
        Err(err) => engine_error_response(err, correlation_id),
    }
}

/// Handler for GET /employees/:id/compensation-history.
async fn compensation_history_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    match state.store().compensation_history(id) {
        Ok(events) => (StatusCode::OK, Json(events)).into_response(),
        Err(err) => engine_error_response(err, correlation_id),
    }
}

// =============================================================================
// Teams
// =============================================================================

/// Handler for POST /teams.
async fn create_team_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateTeamRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(rejection, correlation_id),
    };

    match state.store().create_team(request.into()) {
        Ok(team) => {
            info!(
                correlation_id = %correlation_id,
                team_id = %team.id,
                "Team created"
            );
            (StatusCode::CREATED, Json(team)).into_response()
        }
        Err(err) => engine_error_response(err, correlation_id),
    }
}

/// Handler for POST /teams/:id/members.
async fn add_member_handler(
    State(state): State<AppState>,
    Path(team_id): Path<Uuid>,
    payload: Result<Json<AddMemberRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(rejection, correlation_id),
    };

    match state
        .store()
        .add_member(team_id, request.employee_id, request.responsibility, today())
    {
        Ok(membership) => {
            info!(
                correlation_id = %correlation_id,
                team_id = %team_id,
                employee_id = %membership.employee_id,
                "Member added to team"
            );
            (StatusCode::CREATED, Json(membership)).into_response()
        }
        Err(err) => engine_error_response(err, correlation_id),
    }
}

/// Handler for POST /members/:id/remove.
async fn remove_member_handler(
    State(state): State<AppState>,
    Path(membership_id): Path<Uuid>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    match state.store().remove_member(membership_id, today()) {
        Ok(membership) => {
            info!(
                correlation_id = %correlation_id,
                membership_id = %membership.id,
                "Member removed from team"
            );
            (StatusCode::OK, Json(membership)).into_response()
        }
        Err(err) => engine_error_response(err, correlation_id),
    }
}

// =============================================================================
// Feedback
// =============================================================================

/// Handler for POST /employees/:id/feedback.
async fn give_feedback_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<Uuid>,
    payload: Result<Json<FeedbackRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(rejection, correlation_id),
    };

    match state.store().give_feedback(employee_id, request.into()) {
        Ok(record) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %employee_id,
                feedback_id = %record.id,
                overall_score = %record.overall_score,
                "Feedback recorded"
            );
            (StatusCode::CREATED, Json(record)).into_response()
        }
        Err(err) => engine_error_response(err, correlation_id),
    }
}

/// Handler for GET /employees/:id/feedback.
async fn list_feedback_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<Uuid>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    match state.store().feedback_for(employee_id) {
        Ok(records) => (StatusCode::OK, Json(records)).into_response(),
        Err(err) => engine_error_response(err, correlation_id),
    }
}

/// Handler for PUT /feedback/:id.
async fn update_feedback_handler(
    State(state): State<AppState>,
    Path(feedback_id): Path<Uuid>,
    payload: Result<Json<UpdateFeedbackRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(rejection, correlation_id),
    };

    let actor_id = request.actor_id;
    let submission = FeedbackSubmission {
        giver_id: actor_id,
        description: request.description,
        kind: request.kind,
        overall_score: request.overall_score,
        qualities: request.qualities.into_iter().map(Into::into).collect(),
        defects: request.defects.into_iter().map(Into::into).collect(),
    };

    match state.store().update_feedback(feedback_id, actor_id, submission) {
        Ok(record) => {
            info!(
                correlation_id = %correlation_id,
                feedback_id = %record.id,
                "Feedback updated"
            );
            (StatusCode::OK, Json(record)).into_response()
        }
        Err(err) => engine_error_response(err, correlation_id),
    }
}

/// Handler for DELETE /feedback/:id.
async fn delete_feedback_handler(
    State(state): State<AppState>,
    Path(feedback_id): Path<Uuid>,
    payload: Result<Json<DeleteFeedbackRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(rejection, correlation_id),
    };

    match state.store().delete_feedback(feedback_id, request.actor_id) {
        Ok(()) => {
            info!(
                correlation_id = %correlation_id,
                feedback_id = %feedback_id,
                "Feedback deleted"
            );
            StatusCode::NO_CONTENT.into_response()
        }
        Err(err) => engine_error_response(err, correlation_id),
    }
}

// =============================================================================
// Milestones
// =============================================================================

/// Handler for POST /milestones.
async fn create_milestone_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateMilestoneRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(rejection, correlation_id),
    };

    let created_by = request.created_by;
    let input: MilestoneInput = request.into();
    match state.store().add_milestone(input, created_by) {
        Ok(milestone) => {
            info!(
                correlation_id = %correlation_id,
                milestone_id = %milestone.id,
                "Milestone created"
            );
            (StatusCode::CREATED, Json(milestone)).into_response()
        }
        Err(err) => engine_error_response(err, correlation_id),
    }
}

/// Handler for GET /milestones.
async fn list_milestones_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    match state.store().milestones() {
        Ok(milestones) => (StatusCode::OK, Json(milestones)).into_response(),
        Err(err) => engine_error_response(err, correlation_id),
    }
}

/// Handler for PUT /milestones/:id.
async fn update_milestone_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    payload: Result<Json<UpdateMilestoneRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(rejection, correlation_id),
    };

    match state.store().update_milestone(id, request.into()) {
        Ok(milestone) => {
            info!(
                correlation_id = %correlation_id,
                milestone_id = %milestone.id,
                "Milestone updated"
            );
            (StatusCode::OK, Json(milestone)).into_response()
        }
        Err(err) => engine_error_response(err, correlation_id),
    }
}

/// Handler for DELETE /milestones/:id.
async fn delete_milestone_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    match state.store().delete_milestone(id) {
        Ok(()) => {
            info!(
                correlation_id = %correlation_id,
                milestone_id = %id,
                "Milestone deleted"
            );
            StatusCode::NO_CONTENT.into_response()
        }
        Err(err) => engine_error_response(err, correlation_id),
    }
}

// =============================================================================
// KPI views
// =============================================================================

/// Handler for GET /kpis/vital-metrics.
async fn vital_metrics_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    let snapshot = match state.store().snapshot() {
        Ok(snapshot) => snapshot,
        Err(err) => return engine_error_response(err, correlation_id),
    };

    let metrics = vital_metrics(&snapshot.employees, &snapshot.memberships, today());
    (StatusCode::OK, Json(metrics)).into_response()
}

/// Handler for GET /kpis/employee-flow.
async fn employee_flow_handler(
    State(state): State<AppState>,
    Query(query): Query<FlowQuery>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let window_days = query
        .window_days
        .unwrap_or(state.config().analytics.flow_window_days);
    if window_days <= 0 || window_days > MAX_FLOW_WINDOW_DAYS {
        let error = ApiError::validation_error(format!(
            "window_days must be between 1 and {MAX_FLOW_WINDOW_DAYS}"
        ));
        return (StatusCode::BAD_REQUEST, Json(error)).into_response();
    }

    let snapshot = match state.store().snapshot() {
        Ok(snapshot) => snapshot,
        Err(err) => return engine_error_response(err, correlation_id),
    };

    let links = employee_flow(
        &snapshot.employees,
        &snapshot.memberships,
        &snapshot.events,
        today(),
        window_days,
    );
    (StatusCode::OK, Json(links)).into_response()
}

/// Handler for GET /kpis/performance-distribution.
async fn performance_distribution_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    let snapshot = match state.store().snapshot() {
        Ok(snapshot) => snapshot,
        Err(err) => return engine_error_response(err, correlation_id),
    };

    let distribution = performance_distribution(&snapshot.employees);
    (StatusCode::OK, Json(distribution)).into_response()
}

/// Handler for GET /kpis/headcount-flow.
async fn headcount_flow_handler(
    State(state): State<AppState>,
    Query(query): Query<HeadcountQuery>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let months = query
        .months
        .unwrap_or(state.config().analytics.headcount_flow_months);
    if months == 0 || months > MAX_HEADCOUNT_FLOW_MONTHS {
        let error = ApiError::validation_error(format!(
            "months must be between 1 and {MAX_HEADCOUNT_FLOW_MONTHS}"
        ));
        return (StatusCode::BAD_REQUEST, Json(error)).into_response();
    }

    let snapshot = match state.store().snapshot() {
        Ok(snapshot) => snapshot,
        Err(err) => return engine_error_response(err, correlation_id),
    };

    let series = headcount_flow(&snapshot.memberships, today(), months);
    (StatusCode::OK, Json(series)).into_response()
}

/// Handler for GET /kpis/performance-by-team.
async fn performance_by_team_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    let snapshot = match state.store().snapshot() {
        Ok(snapshot) => snapshot,
        Err(err) => return engine_error_response(err, correlation_id),
    };

    let rankings = team_performance(
        &snapshot.teams,
        &snapshot.memberships,
        &snapshot.employees,
    );
    (StatusCode::OK, Json(rankings)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::models::{ActorRole, Employee};
    use crate::store::HrStore;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        AppState::new(HrStore::new(), EngineConfig::default())
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn json_request(method: &str, uri: &str, body: String) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_api_001_hire_employee_returns_201() {
        let router = create_router(create_test_state());

        let body = r#"{
            "name": "Ana Souza",
            "role": "Engineer",
            "compensation": "2500.50",
            "entry_date": "2025-01-15"
        }"#;

        let response = router
            .oneshot(json_request("POST", "/employees", body.to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let json = body_json(response).await;
        let employee: Employee = serde_json::from_value(json).unwrap();
        assert_eq!(employee.name, "Ana Souza");
        assert_eq!(employee.compensation, Decimal::from_str("2500.50").unwrap());
        assert!(employee.average_score.is_none());
    }

    #[tokio::test]
    async fn test_api_002_malformed_json_returns_400() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(json_request("POST", "/employees", "{invalid json".to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["code"], "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_api_003_missing_field_returns_400() {
        let router = create_router(create_test_state());

        // missing `compensation` and `entry_date`
        let body = r#"{"name": "Ana Souza", "role": "Engineer"}"#;
        let response = router
            .oneshot(json_request("POST", "/employees", body.to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        let message = json["message"].as_str().unwrap();
        assert!(
            message.contains("missing field"),
            "expected missing field message, got: {message}"
        );
    }

    #[tokio::test]
    async fn test_api_004_unknown_employee_returns_404() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(format!("/employees/{}", Uuid::new_v4()))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert_eq!(json["code"], "EMPLOYEE_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_api_005_out_of_range_score_returns_400() {
        let state = create_test_state();
        let giver = state
            .store()
            .register_actor("Marina Costa".to_string(), ActorRole::Manager)
            .unwrap();
        let employee = state
            .store()
            .hire_employee(crate::store::NewEmployee {
                name: "Ana Souza".to_string(),
                role: "Engineer".to_string(),
                compensation: Decimal::from(5000),
                entry_date: chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            })
            .unwrap();
        let router = create_router(state);

        let body = format!(
            r#"{{
                "giver_id": "{}",
                "description": "Too generous",
                "kind": "general",
                "overall_score": "5.5"
            }}"#,
            giver.id
        );

        let response = router
            .oneshot(json_request(
                "POST",
                &format!("/employees/{}/feedback", employee.id),
                body,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["code"], "INVALID_SCORE");
    }

    #[tokio::test]
    async fn test_api_006_kpi_endpoints_work_on_empty_store() {
        let router = create_router(create_test_state());

        for uri in [
            "/kpis/vital-metrics",
            "/kpis/employee-flow",
            "/kpis/performance-distribution",
            "/kpis/headcount-flow",
            "/kpis/performance-by-team",
        ] {
            let response = router
                .clone()
                .oneshot(
                    Request::builder()
                        .method("GET")
                        .uri(uri)
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK, "endpoint {uri}");
        }
    }

    #[tokio::test]
    async fn test_api_007_headcount_flow_rejects_zero_months() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/kpis/headcount-flow?months=0")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_api_008_employee_flow_rejects_oversized_window() {
        let router = create_router(create_test_state());

        // i64::MAX days would overflow the date arithmetic behind the window
        let response = router
            .clone()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(format!("/kpis/employee-flow?window_days={}", i64::MAX))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["code"], "VALIDATION_ERROR");

        // the largest accepted value still works
        let response = router
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(format!(
                        "/kpis/employee-flow?window_days={MAX_FLOW_WINDOW_DAYS}"
                    ))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_api_009_headcount_flow_rejects_oversized_months() {
        let router = create_router(create_test_state());

        // a huge month count would walk the calendar below its minimum year
        let response = router
            .clone()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/kpis/headcount-flow?months=50000000")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["code"], "VALIDATION_ERROR");

        // the largest accepted value still works
        let response = router
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(format!(
                        "/kpis/headcount-flow?months={MAX_HEADCOUNT_FLOW_MONTHS}"
                    ))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(
            json.as_array().unwrap().len(),
            MAX_HEADCOUNT_FLOW_MONTHS as usize
        );
    }
}
