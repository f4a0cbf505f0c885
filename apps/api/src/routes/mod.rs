pub mod health;

use axum::{routing::get, Router};

use crate::state::AppState;
use crate::stats;
use crate::tracker::{applications, companies, company_questions, contacts, questions, todos};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Statistics API — the time-series endpoint is the interesting one
        .route(
            "/api/v1/stats/timeseries",
            get(stats::handlers::handle_timeseries),
        )
        .route("/api/v1/stats/summary", get(stats::summary::handle_summary))
        .route(
            "/api/v1/stats/stage-percents",
            get(stats::summary::handle_stage_percents),
        )
        // Record keeping
        .route(
            "/api/v1/companies",
            get(companies::list_companies).post(companies::create_company),
        )
        .route(
            "/api/v1/companies/:id",
            get(companies::get_company)
                .put(companies::update_company)
                .delete(companies::delete_company),
        )
        .route(
            "/api/v1/company-questions",
            get(company_questions::list_company_questions)
                .post(company_questions::create_company_question),
        )
        .route(
            "/api/v1/company-questions/:id",
            get(company_questions::get_company_question)
                .put(company_questions::update_company_question)
                .delete(company_questions::delete_company_question),
        )
        .route(
            "/api/v1/contacts",
            get(contacts::list_contacts).post(contacts::create_contact),
        )
        .route(
            "/api/v1/contacts/:id",
            get(contacts::get_contact)
                .put(contacts::update_contact)
                .delete(contacts::delete_contact),
        )
        .route(
            "/api/v1/applications",
            get(applications::list_applications).post(applications::create_application),
        )
        .route(
            "/api/v1/applications/:id",
            get(applications::get_application)
                .put(applications::update_application)
                .delete(applications::delete_application),
        )
        .route(
            "/api/v1/questions",
            get(questions::list_questions).post(questions::create_question),
        )
        .route(
            "/api/v1/questions/:id",
            get(questions::get_question)
                .put(questions::update_question)
                .delete(questions::delete_question),
        )
        .route(
            "/api/v1/todos",
            get(todos::list_todos).post(todos::create_todo),
        )
        .route(
            "/api/v1/todos/:id",
            get(todos::get_todo)
                .put(todos::update_todo)
                .delete(todos::delete_todo),
        )
        .with_state(state)
}
