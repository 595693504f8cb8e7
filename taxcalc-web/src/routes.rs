//! HTTP routes for the calculator.

use axum::Router;
use axum::extract::{Form, State};
use axum::response::Html;
use axum::routing::{get, post};
use taxcalc_core::TaxCalculator;
use tower_http::trace::TraceLayer;
use tracing::debug;

use crate::forms::CalculateForm;
use crate::state::AppState;
use crate::views::{IndexView, TaxFigures, render_index};

/// Builds the application router with all routes registered.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/calculate", post(calculate))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// `GET /` renders the empty calculator form.
async fn index() -> Html<String> {
    Html(render_index(&IndexView::empty()))
}

/// `POST /calculate` validates the submission and renders the result.
///
/// Validation failures re-render the form with every message and the
/// submitted values echoed back, still with a 200 response.
async fn calculate(State(state): State<AppState>, Form(form): Form<CalculateForm>) -> Html<String> {
    let view = match form.validate() {
        Ok(incomes) => {
            let total = incomes.total();
            let assessment = TaxCalculator::new(&state.schedule).calculate(total);
            debug!(
                total_income = %total,
                tax = %assessment.tax,
                rate_percent = assessment.rate_percent,
                "calculated tax for submission"
            );
            IndexView::with_figures(
                TaxFigures::new(total, &assessment),
                form.income1,
                form.income2,
            )
        }
        Err(errors) => IndexView::with_errors(errors, form.income1, form.income2),
    };
    Html(render_index(&view))
}
